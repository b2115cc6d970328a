use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Run `f` once after `ms` milliseconds.
///
/// Fire-and-forget: the timer cannot be cancelled once armed, so `f` must
/// tolerate running against state that changed in the meantime.
pub fn after(ms: i32, f: impl FnOnce() + 'static) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    if let Err(e) =
        win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
    {
        log::warn!("Failed to arm {ms}ms timer: {e:?}");
    }
}

/// Suspend the current task for `ms` milliseconds via a setTimeout-backed
/// promise.
pub async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let Some(win) = web_sys::window() else {
            let _ = resolve.call0(&JsValue::NULL);
            return;
        };
        let cb = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
