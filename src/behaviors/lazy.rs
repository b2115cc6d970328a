//! Viewport-driven image fade-in.

use std::cell::RefCell;

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::dom;
use crate::timers;

/// Observation starts slightly before the image enters the viewport.
const ROOT_MARGIN: &str = "50px";

thread_local! {
    // Held for the page lifetime so the observer is never collected while
    // images are still pending.
    static IMAGE_OBSERVER: RefCell<Option<IntersectionObserver>> = RefCell::new(None);
}

fn observer_supported() -> bool {
    let Some(win) = dom::window() else {
        return false;
    };
    Reflect::has(win.as_ref(), &"IntersectionObserver".into()).unwrap_or(false)
}

/// Whether the forced-visibility fallback still applies to an image with
/// this inline opacity.
fn still_hidden(inline_opacity: &str) -> bool {
    inline_opacity == "0"
}

/// Observe every `loading="lazy"` image and fade it in as it approaches the
/// viewport. Without observer support all images are shown immediately.
pub fn install(doc: &Document, fallback_ms: i32) {
    let images: Vec<HtmlImageElement> = dom::query_all(doc, r#"img[loading="lazy"]"#)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlImageElement>().ok())
        .collect();
    if images.is_empty() {
        return;
    }

    if !observer_supported() {
        for img in &images {
            dom::set_opacity(img, "1");
        }
        return;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let Ok(img) = entry.target().dyn_into::<HtmlImageElement>() else {
                    continue;
                };
                reveal(&img, fallback_ms);
                observer.unobserve(&img);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(ROOT_MARGIN);
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("IntersectionObserver rejected: {e:?}");
                for img in &images {
                    dom::set_opacity(img, "1");
                }
                return;
            }
        };
    callback.forget();

    for img in &images {
        // Cached images may be complete before observation starts.
        if img.complete() {
            dom::set_opacity(img, "1");
        }
        observer.observe(img);
    }

    IMAGE_OBSERVER.with(|slot| *slot.borrow_mut() = Some(observer));
}

/// Fade one image in: hide, arm one-shot load/error handlers, and force
/// visibility after `fallback_ms` in case neither event ever fires.
fn reveal(img: &HtmlImageElement, fallback_ms: i32) {
    if img.complete() {
        dom::set_opacity(img, "1");
        return;
    }
    dom::set_opacity(img, "0");
    let _ = img.style().set_property("transition", "opacity 0.3s ease");

    {
        let img2 = img.clone();
        dom::listen_once(img, "load", move |_| dom::set_opacity(&img2, "1"));
    }
    {
        let img2 = img.clone();
        dom::listen_once(img, "error", move |_| {
            log::warn!("Image failed to load: {}", img2.src());
            dom::set_opacity(&img2, "1");
        });
    }
    let img2 = img.clone();
    timers::after(fallback_ms, move || {
        if still_hidden(&dom::inline_opacity(&img2)) {
            dom::set_opacity(&img2, "1");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_only_fires_while_hidden() {
        assert!(still_hidden("0"));
        assert!(!still_hidden("1"));
        assert!(!still_hidden("0.5"));
        assert!(!still_hidden(""));
    }
}
