//! Thin helpers over web-sys: element lookup, event listeners, readiness.
//!
//! Every listener registered here lives for the rest of the page, so the
//! closures are intentionally leaked with `forget`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, HtmlElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// All elements matching `selector`, empty when the selector is invalid.
pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = doc.query_selector_all(selector) else {
        log::warn!("Invalid selector: {selector}");
        return Vec::new();
    };
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            out.push(el);
        }
    }
    out
}

/// First element matching `selector` under `root`, or None.
pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// First element matching `selector` in the whole document, or None.
pub fn query_doc(doc: &Document, selector: &str) -> Option<Element> {
    doc.query_selector(selector).ok().flatten()
}

/// Attach a page-lifetime listener for `event` on `target`.
pub fn listen(target: &EventTarget, event: &str, f: impl FnMut(web_sys::Event) + 'static) {
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("Failed to listen for {event}: {e:?}");
    }
    closure.forget();
}

/// Like [`listen`], but registered for the capture phase. Needed for events
/// that do not bubble, such as image `error`.
pub fn listen_capture(target: &EventTarget, event: &str, f: impl FnMut(web_sys::Event) + 'static) {
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(e) = target.add_event_listener_with_callback_and_bool(
        event,
        closure.as_ref().unchecked_ref(),
        true,
    ) {
        log::warn!("Failed to listen for {event}: {e:?}");
    }
    closure.forget();
}

/// Like [`listen`], but `{ passive: true }` so the browser never waits on
/// the handler before scrolling.
pub fn listen_passive(target: &EventTarget, event: &str, f: impl FnMut(web_sys::Event) + 'static) {
    let opts = AddEventListenerOptions::new();
    opts.set_passive(true);
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("Failed to listen for {event}: {e:?}");
    }
    closure.forget();
}

/// One-shot listener that the browser removes after the first delivery.
pub fn listen_once(target: &EventTarget, event: &str, f: impl FnOnce(web_sys::Event) + 'static) {
    let opts = AddEventListenerOptions::new();
    opts.set_once(true);
    let cb = Closure::once_into_js(f);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.unchecked_ref(),
        &opts,
    ) {
        log::warn!("Failed to listen once for {event}: {e:?}");
    }
}

/// Run `f` now when the DOM is already parsed, otherwise on DOMContentLoaded.
pub fn on_document_ready(f: impl FnOnce() + 'static) {
    let Some(doc) = document() else {
        return;
    };
    if doc.ready_state() == "loading" {
        listen_once(&doc, "DOMContentLoaded", move |_| f());
    } else {
        f();
    }
}

/// Run `f` now when the page has fully loaded, otherwise on window `load`.
pub fn on_window_load(f: impl FnOnce() + 'static) {
    let Some(win) = window() else {
        return;
    };
    let Some(doc) = win.document() else {
        return;
    };
    if doc.ready_state() == "complete" {
        f();
    } else {
        listen_once(&win, "load", move |_| f());
    }
}

/// Set an element's inline opacity.
pub fn set_opacity(el: &HtmlElement, value: &str) {
    if let Err(e) = el.style().set_property("opacity", value) {
        log::warn!("Failed to set opacity: {e:?}");
    }
}

/// The element's inline opacity, empty when none is set.
pub fn inline_opacity(el: &HtmlElement) -> String {
    el.style().get_property_value("opacity").unwrap_or_default()
}
