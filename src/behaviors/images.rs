//! Cosmetic recovery for images that fail to load, plus the page-load
//! report.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement, Window};

use crate::dom;

/// Capture-phase error listener: a broken image is forced visible (the lazy
/// path may have styled it to opacity 0), given a usable alt text, and
/// logged. Image `error` does not bubble, hence capture.
pub fn install_error_fallback(doc: &Document) {
    dom::listen_capture(doc, "error", |ev| {
        let Some(img) = ev.target().and_then(|t| t.dyn_into::<HtmlImageElement>().ok()) else {
            return;
        };
        log::warn!("Image failed to load: {}", img.src());
        dom::set_opacity(&img, "1");
        if img.alt().is_empty() {
            img.set_alt("Image unavailable");
        }
    });
}

/// Content-ready sweep: any image without an inline opacity becomes fully
/// visible, so markup shipped with lazy styling never sticks at invisible.
pub fn sweep_initial_opacity(doc: &Document) {
    for el in dom::query_all(doc, "img") {
        let Ok(img) = el.dyn_into::<HtmlImageElement>() else {
            continue;
        };
        if dom::inline_opacity(&img).is_empty() {
            dom::set_opacity(&img, "1");
        }
    }
}

/// Full-load report: clear the body's loading class, log the page timing
/// when the browser exposes it, and flag any image that never produced
/// pixels.
pub fn install_load_reporter(win: &Window, doc: &Document) {
    let win = win.clone();
    let doc = doc.clone();
    dom::on_window_load(move || {
        if let Some(body) = doc.body() {
            let _ = body.class_list().remove_1("loading");
        }
        if let Some(perf) = win.performance() {
            let timing = perf.timing();
            let load_ms = timing.load_event_end() - timing.navigation_start();
            // loadEventEnd is still zero while the load event is being
            // dispatched; skip the report rather than log a negative time.
            if load_ms > 0.0 {
                log::info!("Page load time: {load_ms:.0}ms");
            }
        }
        for el in dom::query_all(&doc, "img") {
            let Ok(img) = el.dyn_into::<HtmlImageElement>() else {
                continue;
            };
            if !img.complete() || img.natural_height() == 0 {
                log::warn!("Failed to load image: {}", img.src());
                dom::set_opacity(&img, "1");
            }
        }
    });
}
