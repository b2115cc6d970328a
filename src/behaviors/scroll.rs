//! In-page anchor scrolling and scroll-position navbar styling.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

use crate::dom;

/// Fragment worth intercepting. None for the bare `#` placeholder and for
/// anything that is not a fragment href.
fn fragment_target(href: &str) -> Option<&str> {
    if href == "#" || !href.starts_with('#') {
        return None;
    }
    Some(href)
}

/// Wire every in-page anchor: animated scroll plus a history entry. Anchors
/// whose target is missing keep their default navigation.
pub fn install_smooth_scroll(doc: &Document) {
    for anchor in dom::query_all(doc, r##"a[href^="#"]"##) {
        let doc = doc.clone();
        let anchor2 = anchor.clone();
        dom::listen(&anchor, "click", move |ev| {
            let href = anchor2.get_attribute("href").unwrap_or_default();
            let Some(fragment) = fragment_target(&href) else {
                return;
            };
            let Some(target) = dom::query_doc(&doc, fragment) else {
                return;
            };
            ev.prevent_default();
            scroll_to(&target);
            push_fragment(fragment);
        });
    }
}

fn scroll_to(target: &Element) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
}

fn push_fragment(fragment: &str) {
    let Some(win) = dom::window() else {
        return;
    };
    let Ok(history) = win.history() else {
        return;
    };
    if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(fragment)) {
        log::warn!("History update failed: {e:?}");
    }
}

/// Whether the navbar shadow applies at a given vertical offset.
pub fn navbar_has_shadow(offset_px: f64, threshold_px: f64) -> bool {
    offset_px > threshold_px
}

/// Passive scroll listener toggling the navbar's shadow class. A no-op when
/// the page has no navbar.
pub fn install_navbar_styler(win: &Window, doc: &Document, threshold_px: f64) {
    let Some(navbar) = dom::query_doc(doc, ".navbar") else {
        return;
    };
    let win2 = win.clone();
    let doc2 = doc.clone();
    dom::listen_passive(win, "scroll", move |_| {
        let offset = win2
            .page_y_offset()
            .ok()
            .or_else(|| doc2.document_element().map(|el| f64::from(el.scroll_top())))
            .unwrap_or(0.0);
        let classes = navbar.class_list();
        let result = if navbar_has_shadow(offset, threshold_px) {
            classes.add_1("shadow-sm")
        } else {
            classes.remove_1("shadow-sm")
        };
        if let Err(e) = result {
            log::warn!("Navbar class toggle failed: {e:?}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_is_left_alone() {
        assert_eq!(fragment_target("#"), None);
    }

    #[test]
    fn fragment_hrefs_are_intercepted() {
        assert_eq!(fragment_target("#featured"), Some("#featured"));
        assert_eq!(fragment_target("#main-content"), Some("#main-content"));
    }

    #[test]
    fn non_fragment_hrefs_pass_through() {
        assert_eq!(fragment_target("/artists"), None);
        assert_eq!(fragment_target("https://example.com/#x"), None);
        assert_eq!(fragment_target(""), None);
    }

    #[test]
    fn shadow_applies_strictly_past_the_threshold() {
        assert!(!navbar_has_shadow(0.0, 10.0));
        assert!(!navbar_has_shadow(10.0, 10.0));
        assert!(navbar_has_shadow(10.5, 10.0));
        assert!(navbar_has_shadow(300.0, 10.0));
    }
}
