//! Screen-reader announcements, skip-link focus handoff, and modal focus
//! containment.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use crate::dom;
use crate::timers;

/// Text announced when a tab group becomes visible.
pub fn tab_announcement(label: &str) -> String {
    format!("Showing {} artists", label.trim())
}

/// Announce pill-tab switches through a transient polite live region.
pub fn install_tab_announcer(doc: &Document, ttl_ms: i32) {
    for tab in dom::query_all(doc, r#"[data-bs-toggle="pill"]"#) {
        let doc = doc.clone();
        let tab2 = tab.clone();
        dom::listen(&tab, "shown.bs.tab", move |_| {
            let Some(panel) = tab2.get_attribute("data-bs-target") else {
                return;
            };
            if dom::query_doc(&doc, &panel).is_none() {
                return;
            }
            let label = tab2.text_content().unwrap_or_default();
            announce(&doc, &tab_announcement(&label), ttl_ms);
        });
    }
}

/// Append a visually-hidden status element and drop it after `ttl_ms`.
fn announce(doc: &Document, text: &str, ttl_ms: i32) {
    let Ok(region) = doc.create_element("div") else {
        return;
    };
    let _ = region.set_attribute("role", "status");
    let _ = region.set_attribute("aria-live", "polite");
    region.set_class_name("visually-hidden");
    region.set_text_content(Some(text));
    let Some(body) = doc.body() else {
        return;
    };
    if body.append_child(&region).is_err() {
        return;
    }
    timers::after(ttl_ms, move || region.remove());
}

/// Skip-link: move keyboard focus straight to the main content region.
pub fn install_skip_link(doc: &Document) {
    let Some(link) = dom::query_doc(doc, ".skip-link") else {
        return;
    };
    let doc = doc.clone();
    dom::listen(&link, "click", move |ev| {
        ev.prevent_default();
        let Some(main) = doc.get_element_by_id("main-content") else {
            return;
        };
        // Sections are not natively focusable.
        let _ = main.set_attribute("tabindex", "-1");
        if let Some(main) = main.dyn_ref::<HtmlElement>() {
            let _ = main.focus();
        }
    });
}

const FOCUSABLE_SELECTOR: &str =
    r#"button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])"#;

fn focusable_bounds(modal: &Element) -> Option<(HtmlElement, HtmlElement)> {
    let list = modal.query_selector_all(FOCUSABLE_SELECTOR).ok()?;
    if list.length() == 0 {
        return None;
    }
    let first = list.item(0)?.dyn_into::<HtmlElement>().ok()?;
    let last = list.item(list.length() - 1)?.dyn_into::<HtmlElement>().ok()?;
    Some((first, last))
}

/// Keep Tab and Shift+Tab cycling inside each modal while it is open.
///
/// The first/last focusable pair is captured on every `shown` event, so
/// content swapped into the modal between openings is picked up, and it is
/// cleared on `hidden` so the keydown listener goes dormant.
pub fn install_focus_traps(doc: &Document) {
    for modal in dom::query_all(doc, ".modal") {
        let bounds: Rc<RefCell<Option<(HtmlElement, HtmlElement)>>> = Rc::new(RefCell::new(None));

        {
            let bounds = Rc::clone(&bounds);
            let modal2 = modal.clone();
            dom::listen(&modal, "shown.bs.modal", move |_| {
                *bounds.borrow_mut() = focusable_bounds(&modal2);
            });
        }
        {
            let bounds = Rc::clone(&bounds);
            dom::listen(&modal, "hidden.bs.modal", move |_| {
                bounds.borrow_mut().take();
            });
        }
        {
            let bounds = Rc::clone(&bounds);
            let doc = doc.clone();
            dom::listen(&modal, "keydown", move |ev| {
                let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if key_ev.key() != "Tab" {
                    return;
                }
                let borrow = bounds.borrow();
                let Some((first, last)) = borrow.as_ref() else {
                    return;
                };
                let active = doc.active_element();
                if key_ev.shift_key() {
                    if active.as_ref() == Some(first.as_ref()) {
                        ev.prevent_default();
                        let _ = last.focus();
                    }
                } else if active.as_ref() == Some(last.as_ref()) {
                    ev.prevent_default();
                    let _ = first.focus();
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announcement_names_the_visible_group() {
        assert_eq!(tab_announcement("Painters"), "Showing Painters artists");
    }

    #[test]
    fn announcement_trims_markup_whitespace() {
        assert_eq!(tab_announcement("\n  Sculptors\n"), "Showing Sculptors artists");
    }
}
