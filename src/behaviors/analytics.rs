//! Console-first interaction analytics with optional gtag forwarding.

use js_sys::{Function, Object, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use crate::dom;

/// One structured interaction event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub category: &'static str,
    pub action: &'static str,
    pub label: Option<String>,
    pub value: Option<String>,
}

impl AnalyticsEvent {
    pub fn new(
        category: &'static str,
        action: &'static str,
        label: Option<String>,
        value: Option<String>,
    ) -> Self {
        Self {
            category,
            action,
            label,
            value,
        }
    }

    /// Console representation, falling back to the Debug form when
    /// serialization fails.
    pub fn console_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}

/// Print the event to the console, and forward it when a global `gtag` is
/// loaded.
pub fn track(event: &AnalyticsEvent) {
    if let Some(gtag) = global_gtag() {
        let params = Object::new();
        let _ = Reflect::set(&params, &"event_category".into(), &event.category.into());
        let _ = Reflect::set(&params, &"event_label".into(), &opt_js(&event.label));
        let _ = Reflect::set(&params, &"value".into(), &opt_js(&event.value));
        if let Err(e) = gtag.call3(&JsValue::NULL, &"event".into(), &event.action.into(), &params)
        {
            log::warn!("gtag call failed: {e:?}");
        }
    }
    web_sys::console::log_2(&"Analytics Event:".into(), &event.console_line().into());
}

fn opt_js(value: &Option<String>) -> JsValue {
    match value {
        Some(v) => JsValue::from_str(v),
        None => JsValue::UNDEFINED,
    }
}

fn global_gtag() -> Option<Function> {
    let win = dom::window()?;
    Reflect::get(win.as_ref(), &"gtag".into())
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn text_of(root: &Element, selector: &str) -> Option<String> {
    dom::query(root, selector)
        .and_then(|el| el.text_content())
        .map(|t| t.trim().to_string())
}

/// Wire click tracking for artwork cards, artist profile links, and filter
/// tags.
pub fn install(doc: &Document) {
    for card in dom::query_all(doc, ".artwork-card") {
        let card2 = card.clone();
        dom::listen(&card, "click", move |_| {
            let title = text_of(&card2, ".card-title");
            let price = text_of(&card2, ".card-price");
            track(&AnalyticsEvent::new("Artwork", "Click", title, price));
        });
    }
    for link in dom::query_all(doc, ".artist-card a") {
        let link2 = link.clone();
        dom::listen(&link, "click", move |_| {
            let name = link2.text_content().map(|t| t.trim().to_string());
            track(&AnalyticsEvent::new("Artist", "Profile Click", name, None));
        });
    }
    for tag in dom::query_all(doc, ".btn-tag") {
        let tag2 = tag.clone();
        dom::listen(&tag, "click", move |_| {
            let label = tag2.text_content().map(|t| t.trim().to_string());
            track(&AnalyticsEvent::new("Filter", "Click", label, None));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_line_is_structured_json() {
        let event = AnalyticsEvent::new(
            "Artwork",
            "Click",
            Some("Dusk over the harbor".to_string()),
            Some("$1,200".to_string()),
        );
        assert_eq!(
            event.console_line(),
            r#"{"category":"Artwork","action":"Click","label":"Dusk over the harbor","value":"$1,200"}"#
        );
    }

    #[test]
    fn missing_fields_serialize_as_null() {
        let event = AnalyticsEvent::new("Filter", "Click", None, None);
        assert_eq!(
            event.console_line(),
            r#"{"category":"Filter","action":"Click","label":null,"value":null}"#
        );
    }
}
