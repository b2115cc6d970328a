//! Transient toast notifications, stacked bottom-right.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::dom;
use crate::widgets::WidgetHost;

pub const CONTAINER_ID: &str = "toastContainer";

/// Severity of a user-visible notice, mapped to an icon in the toast body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// Bootstrap-icons class shown next to the message.
    pub fn icon_class(self) -> &'static str {
        match self {
            Severity::Success => "bi-check-circle",
            Severity::Error => "bi-exclamation-circle",
            Severity::Info => "bi-info-circle",
        }
    }
}

/// A single transient notice. Never persisted anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }
}

/// Escape text for interpolation into toast markup. Messages can carry
/// user-typed content, such as search queries.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn toast_html(id: &str, notice: &Notice) -> String {
    format!(
        r#"<div id="{id}" class="toast" role="alert" aria-live="polite" aria-atomic="true">
  <div class="toast-body d-flex align-items-center">
    <i class="bi {icon} me-2"></i>
    <span>{message}</span>
    <button type="button" class="btn-close ms-auto" data-bs-dismiss="toast" aria-label="Close"></button>
  </div>
</div>"#,
        icon = notice.severity.icon_class(),
        message = escape_html(&notice.message),
    )
}

fn toast_id(timestamp_ms: u64, seq: u64) -> String {
    format!("toast-{timestamp_ms}-{seq}")
}

/// Shows stacking, auto-dismissing toasts, creating the shared container on
/// first use.
pub struct Notifier<W: WidgetHost> {
    widgets: Rc<W>,
    autohide_ms: u32,
    sequence: Rc<Cell<u64>>,
}

impl<W: WidgetHost> Clone for Notifier<W> {
    fn clone(&self) -> Self {
        Self {
            widgets: Rc::clone(&self.widgets),
            autohide_ms: self.autohide_ms,
            sequence: Rc::clone(&self.sequence),
        }
    }
}

impl<W: WidgetHost> Notifier<W> {
    pub fn new(widgets: Rc<W>, autohide_ms: u32) -> Self {
        Self {
            widgets,
            autohide_ms,
            sequence: Rc::new(Cell::new(0)),
        }
    }

    pub fn info(&self, message: &str) {
        self.show(&Notice::info(message));
    }

    pub fn success(&self, message: &str) {
        self.show(&Notice::success(message));
    }

    pub fn error(&self, message: &str) {
        self.show(&Notice::error(message));
    }

    pub fn show(&self, notice: &Notice) {
        let Some(doc) = dom::document() else {
            return;
        };
        let Some(container) = self.container(&doc) else {
            log::warn!("No toast container; dropping notice {:?}", notice.message);
            return;
        };
        let id = self.next_toast_id();
        if let Err(e) = container.insert_adjacent_html("beforeend", &toast_html(&id, notice)) {
            log::warn!("Failed to insert toast: {e:?}");
            return;
        }
        let Some(toast) = doc.get_element_by_id(&id) else {
            return;
        };
        // Drop the element from the document once its hide transition ends.
        let gone = toast.clone();
        dom::listen_once(&toast, "hidden.bs.toast", move |_| gone.remove());
        self.widgets.show_toast(&toast, self.autohide_ms);
    }

    /// The shared container, created and appended to the body on demand.
    fn container(&self, doc: &Document) -> Option<Element> {
        if let Some(el) = doc.get_element_by_id(CONTAINER_ID) {
            return Some(el);
        }
        let el = doc.create_element("div").ok()?;
        el.set_id(CONTAINER_ID);
        el.set_class_name("toast-container position-fixed bottom-0 end-0 p-3");
        if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
            let _ = html.style().set_property("z-index", "9999");
        }
        doc.body()?.append_child(&el).ok()?;
        Some(el)
    }

    fn next_toast_id(&self) -> String {
        let seq = self.sequence.get();
        self.sequence.set(seq.wrapping_add(1));
        toast_id(js_sys::Date::now() as u64, seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_picks_the_matching_icon() {
        assert_eq!(Severity::Success.icon_class(), "bi-check-circle");
        assert_eq!(Severity::Error.icon_class(), "bi-exclamation-circle");
        assert_eq!(Severity::Info.icon_class(), "bi-info-circle");
    }

    #[test]
    fn toast_markup_is_dismissible_and_polite() {
        let html = toast_html("toast-1-0", &Notice::success("Added to wishlist"));
        assert!(html.contains(r#"id="toast-1-0""#));
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains(r#"aria-live="polite""#));
        assert!(html.contains("bi-check-circle"));
        assert!(html.contains(r#"data-bs-dismiss="toast""#));
        assert!(html.contains("Added to wishlist"));
    }

    #[test]
    fn message_markup_is_escaped() {
        let html = toast_html("t", &Notice::info(r#"Searching for "<script>"..."#));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&quot;"));
    }

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        assert_ne!(toast_id(1700000000000, 0), toast_id(1700000000000, 1));
    }
}
