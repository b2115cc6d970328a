//! Search dialog: focus management and the query flow.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::backend::GalleryBackend;
use crate::dom;
use crate::notify::Notifier;
use crate::widgets::WidgetHost;

pub const MODAL_ID: &str = "searchModal";
pub const INPUT_ID: &str = "searchInput";

/// Wire the search modal: focus the input on open, run submitted queries
/// through the backend, clear the input on close.
pub fn install<B, W>(doc: &Document, backend: Rc<B>, notifier: Notifier<W>, widgets: Rc<W>)
where
    B: GalleryBackend + 'static,
    W: WidgetHost + 'static,
{
    let Some(modal) = doc.get_element_by_id(MODAL_ID) else {
        return;
    };
    let Some(input) = doc
        .get_element_by_id(INPUT_ID)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };

    {
        let input = input.clone();
        dom::listen(&modal, "shown.bs.modal", move |_| {
            let _ = input.focus();
        });
    }

    if let Some(form) = dom::query(&modal, "form") {
        let input = input.clone();
        let modal2 = modal.clone();
        let notifier2 = notifier.clone();
        dom::listen(&form, "submit", move |ev| {
            ev.prevent_default();
            let query = input.value().trim().to_string();
            if query.is_empty() {
                return;
            }
            notifier2.info(&format!("Searching for \"{query}\"..."));
            let backend = Rc::clone(&backend);
            let widgets = Rc::clone(&widgets);
            let notifier3 = notifier2.clone();
            let modal3 = modal2.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match backend.search(&query).await {
                    Ok(()) => widgets.hide_modal(&modal3),
                    Err(e) => {
                        log::error!("Search failed: {e}");
                        notifier3.error("Search failed. Please try again.");
                    }
                }
            });
        });
    }

    dom::listen(&modal, "hidden.bs.modal", move |_| input.set_value(""));
}
