//! Page-behavior layer for the Platforms art gallery.
//!
//! Compiled to WebAssembly and loaded by the server-rendered pages. Every
//! behavior attaches to markup that already exists and is a no-op when its
//! elements are absent; nothing here renders the page. The pure cores
//! (wishlist set, email check, markup builders) also compile natively for
//! the test suite.

pub mod backend;
pub mod behaviors;
pub mod config;
pub mod dom;
pub mod notify;
pub mod storage;
pub mod timers;
pub mod widgets;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::backend::SimulatedGallery;
use crate::config::PageConfig;
use crate::notify::Notifier;
use crate::widgets::BootstrapWidgets;

/// Module entry point: logging first, page wiring once the DOM is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    dom::on_document_ready(|| {
        let Some(win) = dom::window() else {
            return;
        };
        let Some(doc) = win.document() else {
            log::error!("No document to enhance");
            return;
        };
        boot(&win, &doc);
    });
}

/// Wire every page behavior against the current document.
fn boot(win: &Window, doc: &Document) {
    let cfg = PageConfig::from_document(doc);
    let widgets = Rc::new(BootstrapWidgets);
    let backend = Rc::new(SimulatedGallery::default());
    let notifier = Notifier::new(Rc::clone(&widgets), cfg.toast_autohide_ms);

    behaviors::images::install_error_fallback(doc);
    behaviors::images::sweep_initial_opacity(doc);
    behaviors::scroll::install_smooth_scroll(doc);
    behaviors::carousel::install(doc, &widgets, &cfg);
    behaviors::wishlist::install(doc, &notifier, &cfg.wishlist_key);
    behaviors::wishlist::apply_saved(doc, &cfg.wishlist_key);
    behaviors::a11y::install_tab_announcer(doc, cfg.announcement_ttl_ms);
    behaviors::search::install(doc, Rc::clone(&backend), notifier.clone(), Rc::clone(&widgets));
    behaviors::newsletter::install(doc, backend, notifier);
    behaviors::lazy::install(doc, cfg.lazy_fallback_ms);
    behaviors::scroll::install_navbar_styler(win, doc, cfg.navbar_shadow_threshold_px);
    behaviors::a11y::install_skip_link(doc);
    behaviors::analytics::install(doc);
    behaviors::a11y::install_focus_traps(doc);
    behaviors::images::install_load_reporter(win, doc);

    banner();
    log::debug!("Page behaviors wired");
}

/// Styled console banner, printed once the page is wired.
fn banner() {
    web_sys::console::log_2(
        &"%c🎨 Platforms Art Gallery".into(),
        &"font-size: 20px; font-weight: bold; color: #d7b36c;".into(),
    );
    web_sys::console::log_2(
        &"%cBuilt with ❤️ using Bootstrap 5.3".into(),
        &"font-size: 12px; color: #777777;".into(),
    );
}
