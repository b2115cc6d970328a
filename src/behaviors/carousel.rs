//! Rotating-panel wiring for the hero and category sections.

use std::rc::Rc;

use web_sys::Document;

use crate::config::PageConfig;
use crate::dom;
use crate::widgets::{CarouselConfig, WidgetHost};

pub const HERO_ID: &str = "heroCarousel";
pub const CATEGORY_ID: &str = "categoryCarousel";

/// Attach both gallery carousels. The hero additionally pauses while any
/// descendant holds keyboard focus, so tab navigation never races the
/// auto-advance.
pub fn install<W: WidgetHost + 'static>(doc: &Document, widgets: &Rc<W>, config: &PageConfig) {
    if let Some(hero) = doc.get_element_by_id(HERO_ID) {
        match widgets.attach_carousel(&hero, &CarouselConfig::rotating(config.hero_interval_ms)) {
            Some(handle) => {
                let handle = Rc::new(handle);
                let pause = Rc::clone(&handle);
                dom::listen(&hero, "focusin", move |_| pause.pause());
                dom::listen(&hero, "focusout", move |_| handle.cycle());
            }
            None => log::warn!("Hero carousel not attached"),
        }
    }

    if let Some(category) = doc.get_element_by_id(CATEGORY_ID) {
        let config = CarouselConfig::rotating(config.category_interval_ms);
        if widgets.attach_carousel(&category, &config).is_none() {
            log::warn!("Category carousel not attached");
        }
    }
}
