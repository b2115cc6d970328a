//! Widget-provider seam over the page's widget library.
//!
//! Behavior code asks a [`WidgetHost`] for carousel, modal, and toast
//! mechanics instead of naming a library. Production pages use
//! [`BootstrapWidgets`], which reaches the global `bootstrap` bundle
//! through `js_sys::Reflect` so the crate builds without any JS imports.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Options for one rotating-panel widget.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub interval_ms: u32,
    pub pause_on_hover: bool,
    pub touch: bool,
    pub keyboard: bool,
}

impl CarouselConfig {
    /// The auto-rotating setup both gallery carousels use.
    pub fn rotating(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            pause_on_hover: true,
            touch: true,
            keyboard: true,
        }
    }
}

/// Control handle for an attached carousel.
pub trait CarouselHandle {
    fn pause(&self);
    fn cycle(&self);
}

pub trait WidgetHost {
    /// Attach rotating-panel behavior to `el`. None when the widget library
    /// is missing, in which case the markup stays static.
    fn attach_carousel(&self, el: &Element, config: &CarouselConfig)
        -> Option<Box<dyn CarouselHandle>>;

    /// Hide the open modal rooted at `el`, if the library knows about it.
    fn hide_modal(&self, el: &Element);

    /// Activate auto-hiding toast behavior on `el` and show it.
    fn show_toast(&self, el: &Element, autohide_ms: u32);
}

/// [`WidgetHost`] backed by the Bootstrap 5 bundle the pages already load.
#[derive(Debug, Default, Clone)]
pub struct BootstrapWidgets;

fn set_js(obj: &Object, key: &str, value: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), value);
}

/// `window.bootstrap.<name>`, when the bundle is loaded.
fn bootstrap_class(name: &str) -> Option<Function> {
    let win = web_sys::window()?;
    let bundle = Reflect::get(win.as_ref(), &"bootstrap".into()).ok()?;
    if bundle.is_undefined() || bundle.is_null() {
        log::debug!("bootstrap bundle not loaded; {name} unavailable");
        return None;
    }
    Reflect::get(&bundle, &name.into()).ok()?.dyn_into::<Function>().ok()
}

fn call_method(target: &JsValue, name: &str) {
    let Ok(method) = Reflect::get(target, &name.into()) else {
        return;
    };
    let Ok(method) = method.dyn_into::<Function>() else {
        log::warn!("Widget method {name} missing");
        return;
    };
    if let Err(e) = method.call0(target) {
        log::warn!("Widget method {name} failed: {e:?}");
    }
}

struct BootstrapCarousel {
    instance: JsValue,
}

impl CarouselHandle for BootstrapCarousel {
    fn pause(&self) {
        call_method(&self.instance, "pause");
    }

    fn cycle(&self) {
        call_method(&self.instance, "cycle");
    }
}

impl WidgetHost for BootstrapWidgets {
    fn attach_carousel(
        &self,
        el: &Element,
        config: &CarouselConfig,
    ) -> Option<Box<dyn CarouselHandle>> {
        let ctor = bootstrap_class("Carousel")?;
        let opts = Object::new();
        set_js(&opts, "interval", &JsValue::from_f64(config.interval_ms as f64));
        set_js(&opts, "ride", &"carousel".into());
        if config.pause_on_hover {
            set_js(&opts, "pause", &"hover".into());
        } else {
            set_js(&opts, "pause", &JsValue::FALSE);
        }
        set_js(&opts, "touch", &JsValue::from_bool(config.touch));
        set_js(&opts, "keyboard", &JsValue::from_bool(config.keyboard));
        let args = Array::of2(el.as_ref(), opts.as_ref());
        match Reflect::construct(&ctor, &args) {
            Ok(instance) => Some(Box::new(BootstrapCarousel {
                instance: instance.into(),
            })),
            Err(e) => {
                log::warn!("Carousel construction failed: {e:?}");
                None
            }
        }
    }

    fn hide_modal(&self, el: &Element) {
        let Some(modal_class) = bootstrap_class("Modal") else {
            return;
        };
        let Ok(get_instance) = Reflect::get(modal_class.as_ref(), &"getInstance".into()) else {
            return;
        };
        let Ok(get_instance) = get_instance.dyn_into::<Function>() else {
            return;
        };
        let Ok(instance) = get_instance.call1(modal_class.as_ref(), el.as_ref()) else {
            return;
        };
        // getInstance returns null when the modal was never opened.
        if instance.is_null() || instance.is_undefined() {
            return;
        }
        call_method(&instance, "hide");
    }

    fn show_toast(&self, el: &Element, autohide_ms: u32) {
        let Some(ctor) = bootstrap_class("Toast") else {
            return;
        };
        let opts = Object::new();
        set_js(&opts, "autohide", &JsValue::TRUE);
        set_js(&opts, "delay", &JsValue::from_f64(autohide_ms as f64));
        let args = Array::of2(el.as_ref(), opts.as_ref());
        match Reflect::construct(&ctor, &args) {
            Ok(instance) => call_method(instance.as_ref(), "show"),
            Err(e) => log::warn!("Toast activation failed: {e:?}"),
        }
    }
}
