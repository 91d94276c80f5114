// File: src/ripple.rs
// Purpose: Material-style ripple on clickable elements

use sitekit_core::geometry::{Rect, Ripple};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, MouseEvent};

use crate::dom::{self, Listener};
use crate::timers;

pub const RIPPLE_SELECTOR: &str = ".btn, .c-button, .nav-link, .card, .c-card";
const RIPPLE_MS: u32 = 600;

pub struct RippleEffect {
    _listeners: Vec<Listener>,
}

impl RippleEffect {
    pub fn attach(document: &Document) -> Result<Self, JsValue> {
        let mut listeners = Vec::new();
        for element in dom::elements(document.query_selector_all(RIPPLE_SELECTOR)?) {
            let host = element.clone();
            listeners.push(Listener::new(&element, "click", move |event: Event| {
                let Some(click) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                if let Err(e) = spawn_ripple(&host, click) {
                    tracing::warn!("Failed to draw ripple: {:?}", e);
                }
            })?);
        }
        Ok(Self {
            _listeners: listeners,
        })
    }
}

fn spawn_ripple(host: &Element, click: &MouseEvent) -> Result<(), JsValue> {
    let bounds = host.get_bounding_client_rect();
    let rect = Rect {
        left: bounds.left(),
        top: bounds.top(),
        width: bounds.width(),
        height: bounds.height(),
    };
    let ripple = Ripple::at(rect, click.client_x() as f64, click.client_y() as f64);

    if let Some(existing) = host.query_selector(".ripple")? {
        existing.remove();
    }

    let span = dom::document()?.create_element("span")?;
    span.set_attribute("style", &ripple.style())?;
    span.set_class_name("ripple");

    dom::set_style(host, "position", "relative")?;
    dom::set_style(host, "overflow", "hidden")?;
    host.append_child(&span)?;

    timers::schedule(RIPPLE_MS, move || span.remove())?;
    Ok(())
}
