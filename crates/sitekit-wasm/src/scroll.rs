// File: src/scroll.rs
// Purpose: Smooth, header-aware scrolling for in-page anchors

use sitekit_core::config::ScrollConfig;
use sitekit_core::geometry::scroll_target;
use sitekit_core::nav::anchor_target_id;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom::{self, Listener};

const HEADER_SELECTOR: &str = ".l-header, .navbar";

/// One delegated click handler on the document for all `a[href^="#"]`.
pub struct SmoothScroll {
    _listener: Listener,
}

impl SmoothScroll {
    pub fn attach(document: &Document, config: &ScrollConfig) -> Result<Self, JsValue> {
        let fallback = config.fallback_header_height_px;
        let listener = Listener::new(document, "click", move |event: Event| {
            if let Err(e) = on_click(&event, fallback) {
                tracing::warn!("Smooth scroll failed: {:?}", e);
            }
        })?;
        Ok(Self {
            _listener: listener,
        })
    }
}

fn on_click(event: &Event, fallback_header: f64) -> Result<(), JsValue> {
    let Some(origin) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return Ok(());
    };
    let Some(anchor) = origin.closest(r##"a[href^="#"]"##)? else {
        return Ok(());
    };
    let Some(href) = anchor.get_attribute("href") else {
        return Ok(());
    };
    let Some(id) = anchor_target_id(&href) else {
        return Ok(());
    };

    let document = dom::document()?;
    let Some(target) = document.get_element_by_id(id) else {
        return Ok(());
    };

    event.prevent_default();

    let window = dom::window()?;
    let header = header_height(&document).unwrap_or(fallback_header);
    let top = scroll_target(target.get_bounding_client_rect().top(), window.page_y_offset()?, header);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Height of the fixed page header, if the page has one.
pub fn header_height(document: &Document) -> Option<f64> {
    dom::find(document, HEADER_SELECTOR)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
}
