// File: src/images.rs
// Purpose: Lazy loading and a placeholder for broken images

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement};

use crate::dom::{self, Listener};

pub const PLACEHOLDER_SRC: &str = concat!(
    r#"data:image/svg+xml,%3Csvg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 400 300"%3E"#,
    r#"%3Crect fill="%23e9ecef" width="400" height="300"/%3E"#,
    r#"%3Ctext x="50%25" y="50%25" dominant-baseline="middle" text-anchor="middle" "#,
    r#"font-family="sans-serif" font-size="18" fill="%236c757d"%3EImage%3C/text%3E%3C/svg%3E"#,
);

/// Set once an image shows the placeholder, so a failing placeholder
/// cannot trigger another swap.
const FALLBACK_ATTRIBUTE: &str = "data-fallback";

pub struct ImageLoader {
    _listeners: Vec<Listener>,
}

impl ImageLoader {
    pub fn attach(document: &Document) -> Result<Self, JsValue> {
        let mut listeners = Vec::new();

        for element in dom::elements(document.query_selector_all("img")?) {
            if !element.has_attribute("loading") && !element.class_list().contains("c-logo__img") {
                element.set_attribute("loading", "lazy")?;
            }

            let Ok(image) = element.dyn_into::<HtmlImageElement>() else {
                continue;
            };
            let broken = image.clone();
            listeners.push(Listener::new(&image, "error", move |_| {
                if let Err(e) = use_placeholder(&broken) {
                    tracing::warn!("Failed to swap in placeholder: {:?}", e);
                }
            })?);
        }

        Ok(Self {
            _listeners: listeners,
        })
    }
}

fn use_placeholder(image: &HtmlImageElement) -> Result<(), JsValue> {
    if image.has_attribute(FALLBACK_ATTRIBUTE) {
        return Ok(());
    }
    tracing::debug!("Image failed to load: {}", image.src());
    image.set_attribute(FALLBACK_ATTRIBUTE, "")?;
    image.set_src(PLACEHOLDER_SRC);
    image.style().set_property("object-fit", "contain")
}
