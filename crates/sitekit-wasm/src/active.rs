// File: src/active.rs
// Purpose: Highlight the navigation link for the current page

use sitekit_core::nav::is_active_link;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::dom;

pub struct ActiveMenu;

impl ActiveMenu {
    /// Mark every `.nav-link` pointing at the current path with
    /// `aria-current="page"` and `active`. Returns how many matched.
    pub fn apply(document: &Document) -> Result<usize, JsValue> {
        let path = dom::window()?.location().pathname()?;
        Self::apply_for_path(document, &path)
    }

    pub fn apply_for_path(document: &Document, path: &str) -> Result<usize, JsValue> {
        let mut matched = 0;
        for link in dom::elements(document.query_selector_all(".nav-link")?) {
            let Some(href) = link.get_attribute("href") else {
                continue;
            };
            if is_active_link(path, &href) {
                link.set_attribute("aria-current", "page")?;
                link.class_list().add_1("active")?;
                matched += 1;
            }
        }
        Ok(matched)
    }
}
