//! sitekit WASM
//!
//! Browser side of sitekit: attaches form validation, the navigation menus,
//! scroll reveal, ripple, smooth scrolling, active-link highlighting and
//! image fallbacks to a static page.
//!
//! The module starts itself when loaded. Pages that want to pass their own
//! configuration set `data-sitekit-manual` on `<html>` and call
//! `initWithConfig({...})`; alternatively a
//! `<script type="application/json" id="sitekit-config">` block is read at
//! startup.

use std::cell::RefCell;

use serde::Serialize;
use sitekit_core::{validate, FieldKind, FieldState, SiteConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

pub mod active;
pub mod app;
pub mod dom;
pub mod forms;
pub mod images;
pub mod logging;
pub mod menu;
pub mod notify;
pub mod reveal;
pub mod ripple;
pub mod scroll;
pub mod styles;
pub mod timers;
pub mod validation;

pub use app::App;

const CONFIG_SCRIPT_ID: &str = "sitekit-config";
const MANUAL_ATTRIBUTE: &str = "data-sitekit-manual";

thread_local! {
    // Keeps the page's listeners alive after startup returns.
    static PAGE: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let document = dom::document()?;
    let manual = document
        .document_element()
        .map(|html| html.has_attribute(MANUAL_ATTRIBUTE))
        .unwrap_or(false);
    if manual {
        return Ok(());
    }

    when_ready(&document, page_config(&document))
}

/// Start with an explicit configuration object. Missing keys take their
/// defaults; `undefined` or `null` means all defaults.
///
/// # Example (JavaScript)
/// ```javascript
/// initWithConfig({ forms: { redirect_url: "/bedankt.html" }, log_level: "debug" });
/// ```
#[wasm_bindgen(js_name = initWithConfig)]
pub fn init_with_config(config: JsValue) -> Result<(), JsValue> {
    let config = if config.is_undefined() || config.is_null() {
        SiteConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?
    };
    when_ready(&dom::document()?, config)
}

/// Outcome of [`validate_value`] returned to JavaScript
#[derive(Serialize, Debug, Clone)]
pub struct ValidationOutcome {
    pub kind: FieldKind,
    pub valid: bool,
    pub message: Option<String>,
}

/// Validate a bare value against a field kind without touching the DOM.
///
/// # Example (JavaScript)
/// ```javascript
/// const outcome = validateValue('email', 'user@example.com', true);
/// // { kind: "email", valid: true, message: null }
/// ```
#[wasm_bindgen(js_name = validateValue)]
pub fn validate_value(kind: &str, value: &str, required: bool) -> Result<JsValue, JsValue> {
    let kind: FieldKind = kind.parse().map_err(|e| JsValue::from_str(&format!("{}", e)))?;
    let field = FieldState {
        required,
        ..FieldState::text(value)
    };
    let verdict = validate(kind, &field);

    let outcome = ValidationOutcome {
        kind,
        valid: verdict.is_valid(),
        message: verdict.message().map(|m| m.text().to_string()),
    };
    Ok(serde_wasm_bindgen::to_value(&outcome)?)
}

/// Config from the in-page JSON block, or defaults when absent or broken.
fn page_config(document: &Document) -> SiteConfig {
    let Some(script) = document.get_element_by_id(CONFIG_SCRIPT_ID) else {
        return SiteConfig::default();
    };
    let content = script.text_content().unwrap_or_default();
    match SiteConfig::from_json(&content) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::warn_1(&JsValue::from_str(&format!("{}, using defaults", e)));
            SiteConfig::default()
        }
    }
}

/// Boot now, or on `DOMContentLoaded` while the document is still loading.
fn when_ready(document: &Document, config: SiteConfig) -> Result<(), JsValue> {
    if document.ready_state() != "loading" {
        return boot(config);
    }

    let on_ready = Closure::once_into_js(move || {
        if let Err(e) = boot(config) {
            tracing::error!("Startup failed: {:?}", e);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
}

fn boot(config: SiteConfig) -> Result<(), JsValue> {
    logging::init(&config.log_level);
    let document = dom::document()?;

    PAGE.with(|page| {
        let mut page = page.borrow_mut();
        match page.as_mut() {
            Some(app) => {
                if !app.is_configured_with(&config) {
                    tracing::warn!(
                        "Page already enhanced; ignoring the new config. \
                         Set data-sitekit-manual on <html> to configure from script"
                    );
                }
                app.start(&document)
            }
            None => {
                let mut app = App::new(config);
                app.start(&document)?;
                *page = Some(app);
                Ok(())
            }
        }
    })
}
