// File: src/notify.rs
// Purpose: Self-dismissing alert notifications

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use sitekit_core::config::NotificationConfig;
use sitekit_core::Notification;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::dom::{self, Listener};
use crate::timers;

pub const CONTAINER_ID: &str = "notification-container";
const CONTAINER_STYLE: &str = "position:fixed;top:80px;right:20px;z-index:9999;max-width:350px;";

/// Appends notifications to `#notification-container`, creating it on first use.
#[derive(Debug, Clone)]
pub struct Notifier {
    config: NotificationConfig,
}

impl Notifier {
    pub fn new(config: NotificationConfig) -> Self {
        Self { config }
    }

    pub fn show(&self, notification: &Notification) -> Result<Element, JsValue> {
        let document = dom::document()?;
        let container = match document.get_element_by_id(CONTAINER_ID) {
            Some(container) => container,
            None => create_container(&document)?,
        };

        let element = document.create_element("div")?;
        element.set_class_name(&notification.class_name());
        element.set_attribute("role", "alert")?;
        element.append_child(&document.create_text_node(&notification.message))?;

        let close = document.create_element("button")?;
        close.set_attribute("type", "button")?;
        close.set_class_name("btn-close");
        close.set_attribute("aria-label", "Close")?;
        element.append_child(&close)?;

        container.append_child(&element)?;

        let toast = Rc::new(Toast {
            element: element.clone(),
            fade_ms: self.config.fade_ms,
            dismissed: Cell::new(false),
            close_listener: RefCell::new(None),
        });

        let on_close = toast.clone();
        let listener = Listener::new(&close, "click", move |_| on_close.dismiss())?;
        *toast.close_listener.borrow_mut() = Some(listener);

        timers::schedule(self.config.auto_dismiss_ms, move || toast.dismiss())?;

        tracing::debug!("Showing {} notification", notification.kind.as_str());
        Ok(element)
    }
}

fn create_container(document: &Document) -> Result<Element, JsValue> {
    let container = document.create_element("div")?;
    container.set_id(CONTAINER_ID);
    container.set_attribute("style", CONTAINER_STYLE)?;
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?
        .append_child(&container)?;
    Ok(container)
}

struct Toast {
    element: Element,
    fade_ms: u32,
    dismissed: Cell<bool>,
    close_listener: RefCell<Option<Listener>>,
}

impl Toast {
    /// Start the fade-out and remove the element once it has played.
    /// Only the first call has any effect.
    fn dismiss(self: &Rc<Self>) {
        if self.dismissed.replace(true) {
            return;
        }

        let _ = self.element.class_list().remove_1("show");

        // the close listener may be running right now, so it is released
        // from the timer rather than here
        let toast = self.clone();
        let removal = timers::schedule(self.fade_ms, move || {
            toast.element.remove();
            toast.close_listener.borrow_mut().take();
        });
        if let Err(e) = removal {
            tracing::warn!("Failed to schedule notification removal: {:?}", e);
            self.element.remove();
        }
    }
}
