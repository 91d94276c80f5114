// File: src/menu.rs
// Purpose: Burger menu and the simple header nav toggle

use std::cell::Cell;
use std::rc::Rc;

use sitekit_core::config::MenuConfig;
use sitekit_core::{MenuEvent, MenuState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use crate::dom::{self, Listener};
use crate::timers::Debouncer;

/// Collapsible `.navbar-collapse` driven by a `.navbar-toggler`.
pub struct BurgerMenu {
    parts: Rc<MenuParts>,
    _listeners: Vec<Listener>,
}

struct MenuParts {
    toggler: Element,
    collapse: Element,
    body: Option<HtmlElement>,
    state: Cell<MenuState>,
    breakpoint: f64,
}

impl BurgerMenu {
    /// Returns `Ok(None)` when the page has no toggler or no menu.
    pub fn attach(document: &Document, config: &MenuConfig) -> Result<Option<Self>, JsValue> {
        let (Some(toggler), Some(collapse)) = (
            dom::find(document, ".navbar-toggler"),
            dom::find(document, ".navbar-collapse"),
        ) else {
            return Ok(None);
        };

        let parts = Rc::new(MenuParts {
            toggler,
            collapse,
            body: document.body(),
            state: Cell::new(MenuState::Closed),
            breakpoint: config.desktop_breakpoint_px,
        });
        let mut listeners = Vec::new();

        let on_toggle = parts.clone();
        listeners.push(Listener::new(&parts.toggler, "click", move |event| {
            event.prevent_default();
            on_toggle.apply(MenuEvent::Toggle);
        })?);

        let on_key = parts.clone();
        listeners.push(Listener::new(document, "keydown", move |event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .map(|e| e.key() == "Escape")
                .unwrap_or(false);
            if is_escape {
                on_key.apply(MenuEvent::Escape);
            }
        })?);

        for link in dom::elements(parts.collapse.query_selector_all(".nav-link")?) {
            let on_link = parts.clone();
            listeners.push(Listener::new(&link, "click", move |_| {
                on_link.apply(MenuEvent::LinkClicked);
            })?);
        }

        let on_resize = parts.clone();
        let debouncer = Debouncer::new(config.resize_debounce_ms, move || {
            let width = dom::window()
                .and_then(|w| w.inner_width())
                .ok()
                .and_then(|w| w.as_f64());
            if let Some(width) = width {
                on_resize.apply(MenuEvent::Resized { width });
            }
        });
        listeners.push(Listener::new(&dom::window()?.into(), "resize", move |_| {
            if let Err(e) = debouncer.trigger() {
                tracing::warn!("Failed to debounce resize: {:?}", e);
            }
        })?);

        Ok(Some(Self {
            parts,
            _listeners: listeners,
        }))
    }

    pub fn state(&self) -> MenuState {
        self.parts.state.get()
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    pub fn toggle(&self) {
        self.parts.apply(MenuEvent::Toggle);
    }

    pub fn close(&self) {
        if self.is_open() {
            self.parts.apply(MenuEvent::Toggle);
        }
    }
}

impl MenuParts {
    fn apply(&self, event: MenuEvent) {
        let current = self.state.get();
        let next = current.next(event, self.breakpoint);
        if next == current {
            return;
        }
        if let Err(e) = self.render(next) {
            tracing::warn!("Failed to update menu: {:?}", e);
        }
        self.state.set(next);
        tracing::debug!("Menu {:?} -> {:?} on {:?}", current, next, event);
    }

    fn render(&self, state: MenuState) -> Result<(), JsValue> {
        let open = state.is_open();
        self.collapse.class_list().toggle_with_force("show", open)?;
        self.toggler.class_list().toggle_with_force("active", open)?;
        self.toggler.set_attribute("aria-expanded", state.aria_expanded())?;

        if let Some(body) = &self.body {
            if open {
                body.style().set_property("overflow", "hidden")?;
            } else {
                body.style().remove_property("overflow")?;
            }
        }
        Ok(())
    }
}

/// `.nav-toggle` button that shows and hides `.primary-nav`.
pub struct NavToggle {
    nav: Element,
    _listener: Listener,
}

impl NavToggle {
    pub fn attach(document: &Document) -> Result<Option<Self>, JsValue> {
        let (Some(toggle), Some(nav)) = (
            dom::find(document, ".nav-toggle"),
            dom::find(document, ".primary-nav"),
        ) else {
            return Ok(None);
        };

        let target = nav.clone();
        let button = toggle.clone();
        let listener = Listener::new(&toggle, "click", move |_| {
            let toggled = target.class_list().toggle("is-open").and_then(|open| {
                button.set_attribute("aria-expanded", if open { "true" } else { "false" })
            });
            if let Err(e) = toggled {
                tracing::warn!("Failed to toggle navigation: {:?}", e);
            }
        })?;

        Ok(Some(Self {
            nav,
            _listener: listener,
        }))
    }

    pub fn is_open(&self) -> bool {
        self.nav.class_list().contains("is-open")
    }
}
