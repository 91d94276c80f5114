// File: src/app.rs
// Purpose: Application lifecycle - attach every component exactly once

use sitekit_core::SiteConfig;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::active::ActiveMenu;
use crate::forms::FormHandler;
use crate::images::ImageLoader;
use crate::menu::{BurgerMenu, NavToggle};
use crate::reveal::ScrollAnimations;
use crate::ripple::RippleEffect;
use crate::scroll::SmoothScroll;
use crate::styles;

/// Owns the page configuration and every attached component. Dropping it
/// detaches all listeners.
pub struct App {
    config: SiteConfig,
    components: Option<Components>,
}

#[allow(dead_code)]
struct Components {
    burger: Option<BurgerMenu>,
    nav_toggle: Option<NavToggle>,
    reveal: Option<ScrollAnimations>,
    ripple: RippleEffect,
    smooth_scroll: SmoothScroll,
    forms: FormHandler,
    images: ImageLoader,
}

impl App {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            components: None,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Whether `config` is the configuration this app was built with.
    pub fn is_configured_with(&self, config: &SiteConfig) -> bool {
        self.config == *config
    }

    pub fn is_running(&self) -> bool {
        self.components.is_some()
    }

    /// Attach all components to `document`. Starting a running app does
    /// nothing.
    pub fn start(&mut self, document: &Document) -> Result<(), JsValue> {
        if self.is_running() {
            tracing::debug!("App already started");
            return Ok(());
        }

        styles::inject(document)?;

        let config = &self.config;
        let components = Components {
            burger: BurgerMenu::attach(document, &config.menu)?,
            nav_toggle: NavToggle::attach(document)?,
            reveal: ScrollAnimations::attach(document)?,
            ripple: RippleEffect::attach(document)?,
            smooth_scroll: SmoothScroll::attach(document, &config.scroll)?,
            forms: FormHandler::attach(document, config)?,
            images: ImageLoader::attach(document)?,
        };
        let active_links = ActiveMenu::apply(document)?;

        tracing::info!(
            "Page enhanced: {} forms, {} active links, burger menu {}",
            components.forms.form_count(),
            active_links,
            if components.burger.is_some() { "attached" } else { "absent" },
        );
        self.components = Some(components);
        Ok(())
    }

    /// Detach every component.
    pub fn stop(&mut self) {
        if self.components.take().is_some() {
            tracing::debug!("App stopped");
        }
    }
}
