// File: src/config.rs
// Purpose: Site configuration with defaults for every knob

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Page-level configuration.
///
/// Every section and field is optional; missing values fall back to the
/// defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    #[serde(default)]
    pub forms: FormsConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,

    #[serde(default)]
    pub menu: MenuConfig,

    #[serde(default)]
    pub scroll: ScrollConfig,

    /// Minimum level written to the browser console
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Form validation and submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormsConfig {
    /// Forms to enhance (default: ".needs-validation, form")
    #[serde(default = "default_form_selector")]
    pub selector: String,

    #[serde(default = "default_input_debounce_ms")]
    pub input_debounce_ms: u32,

    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u32,

    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u32,

    /// Where to go after a successful submit (default: "thank_you.html")
    #[serde(default = "default_redirect_url")]
    pub redirect_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationConfig {
    #[serde(default = "default_auto_dismiss_ms")]
    pub auto_dismiss_ms: u32,

    /// Time the fade-out transition gets before the element is removed
    #[serde(default = "default_fade_ms")]
    pub fade_ms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuConfig {
    #[serde(default = "default_desktop_breakpoint_px")]
    pub desktop_breakpoint_px: f64,

    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScrollConfig {
    /// Header offset used when the page has no `.l-header` or `.navbar`
    #[serde(default = "default_fallback_header_height_px")]
    pub fallback_header_height_px: f64,
}

// Default values
fn default_log_level() -> String {
    "info".to_string()
}

fn default_form_selector() -> String {
    ".needs-validation, form".to_string()
}

fn default_input_debounce_ms() -> u32 {
    300
}

fn default_submit_delay_ms() -> u32 {
    1000
}

fn default_redirect_delay_ms() -> u32 {
    1500
}

fn default_redirect_url() -> String {
    "thank_you.html".to_string()
}

fn default_auto_dismiss_ms() -> u32 {
    5000
}

fn default_fade_ms() -> u32 {
    150
}

fn default_desktop_breakpoint_px() -> f64 {
    1024.0
}

fn default_resize_debounce_ms() -> u32 {
    150
}

fn default_fallback_header_height_px() -> f64 {
    70.0
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            forms: FormsConfig::default(),
            notifications: NotificationConfig::default(),
            menu: MenuConfig::default(),
            scroll: ScrollConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            selector: default_form_selector(),
            input_debounce_ms: default_input_debounce_ms(),
            submit_delay_ms: default_submit_delay_ms(),
            redirect_delay_ms: default_redirect_delay_ms(),
            redirect_url: default_redirect_url(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: default_auto_dismiss_ms(),
            fade_ms: default_fade_ms(),
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            desktop_breakpoint_px: default_desktop_breakpoint_px(),
            resize_debounce_ms: default_resize_debounce_ms(),
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            fallback_header_height_px: default_fallback_header_height_px(),
        }
    }
}

impl SiteConfig {
    /// Parse configuration from JSON. Blank input yields the defaults.
    pub fn from_json(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.forms.selector, ".needs-validation, form");
        assert_eq!(config.forms.input_debounce_ms, 300);
        assert_eq!(config.forms.submit_delay_ms, 1000);
        assert_eq!(config.forms.redirect_delay_ms, 1500);
        assert_eq!(config.forms.redirect_url, "thank_you.html");
        assert_eq!(config.notifications.auto_dismiss_ms, 5000);
        assert_eq!(config.notifications.fade_ms, 150);
        assert_eq!(config.menu.desktop_breakpoint_px, 1024.0);
        assert_eq!(config.scroll.fallback_header_height_px, 70.0);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_empty_config() {
        assert_eq!(SiteConfig::from_json("  ").unwrap(), SiteConfig::default());
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_missing_log_level_defaults_to_info() {
        let config = SiteConfig::from_json(r#"{ "menu": {} }"#).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_level, SiteConfig::default().log_level);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{ "forms": { "redirect_url": "/bedankt" }, "log_level": "debug" }"#;
        let config = SiteConfig::from_json(json).unwrap();
        assert_eq!(config.forms.redirect_url, "/bedankt");
        assert_eq!(config.forms.submit_delay_ms, 1000);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_config() {
        let err = SiteConfig::from_json("{ forms: }").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
