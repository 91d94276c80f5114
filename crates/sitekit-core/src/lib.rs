//! sitekit core
//!
//! DOM-independent rules behind the sitekit page enhancements: which
//! validation rule applies to a form field, what the verdict is, how the
//! navigation menu moves between states, which menu link is current, and the
//! small bits of geometry the click and scroll effects need.
//!
//! The browser bindings in `sitekit-wasm` read element state into the plain
//! types defined here and write the results back to the DOM.

pub mod config;
pub mod error;
pub mod field;
pub mod geometry;
pub mod menu;
pub mod nav;
pub mod notification;
pub mod reveal;
pub mod rules;
pub mod submit;

pub use config::SiteConfig;
pub use error::{Error, Result};
pub use field::{FieldKind, FieldState};
pub use menu::{MenuEvent, MenuState};
pub use notification::{Notification, NotificationKind};
pub use rules::{validate, ValidationMessage, Verdict};
pub use submit::{FormPayload, Submitter};
