//! Toast notifications shown after form submission.

use serde::{Deserialize, Serialize};

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Bedankt! Uw bericht is succesvol verzonden.";
pub const SUBMIT_FAILURE_MESSAGE: &str = "Er is iets misgegaan. Probeer het later opnieuw.";

/// Visual style of a notification, mapped onto `alert-<kind>` classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Danger,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
            NotificationKind::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn submit_succeeded() -> Self {
        Self::new(NotificationKind::Success, SUBMIT_SUCCESS_MESSAGE)
    }

    pub fn submit_failed() -> Self {
        Self::new(NotificationKind::Danger, SUBMIT_FAILURE_MESSAGE)
    }

    /// Class list for the alert element.
    pub fn class_name(&self) -> String {
        format!("alert alert-{} alert-dismissible fade show", self.kind.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name() {
        assert_eq!(
            Notification::submit_succeeded().class_name(),
            "alert alert-success alert-dismissible fade show"
        );
        assert_eq!(Notification::submit_failed().kind, NotificationKind::Danger);
    }
}
