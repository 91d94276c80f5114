// File: src/field.rs
// Purpose: Field kinds and the element state validation reads

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Which validation rule a form field is checked against.
///
/// Pages declare it with `data-validate="<kind>"`. Fields without a
/// declaration get a kind inferred from their type, tag and id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Email,
    Phone,
    Message,
    Name,
    Checkbox,
    Generic,
}

impl FieldKind {
    /// Infer a kind from element metadata.
    ///
    /// First match wins: email, phone, message, name, checkbox. The id is
    /// matched by substring, so `contact-email` is an email field whatever
    /// its declared input type.
    pub fn infer(input_type: &str, id: &str, is_textarea: bool) -> Self {
        if input_type == "email" || id.contains("email") {
            FieldKind::Email
        } else if input_type == "tel" || id.contains("phone") {
            FieldKind::Phone
        } else if is_textarea || id.contains("message") {
            FieldKind::Message
        } else if id.to_lowercase().contains("name") {
            FieldKind::Name
        } else if input_type == "checkbox" {
            FieldKind::Checkbox
        } else {
            FieldKind::Generic
        }
    }

    /// Use the declared kind when it parses, otherwise infer one.
    pub fn resolve(declared: Option<&str>, input_type: &str, id: &str, is_textarea: bool) -> Self {
        if let Some(declared) = declared {
            match declared.parse() {
                Ok(kind) => return kind,
                Err(e) => tracing::warn!("{} on field {:?}, inferring instead", e, id),
            }
        }
        Self::infer(input_type, id, is_textarea)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Phone => "phone",
            FieldKind::Message => "message",
            FieldKind::Name => "name",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Generic => "generic",
        }
    }
}

impl FromStr for FieldKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(FieldKind::Email),
            "phone" | "tel" => Ok(FieldKind::Phone),
            "message" => Ok(FieldKind::Message),
            "name" => Ok(FieldKind::Name),
            "checkbox" => Ok(FieldKind::Checkbox),
            "generic" | "required" => Ok(FieldKind::Generic),
            _ => Err(Error::UnknownFieldKind(s.to_string())),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the element state a verdict depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Current value, untrimmed.
    pub value: String,
    pub required: bool,
    /// `type="checkbox"` on the element itself.
    pub is_checkbox: bool,
    pub checked: bool,
}

impl FieldState {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn checkbox(checked: bool) -> Self {
        Self {
            value: "on".to_string(),
            is_checkbox: true,
            checked,
            ..Self::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("text", "contact-email", false, FieldKind::Email)]
    #[case("email", "x", false, FieldKind::Email)]
    #[case("text", "phone", false, FieldKind::Phone)]
    #[case("tel", "mobile", false, FieldKind::Phone)]
    #[case("textarea", "body", true, FieldKind::Message)]
    #[case("text", "your-message", false, FieldKind::Message)]
    #[case("text", "firstName", false, FieldKind::Name)]
    #[case("text", "NAME", false, FieldKind::Name)]
    #[case("checkbox", "privacy", false, FieldKind::Checkbox)]
    #[case("text", "company", false, FieldKind::Generic)]
    fn test_infer(
        #[case] input_type: &str,
        #[case] id: &str,
        #[case] is_textarea: bool,
        #[case] expected: FieldKind,
    ) {
        assert_eq!(FieldKind::infer(input_type, id, is_textarea), expected);
    }

    #[test]
    fn test_email_beats_name_in_id() {
        // both substrings present, email comes first
        assert_eq!(FieldKind::infer("text", "name-email", false), FieldKind::Email);
    }

    #[test]
    fn test_declared_kind_wins() {
        let kind = FieldKind::resolve(Some("phone"), "text", "contact-email", false);
        assert_eq!(kind, FieldKind::Phone);
    }

    #[test]
    fn test_unknown_declared_kind_falls_back() {
        let kind = FieldKind::resolve(Some("zipcode"), "text", "contact-email", false);
        assert_eq!(kind, FieldKind::Email);
        assert!(matches!(
            "zipcode".parse::<FieldKind>(),
            Err(Error::UnknownFieldKind(_))
        ));
    }
}
