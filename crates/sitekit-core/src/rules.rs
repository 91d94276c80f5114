// File: src/rules.rs
// Purpose: Per-kind validation patterns, messages and the verdict

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::field::{FieldKind, FieldState};

// Whitespace classes follow the browser's `\s`: Unicode White_Space plus
// U+FEFF, minus U+0085.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@--\x{85}]+@[^\s\x{FEFF}@--\x{85}]+\.[^\s\x{FEFF}@--\x{85}]+$")
        .expect("valid email pattern")
});

// Latin letters plus the Latin-1 supplement range, so accented names pass
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-ZÀ-ÿ\s\x{FEFF}\-'--\x{85}]{2,50}$").expect("valid name pattern")
});

// ASCII digits only
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9\s\x{FEFF}+\-()--\x{85}]{10,20}$").expect("valid phone pattern")
});

/// Characters `.` refuses to match in a browser regex.
const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

const MESSAGE_MIN_UNITS: usize = 10;

fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Strip leading and trailing whitespace the way `String.prototype.trim` does.
pub fn trim_value(value: &str) -> &str {
    value.trim_matches(is_js_whitespace)
}

/// `^.{10,}$` as a browser evaluates it: a single line of at least ten
/// UTF-16 code units.
fn is_long_message(value: &str) -> bool {
    !value.contains(LINE_TERMINATORS) && value.encode_utf16().count() >= MESSAGE_MIN_UNITS
}

/// The fixed set of user-facing validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationMessage {
    Required,
    InvalidEmail,
    InvalidPhone,
    MessageTooShort,
    InvalidName,
    MustAccept,
}

impl ValidationMessage {
    pub fn text(&self) -> &'static str {
        match self {
            ValidationMessage::Required => "Dit veld is verplicht",
            ValidationMessage::InvalidEmail => "Voer een geldig e-mailadres in",
            ValidationMessage::InvalidPhone => "Voer een geldig telefoonnummer in",
            ValidationMessage::MessageTooShort => "Het bericht moet minimaal 10 tekens bevatten",
            ValidationMessage::InvalidName => "Voer een geldige naam in (alleen letters)",
            ValidationMessage::MustAccept => "U moet akkoord gaan met deze voorwaarden",
        }
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Outcome of validating one field. Invalid input is an expected state,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(ValidationMessage),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    pub fn message(&self) -> Option<ValidationMessage> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(message) => Some(*message),
        }
    }
}

/// Check a non-empty, trimmed value against the pattern for `kind`.
///
/// Generic and checkbox fields have no pattern and always pass.
pub fn check_pattern(kind: FieldKind, value: &str) -> Verdict {
    let (matches, message) = match kind {
        FieldKind::Email => (EMAIL_REGEX.is_match(value), ValidationMessage::InvalidEmail),
        FieldKind::Phone => (PHONE_REGEX.is_match(value), ValidationMessage::InvalidPhone),
        FieldKind::Message => (is_long_message(value), ValidationMessage::MessageTooShort),
        FieldKind::Name => (NAME_REGEX.is_match(value), ValidationMessage::InvalidName),
        FieldKind::Checkbox | FieldKind::Generic => return Verdict::Valid,
    };

    if matches {
        Verdict::Valid
    } else {
        Verdict::Invalid(message)
    }
}

/// Validate a field of the given kind.
///
/// A required field with a blank value fails with [`ValidationMessage::Required`];
/// a non-blank value is matched against the kind's pattern; empty optional
/// fields pass. A required checkbox that is not checked fails with
/// [`ValidationMessage::MustAccept`] whatever the earlier outcome.
pub fn validate(kind: FieldKind, field: &FieldState) -> Verdict {
    let value = trim_value(&field.value);

    let verdict = if field.required && value.is_empty() {
        Verdict::Invalid(ValidationMessage::Required)
    } else if !value.is_empty() {
        check_pattern(kind, value)
    } else {
        Verdict::Valid
    };

    if field.is_checkbox && field.required && !field.checked {
        return Verdict::Invalid(ValidationMessage::MustAccept);
    }

    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("a@b.co", true)]
    #[case("user.name+tag@example.nl", true)]
    #[case("not-an-email", false)]
    #[case("a@b", false)]
    #[case("a b@c.d", false)]
    #[case("a@@b.co", false)]
    fn test_email_pattern(#[case] value: &str, #[case] valid: bool) {
        assert_eq!(check_pattern(FieldKind::Email, value).is_valid(), valid);
    }

    #[rstest]
    #[case("Jan", true)]
    #[case("Zoë van der Berg", true)]
    #[case("O'Neil-Smith", true)]
    #[case("J", false)]
    #[case("R2D2", false)]
    #[case("Łukasz", false)]
    fn test_name_pattern(#[case] value: &str, #[case] valid: bool) {
        assert_eq!(check_pattern(FieldKind::Name, value).is_valid(), valid);
    }

    #[rstest]
    #[case("0612345678", true)]
    #[case("+31 (0)20 123-4567", true)]
    #[case("12345", false)]
    #[case("06-1234-abcd", false)]
    #[case("123456789012345678901", false)]
    fn test_phone_pattern(#[case] value: &str, #[case] valid: bool) {
        assert_eq!(check_pattern(FieldKind::Phone, value).is_valid(), valid);
    }

    #[test]
    fn test_message_length_boundary() {
        assert_eq!(
            check_pattern(FieldKind::Message, "123456789"),
            Verdict::Invalid(ValidationMessage::MessageTooShort)
        );
        assert_eq!(check_pattern(FieldKind::Message, "1234567890"), Verdict::Valid);
    }

    #[rstest]
    #[case("first line\nsecond line")]
    #[case("abcd\refghi")]
    #[case("first line\u{2028}second line")]
    fn test_message_spanning_lines_is_rejected(#[case] value: &str) {
        assert!(!check_pattern(FieldKind::Message, value).is_valid());
    }

    #[test]
    fn test_message_length_counts_utf16_units() {
        // five astral characters are ten UTF-16 units
        assert!(check_pattern(FieldKind::Message, "😀😀😀😀😀").is_valid());
        assert!(!check_pattern(FieldKind::Message, "😀😀😀😀").is_valid());
    }

    #[test]
    fn test_byte_order_mark_counts_as_whitespace() {
        let field = FieldState::text("\u{FEFF}").required();
        assert_eq!(
            validate(FieldKind::Generic, &field),
            Verdict::Invalid(ValidationMessage::Required)
        );
        assert_eq!(trim_value("\u{FEFF} Jan \u{FEFF}"), "Jan");
        assert!(!check_pattern(FieldKind::Email, "a\u{FEFF}b@c.de").is_valid());
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        assert_eq!(trim_value("\u{85}x"), "\u{85}x");
        assert!(check_pattern(FieldKind::Email, "a\u{85}b@c.de").is_valid());
    }

    #[test]
    fn test_required_empty() {
        let field = FieldState::text("   ").required();
        assert_eq!(
            validate(FieldKind::Email, &field),
            Verdict::Invalid(ValidationMessage::Required)
        );
    }

    #[test]
    fn test_optional_empty_is_valid() {
        assert_eq!(validate(FieldKind::Phone, &FieldState::text("")), Verdict::Valid);
    }

    #[test]
    fn test_value_is_trimmed() {
        assert_eq!(validate(FieldKind::Email, &FieldState::text("  a@b.co  ")), Verdict::Valid);
    }

    #[test]
    fn test_unchecked_required_checkbox() {
        let field = FieldState::checkbox(false).required();
        let verdict = validate(FieldKind::Checkbox, &field);
        assert_eq!(verdict.message(), Some(ValidationMessage::MustAccept));
        assert_eq!(verdict.message().unwrap().text(), "U moet akkoord gaan met deze voorwaarden");
    }

    #[test]
    fn test_checkbox_rule_overrides_kind() {
        // a checkbox whose id sniffs as name still needs to be checked
        let field = FieldState::checkbox(false).required();
        assert_eq!(
            validate(FieldKind::Name, &field),
            Verdict::Invalid(ValidationMessage::MustAccept)
        );
        assert!(validate(FieldKind::Name, &FieldState::checkbox(true).required()).is_valid());
    }

    #[test]
    fn test_optional_checkbox_may_stay_unchecked() {
        assert!(validate(FieldKind::Checkbox, &FieldState::checkbox(false)).is_valid());
    }

    #[test]
    fn test_generic_required() {
        assert!(validate(FieldKind::Generic, &FieldState::text("anything").required()).is_valid());
    }
}
