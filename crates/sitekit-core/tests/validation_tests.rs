//! Integration tests for field validation
//!
//! Walks fields through kind resolution and validation the way the browser
//! bindings do, using the markup conventions pages rely on.

use pretty_assertions::assert_eq;
use rstest::rstest;
use sitekit_core::{validate, FieldKind, FieldState, ValidationMessage, Verdict};

fn check(input_type: &str, id: &str, is_textarea: bool, field: FieldState) -> Verdict {
    let kind = FieldKind::infer(input_type, id, is_textarea);
    validate(kind, &field)
}

#[test]
fn test_contact_email_by_id() {
    let verdict = check("text", "contact-email", false, FieldState::text("not-an-email"));
    assert_eq!(verdict, Verdict::Invalid(ValidationMessage::InvalidEmail));
    assert_eq!(verdict.message().unwrap().text(), "Voer een geldig e-mailadres in");

    assert_eq!(check("text", "contact-email", false, FieldState::text("a@b.co")), Verdict::Valid);
}

#[rstest]
#[case(9, false)]
#[case(10, true)]
fn test_textarea_minimum(#[case] len: usize, #[case] valid: bool) {
    let verdict = check("textarea", "body", true, FieldState::text("x".repeat(len)));
    assert_eq!(verdict.is_valid(), valid);
    if !valid {
        assert_eq!(
            verdict.message().unwrap().text(),
            "Het bericht moet minimaal 10 tekens bevatten"
        );
    }
}

#[test]
fn test_required_checkbox_regardless_of_other_rules() {
    let verdict = check("checkbox", "privacy", false, FieldState::checkbox(false).required());
    assert_eq!(verdict, Verdict::Invalid(ValidationMessage::MustAccept));
}

#[test]
fn test_required_beats_pattern() {
    let verdict = check("text", "phone", false, FieldState::text("").required());
    assert_eq!(verdict.message().unwrap().text(), "Dit veld is verplicht");
}

#[test]
fn test_declared_kind_replaces_sniffing() {
    // the id says email, the page says this is a free-text name field
    let kind = FieldKind::resolve(Some("name"), "text", "email-owner-name", false);
    assert_eq!(validate(kind, &FieldState::text("Marie-José")), Verdict::Valid);
    assert_eq!(
        validate(kind, &FieldState::text("m@j.nl")),
        Verdict::Invalid(ValidationMessage::InvalidName)
    );
}

#[test]
fn test_whole_form_collects_every_failure() {
    let fields = [
        (FieldKind::Name, FieldState::text("J").required()),
        (FieldKind::Email, FieldState::text("a@b.co").required()),
        (FieldKind::Phone, FieldState::text("123")),
        (FieldKind::Checkbox, FieldState::checkbox(false).required()),
    ];

    let verdicts: Vec<Verdict> = fields.iter().map(|(k, f)| validate(*k, f)).collect();
    let failures: Vec<ValidationMessage> = verdicts.iter().filter_map(Verdict::message).collect();

    assert_eq!(
        failures,
        vec![
            ValidationMessage::InvalidName,
            ValidationMessage::InvalidPhone,
            ValidationMessage::MustAccept,
        ]
    );
}
