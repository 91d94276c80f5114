// File: src/validation.rs
// Purpose: Reading form fields from the DOM and reflecting verdicts on them

use sitekit_core::{validate, FieldKind, FieldState, Verdict};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::dom;

pub const FIELD_SELECTOR: &str = "input, textarea, select";
pub const VALID_CLASS: &str = "is-valid";
pub const INVALID_CLASS: &str = "is-invalid";
pub const FEEDBACK_CLASS: &str = "invalid-feedback";

/// Explicit kind declaration on a field, e.g. `data-validate="phone"`.
pub const KIND_ATTRIBUTE: &str = "data-validate";
/// Per-field replacement for the built-in message text.
pub const MESSAGE_ATTRIBUTE: &str = "data-error-message";

/// A form control together with the validation kind resolved for it.
#[derive(Debug, Clone)]
pub struct Field {
    pub element: Element,
    pub kind: FieldKind,
}

impl Field {
    pub fn new(element: Element) -> Self {
        let kind = field_kind(&element);
        Self { element, kind }
    }
}

/// Resolve the validation kind for a form control.
pub fn field_kind(element: &Element) -> FieldKind {
    let declared = element.get_attribute(KIND_ATTRIBUTE);
    FieldKind::resolve(
        declared.as_deref(),
        &input_type(element),
        &element.id(),
        element.has_type::<HtmlTextAreaElement>(),
    )
}

fn input_type(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.type_()
    } else if element.has_type::<HtmlTextAreaElement>() {
        "textarea".to_string()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.type_()
    } else {
        String::new()
    }
}

/// Current value and flags of a form control.
pub fn field_state(element: &Element) -> FieldState {
    let required = element.has_attribute("required");

    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        let is_checkbox = input.type_() == "checkbox";
        FieldState {
            value: input.value(),
            required,
            is_checkbox,
            checked: is_checkbox && input.checked(),
        }
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        FieldState {
            value: textarea.value(),
            required,
            ..FieldState::default()
        }
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        FieldState {
            value: select.value(),
            required,
            ..FieldState::default()
        }
    } else {
        FieldState {
            required,
            ..FieldState::default()
        }
    }
}

/// Validates fields and keeps their visual state in step with the verdict.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationManager;

impl ValidationManager {
    pub fn new() -> Self {
        Self
    }

    /// Validate one control, resolving its kind from the element.
    pub fn validate_field(&self, element: &Element) -> bool {
        self.validate_as(element, field_kind(element))
    }

    /// Validate one control against an already resolved kind.
    pub fn validate_as(&self, element: &Element, kind: FieldKind) -> bool {
        let verdict = validate(kind, &field_state(element));

        let message = match verdict {
            Verdict::Valid => None,
            Verdict::Invalid(message) => Some(
                element
                    .get_attribute(MESSAGE_ATTRIBUTE)
                    .unwrap_or_else(|| message.text().to_string()),
            ),
        };

        if let Err(e) = self.set_field_validity(element, message.as_deref()) {
            tracing::warn!("Failed to update field {:?}: {:?}", element.id(), e);
        }

        verdict.is_valid()
    }

    /// Validate every control in `form`. All fields are checked so each
    /// invalid one shows its feedback.
    pub fn validate_form(&self, form: &Element) -> Result<bool, JsValue> {
        let fields: Vec<Field> = dom::elements(form.query_selector_all(FIELD_SELECTOR)?)
            .into_iter()
            .map(Field::new)
            .collect();
        Ok(self.validate_fields(&fields))
    }

    pub fn validate_fields(&self, fields: &[Field]) -> bool {
        fields
            .iter()
            .fold(true, |all_valid, field| self.validate_as(&field.element, field.kind) && all_valid)
    }

    /// Mark a field valid (`None`) or invalid with `message`.
    pub fn set_field_validity(&self, element: &Element, message: Option<&str>) -> Result<(), JsValue> {
        let classes = element.class_list();
        match message {
            None => {
                classes.remove_1(INVALID_CLASS)?;
                classes.add_1(VALID_CLASS)?;
            }
            Some(_) => {
                classes.remove_1(VALID_CLASS)?;
                classes.add_1(INVALID_CLASS)?;
            }
        }

        let Some(feedback) = self.feedback_for(element)? else {
            return Ok(());
        };
        feedback.set_text_content(Some(message.unwrap_or("")));
        dom::set_style(&feedback, "display", if message.is_some() { "block" } else { "none" })
    }

    /// The `.invalid-feedback` sibling of a field, created on first use.
    fn feedback_for(&self, element: &Element) -> Result<Option<Element>, JsValue> {
        let Some(parent) = element.parent_element() else {
            return Ok(None);
        };

        if let Some(existing) = parent.query_selector(&format!(".{}", FEEDBACK_CLASS))? {
            return Ok(Some(existing));
        }

        let feedback = dom::document()?.create_element("div")?;
        feedback.set_class_name(FEEDBACK_CLASS);
        parent.append_child(&feedback)?;
        Ok(Some(feedback))
    }
}

/// Remove valid/invalid markers from a set of fields.
pub fn clear_markers(fields: &[Field]) -> Result<(), JsValue> {
    for field in fields {
        field.element.class_list().remove_2(VALID_CLASS, INVALID_CLASS)?;
    }
    Ok(())
}
