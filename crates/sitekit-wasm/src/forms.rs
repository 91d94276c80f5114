// File: src/forms.rs
// Purpose: Live validation and the submit workflow for page forms

use std::cell::Cell;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use sitekit_core::config::FormsConfig;
use sitekit_core::{Error, FormPayload, Notification, SiteConfig, Submitter};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

use crate::dom::{self, Listener};
use crate::notify::Notifier;
use crate::timers::{self, Debouncer};
use crate::validation::{self, Field, ValidationManager, FIELD_SELECTOR, INVALID_CLASS};

pub const BUSY_LABEL: &str =
    r#"<span class="spinner-border spinner-border-sm" role="status" aria-hidden="true"></span> Verzenden..."#;

/// Stand-in backend: waits a fixed delay and reports success.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmitter {
    pub delay_ms: u32,
}

impl Submitter for SimulatedSubmitter {
    fn submit<'a>(&'a self, payload: &'a FormPayload) -> LocalBoxFuture<'a, sitekit_core::Result<()>> {
        async move {
            timers::sleep(self.delay_ms)
                .await
                .map_err(|e| Error::Submit(format!("{:?}", e)))?;
            tracing::debug!("Simulated submission of {} fields", payload.len());
            Ok(())
        }
        .boxed_local()
    }
}

/// Wires blur, input and submit handling onto every matching form.
pub struct FormHandler {
    forms: Vec<Rc<FormContext>>,
    _listeners: Vec<Listener>,
}

struct FormContext {
    form: Element,
    validator: ValidationManager,
    submitter: Rc<dyn Submitter>,
    notifier: Notifier,
    config: FormsConfig,
    in_flight: Cell<bool>,
}

impl FormHandler {
    /// Attach using the simulated submitter.
    pub fn attach(document: &Document, config: &SiteConfig) -> Result<Self, JsValue> {
        let submitter = Rc::new(SimulatedSubmitter {
            delay_ms: config.forms.submit_delay_ms,
        });
        Self::attach_with(document, config, submitter)
    }

    pub fn attach_with(
        document: &Document,
        config: &SiteConfig,
        submitter: Rc<dyn Submitter>,
    ) -> Result<Self, JsValue> {
        let validator = ValidationManager::new();
        let notifier = Notifier::new(config.notifications.clone());
        let mut forms = Vec::new();
        let mut listeners = Vec::new();

        for form in dom::elements(document.query_selector_all(&config.forms.selector)?) {
            let fields: Vec<Field> = dom::elements(form.query_selector_all(FIELD_SELECTOR)?)
                .into_iter()
                .map(Field::new)
                .collect();

            for field in &fields {
                let Field { element, kind } = field.clone();
                let blurred = element.clone();
                listeners.push(Listener::new(&element, "blur", move |_| {
                    validator.validate_as(&blurred, kind);
                })?);

                let typed = element.clone();
                let debouncer = Debouncer::new(config.forms.input_debounce_ms, move || {
                    if typed.class_list().contains(INVALID_CLASS) {
                        validator.validate_as(&typed, kind);
                    }
                });
                listeners.push(Listener::new(&element, "input", move |_| {
                    if let Err(e) = debouncer.trigger() {
                        tracing::warn!("Failed to schedule revalidation: {:?}", e);
                    }
                })?);
            }

            let context = Rc::new(FormContext {
                form: form.clone(),
                validator,
                submitter: submitter.clone(),
                notifier: notifier.clone(),
                config: config.forms.clone(),
                in_flight: Cell::new(false),
            });

            let on_submit = context.clone();
            listeners.push(Listener::new(&form, "submit", move |event| {
                event.prevent_default();
                on_submit.clone().begin_submit();
            })?);

            tracing::debug!("Enhanced form {:?} with {} fields", form.id(), fields.len());
            forms.push(context);
        }

        Ok(Self {
            forms,
            _listeners: listeners,
        })
    }

    pub fn form_count(&self) -> usize {
        self.forms.len()
    }
}

impl FormContext {
    /// Fields as the form holds them now. Fields added after attach take
    /// part in submit validation, the payload and the reset.
    fn current_fields(&self) -> Result<Vec<Field>, JsValue> {
        Ok(dom::elements(self.form.query_selector_all(FIELD_SELECTOR)?)
            .into_iter()
            .map(Field::new)
            .collect())
    }

    /// Validate synchronously, then hand off to the async submit.
    fn begin_submit(self: Rc<Self>) {
        if self.in_flight.get() {
            tracing::debug!("Ignoring submit while a submission is in flight");
            return;
        }
        let fields = match self.current_fields() {
            Ok(fields) => fields,
            Err(e) => {
                tracing::error!("Failed to read form fields: {:?}", e);
                return;
            }
        };
        if !self.validator.validate_fields(&fields) {
            tracing::debug!("Form {:?} has invalid fields, not submitting", self.form.id());
            return;
        }

        self.in_flight.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            self.submit().await;
        });
    }

    async fn submit(&self) {
        let button = self
            .form
            .query_selector(r#"button[type="submit"]"#)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        let original_label = button.as_ref().map(|b| b.inner_html()).unwrap_or_default();

        if let Some(button) = &button {
            button.set_disabled(true);
            button.set_inner_html(BUSY_LABEL);
        }

        let payload = match self.payload() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("Failed to collect form values: {:?}", e);
                FormPayload::new()
            }
        };
        let result = self.submitter.submit(&payload).await;

        if let Some(button) = &button {
            button.set_disabled(false);
            button.set_inner_html(&original_label);
        }
        self.in_flight.set(false);

        match result {
            Ok(()) => {
                tracing::info!("Form {:?} submitted", self.form.id());
                if let Err(e) = self.finish() {
                    tracing::error!("Failed to finish submission: {:?}", e);
                }
            }
            Err(e) => {
                tracing::error!("{}", e);
                if let Err(e) = self.notifier.show(&Notification::submit_failed()) {
                    tracing::error!("Failed to show notification: {:?}", e);
                }
            }
        }
    }

    /// Success path after the submitter returns: notify, reset, redirect.
    fn finish(&self) -> Result<(), JsValue> {
        self.notifier.show(&Notification::submit_succeeded())?;

        if let Some(form) = self.form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
        self.form.class_list().remove_1("was-validated")?;
        validation::clear_markers(&self.current_fields()?)?;

        let url = self.config.redirect_url.clone();
        if url.is_empty() {
            return Ok(());
        }
        timers::schedule(self.config.redirect_delay_ms, move || {
            let navigated = dom::window().and_then(|w| w.location().set_href(&url));
            if let Err(e) = navigated {
                tracing::error!("Failed to navigate to {}: {:?}", url, e);
            }
        })?;
        Ok(())
    }

    /// Named values in document order. Unchecked checkboxes and radios
    /// are left out.
    fn payload(&self) -> Result<FormPayload, JsValue> {
        let mut payload = FormPayload::new();
        for Field { element, .. } in self.current_fields()? {
            let Some(name) = element.get_attribute("name").filter(|n| !n.is_empty()) else {
                continue;
            };
            if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                let kind = input.type_();
                if (kind == "checkbox" || kind == "radio") && !input.checked() {
                    continue;
                }
                if kind == "submit" || kind == "button" {
                    continue;
                }
            }
            payload.push(name, validation::field_state(&element).value);
        }
        Ok(payload)
    }
}
