//! Contact form binding.
//!
//! The submit event is always cancelled; the form is validated locally and a
//! single `.rti-form-alert` node reports the outcome.

use common::controllers::{ContactForm, FormSurface};
use common::model::form::{FormSubmissionResult, ALERT_MARKER_CLASS, FIELD_NAMES};
use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::dom;

pub const FORM_ID: &str = "rtiForm";

pub struct FormElement(pub HtmlFormElement);

impl FormSurface for FormElement {
    fn field(&self, name: &str) -> Option<String> {
        let data = FormData::new_with_form(&self.0).ok()?;
        data.get(name).as_string()
    }

    fn remove_message(&mut self) {
        if let Ok(Some(existing)) = self.0.query_selector(&format!(".{}", ALERT_MARKER_CLASS)) {
            existing.remove();
        }
    }

    fn insert_message(&mut self, result: &FormSubmissionResult) {
        let Some(document) = self.0.owner_document() else {
            return;
        };
        let Ok(alert) = document.create_element("div") else {
            return;
        };
        alert.set_class_name(&result.class_name());
        alert.set_text_content(Some(result.text));
        let inserted = alert
            .set_attribute("role", "status")
            .and_then(|_| self.0.append_child(&alert));
        if let Err(err) = inserted {
            gloo_console::warn!(format!("form message not shown: {}", dom::js_err(err)));
        }
    }

    fn reset(&mut self) {
        self.0.reset();
        // `reset` restores markup defaults; the contact fields end up empty.
        for name in FIELD_NAMES {
            let Ok(Some(field)) = self.0.query_selector(&format!("[name=\"{}\"]", name)) else {
                continue;
            };
            match field.dyn_into::<HtmlInputElement>() {
                Ok(input) => input.set_value(""),
                Err(field) => {
                    if let Ok(textarea) = field.dyn_into::<HtmlTextAreaElement>() {
                        textarea.set_value("");
                    }
                }
            }
        }
    }
}

/// Attaches the submit handler. The returned listener detaches when dropped.
pub fn bind(form: HtmlFormElement) -> EventListener {
    let target = form.clone();
    let mut surface = FormElement(form);
    EventListener::new_with_options(
        &target,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            let result = ContactForm.submit(&mut surface);
            gloo_console::debug!("contact form submitted:", result.kind.as_str());
        },
    )
}

pub fn init() -> Result<(), String> {
    let document = dom::document()?;
    let Some(form) = document
        .get_element_by_id(FORM_ID)
        .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
    else {
        gloo_console::debug!("no contact form on this page");
        return Ok(());
    };
    bind(form).forget();
    Ok(())
}
