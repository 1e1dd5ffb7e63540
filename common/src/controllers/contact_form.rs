//! Local validation of the contact form.
//!
//! Submission never leaves the page: the attempt is validated and resolved into
//! a single inline message. The previous message is always removed before the
//! new one is inserted.

use crate::model::form::{ContactSubmission, FormSubmissionResult};

pub trait FormSurface {
    /// Current raw value of a named field, if the field exists.
    fn field(&self, name: &str) -> Option<String>;
    /// Removes the inline message, if any.
    fn remove_message(&mut self);
    fn insert_message(&mut self, result: &FormSubmissionResult);
    /// Clears every field.
    fn reset(&mut self);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ContactForm;

impl ContactForm {
    pub fn evaluate(submission: &ContactSubmission) -> FormSubmissionResult {
        if submission.is_complete() {
            FormSubmissionResult::success()
        } else {
            FormSubmissionResult::warning()
        }
    }

    /// Handles one submission attempt against the form surface.
    pub fn submit(&self, surface: &mut impl FormSurface) -> FormSubmissionResult {
        let submission = ContactSubmission::collect(|name| surface.field(name));
        let result = Self::evaluate(&submission);
        surface.remove_message();
        surface.insert_message(&result);
        if result.is_success() {
            surface.reset();
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::model::form::{AlertKind, FIELD_NAMES};

    #[derive(Default)]
    struct FakeForm {
        fields: HashMap<String, String>,
        messages: Vec<FormSubmissionResult>,
        removals: usize,
    }

    impl FormSurface for FakeForm {
        fn field(&self, name: &str) -> Option<String> {
            self.fields.get(name).cloned()
        }

        fn remove_message(&mut self) {
            self.removals += 1;
            self.messages.clear();
        }

        fn insert_message(&mut self, result: &FormSubmissionResult) {
            self.messages.push(*result);
        }

        fn reset(&mut self) {
            for value in self.fields.values_mut() {
                value.clear();
            }
        }
    }

    #[test]
    fn whitespace_only_field_is_missing() {
        let mut form = FakeForm::default();
        for name in FIELD_NAMES {
            form.fields.insert(name.to_string(), "filled".to_string());
        }
        form.fields.insert("message".to_string(), "  \n ".to_string());
        let result = ContactForm.submit(&mut form);
        assert_eq!(result.kind, AlertKind::Warning);
        assert_eq!(form.fields["name"], "filled");
        assert_eq!(form.messages.len(), 1);
    }

    #[test]
    fn absent_field_is_missing() {
        let mut form = FakeForm::default();
        form.fields.insert("name".to_string(), "A".to_string());
        assert!(!ContactForm.submit(&mut form).is_success());
    }

    #[test]
    fn previous_message_removed_first() {
        let mut form = FakeForm::default();
        ContactForm.submit(&mut form);
        ContactForm.submit(&mut form);
        assert_eq!(form.removals, 2);
        assert_eq!(form.messages.len(), 1);
    }
}
