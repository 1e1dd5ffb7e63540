/// Named fields of the contact form, in display order.
pub const FIELD_NAMES: [&str; 4] = ["name", "phone", "email", "message"];

pub const WARNING_TEXT: &str = "Please fill in all fields so we can contact you.";
pub const SUCCESS_TEXT: &str =
    "Thanks! Your request has been received. Our team will contact you soon.";

/// Marker class that identifies the inline message node inside the form.
pub const ALERT_MARKER_CLASS: &str = "rti-form-alert";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Warning,
    Success,
}

impl AlertKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::Warning => "warning",
            AlertKind::Success => "success",
        }
    }
}

/// Outcome of one submission attempt, rendered as the single inline message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSubmissionResult {
    pub kind: AlertKind,
    pub text: &'static str,
}

impl FormSubmissionResult {
    pub fn warning() -> Self {
        Self {
            kind: AlertKind::Warning,
            text: WARNING_TEXT,
        }
    }

    pub fn success() -> Self {
        Self {
            kind: AlertKind::Success,
            text: SUCCESS_TEXT,
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == AlertKind::Success
    }

    /// Class list of the message node.
    pub fn class_name(&self) -> String {
        format!(
            "alert alert-{} {} mb-0 mt-3",
            self.kind.as_str(),
            ALERT_MARKER_CLASS
        )
    }
}

/// The four contact fields after trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Builds a submission from a field lookup; absent fields count as empty.
    pub fn collect<F>(mut field: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut read = |name: &str| field(name).unwrap_or_default().trim().to_string();
        Self {
            name: read("name"),
            phone: read("phone"),
            email: read("email"),
            message: read("message"),
        }
    }

    /// Names of the fields left empty, in display order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let values = [&self.name, &self.phone, &self.email, &self.message];
        FIELD_NAMES
            .iter()
            .zip(values)
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    /// Only presence is checked; no email or phone format rules apply.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
