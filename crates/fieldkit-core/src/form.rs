//! Form-controller capability.
//!
//! The host application owns authoritative field values and validation
//! errors; components only read and write through this trait. Nothing in
//! Fieldkit holds a field value beyond a single render cycle.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// A validation error attached to a named field.
///
/// `kind` is a stable machine-readable tag (for example `TOO_SHORT` or
/// `FILE_TOO_LARGE`) so callers can match errors programmatically; `message`
/// is the user-facing text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub kind: String,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

/// Capability exposed by the hosting application's form state.
///
/// Methods take `&self`; implementations are expected to use interior
/// mutability so a single controller can back many components at once.
pub trait FormController {
    /// Current value of a field, if one has been set.
    fn value(&self, field: &str) -> Option<String>;

    /// Replace a field's value.
    fn set_value(&self, field: &str, value: &str);

    /// Attach an error to a field, replacing any existing one.
    fn set_error(&self, field: &str, error: FieldError);

    /// Remove a field's error, if any.
    fn clear_error(&self, field: &str);

    /// Current error of a field, if one is attached.
    fn error(&self, field: &str) -> Option<FieldError>;
}

#[derive(Default)]
struct FormState {
    values: HashMap<String, String>,
    errors: HashMap<String, FieldError>,
}

/// In-memory [`FormController`] backed by a [`parking_lot::RwLock`].
///
/// Used by the demo application and throughout the test suites; a real host
/// would typically adapt its own form layer to the trait instead.
#[derive(Default)]
pub struct MemoryForm {
    state: RwLock<FormState>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormController for MemoryForm {
    fn value(&self, field: &str) -> Option<String> {
        self.state.read().values.get(field).cloned()
    }

    fn set_value(&self, field: &str, value: &str) {
        self.state
            .write()
            .values
            .insert(field.to_string(), value.to_string());
    }

    fn set_error(&self, field: &str, error: FieldError) {
        tracing::debug!(field, kind = %error.kind, "field error set");
        self.state.write().errors.insert(field.to_string(), error);
    }

    fn clear_error(&self, field: &str) {
        self.state.write().errors.remove(field);
    }

    fn error(&self, field: &str) -> Option<FieldError> {
        self.state.read().errors.get(field).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_round_trip() {
        let form = MemoryForm::new();
        assert_eq!(form.value("email"), None);
        form.set_value("email", "a@b.c");
        assert_eq!(form.value("email"), Some("a@b.c".to_string()));
    }

    #[test]
    fn field_error_serializes_for_host_transport() {
        let error = FieldError::new("TOO_SHORT", "Please enter a valid number.");
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"TOO_SHORT","message":"Please enter a valid number."}"#
        );
        let back: FieldError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, error);
    }

    #[test]
    fn errors_replace_and_clear() {
        let form = MemoryForm::new();
        form.set_error("phone", FieldError::new("TOO_SHORT", "Please enter a valid number."));
        form.set_error("phone", FieldError::new("TOO_LONG", "Please enter a valid number."));
        assert_eq!(form.error("phone").unwrap().kind, "TOO_LONG");
        form.clear_error("phone");
        assert_eq!(form.error("phone"), None);
    }
}
