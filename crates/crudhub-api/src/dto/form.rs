//! Form state passed to templates.

use std::collections::BTreeMap;

use serde::Serialize;
use validator::{Validate, ValidationErrors};

/// Field name to human-readable messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Key for errors that belong to the whole form rather than one field.
pub const FORM_ERRORS_KEY: &str = "form";

/// Errors for a submission that could not be decoded at all.
pub fn form_level_error(message: impl Into<String>) -> FieldErrors {
    FieldErrors::from([(FORM_ERRORS_KEY.to_string(), vec![message.into()])])
}

/// What a form template needs: current values, errors, and where to submit.
#[derive(Debug, Clone, Serialize)]
pub struct FormView<T: Serialize> {
    /// Values to pre-fill.
    pub values: T,
    /// Field-level validation messages; empty when valid.
    pub errors: FieldErrors,
    /// HTTP method the form represents (`POST`, `PUT`, `DELETE`).
    pub method: &'static str,
    /// Submit target.
    pub action: String,
}

impl<T: Serialize> FormView<T> {
    /// A form with no errors.
    pub fn new(values: T, method: &'static str, action: impl Into<String>) -> Self {
        Self {
            values,
            errors: FieldErrors::new(),
            method,
            action: action.into(),
        }
    }

    /// Attach validation errors.
    pub fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = errors;
        self
    }
}

/// Run the derive-generated rules and flatten the result for templates.
pub fn validate_form<T: Validate>(form: &T) -> Result<(), FieldErrors> {
    form.validate().map_err(|errors| flatten(&errors))
}

fn flatten(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({})", e.code))
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}
