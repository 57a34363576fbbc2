//! The per-run validation context.

use serde::Serialize;
use serde_json::Value;

use super::{ValidationError, ValidationErrors};

/// Mutable state threaded through every check of one `validate_field` run.
///
/// Created fresh for each call and owned by that call alone. Checks read the
/// field type and original value, append errors, and the remote zip check
/// additionally stores the raw service response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationContext {
    #[serde(rename = "type")]
    field_type: String,
    value: String,
    errors: ValidationErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<Value>,
}

impl ValidationContext {
    /// Creates a context with an empty error list and no response.
    pub fn new(field_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field_type: field_type.into(),
            value: value.into(),
            errors: ValidationErrors::new(),
            response: None,
        }
    }

    /// The field-type name the run was started with, as given by the caller.
    #[must_use]
    pub fn field_type(&self) -> &str {
        &self.field_type
    }

    /// The original input value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Appends an error.
    pub fn record(&mut self, error: ValidationError) {
        tracing::trace!(field_type = %self.field_type, code = %error.code, "check failed");
        self.errors.add(error);
    }

    /// Errors recorded so far, in check execution order.
    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Messages recorded so far, in check execution order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.messages()
    }

    /// Raw result of the last remote lookup, if any check performed one.
    #[must_use]
    pub fn response(&self) -> Option<&Value> {
        self.response.as_ref()
    }

    /// Replaces the stored remote response.
    pub fn set_response(&mut self, response: Option<Value>) {
        self.response = response;
    }

    /// True iff no check has recorded an error.
    #[must_use]
    pub fn passes(&self) -> bool {
        self.errors.is_empty()
    }
}
