//! Error types for validation failures
//!
//! A failing check records a [`ValidationError`] into the run's
//! [`ValidationContext`](super::ValidationContext). The error carries a
//! machine-readable code next to the human-readable message that callers
//! display.
//!
//! All string fields use `Cow<'static, str>` so static codes never allocate.

use std::borrow::Cow;
use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single failed check.
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("empty", "email can't be empty.")
///     .with_param("field", "email");
///
/// assert_eq!(error.to_string(), "email can't be empty.");
/// assert_eq!(error.param("field"), Some("email"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "empty", "format", "not_greater_than", "invalid_zip"
    pub code: Cow<'static, str>,

    /// Human-readable message, shown to the person filling in the form.
    pub message: Cow<'static, str>,

    /// Parameters the message was rendered from.
    ///
    /// Stored as ordered key-value pairs (typically 0-3 params).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// `"<field> can't be empty."`
    pub fn empty(field: &str) -> Self {
        Self::new("empty", format!("{field} can't be empty.")).with_param("field", field.to_owned())
    }

    /// `"<field> isn't formatted correctly."`
    pub fn invalid_format(field: &str, expected: impl Into<Cow<'static, str>>) -> Self {
        Self::new("format", format!("{field} isn't formatted correctly."))
            .with_param("field", field.to_owned())
            .with_param("expected", expected)
    }

    /// `"<field> isn't greater than <duration> <unit>."`
    pub fn not_greater_than(field: &str, duration: impl fmt::Display, unit: impl fmt::Display) -> Self {
        Self::new(
            "not_greater_than",
            format!("{field} isn't greater than {duration} {unit}."),
        )
        .with_param("field", field.to_owned())
        .with_param("duration", duration.to_string())
        .with_param("unit", unit.to_string())
    }

    /// `"<value> isn't a valid zip."`
    pub fn invalid_zip(value: &str) -> Self {
        Self::new("invalid_zip", format!("{value} isn't a valid zip."))
    }

    /// A message supplied verbatim by a remote service.
    pub fn remote(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("remote", message)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// The ordered, append-only list of errors collected during one run.
///
/// Entries can only be appended. A check never sees fewer errors than the
/// checks before it recorded, and never sees them reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Appends an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors, in the order they were recorded.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterates over the human-readable messages.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(ValidationError::message)
    }

}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

// Serialized as the plain message list that form front-ends display.
impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.errors.len()))?;
        for message in self.messages() {
            seq.serialize_element(message)?;
        }
        seq.end()
    }
}

// ============================================================================
// TESTS
// ============================================================================
