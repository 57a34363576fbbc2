//! The validation engine.
//!
//! [`Validator::validate_field`] looks up the rule list for a field type,
//! runs every check in order against one fresh [`ValidationContext`], and
//! reports whether any error was recorded.

use std::sync::LazyLock;

use serde::Serialize;

use crate::foundation::{ValidationContext, ValidationErrors};
use crate::registry::Registry;
use crate::remote::{LookupError, ZipDistance, ZipDistanceConfig};

/// Runs field validations against an immutable [`Registry`].
#[derive(Debug)]
pub struct Validator {
    registry: Registry,
}

impl Validator {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// The standard rules, with zip codes checked against the configured service.
    pub fn from_config(config: &ZipDistanceConfig) -> Result<Self, LookupError> {
        Ok(Self::new(Registry::standard(ZipDistance::from_config(config)?)))
    }

    /// The standard rules, configured from `FORMCHECK_ZIP_*` variables.
    ///
    /// Falls back to an offline zip check if the HTTP client cannot be
    /// built, so every zip lookup then reports an invalid zip.
    pub fn from_env() -> Self {
        let config = ZipDistanceConfig::from_env();
        Self::from_config(&config).unwrap_or_else(|error| {
            tracing::warn!(%error, "zip distance client unavailable, zip lookups disabled");
            Self::new(Registry::standard(ZipDistance::offline(config.origin)))
        })
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Runs every check for `field_type` and returns the final context.
    ///
    /// Unknown field types have no checks and always pass.
    #[tracing::instrument(level = "debug", skip(self, value), fields(checks = tracing::field::Empty))]
    pub fn validate_field_report(&self, field_type: &str, value: &str) -> FieldReport {
        let rules = self.registry.rules_for(field_type);
        tracing::Span::current().record("checks", rules.len());

        let mut ctx = ValidationContext::new(field_type, value);
        for rule in rules {
            rule.check(value, &mut ctx);
        }

        let report = FieldReport::from(ctx);
        tracing::debug!(
            passed = report.passed,
            errors = report.errors().len(),
            "field validated"
        );
        report
    }

    /// Runs every check for `field_type`; true iff none recorded an error.
    pub fn validate_field(&self, field_type: &str, value: &str) -> bool {
        self.validate_field_report(field_type, value).passed()
    }
}

// ============================================================================
// FIELD REPORT
// ============================================================================

/// Verdict plus the final context of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldReport {
    passed: bool,
    #[serde(flatten)]
    context: ValidationContext,
}

impl FieldReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.passed
    }

    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        self.context.errors()
    }

    /// Messages in the order their checks ran.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.context.messages()
    }

    #[must_use]
    pub fn context(&self) -> &ValidationContext {
        &self.context
    }
}

impl From<ValidationContext> for FieldReport {
    fn from(context: ValidationContext) -> Self {
        Self {
            passed: context.passes(),
            context,
        }
    }
}

// ============================================================================
// PROCESS-WIDE DEFAULT
// ============================================================================

static DEFAULT_VALIDATOR: LazyLock<Validator> = LazyLock::new(Validator::from_env);

/// Validates with the process-wide standard rules, built from the
/// environment on first use.
///
/// # Examples
///
/// ```
/// assert!(formcheck_validator::validate_field("first", "Jerod"));
/// assert!(!formcheck_validator::validate_field("first", ""));
/// assert!(formcheck_validator::validate_field("nickname", ""));
/// ```
pub fn validate_field(field_type: &str, value: &str) -> bool {
    DEFAULT_VALIDATOR.validate_field(field_type, value)
}

/// Like [`validate_field`], returning messages and the raw lookup response too.
pub fn validate_field_report(field_type: &str, value: &str) -> FieldReport {
    DEFAULT_VALIDATOR.validate_field_report(field_type, value)
}
