//! Core traits for the validation system
//!
//! This module defines [`Check`], the single unit every rule list is built
//! from.

use crate::foundation::ValidationContext;

// ============================================================================
// CORE CHECK TRAIT
// ============================================================================

/// One atomic validation rule.
///
/// A check inspects the original value, consults the shared context when it
/// needs to (for the field type in its message, for example), and appends
/// at most one error. Checks never fail in any other way: every problem,
/// including I/O trouble in remote checks, becomes an appended error.
///
/// Plain closures implement `Check` too, which keeps one-off rules cheap:
///
/// ```
/// use formcheck_validator::foundation::{Check, ValidationContext, ValidationError};
///
/// let no_spaces = |value: &str, ctx: &mut ValidationContext| {
///     if value.contains(' ') {
///         ctx.record(ValidationError::new("spaces", "no spaces allowed"));
///     }
/// };
///
/// let mut ctx = ValidationContext::new("first", "Jo Ann");
/// no_spaces.check("Jo Ann", &mut ctx);
/// assert!(!ctx.passes());
/// ```
pub trait Check: Send + Sync {
    /// Runs the rule against `value`, appending to `ctx` on failure.
    fn check(&self, value: &str, ctx: &mut ValidationContext);

    /// Returns the name of this check.
    ///
    /// Used for debugging and tracing output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> Check for F
where
    F: Fn(&str, &mut ValidationContext) + Send + Sync,
{
    fn check(&self, value: &str, ctx: &mut ValidationContext) {
        self(value, ctx);
    }
}

// ============================================================================
// CHECK EXTENSION TRAIT
// ============================================================================

/// Convenience methods available on every sized [`Check`].
pub trait CheckExt: Check + Sized + 'static {
    /// Boxes the check for storage in a rule list.
    fn boxed(self) -> Box<dyn Check> {
        Box::new(self)
    }

    /// Runs the check against a fresh context and returns that context.
    ///
    /// Handy for exercising a single rule outside a registry.
    fn run(&self, field_type: &str, value: &str) -> ValidationContext {
        let mut ctx = ValidationContext::new(field_type, value);
        self.check(value, &mut ctx);
        ctx
    }
}

impl<T: Check + Sized + 'static> CheckExt for T {}
