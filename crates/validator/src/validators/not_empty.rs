//! Presence check.

use crate::foundation::ValidationError;

crate::check! {
    /// Fails when the value is empty or consists only of whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::foundation::CheckExt;
    /// use formcheck_validator::validators::not_empty;
    ///
    /// assert!(not_empty().run("first", "Jerod").passes());
    ///
    /// let ctx = not_empty().run("first", " \t");
    /// assert_eq!(ctx.messages().next(), Some("first can't be empty."));
    /// ```
    pub NotEmpty;
    rule(input) { !input.trim().is_empty() }
    error(ctx, input) { ValidationError::empty(ctx.field_type()) }
    fn not_empty();
}
