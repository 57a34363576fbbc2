//! Macros for creating checks with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`check!`]: creates a complete check (struct, `Check` impl and factory fn)
//!
//! # Examples
//!
//! ```rust,ignore
//! use formcheck_validator::check;
//! use formcheck_validator::foundation::ValidationError;
//!
//! // Unit check (no fields)
//! check! {
//!     pub NoDigits;
//!     rule(input) { !input.chars().any(|c| c.is_ascii_digit()) }
//!     error(ctx, input) { ValidationError::new("digits", format!("{} has digits.", ctx.field_type())) }
//!     fn no_digits();
//! }
//!
//! // Struct with fields
//! check! {
//!     #[derive(Copy, PartialEq, Eq)]
//!     pub MaxChars { max: usize };
//!     rule(self, input) { input.chars().count() <= self.max }
//!     error(self, ctx, input) { ValidationError::new("max_chars", "too long") }
//!     new(max: usize) { Self { max } }
//!     fn max_chars(max: usize);
//! }
//! ```

// ============================================================================
// CHECK MACRO
// ============================================================================

/// Creates a complete check: struct definition, [`Check`] implementation,
/// constructor, and factory function.
///
/// The `rule` block decides pass/fail from the value alone. The `error`
/// block builds the error to record when the rule fails; it can read the
/// context (for the field type) and the value.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// [`Check`]: crate::foundation::Check
#[macro_export]
macro_rules! check {
    // ── Variant 1: Unit check (no fields) + factory fn ───────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        error($ctx:ident, $einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Check for $name {
            #[allow(unused_variables)]
            fn check(&self, $inp: &str, ctx: &mut $crate::foundation::ValidationContext) {
                if !$rule {
                    let error = {
                        let $ctx: &$crate::foundation::ValidationContext = ctx;
                        let $einp = $inp;
                        $err
                    };
                    ctx.record(error);
                }
            }

            fn name(&self) -> &str {
                stringify!($name)
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 2: Struct with fields + custom new + factory fn ──────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $ctx:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Check for $name {
            #[allow(unused_variables)]
            fn check(&$self_, $inp: &str, ctx: &mut $crate::foundation::ValidationContext) {
                if !$rule {
                    let error = {
                        let $ctx: &$crate::foundation::ValidationContext = ctx;
                        let $einp = $inp;
                        $err
                    };
                    ctx.record(error);
                }
            }

            fn name(&self) -> &str {
                stringify!($name)
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{CheckExt, ValidationError};

    crate::check! {
        /// Fails on any ASCII digit.
        pub NoDigits;
        rule(input) { !input.chars().any(|c| c.is_ascii_digit()) }
        error(ctx, input) {
            ValidationError::new("digits", format!("{} has digits: {input}", ctx.field_type()))
        }
        fn no_digits();
    }

    crate::check! {
        #[derive(Copy, PartialEq, Eq)]
        pub MaxChars { max: usize };
        rule(self, input) { input.chars().count() <= self.max }
        error(self, ctx, input) {
            ValidationError::new("max_chars", format!("{} over {}", ctx.field_type(), self.max))
        }
        new(max: usize) { Self { max } }
        fn max_chars(max: usize);
    }

    #[test]
    fn unit_check_records_with_context() {
        assert!(no_digits().run("first", "Jerod").passes());

        let ctx = no_digits().run("first", "J3rod");
        assert_eq!(ctx.messages().collect::<Vec<_>>(), ["first has digits: J3rod"]);
    }

    #[test]
    fn struct_check_uses_fields() {
        assert!(max_chars(5).run("last", "Mills").passes());

        let ctx = max_chars(3).run("last", "Mills");
        assert_eq!(ctx.messages().collect::<Vec<_>>(), ["last over 3"]);
    }

    #[test]
    fn generated_name() {
        use crate::foundation::Check;
        assert_eq!(NoDigits.name(), "NoDigits");
        assert_eq!(MaxChars::new(1).name(), "MaxChars");
    }
}
