//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Check`], [`CheckExt`]
//! - **Context**: [`ValidationContext`], the record threaded through one run
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! # Architecture
//!
//! A field is validated by running an ordered list of checks against one
//! shared context. Each check sees the original value and the context, and
//! may append an error. Nothing short-circuits: a check that runs after a
//! failure still runs, so the caller gets every message at once.
//!
//! ```
//! use formcheck_validator::foundation::{Check, ValidationContext};
//! use formcheck_validator::validators::{Format, format_matches, not_empty};
//!
//! let rules: Vec<Box<dyn Check>> = vec![
//!     Box::new(not_empty()),
//!     Box::new(format_matches(Format::Email)),
//! ];
//!
//! let mut ctx = ValidationContext::new("email", "");
//! for rule in &rules {
//!     rule.check("", &mut ctx);
//! }
//!
//! // Both rules reported.
//! assert_eq!(ctx.errors().len(), 2);
//! ```

pub mod context;
pub mod error;
pub mod traits;

pub use context::ValidationContext;
pub use error::{ValidationError, ValidationErrors};
pub use traits::{Check, CheckExt};

/// Common imports for working with the validator core.
pub mod prelude {
    pub use super::{Check, CheckExt, ValidationContext, ValidationError, ValidationErrors};
}
