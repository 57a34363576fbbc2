//! # formcheck-validator
//!
//! Rule-based validation for single form fields.
//!
//! ## Quick Start
//!
//! ```
//! use formcheck_validator::prelude::*;
//!
//! let validator = Validator::new(Registry::standard(ZipDistance::offline("37912")));
//!
//! assert!(validator.validate_field("email", "jmills@thinkpyxl.com"));
//! assert!(!validator.validate_field("birthday", "13/01/1990"));
//!
//! // Every check runs, so every message comes back.
//! let report = validator.validate_field_report("email", "");
//! assert_eq!(
//!     report.messages().collect::<Vec<_>>(),
//!     ["email can't be empty.", "email isn't formatted correctly."]
//! );
//! ```
//!
//! ## Layout
//!
//! - [`foundation`]: the [`Check`](foundation::Check) trait, the per-run
//!   [`ValidationContext`](foundation::ValidationContext) and error types
//! - [`validators`]: [`NotEmpty`](validators::NotEmpty),
//!   [`FormatMatches`](validators::FormatMatches) and
//!   [`DateGreaterThan`](validators::DateGreaterThan)
//! - [`remote`]: the [`ZipDistance`](remote::ZipDistance) check and its HTTP client
//! - [`registry`]: field type to ordered rule list
//! - [`engine`]: [`Validator`] and the process-wide [`validate_field`]
//!
//! New checks can be written with the [`check!`] macro or as plain closures.

pub mod engine;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod registry;
pub mod remote;
pub mod validators;

pub use engine::{FieldReport, Validator, validate_field, validate_field_report};
pub use registry::{FieldType, Registry};
