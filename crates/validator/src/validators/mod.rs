//! Built-in checks
//!
//! # Categories
//!
//! - **Presence**: [`NotEmpty`]
//! - **Format**: [`FormatMatches`] over the closed [`Format`] set
//! - **Time**: [`DateGreaterThan`] measured in [`TimeUnit`]s
//!
//! The remote zip-distance check lives in [`crate::remote`].
//!
//! # Examples
//!
//! ```
//! use formcheck_validator::foundation::CheckExt;
//! use formcheck_validator::validators::*;
//!
//! let email = format_matches(Format::Email);
//! assert!(email.run("email", "jmills@thinkpyxl.com").passes());
//! assert!(!email.run("email", "jmills@thinkpyxl").passes());
//! ```

pub mod date;
pub mod format;
pub mod not_empty;

pub use date::{DateGreaterThan, TimeUnit, UnknownTimeUnit, date_greater_than, parse_instant};
pub use format::{Format, FormatMatches, format_matches};
pub use not_empty::{NotEmpty, not_empty};
