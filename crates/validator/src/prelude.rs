//! Prelude module for convenient imports.
//!
//! Provides a single `use formcheck_validator::prelude::*;` import that
//! brings in the engine, the registry, every built-in check and the core
//! traits.

// ============================================================================
// FOUNDATION: Core traits, context, errors
// ============================================================================

pub use crate::foundation::{Check, CheckExt, ValidationContext, ValidationError, ValidationErrors};

// ============================================================================
// VALIDATORS: All built-in checks
// ============================================================================

pub use crate::validators::{
    DateGreaterThan, Format, FormatMatches, NotEmpty, TimeUnit, date_greater_than, format_matches,
    not_empty,
};

// ============================================================================
// REMOTE, REGISTRY, ENGINE
// ============================================================================

pub use crate::engine::{FieldReport, Validator};
pub use crate::registry::{FieldType, Registry, RegistryBuilder};
pub use crate::remote::{DistanceLookup, LookupError, ZipDistance, ZipDistanceConfig};
