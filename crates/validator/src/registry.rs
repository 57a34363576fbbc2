//! The rule registry: which checks run, in which order, for each field type.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::{Check, CheckExt};
use crate::remote::ZipDistance;
use crate::validators::{Format, TimeUnit, date_greater_than, format_matches, not_empty};

// ============================================================================
// FIELD TYPE
// ============================================================================

/// The form fields the registry knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Email,
    First,
    Last,
    Zip,
    Birthday,
}

impl FieldType {
    pub const ALL: [Self; 5] = [Self::Email, Self::First, Self::Last, Self::Zip, Self::Birthday];

    /// Resolves a field type by its exact, case-sensitive name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::First => "first",
            Self::Last => "last",
            Self::Zip => "zip",
            Self::Birthday => "birthday",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a [`FieldType`] from an unrecognized name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field type `{0}`")]
pub struct UnknownFieldType(pub String);

impl FromStr for FieldType {
    type Err = UnknownFieldType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownFieldType(s.to_owned()))
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Ordered checks for one field type.
pub type RuleSet = Vec<Box<dyn Check>>;

/// Immutable mapping from field type to its [`RuleSet`].
///
/// Build it once with [`Registry::standard`] or [`Registry::builder`] and
/// share it read-only; it is `Send + Sync`.
pub struct Registry {
    rules: HashMap<FieldType, RuleSet>,
}

impl Registry {
    /// Starts an empty registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The standard form rules:
    ///
    /// | type | checks |
    /// |---|---|
    /// | email | NotEmpty, FormatMatches(email) |
    /// | first | NotEmpty |
    /// | last | NotEmpty |
    /// | zip | NotEmpty, FormatMatches(zipcode), ZipDistance |
    /// | birthday | NotEmpty, FormatMatches(birthday), DateGreaterThan(21, years) |
    pub fn standard(zip: ZipDistance) -> Self {
        Self::builder()
            .rule(FieldType::Email, not_empty())
            .rule(FieldType::Email, format_matches(Format::Email))
            .rule(FieldType::First, not_empty())
            .rule(FieldType::Last, not_empty())
            .rule(FieldType::Zip, not_empty())
            .rule(FieldType::Zip, format_matches(Format::Zipcode))
            .rule(FieldType::Zip, zip)
            .rule(FieldType::Birthday, not_empty())
            .rule(FieldType::Birthday, format_matches(Format::Birthday))
            .rule(FieldType::Birthday, date_greater_than(21.0, TimeUnit::Years))
            .build()
    }

    /// Checks registered for `field_type`, in execution order.
    #[must_use]
    pub fn rules(&self, field_type: FieldType) -> &[Box<dyn Check>] {
        self.rules
            .get(&field_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Checks registered under `name`; empty for unknown names.
    #[must_use]
    pub fn rules_for(&self, name: &str) -> &[Box<dyn Check>] {
        FieldType::from_name(name)
            .map(|field_type| self.rules(field_type))
            .unwrap_or_default()
    }

    /// Field types with at least one check, in declaration order.
    pub fn field_types(&self) -> impl Iterator<Item = FieldType> + '_ {
        FieldType::ALL
            .into_iter()
            .filter(|field_type| self.rules.contains_key(field_type))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for field_type in self.field_types() {
            let names: Vec<&str> = self.rules(field_type).iter().map(|c| c.name()).collect();
            map.entry(&field_type, &names);
        }
        map.finish()
    }
}

/// Appends checks to field types; [`build`](Self::build) freezes the result.
#[derive(Default)]
pub struct RegistryBuilder {
    rules: HashMap<FieldType, RuleSet>,
}

impl RegistryBuilder {
    /// Appends `check` to the end of `field_type`'s rule list.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, field_type: FieldType, check: impl Check + 'static) -> Self {
        self.rules.entry(field_type).or_default().push(check.boxed());
        self
    }

    pub fn build(self) -> Registry {
        Registry { rules: self.rules }
    }
}
