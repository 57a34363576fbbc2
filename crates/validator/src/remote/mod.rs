//! Remote zip-code validation.
//!
//! [`ZipDistance`] asks a distance-lookup service how far a candidate postal
//! code is from a fixed origin. A usable, non-zero distance means the zip
//! exists. The HTTP transport sits behind [`DistanceLookup`], so the check
//! itself never touches the network directly and tests can swap in any
//! lookup they like.

mod client;
mod config;
mod error;

use std::sync::Arc;

use serde_json::Value;

use crate::foundation::{Check, ValidationContext, ValidationError};

pub use client::ZipCodeApiClient;
pub use config::ZipDistanceConfig;
pub use error::LookupError;

// ============================================================================
// LOOKUP SEAM
// ============================================================================

/// Fetches the raw distance response between two postal codes.
#[cfg_attr(test, mockall::automock)]
pub trait DistanceLookup: Send + Sync {
    /// Returns the decoded JSON body of the service's answer.
    fn distance(&self, origin: &str, candidate: &str) -> Result<Value, LookupError>;
}

impl<L: DistanceLookup + ?Sized> DistanceLookup for Arc<L> {
    fn distance(&self, origin: &str, candidate: &str) -> Result<Value, LookupError> {
        (**self).distance(origin, candidate)
    }
}

/// A lookup that never reaches any service.
#[derive(Debug, Clone, Copy, Default)]
pub struct Offline;

impl DistanceLookup for Offline {
    fn distance(&self, _origin: &str, _candidate: &str) -> Result<Value, LookupError> {
        Err(LookupError::Offline)
    }
}

// ============================================================================
// ZIP DISTANCE CHECK
// ============================================================================

/// Validates a zip code by looking up its distance from `origin`.
///
/// Records the raw response (or `None` when the lookup failed) in the
/// context every time. Fails when there is no response or its `distance`
/// is falsy (missing, `null`, `false`, `0`, `""`, `"0"`); the message is the
/// service's `error_msg` when it sent one, else `"<value> isn't a valid zip."`.
///
/// A distance of exactly zero, i.e. the origin itself, therefore fails.
#[derive(Clone)]
pub struct ZipDistance {
    lookup: Arc<dyn DistanceLookup>,
    origin: String,
}

impl ZipDistance {
    pub fn new(lookup: impl DistanceLookup + 'static, origin: impl Into<String>) -> Self {
        Self {
            lookup: Arc::new(lookup),
            origin: origin.into(),
        }
    }

    /// Builds the check around a [`ZipCodeApiClient`].
    pub fn from_config(config: &ZipDistanceConfig) -> Result<Self, LookupError> {
        Ok(Self::new(ZipCodeApiClient::new(config)?, config.origin.clone()))
    }

    /// A check whose lookups always fail, for runs without network access.
    pub fn offline(origin: impl Into<String>) -> Self {
        Self::new(Offline, origin)
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl std::fmt::Debug for ZipDistance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipDistance")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

impl Check for ZipDistance {
    fn check(&self, value: &str, ctx: &mut ValidationContext) {
        let response = match self.lookup.distance(&self.origin, value) {
            Ok(response) => Some(response),
            Err(error) => {
                tracing::warn!(origin = %self.origin, %error, "zip distance lookup failed");
                None
            }
        };

        let distance = response
            .as_ref()
            .filter(|response| is_truthy(response))
            .and_then(|response| response.get("distance"));

        if !distance.is_some_and(is_truthy) {
            let error = response
                .as_ref()
                .and_then(|response| response.get("error_msg"))
                .map_or_else(
                    || ValidationError::invalid_zip(ctx.value()),
                    |message| ValidationError::remote(message_text(message)),
                );
            ctx.record(error);
        }

        ctx.set_response(response);
    }

    fn name(&self) -> &str {
        "ZipDistance"
    }
}

/// Loose truthiness used when reading service responses.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn message_text(message: &Value) -> String {
    match message {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
