//! Configuration for the zip-distance service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where and how to reach the distance-lookup service.
///
/// Deserializes with defaults for every missing key, so a config file only
/// needs to name what it changes (usually just `api_key`).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZipDistanceConfig {
    /// Service root; requests go to
    /// `{base_url}/{api_key}/distance.json/{origin}/{candidate}/{unit}`.
    pub base_url: String,

    /// API key, sent as the first path segment.
    pub api_key: String,

    /// Postal code every candidate is measured from.
    pub origin: String,

    /// Distance unit requested from the service.
    pub unit: String,

    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl ZipDistanceConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://www.zipcodeapi.com/rest";
    pub const DEFAULT_ORIGIN: &'static str = "37912";
    pub const DEFAULT_UNIT: &'static str = "miles";
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

    /// Defaults overridden by `FORMCHECK_ZIP_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().with_env_from(|key| std::env::var(key).ok())
    }

    /// Overrides fields with whichever of `FORMCHECK_ZIP_BASE_URL`,
    /// `FORMCHECK_ZIP_API_KEY`, `FORMCHECK_ZIP_ORIGIN` and `FORMCHECK_ZIP_UNIT`
    /// `lookup` yields.
    #[must_use]
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base_url) = lookup("FORMCHECK_ZIP_BASE_URL") {
            self.base_url = base_url;
        }
        if let Some(api_key) = lookup("FORMCHECK_ZIP_API_KEY") {
            self.api_key = api_key;
        }
        if let Some(origin) = lookup("FORMCHECK_ZIP_ORIGIN") {
            self.origin = origin;
        }
        if let Some(unit) = lookup("FORMCHECK_ZIP_UNIT") {
            self.unit = unit;
        }
        self
    }

    /// Sets the service root.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the API key.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }
}

impl Default for ZipDistanceConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_owned(),
            api_key: String::new(),
            origin: Self::DEFAULT_ORIGIN.to_owned(),
            unit: Self::DEFAULT_UNIT.to_owned(),
            connect_timeout_secs: Self::DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

// Manual impl: keeps the API key out of logs.
impl fmt::Debug for ZipDistanceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZipDistanceConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &if self.api_key.is_empty() { "" } else { "***" })
            .field("origin", &self.origin)
            .field("unit", &self.unit)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = ZipDistanceConfig::default();
        assert_eq!(config.base_url, "https://www.zipcodeapi.com/rest");
        assert_eq!(config.origin, "37912");
        assert_eq!(config.unit, "miles");
        assert_eq!(config.connect_timeout_secs, 5);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ZipDistanceConfig =
            serde_json::from_str(r#"{ "api_key": "k", "origin": "10001" }"#).unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.origin, "10001");
        assert_eq!(config.unit, "miles");
    }

    #[test]
    fn env_overrides_only_what_is_set() {
        let config = ZipDistanceConfig::default()
            .with_base_url("http://localhost:9000")
            .with_env_from(|key| (key == "FORMCHECK_ZIP_API_KEY").then(|| "from-env".to_owned()));
        assert_eq!(config.api_key, "from-env");
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.origin, "37912");
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = ZipDistanceConfig::default().with_api_key("super-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("***"));
    }
}
