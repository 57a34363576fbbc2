//! Layered configuration: defaults, then an optional TOML file, then
//! environment overrides.

use std::path::Path;

use anyhow::Context as _;
use figment::Figment;
use figment::providers::{Format as _, Serialized, Toml};
use formcheck_validator::remote::ZipDistanceConfig;
use serde::{Deserialize, Serialize};

/// Everything the binary can be configured with.
///
/// ```toml
/// [zip]
/// api_key = "..."
/// origin = "37912"
///
/// [log]
/// level = "debug"
/// format = "pretty"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub zip: ZipDistanceConfig,
    pub log: formcheck_log::Config,
}

impl Settings {
    /// Loads settings, reading overrides from the process environment.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Loads settings, reading overrides through `lookup`.
    pub fn load_with(
        path: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            anyhow::ensure!(path.is_file(), "config file {} not found", path.display());
            figment = figment.merge(Toml::file(path));
        }

        let settings: Self = figment
            .extract()
            .with_context(|| match path {
                Some(path) => format!("invalid configuration in {}", path.display()),
                None => "invalid default configuration".to_owned(),
            })?;

        Ok(Self {
            zip: settings.zip.with_env_from(&lookup),
            log: settings.log.with_env_from(&lookup),
        })
    }
}
