//! Logger configuration

mod presets;

use serde::{Deserialize, Serialize};

/// What to log and how to render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `EnvFilter` directive, e.g. `info` or `formcheck_validator=debug`.
    pub level: String,

    pub format: Format,

    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Compact,
            display: DisplayConfig::default(),
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Multi-line, human-oriented
    Pretty,
    /// One line per event
    #[default]
    Compact,
    /// One JSON object per event
    Json,
}

impl Format {
    /// Parses a format name case-insensitively; anything unknown is
    /// [`Format::Compact`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "pretty" => Self::Pretty,
            "json" => Self::Json,
            _ => Self::Compact,
        }
    }
}

/// Per-event decorations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// ANSI colors (ignored by the JSON format)
    pub colors: bool,
    /// Event target (module path)
    pub target: bool,
    /// Source file and line
    pub source: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            colors: true,
            target: true,
            source: false,
        }
    }
}

impl DisplayConfig {
    /// Applies `FORMCHECK_LOG_COLORS`, `FORMCHECK_LOG_TARGET` and
    /// `FORMCHECK_LOG_SOURCE` from `lookup`.
    pub(crate) fn parse_env(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        let flag = |key: &str| lookup(key).map(|v| matches!(v.as_str(), "1" | "true" | "yes"));

        if let Some(colors) = flag("FORMCHECK_LOG_COLORS") {
            self.colors = colors;
        }
        if let Some(target) = flag("FORMCHECK_LOG_TARGET") {
            self.target = target;
        }
        if let Some(source) = flag("FORMCHECK_LOG_SOURCE") {
            self.source = source;
        }
    }
}
