//! Environment overrides for [`Config`]

use super::{Config, Format};

impl Config {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::default().with_env_from(lookup)
    }

    /// Overrides fields with whichever `FORMCHECK_LOG*` variables `lookup`
    /// yields, leaving the rest as they are.
    #[must_use]
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        // FORMCHECK_LOG wins over RUST_LOG
        if let Some(level) = lookup("FORMCHECK_LOG").or_else(|| lookup("RUST_LOG")) {
            self.level = level;
        }

        if let Some(format) = lookup("FORMCHECK_LOG_FORMAT") {
            self.format = Format::from_name(&format);
        }

        self.display.parse_env(&lookup);

        self
    }

    /// Sets the filter directive.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_env_is_default() {
        assert_eq!(Config::from_lookup(lookup(&[])), Config::default());
    }

    #[test]
    fn formcheck_log_wins_over_rust_log() {
        let config = Config::from_lookup(lookup(&[
            ("RUST_LOG", "warn"),
            ("FORMCHECK_LOG", "formcheck_validator=trace"),
        ]));
        assert_eq!(config.level, "formcheck_validator=trace");

        let config = Config::from_lookup(lookup(&[("RUST_LOG", "warn")]));
        assert_eq!(config.level, "warn");
    }

    #[test]
    fn format_and_display_flags() {
        let config = Config::from_lookup(lookup(&[
            ("FORMCHECK_LOG_FORMAT", "json"),
            ("FORMCHECK_LOG_COLORS", "0"),
            ("FORMCHECK_LOG_SOURCE", "true"),
        ]));
        assert_eq!(config.format, Format::Json);
        assert!(!config.display.colors);
        assert!(config.display.source);
        assert!(config.display.target);
    }

    #[test]
    fn env_overrides_keep_unset_fields() {
        let base = Config {
            format: Format::Json,
            ..Config::default()
        };
        let config = base.with_env_from(lookup(&[("FORMCHECK_LOG", "debug")]));
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, Format::Json);
    }
}
