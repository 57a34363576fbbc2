//! Logger builder implementation

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Builds the base `fmt` layer for one output format. Events go to stderr.
macro_rules! create_fmt_layer {
    ($display:expr) => {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
    };
}

/// Installs `Registry + filter + fmt` as the global default.
macro_rules! init_subscriber {
    ($filter:expr, $fmt_layer:expr) => {
        Registry::default()
            .with($filter)
            .with($fmt_layer)
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))
    };
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Parses the level directive.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::Filter(format!("{}: {}", &self.config.level, e)))
    }

    /// Build and install the global subscriber
    ///
    /// The subscriber stays installed for the rest of the process.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<()> {
        let filter = self.filter()?;
        let display = self.config.display;

        match self.config.format {
            Format::Pretty => init_subscriber!(filter, create_fmt_layer!(display).pretty())?,
            Format::Compact => init_subscriber!(filter, create_fmt_layer!(display).compact())?,
            Format::Json => {
                init_subscriber!(filter, create_fmt_layer!(display).with_ansi(false).json())?;
            }
        }

        tracing::debug!(level = %self.config.level, format = ?self.config.format, "logger initialized");

        Ok(())
    }
}
