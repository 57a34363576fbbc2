//! # formcheck-log
//!
//! Logging setup for formcheck binaries: an `EnvFilter` plus one `fmt`
//! layer in the configured format, writing to stderr.
//!
//! ```no_run
//! # fn main() -> formcheck_log::LogResult<()> {
//! formcheck_log::init()?;
//! tracing::info!("ready");
//! # Ok(())
//! # }
//! ```

mod builder;
pub mod config;
mod error;

pub use builder::LoggerBuilder;
pub use config::{Config, DisplayConfig, Format};
pub use error::{LogError, LogResult};

/// Initializes logging from `FORMCHECK_LOG` / `RUST_LOG` and
/// `FORMCHECK_LOG_FORMAT`.
pub fn init() -> LogResult<()> {
    init_with(Config::from_env())
}

/// Initializes logging from an explicit config.
pub fn init_with(config: Config) -> LogResult<()> {
    LoggerBuilder::from_config(config).build()
}
