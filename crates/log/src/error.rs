//! Logger setup errors

/// Why the logger could not be installed.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The level directive does not parse as an `EnvFilter`.
    #[error("invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber is already installed.
    #[error("failed to install subscriber: {0}")]
    Init(String),
}

pub type LogResult<T> = Result<T, LogError>;
