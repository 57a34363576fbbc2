//! Errors raised by distance lookups.
//!
//! These never escape a validation run: [`ZipDistance`](super::ZipDistance)
//! logs them and records a validation message instead.

/// Why a distance lookup produced no usable response.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The configured base URL does not parse.
    #[error("invalid base url `{url}`: {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The configured base URL cannot take path segments (e.g. `mailto:`).
    #[error("base url `{0}` cannot carry path segments")]
    CannotBeABase(String),

    /// Connection, timeout or body-read failure.
    #[error("distance request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with something that is not JSON.
    #[error("distance service returned malformed JSON (status {status}): {source}")]
    MalformedBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// Lookups are switched off.
    #[error("distance lookups are disabled")]
    Offline,
}
