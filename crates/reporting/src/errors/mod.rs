//! Error types for the reporting adapter.

use thiserror::Error;

/// Errors that can occur while talking to the reporting API.
///
/// The distinction between `Provider` and `Network` matters to the core:
/// a structured upstream error carries a message worth surfacing verbatim,
/// while a transport failure only has the underlying cause.
#[derive(Error, Debug)]
pub enum ReportingError {
    /// No credential is available for the request.
    /// Raised before any network call is made.
    #[error("Missing access credential")]
    MissingCredential,

    /// The platform returned a structured error body for the request.
    #[error("{message}")]
    Provider {
        /// The error message from the platform, surfaced verbatim.
        message: String,
    },

    /// A network-level failure surfaced by the HTTP client.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be decoded into the expected shape.
    #[error("Response parse error: {0}")]
    Parse(String),

    /// The requested date range is malformed (since after until).
    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),
}
