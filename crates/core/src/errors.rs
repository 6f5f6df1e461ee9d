//! Core error types for the Adlens dashboard.

use thiserror::Error;

use adlens_reporting::ReportingError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard core.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or unusable credential; raised before any network call.
    #[error("Credential error: {0}")]
    Credential(String),

    /// Failure surfaced by the reporting adapter.
    #[error("{0}")]
    Reporting(#[from] ReportingError),

    /// Input validation failed (malformed date range and the like).
    #[error("Input validation failed: {0}")]
    Validation(String),

    /// Internal state error (poisoned lock).
    #[error("State error: {0}")]
    State(String),
}
