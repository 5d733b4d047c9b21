//! Error types for vitals-core.
//!
//! Store failures are carried as their human-readable message and surfaced
//! verbatim: nothing in this crate classifies, retries or recovers from them.
//!
//! | Error | Raised by | Effect on a dashboard run |
//! |-------|-----------|---------------------------|
//! | [`Error::AuthorizationDenied`] | authorization returned `false` | no metric is fetched |
//! | [`Error::Store`] | any store call | that metric (or the whole run, for authorization) is left blank |
//! | [`Error::InvalidData`] | fixture parsing | - |
//! | [`Error::Io`] | fixture loading | - |
//!
//! Absence of data is not an error: height and weight come back as `None`,
//! step count as `0`, and dated lists as empty vectors.

use thiserror::Error;

/// Errors produced by the health data facade and its stores.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The store answered the authorization request without granting access.
    #[error("Health data authorization was denied")]
    AuthorizationDenied,

    /// The health data store reported an error. The message is shown as-is.
    #[error("{0}")]
    Store(String),

    /// Data could not be interpreted.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a store error from the store's own message.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }
}

impl From<vitals_types::ParseError> for Error {
    fn from(err: vitals_types::ParseError) -> Self {
        Error::InvalidData(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidData(err.to_string())
    }
}

/// Result type alias using vitals-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;
