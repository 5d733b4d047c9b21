//! Error types for data parsing in vitals-types.

use thiserror::Error;

/// Errors that can occur when parsing health metric data.
///
/// This error type is platform-agnostic and does not include
/// store-specific errors (those belong in vitals-core).
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The metric identifier is not one of the known metric types.
    #[error("Unknown metric type: '{0}'")]
    UnknownMetric(String),

    /// A value could not be interpreted.
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Result type alias using vitals-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
