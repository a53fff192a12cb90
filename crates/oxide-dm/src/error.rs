//! Error types for the DM dialect.

use crate::config::MAX_DATETIME_PRECISION;

/// Errors raised while configuring the dialect or generating DDL.
///
/// Query rewriting itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum DmError {
    /// The configured default datetime precision is out of range.
    #[error("Invalid datetime precision {0}: expected at most {max}", max = MAX_DATETIME_PRECISION)]
    InvalidDatetimePrecision(u32),

    /// The configuration marks the requested operation as unsupported.
    #[error("Operation not supported by this configuration: {0}")]
    Unsupported(&'static str),

    /// IO error (reading configuration files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for DM dialect operations.
pub type Result<T> = std::result::Result<T, DmError>;
