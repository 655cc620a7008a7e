//! Error types for the medtrack_core library.

use crate::types::Period;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for medtrack_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Month outside 0-11 (zero-based)
    #[error("Invalid month {0}: expected 0-11")]
    InvalidMonth(u32),

    /// Year that cannot be written as a 4-digit Gregorian year
    #[error("Invalid year {0}: expected 0-9999")]
    InvalidYear(i32),

    /// Date key that is not a real `YYYY-MM-DD` date
    #[error("Invalid date key {0:?}: expected YYYY-MM-DD")]
    InvalidDateKey(String),

    /// Checklist lookup past the end of a period's doses
    #[error("No {period} dose at index {index}")]
    DoseNotFound { period: Period, index: usize },

    /// Unparseable user-supplied argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
