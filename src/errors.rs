/*!
 * Error types for the versecheck application.
 *
 * Content validation itself never fails; these errors cover configuration
 * and file handling around it, using the thiserror crate for ergonomic
 * error definitions.
 */

use thiserror::Error;

/// Errors found while checking configuration values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A value lies outside its allowed range
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// The configured genre is empty
    #[error("Default genre must not be empty")]
    EmptyGenre,
}

impl ConfigError {
    /// Shorthand for an out-of-range field
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// A file could be read but not parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Error from configuration checks
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}
