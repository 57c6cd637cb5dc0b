//! Report error types

use lingtools_core::TextError;
use thiserror::Error;

/// Report-level errors
#[derive(Error, Debug)]
pub enum ReportError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid language code or other text argument
    #[error("text error: {0}")]
    Text(#[from] TextError),

    /// Configuration file could not be parsed
    #[cfg(feature = "serde")]
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
