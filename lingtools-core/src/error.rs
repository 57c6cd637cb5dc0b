//! Error types for text operations

use thiserror::Error;

/// Errors raised by validation, ingestion and configuration loading
#[derive(Error, Debug)]
pub enum TextError {
    /// A required string was absent, empty or blank
    #[error("{name} cannot be empty or whitespace only")]
    InvalidArgument {
        /// Name of the offending argument
        name: String,
    },

    /// The character encoding label is not known
    #[error("unsupported encoding: {label}")]
    UnsupportedEncoding {
        /// The label as supplied by the caller
        label: String,
    },

    /// Underlying read failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Typography configuration could not be parsed or is invalid
    #[error("configuration error: {0}")]
    Config(String),
}

/// Discriminant of a [`TextError`], for callers that only need to branch on the failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    UnsupportedEncoding,
    Io,
    Config,
}

impl TextError {
    /// The failure class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TextError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            TextError::UnsupportedEncoding { .. } => ErrorKind::UnsupportedEncoding,
            TextError::Io(_) => ErrorKind::Io,
            TextError::Config(_) => ErrorKind::Config,
        }
    }
}

impl From<toml::de::Error> for TextError {
    fn from(err: toml::de::Error) -> Self {
        TextError::Config(err.to_string())
    }
}

/// Result type for text operations
pub type Result<T> = std::result::Result<T, TextError>;
