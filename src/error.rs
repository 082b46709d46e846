//! Error types for ohara.

use std::io;
use thiserror::Error;

/// Result type alias for ohara operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ohara operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Session store I/O error.
    #[error("Storage error: {0}")]
    Storage(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Request URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Request context is missing a required part.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid state encountered.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Table markup does not follow the inline-edit convention.
    #[error("HTML error: {0}")]
    Html(String),

    /// A field value could not be converted for its target.
    #[error("Cannot bind field {field}: {message}")]
    Binding {
        /// Target field name.
        field: String,
        /// What went wrong.
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a binding error for `field`.
    pub fn binding(field: &str, message: impl Into<String>) -> Self {
        Self::Binding {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
