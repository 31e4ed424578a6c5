//! Error types for block configuration and host utilities.

use thiserror::Error;

/// Errors that can occur while configuring a block.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlockError {
    /// A required configuration field is absent.
    #[error("Missing required config field: {0}")]
    MissingField(String),

    /// A configuration field has the wrong type or value.
    #[error("Invalid config field {field}: {reason}")]
    InvalidField { field: String, reason: String },

    /// Unknown product layout.
    #[error("Invalid product layout: {0}")]
    InvalidLayout(String),

    /// URL could not be parsed or lacks a scheme/authority.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BlockError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        BlockError::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for BlockError {
    fn from(e: serde_json::Error) -> Self {
        BlockError::Serialization(e.to_string())
    }
}
