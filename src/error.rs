//! Error types for inventory requests.

use thiserror::Error;

/// Errors surfaced by an inventory request.
///
/// A request either completes with every describe call it needs, or fails
/// with one of these. There is no partial result.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Credentials could not be resolved for the caller.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A describe call against the provider failed.
    #[error("{operation} failed: {message}")]
    Provider {
        operation: &'static str,
        message: String,
    },

    /// Configuration value missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client could not be constructed.
    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl InventoryError {
    pub(crate) fn provider(operation: &'static str, message: impl Into<String>) -> Self {
        InventoryError::Provider {
            operation,
            message: message.into(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, InventoryError>;
