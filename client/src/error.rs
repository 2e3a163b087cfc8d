//! Error types for the portfolio client.

use thiserror::Error;

/// Errors that can occur when talking to the portfolio API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response was received.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the server envelope, or the raw body.
        message: String,
    },

    /// Response body did not match the expected shape.
    #[error("Failed to deserialize response: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// Invalid base URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
