//! Error types for the web client

use thiserror::Error;

/// Errors that can occur during Web API communication
#[derive(Debug, Error)]
pub enum WebError {
    /// Network or transport level failure (connect, timeout, body read)
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// Non-success status returned by the server
    #[error("HTTP status {code}: {message}")]
    Status { code: u16, message: String },

    /// The access token was missing, expired or rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The client could not be constructed
    #[error("Client configuration error: {0}")]
    Configuration(String),
}
