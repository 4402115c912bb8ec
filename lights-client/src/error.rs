//! Error types for the lights client

use thiserror::Error;

/// Errors that can occur while talking to the lights API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection refused, timeout, or the body could not be read
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The server answered with something other than 200 OK
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// The body was not the JSON shape we expected
    #[error("JSON parsing error: {0}")]
    Parse(String),
}

impl ClientError {
    /// Whether the request reached the server at all
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }
}

/// Type alias for results that can return a ClientError
pub type Result<T> = std::result::Result<T, ClientError>;
