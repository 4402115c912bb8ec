//! Error types for light-state

use lights_client::ClientError;
use thiserror::Error;

/// Result type for light-state operations
pub type Result<T> = std::result::Result<T, StateError>;

/// Errors that can end a poll cycle early
///
/// Per-light failures never surface here; they are logged and absorbed by
/// enrichment.
#[derive(Debug, Error)]
pub enum StateError {
    /// The bulk listing could not be fetched, so the cycle was skipped
    #[error("Failed to fetch light listing: {0}")]
    Fetch(#[from] ClientError),
}
