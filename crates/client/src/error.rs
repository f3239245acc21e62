//! Client error types.

use dashcal_core::cache::CacheError;
use dashcal_core::calendar::InteractionError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No display entry at position {index} (layout has {len})")]
    EntryOutOfRange { index: usize, len: usize },

    #[error("Selection failed: {0}")]
    Interaction(#[from] InteractionError),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
