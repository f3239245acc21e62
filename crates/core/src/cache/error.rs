use thiserror::Error;

/// Errors that can occur when building a layout cache.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache capacity must be greater than zero")]
    ZeroCapacity,
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
