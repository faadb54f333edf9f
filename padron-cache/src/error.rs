//! Error types for the cache layer.

use thiserror::Error;

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Errors that can occur in cache operations.
///
/// `Clone` because coalesced refreshes hand the same result to every
/// attached caller.
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    /// The upstream fetch failed; the previous snapshot was retained.
    #[error("collection refresh failed: {0}")]
    Fetch(String),
}
