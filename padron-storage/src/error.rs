//! Error types for the persistence seam.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur in storage operations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The underlying store rejected the operation.
    #[error("storage backend error: {0}")]
    Backend(String),
}
