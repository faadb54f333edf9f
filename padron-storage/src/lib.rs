//! Device-local key-value persistence seam for the Padrón list engine.
//!
//! User conveniences (visible columns, recent searches) persist as opaque
//! JSON strings under feature-scoped keys. The engine never treats a missing
//! or unparseable value as fatal — every reader falls back to its defaults —
//! so the trait surface stays deliberately small.
//!
//! Each consumer owns its keys; no two components write the same one.

mod error;
mod memory;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryStore;

use async_trait::async_trait;

/// A device-local key-value store (browser `localStorage`, a settings file,
/// or [`MemoryStore`] in tests).
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`. Absence is `Ok(None)`, not an error.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes the value stored under `key`, if any.
    async fn remove(&self, key: &str) -> StorageResult<()>;
}
