//! In-memory entity collection cache for the Padrón list engine.
//!
//! Holds the last server-fetched collection as an atomically-swapped
//! snapshot with a monotonically increasing generation counter, plus the
//! summary statistics the registry header displays.
//!
//! # Guarantees
//!
//! - `get` never blocks on the network: it returns the last good snapshot
//!   even while a refresh is in flight.
//! - Overlapping `refresh` calls coalesce onto a single upstream fetch and
//!   a single generation bump.
//! - A failed refresh keeps the previous snapshot; the cache is never left
//!   empty because the backend was unreachable.
//! - `invalidate` marks the snapshot stale without fetching, so dependent
//!   derivations know to recompute after the next refresh.

mod cache;
mod error;
pub mod fetcher;
mod stats;

pub use cache::{EntityCache, Snapshot};
pub use error::{CacheError, CacheResult};
pub use fetcher::{EntityFetcher, FetchError};
pub use stats::CacheStats;
