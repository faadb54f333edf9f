//! The entity collection cache.

use crate::error::{CacheError, CacheResult};
use crate::fetcher::EntityFetcher;
use crate::stats::CacheStats;
use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use padron_types::{Entity, EntityId};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

/// A point-in-time view of the cached collection.
///
/// The entity vector is shared, not copied; readers hold it as long as they
/// need while refreshes install new snapshots underneath.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// The cached collection.
    pub entities: Arc<Vec<Entity>>,
    /// Generation counter; bumped on every accepted mutation.
    pub generation: u64,
    /// True after `invalidate` until the next successful refresh.
    pub stale: bool,
}

struct Inner {
    entities: Arc<Vec<Entity>>,
    generation: u64,
    stale: bool,
    stats: CacheStats,
}

impl Inner {
    fn install(&mut self, entities: Vec<Entity>) {
        self.stats = CacheStats::compute(&entities);
        self.entities = Arc::new(entities);
        self.generation += 1;
        self.stale = false;
    }
}

type RefreshFuture = Shared<BoxFuture<'static, CacheResult<u64>>>;

/// The in-memory, invalidatable cache of the last-fetched collection.
pub struct EntityCache {
    fetcher: Arc<dyn EntityFetcher>,
    inner: Arc<RwLock<Inner>>,
    in_flight: Arc<Mutex<Option<RefreshFuture>>>,
}

impl EntityCache {
    /// Creates an empty cache over the given upstream source.
    ///
    /// The initial snapshot is empty, generation 0, marked stale until the
    /// first refresh.
    pub fn new(fetcher: Arc<dyn EntityFetcher>) -> Self {
        Self {
            fetcher,
            inner: Arc::new(RwLock::new(Inner {
                entities: Arc::new(Vec::new()),
                generation: 0,
                stale: true,
                stats: CacheStats::default(),
            })),
            in_flight: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns the current snapshot without waiting for any in-flight
    /// refresh.
    pub async fn get(&self) -> Snapshot {
        let inner = self.inner.read().await;
        Snapshot {
            entities: Arc::clone(&inner.entities),
            generation: inner.generation,
            stale: inner.stale,
        }
    }

    /// Returns the summary statistics of the current snapshot.
    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats.clone()
    }

    /// Fetches a fresh collection and installs it atomically.
    ///
    /// Returns the new generation. Concurrent calls attach to the same
    /// in-flight fetch and observe the same result. On failure the previous
    /// snapshot is retained and the error reported to every attached caller.
    pub async fn refresh(&self) -> CacheResult<u64> {
        let fut = {
            let mut slot = self.in_flight.lock().await;
            match slot.as_ref() {
                Some(existing) => {
                    debug!("refresh already in flight, attaching");
                    existing.clone()
                }
                None => {
                    let fut = self.spawn_refresh();
                    *slot = Some(fut.clone());
                    fut
                }
            }
        };
        fut.await
    }

    fn spawn_refresh(&self) -> RefreshFuture {
        let fetcher = Arc::clone(&self.fetcher);
        let inner = Arc::clone(&self.inner);
        let slot = Arc::clone(&self.in_flight);
        async move {
            let result = fetcher.fetch_all().await;
            let outcome = match result {
                Ok(entities) => {
                    let mut guard = inner.write().await;
                    guard.install(entities);
                    info!(
                        generation = guard.generation,
                        total = guard.stats.total(),
                        "collection refreshed"
                    );
                    Ok(guard.generation)
                }
                Err(err) => {
                    warn!("refresh failed, keeping previous snapshot: {err}");
                    Err(CacheError::Fetch(err.to_string()))
                }
            };
            *slot.lock().await = None;
            outcome
        }
        .boxed()
        .shared()
    }

    /// Marks the snapshot stale without fetching.
    ///
    /// Called after remote mutations whose exact effect on the collection is
    /// unknown (bulk state changes, uploads); the next refresh supersedes
    /// the snapshot.
    pub async fn invalidate(&self) {
        let mut inner = self.inner.write().await;
        inner.stale = true;
        debug!(generation = inner.generation, "snapshot invalidated");
    }

    /// Patches one record into the snapshot (insert or replace) and bumps
    /// the generation.
    ///
    /// For mutations whose result the caller already holds, this avoids a
    /// full round-trip.
    pub async fn apply_upsert(&self, entity: Entity) {
        let mut inner = self.inner.write().await;
        let mut entities: Vec<Entity> = inner.entities.as_ref().clone();
        match entities.iter_mut().find(|e| e.id == entity.id) {
            Some(existing) => *existing = entity,
            None => entities.push(entity),
        }
        inner.install(entities);
    }

    /// Removes one record from the snapshot and bumps the generation.
    /// No-op if the id is not cached.
    pub async fn remove(&self, id: EntityId) {
        let mut inner = self.inner.write().await;
        if !inner.entities.iter().any(|e| e.id == id) {
            return;
        }
        let entities: Vec<Entity> = inner
            .entities
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();
        inner.install(entities);
    }
}
