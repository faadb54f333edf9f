//! Fan-out/fan-in over the per-record state-change calls.

use crate::api::StateChangeApi;
use crate::result::{BulkOperationResult, ItemOutcome};
use futures::future::join_all;
use padron_cache::EntityCache;
use padron_types::{EntityId, EntityState};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Result type for bulk orchestration.
pub type BulkResult<T> = Result<T, BulkError>;

/// Caller-misuse errors. Unlike upstream failures these propagate, because
/// they indicate a bug in the calling screen, not a runtime condition.
#[derive(Debug, Error)]
pub enum BulkError {
    /// `apply` was called with no selected records.
    #[error("bulk apply requires at least one selected entity id")]
    EmptySelection,
}

/// Issues one state-change call per selected record and aggregates the
/// settled outcomes.
pub struct BulkStateOrchestrator {
    api: Arc<dyn StateChangeApi>,
    cache: Arc<EntityCache>,
}

impl BulkStateOrchestrator {
    /// Creates an orchestrator over the given backend and cache.
    pub fn new(api: Arc<dyn StateChangeApi>, cache: Arc<EntityCache>) -> Self {
        Self { api, cache }
    }

    /// Transitions every selected record to `target`, concurrently, and
    /// waits for all calls to settle.
    ///
    /// The result lists every id exactly once, in request order. A failing
    /// record neither cancels nor blocks the others; there is no mid-batch
    /// cancellation. Exactly one cache invalidation follows the batch,
    /// regardless of how many records failed.
    pub async fn apply(
        &self,
        ids: &[EntityId],
        target: EntityState,
        reason: &str,
        notes: Option<&str>,
    ) -> BulkResult<BulkOperationResult> {
        if ids.is_empty() {
            return Err(BulkError::EmptySelection);
        }

        info!(count = ids.len(), state = %target, "starting bulk state change");

        let calls = ids.iter().map(|id| {
            let api = Arc::clone(&self.api);
            let id = *id;
            async move {
                match api.change_state(id, target, reason, notes).await {
                    Ok(_) => ItemOutcome::success(id),
                    Err(err) => {
                        warn!(id = %id, "state change failed: {err}");
                        ItemOutcome::failure(id, &err)
                    }
                }
            }
        });

        let outcomes = join_all(calls).await;
        let result = BulkOperationResult::new(outcomes);

        info!(
            requested = result.requested(),
            succeeded = result.succeeded(),
            failed = result.failed(),
            "bulk state change settled"
        );

        self.cache.invalidate().await;
        Ok(result)
    }
}
