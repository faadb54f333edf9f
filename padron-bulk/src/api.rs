//! State-change API abstraction.

use async_trait::async_trait;
use padron_types::{Entity, EntityId, EntityState};
use thiserror::Error;

/// Errors reported by the state-change backend, in the fixed classification
/// the result aggregation maps to user messages.
#[derive(Debug, Clone, Error)]
pub enum StateChangeError {
    /// The transition is not legal for this record.
    #[error("validation conflict: {0}")]
    Validation(String),

    /// The record no longer exists upstream.
    #[error("entity not found")]
    NotFound,

    /// The caller lacks permission for this record.
    #[error("permission denied")]
    Forbidden,

    /// The backend could not be reached.
    #[error("network error: {0}")]
    Network(String),
}

/// The per-record state-change backend.
///
/// Repeat transitions are the backend's concern: re-applying a state an
/// entity already holds is expected to come back as a success.
#[async_trait]
pub trait StateChangeApi: Send + Sync {
    /// Requests one record's transition to `target` and returns the updated
    /// record.
    async fn change_state(
        &self,
        id: EntityId,
        target: EntityState,
        reason: &str,
        notes: Option<&str>,
    ) -> Result<Entity, StateChangeError>;
}

/// A scripted state-change backend for testing.
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Succeeds for every id unless a failure was scripted for it.
    #[derive(Default)]
    pub struct MockStateChangeApi {
        failures: Mutex<HashMap<EntityId, StateChangeError>>,
        delay: Mutex<Option<Duration>>,
        calls: AtomicUsize,
        seen: Mutex<Vec<EntityId>>,
    }

    impl MockStateChangeApi {
        /// Creates a backend that accepts every transition.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Scripts a failure for one id.
        pub fn fail_for(&self, id: EntityId, error: StateChangeError) {
            self.failures.lock().unwrap().insert(id, error);
        }

        /// Makes every call sleep first, so tests can observe concurrency.
        pub fn set_delay(&self, delay: Duration) {
            *self.delay.lock().unwrap() = Some(delay);
        }

        /// Number of `change_state` calls observed.
        #[must_use]
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// Every id seen, in completion order.
        #[must_use]
        pub fn seen(&self) -> Vec<EntityId> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl StateChangeApi for MockStateChangeApi {
        async fn change_state(
            &self,
            id: EntityId,
            target: EntityState,
            _reason: &str,
            _notes: Option<&str>,
        ) -> Result<Entity, StateChangeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let delay = *self.delay.lock().unwrap();
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            self.seen.lock().unwrap().push(id);
            if let Some(error) = self.failures.lock().unwrap().get(&id) {
                return Err(error.clone());
            }
            Ok(Entity::new(id, target))
        }
    }
}
