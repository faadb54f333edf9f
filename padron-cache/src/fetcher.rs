//! Upstream collection source abstraction.

use async_trait::async_trait;
use padron_types::Entity;
use thiserror::Error;

/// Errors reported by the upstream collection source.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The backend could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with an error.
    #[error("backend error: {0}")]
    Backend(String),
}

/// The upstream source of the full entity collection.
///
/// Implemented by the HTTP client of the presentation layer; tests use
/// [`mock::MockFetcher`].
#[async_trait]
pub trait EntityFetcher: Send + Sync {
    /// Fetches the complete current collection.
    async fn fetch_all(&self) -> Result<Vec<Entity>, FetchError>;
}

/// A scripted fetcher for testing.
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Returns queued responses in order; once the queue is empty, keeps
    /// returning the configured fallback collection.
    #[derive(Default)]
    pub struct MockFetcher {
        responses: Mutex<VecDeque<Result<Vec<Entity>, FetchError>>>,
        fallback: Mutex<Vec<Entity>>,
        delay: Mutex<Option<Duration>>,
        calls: AtomicUsize,
    }

    impl MockFetcher {
        /// Creates a fetcher that always returns an empty collection.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a fetcher that always returns `entities`.
        #[must_use]
        pub fn returning(entities: Vec<Entity>) -> Self {
            let fetcher = Self::new();
            *fetcher.fallback.lock().unwrap() = entities;
            fetcher
        }

        /// Queues one response to be returned before the fallback.
        pub fn push_response(&self, response: Result<Vec<Entity>, FetchError>) {
            self.responses.lock().unwrap().push_back(response);
        }

        /// Makes every fetch sleep first, so tests can overlap refreshes.
        pub fn set_delay(&self, delay: Duration) {
            *self.delay.lock().unwrap() = Some(delay);
        }

        /// Number of `fetch_all` calls observed.
        #[must_use]
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl EntityFetcher for MockFetcher {
        async fn fetch_all(&self) -> Result<Vec<Entity>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let delay = *self.delay.lock().unwrap();
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            let queued = self.responses.lock().unwrap().pop_front();
            match queued {
                Some(response) => response,
                None => Ok(self.fallback.lock().unwrap().clone()),
            }
        }
    }
}
