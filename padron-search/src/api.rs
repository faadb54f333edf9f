//! Search API abstraction and the raw suggestion wire shape.

use async_trait::async_trait;
use padron_types::EntityId;
use thiserror::Error;

/// Which registry a suggestion points into.
///
/// Declaration order is the fixed group display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SuggestionKind {
    /// The primary entity of the screen.
    Vehicle,
    /// Related: the company operating the vehicle.
    Company,
    /// Related: the authorizing resolution.
    Resolution,
}

impl SuggestionKind {
    /// All kinds in display order.
    #[must_use]
    pub const fn all() -> [SuggestionKind; 3] {
        [
            SuggestionKind::Vehicle,
            SuggestionKind::Company,
            SuggestionKind::Resolution,
        ]
    }

    /// Group separator label shown above this kind's block.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            SuggestionKind::Vehicle => "Vehículos",
            SuggestionKind::Company => "Empresas",
            SuggestionKind::Resolution => "Resoluciones",
        }
    }
}

/// One suggestion as returned by the backend, before grouping and
/// highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSuggestion {
    pub kind: SuggestionKind,
    pub text: String,
    pub entity_id: EntityId,
}

impl RawSuggestion {
    pub fn new(kind: SuggestionKind, text: impl Into<String>, entity_id: EntityId) -> Self {
        Self {
            kind,
            text: text.into(),
            entity_id,
        }
    }
}

/// Errors reported by the search backend.
#[derive(Debug, Clone, Error)]
pub enum SearchApiError {
    /// The backend could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with an error.
    #[error("backend error: {0}")]
    Backend(String),
}

/// The incremental search backend.
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Fetches suggestions for a settled query term.
    async fn search(&self, term: &str) -> Result<Vec<RawSuggestion>, SearchApiError>;
}

/// A scripted search backend for testing.
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Returns queued responses in order; once the queue is empty, keeps
    /// returning the configured fallback suggestions.
    #[derive(Default)]
    pub struct MockSearchApi {
        responses: Mutex<VecDeque<Result<Vec<RawSuggestion>, SearchApiError>>>,
        fallback: Mutex<Vec<RawSuggestion>>,
        delay: Mutex<Option<Duration>>,
        calls: AtomicUsize,
        terms: Mutex<Vec<String>>,
    }

    impl MockSearchApi {
        /// Creates an API that always returns no suggestions.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates an API that always returns `suggestions`.
        #[must_use]
        pub fn returning(suggestions: Vec<RawSuggestion>) -> Self {
            let api = Self::new();
            *api.fallback.lock().unwrap() = suggestions;
            api
        }

        /// Queues one response to be returned before the fallback.
        pub fn push_response(&self, response: Result<Vec<RawSuggestion>, SearchApiError>) {
            self.responses.lock().unwrap().push_back(response);
        }

        /// Makes every search sleep first, so tests can interleave queries.
        pub fn set_delay(&self, delay: Duration) {
            *self.delay.lock().unwrap() = Some(delay);
        }

        /// Number of `search` calls observed.
        #[must_use]
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// Every term searched, in call order.
        #[must_use]
        pub fn terms(&self) -> Vec<String> {
            self.terms.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SearchApi for MockSearchApi {
        async fn search(&self, term: &str) -> Result<Vec<RawSuggestion>, SearchApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.terms.lock().unwrap().push(term.to_string());
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
