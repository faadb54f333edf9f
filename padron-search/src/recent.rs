//! The persisted recent-search list.

use padron_storage::KeyValueStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Default cap on the recent-search list.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Bounded most-recent-first list of raw search terms, persisted per
/// feature under `<feature>_busquedas_recientes`.
///
/// Recording a term removes any earlier case-insensitive duplicate, pushes
/// the term to the front and truncates to the cap. Load tolerates missing
/// or unparseable storage (empty list); save failures are logged and
/// swallowed.
pub struct RecentSearches {
    store: Arc<dyn KeyValueStore>,
    key: String,
    limit: usize,
}

impl RecentSearches {
    /// Creates the list for one feature with the default cap.
    pub fn new(feature: &str, store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_limit(feature, store, DEFAULT_RECENT_LIMIT)
    }

    /// Creates the list with a custom cap.
    pub fn with_limit(feature: &str, store: Arc<dyn KeyValueStore>, limit: usize) -> Self {
        Self {
            store,
            key: format!("{feature}_busquedas_recientes"),
            limit,
        }
    }

    /// Returns the stored terms, most recent first.
    pub async fn list(&self) -> Vec<String> {
        let raw = match self.store.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                debug!("failed to read recent searches: {err}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(terms) => terms,
            Err(err) => {
                debug!("stored recent searches are not valid JSON, starting over: {err}");
                Vec::new()
            }
        }
    }

    /// Records one searched term at the front of the list.
    pub async fn record(&self, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            return;
        }

        let mut terms = self.list().await;
        let lowered = term.to_lowercase();
        terms.retain(|t| t.to_lowercase() != lowered);
        terms.insert(0, term.to_string());
        terms.truncate(self.limit);

        let json = match serde_json::to_string(&terms) {
            Ok(json) => json,
            Err(err) => {
                warn!("failed to serialize recent searches: {err}");
                return;
            }
        };
        if let Err(err) = self.store.set(&self.key, &json).await {
            warn!("failed to persist recent searches: {err}");
        }
    }

    /// Clears the stored list.
    pub async fn clear(&self) {
        if let Err(err) = self.store.remove(&self.key).await {
            warn!("failed to clear recent searches: {err}");
        }
    }
}
