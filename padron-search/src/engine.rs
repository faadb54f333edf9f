//! The debounce/fetch state machine.

use crate::api::SearchApi;
use crate::recent::RecentSearches;
use crate::suggest::{group_suggestions, SuggestGroup, Suggestion, SuggestionPayload};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Quiet period a query must hold still before a fetch is issued.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Where the engine currently is in the suggestion lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestPhase {
    /// No query. Suggestions are empty.
    Idle,
    /// A query is waiting out the quiet period.
    Debouncing,
    /// The fetch for the settled query is in flight.
    Fetching,
    /// Suggestions for the current query are available.
    Ready,
    /// The fetch failed; suggestions are empty and the bar stays usable.
    Failed,
}

/// What the presentation layer observes: phase, the query it belongs to,
/// and the grouped suggestions once ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestSnapshot {
    pub phase: SuggestPhase,
    pub query: String,
    pub groups: Vec<SuggestGroup>,
}

impl SuggestSnapshot {
    fn idle() -> Self {
        Self {
            phase: SuggestPhase::Idle,
            query: String::new(),
            groups: Vec::new(),
        }
    }

    fn at(phase: SuggestPhase, query: &str) -> Self {
        Self {
            phase,
            query: query.to_string(),
            groups: Vec::new(),
        }
    }
}

struct EngineInner {
    api: Arc<dyn SearchApi>,
    recents: RecentSearches,
    debounce: Duration,
    /// Monotonically increasing query token; only work holding the latest
    /// token may publish (last-request-wins).
    token: AtomicU64,
    tx: watch::Sender<SuggestSnapshot>,
}

/// The debounced, cancel-on-supersede suggestion engine.
///
/// Cheap to clone; clones share the same state machine.
#[derive(Clone)]
pub struct SearchSuggestEngine {
    inner: Arc<EngineInner>,
}

impl SearchSuggestEngine {
    /// Creates an engine over the given backend with the default quiet
    /// period.
    pub fn new(api: Arc<dyn SearchApi>, recents: RecentSearches) -> Self {
        Self::with_debounce(api, recents, DEFAULT_DEBOUNCE)
    }

    /// Creates an engine with a custom quiet period.
    pub fn with_debounce(
        api: Arc<dyn SearchApi>,
        recents: RecentSearches,
        debounce: Duration,
    ) -> Self {
        let (tx, _) = watch::channel(SuggestSnapshot::idle());
        Self {
            inner: Arc::new(EngineInner {
                api,
                recents,
                debounce,
                token: AtomicU64::new(0),
                tx,
            }),
        }
    }

    /// Subscribes to snapshot updates.
    pub fn subscribe(&self) -> watch::Receiver<SuggestSnapshot> {
        self.inner.tx.subscribe()
    }

    /// The current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SuggestSnapshot {
        self.inner.tx.borrow().clone()
    }

    /// Feeds the current content of the search input into the engine.
    ///
    /// Empty input clears synchronously; anything else waits out the quiet
    /// period before fetching. Must be called from within a tokio runtime.
    pub fn on_query_changed(&self, text: &str) {
        let token = self.bump_token();
        let query = text.trim().to_string();

        if query.is_empty() {
            self.publish(SuggestSnapshot::idle());
            return;
        }

        self.publish(SuggestSnapshot::at(SuggestPhase::Debouncing, &query));

        let engine = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(engine.inner.debounce).await;
            if !engine.holds_token(token) {
                debug!(%query, "query superseded during quiet period");
                return;
            }

            engine.publish(SuggestSnapshot::at(SuggestPhase::Fetching, &query));
            let result = engine.inner.api.search(&query).await;
            if !engine.holds_token(token) {
                debug!(%query, "dropping stale suggestion response");
                return;
            }

            match result {
                Ok(raw) => {
                    let groups = group_suggestions(raw, &query);
                    debug!(%query, groups = groups.len(), "suggestions ready");
                    engine.publish(SuggestSnapshot {
                        phase: SuggestPhase::Ready,
                        query: query.clone(),
                        groups,
                    });
                }
                Err(err) => {
                    warn!(%query, "suggestion fetch failed: {err}");
                    engine.publish(SuggestSnapshot::at(SuggestPhase::Failed, &query));
                }
            }
        });
    }

    /// Completes a selection: cancels outstanding work, clears the input
    /// state, records the raw query term and returns the typed payload.
    pub async fn select(&self, suggestion: &Suggestion) -> SuggestionPayload {
        let query = self.snapshot().query;
        self.bump_token();
        self.publish(SuggestSnapshot::idle());
        if !query.is_empty() {
            self.inner.recents.record(&query).await;
        }
        SuggestionPayload {
            kind: suggestion.kind,
            entity_id: suggestion.entity_id,
        }
    }

    /// The persisted recent-search list.
    #[must_use]
    pub fn recents(&self) -> &RecentSearches {
        &self.inner.recents
    }

    fn bump_token(&self) -> u64 {
        self.inner.token.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn holds_token(&self, token: u64) -> bool {
        self.inner.token.load(Ordering::SeqCst) == token
    }

    fn publish(&self, snapshot: SuggestSnapshot) {
        // send_replace never fails, even with no subscribers.
        self.inner.tx.send_replace(snapshot);
    }
}
