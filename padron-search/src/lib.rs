//! Debounced incremental search with ranked, grouped suggestions.
//!
//! The search bar feeds raw keystrokes into [`SearchSuggestEngine`], which
//! debounces them, issues at most one fetch per settled query, drops stale
//! responses (last-request-wins), and publishes typed snapshots through a
//! watch channel the presentation layer subscribes to.
//!
//! # State machine
//!
//! `Idle → Debouncing → Fetching → Ready | Failed`
//!
//! Every keystroke restarts at `Debouncing`; clearing the input returns to
//! `Idle` synchronously. A fetch failure ends in `Failed` with no
//! suggestions — never an error to the caller — and the next keystroke
//! starts over.
//!
//! Results are grouped by suggestion type in fixed priority order
//! (vehicles, then companies, then resolutions) with the query highlighted
//! inside each suggestion text. Selecting a suggestion records the raw term
//! in the persisted recent-search list and hands the typed payload back to
//! the caller.

pub mod api;
mod engine;
mod highlight;
mod recent;
mod suggest;

pub use api::{RawSuggestion, SearchApi, SearchApiError, SuggestionKind};
pub use engine::{SearchSuggestEngine, SuggestPhase, SuggestSnapshot, DEFAULT_DEBOUNCE};
pub use highlight::{match_spans, MatchSpan};
pub use recent::{RecentSearches, DEFAULT_RECENT_LIMIT};
pub use suggest::{group_suggestions, SuggestGroup, Suggestion, SuggestionPayload};
