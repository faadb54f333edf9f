//! Bulk state-change orchestration for the Padrón list engine.
//!
//! Given the selected rows and one target state, the orchestrator issues
//! one independent state-change call per record, all concurrently, waits
//! for every call to settle, and folds the outcomes into a single
//! [`BulkOperationResult`] — one entry per requested id, successes and
//! classified failures side by side. One rejected record never cancels or
//! blocks the rest.
//!
//! After the batch settles — however many records failed — the entity
//! cache is invalidated exactly once so the next derivation reflects
//! whichever subset actually changed.
//!
//! Calling with an empty selection is a caller bug and fails fast with
//! [`BulkError::EmptySelection`]; everything originating upstream is
//! reported per item instead of raised.

pub mod api;
mod orchestrator;
mod result;

pub use api::{StateChangeApi, StateChangeError};
pub use orchestrator::{BulkError, BulkResult, BulkStateOrchestrator};
pub use result::{BulkOperationResult, FailureKind, ItemOutcome, Outcome};
