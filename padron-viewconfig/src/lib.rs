//! Persisted grid column configuration for the Padrón list engine.
//!
//! Each registry grid declares its columns once in a [`ColumnRegistry`];
//! the user's chosen subset persists per feature under
//! `<feature>-columnas-config` and is validated and repaired on every load:
//! unknown keys are dropped, required keys are re-added, and anything
//! unparseable falls back to the registry defaults. Visibility is a
//! convenience, so persistence failures are logged and swallowed rather
//! than surfaced.

mod column;
mod store;

pub use column::{ColumnConfig, ColumnRegistry};
pub use store::ViewConfigStore;
