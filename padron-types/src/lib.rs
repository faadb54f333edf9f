//! Core type definitions for the Padrón list engine.
//!
//! This crate defines the fundamental, screen-agnostic types shared by the
//! list-management components:
//! - Entity identifiers (UUID v7)
//! - Lifecycle states (`ACTIVO`, `SUSPENDIDO`, ...)
//! - Dynamic field values and the generic [`Entity`] record
//!
//! Business rules (which state transitions are legal, which documents a
//! vehicle requires, etc.) belong to the backend, not here. The engine only
//! carries these values, filters by them, and renders them.

mod entity;
mod field;
mod ids;
mod state;

pub use entity::Entity;
pub use field::FieldValue;
pub use ids::EntityId;
pub use state::EntityState;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("unknown entity state: {0}")]
    UnknownState(String),
}
