//! Summary statistics over the cached collection.

use padron_types::{Entity, EntityState};
use std::collections::BTreeMap;

/// Per-state record counts for the registry header.
///
/// Recomputed whenever a snapshot is installed or patched, so reading them
/// is free.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    total: usize,
    by_state: BTreeMap<EntityState, usize>,
}

impl CacheStats {
    /// Computes statistics for a collection.
    #[must_use]
    pub fn compute(entities: &[Entity]) -> Self {
        let mut by_state = BTreeMap::new();
        for entity in entities {
            *by_state.entry(entity.state).or_insert(0) += 1;
        }
        Self {
            total: entities.len(),
            by_state,
        }
    }

    /// Total number of cached records.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of cached records in `state`.
    #[must_use]
    pub fn count(&self, state: EntityState) -> usize {
        self.by_state.get(&state).copied().unwrap_or(0)
    }

    /// Iterates over the non-zero per-state counts.
    pub fn iter(&self) -> impl Iterator<Item = (EntityState, usize)> + '_ {
        self.by_state.iter().map(|(state, count)| (*state, *count))
    }
}
