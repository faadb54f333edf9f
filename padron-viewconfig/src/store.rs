//! The persisted view configuration store.

use crate::column::ColumnRegistry;
use padron_storage::KeyValueStore;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Persists and repairs the user's visible column set for one grid.
///
/// The stored value is a JSON array of column keys under
/// `<feature>-columnas-config`. Load never fails: garbage, an empty array
/// or fully-unknown keys all fall back to the registry defaults, and any
/// partially-valid set is repaired (unknown keys dropped, required keys
/// re-added, canonical order restored).
pub struct ViewConfigStore {
    registry: ColumnRegistry,
    store: Arc<dyn KeyValueStore>,
    key: String,
    visible: RwLock<Vec<String>>,
}

impl ViewConfigStore {
    /// Creates a store for one feature's grid. The in-memory set starts at
    /// the defaults until [`load`](Self::load) is called.
    pub fn new(feature: &str, registry: ColumnRegistry, store: Arc<dyn KeyValueStore>) -> Self {
        let visible = registry.default_keys();
        Self {
            registry,
            store,
            key: format!("{feature}-columnas-config"),
            visible: RwLock::new(visible),
        }
    }

    /// The column registry this store validates against.
    #[must_use]
    pub fn registry(&self) -> &ColumnRegistry {
        &self.registry
    }

    /// The currently visible column keys, in registry order.
    #[must_use]
    pub fn current(&self) -> Vec<String> {
        self.visible.read().unwrap().clone()
    }

    /// Loads the persisted set, repairs it and returns it.
    ///
    /// Fallback to defaults when nothing is stored, the JSON does not
    /// parse, or no stored key is known to the registry.
    pub async fn load(&self) -> Vec<String> {
        let raw = match self.store.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return self.install(self.registry.default_keys()),
            Err(err) => {
                warn!("failed to read column config, using defaults: {err}");
                return self.install(self.registry.default_keys());
            }
        };

        let stored: Vec<String> = match serde_json::from_str(&raw) {
            Ok(keys) => keys,
            Err(err) => {
                warn!("stored column config is not a JSON key array, using defaults: {err}");
                return self.install(self.registry.default_keys());
            }
        };

        let known: Vec<&str> = stored
            .iter()
            .map(String::as_str)
            .filter(|k| self.registry.contains(k))
            .collect();
        if known.is_empty() {
            debug!("stored column config has no known keys, using defaults");
            return self.install(self.registry.default_keys());
        }

        let repaired = self.registry.repair(known);
        self.install(repaired)
    }

    /// Shows or hides one column and persists the result.
    ///
    /// No-op for unknown keys and for attempts to hide a required column.
    /// Returns the visible set after the change, in registry order.
    pub async fn toggle(&self, key: &str, visible: bool) -> Vec<String> {
        let Some(column) = self.registry.get(key) else {
            warn!(key, "toggle for unknown column ignored");
            return self.current();
        };
        if column.required && !visible {
            debug!(key, "required column cannot be hidden");
            return self.current();
        }

        let mut keys = self.current();
        if visible {
            if !keys.iter().any(|k| k == key) {
                keys.push(key.to_string());
            }
        } else {
            keys.retain(|k| k != key);
        }

        let repaired = self.registry.repair(keys.iter().map(String::as_str));
        let result = self.install(repaired);
        self.save(&result).await;
        result
    }

    /// Restores the fixed default set and persists it.
    pub async fn reset(&self) -> Vec<String> {
        let defaults = self.install(self.registry.default_keys());
        self.save(&defaults).await;
        defaults
    }

    /// Persists a visible set. Failures are logged and swallowed — column
    /// visibility is a convenience, not critical data.
    pub async fn save(&self, set: &[String]) {
        let json = match serde_json::to_string(set) {
            Ok(json) => json,
            Err(err) => {
                warn!("failed to serialize column config: {err}");
                return;
            }
        };
        if let Err(err) = self.store.set(&self.key, &json).await {
            warn!("failed to persist column config: {err}");
        }
    }

    fn install(&self, keys: Vec<String>) -> Vec<String> {
        *self.visible.write().unwrap() = keys.clone();
        keys
    }
}
