//! The generic registry record held by the list engine.

use crate::{EntityId, EntityState, FieldValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One record of the managed collection (a vehicle, company or resolution).
///
/// The backend owns the record; the engine holds a read-mostly local copy
/// inside the cache snapshot. Beyond the stable id and the lifecycle state,
/// everything lives in the dynamic `fields` map keyed by column key
/// (`placa`, `empresa`, `fecha_modificacion`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub state: EntityState,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl Entity {
    /// Creates a record with no fields.
    #[must_use]
    pub fn new(id: EntityId, state: EntityState) -> Self {
        Self {
            id,
            state,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field insertion, for construction sites and tests.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Looks up a field by column key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Inserts or replaces a field.
    pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// The record's "most recently touched" instant: the maximum of all
    /// timestamp-valued fields, or `None` when the record carries none.
    ///
    /// The filtered list sorts on this, newest first.
    #[must_use]
    pub fn last_touched(&self) -> Option<DateTime<Utc>> {
        self.fields
            .values()
            .filter_map(FieldValue::as_timestamp)
            .max()
    }
}
