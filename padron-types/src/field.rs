//! Dynamic field values carried by registry records.

use crate::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One searchable/filterable field of a registry record.
///
/// The set of fields is backend-defined and varies per screen (a vehicle
/// carries `placa` and `marca`, a company carries `ruc`, ...), so the engine
/// models them as a tagged value rather than a fixed struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Flag(bool),
    Timestamp(DateTime<Utc>),
    /// Link to another registry record (company, resolution, ...).
    Reference(EntityId),
}

impl FieldValue {
    /// Returns the text content, if this is a text field.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric content, if this is a number field.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean content, if this is a flag field.
    #[must_use]
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the timestamp content, if this is a timestamp field.
    #[must_use]
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Returns the linked record id, if this is a reference field.
    #[must_use]
    pub fn as_reference(&self) -> Option<EntityId> {
        match self {
            FieldValue::Reference(id) => Some(*id),
            _ => None,
        }
    }

    /// Case-insensitive substring match against the text content.
    ///
    /// Non-text fields never match; an empty needle never matches.
    #[must_use]
    pub fn contains_text(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return false;
        }
        match self {
            FieldValue::Text(s) => s.to_lowercase().contains(&needle.to_lowercase()),
            _ => false,
        }
    }

    /// Renders the value the way grid cells and exports display it.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            FieldValue::Flag(true) => "Sí".to_string(),
            FieldValue::Flag(false) => "No".to_string(),
            FieldValue::Timestamp(ts) => ts.format("%d/%m/%Y %H:%M").to_string(),
            FieldValue::Reference(id) => id.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(ts: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(ts)
    }
}

impl From<EntityId> for FieldValue {
    fn from(id: EntityId) -> Self {
        FieldValue::Reference(id)
    }
}
