//! Filter criteria: the settled values of the filter form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One criterion value, keyed by filter key in [`FilterCriteria`].
///
/// A value can be *empty* — an all-whitespace text, a range with no bounds,
/// a flag switched off — and an empty value constrains nothing, exactly like
/// an absent key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterValue {
    /// Case-insensitive substring match over a text field.
    Text(String),
    /// Exact match over a text or reference field (state picker, company
    /// picker).
    Choice(String),
    /// Inclusive numeric bounds over a number field.
    Range { min: Option<f64>, max: Option<f64> },
    /// Boolean match over a flag field.
    Flag(bool),
}

impl FilterValue {
    /// True when the value constrains nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Text(s) | FilterValue::Choice(s) => s.trim().is_empty(),
            FilterValue::Range { min, max } => min.is_none() && max.is_none(),
            FilterValue::Flag(on) => !on,
        }
    }
}

/// The filter form's settled values: filter key → criterion value.
///
/// Evaluated with logical AND by the composer. Serializable so the owning
/// screen can persist a criteria snapshot between sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterCriteria {
    values: BTreeMap<String, FilterValue>,
}

impl FilterCriteria {
    /// Creates an empty criteria set (no constraints).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one criterion. Setting an empty value clears the key, keeping
    /// the invariant that stored criteria always constrain something.
    pub fn set(&mut self, key: impl Into<String>, value: FilterValue) {
        let key = key.into();
        if value.is_empty() {
            self.values.remove(&key);
        } else {
            self.values.insert(key, value);
        }
    }

    /// Clears one criterion.
    pub fn clear(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// Clears every criterion.
    pub fn clear_all(&mut self) {
        self.values.clear();
    }

    /// Looks up one criterion.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.values.get(key)
    }

    /// True when no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of active criteria.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterates over the active criteria in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}
