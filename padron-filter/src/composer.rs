//! Derives the visible subset of the cached collection from the criteria.

use crate::criteria::{FilterCriteria, FilterValue};
use padron_types::{Entity, FieldValue};
use std::cmp::Ordering;
use tracing::debug;

/// Criterion key matched against [`Entity::state`] instead of the dynamic
/// fields.
pub const STATE_KEY: &str = "estado";

/// The designated exceptional boolean criterion.
///
/// When its flag is on, the baseline inclusion rule inverts: instead of
/// "every record, minus what the predicates reject", the derivation starts
/// from "only records missing the named relationship field" (the registry's
/// show-only-incomplete toggle). The remaining criteria still AND on top.
///
/// This does not generalize: every other boolean criterion is a plain
/// field predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingLinkRule {
    /// Criterion key that activates the rule.
    pub criterion_key: String,
    /// Relationship field whose absence the rule selects for.
    pub field_key: String,
}

impl Default for MissingLinkRule {
    fn default() -> Self {
        Self {
            criterion_key: "sin_resolucion".to_string(),
            field_key: "resolucion".to_string(),
        }
    }
}

/// Combines the active criteria into a single derived view of the cached
/// collection.
#[derive(Debug, Clone, Default)]
pub struct FilterComposer {
    criteria: FilterCriteria,
    rule: MissingLinkRule,
}

impl FilterComposer {
    /// Creates a composer with no active criteria and the default
    /// missing-resolution rule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a composer with a custom exceptional rule, for screens whose
    /// incomplete-record toggle watches a different relationship.
    #[must_use]
    pub fn with_rule(rule: MissingLinkRule) -> Self {
        Self {
            criteria: FilterCriteria::new(),
            rule,
        }
    }

    /// Sets one criterion. Pure state mutation, no I/O.
    pub fn set_criterion(&mut self, key: impl Into<String>, value: FilterValue) {
        self.criteria.set(key, value);
    }

    /// Clears one criterion.
    pub fn clear_criterion(&mut self, key: &str) {
        self.criteria.clear(key);
    }

    /// Clears every criterion.
    pub fn clear_all(&mut self) {
        self.criteria.clear_all();
    }

    /// Replaces the whole criteria set (restoring a persisted snapshot).
    pub fn restore(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// The active criteria.
    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Applies every active criterion over the collection and returns the
    /// matching records, newest-touched first.
    ///
    /// Deterministic: the same collection and criteria always yield the
    /// identical ordered list; records with equal timestamps keep their
    /// relative collection order.
    #[must_use]
    pub fn derive(&self, entities: &[Entity]) -> Vec<Entity> {
        let missing_only = matches!(
            self.criteria.get(&self.rule.criterion_key),
            Some(FilterValue::Flag(true))
        );

        let mut out: Vec<Entity> = entities
            .iter()
            .filter(|entity| self.matches(entity, missing_only))
            .cloned()
            .collect();

        // Stable sort: ties keep collection order.
        out.sort_by(|a, b| match (a.last_touched(), b.last_touched()) {
            (Some(a_ts), Some(b_ts)) => b_ts.cmp(&a_ts),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        debug!(
            input = entities.len(),
            output = out.len(),
            criteria = self.criteria.len(),
            "derived filtered view"
        );
        out
    }

    fn matches(&self, entity: &Entity, missing_only: bool) -> bool {
        if missing_only && entity.field(&self.rule.field_key).is_some() {
            return false;
        }
        // Short-circuits on the first failing predicate. Empty values can
        // reach here through a restored snapshot; they constrain nothing.
        self.criteria.iter().all(|(key, value)| {
            key == self.rule.criterion_key
                || value.is_empty()
                || Self::predicate(entity, key, value)
        })
    }

    fn predicate(entity: &Entity, key: &str, value: &FilterValue) -> bool {
        if key == STATE_KEY {
            return match value {
                FilterValue::Choice(want) | FilterValue::Text(want) => {
                    entity.state.as_str().eq_ignore_ascii_case(want.trim())
                }
                _ => false,
            };
        }

        let Some(field) = entity.field(key) else {
            return false;
        };

        match value {
            FilterValue::Text(needle) => field.contains_text(needle.trim()),
            FilterValue::Choice(want) => match field {
                FieldValue::Text(text) => {
                    text.to_lowercase() == want.trim().to_lowercase()
                }
                FieldValue::Reference(id) => id.to_string() == want.trim(),
                _ => false,
            },
            FilterValue::Range { min, max } => field.as_number().is_some_and(|n| {
                min.is_none_or(|lo| n >= lo) && max.is_none_or(|hi| n <= hi)
            }),
            FilterValue::Flag(want) => field.as_flag() == Some(*want),
        }
    }
}
