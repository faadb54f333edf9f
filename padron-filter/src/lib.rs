//! Composable multi-predicate filtering for the Padrón list engine.
//!
//! The registry screens expose a filter form (text, state picker, year
//! range, boolean toggles). This crate turns the form's settled values into
//! a [`FilterCriteria`] map and derives the visible subset of the cached
//! collection from it:
//!
//! - every non-empty criterion is an independent AND predicate;
//! - one designated boolean criterion ("show only records missing their
//!   resolution") inverts the baseline inclusion rule instead of ANDing —
//!   see [`MissingLinkRule`];
//! - the result is sorted newest-first on [`Entity::last_touched`], records
//!   without a timestamp last, ties in collection order.
//!
//! Derivation is pure and deterministic: same collection snapshot plus same
//! criteria always produce the identical ordered list.
//!
//! [`Entity::last_touched`]: padron_types::Entity::last_touched

mod composer;
mod criteria;

pub use composer::{FilterComposer, MissingLinkRule, STATE_KEY};
pub use criteria::{FilterCriteria, FilterValue};
