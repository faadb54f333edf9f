//! Grouping, ranking and the selected-suggestion payload.

use crate::api::{RawSuggestion, SuggestionKind};
use crate::highlight::{match_spans, MatchSpan};
use padron_types::EntityId;

/// A display-ready suggestion: raw text plus highlight spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub text: String,
    pub entity_id: EntityId,
    /// Byte ranges of `text` to render highlighted; empty when the query
    /// does not occur in the text.
    pub spans: Vec<MatchSpan>,
}

/// A type-tagged bucket of suggestions with its separator label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestGroup {
    pub kind: SuggestionKind,
    pub label: &'static str,
    pub items: Vec<Suggestion>,
}

/// What selecting a suggestion hands back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionPayload {
    pub kind: SuggestionKind,
    pub entity_id: EntityId,
}

/// Buckets raw suggestions by kind in fixed priority order, highlights the
/// query inside each text, and ranks every bucket.
///
/// Empty buckets are omitted, so consecutive groups are exactly the
/// labelled separators the dropdown renders. Within a group, suggestions
/// whose match starts earlier rank first; ties order alphabetically,
/// case-insensitive.
#[must_use]
pub fn group_suggestions(raw: Vec<RawSuggestion>, query: &str) -> Vec<SuggestGroup> {
    let mut groups = Vec::new();
    for kind in SuggestionKind::all() {
        let mut items: Vec<Suggestion> = raw
            .iter()
            .filter(|s| s.kind == kind)
            .map(|s| Suggestion {
                kind: s.kind,
                text: s.text.clone(),
                entity_id: s.entity_id,
                spans: match_spans(&s.text, query),
            })
            .collect();
        if items.is_empty() {
            continue;
        }
        items.sort_by_cached_key(|s| {
            (
                s.spans.first().map_or(usize::MAX, |span| span.start),
                s.text.to_lowercase(),
            )
        });
        groups.push(SuggestGroup {
            kind,
            label: kind.label(),
            items,
        });
    }
    groups
}
