//! Tests for suggest.rs — grouping order, separators and in-group ranking.

use padron_search::{group_suggestions, RawSuggestion, SuggestionKind};
use padron_types::EntityId;
use pretty_assertions::assert_eq;

fn raw(kind: SuggestionKind, text: &str) -> RawSuggestion {
    RawSuggestion::new(kind, text, EntityId::new())
}

// ── Grouping ─────────────────────────────────────────────────────

#[test]
fn groups_follow_fixed_priority_order() {
    let groups = group_suggestions(
        vec![
            raw(SuggestionKind::Resolution, "RES-2026-001"),
            raw(SuggestionKind::Vehicle, "ABC-123"),
            raw(SuggestionKind::Company, "Transportes SA"),
        ],
        "x",
    );
    let kinds: Vec<SuggestionKind> = groups.iter().map(|g| g.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SuggestionKind::Vehicle,
            SuggestionKind::Company,
            SuggestionKind::Resolution
        ]
    );
}

#[test]
fn empty_groups_are_omitted() {
    let groups = group_suggestions(vec![raw(SuggestionKind::Company, "Transportes SA")], "x");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].kind, SuggestionKind::Company);
}

#[test]
fn groups_carry_their_separator_labels() {
    let groups = group_suggestions(
        vec![
            raw(SuggestionKind::Vehicle, "ABC-123"),
            raw(SuggestionKind::Company, "Transportes SA"),
        ],
        "x",
    );
    assert_eq!(groups[0].label, "Vehículos");
    assert_eq!(groups[1].label, "Empresas");
}

#[test]
fn no_suggestions_yield_no_groups() {
    assert!(group_suggestions(vec![], "x").is_empty());
}

// ── Highlighting ─────────────────────────────────────────────────

#[test]
fn primary_and_related_matches_are_both_marked() {
    let groups = group_suggestions(
        vec![
            raw(SuggestionKind::Vehicle, "Juan Pérez"),
            raw(SuggestionKind::Company, "Juanita S.A."),
        ],
        "Juan",
    );
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].kind, SuggestionKind::Vehicle);
    let vehicle = &groups[0].items[0];
    assert_eq!(&vehicle.text[vehicle.spans[0].start..vehicle.spans[0].end], "Juan");
    let company = &groups[1].items[0];
    assert_eq!(&company.text[company.spans[0].start..company.spans[0].end], "Juan");
}

#[test]
fn unmatched_suggestions_survive_unmarked() {
    let groups = group_suggestions(vec![raw(SuggestionKind::Vehicle, "XYZ-999")], "Juan");
    assert_eq!(groups[0].items.len(), 1);
    assert!(groups[0].items[0].spans.is_empty());
}

// ── Ranking ──────────────────────────────────────────────────────

#[test]
fn earlier_matches_rank_first() {
    let groups = group_suggestions(
        vec![
            raw(SuggestionKind::Vehicle, "Camión Juan"),
            raw(SuggestionKind::Vehicle, "Juan Pérez"),
        ],
        "Juan",
    );
    let texts: Vec<&str> = groups[0].items.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["Juan Pérez", "Camión Juan"]);
}

#[test]
fn equal_match_positions_rank_alphabetically() {
    let groups = group_suggestions(
        vec![
            raw(SuggestionKind::Vehicle, "Juan Zapata"),
            raw(SuggestionKind::Vehicle, "Juan Alvarez"),
        ],
        "Juan",
    );
    let texts: Vec<&str> = groups[0].items.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["Juan Alvarez", "Juan Zapata"]);
}

#[test]
fn unmatched_rank_after_matched() {
    let groups = group_suggestions(
        vec![
            raw(SuggestionKind::Vehicle, "AAA sin coincidencia"),
            raw(SuggestionKind::Vehicle, "Juan Pérez"),
        ],
        "Juan",
    );
    let texts: Vec<&str> = groups[0].items.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["Juan Pérez", "AAA sin coincidencia"]);
}
