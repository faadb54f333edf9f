//! Tests for field.rs — accessors, text matching and display rendering.

use chrono::{TimeZone, Utc};
use padron_types::{EntityId, FieldValue};

// ── Accessors ────────────────────────────────────────────────────

#[test]
fn as_text_only_for_text() {
    assert_eq!(FieldValue::from("ABC-123").as_text(), Some("ABC-123"));
    assert_eq!(FieldValue::from(5.0).as_text(), None);
}

#[test]
fn as_number_only_for_number() {
    assert_eq!(FieldValue::from(2019.0).as_number(), Some(2019.0));
    assert_eq!(FieldValue::from("2019").as_number(), None);
}

#[test]
fn as_flag_only_for_flag() {
    assert_eq!(FieldValue::from(true).as_flag(), Some(true));
    assert_eq!(FieldValue::from("true").as_flag(), None);
}

#[test]
fn as_reference_round_trips_id() {
    let id = EntityId::new();
    assert_eq!(FieldValue::from(id).as_reference(), Some(id));
}

// ── contains_text ────────────────────────────────────────────────

#[test]
fn contains_text_is_case_insensitive() {
    let value = FieldValue::from("Transportes García S.A.");
    assert!(value.contains_text("garcía"));
    assert!(value.contains_text("GARCÍA"));
    assert!(value.contains_text("transportes gar"));
}

#[test]
fn contains_text_rejects_missing_substring() {
    let value = FieldValue::from("ABC-123");
    assert!(!value.contains_text("XYZ"));
}

#[test]
fn contains_text_empty_needle_never_matches() {
    assert!(!FieldValue::from("algo").contains_text(""));
}

#[test]
fn contains_text_false_for_non_text() {
    assert!(!FieldValue::from(123.0).contains_text("123"));
}

// ── display_text ─────────────────────────────────────────────────

#[test]
fn display_renders_whole_numbers_without_fraction() {
    assert_eq!(FieldValue::from(2019.0).display_text(), "2019");
    assert_eq!(FieldValue::from(2.5).display_text(), "2.5");
}

#[test]
fn display_renders_flags_in_spanish() {
    assert_eq!(FieldValue::from(true).display_text(), "Sí");
    assert_eq!(FieldValue::from(false).display_text(), "No");
}

#[test]
fn display_renders_timestamps_day_first() {
    let ts = Utc.with_ymd_and_hms(2026, 3, 15, 13, 45, 0).unwrap();
    assert_eq!(FieldValue::from(ts).display_text(), "15/03/2026 13:45");
}
