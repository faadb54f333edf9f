//! Tests for recent.rs — the bounded, deduplicated recent-search list.

use padron_search::RecentSearches;
use padron_storage::{KeyValueStore, MemoryStore};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn recents_over(kv: &Arc<MemoryStore>) -> RecentSearches {
    RecentSearches::new("vehiculos", Arc::clone(kv) as Arc<dyn KeyValueStore>)
}

// ── record / list ────────────────────────────────────────────────

#[tokio::test]
async fn records_most_recent_first() {
    let kv = Arc::new(MemoryStore::new());
    let recents = recents_over(&kv);
    recents.record("uno").await;
    recents.record("dos").await;
    assert_eq!(recents.list().await, vec!["dos", "uno"]);
}

#[tokio::test]
async fn repeating_a_term_moves_it_to_the_front() {
    let kv = Arc::new(MemoryStore::new());
    let recents = recents_over(&kv);
    recents.record("uno").await;
    recents.record("dos").await;
    recents.record("uno").await;
    assert_eq!(recents.list().await, vec!["uno", "dos"]);
}

#[tokio::test]
async fn dedup_is_case_insensitive() {
    let kv = Arc::new(MemoryStore::new());
    let recents = recents_over(&kv);
    recents.record("juan").await;
    recents.record("JUAN").await;
    assert_eq!(recents.list().await, vec!["JUAN"]);
}

#[tokio::test]
async fn list_is_capped() {
    let kv = Arc::new(MemoryStore::new());
    let recents =
        RecentSearches::with_limit("vehiculos", Arc::clone(&kv) as Arc<dyn KeyValueStore>, 3);
    for term in ["a", "b", "c", "d"] {
        recents.record(term).await;
    }
    assert_eq!(recents.list().await, vec!["d", "c", "b"]);
}

#[tokio::test]
async fn blank_terms_are_not_recorded() {
    let kv = Arc::new(MemoryStore::new());
    let recents = recents_over(&kv);
    recents.record("   ").await;
    assert!(recents.list().await.is_empty());
}

#[tokio::test]
async fn persists_under_the_feature_key() {
    let kv = Arc::new(MemoryStore::new());
    recents_over(&kv).record("juan").await;
    assert_eq!(
        kv.raw("vehiculos_busquedas_recientes").unwrap(),
        r#"["juan"]"#
    );
}

// ── Degradation ──────────────────────────────────────────────────

#[tokio::test]
async fn garbage_storage_loads_as_empty() {
    let kv = Arc::new(MemoryStore::with_entry(
        "vehiculos_busquedas_recientes",
        "{broken",
    ));
    assert!(recents_over(&kv).list().await.is_empty());
}

#[tokio::test]
async fn save_failure_is_swallowed() {
    let kv = Arc::new(MemoryStore::new());
    let recents = recents_over(&kv);
    kv.fail_writes(true);
    recents.record("juan").await;
    assert!(recents.list().await.is_empty());
}

#[tokio::test]
async fn clear_empties_the_list() {
    let kv = Arc::new(MemoryStore::new());
    let recents = recents_over(&kv);
    recents.record("juan").await;
    recents.clear().await;
    assert!(recents.list().await.is_empty());
}
