//! Tests for cache.rs — snapshot swaps, coalesced refresh, invalidation
//! and patching.

use padron_cache::fetcher::mock::MockFetcher;
use padron_cache::{EntityCache, FetchError};
use padron_types::{Entity, EntityId, EntityState};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

fn vehicle(plate: &str, state: EntityState) -> Entity {
    Entity::new(EntityId::new(), state).with_field("placa", plate)
}

fn cache_over(fetcher: Arc<MockFetcher>) -> EntityCache {
    EntityCache::new(fetcher)
}

// ── Initial state ────────────────────────────────────────────────

#[tokio::test]
async fn starts_empty_and_stale() {
    let cache = cache_over(Arc::new(MockFetcher::new()));
    let snap = cache.get().await;
    assert!(snap.entities.is_empty());
    assert_eq!(snap.generation, 0);
    assert!(snap.stale);
}

// ── refresh ──────────────────────────────────────────────────────

#[tokio::test]
async fn refresh_installs_snapshot_and_bumps_generation() {
    let fetcher = Arc::new(MockFetcher::returning(vec![
        vehicle("ABC-123", EntityState::Activo),
        vehicle("XYZ-999", EntityState::Suspendido),
    ]));
    let cache = cache_over(fetcher);

    let generation = cache.refresh().await.unwrap();
    assert_eq!(generation, 1);

    let snap = cache.get().await;
    assert_eq!(snap.entities.len(), 2);
    assert_eq!(snap.generation, 1);
    assert!(!snap.stale);
}

#[tokio::test]
async fn failed_refresh_keeps_previous_snapshot() {
    let fetcher = Arc::new(MockFetcher::returning(vec![vehicle(
        "ABC-123",
        EntityState::Activo,
    )]));
    let cache = cache_over(Arc::clone(&fetcher));
    cache.refresh().await.unwrap();

    fetcher.push_response(Err(FetchError::Network("sin conexión".to_string())));
    let err = cache.refresh().await.unwrap_err();
    assert!(err.to_string().contains("sin conexión"));

    let snap = cache.get().await;
    assert_eq!(snap.entities.len(), 1);
    assert_eq!(snap.generation, 1);
}

#[tokio::test]
async fn failed_refresh_on_empty_cache_reports_error() {
    let fetcher = Arc::new(MockFetcher::new());
    fetcher.push_response(Err(FetchError::Backend("500".to_string())));
    let cache = cache_over(fetcher);
    assert!(cache.refresh().await.is_err());
    assert_eq!(cache.get().await.generation, 0);
}

// ── Coalescing ───────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn overlapping_refreshes_share_one_fetch() {
    let fetcher = Arc::new(MockFetcher::returning(vec![vehicle(
        "ABC-123",
        EntityState::Activo,
    )]));
    fetcher.set_delay(Duration::from_millis(100));
    let cache = cache_over(Arc::clone(&fetcher));

    let (a, b) = tokio::join!(cache.refresh(), cache.refresh());
    assert_eq!(a.unwrap(), 1);
    assert_eq!(b.unwrap(), 1);
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn coalesced_callers_share_a_failure() {
    let fetcher = Arc::new(MockFetcher::new());
    fetcher.set_delay(Duration::from_millis(100));
    fetcher.push_response(Err(FetchError::Network("timeout".to_string())));
    let cache = cache_over(Arc::clone(&fetcher));

    let (a, b) = tokio::join!(cache.refresh(), cache.refresh());
    assert!(a.is_err());
    assert!(b.is_err());
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn sequential_refreshes_fetch_separately() {
    let fetcher = Arc::new(MockFetcher::new());
    let cache = cache_over(Arc::clone(&fetcher));
    cache.refresh().await.unwrap();
    cache.refresh().await.unwrap();
    assert_eq!(fetcher.calls(), 2);
    assert_eq!(cache.get().await.generation, 2);
}

// ── invalidate ───────────────────────────────────────────────────

#[tokio::test]
async fn invalidate_marks_stale_without_fetching() {
    let fetcher = Arc::new(MockFetcher::returning(vec![vehicle(
        "ABC-123",
        EntityState::Activo,
    )]));
    let cache = cache_over(Arc::clone(&fetcher));
    cache.refresh().await.unwrap();

    cache.invalidate().await;
    let snap = cache.get().await;
    assert!(snap.stale);
    assert_eq!(snap.generation, 1);
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn refresh_clears_staleness() {
    let cache = cache_over(Arc::new(MockFetcher::new()));
    cache.invalidate().await;
    cache.refresh().await.unwrap();
    assert!(!cache.get().await.stale);
}

// ── Patching ─────────────────────────────────────────────────────

#[tokio::test]
async fn apply_upsert_replaces_existing_record() {
    let original = vehicle("ABC-123", EntityState::Activo);
    let fetcher = Arc::new(MockFetcher::returning(vec![original.clone()]));
    let cache = cache_over(fetcher);
    cache.refresh().await.unwrap();

    let mut updated = original.clone();
    updated.state = EntityState::Suspendido;
    cache.apply_upsert(updated).await;

    let snap = cache.get().await;
    assert_eq!(snap.entities.len(), 1);
    assert_eq!(snap.entities[0].state, EntityState::Suspendido);
    assert_eq!(snap.generation, 2);
}

#[tokio::test]
async fn apply_upsert_inserts_new_record() {
    let cache = cache_over(Arc::new(MockFetcher::new()));
    cache.refresh().await.unwrap();
    cache
        .apply_upsert(vehicle("ABC-123", EntityState::Activo))
        .await;
    let snap = cache.get().await;
    assert_eq!(snap.entities.len(), 1);
    assert_eq!(snap.generation, 2);
}

#[tokio::test]
async fn remove_drops_record_and_bumps_generation() {
    let target = vehicle("ABC-123", EntityState::Activo);
    let fetcher = Arc::new(MockFetcher::returning(vec![
        target.clone(),
        vehicle("XYZ-999", EntityState::Activo),
    ]));
    let cache = cache_over(fetcher);
    cache.refresh().await.unwrap();

    cache.remove(target.id).await;
    let snap = cache.get().await;
    assert_eq!(snap.entities.len(), 1);
    assert_eq!(snap.generation, 2);
}

#[tokio::test]
async fn remove_unknown_id_is_a_no_op() {
    let cache = cache_over(Arc::new(MockFetcher::new()));
    cache.refresh().await.unwrap();
    cache.remove(EntityId::new()).await;
    assert_eq!(cache.get().await.generation, 1);
}

// ── Statistics ───────────────────────────────────────────────────

#[tokio::test]
async fn stats_count_by_state() {
    let fetcher = Arc::new(MockFetcher::returning(vec![
        vehicle("A", EntityState::Activo),
        vehicle("B", EntityState::Activo),
        vehicle("C", EntityState::Suspendido),
    ]));
    let cache = cache_over(fetcher);
    cache.refresh().await.unwrap();

    let stats = cache.stats().await;
    assert_eq!(stats.total(), 3);
    assert_eq!(stats.count(EntityState::Activo), 2);
    assert_eq!(stats.count(EntityState::Suspendido), 1);
    assert_eq!(stats.count(EntityState::Cancelado), 0);
}

#[tokio::test]
async fn stats_follow_patches() {
    let cache = cache_over(Arc::new(MockFetcher::new()));
    cache.refresh().await.unwrap();
    cache
        .apply_upsert(vehicle("A", EntityState::EnTramite))
        .await;
    assert_eq!(cache.stats().await.count(EntityState::EnTramite), 1);
}
