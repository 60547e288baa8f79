// ═══════════════════════════════════════════════════════════════════
// Cache Tests — ResponseCache freshness boundary, keys, pruning
// ═══════════════════════════════════════════════════════════════════

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Arc;

use coin_dashboard_core::models::cache::{CacheKey, CachedResponse, ResponseCache};
use coin_dashboard_core::models::coin::Coin;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
}

fn coins_response(ids: &[&str]) -> CachedResponse {
    CachedResponse::Coins(Arc::new(
        ids.iter().map(|id| Coin::new(*id, *id, *id)).collect(),
    ))
}

fn coin_ids(response: Option<CachedResponse>) -> Vec<String> {
    match response {
        Some(CachedResponse::Coins(coins)) => coins.iter().map(|c| c.id.clone()).collect(),
        other => panic!("expected coins, got {other:?}"),
    }
}

fn listing_key() -> CacheKey {
    CacheKey::Coins {
        page: 1,
        per_page: 100,
    }
}

// ── Freshness ───────────────────────────────────────────────────────

#[test]
fn empty_cache_misses() {
    let cache = ResponseCache::new(Duration::seconds(60));
    assert!(cache.get(&listing_key(), t0()).is_none());
    assert!(cache.is_empty());
}

#[test]
fn fresh_entry_hits() {
    let mut cache = ResponseCache::new(Duration::seconds(60));
    cache.insert(listing_key(), coins_response(&["bitcoin"]), t0());
    assert_eq!(coin_ids(cache.get(&listing_key(), t0())), vec!["bitcoin"]);
    assert_eq!(
        coin_ids(cache.get(&listing_key(), t0() + Duration::seconds(30))),
        vec!["bitcoin"]
    );
}

#[test]
fn entry_just_before_ttl_hits() {
    let mut cache = ResponseCache::new(Duration::seconds(60));
    cache.insert(listing_key(), coins_response(&["bitcoin"]), t0());
    let almost = t0() + Duration::seconds(60) - Duration::milliseconds(1);
    assert!(cache.get(&listing_key(), almost).is_some());
}

#[test]
fn entry_at_exactly_ttl_is_stale() {
    let mut cache = ResponseCache::new(Duration::seconds(60));
    cache.insert(listing_key(), coins_response(&["bitcoin"]), t0());
    assert!(cache.get(&listing_key(), t0() + Duration::seconds(60)).is_none());
}

#[test]
fn stale_entry_is_kept_until_replaced_or_pruned() {
    let mut cache = ResponseCache::new(Duration::seconds(60));
    cache.insert(listing_key(), coins_response(&["bitcoin"]), t0());
    assert!(cache.get(&listing_key(), t0() + Duration::minutes(5)).is_none());
    assert_eq!(cache.len(), 1);
}

#[test]
fn insert_replaces_whole_value_and_timestamp() {
    let mut cache = ResponseCache::new(Duration::seconds(60));
    cache.insert(listing_key(), coins_response(&["bitcoin", "ethereum"]), t0());
    let later = t0() + Duration::seconds(90);
    cache.insert(listing_key(), coins_response(&["solana"]), later);

    assert_eq!(cache.len(), 1);
    assert_eq!(
        coin_ids(cache.get(&listing_key(), later + Duration::seconds(59))),
        vec!["solana"]
    );
}

#[test]
fn ttl_accessor() {
    let cache = ResponseCache::new(Duration::seconds(5));
    assert_eq!(cache.ttl(), Duration::seconds(5));
}

// ── Keys ────────────────────────────────────────────────────────────

#[test]
fn keys_are_distinguished_by_parameters() {
    let mut cache = ResponseCache::new(Duration::seconds(60));
    cache.insert(
        CacheKey::Chart {
            id: "bitcoin".into(),
            days: 7,
        },
        CachedResponse::Chart(Arc::new(vec![])),
        t0(),
    );

    assert!(cache
        .get(
            &CacheKey::Chart {
                id: "bitcoin".into(),
                days: 7
            },
            t0()
        )
        .is_some());
    assert!(cache
        .get(
            &CacheKey::Chart {
                id: "bitcoin".into(),
                days: 30
            },
            t0()
        )
        .is_none());
    assert!(cache
        .get(
            &CacheKey::Chart {
                id: "ethereum".into(),
                days: 7
            },
            t0()
        )
        .is_none());
    assert!(cache
        .get(
            &CacheKey::Coins {
                page: 1,
                per_page: 50
            },
            t0()
        )
        .is_none());
}

#[test]
fn key_display_matches_endpoint_and_params() {
    assert_eq!(listing_key().to_string(), "coins_1_100");
    assert_eq!(
        CacheKey::Detail {
            id: "bitcoin".into()
        }
        .to_string(),
        "coin_bitcoin"
    );
    assert_eq!(
        CacheKey::Chart {
            id: "bitcoin".into(),
            days: 90
        }
        .to_string(),
        "chart_bitcoin_90"
    );
    assert_eq!(CacheKey::Categories.to_string(), "categories");
}

// ── Maintenance ─────────────────────────────────────────────────────

#[test]
fn prune_expired_removes_only_stale_entries() {
    let mut cache = ResponseCache::new(Duration::seconds(60));
    cache.insert(listing_key(), coins_response(&["bitcoin"]), t0());
    cache.insert(
        CacheKey::Categories,
        CachedResponse::Categories(Arc::new(vec!["DeFi".into()])),
        t0() + Duration::seconds(45),
    );

    let removed = cache.prune_expired(t0() + Duration::seconds(70));
    assert_eq!(removed, 1);
    assert_eq!(cache.len(), 1);
    assert!(cache
        .get(&CacheKey::Categories, t0() + Duration::seconds(70))
        .is_some());
}

#[test]
fn prune_on_fresh_cache_removes_nothing() {
    let mut cache = ResponseCache::new(Duration::seconds(60));
    cache.insert(listing_key(), coins_response(&["bitcoin"]), t0());
    assert_eq!(cache.prune_expired(t0()), 0);
    assert_eq!(cache.len(), 1);
}

#[test]
fn clear_empties_cache() {
    let mut cache = ResponseCache::new(Duration::seconds(60));
    cache.insert(listing_key(), coins_response(&["bitcoin"]), t0());
    cache.insert(
        CacheKey::Categories,
        CachedResponse::Categories(Arc::new(vec![])),
        t0(),
    );
    cache.clear();
    assert!(cache.is_empty());
    assert!(cache.get(&listing_key(), t0()).is_none());
}
