use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;

use super::coin::Coin;
use super::detail::CoinDetail;
use super::price::PricePoint;

/// Identifies one cached API response: the endpoint plus its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// `/coins/markets` page
    Coins { page: u32, per_page: u32 },
    /// `/coins/{id}`
    Detail { id: String },
    /// `/coins/{id}/market_chart` for a number of days
    Chart { id: String, days: u32 },
    /// `/coins/categories/list`
    Categories,
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheKey::Coins { page, per_page } => write!(f, "coins_{page}_{per_page}"),
            CacheKey::Detail { id } => write!(f, "coin_{id}"),
            CacheKey::Chart { id, days } => write!(f, "chart_{id}_{days}"),
            CacheKey::Categories => write!(f, "categories"),
        }
    }
}

/// A complete, immutable API response. Values are shared via `Arc` so a
/// cache hit never copies the payload.
#[derive(Debug, Clone)]
pub enum CachedResponse {
    Coins(Arc<Vec<Coin>>),
    Detail(Arc<CoinDetail>),
    Chart(Arc<Vec<PricePoint>>),
    Categories(Arc<Vec<String>>),
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: CachedResponse,
    stored_at: DateTime<Utc>,
}

/// In-memory, time-boxed response cache.
///
/// An entry stored at `t` is served while `now - t < ttl`; at exactly `ttl`
/// it is stale. Entries are only ever replaced whole, never patched.
/// The current time is always passed in by the caller.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    entries: HashMap<CacheKey, CacheEntry>,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached response for `key` if it is still fresh at `now`.
    pub fn get(&self, key: &CacheKey, now: DateTime<Utc>) -> Option<CachedResponse> {
        let entry = self.entries.get(key)?;
        if now - entry.stored_at < self.ttl {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    /// Store (or replace) the response for `key`, stamped with `now`.
    pub fn insert(&mut self, key: CacheKey, value: CachedResponse, now: DateTime<Utc>) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: now,
            },
        );
    }

    /// Drop every entry that is stale at `now`. Returns how many were removed.
    pub fn prune_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|_, entry| now - entry.stored_at < ttl);
        before - self.entries.len()
    }

    /// Number of stored entries, fresh or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
