use chrono::{DateTime, Utc};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::cache::{CacheKey, CachedResponse, ResponseCache};
use crate::models::coin::Coin;
use crate::models::detail::CoinDetail;
use crate::models::price::PricePoint;
use crate::models::settings::Settings;
use crate::providers::traits::MarketDataProvider;

/// Source of "now" for cache freshness checks.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Categories returned when the categories endpoint is unavailable.
pub const FALLBACK_CATEGORIES: [&str; 5] = ["DeFi", "NFT", "Meme", "Exchange", "Stablecoin"];

/// Read-through cached access to a `MarketDataProvider`.
///
/// Cache strategy:
/// - Every endpoint+parameter combination has its own `CacheKey`.
/// - A hit younger than the TTL is returned without touching the network.
/// - A miss (or stale hit) calls the provider; only a successful, complete
///   response is stored. Errors propagate unchanged and are never cached.
/// - No retries and no request de-duplication: two concurrent misses for
///   the same key both reach the provider.
pub struct MarketService {
    provider: Box<dyn MarketDataProvider>,
    cache: Mutex<ResponseCache>,
    vs_currency: String,
    clock: Clock,
}

impl MarketService {
    pub fn new(provider: Box<dyn MarketDataProvider>, settings: &Settings) -> Self {
        Self {
            provider,
            cache: Mutex::new(ResponseCache::new(settings.cache_ttl())),
            vs_currency: settings.vs_currency.to_lowercase(),
            clock: Arc::new(Utc::now),
        }
    }

    /// Replace the clock used for freshness checks.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn vs_currency(&self) -> &str {
        &self.vs_currency
    }

    /// One page of the market listing.
    pub async fn get_coins(&self, page: u32, per_page: u32) -> Result<Arc<Vec<Coin>>, CoreError> {
        let key = CacheKey::Coins { page, per_page };
        self.read_through(
            key,
            |cached| match cached {
                CachedResponse::Coins(coins) => Some(coins),
                _ => None,
            },
            CachedResponse::Coins,
            async {
                self.provider
                    .get_coins(&self.vs_currency, page, per_page)
                    .await
                    .map(Arc::new)
            },
        )
        .await
    }

    /// Detail record of one coin.
    pub async fn get_coin(&self, id: &str) -> Result<Arc<CoinDetail>, CoreError> {
        let id = validate_id(id)?;
        let key = CacheKey::Detail { id: id.to_string() };
        self.read_through(
            key,
            |cached| match cached {
                CachedResponse::Detail(detail) => Some(detail),
                _ => None,
            },
            CachedResponse::Detail,
            async { self.provider.get_coin(id).await.map(Arc::new) },
        )
        .await
    }

    /// Price history of one coin over the last `days` days.
    pub async fn get_market_chart(
        &self,
        id: &str,
        days: u32,
    ) -> Result<Arc<Vec<PricePoint>>, CoreError> {
        let id = validate_id(id)?;
        if days == 0 {
            return Err(CoreError::Validation("Chart range must be at least one day".into()));
        }
        let key = CacheKey::Chart {
            id: id.to_string(),
            days,
        };
        self.read_through(
            key,
            |cached| match cached {
                CachedResponse::Chart(points) => Some(points),
                _ => None,
            },
            CachedResponse::Chart,
            async {
                self.provider
                    .get_market_chart(id, &self.vs_currency, days)
                    .await
                    .map(Arc::new)
            },
        )
        .await
    }

    /// Category names. Never fails: when the endpoint is unavailable a fixed
    /// fallback list is returned (and not cached).
    pub async fn get_categories(&self) -> Arc<Vec<String>> {
        let result = self
            .read_through(
                CacheKey::Categories,
                |cached| match cached {
                    CachedResponse::Categories(names) => Some(names),
                    _ => None,
                },
                CachedResponse::Categories,
                async { self.provider.get_categories().await.map(Arc::new) },
            )
            .await;

        match result {
            Ok(names) => names,
            Err(e) => {
                warn!("Error fetching categories, using fallback list: {e}");
                Arc::new(FALLBACK_CATEGORIES.iter().map(|c| c.to_string()).collect())
            }
        }
    }

    // ── Cache management ────────────────────────────────────────────

    /// Number of cached responses (fresh or stale).
    pub fn cache_len(&self) -> usize {
        self.lock_cache().len()
    }

    /// Remove every stale entry. Returns the number removed.
    pub fn prune_expired(&self) -> usize {
        let now = (self.clock)();
        self.lock_cache().prune_expired(now)
    }

    pub fn clear_cache(&self) {
        self.lock_cache().clear();
    }

    /// Internal: serve `key` from the cache if fresh, otherwise run `fetch`
    /// and store its result. The lock is released before `fetch` is awaited.
    async fn read_through<T, Fut>(
        &self,
        key: CacheKey,
        extract: impl FnOnce(CachedResponse) -> Option<T>,
        wrap: impl FnOnce(T) -> CachedResponse,
        fetch: Fut,
    ) -> Result<T, CoreError>
    where
        T: Clone,
        Fut: Future<Output = Result<T, CoreError>>,
    {
        let cached = {
            let now = (self.clock)();
            self.lock_cache().get(&key, now)
        };
        if let Some(value) = cached.and_then(extract) {
            debug!(key = %key, "cache hit");
            return Ok(value);
        }

        debug!(key = %key, provider = self.provider.name(), "cache miss");
        let value = fetch.await?;

        let now = (self.clock)();
        self.lock_cache().insert(key, wrap(value.clone()), now);
        Ok(value)
    }

    fn lock_cache(&self) -> MutexGuard<'_, ResponseCache> {
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl std::fmt::Debug for MarketService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketService")
            .field("provider", &self.provider.name())
            .field("vs_currency", &self.vs_currency)
            .field("cached_responses", &self.cache_len())
            .finish()
    }
}

fn validate_id(id: &str) -> Result<&str, CoreError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Coin id must not be empty".into()));
    }
    // the id is a single URL path segment
    if trimmed.contains(&['/', '?', '#'][..]) {
        return Err(CoreError::Validation(format!("Invalid coin id: {trimmed}")));
    }
    Ok(trimmed)
}
