use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::coin::Coin;
use crate::models::detail::CoinDetail;
use crate::models::price::PricePoint;

/// Trait abstraction for a market-data source.
///
/// The caching layer and all views only talk to this trait, so tests can
/// swap in a canned provider and a different API only needs one new impl.
/// Implementations never cache and never retry.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// One page of the market listing, ordered by market cap descending.
    async fn get_coins(
        &self,
        vs_currency: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Coin>, CoreError>;

    /// Full detail record for a single coin.
    async fn get_coin(&self, id: &str) -> Result<CoinDetail, CoreError>;

    /// Price history for the last `days` days, oldest first.
    async fn get_market_chart(
        &self,
        id: &str,
        vs_currency: &str,
        days: u32,
    ) -> Result<Vec<PricePoint>, CoreError>;

    /// Names of all coin categories known to the provider.
    async fn get_categories(&self) -> Result<Vec<String>, CoreError>;
}
