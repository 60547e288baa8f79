pub mod display;
pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use std::sync::Arc;

use models::{
    coin::Coin,
    price::ChartRange,
    query::{GalleryFilter, ListQuery},
    settings::Settings,
    view::{DetailView, GalleryView, ListView},
};
use providers::{coingecko::CoinGeckoProvider, traits::MarketDataProvider};
use services::{
    detail_service::DetailService,
    gallery_service::GalleryService,
    list_service::ListService,
    market_service::{Clock, MarketService},
};

use errors::CoreError;

/// Every view works from this single listing page.
pub const LISTING_PAGE: u32 = 1;

/// Main entry point for the Coin Dashboard core library.
/// Holds the settings, the cached market-data client and the view services.
#[must_use]
pub struct CoinDashboard {
    settings: Settings,
    market: MarketService,
    list_service: ListService,
    gallery_service: GalleryService,
    detail_service: DetailService,
}

impl std::fmt::Debug for CoinDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinDashboard")
            .field("settings", &self.settings)
            .field("market", &self.market)
            .finish()
    }
}

impl CoinDashboard {
    /// Dashboard backed by the public CoinGecko API.
    pub fn new(settings: Settings) -> Result<Self, CoreError> {
        let provider = CoinGeckoProvider::with_settings(&settings);
        Self::with_provider(settings, Box::new(provider))
    }

    /// Dashboard backed by any provider (tests, alternative APIs).
    pub fn with_provider(
        settings: Settings,
        provider: Box<dyn MarketDataProvider>,
    ) -> Result<Self, CoreError> {
        settings.validate()?;
        let market = MarketService::new(provider, &settings);
        Ok(Self::build(settings, market))
    }

    /// Replace the clock used for cache freshness.
    pub fn with_clock(self, clock: Clock) -> Self {
        let Self {
            settings,
            market,
            ..
        } = self;
        Self::build(settings, market.with_clock(clock))
    }

    fn build(settings: Settings, market: MarketService) -> Self {
        Self {
            settings,
            market,
            list_service: ListService::new(),
            gallery_service: GalleryService::new(),
            detail_service: DetailService::new(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn market(&self) -> &MarketService {
        &self.market
    }

    // ── Views ───────────────────────────────────────────────────────

    /// The full listing page every view is derived from.
    pub async fn coins(&self) -> Result<Arc<Vec<Coin>>, CoreError> {
        self.market
            .get_coins(LISTING_PAGE, self.settings.per_page)
            .await
    }

    /// Table view: listing filtered by `query.search` and sorted.
    pub async fn list_view(&self, query: &ListQuery) -> Result<ListView, CoreError> {
        let coins = self.coins().await?;
        Ok(ListView {
            query: query.clone(),
            coins: self.list_service.apply(&coins, query),
            total: coins.len(),
        })
    }

    /// Gallery view: listing narrowed/reordered by one of the fixed filters.
    pub async fn gallery_view(&self, filter: GalleryFilter) -> Result<GalleryView, CoreError> {
        let coins = self.coins().await?;
        Ok(GalleryView {
            filter,
            coins: self.gallery_service.apply(&coins, filter),
        })
    }

    /// Detail view: coin detail and chart fetched together, plus navigation.
    pub async fn detail_view(&self, id: &str, range: ChartRange) -> Result<DetailView, CoreError> {
        self.detail_service
            .assemble(&self.market, id, range, self.settings.per_page)
            .await
    }

    /// Switch the chart of an open detail view to another range. Only the
    /// chart is re-fetched.
    pub async fn change_chart_range(
        &self,
        view: &mut DetailView,
        range: ChartRange,
    ) -> Result<(), CoreError> {
        self.detail_service
            .change_range(&self.market, view, range)
            .await
    }

    /// Category names, with a fixed fallback when the API is unavailable.
    pub async fn categories(&self) -> Arc<Vec<String>> {
        self.market.get_categories().await
    }

    // ── Cache ───────────────────────────────────────────────────────

    /// Number of cached API responses.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.market.cache_len()
    }

    /// Drop stale cache entries. Returns the number removed.
    pub fn cache_prune_expired(&self) -> usize {
        self.market.prune_expired()
    }

    /// Drop every cached response; the next request of each kind hits the API.
    pub fn cache_clear(&self) {
        self.market.clear_cache();
    }
}
