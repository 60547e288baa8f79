use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use tracing::{debug, error};

use crate::errors::{redact_query, CoreError};
use crate::models::coin::Coin;
use crate::models::detail::CoinDetail;
use crate::models::price::{MarketChart, PricePoint};
use crate::models::settings::Settings;
use super::traits::MarketDataProvider;

const PROVIDER_NAME: &str = "CoinGecko";

/// CoinGecko v3 public API provider.
///
/// - **Free**: No API key required, but the public tier is rate limited
///   (HTTP 429), which is why every response goes through the cache.
/// - **Endpoints**: `/coins/markets`, `/coins/{id}`,
///   `/coins/{id}/market_chart`, `/coins/categories/list`
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    pub fn with_settings(settings: &Settings) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(settings.request_timeout_secs));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: settings.api_root().to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Query parameters of the listing request.
    pub fn markets_query(vs_currency: &str, page: u32, per_page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("vs_currency", vs_currency.to_lowercase()),
            ("order", "market_cap_desc".to_string()),
            ("per_page", per_page.to_string()),
            ("page", page.to_string()),
            ("sparkline", "false".to_string()),
            ("price_change_percentage", "7d".to_string()),
        ]
    }

    /// Query parameters of the detail request: everything except market data
    /// and the description is switched off.
    pub fn detail_query() -> Vec<(&'static str, String)> {
        vec![
            ("localization", "false".to_string()),
            ("tickers", "false".to_string()),
            ("community_data", "false".to_string()),
            ("developer_data", "false".to_string()),
        ]
    }

    pub fn chart_query(vs_currency: &str, days: u32) -> Vec<(&'static str, String)> {
        vec![
            ("vs_currency", vs_currency.to_lowercase()),
            ("days", days.to_string()),
        ]
    }

    /// Absolute URL for an API path such as `coins/markets`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` with `query`, map the HTTP status to a `CoreError` and
    /// decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        subject: &str,
    ) -> Result<T, CoreError> {
        let url = self.endpoint(path);
        debug!(url = %url, "requesting {subject}");

        let resp = self.client.get(&url).query(query).send().await.map_err(|e| {
            let err = CoreError::from(e);
            error!("Error fetching {subject}: {err}");
            err
        })?;

        let status = resp.status();
        if !status.is_success() {
            let err = status_error(status, subject);
            error!("Error fetching {subject}: {err}");
            return Err(err);
        }

        resp.json::<T>().await.map_err(|e| CoreError::Api {
            provider: PROVIDER_NAME.into(),
            message: format!(
                "Failed to parse response for {subject}: {}",
                redact_query(&e.to_string())
            ),
        })
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CoinGeckoProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinGeckoProvider")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Translate a non-success status into the matching error variant.
pub fn status_error(status: StatusCode, subject: &str) -> CoreError {
    match status {
        StatusCode::NOT_FOUND => CoreError::NotFound(subject.to_string()),
        StatusCode::TOO_MANY_REQUESTS => CoreError::RateLimited(PROVIDER_NAME.to_string()),
        other => CoreError::Api {
            provider: PROVIDER_NAME.into(),
            message: format!("Request for {subject} failed with status {other}"),
        },
    }
}

// ── CoinGecko API response types ────────────────────────────────────

#[derive(Deserialize)]
struct CategoryEntry {
    name: String,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MarketDataProvider for CoinGeckoProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn get_coins(
        &self,
        vs_currency: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Coin>, CoreError> {
        let query = Self::markets_query(vs_currency, page, per_page);
        self.get_json("coins/markets", &query, &format!("coins page {page}"))
            .await
    }

    async fn get_coin(&self, id: &str) -> Result<CoinDetail, CoreError> {
        let query = Self::detail_query();
        self.get_json(&format!("coins/{id}"), &query, &format!("coin {id}"))
            .await
    }

    async fn get_market_chart(
        &self,
        id: &str,
        vs_currency: &str,
        days: u32,
    ) -> Result<Vec<PricePoint>, CoreError> {
        let query = Self::chart_query(vs_currency, days);
        let chart: MarketChart = self
            .get_json(
                &format!("coins/{id}/market_chart"),
                &query,
                &format!("chart for {id} ({days}d)"),
            )
            .await?;
        Ok(chart.into_price_points())
    }

    async fn get_categories(&self) -> Result<Vec<String>, CoreError> {
        let entries: Vec<CategoryEntry> = self
            .get_json("coins/categories/list", &[], "categories")
            .await?;
        Ok(entries.into_iter().map(|c| c.name).collect())
    }
}
