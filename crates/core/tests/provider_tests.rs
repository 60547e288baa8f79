// ═══════════════════════════════════════════════════════════════════
// Provider Tests — CoinGecko request shape, status mapping, trait use
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use reqwest::StatusCode;

use coin_dashboard_core::errors::CoreError;
use coin_dashboard_core::models::coin::Coin;
use coin_dashboard_core::models::detail::CoinDetail;
use coin_dashboard_core::models::price::PricePoint;
use coin_dashboard_core::models::settings::{Settings, DEFAULT_BASE_URL};
use coin_dashboard_core::providers::coingecko::{status_error, CoinGeckoProvider};
use coin_dashboard_core::providers::traits::MarketDataProvider;

fn param<'a>(query: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
    query
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.as_str())
}

// ═══════════════════════════════════════════════════════════════════
// CoinGeckoProvider
// ═══════════════════════════════════════════════════════════════════

mod coingecko {
    use super::*;

    #[test]
    fn name() {
        assert_eq!(CoinGeckoProvider::new().name(), "CoinGecko");
    }

    #[test]
    fn default_base_url() {
        let provider = CoinGeckoProvider::default();
        assert_eq!(provider.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_from_settings_drops_trailing_slash() {
        let settings = Settings {
            base_url: "https://pro-api.coingecko.com/api/v3/".into(),
            ..Settings::default()
        };
        let provider = CoinGeckoProvider::with_settings(&settings);
        assert_eq!(provider.base_url(), "https://pro-api.coingecko.com/api/v3");
        assert_eq!(
            provider.endpoint("coins/markets"),
            "https://pro-api.coingecko.com/api/v3/coins/markets"
        );
    }

    #[test]
    fn endpoint_accepts_leading_slash() {
        let provider = CoinGeckoProvider::new();
        assert_eq!(
            provider.endpoint("/coins/bitcoin/market_chart"),
            format!("{DEFAULT_BASE_URL}/coins/bitcoin/market_chart")
        );
    }

    #[test]
    fn markets_query_parameters() {
        let query = CoinGeckoProvider::markets_query("USD", 1, 100);
        assert_eq!(param(&query, "vs_currency"), Some("usd"));
        assert_eq!(param(&query, "order"), Some("market_cap_desc"));
        assert_eq!(param(&query, "per_page"), Some("100"));
        assert_eq!(param(&query, "page"), Some("1"));
        assert_eq!(param(&query, "sparkline"), Some("false"));
        assert_eq!(param(&query, "price_change_percentage"), Some("7d"));
        assert_eq!(query.len(), 6);
    }

    #[test]
    fn detail_query_disables_extras() {
        let query = CoinGeckoProvider::detail_query();
        for key in ["localization", "tickers", "community_data", "developer_data"] {
            assert_eq!(param(&query, key), Some("false"), "{key}");
        }
    }

    #[test]
    fn chart_query_parameters() {
        let query = CoinGeckoProvider::chart_query("eur", 30);
        assert_eq!(param(&query, "vs_currency"), Some("eur"));
        assert_eq!(param(&query, "days"), Some("30"));
    }

    #[test]
    fn debug_shows_base_url() {
        let debug = format!("{:?}", CoinGeckoProvider::new());
        assert!(debug.contains("CoinGeckoProvider"));
        assert!(debug.contains(DEFAULT_BASE_URL));
    }
}

// ═══════════════════════════════════════════════════════════════════
// HTTP status mapping
// ═══════════════════════════════════════════════════════════════════

mod status {
    use super::*;

    #[test]
    fn not_found() {
        let err = status_error(StatusCode::NOT_FOUND, "coin nope");
        assert!(matches!(err, CoreError::NotFound(ref s) if s == "coin nope"));
    }

    #[test]
    fn too_many_requests() {
        let err = status_error(StatusCode::TOO_MANY_REQUESTS, "coins page 1");
        assert!(matches!(err, CoreError::RateLimited(_)));
    }

    #[test]
    fn other_statuses_are_api_errors() {
        for status in [
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::SERVICE_UNAVAILABLE,
            StatusCode::UNAUTHORIZED,
        ] {
            match status_error(status, "categories") {
                CoreError::Api { provider, message } => {
                    assert_eq!(provider, "CoinGecko");
                    assert!(message.contains("categories"));
                    assert!(message.contains(status.as_str()));
                }
                other => panic!("unexpected error for {status}: {other:?}"),
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Trait object usage
// ═══════════════════════════════════════════════════════════════════

/// A provider with a fixed listing, used through `dyn MarketDataProvider`.
struct StaticProvider;

#[async_trait]
impl MarketDataProvider for StaticProvider {
    fn name(&self) -> &str {
        "Static"
    }

    async fn get_coins(
        &self,
        _vs_currency: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Coin>, CoreError> {
        if page > 1 {
            return Ok(vec![]);
        }
        Ok((0..per_page.min(3))
            .map(|i| Coin::new(format!("coin-{i}"), format!("c{i}"), format!("Coin {i}")))
            .collect())
    }

    async fn get_coin(&self, id: &str) -> Result<CoinDetail, CoreError> {
        Err(CoreError::NotFound(format!("coin {id}")))
    }

    async fn get_market_chart(
        &self,
        _id: &str,
        _vs_currency: &str,
        _days: u32,
    ) -> Result<Vec<PricePoint>, CoreError> {
        Ok(vec![])
    }

    async fn get_categories(&self) -> Result<Vec<String>, CoreError> {
        Ok(vec!["DeFi".into()])
    }
}

#[tokio::test]
async fn boxed_provider_dispatch() {
    let provider: Box<dyn MarketDataProvider> = Box::new(StaticProvider);
    assert_eq!(provider.name(), "Static");

    let coins = provider.get_coins("usd", 1, 2).await.unwrap();
    assert_eq!(coins.len(), 2);
    assert_eq!(coins[1].id, "coin-1");
    assert!(provider.get_coins("usd", 2, 2).await.unwrap().is_empty());

    assert!(matches!(
        provider.get_coin("bitcoin").await,
        Err(CoreError::NotFound(_))
    ));
    assert!(provider.get_market_chart("bitcoin", "usd", 7).await.unwrap().is_empty());
    assert_eq!(provider.get_categories().await.unwrap(), vec!["DeFi".to_string()]);
}
