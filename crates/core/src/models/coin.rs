use serde::{Deserialize, Serialize};

/// One row of the `/coins/markets` listing.
///
/// Numeric fields are optional because CoinGecko returns `null` for coins
/// that are missing data (new listings, dead projects, uncapped supply).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    /// CoinGecko id, unique within a listing (e.g., "bitcoin")
    pub id: String,

    /// Ticker symbol as returned by the API, lowercase (e.g., "btc")
    pub symbol: String,

    /// Display name (e.g., "Bitcoin")
    pub name: String,

    /// Logo URL
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub current_price: Option<f64>,

    #[serde(default)]
    pub market_cap: Option<f64>,

    #[serde(default)]
    pub market_cap_rank: Option<u32>,

    #[serde(default)]
    pub total_volume: Option<f64>,

    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,

    /// Only present when the listing was requested with `price_change_percentage=7d`.
    #[serde(default)]
    pub price_change_percentage_7d_in_currency: Option<f64>,

    #[serde(default)]
    pub circulating_supply: Option<f64>,

    #[serde(default)]
    pub total_supply: Option<f64>,

    #[serde(default)]
    pub max_supply: Option<f64>,

    #[serde(default)]
    pub ath: Option<f64>,

    #[serde(default)]
    pub atl: Option<f64>,

    #[serde(default)]
    pub high_24h: Option<f64>,

    #[serde(default)]
    pub low_24h: Option<f64>,
}

impl Coin {
    /// Minimal constructor, mostly useful for tests and fixtures.
    /// All market figures start out as `None`.
    pub fn new(id: impl Into<String>, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            name: name.into(),
            image: String::new(),
            current_price: None,
            market_cap: None,
            market_cap_rank: None,
            total_volume: None,
            price_change_percentage_24h: None,
            price_change_percentage_7d_in_currency: None,
            circulating_supply: None,
            total_supply: None,
            max_supply: None,
            ath: None,
            atl: None,
            high_24h: None,
            low_24h: None,
        }
    }

    /// Case-insensitive substring match on name or symbol.
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.symbol.to_lowercase().contains(needle)
    }
}
