use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Response of `/coins/{id}` (with localization, tickers, community and
/// developer data switched off).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDetail {
    pub id: String,
    pub symbol: String,
    pub name: String,

    #[serde(default)]
    pub description: Description,

    #[serde(default)]
    pub image: CoinImage,

    #[serde(default)]
    pub market_cap_rank: Option<u32>,

    #[serde(default)]
    pub market_data: MarketData,

    /// Category tags. CoinGecko occasionally emits `null` entries; they are dropped.
    #[serde(default, deserialize_with = "skip_null_strings")]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Description {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub en: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinImage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub large: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub small: String,
}

/// Amounts keyed by lowercase quote currency ("usd", "eur", ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyAmounts(pub HashMap<String, Option<f64>>);

impl CurrencyAmounts {
    /// Amount in the given quote currency, if the API reported one.
    pub fn get(&self, vs_currency: &str) -> Option<f64> {
        self.0.get(&vs_currency.to_lowercase()).copied().flatten()
    }
}

/// The nested `market_data` block of a coin detail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    #[serde(default)]
    pub current_price: CurrencyAmounts,
    #[serde(default)]
    pub market_cap: CurrencyAmounts,
    #[serde(default)]
    pub total_volume: CurrencyAmounts,
    #[serde(default)]
    pub high_24h: CurrencyAmounts,
    #[serde(default)]
    pub low_24h: CurrencyAmounts,
    #[serde(default)]
    pub ath: CurrencyAmounts,
    #[serde(default)]
    pub atl: CurrencyAmounts,

    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_7d: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_30d: Option<f64>,

    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub max_supply: Option<f64>,
}

fn skip_null_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default().into_iter().flatten().collect())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
