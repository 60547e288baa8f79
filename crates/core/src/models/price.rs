use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// A single point of a historical price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Unix timestamp in milliseconds
    pub timestamp: i64,

    pub price: f64,

    /// Short calendar date for axis labels (`M/D/YYYY`, UTC)
    pub date: String,
}

impl PricePoint {
    /// Build a point from a raw `[ms, price]` pair. Returns `None` when the
    /// timestamp is out of chrono's representable range.
    pub fn from_millis(timestamp: i64, price: f64) -> Option<Self> {
        let dt = DateTime::from_timestamp_millis(timestamp)?;
        Some(Self {
            timestamp,
            price,
            date: dt.format("%-m/%-d/%Y").to_string(),
        })
    }
}

/// Raw `/coins/{id}/market_chart` response.
///
/// Each series is an array of `[timestamp_ms, value]` pairs. Only `prices`
/// is used for charts, the other two are kept for completeness.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketChart {
    #[serde(default)]
    pub prices: Vec<(f64, f64)>,
    #[serde(default)]
    pub market_caps: Vec<(f64, f64)>,
    #[serde(default)]
    pub total_volumes: Vec<(f64, f64)>,
}

impl MarketChart {
    /// Convert the `prices` series into chart points, dropping pairs with a
    /// non-finite value or an unrepresentable timestamp.
    pub fn into_price_points(self) -> Vec<PricePoint> {
        self.prices
            .into_iter()
            .filter(|(ts, price)| ts.is_finite() && price.is_finite())
            .filter_map(|(ts, price)| PricePoint::from_millis(ts as i64, price))
            .collect()
    }
}

/// Time window of the detail-page chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChartRange {
    Day,
    #[default]
    Week,
    Month,
    Quarter,
}

impl ChartRange {
    pub const ALL: [ChartRange; 4] = [
        ChartRange::Day,
        ChartRange::Week,
        ChartRange::Month,
        ChartRange::Quarter,
    ];

    /// Value passed as the `days` query parameter.
    pub fn days(self) -> u32 {
        match self {
            ChartRange::Day => 1,
            ChartRange::Week => 7,
            ChartRange::Month => 30,
            ChartRange::Quarter => 90,
        }
    }

    pub fn from_days(days: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.days() == days)
    }
}

impl std::fmt::Display for ChartRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartRange::Day => write!(f, "24H"),
            ChartRange::Week => write!(f, "7D"),
            ChartRange::Month => write!(f, "30D"),
            ChartRange::Quarter => write!(f, "90D"),
        }
    }
}

impl FromStr for ChartRange {
    type Err = CoreError;

    /// Accepts a day count ("7") or a label ("7d", "24h").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let days = match normalized.as_str() {
            "24h" => Some(1),
            other => other.trim_end_matches('d').parse::<u32>().ok(),
        };
        days.and_then(Self::from_days).ok_or_else(|| {
            CoreError::Validation(format!("Unsupported chart range: {s} (expected 1, 7, 30 or 90)"))
        })
    }
}
