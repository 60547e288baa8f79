use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// Column the list view can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    CurrentPrice,
    MarketCap,
    #[serde(rename = "price_change_percentage_24h")]
    PriceChange24h,
    MarketCapRank,
    TotalVolume,
}

impl SortField {
    /// The API field name this column sorts on.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::CurrentPrice => "current_price",
            SortField::MarketCap => "market_cap",
            SortField::PriceChange24h => "price_change_percentage_24h",
            SortField::MarketCapRank => "market_cap_rank",
            SortField::TotalVolume => "total_volume",
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = CoreError;

    /// Accepts the API field name or a short alias ("price", "cap", "change", "rank", "volume").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "name" => Ok(SortField::Name),
            "current_price" | "price" => Ok(SortField::CurrentPrice),
            "market_cap" | "cap" => Ok(SortField::MarketCap),
            "price_change_percentage_24h" | "change" | "change_24h" => {
                Ok(SortField::PriceChange24h)
            }
            "market_cap_rank" | "rank" => Ok(SortField::MarketCapRank),
            "total_volume" | "volume" => Ok(SortField::TotalVolume),
            _ => Err(CoreError::Validation(format!("Unknown sort field: {s}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            _ => Err(CoreError::Validation(format!("Unknown sort order: {s}"))),
        }
    }
}

/// Search text plus sort column/direction for the list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    pub search: String,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl Default for ListQuery {
    /// Unfiltered, largest market cap first.
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_field: SortField::MarketCap,
            sort_order: SortOrder::Desc,
        }
    }
}

impl ListQuery {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn sorted_by(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_field = field;
        self.sort_order = order;
        self
    }

    /// Column-header click: the active column flips direction, a new column
    /// starts out descending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_order = self.sort_order.reversed();
        } else {
            self.sort_field = field;
            self.sort_order = SortOrder::Desc;
        }
    }

    /// Indicator for a column header: `⇅` when inactive, else the arrow of
    /// the current direction.
    pub fn sort_indicator(&self, field: SortField) -> &'static str {
        if self.sort_field != field {
            return "⇅";
        }
        match self.sort_order {
            SortOrder::Asc => "↑",
            SortOrder::Desc => "↓",
        }
    }
}

/// The fixed gallery filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GalleryFilter {
    #[default]
    All,
    Gainers,
    Losers,
    HighVolume,
    TopCap,
}

impl GalleryFilter {
    pub const ALL: [GalleryFilter; 5] = [
        GalleryFilter::All,
        GalleryFilter::Gainers,
        GalleryFilter::Losers,
        GalleryFilter::HighVolume,
        GalleryFilter::TopCap,
    ];

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            GalleryFilter::All => "All Coins",
            GalleryFilter::Gainers => "Top Gainers",
            GalleryFilter::Losers => "Top Losers",
            GalleryFilter::HighVolume => "High Volume",
            GalleryFilter::TopCap => "Top Market Cap",
        }
    }
}

impl std::fmt::Display for GalleryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GalleryFilter::All => write!(f, "all"),
            GalleryFilter::Gainers => write!(f, "gainers"),
            GalleryFilter::Losers => write!(f, "losers"),
            GalleryFilter::HighVolume => write!(f, "high-volume"),
            GalleryFilter::TopCap => write!(f, "top-cap"),
        }
    }
}

impl FromStr for GalleryFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "all" | "none" => Ok(GalleryFilter::All),
            "gainers" => Ok(GalleryFilter::Gainers),
            "losers" => Ok(GalleryFilter::Losers),
            "high-volume" | "volume" => Ok(GalleryFilter::HighVolume),
            "top-cap" | "cap" => Ok(GalleryFilter::TopCap),
            _ => Err(CoreError::Validation(format!("Unknown gallery filter: {s}"))),
        }
    }
}
