use crate::models::coin::Coin;
use crate::models::query::{GalleryFilter, SortField, SortOrder};
use crate::services::list_service::compare_coins;

/// Filter-and-sort for the card gallery.
pub struct GalleryService;

impl GalleryService {
    pub fn new() -> Self {
        Self
    }

    /// - `All`: unchanged
    /// - `Gainers`: positive 24h change, biggest first
    /// - `Losers`: negative 24h change, biggest drop first
    /// - `HighVolume`: every coin, highest volume first
    /// - `TopCap`: every coin, highest market cap first
    pub fn apply(&self, coins: &[Coin], filter: GalleryFilter) -> Vec<Coin> {
        let (mut result, sort): (Vec<Coin>, Option<(SortField, SortOrder)>) = match filter {
            GalleryFilter::All => (coins.to_vec(), None),
            GalleryFilter::Gainers => (
                retain_change(coins, |c| c > 0.0),
                Some((SortField::PriceChange24h, SortOrder::Desc)),
            ),
            GalleryFilter::Losers => (
                retain_change(coins, |c| c < 0.0),
                Some((SortField::PriceChange24h, SortOrder::Asc)),
            ),
            GalleryFilter::HighVolume => {
                (coins.to_vec(), Some((SortField::TotalVolume, SortOrder::Desc)))
            }
            GalleryFilter::TopCap => {
                (coins.to_vec(), Some((SortField::MarketCap, SortOrder::Desc)))
            }
        };

        if let Some((field, order)) = sort {
            result.sort_by(|a, b| compare_coins(a, b, field, order));
        }
        result
    }
}

impl Default for GalleryService {
    fn default() -> Self {
        Self::new()
    }
}

fn retain_change(coins: &[Coin], keep: impl Fn(f64) -> bool) -> Vec<Coin> {
    coins
        .iter()
        .filter(|c| c.price_change_percentage_24h.is_some_and(&keep))
        .cloned()
        .collect()
}
