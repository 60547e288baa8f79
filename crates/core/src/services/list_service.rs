use std::cmp::Ordering;

use crate::models::coin::Coin;
use crate::models::query::{ListQuery, SortField, SortOrder};

/// Search and sort for the table view.
///
/// All operations are pure: the source slice is never reordered, results are
/// fresh vectors.
pub struct ListService;

impl ListService {
    pub fn new() -> Self {
        Self
    }

    /// Filter by `query.search`, then sort by `query.sort_field` / `query.sort_order`.
    pub fn apply(&self, coins: &[Coin], query: &ListQuery) -> Vec<Coin> {
        let mut result = self.filter(coins, &query.search);
        self.sort(&mut result, query.sort_field, query.sort_order);
        result
    }

    /// Keep coins whose name or symbol contains `search`, ignoring case.
    /// Whitespace is part of the needle. Empty input keeps everything, in
    /// the original order.
    pub fn filter(&self, coins: &[Coin], search: &str) -> Vec<Coin> {
        if search.is_empty() {
            return coins.to_vec();
        }
        let needle = search.to_lowercase();
        coins
            .iter()
            .filter(|c| c.matches_lowercase(&needle))
            .cloned()
            .collect()
    }

    /// Stable in-place sort. Missing values go last in both directions.
    pub fn sort(&self, coins: &mut [Coin], field: SortField, order: SortOrder) {
        coins.sort_by(|a, b| compare_coins(a, b, field, order));
    }
}

impl Default for ListService {
    fn default() -> Self {
        Self::new()
    }
}

/// Comparator shared by the list and gallery views.
pub fn compare_coins(a: &Coin, b: &Coin, field: SortField, order: SortOrder) -> Ordering {
    match field {
        SortField::Name => {
            let ord = a.name.to_lowercase().cmp(&b.name.to_lowercase());
            directed(ord, order)
        }
        SortField::CurrentPrice => compare_optional(a.current_price, b.current_price, order),
        SortField::MarketCap => compare_optional(a.market_cap, b.market_cap, order),
        SortField::PriceChange24h => compare_optional(
            a.price_change_percentage_24h,
            b.price_change_percentage_24h,
            order,
        ),
        SortField::MarketCapRank => compare_optional(
            a.market_cap_rank.map(f64::from),
            b.market_cap_rank.map(f64::from),
            order,
        ),
        SortField::TotalVolume => compare_optional(a.total_volume, b.total_volume, order),
    }
}

/// `None` (and NaN) sort after every real value regardless of `order`.
pub fn compare_optional(a: Option<f64>, b: Option<f64>, order: SortOrder) -> Ordering {
    let a = a.filter(|v| !v.is_nan());
    let b = b.filter(|v| !v.is_nan());
    match (a, b) {
        (Some(x), Some(y)) => directed(x.total_cmp(&y), order),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn directed(ord: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ord,
        SortOrder::Desc => ord.reverse(),
    }
}
