use serde::Serialize;
use std::sync::Arc;

use super::coin::Coin;
use super::detail::CoinDetail;
use super::price::{ChartRange, PricePoint};
use super::query::{GalleryFilter, ListQuery};

/// Which page a result (or failure) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    List,
    Gallery,
    Detail,
}

impl ViewKind {
    /// The single message shown to the user when anything behind this view
    /// fails. Failures are not classified further.
    pub fn error_message(self) -> &'static str {
        match self {
            ViewKind::List | ViewKind::Gallery => {
                "Failed to fetch cryptocurrency data. Please try again later."
            }
            ViewKind::Detail => "Failed to fetch coin details. Please try again.",
        }
    }
}

/// Table page: the filtered and sorted rows plus the unfiltered count.
#[derive(Debug, Clone, Serialize)]
pub struct ListView {
    pub query: ListQuery,
    pub coins: Vec<Coin>,
    pub total: usize,
}

impl ListView {
    /// "Showing X of Y coins"
    pub fn summary(&self) -> String {
        format!("Showing {} of {} coins", self.coins.len(), self.total)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GalleryView {
    pub filter: GalleryFilter,
    pub coins: Vec<Coin>,
}

/// Position of a coin in the reference listing, for previous/next links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Neighbors {
    /// Zero-based index in the listing, `None` if the coin is not listed
    pub position: Option<usize>,
    pub previous: Option<String>,
    pub next: Option<String>,
}

impl Neighbors {
    pub fn is_first(&self) -> bool {
        self.position == Some(0)
    }

    pub fn is_last(&self) -> bool {
        self.position.is_some() && self.next.is_none()
    }
}

/// Detail page: coin detail, its chart for the selected range and the
/// neighbouring ids.
#[derive(Debug, Clone, Serialize)]
pub struct DetailView {
    pub detail: Arc<CoinDetail>,
    pub chart: Arc<Vec<PricePoint>>,
    pub range: ChartRange,
    pub neighbors: Neighbors,
}

impl DetailView {
    pub fn id(&self) -> &str {
        &self.detail.id
    }
}
