use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::coin::Coin;
use crate::models::price::ChartRange;
use crate::models::view::{DetailView, Neighbors};
use crate::services::market_service::MarketService;

/// Assembles the detail page: coin detail + chart, fetched in parallel, plus
/// previous/next navigation derived from the reference listing.
pub struct DetailService;

impl DetailService {
    pub fn new() -> Self {
        Self
    }

    /// Fetch detail and chart concurrently, together with the reference
    /// listing (page 1 of `per_page`). Detail and chart must both succeed,
    /// a detail error is reported before a chart error. A listing failure
    /// only disables navigation.
    pub async fn assemble(
        &self,
        market: &MarketService,
        id: &str,
        range: ChartRange,
        per_page: u32,
    ) -> Result<DetailView, CoreError> {
        let (detail, chart, listing) = tokio::join!(
            market.get_coin(id),
            market.get_market_chart(id, range.days()),
            market.get_coins(crate::LISTING_PAGE, per_page)
        );
        let detail = detail?;
        let chart = chart?;

        let neighbors = match listing {
            Ok(coins) => self.neighbors(&coins, &detail.id),
            Err(e) => {
                warn!("Error fetching listing for navigation: {e}");
                Neighbors::default()
            }
        };

        debug!(
            id = %detail.id,
            points = chart.len(),
            range = %range,
            "assembled detail view"
        );

        Ok(DetailView {
            detail,
            chart,
            range,
            neighbors,
        })
    }

    /// Re-fetch only the chart for a new range. The view is left untouched
    /// if the fetch fails.
    pub async fn change_range(
        &self,
        market: &MarketService,
        view: &mut DetailView,
        range: ChartRange,
    ) -> Result<(), CoreError> {
        let chart = market.get_market_chart(view.id(), range.days()).await?;
        view.chart = chart;
        view.range = range;
        Ok(())
    }

    /// Linear scan of `listing` for `id`.
    pub fn neighbors(&self, listing: &[Coin], id: &str) -> Neighbors {
        let Some(position) = listing.iter().position(|c| c.id == id) else {
            return Neighbors::default();
        };
        Neighbors {
            position: Some(position),
            previous: position
                .checked_sub(1)
                .map(|i| listing[i].id.clone()),
            next: listing.get(position + 1).map(|c| c.id.clone()),
        }
    }
}

impl Default for DetailService {
    fn default() -> Self {
        Self::new()
    }
}
