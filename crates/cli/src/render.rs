use coin_dashboard_core::display::{
    description_summary, format_large_usd, format_max_supply, format_percent, format_price,
    format_supply, top_categories, DEFAULT_CATEGORY_LIMIT, DEFAULT_SUMMARY_SENTENCES,
    NOT_AVAILABLE,
};
use coin_dashboard_core::models::price::PricePoint;
use coin_dashboard_core::models::query::{GalleryFilter, SortField};
use coin_dashboard_core::models::view::{DetailView, GalleryView, ListView};

const SORTABLE: [(SortField, &str); 4] = [
    (SortField::Name, "Name"),
    (SortField::CurrentPrice, "Price"),
    (SortField::MarketCap, "Market Cap"),
    (SortField::PriceChange24h, "24h Change"),
];

pub fn list(view: &ListView) -> String {
    let mut out = String::new();
    out.push_str("Cryptocurrency Markets\n");

    let headers: Vec<String> = SORTABLE
        .iter()
        .map(|(field, label)| format!("{label} {}", view.query.sort_indicator(*field)))
        .collect();
    out.push_str(&format!("Sort: {}\n", headers.join("  ")));
    out.push_str(&format!("{}\n\n", view.summary()));

    out.push_str(&format!(
        "{:>4}  {:<24} {:>16} {:>10} {:>20} {:>18}\n",
        "#", "Coin", "Price", "24h", "Market Cap", "Volume"
    ));
    for coin in &view.coins {
        let rank = coin
            .market_cap_rank
            .map(|r| r.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let label = format!("{} ({})", coin.name, coin.symbol.to_uppercase());
        out.push_str(&format!(
            "{:>4}  {:<24} {:>16} {:>10} {:>20} {:>18}\n",
            rank,
            truncate(&label, 24),
            format_price(coin.current_price),
            format_percent(coin.price_change_percentage_24h),
            format_large_usd(coin.market_cap),
            format_large_usd(coin.total_volume),
        ));
    }

    if view.coins.is_empty() && !view.query.search.is_empty() {
        out.push_str(&format!(
            "No cryptocurrencies found matching \"{}\"\n",
            view.query.search
        ));
    }
    out
}

pub fn gallery(view: &GalleryView) -> String {
    let mut out = String::new();
    out.push_str("Crypto Gallery\n");
    let filters: Vec<String> = GalleryFilter::ALL
        .iter()
        .map(|f| {
            if *f == view.filter {
                format!("[{}]", f.label())
            } else {
                f.label().to_string()
            }
        })
        .collect();
    out.push_str(&format!("{}\n\n", filters.join("  ")));

    for coin in &view.coins {
        out.push_str(&format!(
            "#{:<4} {} ({})\n      {}  {}  Vol {}\n",
            coin.market_cap_rank
                .map(|r| r.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            coin.name,
            coin.symbol.to_uppercase(),
            format_price(coin.current_price),
            format_percent(coin.price_change_percentage_24h),
            format_large_usd(coin.total_volume),
        ));
    }
    if view.coins.is_empty() {
        out.push_str("No coins match this filter.\n");
    }
    out
}

pub fn detail(view: &DetailView, vs_currency: &str) -> String {
    let coin = &view.detail;
    let md = &coin.market_data;
    let mut out = String::new();

    let prev = view.neighbors.previous.as_deref().unwrap_or("-");
    let next = view.neighbors.next.as_deref().unwrap_or("-");
    out.push_str(&format!("<- {prev}    {next} ->\n\n"));

    out.push_str(&format!(
        "{} ({})  Rank #{}\n",
        coin.name,
        coin.symbol.to_uppercase(),
        coin.market_cap_rank
            .map(|r| r.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    ));
    out.push_str(&format!("Price       {}\n", format_price(md.current_price.get(vs_currency))));
    out.push_str(&format!(
        "Change      24h {}  7d {}  30d {}\n",
        format_percent(md.price_change_percentage_24h),
        format_percent(md.price_change_percentage_7d),
        format_percent(md.price_change_percentage_30d),
    ));
    out.push_str(&format!("Market Cap  {}\n", format_large_usd(md.market_cap.get(vs_currency))));
    out.push_str(&format!("Volume 24h  {}\n", format_large_usd(md.total_volume.get(vs_currency))));
    out.push_str(&format!(
        "24h Range   {} - {}\n",
        format_price(md.low_24h.get(vs_currency)),
        format_price(md.high_24h.get(vs_currency)),
    ));
    out.push_str(&format!(
        "ATH / ATL   {} / {}\n",
        format_price(md.ath.get(vs_currency)),
        format_price(md.atl.get(vs_currency)),
    ));
    out.push_str(&format!("Circulating {}\n", format_supply(md.circulating_supply, &coin.symbol)));
    out.push_str(&format!("Max Supply  {}\n", format_max_supply(md.max_supply, &coin.symbol)));

    out.push_str(&format!("\nPrice Chart ({})\n", view.range));
    out.push_str(&chart_summary(&view.chart));

    let summary = description_summary(&coin.description.en, DEFAULT_SUMMARY_SENTENCES);
    if !summary.is_empty() {
        out.push_str(&format!("\nAbout {}\n{summary}\n", coin.name));
    }
    let categories = top_categories(&coin.categories, DEFAULT_CATEGORY_LIMIT);
    if !categories.is_empty() {
        out.push_str(&format!("\nCategories: {}\n", categories.join(", ")));
    }
    out
}

fn chart_summary(points: &[PricePoint]) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return "No price data.\n".to_string();
    };
    let low = points.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
    let high = points.iter().map(|p| p.price).fold(f64::NEG_INFINITY, f64::max);
    format!(
        "{} points, {} to {}\nOpen {}  Close {}  Low {}  High {}\n",
        points.len(),
        first.date,
        last.date,
        format_price(Some(first.price)),
        format_price(Some(last.price)),
        format_price(Some(low)),
        format_price(Some(high)),
    )
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
