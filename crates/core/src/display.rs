//! Text formatting shared by every front end. All helpers are pure and
//! render missing values as `N/A`.

pub const NOT_AVAILABLE: &str = "N/A";

/// Label for coins without a supply cap.
pub const UNLIMITED: &str = "Unlimited";

/// Sentences shown from a coin description.
pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;

/// Category tags shown on the detail page.
pub const DEFAULT_CATEGORY_LIMIT: usize = 5;

/// `$42,000.50`; sub-dollar prices keep up to six decimals (`$0.123457`),
/// never fewer than two.
pub fn format_price(price: Option<f64>) -> String {
    let Some(p) = price.filter(|p| p.is_finite()) else {
        return NOT_AVAILABLE.to_string();
    };
    let max_decimals = if p.abs() < 1.0 { 6 } else { 2 };
    format!("${}", format_number_trimmed(p, max_decimals, 2))
}

/// Whole-dollar amount with separators, e.g. market cap or volume.
pub fn format_large_usd(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("${}", format_number(v, 0)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// `+1.23%`, `-4.50%`, `0.00%`.
pub fn format_percent(change: Option<f64>) -> String {
    match change.filter(|c| c.is_finite()) {
        Some(c) if c > 0.0 => format!("+{c:.2}%"),
        Some(c) => format!("{c:.2}%"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// `19,500,000 BTC`
pub fn format_supply(supply: Option<f64>, symbol: &str) -> String {
    match supply.filter(|s| s.is_finite()) {
        Some(s) => format!("{} {}", format_number(s, 0), symbol.to_uppercase()),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Like `format_supply`, but an absent or zero cap reads `Unlimited`.
pub fn format_max_supply(max_supply: Option<f64>, symbol: &str) -> String {
    match max_supply {
        Some(s) if s != 0.0 => format_supply(Some(s), symbol),
        _ => UNLIMITED.to_string(),
    }
}

/// Fixed number of decimals with `,` thousands separators.
pub fn format_number(value: f64, decimals: usize) -> String {
    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let grouped = group_thousands(int_part);
    // `-0` after rounding reads as zero
    let negative = value < 0.0 && raw.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Like `format_number` with `max_decimals`, then trailing zeros removed
/// down to `min_decimals`.
pub fn format_number_trimmed(value: f64, max_decimals: usize, min_decimals: usize) -> String {
    let mut s = format_number(value, max_decimals);
    if let Some(dot) = s.find('.') {
        let keep = dot + 1 + min_decimals;
        while s.len() > keep && s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Remove HTML tags (descriptions embed `<a href>` links).
pub fn strip_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// First `sentences` sentences of a description, tags stripped, ending in
/// a single period. Blank input gives an empty string.
pub fn description_summary(text: &str, sentences: usize) -> String {
    let plain = strip_html(text);
    let plain = plain.trim();
    if plain.is_empty() || sentences == 0 {
        return String::new();
    }
    let joined = plain
        .split(". ")
        .take(sentences)
        .collect::<Vec<_>>()
        .join(". ");
    format!("{}.", joined.trim_end_matches('.'))
}

/// The first `limit` category tags.
pub fn top_categories(categories: &[String], limit: usize) -> &[String] {
    &categories[..categories.len().min(limit)]
}
