//! Text and JSON rendering of search outcomes for the terminal.
//!
//! Presentation only: label tables and formatting. Nothing here feeds back
//! into the pipeline.

use std::fmt::Write as _;

use crate::models::{Category, ProductRecord, ResultSort, SortBy};
use crate::{SearchOutcome, SearchSummary};

pub const NO_MATCHES_HINT: &str =
    "No products matched. Try a lower minimum discount or a different keyword.";

/// Human-readable label for a catalog section.
pub fn category_label(category: Category) -> &'static str {
    match category {
        Category::All => "All categories",
        Category::Electronics => "Electronics & Cameras",
        Category::Computers => "Computers & Accessories",
        Category::Kitchen => "Home & Kitchen",
        Category::GroceryAndGourmetFood => "Food & Beverage",
        Category::HealthPersonalCare => "Health & Personal Care",
        Category::Beauty => "Beauty",
        Category::Apparel => "Clothing & Fashion",
        Category::Shoes => "Shoes & Bags",
        Category::Toys => "Toys",
        Category::Hobbies => "Hobbies",
        Category::VideoGames => "Video Games",
        Category::Books => "Books",
        Category::KindleStore => "Kindle Store",
    }
}

pub fn sort_by_label(sort_by: SortBy) -> &'static str {
    match sort_by {
        SortBy::Featured => "Featured",
        SortBy::PriceAsc => "Price: Low to High",
        SortBy::PriceDesc => "Price: High to Low",
        SortBy::Newest => "Newest Arrivals",
        SortBy::Rating => "Customer Rating",
    }
}

pub fn result_sort_label(sort: ResultSort) -> &'static str {
    match sort {
        ResultSort::ByPointRate => "Point rate",
        ResultSort::ByDiscount => "Discount",
        ResultSort::ByPriceAsc => "Lowest price",
    }
}

/// Rank label for the zero-based position `index`; the top three get medals.
pub fn rank_label(index: usize) -> String {
    match index {
        0 => "🥇 1st".to_string(),
        1 => "🥈 2nd".to_string(),
        2 => "🥉 3rd".to_string(),
        n => format!("#{}", n + 1),
    }
}

/// Integer with comma thousands separators, e.g. `12345` -> `"12,345"`.
pub fn format_amount(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, Default)]
pub struct RenderOptions<'a> {
    pub currency_symbol: &'a str,
    pub show_images: bool,
    /// Chart domain for price-history links; `None` hides them.
    pub chart_domain: Option<&'a str>,
}

/// One record as a block of lines.
pub fn render_record(index: usize, record: &ProductRecord, opts: &RenderOptions<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  {}", rank_label(index), record.name());
    if !record.detail_url().is_empty() {
        let _ = writeln!(out, "    {}", record.detail_url());
    }
    let _ = writeln!(
        out,
        "    Price: {}{}   Discount: {}% OFF   Points: {}pt ({}%)",
        opts.currency_symbol,
        format_amount(record.price()),
        record.discount_rate(),
        format_amount(record.loyalty_points()),
        record.point_rate()
    );
    if opts.show_images && !record.image_url().is_empty() {
        let _ = writeln!(out, "    Image: {}", record.image_url());
    }
    if let Some(chart) = opts
        .chart_domain
        .and_then(|domain| record.price_history_chart_url(domain))
    {
        let _ = writeln!(out, "    Price history: {}", chart);
    }
    out
}

fn render_fetch_note(summary: &SearchSummary) -> Option<String> {
    if summary.fetch_state.is_failed() {
        Some(format!("Note: {}", summary.fetch_state))
    } else {
        None
    }
}

/// Full text report for a search outcome.
pub fn render_outcome(outcome: &SearchOutcome, opts: &RenderOptions<'_>) -> String {
    let mut out = String::new();
    match outcome {
        SearchOutcome::NoMatches { summary } => {
            let _ = writeln!(out, "{}", NO_MATCHES_HINT);
            if let Some(note) = render_fetch_note(summary) {
                let _ = writeln!(out, "{}", note);
            }
        }
        SearchOutcome::Ranked { list, summary } => {
            let _ = writeln!(out, "Found {} products.", list.len());
            if let Some(note) = render_fetch_note(summary) {
                let _ = writeln!(out, "{}", note);
            }
            for (index, record) in list.iter().enumerate() {
                let _ = writeln!(out, "{}", "-".repeat(60));
                out.push_str(&render_record(index, record, opts));
            }
        }
    }
    out
}

/// Machine-readable report: the outcome kind, the ranked records and the run summary.
pub fn json_report(outcome: &SearchOutcome) -> serde_json::Value {
    let (kind, results) = match outcome {
        SearchOutcome::Ranked { list, .. } => ("ranked", serde_json::json!(list)),
        SearchOutcome::NoMatches { .. } => ("no_matches", serde_json::json!([])),
    };
    serde_json::json!({
        "outcome": kind,
        "results": results,
        "summary": outcome.summary(),
    })
}
