//! Rendering tests for the terminal output.

mod common;

use std::time::Duration;

use common::{Page, ScriptedApi};
use deal_finder::display::{self, RenderOptions};
use deal_finder::models::{Category, ResultSort, SearchParams};
use deal_finder::{extract, DealFinder};

#[test]
fn amounts_get_thousands_separators() {
    assert_eq!(display::format_amount(0), "0");
    assert_eq!(display::format_amount(980), "980");
    assert_eq!(display::format_amount(1980), "1,980");
    assert_eq!(display::format_amount(12345), "12,345");
    assert_eq!(display::format_amount(1000000), "1,000,000");
}

#[test]
fn top_three_ranks_are_distinguished() {
    assert_eq!(display::rank_label(0), "🥇 1st");
    assert_eq!(display::rank_label(1), "🥈 2nd");
    assert_eq!(display::rank_label(2), "🥉 3rd");
    assert_eq!(display::rank_label(3), "#4");
    assert_eq!(display::rank_label(9), "#10");
}

#[test]
fn every_category_has_a_label() {
    for category in Category::ALL {
        assert!(!display::category_label(category).is_empty());
    }
    assert_eq!(display::category_label(Category::All), "All categories");
}

#[test]
fn record_block_shows_price_discount_and_points() {
    let item = common::item("B000REC001", "Rice Cooker", 12800.0, Some(3200.0), Some(128));
    let record = extract(&item).into_record().unwrap();
    let opts = RenderOptions {
        currency_symbol: "¥",
        show_images: true,
        chart_domain: Some("co.jp"),
    };

    let text = display::render_record(0, &record, &opts);
    assert!(text.starts_with("🥇 1st  Rice Cooker"));
    assert!(text.contains("https://www.amazon.co.jp/dp/B000REC001"));
    assert!(text.contains("Price: ¥12,800"));
    assert!(text.contains("Discount: 20% OFF"));
    assert!(text.contains("Points: 128pt (1%)"));
    assert!(text.contains("Image: https://m.media-amazon.com/images/I/B000REC001.jpg"));
    assert!(text.contains("pricehistory.png?asin=B000REC001&domain=co.jp"));
}

#[test]
fn chart_and_image_lines_are_optional() {
    let record = extract(&common::item("B1", "Kettle", 3000.0, None, None))
        .into_record()
        .unwrap();
    let text = display::render_record(4, &record, &RenderOptions::default());
    assert!(text.starts_with("#5  Kettle"));
    assert!(!text.contains("Image:"));
    assert!(!text.contains("Price history:"));
}

#[test]
fn outcome_reports_count_or_no_matches() {
    let api = ScriptedApi::new(vec![Page::Items(vec![
        common::item_with_discount("a", 10),
        common::item_with_discount("b", 30),
    ])]);
    let finder = DealFinder::builder()
        .max_pages(1)
        .page_delay(Duration::ZERO)
        .build_with_client(api)
        .unwrap();

    let found = finder
        .search(&SearchParams::new("sale").result_sort(ResultSort::ByDiscount))
        .unwrap();
    let text = display::render_outcome(&found, &RenderOptions::default());
    assert!(text.starts_with("Found 2 products."));
    assert!(text.find("Item b").unwrap() < text.find("Item a").unwrap());

    let none = finder
        .search(&SearchParams::new("sale").category(Category::Toys).min_discount(50))
        .unwrap();
    let text = display::render_outcome(&none, &RenderOptions::default());
    assert!(text.starts_with(display::NO_MATCHES_HINT));
}

#[test]
fn failed_fetch_is_noted_alongside_no_matches() {
    let api = ScriptedApi::new(vec![Page::Fail("InvalidSignature".into())]);
    let finder = DealFinder::builder()
        .page_delay(Duration::ZERO)
        .build_with_client(api)
        .unwrap();

    let outcome = finder.search(&SearchParams::new("sale")).unwrap();
    let text = display::render_outcome(&outcome, &RenderOptions::default());
    assert!(text.contains(display::NO_MATCHES_HINT));
    assert!(text.contains("Note: page 1 failed"));
}

#[test]
fn json_report_names_the_outcome_kind() {
    let api = ScriptedApi::new(vec![Page::Items(vec![common::item_with_discount("a", 30)])]);
    let finder = DealFinder::builder()
        .max_pages(1)
        .page_delay(Duration::ZERO)
        .build_with_client(api)
        .unwrap();

    let found = finder.search(&SearchParams::new("sale")).unwrap();
    let json = display::json_report(&found);
    assert_eq!(json["outcome"], "ranked");
    assert_eq!(json["results"].as_array().unwrap().len(), 1);
    assert_eq!(json["summary"]["records_extracted"], 1);

    let none = finder
        .search(&SearchParams::new("sale").category(Category::Toys).min_discount(50))
        .unwrap();
    let json = display::json_report(&none);
    assert_eq!(json["outcome"], "no_matches");
    assert_eq!(json["results"], serde_json::json!([]));
}
