//! Shared test fixtures for the deal-finder integration tests.
//!
//! Provides item builders that produce upstream-shaped JSON and a scripted
//! [`SearchApi`] that replays canned pages and records every request it sees.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use deal_finder::models::RawItem;
use deal_finder::{DealFinderError, SearchApi, SearchRequest};

/// Build an upstream item with a title, offer price and optional savings/points.
pub fn item(asin: &str, title: &str, price: f64, savings: Option<f64>, points: Option<u64>) -> RawItem {
    let mut price_json = serde_json::json!({
        "Amount": price,
        "Currency": "JPY",
        "DisplayAmount": format!("￥{}", price),
    });
    if let Some(s) = savings {
        price_json["Savings"] = serde_json::json!({"Amount": s, "Currency": "JPY"});
    }

    let mut listing = serde_json::json!({ "Price": price_json });
    if let Some(p) = points {
        listing["LoyaltyPoints"] = serde_json::json!({"Points": p});
    }

    RawItem::from_value(serde_json::json!({
        "ASIN": asin,
        "DetailPageURL": format!("https://www.amazon.co.jp/dp/{}", asin),
        "ItemInfo": {"Title": {"DisplayValue": title}},
        "Images": {"Primary": {"Medium": {
            "URL": format!("https://m.media-amazon.com/images/I/{}.jpg", asin),
            "Height": 160,
            "Width": 160
        }}},
        "Offers": {"Listings": [listing]}
    }))
}

/// An item whose list price is 100 and whose discount is exactly `discount` percent.
pub fn item_with_discount(asin: &str, discount: u8) -> RawItem {
    let d = discount as f64;
    item(asin, &format!("Item {}", asin), 100.0 - d, Some(d), None)
}

/// An item with a fixed price of 1000 and `points` loyalty points.
pub fn item_with_points(asin: &str, points: u64) -> RawItem {
    item(asin, &format!("Item {}", asin), 1000.0, None, Some(points))
}

/// An item the extractor must skip (no offers at all).
pub fn item_without_offers(asin: &str) -> RawItem {
    RawItem::from_value(serde_json::json!({
        "ASIN": asin,
        "ItemInfo": {"Title": {"DisplayValue": "No offers"}}
    }))
}

/// Item ids of a sequence of records, in order.
pub fn ids<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a deal_finder::models::ProductRecord>,
{
    records.into_iter().map(|r| r.item_id().to_string()).collect()
}

// ---------------------------------------------------------------------------
// ScriptedApi
// ---------------------------------------------------------------------------

/// One scripted response.
#[derive(Debug, Clone)]
pub enum Page {
    Items(Vec<RawItem>),
    Fail(String),
}

/// Replays `pages` in order; any request past the script gets an empty page.
#[derive(Clone, Default)]
pub struct ScriptedApi {
    pages: Arc<Vec<Page>>,
    requests: Arc<Mutex<Vec<SearchRequest>>>,
}

impl ScriptedApi {
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages: Arc::new(pages),
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn pages_requested(&self) -> Vec<u32> {
        self.requests().iter().map(|r| r.item_page).collect()
    }
}

impl SearchApi for ScriptedApi {
    fn search_items(&self, request: &SearchRequest) -> deal_finder::Result<Vec<RawItem>> {
        let mut log = self.requests.lock().unwrap();
        let index = log.len();
        log.push(request.clone());
        match self.pages.get(index) {
            Some(Page::Items(items)) => Ok(items.clone()),
            Some(Page::Fail(message)) => Err(DealFinderError::Api {
                code: "TooManyRequests".into(),
                message: message.clone(),
            }),
            None => Ok(Vec::new()),
        }
    }
}
