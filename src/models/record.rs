use serde::Serialize;

use crate::config;

// ---------------------------------------------------------------------------
// ProductRecord — Derived metrics for one catalog item
// ---------------------------------------------------------------------------

/// Display record derived from one [`RawItem`](super::RawItem).
///
/// Only the extractor constructs records; once built they are read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    name: String,
    price: u64,
    discount_rate: u8,
    loyalty_points: u64,
    point_rate: u64,
    image_url: String,
    detail_url: String,
    item_id: String,
}

impl ProductRecord {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        name: String,
        price: u64,
        discount_rate: u8,
        loyalty_points: u64,
        point_rate: u64,
        image_url: String,
        detail_url: String,
        item_id: String,
    ) -> Self {
        Self {
            name,
            price,
            discount_rate,
            loyalty_points,
            point_rate,
            image_url,
            detail_url,
            item_id,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sale price in whole currency units.
    pub fn price(&self) -> u64 {
        self.price
    }

    /// Truncated percentage below list price (0-100).
    pub fn discount_rate(&self) -> u8 {
        self.discount_rate
    }

    pub fn loyalty_points(&self) -> u64 {
        self.loyalty_points
    }

    /// Truncated loyalty points as a percentage of the sale price.
    pub fn point_rate(&self) -> u64 {
        self.point_rate
    }

    /// Primary image URL, empty when the item has none.
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn detail_url(&self) -> &str {
        &self.detail_url
    }

    /// Upstream item identifier, empty when the item has none.
    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    /// Link to the third-party price-history chart for this item.
    ///
    /// `domain` is the marketplace chart domain (e.g. `"co.jp"`). Returns
    /// `None` for records without an item identifier.
    pub fn price_history_chart_url(&self, domain: &str) -> Option<String> {
        if self.item_id.is_empty() {
            return None;
        }
        Some(format!(
            "{}?asin={}&domain={}",
            config::PRICE_CHART_URL,
            self.item_id,
            domain
        ))
    }
}

// ---------------------------------------------------------------------------
// RankedList — Filtered and ordered records for one search
// ---------------------------------------------------------------------------

/// The final filtered and sorted records of a single search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RankedList {
    records: Vec<ProductRecord>,
}

impl RankedList {
    pub(crate) fn new(records: Vec<ProductRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProductRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn into_vec(self) -> Vec<ProductRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a RankedList {
    type Item = &'a ProductRecord;
    type IntoIter = std::slice::Iter<'a, ProductRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for RankedList {
    type Item = ProductRecord;
    type IntoIter = std::vec::IntoIter<ProductRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
