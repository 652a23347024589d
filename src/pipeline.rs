//! Aggregation of fetched pages into one flat record list.

use serde::Serialize;

use crate::extract::{extract, ExtractOutcome, SkipReason};
use crate::models::{ProductRecord, RawItem};

/// An item that was dropped during aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedItem {
    /// Zero-based index of the page the item came from.
    pub page_index: usize,
    /// Zero-based position within that page.
    pub position: usize,
    /// Upstream identifier, empty when unknown.
    pub item_id: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub records: Vec<ProductRecord>,
    pub skipped: Vec<SkippedItem>,
}

/// Extract every item of every page, in page order then position order.
///
/// Duplicates across pages are kept as-is.
pub fn aggregate(batches: &[Vec<RawItem>]) -> Aggregation {
    let mut out = Aggregation::default();

    for (page_index, batch) in batches.iter().enumerate() {
        for (position, item) in batch.iter().enumerate() {
            match extract(item) {
                ExtractOutcome::Success(record) => out.records.push(record),
                ExtractOutcome::Skipped(reason) => {
                    let item_id = item.asin.clone().unwrap_or_default();
                    tracing::debug!(page_index, position, item_id = %item_id, %reason, "item skipped");
                    out.skipped.push(SkippedItem {
                        page_index,
                        position,
                        item_id,
                        reason,
                    });
                }
            }
        }
    }

    out
}
