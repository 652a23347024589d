//! Filtering and ordering of aggregated records.

use std::cmp::Reverse;

use crate::models::{ProductRecord, RankedList, ResultSort};

/// Keep records at or above `min_discount` and order them by `sort`.
///
/// The sort is stable: records with equal keys keep their input order.
pub fn rank(records: Vec<ProductRecord>, min_discount: u8, sort: ResultSort) -> RankedList {
    let mut kept: Vec<ProductRecord> = records
        .into_iter()
        .filter(|r| r.discount_rate() >= min_discount)
        .collect();

    match sort {
        ResultSort::ByPointRate => kept.sort_by_key(|r| Reverse(r.point_rate())),
        ResultSort::ByDiscount => kept.sort_by_key(|r| Reverse(r.discount_rate())),
        ResultSort::ByPriceAsc => kept.sort_by_key(|r| r.price()),
    }

    RankedList::new(kept)
}
