//! Aggregation tests: flattening order, skip bookkeeping and duplicates.

mod common;

use deal_finder::{aggregate, SkipReason};

#[test]
fn flattens_pages_in_order() {
    let batches = vec![
        vec![
            common::item_with_discount("p1-a", 0),
            common::item_with_discount("p1-b", 10),
        ],
        vec![common::item_with_discount("p2-a", 20)],
    ];
    let agg = aggregate(&batches);

    assert_eq!(common::ids(&agg.records), vec!["p1-a", "p1-b", "p2-a"]);
    assert!(agg.skipped.is_empty());
}

#[test]
fn skipped_items_are_recorded_with_position() {
    let batches = vec![
        vec![
            common::item_with_discount("ok-1", 0),
            common::item_without_offers("bad-1"),
        ],
        vec![
            common::item_without_offers("bad-2"),
            common::item_with_discount("ok-2", 0),
        ],
    ];
    let agg = aggregate(&batches);

    assert_eq!(common::ids(&agg.records), vec!["ok-1", "ok-2"]);
    assert_eq!(agg.skipped.len(), 2);

    assert_eq!(agg.skipped[0].page_index, 0);
    assert_eq!(agg.skipped[0].position, 1);
    assert_eq!(agg.skipped[0].item_id, "bad-1");
    assert_eq!(agg.skipped[0].reason, SkipReason::NoListing);

    assert_eq!(agg.skipped[1].page_index, 1);
    assert_eq!(agg.skipped[1].position, 0);
    assert_eq!(agg.skipped[1].item_id, "bad-2");
}

#[test]
fn duplicates_across_pages_are_kept() {
    let batches = vec![
        vec![common::item_with_discount("dup", 10)],
        vec![common::item_with_discount("dup", 10)],
    ];
    let agg = aggregate(&batches);
    assert_eq!(common::ids(&agg.records), vec!["dup", "dup"]);
}

#[test]
fn empty_input_gives_empty_aggregation() {
    let agg = aggregate(&[]);
    assert!(agg.records.is_empty());
    assert!(agg.skipped.is_empty());
}

#[test]
fn a_page_of_only_bad_items_does_not_abort_later_pages() {
    let batches = vec![
        vec![
            common::item_without_offers("bad-1"),
            common::item_without_offers("bad-2"),
        ],
        vec![common::item_with_discount("ok", 30)],
    ];
    let agg = aggregate(&batches);
    assert_eq!(common::ids(&agg.records), vec!["ok"]);
    assert_eq!(agg.skipped.len(), 2);
}
