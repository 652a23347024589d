//! Filter/sort engine tests: inclusive filtering, orderings and stability.

mod common;

use deal_finder::models::{ProductRecord, RawItem, ResultSort};
use deal_finder::{extract, rank};

fn records(items: &[RawItem]) -> Vec<ProductRecord> {
    items
        .iter()
        .map(|i| extract(i).into_record().expect("fixture must extract"))
        .collect()
}

fn discount_fixture() -> Vec<ProductRecord> {
    records(&[
        common::item_with_discount("d0", 0),
        common::item_with_discount("d30", 30),
        common::item_with_discount("d20", 20),
        common::item_with_discount("d50", 50),
        common::item_with_discount("d10", 10),
    ])
}

// ---------------------------------------------------------------------------
// filter
// ---------------------------------------------------------------------------

#[test]
fn filter_is_inclusive() {
    let ranked = rank(discount_fixture(), 20, ResultSort::ByDiscount);
    assert_eq!(common::ids(&ranked), vec!["d50", "d30", "d20"]);
}

#[test]
fn zero_minimum_keeps_everything() {
    let ranked = rank(discount_fixture(), 0, ResultSort::ByDiscount);
    assert_eq!(ranked.len(), 5);
}

#[test]
fn filter_is_monotonic() {
    let mut previous = usize::MAX;
    for min in (0..=90).step_by(10) {
        let count = rank(discount_fixture(), min, ResultSort::ByPointRate).len();
        assert!(count <= previous, "min {} gave {} > {}", min, count, previous);
        previous = count;
    }
}

#[test]
fn everything_filtered_out_is_an_empty_list() {
    let ranked = rank(discount_fixture(), 90, ResultSort::ByDiscount);
    assert!(ranked.is_empty());
}

// ---------------------------------------------------------------------------
// orderings
// ---------------------------------------------------------------------------

#[test]
fn by_discount_descending() {
    let ranked = rank(discount_fixture(), 0, ResultSort::ByDiscount);
    assert_eq!(
        common::ids(&ranked),
        vec!["d50", "d30", "d20", "d10", "d0"]
    );
}

#[test]
fn by_point_rate_descending() {
    let ranked = rank(
        records(&[
            common::item_with_points("p1", 10),
            common::item_with_points("p5", 50),
            common::item_with_points("p3", 30),
        ]),
        0,
        ResultSort::ByPointRate,
    );
    assert_eq!(common::ids(&ranked), vec!["p5", "p3", "p1"]);
}

#[test]
fn by_price_ascending() {
    let ranked = rank(
        records(&[
            common::item("mid", "mid", 500.0, None, None),
            common::item("high", "high", 900.0, None, None),
            common::item("low", "low", 100.0, None, None),
        ]),
        0,
        ResultSort::ByPriceAsc,
    );
    assert_eq!(common::ids(&ranked), vec!["low", "mid", "high"]);
}

// ---------------------------------------------------------------------------
// stability
// ---------------------------------------------------------------------------

#[test]
fn equal_discounts_keep_input_order() {
    let ranked = rank(
        records(&[
            common::item_with_discount("a", 20),
            common::item_with_discount("b", 40),
            common::item_with_discount("c", 20),
            common::item_with_discount("d", 20),
        ]),
        0,
        ResultSort::ByDiscount,
    );
    assert_eq!(common::ids(&ranked), vec!["b", "a", "c", "d"]);
}

#[test]
fn equal_point_rates_keep_input_order() {
    // 50/1000 and 59/1000 both truncate to 5%.
    let ranked = rank(
        records(&[
            common::item_with_points("x", 50),
            common::item_with_points("y", 10),
            common::item_with_points("z", 59),
        ]),
        0,
        ResultSort::ByPointRate,
    );
    assert_eq!(common::ids(&ranked), vec!["x", "z", "y"]);
}

#[test]
fn equal_prices_keep_input_order() {
    let ranked = rank(
        records(&[
            common::item("first", "first", 300.0, None, None),
            common::item("cheap", "cheap", 100.0, None, None),
            common::item("second", "second", 300.0, None, None),
        ]),
        0,
        ResultSort::ByPriceAsc,
    );
    assert_eq!(common::ids(&ranked), vec!["cheap", "first", "second"]);
}
