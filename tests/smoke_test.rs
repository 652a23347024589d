//! Live smoke test against the real catalog API.
//!
//! Needs `DEAL_FINDER_KEY`, `DEAL_FINDER_SECRET` and `DEAL_FINDER_TAG` to be
//! set. Run with:
//! ```sh
//! cargo test --test smoke_test -- --ignored --nocapture
//! ```

use deal_finder::models::{Category, ResultSort, SearchParams};
use deal_finder::{Credentials, DealFinder, SearchOutcome};

#[test]
#[ignore]
fn live_search_returns_ranked_records() {
    let credentials = match Credentials::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("  [SKIP] {}", e);
            return;
        }
    };

    let finder = DealFinder::builder()
        .credentials(credentials)
        .max_pages(2)
        .build()
        .unwrap();
    eprintln!("  {}", finder);

    let params = SearchParams::new("コーヒー")
        .category(Category::GroceryAndGourmetFood)
        .result_sort(ResultSort::ByDiscount);
    let outcome = finder.search(&params).unwrap();
    let summary = outcome.summary().clone();
    eprintln!(
        "  pages={} state={} fetched={} extracted={} skipped={}",
        summary.pages_requested,
        summary.fetch_state,
        summary.items_fetched,
        summary.records_extracted,
        summary.skipped.len()
    );

    match outcome {
        SearchOutcome::Ranked { list, .. } => {
            let rates: Vec<u8> = list.iter().map(|r| r.discount_rate()).collect();
            assert!(rates.windows(2).all(|w| w[0] >= w[1]), "not sorted: {:?}", rates);
            for r in list.iter().take(3) {
                eprintln!("  {} | {} | {}% off", r.name(), r.price(), r.discount_rate());
                assert!(!r.name().is_empty());
            }
        }
        SearchOutcome::NoMatches { .. } => {
            assert!(!summary.fetch_state.is_failed(), "search failed: {}", summary.fetch_state);
        }
    }
}
