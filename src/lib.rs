//! Deal finder for product catalog searches.
//!
//! Queries a catalog search API page by page, derives discount and
//! loyalty-point metrics for every returned item, filters by a minimum
//! discount and ranks what is left.
//!
//! # Quick start
//!
//! ```no_run
//! use deal_finder::{Credentials, DealFinder, SearchOutcome};
//! use deal_finder::models::{Category, ResultSort, SearchParams};
//!
//! let finder = DealFinder::builder()
//!     .credentials(Credentials::from_env().unwrap())
//!     .build()
//!     .unwrap();
//!
//! let params = SearchParams::new("coffee")
//!     .category(Category::GroceryAndGourmetFood)
//!     .min_discount(20)
//!     .result_sort(ResultSort::ByDiscount);
//!
//! match finder.search(&params).unwrap() {
//!     SearchOutcome::Ranked { list, .. } => {
//!         for record in &list {
//!             println!("{} {}% off", record.name(), record.discount_rate());
//!         }
//!     }
//!     SearchOutcome::NoMatches { summary } => println!("nothing found ({})", summary.fetch_state),
//! }
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod client;
pub mod config;
pub mod credentials;
pub mod display;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod models;
pub mod pipeline;
pub mod rank;
pub mod signer;

#[cfg(feature = "async")]
pub use async_client::AsyncDealFinder;
pub use client::{PaapiClient, SearchApi, SearchRequest};
pub use credentials::Credentials;
pub use error::{DealFinderError, Result};
pub use extract::{extract, ExtractOutcome, SkipReason};
pub use fetcher::{FetchReport, FetchSettings, FetchState, PageFetcher};
pub use pipeline::{aggregate, Aggregation, SkippedItem};
pub use rank::rank;

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use models::{Marketplace, RankedList, SearchParams};

// ---------------------------------------------------------------------------
// DealFinderBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`DealFinder`].
///
/// Use [`DealFinder::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](DealFinderBuilder::build) to create the finder.
pub struct DealFinderBuilder {
    credentials: Option<Credentials>,
    marketplace: Marketplace,
    timeout: Duration,
    fetch: FetchSettings,
}

impl Default for DealFinderBuilder {
    fn default() -> Self {
        Self {
            credentials: None,
            marketplace: Marketplace::default(),
            timeout: config::DEFAULT_TIMEOUT,
            fetch: FetchSettings::default(),
        }
    }
}

impl DealFinderBuilder {
    /// Credentials forwarded to the catalog API. Required by [`build()`](Self::build).
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Target marketplace. Defaults to Japan.
    pub fn marketplace(mut self, marketplace: Marketplace) -> Self {
        self.marketplace = marketplace;
        self
    }

    /// HTTP request timeout for each page request.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Maximum number of pages requested per search. Defaults to 5.
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.fetch.max_pages = max_pages;
        self
    }

    /// Items requested per page (1-10). Defaults to 10.
    pub fn items_per_page(mut self, items_per_page: u32) -> Self {
        self.fetch.items_per_page = items_per_page;
        self
    }

    /// Wait inserted between successful page requests. Defaults to 500 ms.
    pub fn page_delay(mut self, page_delay: Duration) -> Self {
        self.fetch.page_delay = page_delay;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.fetch.max_pages == 0 {
            return Err(DealFinderError::InvalidArgument(
                "max_pages must be at least 1".into(),
            ));
        }
        if self.fetch.items_per_page == 0 || self.fetch.items_per_page > config::MAX_ITEMS_PER_PAGE {
            return Err(DealFinderError::InvalidArgument(format!(
                "items_per_page must be between 1 and {}, got {}",
                config::MAX_ITEMS_PER_PAGE,
                self.fetch.items_per_page
            )));
        }
        Ok(())
    }

    /// Build a finder backed by the signed catalog API client.
    pub fn build(self) -> Result<DealFinder> {
        self.validate()?;
        let credentials = self.credentials.clone().ok_or_else(|| {
            DealFinderError::MissingCredential("no credentials were configured".into())
        })?;
        let client = PaapiClient::new(credentials, self.marketplace, self.timeout)?;
        self.build_with_client(client)
    }

    /// Build a finder around any [`SearchApi`] implementation.
    ///
    /// Credentials and timeout are not used; the given client owns transport.
    pub fn build_with_client<C>(self, client: C) -> Result<DealFinder>
    where
        C: SearchApi + Send + 'static,
    {
        self.validate()?;
        Ok(DealFinder {
            api: Box::new(client),
            marketplace: self.marketplace,
            fetch: self.fetch,
        })
    }
}

// ---------------------------------------------------------------------------
// SearchOutcome
// ---------------------------------------------------------------------------

/// Bookkeeping for one search, reported with every outcome.
#[derive(Debug, Clone, Serialize)]
pub struct SearchSummary {
    pub pages_requested: u32,
    /// How pagination ended; distinguishes an exhausted catalog from a failed request.
    pub fetch_state: FetchState,
    pub items_fetched: usize,
    pub records_extracted: usize,
    pub skipped: Vec<SkippedItem>,
}

/// Result of a search that ran.
///
/// An empty ranked list is reported as [`NoMatches`](SearchOutcome::NoMatches),
/// never as an error, even when every page request failed.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Ranked {
        list: RankedList,
        summary: SearchSummary,
    },
    NoMatches {
        summary: SearchSummary,
    },
}

impl SearchOutcome {
    pub fn summary(&self) -> &SearchSummary {
        match self {
            Self::Ranked { summary, .. } | Self::NoMatches { summary } => summary,
        }
    }

    pub fn is_no_matches(&self) -> bool {
        matches!(self, Self::NoMatches { .. })
    }

    /// The ranked records; empty for [`NoMatches`](SearchOutcome::NoMatches).
    pub fn into_list(self) -> RankedList {
        match self {
            Self::Ranked { list, .. } => list,
            Self::NoMatches { .. } => RankedList::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// DealFinder
// ---------------------------------------------------------------------------

/// The main entry point: runs fetch, aggregation and ranking for a search.
///
/// Created via [`DealFinder::builder()`].
pub struct DealFinder {
    api: Box<dyn SearchApi + Send>,
    marketplace: Marketplace,
    fetch: FetchSettings,
}

impl DealFinder {
    /// Create a new builder for configuring the finder.
    pub fn builder() -> DealFinderBuilder {
        DealFinderBuilder::default()
    }

    pub fn marketplace(&self) -> Marketplace {
        self.marketplace
    }

    pub fn fetch_settings(&self) -> &FetchSettings {
        &self.fetch
    }

    /// A page fetcher over this finder's client and settings.
    pub fn fetcher(&self) -> PageFetcher<'_> {
        PageFetcher::new(self.api.as_ref(), self.fetch)
    }

    /// Run one search.
    ///
    /// Only invalid `params` produce an `Err`; page failures end pagination
    /// early and the records gathered so far are still ranked.
    pub fn search(&self, params: &SearchParams) -> Result<SearchOutcome> {
        params.validate()?;

        let report = self.fetcher().fetch_pages(params);
        let items_fetched = report.item_count();
        let aggregation = aggregate(&report.batches);
        let records_extracted = aggregation.records.len();
        let list = rank(aggregation.records, params.min_discount, params.result_sort);

        tracing::info!(
            pages = report.pages_requested,
            state = %report.state,
            items_fetched,
            records_extracted,
            ranked = list.len(),
            "search finished"
        );

        let summary = SearchSummary {
            pages_requested: report.pages_requested,
            fetch_state: report.state,
            items_fetched,
            records_extracted,
            skipped: aggregation.skipped,
        };

        if list.is_empty() {
            Ok(SearchOutcome::NoMatches { summary })
        } else {
            Ok(SearchOutcome::Ranked { list, summary })
        }
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for DealFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DealFinder(marketplace={}, max_pages={}, items_per_page={}, page_delay={:?})",
            self.marketplace.country_code(),
            self.fetch.max_pages,
            self.fetch.items_per_page,
            self.fetch.page_delay
        )
    }
}
