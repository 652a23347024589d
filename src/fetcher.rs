//! Multi-page fetch orchestration.
//!
//! Pagination is an explicit state machine. Each [`PageFetcher::step`] issues
//! at most one request and moves the [`FetchState`] forward; a run ends when
//! the catalog is exhausted, a request fails, or the page cap is reached.
//! Failures end pagination softly: whatever was fetched before is kept.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::client::{SearchApi, SearchRequest};
use crate::config;
use crate::models::{RawItem, SearchParams};

// ---------------------------------------------------------------------------
// FetchState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FetchState {
    /// More pages may follow; `next_page` is the next one to request.
    Fetching { next_page: u32 },
    /// `page` came back empty; the catalog has nothing more.
    Exhausted { page: u32 },
    /// The request for `page` failed; pagination stopped there.
    Failed { page: u32, error: String },
    /// Every page up to the cap was fetched.
    Done,
}

impl FetchState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Fetching { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl fmt::Display for FetchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetching { next_page } => write!(f, "fetching page {}", next_page),
            Self::Exhausted { page } => write!(f, "catalog exhausted at page {}", page),
            Self::Failed { page, error } => write!(f, "page {} failed: {}", page, error),
            Self::Done => f.write_str("page limit reached"),
        }
    }
}

// ---------------------------------------------------------------------------
// FetchSettings / FetchReport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchSettings {
    pub max_pages: u32,
    pub items_per_page: u32,
    pub page_delay: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            max_pages: config::DEFAULT_MAX_PAGES,
            items_per_page: config::DEFAULT_ITEMS_PER_PAGE,
            page_delay: config::DEFAULT_PAGE_DELAY,
        }
    }
}

/// Pages collected by one run, in request order.
#[derive(Debug, Clone)]
pub struct FetchReport {
    pub batches: Vec<Vec<RawItem>>,
    pub pages_requested: u32,
    pub state: FetchState,
}

impl FetchReport {
    pub fn item_count(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }
}

// ---------------------------------------------------------------------------
// PageFetcher
// ---------------------------------------------------------------------------

/// Drives paginated search requests against a [`SearchApi`].
pub struct PageFetcher<'a> {
    api: &'a dyn SearchApi,
    settings: FetchSettings,
    pause: Box<dyn Fn(Duration) + 'a>,
}

impl<'a> PageFetcher<'a> {
    pub fn new(api: &'a dyn SearchApi, settings: FetchSettings) -> Self {
        Self {
            api,
            settings,
            pause: Box::new(std::thread::sleep),
        }
    }

    /// Replace the pacing wait (a blocking sleep by default).
    pub fn with_pause<F>(mut self, pause: F) -> Self
    where
        F: Fn(Duration) + 'a,
    {
        self.pause = Box::new(pause);
        self
    }

    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    /// A fresh run positioned before page 1.
    pub fn start(&self) -> FetchReport {
        let state = if self.settings.max_pages == 0 {
            FetchState::Done
        } else {
            FetchState::Fetching { next_page: 1 }
        };
        FetchReport {
            batches: Vec::new(),
            pages_requested: 0,
            state,
        }
    }

    /// Advance `report` by one transition. Returns the new state.
    ///
    /// Terminal states are left untouched.
    pub fn step(&self, params: &SearchParams, report: &mut FetchReport) -> FetchState {
        let page = match report.state {
            FetchState::Fetching { next_page } => next_page,
            ref terminal => return terminal.clone(),
        };

        let request = SearchRequest::for_page(params, self.settings.items_per_page, page);
        report.pages_requested += 1;

        report.state = match self.api.search_items(&request) {
            Err(e) => {
                tracing::warn!(page, error = %e, "page fetch failed; keeping earlier pages");
                FetchState::Failed {
                    page,
                    error: e.to_string(),
                }
            }
            Ok(items) if items.is_empty() => {
                tracing::debug!(page, "empty page; catalog exhausted");
                FetchState::Exhausted { page }
            }
            Ok(items) => {
                tracing::debug!(page, items = items.len(), "page fetched");
                report.batches.push(items);
                if page >= self.settings.max_pages {
                    FetchState::Done
                } else {
                    if !self.settings.page_delay.is_zero() {
                        (self.pause)(self.settings.page_delay);
                    }
                    FetchState::Fetching {
                        next_page: page + 1,
                    }
                }
            }
        };
        report.state.clone()
    }

    /// Fetch pages 1..=max_pages, stopping early on an empty page or an error.
    pub fn fetch_pages(&self, params: &SearchParams) -> FetchReport {
        let mut report = self.start();
        while !report.state.is_terminal() {
            self.step(params, &mut report);
        }
        report
    }
}
