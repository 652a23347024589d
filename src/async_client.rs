//! Async wrapper around [`DealFinder`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every search on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP client and the page pacing wait do their work.
//!
//! # Example
//!
//! ```no_run
//! use deal_finder::{AsyncDealFinder, Credentials, DealFinder};
//! use deal_finder::models::SearchParams;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let finder = AsyncDealFinder::build(
//!         DealFinder::builder().credentials(Credentials::from_env().unwrap()),
//!     )
//!     .await
//!     .unwrap();
//!
//!     let outcome = finder.search(SearchParams::new("headphones")).await.unwrap();
//!     println!("{} results", outcome.into_list().len());
//! }
//! ```

use std::sync::{Arc, Mutex};

use crate::error::{DealFinderError, Result};
use crate::models::SearchParams;
use crate::{DealFinder, DealFinderBuilder, SearchOutcome};

/// Async wrapper around [`DealFinder`].
///
/// All operations are dispatched to a blocking thread pool. The underlying
/// finder is shared behind a [`Mutex`], so searches issued concurrently run
/// one after another.
#[derive(Clone)]
pub struct AsyncDealFinder {
    inner: Arc<Mutex<DealFinder>>,
}

impl AsyncDealFinder {
    /// Build the finder on the blocking pool.
    ///
    /// Constructing the blocking HTTP client inside an async context is not
    /// allowed, so this is the way to create one from async code.
    pub async fn build(builder: DealFinderBuilder) -> Result<Self> {
        tokio::task::spawn_blocking(move || {
            let finder = builder.build()?;
            Ok(Self::from_finder(finder))
        })
        .await
        .map_err(|e| DealFinderError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Wrap an already-built finder.
    pub fn from_finder(finder: DealFinder) -> Self {
        Self {
            inner: Arc::new(Mutex::new(finder)),
        }
    }

    /// Run a sync finder operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&DealFinder) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let finder = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = finder
                .lock()
                .map_err(|_| DealFinderError::InvalidArgument("DealFinder lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| DealFinderError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Run one search asynchronously.
    pub async fn search(&self, params: SearchParams) -> Result<SearchOutcome> {
        self.run(move |finder| finder.search(&params)).await
    }

    /// Release the finder on the blocking pool.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || drop(self))
            .await
            .map_err(|e| DealFinderError::InvalidArgument(format!("Task join error: {e}")))
    }
}
