use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DealFinderError, Result};

// ---------------------------------------------------------------------------
// Category — Catalog section (upstream `SearchIndex`)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    All,
    Electronics,
    Computers,
    Kitchen,
    GroceryAndGourmetFood,
    HealthPersonalCare,
    Beauty,
    Apparel,
    Shoes,
    Toys,
    Hobbies,
    VideoGames,
    Books,
    KindleStore,
}

impl Category {
    pub const ALL: [Category; 14] = [
        Category::All,
        Category::Electronics,
        Category::Computers,
        Category::Kitchen,
        Category::GroceryAndGourmetFood,
        Category::HealthPersonalCare,
        Category::Beauty,
        Category::Apparel,
        Category::Shoes,
        Category::Toys,
        Category::Hobbies,
        Category::VideoGames,
        Category::Books,
        Category::KindleStore,
    ];

    /// The upstream `SearchIndex` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Electronics => "Electronics",
            Self::Computers => "Computers",
            Self::Kitchen => "Kitchen",
            Self::GroceryAndGourmetFood => "GroceryAndGourmetFood",
            Self::HealthPersonalCare => "HealthPersonalCare",
            Self::Beauty => "Beauty",
            Self::Apparel => "Apparel",
            Self::Shoes => "Shoes",
            Self::Toys => "Toys",
            Self::Hobbies => "Hobbies",
            Self::VideoGames => "VideoGames",
            Self::Books => "Books",
            Self::KindleStore => "KindleStore",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DealFinderError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DealFinderError::InvalidArgument(format!("Unknown category: {}", s)))
    }
}

// ---------------------------------------------------------------------------
// SortBy — Upstream ordering of each page
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortBy {
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    Newest,
    Rating,
}

impl SortBy {
    /// The upstream `SortBy` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceAsc => "Price:LowToHigh",
            Self::PriceDesc => "Price:HighToLow",
            Self::Newest => "NewestArrivals",
            Self::Rating => "AvgCustomerReviews",
        }
    }
}

impl FromStr for SortBy {
    type Err = DealFinderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "featured" => Ok(Self::Featured),
            "price-asc" | "price_asc" | "price:lowtohigh" => Ok(Self::PriceAsc),
            "price-desc" | "price_desc" | "price:hightolow" => Ok(Self::PriceDesc),
            "newest" | "newestarrivals" => Ok(Self::Newest),
            "rating" | "avgcustomerreviews" => Ok(Self::Rating),
            _ => Err(DealFinderError::InvalidArgument(format!(
                "Unknown sort order: {}",
                s
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// ResultSort — Local ordering of the ranked list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultSort {
    #[default]
    ByPointRate,
    ByDiscount,
    ByPriceAsc,
}

impl FromStr for ResultSort {
    type Err = DealFinderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "point-rate" | "point_rate" | "points" => Ok(Self::ByPointRate),
            "discount" => Ok(Self::ByDiscount),
            "price" | "price-asc" | "price_asc" => Ok(Self::ByPriceAsc),
            _ => Err(DealFinderError::InvalidArgument(format!(
                "Unknown result order: {}",
                s
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// SearchParams
// ---------------------------------------------------------------------------

/// Parameters for one search, as collected by the UI layer.
///
/// `keyword == None` means "no keyword filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub keyword: Option<String>,
    pub category: Category,
    pub sort_by: SortBy,
    pub min_discount: u8,
    pub result_sort: ResultSort,
}

impl SearchParams {
    pub const MAX_DISCOUNT: u8 = 90;
    pub const DISCOUNT_STEP: u8 = 10;

    pub fn new(keyword: impl Into<String>) -> Self {
        Self::default().keyword(keyword)
    }

    /// Set the keyword. Blank strings clear it.
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        let trimmed = keyword.trim();
        self.keyword = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn min_discount(mut self, min_discount: u8) -> Self {
        self.min_discount = min_discount;
        self
    }

    pub fn result_sort(mut self, result_sort: ResultSort) -> Self {
        self.result_sort = result_sort;
        self
    }

    /// The discount to forward upstream, if any.
    ///
    /// The catalog API rejects savings filters on the `All` index, so the
    /// threshold is only attached for a concrete category. The ranked list
    /// is filtered locally either way.
    pub fn upstream_min_discount(&self) -> Option<u8> {
        if self.category != Category::All && self.min_discount > 0 {
            Some(self.min_discount)
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_discount > Self::MAX_DISCOUNT || self.min_discount % Self::DISCOUNT_STEP != 0 {
            return Err(DealFinderError::InvalidArgument(format!(
                "Minimum discount must be a multiple of {} between 0 and {}, got {}",
                Self::DISCOUNT_STEP,
                Self::MAX_DISCOUNT,
                self.min_discount
            )));
        }
        if self.keyword.is_none() && self.category == Category::All {
            return Err(DealFinderError::InvalidArgument(
                "A keyword is required when searching all categories".into(),
            ));
        }
        Ok(())
    }
}
