//! Metric extraction: one raw catalog item in, one display record (or a skip) out.
//!
//! Extraction never fails the batch. Anything structurally wrong with an item
//! becomes a [`SkipReason`] the caller can inspect.

use std::fmt;

use serde::Serialize;

use crate::models::{ProductRecord, RawItem};

// ---------------------------------------------------------------------------
// ExtractOutcome
// ---------------------------------------------------------------------------

/// Why an item did not produce a [`ProductRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// The item has no offer listing at all.
    NoListing,
    /// The first listing carries no sale price.
    MissingPrice,
    /// The item has no display title.
    MissingTitle,
    /// The item or one of its amounts could not be interpreted.
    Malformed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoListing => f.write_str("no offer listing"),
            Self::MissingPrice => f.write_str("listing has no price"),
            Self::MissingTitle => f.write_str("item has no title"),
            Self::Malformed(detail) => write!(f, "malformed item: {}", detail),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractOutcome {
    Success(ProductRecord),
    Skipped(SkipReason),
}

impl ExtractOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn into_record(self) -> Option<ProductRecord> {
        match self {
            Self::Success(record) => Some(record),
            Self::Skipped(_) => None,
        }
    }

    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            Self::Success(_) => None,
            Self::Skipped(reason) => Some(reason),
        }
    }
}

// ---------------------------------------------------------------------------
// extract
// ---------------------------------------------------------------------------

/// Derive price, discount and loyalty-point metrics for one item.
///
/// Uses the first offer listing. The list price is the sale price plus the
/// listed savings; discount and point rates are truncated integer percents
/// computed on hundredths of the currency unit, so decimal currencies keep
/// their markdowns. Only the displayed price is rounded to whole units.
/// A zero sale price yields a point rate of 0.
pub fn extract(item: &RawItem) -> ExtractOutcome {
    match try_extract(item) {
        Ok(record) => ExtractOutcome::Success(record),
        Err(reason) => ExtractOutcome::Skipped(reason),
    }
}

fn try_extract(item: &RawItem) -> std::result::Result<ProductRecord, SkipReason> {
    if let Some(ref detail) = item.malformed {
        return Err(SkipReason::Malformed(detail.clone()));
    }

    let listing = item.first_listing().ok_or(SkipReason::NoListing)?;
    let offer_price = listing.price.as_ref().ok_or(SkipReason::MissingPrice)?;
    let amount = offer_price.amount.ok_or(SkipReason::MissingPrice)?;
    let price_minor = to_minor_units(amount)?;

    let savings_minor = match offer_price.savings.as_ref().and_then(|s| s.amount) {
        Some(amount) => to_minor_units(amount)?,
        None => 0,
    };
    let list_minor = price_minor.saturating_add(savings_minor);

    let points = listing
        .loyalty_points
        .as_ref()
        .and_then(|lp| lp.points)
        .unwrap_or(0);

    let name = item.title().ok_or(SkipReason::MissingTitle)?.to_string();

    Ok(ProductRecord::new(
        name,
        whole_units(price_minor),
        discount_rate(price_minor, list_minor),
        points,
        scaled_point_rate(points, price_minor, MINOR_PER_UNIT),
        item.medium_image_url().unwrap_or_default().to_string(),
        item.detail_page_url.clone().unwrap_or_default(),
        item.asin.clone().unwrap_or_default(),
    ))
}

/// `floor(100 * (list - price) / list)`, or 0 when there is no markdown.
pub fn discount_rate(price: u64, list_price: u64) -> u8 {
    if list_price <= price {
        return 0;
    }
    let rate = (list_price - price) as u128 * 100 / list_price as u128;
    rate.min(100) as u8
}

/// `floor(100 * points / price)`, with a zero price mapping to 0.
pub fn point_rate(points: u64, price: u64) -> u64 {
    scaled_point_rate(points, price, 1)
}

/// Amounts are carried in hundredths of the currency unit.
const MINOR_PER_UNIT: u64 = 100;

/// Point rate for a price expressed in `1 / scale` currency units.
fn scaled_point_rate(points: u64, price: u64, scale: u64) -> u64 {
    if price == 0 {
        return 0;
    }
    let rate = points as u128 * 100 * scale as u128 / price as u128;
    u64::try_from(rate).unwrap_or(u64::MAX)
}

/// Convert an upstream amount to hundredths of the currency unit.
fn to_minor_units(amount: f64) -> std::result::Result<u64, SkipReason> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(SkipReason::Malformed(format!("invalid amount {}", amount)));
    }
    Ok((amount * MINOR_PER_UNIT as f64).round() as u64)
}

/// Round hundredths to the nearest whole unit for display.
fn whole_units(minor: u64) -> u64 {
    minor.saturating_add(MINOR_PER_UNIT / 2) / MINOR_PER_UNIT
}
