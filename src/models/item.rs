use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// RawItem — One item as returned by the catalog search endpoint
// ---------------------------------------------------------------------------

/// A catalog item exactly as the upstream API returned it.
///
/// Every nested field is optional; the upstream omits whatever the item does
/// not carry (no offer, no image, no loyalty program, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawItem {
    #[serde(rename = "ASIN")]
    pub asin: Option<String>,
    #[serde(rename = "DetailPageURL")]
    pub detail_page_url: Option<String>,
    pub item_info: Option<ItemInfo>,
    pub images: Option<Images>,
    pub offers: Option<Offers>,

    /// Set when the item could not be decoded into this shape at all.
    #[serde(skip)]
    pub malformed: Option<String>,
}

impl RawItem {
    /// Decode a single item, never failing.
    ///
    /// An item whose structure does not match keeps its `ASIN` (when one can
    /// be read) and carries the decode error in [`malformed`](Self::malformed)
    /// so the extractor can report it as a skip.
    pub fn from_value(value: Value) -> Self {
        let asin = value
            .get("ASIN")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());
        match serde_json::from_value::<RawItem>(value) {
            Ok(item) => item,
            Err(e) => RawItem {
                asin,
                malformed: Some(e.to_string()),
                ..Default::default()
            },
        }
    }

    /// The first offer listing, if the item has any.
    pub fn first_listing(&self) -> Option<&Listing> {
        self.offers.as_ref()?.listings.as_ref()?.first()
    }

    /// The display title, if present.
    pub fn title(&self) -> Option<&str> {
        self.item_info
            .as_ref()?
            .title
            .as_ref()?
            .display_value
            .as_deref()
    }

    /// URL of the primary medium-resolution image, if present.
    pub fn medium_image_url(&self) -> Option<&str> {
        self.images
            .as_ref()?
            .primary
            .as_ref()?
            .medium
            .as_ref()?
            .url
            .as_deref()
    }
}

// ---------------------------------------------------------------------------
// Nested item sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemInfo {
    pub title: Option<DisplayValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisplayValue {
    pub display_value: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Images {
    pub primary: Option<ImageSet>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageSet {
    pub small: Option<Image>,
    pub medium: Option<Image>,
    pub large: Option<Image>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Image {
    #[serde(rename = "URL")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Offers {
    pub listings: Option<Vec<Listing>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Listing {
    pub price: Option<OfferPrice>,
    pub loyalty_points: Option<LoyaltyPoints>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OfferPrice {
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub display_amount: Option<String>,
    pub savings: Option<Savings>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Savings {
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub display_amount: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoyaltyPoints {
    pub points: Option<u64>,
}
