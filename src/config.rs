use std::path::PathBuf;
use std::time::Duration;

pub const SEARCH_ITEMS_PATH: &str = "/paapi5/searchitems";
pub const SEARCH_ITEMS_TARGET: &str = "com.amazon.paapi5.v1.ProductAdvertisingAPIv1.SearchItems";
pub const SERVICE_NAME: &str = "ProductAdvertisingAPI";
pub const PARTNER_TYPE: &str = "Associates";

pub const PRICE_CHART_URL: &str = "https://graph.keepa.com/pricehistory.png";

pub const DEFAULT_MAX_PAGES: u32 = 5;
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 10;
pub const MAX_ITEMS_PER_PAGE: u32 = 10;
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_ACCESS_KEY: &str = "DEAL_FINDER_KEY";
pub const ENV_SECRET_KEY: &str = "DEAL_FINDER_SECRET";
pub const ENV_PARTNER_TAG: &str = "DEAL_FINDER_TAG";

/// Response fields requested for every search.
pub fn search_resources() -> Vec<&'static str> {
    vec![
        "ItemInfo.Title",
        "Images.Primary.Medium",
        "Offers.Listings.Price",
        "Offers.Listings.LoyaltyPoints",
    ]
}

pub fn default_secrets_path() -> PathBuf {
    if let Some(config) = dirs::config_dir() {
        config.join("deal-finder").join("secrets.toml")
    } else {
        PathBuf::from(".deal-finder-secrets.toml")
    }
}
