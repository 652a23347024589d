//! Catalog search client.
//!
//! [`SearchApi`] is the seam between the pipeline and the network. The
//! production implementation, [`PaapiClient`], sends signed `SearchItems`
//! requests over a blocking HTTP client.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config;
use crate::credentials::Credentials;
use crate::error::{DealFinderError, Result};
use crate::models::{Marketplace, RawItem, SearchParams};
use crate::signer::{self, SigningScope};

// ---------------------------------------------------------------------------
// SearchRequest
// ---------------------------------------------------------------------------

/// Body of one `SearchItems` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    pub search_index: String,
    pub item_count: u32,
    pub item_page: u32,
    pub sort_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_saving_percent: Option<u8>,
    pub partner_tag: String,
    pub partner_type: String,
    pub marketplace: String,
    pub resources: Vec<String>,
}

impl SearchRequest {
    /// Build the request for one page of `params`.
    ///
    /// `partner_tag` and `marketplace` are filled in by the client that sends it.
    pub fn for_page(params: &SearchParams, item_count: u32, page: u32) -> Self {
        Self {
            keywords: params.keyword.clone(),
            search_index: params.category.as_str().to_string(),
            item_count,
            item_page: page,
            sort_by: params.sort_by.as_str().to_string(),
            min_saving_percent: params.upstream_min_discount(),
            partner_tag: String::new(),
            partner_type: config::PARTNER_TYPE.to_string(),
            marketplace: String::new(),
            resources: config::search_resources()
                .into_iter()
                .map(|r| r.to_string())
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// SearchApi
// ---------------------------------------------------------------------------

/// Anything that can answer one catalog search page.
///
/// An empty vector means the catalog has no (more) items for the request.
pub trait SearchApi {
    fn search_items(&self, request: &SearchRequest) -> Result<Vec<RawItem>>;
}

impl<T: SearchApi + ?Sized> SearchApi for &T {
    fn search_items(&self, request: &SearchRequest) -> Result<Vec<RawItem>> {
        (**self).search_items(request)
    }
}

impl<T: SearchApi + ?Sized> SearchApi for Box<T> {
    fn search_items(&self, request: &SearchRequest) -> Result<Vec<RawItem>> {
        (**self).search_items(request)
    }
}

impl<T: SearchApi + ?Sized> SearchApi for Arc<T> {
    fn search_items(&self, request: &SearchRequest) -> Result<Vec<RawItem>> {
        (**self).search_items(request)
    }
}

// ---------------------------------------------------------------------------
// Response payload
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchItemsResponse {
    search_result: Option<SearchResult>,
    errors: Option<Vec<ErrorBody>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchResult {
    items: Option<Vec<Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
}

const NO_RESULTS: &str = "NoResults";

/// Turn a raw response into a page of items.
///
/// `NoResults` is the catalog's way of saying "nothing (more) here" and maps
/// to an empty page. Any other reported error, or a non-success status,
/// becomes [`DealFinderError::Api`].
pub fn parse_search_response(status: u16, body: &str) -> Result<Vec<RawItem>> {
    let success = (200..300).contains(&status);
    let parsed: SearchItemsResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(_) if !success => {
            return Err(DealFinderError::Api {
                code: status.to_string(),
                message: body.trim().to_string(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(errors) = parsed.errors.filter(|e| !e.is_empty()) {
        if errors
            .iter()
            .any(|e| e.code.as_deref() == Some(NO_RESULTS))
        {
            return Ok(Vec::new());
        }
        let first = &errors[0];
        return Err(DealFinderError::Api {
            code: first.code.clone().unwrap_or_else(|| status.to_string()),
            message: first.message.clone().unwrap_or_default(),
        });
    }

    if !success {
        return Err(DealFinderError::Api {
            code: status.to_string(),
            message: body.trim().to_string(),
        });
    }

    Ok(parsed
        .search_result
        .and_then(|r| r.items)
        .unwrap_or_default()
        .into_iter()
        .map(RawItem::from_value)
        .collect())
}

// ---------------------------------------------------------------------------
// PaapiClient
// ---------------------------------------------------------------------------

/// Signed `SearchItems` client for one marketplace.
pub struct PaapiClient {
    credentials: Credentials,
    marketplace: Marketplace,
    client: Client,
}

impl PaapiClient {
    /// Create a client with the given request timeout.
    pub fn new(credentials: Credentials, marketplace: Marketplace, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            credentials,
            marketplace,
            client,
        })
    }

    pub fn marketplace(&self) -> Marketplace {
        self.marketplace
    }

    fn endpoint(&self) -> String {
        format!("https://{}{}", self.marketplace.host(), config::SEARCH_ITEMS_PATH)
    }
}

impl SearchApi for PaapiClient {
    fn search_items(&self, request: &SearchRequest) -> Result<Vec<RawItem>> {
        let mut request = request.clone();
        request.partner_tag = self.credentials.partner_tag.clone();
        request.marketplace = self.marketplace.domain().to_string();
        let body = serde_json::to_string(&request)?;

        let host = self.marketplace.host();
        let amz_date = signer::amz_date(Utc::now());
        let headers = [
            ("content-encoding", "amz-1.0"),
            ("content-type", "application/json; charset=utf-8"),
            ("host", host),
            ("x-amz-date", amz_date.as_str()),
            ("x-amz-target", config::SEARCH_ITEMS_TARGET),
        ];
        let (canonical, signed_headers) = signer::canonical_request(
            "POST",
            config::SEARCH_ITEMS_PATH,
            "",
            &headers,
            body.as_bytes(),
        );
        let scope = SigningScope {
            access_key: &self.credentials.access_key,
            secret_key: &self.credentials.secret_key,
            region: self.marketplace.region(),
            service: config::SERVICE_NAME,
        };
        let authorization = signer::authorization(&scope, &amz_date, &canonical, &signed_headers)?;

        tracing::debug!(page = request.item_page, host, "sending SearchItems request");

        let mut builder = self.client.post(self.endpoint());
        for (name, value) in headers.iter().filter(|(name, _)| *name != "host") {
            builder = builder.header(*name, *value);
        }
        let resp = builder
            .header("authorization", authorization)
            .body(body)
            .send()?;

        let status = resp.status().as_u16();
        let text = resp.text()?;
        parse_search_response(status, &text)
    }
}
