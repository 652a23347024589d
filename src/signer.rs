//! AWS Signature Version 4 request signing for the catalog API.
//!
//! Only what a JSON `POST` with no query string needs, plus the general
//! canonical-request form so the signer can be checked against published
//! test vectors.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::error::{DealFinderError, Result};

type HmacSha256 = Hmac<Sha256>;

pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Inputs shared by every request signed with the same key.
#[derive(Debug, Clone)]
pub struct SigningScope<'a> {
    pub access_key: &'a str,
    pub secret_key: &'a str,
    pub region: &'a str,
    pub service: &'a str,
}

/// Hex-encoded SHA-256 of `data`.
pub fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

fn hmac(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| DealFinderError::InvalidArgument(format!("Invalid signing key: {e}")))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Derive the per-day signing key.
pub fn signing_key(secret_key: &str, date_stamp: &str, region: &str, service: &str) -> Result<Vec<u8>> {
    let k_date = hmac(format!("AWS4{}", secret_key).as_bytes(), date_stamp.as_bytes())?;
    let k_region = hmac(&k_date, region.as_bytes())?;
    let k_service = hmac(&k_region, service.as_bytes())?;
    hmac(&k_service, b"aws4_request")
}

/// Build the canonical request string.
///
/// Header names are lowercased and sorted; values are trimmed. Returns the
/// canonical request and the `SignedHeaders` list.
pub fn canonical_request(
    method: &str,
    path: &str,
    query: &str,
    headers: &[(&str, &str)],
    payload: &[u8],
) -> (String, String) {
    let mut normalized: Vec<(String, String)> = headers
        .iter()
        .map(|(k, v)| (k.to_ascii_lowercase(), v.trim().to_string()))
        .collect();
    normalized.sort_by(|a, b| a.0.cmp(&b.0));

    let canonical_headers: String = normalized
        .iter()
        .map(|(k, v)| format!("{}:{}\n", k, v))
        .collect();
    let signed_headers = normalized
        .iter()
        .map(|(k, _)| k.as_str())
        .collect::<Vec<_>>()
        .join(";");

    let request = format!(
        "{}\n{}\n{}\n{}\n{}\n{}",
        method,
        path,
        query,
        canonical_headers,
        signed_headers,
        sha256_hex(payload)
    );
    (request, signed_headers)
}

/// Compute the `Authorization` header value for a canonical request.
///
/// `amz_date` is the request timestamp in `YYYYMMDD'T'HHMMSS'Z'` form and
/// must match the `x-amz-date` header that was signed.
pub fn authorization(
    scope: &SigningScope<'_>,
    amz_date: &str,
    canonical_request: &str,
    signed_headers: &str,
) -> Result<String> {
    let date_stamp = amz_date.get(..8).ok_or_else(|| {
        DealFinderError::InvalidArgument(format!("Malformed request timestamp: {}", amz_date))
    })?;
    let credential_scope = format!(
        "{}/{}/{}/aws4_request",
        date_stamp, scope.region, scope.service
    );
    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        amz_date,
        credential_scope,
        sha256_hex(canonical_request.as_bytes())
    );

    let key = signing_key(scope.secret_key, date_stamp, scope.region, scope.service)?;
    let signature = hmac(&key, string_to_sign.as_bytes())?;
    let signature_hex: String = signature.iter().map(|b| format!("{:02x}", b)).collect();

    Ok(format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        ALGORITHM, scope.access_key, credential_scope, signed_headers, signature_hex
    ))
}

/// Format a timestamp the way `x-amz-date` expects.
pub fn amz_date(now: DateTime<Utc>) -> String {
    now.format("%Y%m%dT%H%M%SZ").to_string()
}
