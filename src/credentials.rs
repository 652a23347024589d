//! Catalog API credentials.
//!
//! The core only ever receives a [`Credentials`] value; where it comes from
//! (environment, secrets file) is the caller's concern.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config;
use crate::error::{DealFinderError, Result};

/// Access key, secret key and partner tag for the catalog API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
    pub partner_tag: String,
}

/// On-disk layout of the secrets file (`KEY`, `SECRET`, `TAG`).
#[derive(Debug, Default, Deserialize)]
struct SecretsFile {
    #[serde(rename = "KEY")]
    key: Option<String>,
    #[serde(rename = "SECRET")]
    secret: Option<String>,
    #[serde(rename = "TAG")]
    tag: Option<String>,
}

impl Credentials {
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        partner_tag: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            partner_tag: partner_tag.into(),
        }
    }

    /// Read credentials from the `DEAL_FINDER_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            access_key: required(lookup(config::ENV_ACCESS_KEY), config::ENV_ACCESS_KEY)?,
            secret_key: required(lookup(config::ENV_SECRET_KEY), config::ENV_SECRET_KEY)?,
            partner_tag: required(lookup(config::ENV_PARTNER_TAG), config::ENV_PARTNER_TAG)?,
        })
    }

    /// Read credentials from a TOML secrets file with `KEY`, `SECRET` and `TAG` entries.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DealFinderError::MissingCredential(format!(
                "secrets file {} does not exist",
                path.display()
            )));
        }
        let contents = fs::read_to_string(path)?;
        let secrets: SecretsFile = toml::from_str(&contents)?;
        Ok(Self {
            access_key: required(secrets.key, "KEY")?,
            secret_key: required(secrets.secret, "SECRET")?,
            partner_tag: required(secrets.tag, "TAG")?,
        })
    }

    /// Environment first, then the secrets file at `path` (or the default location).
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        Self::discover_with(|name| std::env::var(name).ok(), path)
    }

    /// [`discover`](Self::discover) with the variable lookup supplied by the caller.
    pub fn discover_with<F>(lookup: F, path: Option<&Path>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_err = match Self::from_lookup(lookup) {
            Ok(creds) => return Ok(creds),
            Err(e) => e,
        };
        let default_path = config::default_secrets_path();
        let path = path.unwrap_or(default_path.as_path());
        Self::from_file(path).map_err(|file_err| {
            DealFinderError::MissingCredential(format!(
                "{}; {}",
                strip_prefix(&env_err),
                strip_prefix(&file_err)
            ))
        })
    }
}

fn required(value: Option<String>, name: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(DealFinderError::MissingCredential(format!("{} is not set", name))),
    }
}

fn strip_prefix(err: &DealFinderError) -> String {
    match err {
        DealFinderError::MissingCredential(detail) => detail.clone(),
        other => other.to_string(),
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("partner_tag", &self.partner_tag)
            .finish()
    }
}
