use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DealFinderError, Result};

// ---------------------------------------------------------------------------
// Marketplace — Country-specific endpoint settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marketplace {
    #[default]
    Jp,
    Us,
    Uk,
    De,
}

impl Marketplace {
    pub fn country_code(&self) -> &'static str {
        match self {
            Self::Jp => "JP",
            Self::Us => "US",
            Self::Uk => "UK",
            Self::De => "DE",
        }
    }

    /// API host for signed search requests.
    pub fn host(&self) -> &'static str {
        match self {
            Self::Jp => "webservices.amazon.co.jp",
            Self::Us => "webservices.amazon.com",
            Self::Uk => "webservices.amazon.co.uk",
            Self::De => "webservices.amazon.de",
        }
    }

    /// Signing region for the host.
    pub fn region(&self) -> &'static str {
        match self {
            Self::Jp => "us-west-2",
            Self::Us => "us-east-1",
            Self::Uk | Self::De => "eu-west-1",
        }
    }

    /// Value of the `Marketplace` request field.
    pub fn domain(&self) -> &'static str {
        match self {
            Self::Jp => "www.amazon.co.jp",
            Self::Us => "www.amazon.com",
            Self::Uk => "www.amazon.co.uk",
            Self::De => "www.amazon.de",
        }
    }

    pub fn currency_symbol(&self) -> &'static str {
        match self {
            Self::Jp => "¥",
            Self::Us => "$",
            Self::Uk => "£",
            Self::De => "€",
        }
    }

    /// Domain parameter of the price-history chart endpoint.
    pub fn chart_domain(&self) -> &'static str {
        match self {
            Self::Jp => "co.jp",
            Self::Us => "com",
            Self::Uk => "co.uk",
            Self::De => "de",
        }
    }
}

impl FromStr for Marketplace {
    type Err = DealFinderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "JP" => Ok(Self::Jp),
            "US" => Ok(Self::Us),
            "UK" | "GB" => Ok(Self::Uk),
            "DE" => Ok(Self::De),
            _ => Err(DealFinderError::InvalidArgument(format!(
                "Unsupported marketplace: {}",
                s
            ))),
        }
    }
}
