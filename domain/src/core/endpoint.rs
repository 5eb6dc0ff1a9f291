//! Web-hook endpoint value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Apps Script web-hook that records registrations in the drive's spreadsheet
pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbxa_BAUa1yL6M6rb7lKJbA1aTUu1T6vibrpFvVIbQ_ZYivBld4_cvASxz9vSYF0vsOPtA/exec";

/// An absolute http(s) URL that registrations are posted to (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Endpoint {
    url: String,
}

impl Endpoint {
    /// Try to create an endpoint, rejecting blank or non-http(s) URLs
    pub fn try_new(url: impl Into<String>) -> Result<Self, DomainError> {
        let url = url.into().trim().to_string();
        if url.is_empty() {
            return Err(DomainError::InvalidEndpoint(
                "endpoint URL is empty".to_string(),
            ));
        }

        let lower = url.to_ascii_lowercase();
        let rest = lower
            .strip_prefix("https://")
            .or_else(|| lower.strip_prefix("http://"));
        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(Self { url }),
            _ => Err(DomainError::InvalidEndpoint(format!(
                "'{}' is not an http(s) URL",
                url
            ))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn is_https(&self) -> bool {
        self.url.to_ascii_lowercase().starts_with("https://")
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl TryFrom<String> for Endpoint {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Endpoint::try_new(value)
    }
}

impl From<Endpoint> for String {
    fn from(endpoint: Endpoint) -> Self {
        endpoint.url
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}
