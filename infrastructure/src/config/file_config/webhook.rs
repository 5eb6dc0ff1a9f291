//! Web-hook configuration from TOML (`[webhook]` section)

use regform_domain::{ConfigIssue, ConfigIssueCode, DEFAULT_ENDPOINT, DeliveryMode, Endpoint};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw web-hook configuration from TOML
///
/// # Example
///
/// ```toml
/// [webhook]
/// url = "https://script.google.com/macros/s/.../exec"
/// mode = "opaque"        # "opaque" or "acknowledged"
/// timeout_secs = 30      # omit to wait indefinitely
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWebhookConfig {
    /// Endpoint the payload is posted to
    pub url: String,
    /// Delivery mode: "opaque" or "acknowledged"
    pub mode: String,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl Default for FileWebhookConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            mode: "opaque".to_string(),
            timeout_secs: None,
        }
    }
}

impl FileWebhookConfig {
    /// Parse the URL. An unusable URL is an error; plain http is a warning.
    pub fn parse_endpoint(&self) -> (Option<Endpoint>, Vec<ConfigIssue>) {
        match Endpoint::try_new(self.url.as_str()) {
            Ok(endpoint) => {
                let mut issues = vec![];
                if !endpoint.is_https() {
                    issues.push(ConfigIssue::warning(
                        ConfigIssueCode::InsecureEndpoint,
                        format!(
                            "webhook.url: '{}' is not https; registrations travel unencrypted",
                            endpoint
                        ),
                    ));
                }
                (Some(endpoint), issues)
            }
            Err(e) => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::InvalidEndpoint,
                    format!("webhook.url: {}", e),
                )],
            ),
        }
    }

    /// Parse mode string into DeliveryMode, falling back to opaque.
    pub fn parse_mode(&self) -> (DeliveryMode, Vec<ConfigIssue>) {
        match self.mode.parse::<DeliveryMode>() {
            Ok(mode) => (mode, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "webhook.mode".to_string(),
                        value: self.mode.clone(),
                        valid_values: vec!["opaque".to_string(), "acknowledged".to_string()],
                    },
                    format!(
                        "webhook.mode: unknown value '{}', falling back to 'opaque'",
                        self.mode
                    ),
                );
                (DeliveryMode::default(), vec![issue])
            }
        }
    }

    /// Zero is treated as "no timeout".
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
