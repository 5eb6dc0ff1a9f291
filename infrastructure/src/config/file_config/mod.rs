//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types with
//! the issues found along the way.

mod attachment;
mod form;
mod output;
mod webhook;

pub use attachment::FileAttachmentConfig;
pub use form::FileFormConfig;
pub use output::FileOutputConfig;
pub use webhook::FileWebhookConfig;

use regform_application::{FormChoices, SubmissionParams};
use regform_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when the configuration has at least one error-level issue
#[derive(Error, Debug)]
#[error("Invalid configuration: {}", join_messages(.issues))]
pub struct ConfigValidationError {
    pub issues: Vec<ConfigIssue>,
}

fn join_messages(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(|i| i.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Delivery settings
    pub webhook: FileWebhookConfig,
    /// CV limits
    pub attachment: FileAttachmentConfig,
    /// Selection options
    pub form: FileFormConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. The web-hook URL and delivery mode
    /// 2. Attachment limits and extensions
    /// 3. Selection option lists
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.webhook.parse_endpoint().1);
        issues.extend(self.webhook.parse_mode().1);
        issues.extend(self.attachment.to_policy().1);
        issues.extend(self.form.to_choices().1);
        issues
    }

    /// Build submission parameters, failing on any error-level issue.
    ///
    /// Warning-level issues are returned alongside so the caller can log
    /// them.
    pub fn to_submission_params(
        &self,
    ) -> Result<(SubmissionParams, Vec<ConfigIssue>), ConfigValidationError> {
        let issues = self.validate();
        if ConfigIssue::has_errors(&issues) {
            return Err(ConfigValidationError { issues });
        }

        let (endpoint, _) = self.webhook.parse_endpoint();
        let Some(endpoint) = endpoint else {
            return Err(ConfigValidationError { issues });
        };

        let params = SubmissionParams::default()
            .with_endpoint(endpoint)
            .with_delivery_mode(self.webhook.parse_mode().0)
            .with_timeout(self.webhook.timeout())
            .with_attachment(self.attachment.to_policy().0);

        Ok((params, issues))
    }

    pub fn to_form_choices(&self) -> FormChoices {
        self.form.to_choices().0
    }
}
