//! Attachment configuration from TOML (`[attachment]` section)

use regform_domain::{AttachmentPolicy, ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw attachment limits from TOML
///
/// # Example
///
/// ```toml
/// [attachment]
/// max_size_mib = 5.0
/// allowed_extensions = [".pdf", ".doc", ".docx"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAttachmentConfig {
    pub max_size_mib: f64,
    pub allowed_extensions: Vec<String>,
}

impl Default for FileAttachmentConfig {
    fn default() -> Self {
        let policy = AttachmentPolicy::default();
        Self {
            max_size_mib: policy.max_size_mib,
            allowed_extensions: policy.allowed_extensions,
        }
    }
}

impl FileAttachmentConfig {
    /// Convert to a policy. Invalid limits fall back to the defaults and
    /// are reported as errors; extensions are lowercased.
    pub fn to_policy(&self) -> (AttachmentPolicy, Vec<ConfigIssue>) {
        let defaults = AttachmentPolicy::default();
        let mut issues = Vec::new();

        let max_size_mib = if self.max_size_mib.is_finite() && self.max_size_mib > 0.0 {
            self.max_size_mib
        } else {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidAttachmentLimit,
                format!(
                    "attachment.max_size_mib: {} must be a positive number",
                    self.max_size_mib
                ),
            ));
            defaults.max_size_mib
        };

        let mut allowed_extensions = Vec::with_capacity(self.allowed_extensions.len());
        for ext in &self.allowed_extensions {
            if ext.starts_with('.') && ext.len() > 1 {
                allowed_extensions.push(ext.to_lowercase());
            } else {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::InvalidExtension { value: ext.clone() },
                    format!(
                        "attachment.allowed_extensions: '{}' must start with '.', ignoring it",
                        ext
                    ),
                ));
            }
        }

        (
            AttachmentPolicy {
                allowed_extensions,
                max_size_mib,
            },
            issues,
        )
    }
}
