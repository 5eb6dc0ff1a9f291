//! Configuration validation issues.
//!
//! Loaders report problems as structured [`ConfigIssue`]s instead of failing
//! on the first one, so the caller can log warnings and abort only on errors.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// Web-hook URL is blank or not http(s).
    InvalidEndpoint,
    /// Web-hook URL uses plain http.
    InsecureEndpoint,
    /// Attachment size limit is zero, negative or not a number.
    InvalidAttachmentLimit,
    /// Allowed extension lacks its leading dot, e.g. `pdf` instead of `.pdf`.
    InvalidExtension { value: String },
    /// A string value does not name any known variant.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A choice list is empty, so the selection can never be made.
    EmptyChoices { field: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    /// True if any issue in the slice is fatal
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}
