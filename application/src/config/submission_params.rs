//! Submission parameters: how and where a registration is delivered.
//!
//! [`SubmissionParams`] groups the static settings used to build the
//! web-hook adapter and the validator. These are application-layer
//! concerns; the loader in the infrastructure layer produces them from
//! configuration files.

use regform_domain::{AttachmentPolicy, DeliveryMode, Endpoint, FormValidator};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delivery and validation parameters for one submitter instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionParams {
    /// Web-hook the payload is posted to.
    pub endpoint: Endpoint,
    /// Whether the web-hook's answer is inspected.
    pub delivery_mode: DeliveryMode,
    /// Upper bound for the request. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Limits for the optional CV.
    pub attachment: AttachmentPolicy,
}

impl Default for SubmissionParams {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::default(),
            delivery_mode: DeliveryMode::default(),
            timeout: None,
            attachment: AttachmentPolicy::default(),
        }
    }
}

impl SubmissionParams {
    // ==================== Builder Methods ====================

    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_delivery_mode(mut self, mode: DeliveryMode) -> Self {
        self.delivery_mode = mode;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_attachment(mut self, attachment: AttachmentPolicy) -> Self {
        self.attachment = attachment;
        self
    }

    /// Validator enforcing these parameters' attachment limits
    pub fn validator(&self) -> FormValidator {
        FormValidator::new(self.attachment.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_keep_blind_delivery_without_timeout() {
        let params = SubmissionParams::default();
        assert_eq!(params.delivery_mode, DeliveryMode::Opaque);
        assert!(params.timeout.is_none());
        assert_eq!(params.endpoint, Endpoint::default());
    }

    #[test]
    fn test_builder_chain() {
        let endpoint = Endpoint::try_new("http://localhost:9000/hook").unwrap();
        let params = SubmissionParams::default()
            .with_endpoint(endpoint.clone())
            .with_delivery_mode(DeliveryMode::Acknowledged)
            .with_timeout(Some(Duration::from_secs(10)));
        assert_eq!(params.endpoint, endpoint);
        assert_eq!(params.delivery_mode, DeliveryMode::Acknowledged);
        assert_eq!(params.timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_validator_uses_attachment_policy() {
        let policy = AttachmentPolicy {
            allowed_extensions: vec![".odt".to_string()],
            max_size_mib: 2.0,
        };
        let params = SubmissionParams::default().with_attachment(policy.clone());
        assert_eq!(params.validator().attachment_policy(), &policy);
    }
}
