//! Web-hook gateway port
//!
//! Defines the interface for delivering a registration to the remote
//! endpoint.

use async_trait::async_trait;
use regform_domain::{Endpoint, RegistrationPayload};
use thiserror::Error;

/// Errors that can occur while delivering a payload
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Only reported when the response is inspected
    #[error("Endpoint answered with HTTP {status}")]
    Rejected { status: u16 },

    #[error("Timeout")]
    Timeout,

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl GatewayError {
    /// Whether the request may have reached the endpoint
    pub fn may_have_been_delivered(&self) -> bool {
        matches!(self, GatewayError::Rejected { .. } | GatewayError::Timeout)
    }
}

/// Gateway for web-hook delivery
///
/// This port defines how the application layer hands a payload to the
/// outside world. Implementations (adapters) live in the infrastructure
/// layer.
#[async_trait]
pub trait WebhookGateway: Send + Sync {
    /// Post the payload once. `Ok(())` means the call did not fail; whether
    /// the endpoint's answer is examined depends on the adapter.
    async fn deliver(&self, payload: &RegistrationPayload) -> Result<(), GatewayError>;

    /// Where payloads are sent
    fn endpoint(&self) -> &Endpoint;
}
