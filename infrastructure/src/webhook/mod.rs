//! Web-hook adapter that delivers registrations over HTTP.

pub mod error;
pub mod gateway;

pub use error::WebhookError;
pub use gateway::HttpWebhookGateway;
