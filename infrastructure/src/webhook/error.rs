//! Error types for the web-hook adapter

use thiserror::Error;

/// Result type alias for web-hook adapter setup
pub type Result<T> = std::result::Result<T, WebhookError>;

/// Errors that can occur while preparing the HTTP client
#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}
