//! Infrastructure layer for regform
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod attachment;
pub mod config;
pub mod webhook;

// Re-export commonly used types
pub use attachment::{AttachmentError, LocalAttachmentInspector};
pub use config::{
    ConfigLoader, ConfigValidationError, FileAttachmentConfig, FileConfig, FileFormConfig,
    FileOutputConfig, FileWebhookConfig,
};
pub use webhook::{HttpWebhookGateway, WebhookError};
