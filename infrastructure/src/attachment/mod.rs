//! Attachment adapters

mod inspector;

pub use inspector::{AttachmentError, LocalAttachmentInspector};
