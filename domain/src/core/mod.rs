//! Core domain concepts shared across the form subdomain.
//!
//! - [`endpoint::Endpoint`] - validated web-hook URL
//! - [`error::DomainError`] - domain-level errors

pub mod endpoint;
pub mod error;
