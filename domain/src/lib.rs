//! Domain layer for regform
//!
//! This crate contains the registration form's entities, value objects and
//! validation rules. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Form
//!
//! A [`RegistrationForm`] holds the raw values of every input. The
//! [`FormValidator`] runs an ordered rule set over it and reports the first
//! failure as a [`ValidationError`] tied to a [`FormField`].
//!
//! ## Payload
//!
//! A form that passes validation becomes a [`RegistrationPayload`], the JSON
//! body posted to the web-hook [`Endpoint`]. The CV attachment is validated
//! but never part of the payload.

pub mod config;
pub mod core;
pub mod form;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, DeliveryMode, Severity};
pub use core::{
    endpoint::{DEFAULT_ENDPOINT, Endpoint},
    error::DomainError,
};
pub use form::{
    entities::{Attachment, EXPERTISE_OTHER, RegistrationForm},
    field::FormField,
    lifecycle::SubmissionPhase,
    payload::RegistrationPayload,
    validation::{AttachmentPolicy, FormValidator, ValidationError},
};
