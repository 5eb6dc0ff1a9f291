//! Registration form: fields, values, rules and the outbound payload.
//!
//! - [`field::FormField`] - element identifiers of the form markup
//! - [`entities::RegistrationForm`] - raw input values plus optional CV
//! - [`validation::FormValidator`] - ordered, short-circuiting rule set
//! - [`payload::RegistrationPayload`] - JSON body sent to the web-hook
//! - [`lifecycle::SubmissionPhase`] - state of one submission attempt

pub mod entities;
pub mod field;
pub mod lifecycle;
pub mod payload;
pub mod validation;
