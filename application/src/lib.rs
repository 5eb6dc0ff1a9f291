//! Application layer for regform
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{FormChoices, SubmissionParams};
pub use ports::{
    form_view::{FormView, NoFormView, SUBMISSION_FAILED_MESSAGE, SUBMIT_LABEL, SUBMITTING_LABEL},
    webhook_gateway::{GatewayError, WebhookGateway},
};
pub use use_cases::submit_registration::{
    SubmissionOutcome, SubmitRegistrationError, SubmitRegistrationUseCase,
};
pub use use_cases::toggle_other_expertise::ToggleOtherExpertiseUseCase;
