//! Application-level configuration.
//!
//! - [`SubmissionParams`] - endpoint, delivery mode, timeout, attachment limits
//! - [`FormChoices`] - options offered for the selection fields

pub mod form_choices;
pub mod submission_params;

pub use form_choices::FormChoices;
pub use submission_params::SubmissionParams;
