//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod submit_registration;
pub mod toggle_other_expertise;
