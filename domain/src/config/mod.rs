//! Configuration-related domain types

pub mod delivery_mode;
pub mod validation;

pub use delivery_mode::DeliveryMode;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
