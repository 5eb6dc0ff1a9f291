//! Domain error types

use crate::form::lifecycle::SubmissionPhase;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid submission transition: {from} -> {to}")]
    InvalidTransition {
        from: SubmissionPhase,
        to: SubmissionPhase,
    },

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl DomainError {
    /// Check if this error represents an illegal lifecycle step
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, DomainError::InvalidTransition { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_display() {
        let error = DomainError::InvalidTransition {
            from: SubmissionPhase::Idle,
            to: SubmissionPhase::Succeeded,
        };
        assert_eq!(
            error.to_string(),
            "Invalid submission transition: idle -> succeeded"
        );
    }

    #[test]
    fn test_is_invalid_transition_check() {
        assert!(
            DomainError::InvalidTransition {
                from: SubmissionPhase::Idle,
                to: SubmissionPhase::Idle,
            }
            .is_invalid_transition()
        );
        assert!(!DomainError::InvalidEndpoint("x".to_string()).is_invalid_transition());
    }
}
