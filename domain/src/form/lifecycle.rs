//! Submission lifecycle
//!
//! ```text
//! Idle ──► Validating ──► Rejected ──────────────► Idle
//!                   └───► Submitting ──► Succeeded ─► Idle
//!                                   └──► Failed ────► Idle
//! ```

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Where a single submission attempt currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    /// A rule failed; nothing was sent
    Rejected,
    /// Request in flight; the submit control is disabled
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    /// Move to `next`, or report an illegal transition.
    pub fn transition(self, next: SubmissionPhase) -> Result<SubmissionPhase, DomainError> {
        use SubmissionPhase::*;

        let allowed = matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Rejected)
                | (Validating, Submitting)
                | (Submitting, Succeeded)
                | (Submitting, Failed)
                | (Rejected, Idle)
                | (Succeeded, Idle)
                | (Failed, Idle)
        );

        if allowed {
            Ok(next)
        } else {
            Err(DomainError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }

    /// Whether the submit control must be disabled in this phase
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmissionPhase::Validating | SubmissionPhase::Submitting)
    }

    /// Whether the attempt has reached an outcome
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionPhase::Rejected | SubmissionPhase::Succeeded | SubmissionPhase::Failed
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::Validating => "validating",
            SubmissionPhase::Rejected => "rejected",
            SubmissionPhase::Submitting => "submitting",
            SubmissionPhase::Succeeded => "succeeded",
            SubmissionPhase::Failed => "failed",
        }
    }
}

impl std::fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
