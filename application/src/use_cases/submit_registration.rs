//! Submit Registration use case.
//!
//! Validates a [`RegistrationForm`] and, if every rule passes, posts it to
//! the web-hook exactly once.
//!
//! ```text
//! clear errors ─► validate ──(fail)──► show field error ─► Rejected
//!                    │
//!                    └─(pass)─► disable submit ─► deliver ─┬─► success overlay + reset ─► Submitted
//!                                                          └─► form error ───────────────► Failed
//!                               (submit re-enabled in both cases)
//! ```

use crate::config::SubmissionParams;
use crate::ports::form_view::{
    FormView, SUBMISSION_FAILED_MESSAGE, SUBMIT_LABEL, SUBMITTING_LABEL,
};
use crate::ports::webhook_gateway::{GatewayError, WebhookGateway};
use chrono::{DateTime, Utc};
use regform_domain::{
    DomainError, FormValidator, RegistrationForm, RegistrationPayload, SubmissionPhase,
    ValidationError,
};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors that prevent a submission attempt from running at all.
#[derive(Error, Debug)]
pub enum SubmitRegistrationError {
    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

/// Result of one submission attempt.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// Delivered (or, in opaque mode, not known to have failed)
    Submitted(RegistrationPayload),
    /// A rule failed; nothing was sent
    Rejected(ValidationError),
    /// The network call failed
    Failed(GatewayError),
}

impl SubmissionOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionOutcome::Submitted(_))
    }

    /// Phase the attempt ended in
    pub fn phase(&self) -> SubmissionPhase {
        match self {
            SubmissionOutcome::Submitted(_) => SubmissionPhase::Succeeded,
            SubmissionOutcome::Rejected(_) => SubmissionPhase::Rejected,
            SubmissionOutcome::Failed(_) => SubmissionPhase::Failed,
        }
    }
}

/// Use case for validating and submitting a registration.
///
/// Holds the submit control's state: while one attempt runs, further
/// attempts are refused with [`SubmitRegistrationError::AlreadySubmitting`].
pub struct SubmitRegistrationUseCase {
    gateway: Arc<dyn WebhookGateway>,
    validator: FormValidator,
    clock: fn() -> DateTime<Utc>,
    phase: Mutex<SubmissionPhase>,
}

impl SubmitRegistrationUseCase {
    pub fn new(gateway: Arc<dyn WebhookGateway>) -> Self {
        Self {
            gateway,
            validator: FormValidator::default(),
            clock: Utc::now,
            phase: Mutex::new(SubmissionPhase::Idle),
        }
    }

    /// Create with validation limits taken from submission parameters.
    pub fn with_params(mut self, params: &SubmissionParams) -> Self {
        self.validator = params.validator();
        self
    }

    pub fn with_validator(mut self, validator: FormValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Override the timestamp source.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Current phase of the submit control
    pub fn phase(&self) -> SubmissionPhase {
        *self.lock_phase()
    }

    /// Validate the form without sending anything.
    ///
    /// Clears previous errors and shows the new one, exactly like the first
    /// half of [`execute`](Self::execute). Useful for dry runs.
    pub fn check(
        &self,
        form: &RegistrationForm,
        view: &dyn FormView,
    ) -> Result<RegistrationPayload, ValidationError> {
        view.clear_errors();
        if let Err(e) = self.validator.validate(form) {
            view.show_field_error(&e);
            return Err(e);
        }
        Ok(RegistrationPayload::from_form(form, (self.clock)()))
    }

    /// Run one submission attempt.
    ///
    /// On success the form is reset; on rejection or failure it is left
    /// untouched so the user can correct it and retry.
    pub async fn execute(
        &self,
        form: &mut RegistrationForm,
        view: &dyn FormView,
    ) -> Result<SubmissionOutcome, SubmitRegistrationError> {
        let attempt = self.begin()?;

        let payload = match self.check(form, view) {
            Ok(payload) => payload,
            Err(e) => {
                info!("Registration rejected at {}: {}", e.field, e.message);
                attempt.advance(SubmissionPhase::Rejected)?;
                return Ok(SubmissionOutcome::Rejected(e));
            }
        };

        attempt.advance(SubmissionPhase::Submitting)?;
        view.set_submit_state(false, SUBMITTING_LABEL);
        debug!(
            "Delivering registration for {} to {}",
            payload.email,
            self.gateway.endpoint()
        );

        let outcome = match self.gateway.deliver(&payload).await {
            Ok(()) => {
                info!("Registration submitted at {}", payload.timestamp);
                view.show_success();
                form.reset();
                view.reset();
                SubmissionOutcome::Submitted(payload)
            }
            Err(e) => {
                error!("Error: {}", e);
                view.show_form_error(SUBMISSION_FAILED_MESSAGE);
                SubmissionOutcome::Failed(e)
            }
        };

        view.set_submit_state(true, SUBMIT_LABEL);
        attempt.advance(outcome.phase())?;
        Ok(outcome)
    }

    fn begin(&self) -> Result<Attempt<'_>, SubmitRegistrationError> {
        let mut phase = self.lock_phase();
        if *phase != SubmissionPhase::Idle {
            debug!("Submission refused while {}", *phase);
            return Err(SubmitRegistrationError::AlreadySubmitting);
        }
        *phase = phase.transition(SubmissionPhase::Validating)?;
        Ok(Attempt { owner: self })
    }

    fn lock_phase(&self) -> MutexGuard<'_, SubmissionPhase> {
        // The phase is a plain Copy value; a poisoned lock still holds a usable one.
        self.phase.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// An attempt in progress. Returns the use case to `Idle` when dropped,
/// including when the caller abandons the future mid-flight.
struct Attempt<'a> {
    owner: &'a SubmitRegistrationUseCase,
}

impl Attempt<'_> {
    fn advance(&self, next: SubmissionPhase) -> Result<(), DomainError> {
        let mut phase = self.owner.lock_phase();
        *phase = phase.transition(next)?;
        Ok(())
    }
}

impl Drop for Attempt<'_> {
    fn drop(&mut self) {
        *self.owner.lock_phase() = SubmissionPhase::Idle;
    }
}
