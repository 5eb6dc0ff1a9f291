//! Form view port
//!
//! The form view is the typed stand-in for the page markup: it renders
//! field errors, the submit control, the success overlay and the
//! other-expertise group. Use cases drive it; they never touch a concrete
//! front-end.
//!
//! # Built-in Implementations
//!
//! - [`NoFormView`] - Ignores every call (headless use, dry runs)
//!
//! For terminal use, see `ConsoleFormView` in the presentation layer.

use regform_domain::{FormField, ValidationError};

/// Label of the submit control when idle
pub const SUBMIT_LABEL: &str = "Submit Registration";

/// Label of the submit control while a request is in flight
pub const SUBMITTING_LABEL: &str = "Submitting...";

/// Form-level message shown when delivery fails
pub const SUBMISSION_FAILED_MESSAGE: &str =
    "There was an error submitting your registration. Please try again.";

/// Port for rendering form feedback.
///
/// All methods take `&self`; implementations keep their own state behind
/// interior mutability so a view can be shared with the use case while a
/// request is in flight.
pub trait FormView: Send + Sync {
    /// Remove error styling and every error message
    fn clear_errors(&self);

    /// Mark a field as invalid and show the message beneath it
    fn show_field_error(&self, error: &ValidationError);

    /// Show a message for the form as a whole
    fn show_form_error(&self, message: &str) {
        self.show_field_error(&ValidationError::new(FormField::RegistrationForm, message));
    }

    /// Enable or disable the submit control and set its label
    fn set_submit_state(&self, enabled: bool, label: &str);

    /// Show the dismissible confirmation overlay
    fn show_success(&self);

    /// Clear every displayed input value
    fn reset(&self);

    /// Show (and require) or hide the other-expertise input
    fn set_other_expertise_visible(&self, visible: bool);
}

/// No-op view for when feedback rendering is not needed
#[derive(Debug, Default)]
pub struct NoFormView;

impl FormView for NoFormView {
    fn clear_errors(&self) {}
    fn show_field_error(&self, _error: &ValidationError) {}
    fn set_submit_state(&self, _enabled: bool, _label: &str) {}
    fn show_success(&self) {}
    fn reset(&self) {}
    fn set_other_expertise_visible(&self, _visible: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CapturingView {
        errors: Mutex<Vec<ValidationError>>,
    }

    impl FormView for CapturingView {
        fn clear_errors(&self) {}
        fn show_field_error(&self, error: &ValidationError) {
            self.errors.lock().unwrap().push(error.clone());
        }
        fn set_submit_state(&self, _enabled: bool, _label: &str) {}
        fn show_success(&self) {}
        fn reset(&self) {}
        fn set_other_expertise_visible(&self, _visible: bool) {}
    }

    #[test]
    fn test_form_error_targets_whole_form() {
        let view = CapturingView::default();
        view.show_form_error(SUBMISSION_FAILED_MESSAGE);

        let errors = view.errors.lock().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, FormField::RegistrationForm);
        assert_eq!(errors[0].message, SUBMISSION_FAILED_MESSAGE);
    }
}
