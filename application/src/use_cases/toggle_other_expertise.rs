//! Toggle Other Expertise use case.
//!
//! Reacts to a change of the expertise selection: the other-expertise input
//! is shown and required only while expertise is `"other"`. Hiding it also
//! clears whatever was typed into it.

use crate::ports::form_view::FormView;
use regform_domain::RegistrationForm;
use tracing::debug;

/// Use case for keeping the other-expertise input in sync with expertise.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleOtherExpertiseUseCase;

impl ToggleOtherExpertiseUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Apply a new expertise selection and update the view.
    ///
    /// Returns whether the other-expertise input is now visible.
    pub fn select(
        &self,
        form: &mut RegistrationForm,
        expertise: impl Into<String>,
        view: &dyn FormView,
    ) -> bool {
        form.expertise = expertise.into();
        self.execute(form, view)
    }

    /// Sync visibility with the form's current expertise.
    pub fn execute(&self, form: &mut RegistrationForm, view: &dyn FormView) -> bool {
        let visible = form.requires_other_expertise();
        if !visible {
            form.other_expertise.clear();
        }
        debug!(
            "Expertise '{}': other expertise {}",
            form.expertise,
            if visible { "shown" } else { "hidden" }
        );
        view.set_other_expertise_visible(visible);
        visible
    }
}
