//! Console form view
//!
//! Renders form feedback in the terminal. Errors, the submit control and the
//! confirmation overlay are kept as state (the terminal cannot un-print a
//! line), and every change is written to the output sink as it happens.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use regform_application::ports::form_view::{FormView, SUBMIT_LABEL};
use regform_domain::{FormField, ValidationError};
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// Lines of the confirmation overlay, below the check mark
pub const SUCCESS_TITLE: &str = "Registration Received!";
pub const SUCCESS_LINES: [&str; 2] = [
    "Thank you for registering for the Recruitment Drive.",
    "An entry badge will be shared on your email upon approval.",
];

/// Snapshot of what the view currently shows
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Visible error messages, in the order they were attached
    pub errors: Vec<ValidationError>,
    pub submit_enabled: bool,
    pub submit_label: String,
    pub other_expertise_visible: bool,
    /// Whether the other-expertise input is required
    pub other_expertise_required: bool,
    pub success_visible: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            errors: Vec::new(),
            submit_enabled: true,
            submit_label: SUBMIT_LABEL.to_string(),
            other_expertise_visible: false,
            other_expertise_required: false,
            success_visible: false,
        }
    }
}

impl ViewState {
    /// Whether the field currently carries error styling
    pub fn has_error(&self, field: FormField) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

/// Terminal implementation of [`FormView`]
pub struct ConsoleFormView {
    state: Mutex<ViewState>,
    out: Mutex<Box<dyn Write + Send>>,
    spinner: Mutex<Option<ProgressBar>>,
    show_progress: bool,
}

impl ConsoleFormView {
    /// View writing to stdout with a spinner while submitting
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            state: Mutex::new(ViewState::default()),
            out: Mutex::new(out),
            spinner: Mutex::new(None),
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Current state of the view
    pub fn state(&self) -> ViewState {
        self.lock_state().clone()
    }

    /// Close the confirmation overlay
    pub fn dismiss_success(&self) {
        self.lock_state().success_visible = false;
    }

    fn lock_state(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn write_line(&self, line: impl AsRef<str>) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        // Feedback is best effort; a closed stdout must not abort the submission.
        let _ = writeln!(out, "{}", line.as_ref());
        let _ = out.flush();
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start_spinner(&self, label: &str) {
        if !self.show_progress {
            self.write_line(format!("{}", label.dimmed()));
            return;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(label.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.lock().unwrap_or_else(|e| e.into_inner()) = Some(pb);
    }

    fn stop_spinner(&self) {
        if let Some(pb) = self.spinner.lock().unwrap_or_else(|e| e.into_inner()).take() {
            pb.finish_and_clear();
        }
    }

    /// Render the confirmation overlay as a box
    pub fn success_box() -> String {
        let width = 62;
        let rule = "═".repeat(width);
        let mut lines = vec![
            format!("{}", rule.green()),
            format!("{:^width$}", "✓".green().bold()),
            format!("{:^width$}", SUCCESS_TITLE.bold()),
        ];
        for text in SUCCESS_LINES {
            lines.push(format!("{:^width$}", text));
        }
        lines.push(format!("{}", rule.green()));
        lines.join("\n")
    }
}

impl Default for ConsoleFormView {
    fn default() -> Self {
        Self::new()
    }
}

impl FormView for ConsoleFormView {
    fn clear_errors(&self) {
        self.lock_state().errors.clear();
    }

    fn show_field_error(&self, error: &ValidationError) {
        self.lock_state().errors.push(error.clone());
        if error.field.is_form_level() {
            self.write_line(format!("{} {}", "x".red().bold(), error.message.red()));
        } else {
            self.write_line(format!(
                "{} {}: {}",
                "x".red().bold(),
                error.field.label().bold(),
                error.message.red()
            ));
        }
    }

    fn set_submit_state(&self, enabled: bool, label: &str) {
        {
            let mut state = self.lock_state();
            state.submit_enabled = enabled;
            state.submit_label = label.to_string();
        }
        if enabled {
            self.stop_spinner();
        } else {
            self.start_spinner(label);
        }
    }

    fn show_success(&self) {
        self.stop_spinner();
        self.lock_state().success_visible = true;
        self.write_line(Self::success_box());
    }

    fn reset(&self) {
        let mut state = self.lock_state();
        state.other_expertise_visible = false;
        state.other_expertise_required = false;
    }

    fn set_other_expertise_visible(&self, visible: bool) {
        let mut state = self.lock_state();
        state.other_expertise_visible = visible;
        state.other_expertise_required = visible;
    }
}
