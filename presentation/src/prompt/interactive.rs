//! Interactive form filling.
//!
//! Asks for each field in form order. Values already present (from flags)
//! are offered as defaults and kept when the answer is blank. Choosing an
//! expertise goes through [`ToggleOtherExpertiseUseCase`], so the follow-up
//! question only appears for `"other"`.
//!
//! ```text
//! Full name [John Doe]:
//! Qualification
//!   1) Certificate
//!   2) Diploma
//!   3) Bachelor
//! > 3
//! ```

use colored::Colorize;
use regform_application::ports::form_view::FormView;
use regform_application::{FormChoices, ToggleOtherExpertiseUseCase};
use regform_domain::{FormField, RegistrationForm};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Errors while reading answers
#[derive(Error, Debug)]
pub enum PromptError {
    /// Input ended before the form was complete (e.g. Ctrl+D)
    #[error("Input closed before the form was complete")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Terminal questionnaire over any reader/writer pair
pub struct InteractivePrompt<R, W> {
    input: R,
    output: W,
    choices: FormChoices,
    toggle: ToggleOtherExpertiseUseCase,
}

impl<R: BufRead, W: Write> InteractivePrompt<R, W> {
    pub fn new(input: R, output: W, choices: FormChoices) -> Self {
        Self {
            input,
            output,
            choices,
            toggle: ToggleOtherExpertiseUseCase::new(),
        }
    }

    /// Fill the form in place. Returns the CV path if one was given.
    pub fn fill(
        &mut self,
        form: &mut RegistrationForm,
        cv_default: Option<PathBuf>,
        view: &dyn FormView,
    ) -> Result<Option<PathBuf>, PromptError> {
        writeln!(self.output, "{}", "Recruitment Drive Registration".cyan().bold())?;
        writeln!(self.output, "{}", "Press Enter to keep the value in brackets.".dimmed())?;

        form.full_name = self.ask(FormField::FullName, &form.full_name)?;
        form.email = self.ask(FormField::Email, &form.email)?;
        form.phone = self.ask(FormField::Phone, &form.phone)?;

        let qualifications = self.choices.qualifications.clone();
        form.qualification =
            self.ask_choice(FormField::Qualification, &qualifications, &form.qualification)?;

        form.experience = self.ask(FormField::Experience, &form.experience)?;

        let expertise_options = self.choices.expertise.clone();
        let expertise = self.ask_choice(FormField::Expertise, &expertise_options, &form.expertise)?;
        if self.toggle.select(form, expertise, view) {
            form.other_expertise = self.ask(FormField::OtherExpertise, &form.other_expertise)?;
        }

        let cv_shown = cv_default
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let cv = self.ask(FormField::Cv, &cv_shown)?;
        let cv = (!cv.trim().is_empty()).then(|| PathBuf::from(cv.trim()));

        form.transaction_id = self.ask(FormField::TransactionId, &form.transaction_id)?;

        Ok(cv)
    }

    /// Block until the user acknowledges the confirmation overlay.
    pub fn wait_for_dismiss(&mut self) -> Result<(), PromptError> {
        write!(self.output, "{} ", "[ Close ]".bold())?;
        self.output.flush()?;
        self.read_line().map(|_| ())
    }

    fn ask(&mut self, field: FormField, current: &str) -> Result<String, PromptError> {
        if current.is_empty() {
            write!(self.output, "{}: ", field.label().bold())?;
        } else {
            write!(
                self.output,
                "{} [{}]: ",
                field.label().bold(),
                current.dimmed()
            )?;
        }
        self.output.flush()?;

        let answer = self.read_line()?;
        if answer.trim().is_empty() {
            Ok(current.to_string())
        } else {
            Ok(answer)
        }
    }

    /// Numbered choice; a number picks an option, other text is taken as is.
    fn ask_choice(
        &mut self,
        field: FormField,
        options: &[String],
        current: &str,
    ) -> Result<String, PromptError> {
        if options.is_empty() {
            return self.ask(field, current);
        }

        writeln!(self.output, "{}", field.label().bold())?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, option)?;
        }
        if current.is_empty() {
            write!(self.output, "> ")?;
        } else {
            write!(self.output, "[{}] > ", current.dimmed())?;
        }
        self.output.flush()?;

        let answer = self.read_line()?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(current.to_string());
        }
        match answer.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => Ok(options[n - 1].clone()),
            _ => Ok(answer.to_string()),
        }
    }

    /// One line without its terminator. EOF cancels the prompt.
    fn read_line(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Cancelled);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regform_application::NoFormView;
    use regform_domain::EXPERTISE_OTHER;
    use std::io::Cursor;

    fn prompt(answers: &str) -> InteractivePrompt<Cursor<Vec<u8>>, Vec<u8>> {
        colored::control::set_override(false);
        InteractivePrompt::new(
            Cursor::new(answers.as_bytes().to_vec()),
            Vec::new(),
            FormChoices::default(),
        )
    }

    #[test]
    fn test_fill_all_fields() {
        // name, email, phone, qualification #3, experience, expertise #1, cv, transaction
        let answers = "John Doe\njohn@example.com\n0712345678\n3\n2 years\n1\n\nQWE12345\n";
        let mut prompt = prompt(answers);
        let mut form = RegistrationForm::default();

        let cv = prompt.fill(&mut form, None, &NoFormView).unwrap();

        assert!(cv.is_none());
        assert_eq!(form.full_name, "John Doe");
        assert_eq!(form.qualification, "Bachelor");
        assert_eq!(form.expertise, "finance");
        assert_eq!(form.other_expertise, "");
        assert_eq!(form.transaction_id, "QWE12345");
    }

    #[test]
    fn test_other_expertise_asked_only_for_other() {
        // expertise "other" by number (5th option) then free text
        let answers = "John Doe\n\n0712345678\n1\n\n5\nActuarial science\ncv.pdf\nQWE12345\n";
        let mut prompt = prompt(answers);
        let mut form = RegistrationForm::default();

        let cv = prompt.fill(&mut form, None, &NoFormView).unwrap();

        assert_eq!(form.expertise, EXPERTISE_OTHER);
        assert_eq!(form.other_expertise, "Actuarial science");
        assert_eq!(cv, Some(PathBuf::from("cv.pdf")));
    }

    #[test]
    fn test_blank_answers_keep_defaults() {
        let mut form = RegistrationForm {
            full_name: "Jane Roe".to_string(),
            qualification: "Master".to_string(),
            expertise: "audit".to_string(),
            other_expertise: "stale".to_string(),
            transaction_id: "ABCDEFGH".to_string(),
            ..Default::default()
        };
        let mut prompt = prompt("\n\n\n\n\n\n\n\n");

        let cv = prompt
            .fill(&mut form, Some(PathBuf::from("cv.docx")), &NoFormView)
            .unwrap();

        assert_eq!(form.full_name, "Jane Roe");
        assert_eq!(form.qualification, "Master");
        assert_eq!(form.expertise, "audit");
        // Hidden other-expertise input is cleared
        assert_eq!(form.other_expertise, "");
        assert_eq!(cv, Some(PathBuf::from("cv.docx")));
    }

    #[test]
    fn test_free_text_choice_and_out_of_range_number() {
        let answers = "John Doe\n\n0712345678\nHigher National Diploma\n\n9\n\nQWE12345\n";
        let mut prompt = prompt(answers);
        let mut form = RegistrationForm::default();

        prompt.fill(&mut form, None, &NoFormView).unwrap();

        assert_eq!(form.qualification, "Higher National Diploma");
        assert_eq!(form.expertise, "9");
    }

    #[test]
    fn test_eof_cancels() {
        let mut prompt = prompt("John Doe\n");
        let mut form = RegistrationForm::default();
        let err = prompt.fill(&mut form, None, &NoFormView).unwrap_err();
        assert!(matches!(err, PromptError::Cancelled));
    }

    #[test]
    fn test_wait_for_dismiss() {
        let mut prompt = prompt("\n");
        assert!(prompt.wait_for_dismiss().is_ok());
        assert!(matches!(
            prompt.wait_for_dismiss(),
            Err(PromptError::Cancelled)
        ));
    }
}
