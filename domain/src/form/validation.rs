//! Field-level validation rules for the registration form.
//!
//! Rules run in a fixed order and stop at the first failure, so the user
//! is only ever shown one error at a time:
//!
//! 1. full name has at least two words
//! 2. phone is exactly ten digits
//! 3. qualification is selected
//! 4. expertise is selected
//! 5. other expertise is filled in when expertise is `"other"`
//! 6. the optional CV has an allowed extension and size
//! 7. transaction ID has at least eight characters
//!
//! # Examples
//!
//! ```
//! use regform_domain::{FormField, FormValidator, RegistrationForm};
//!
//! let form = RegistrationForm {
//!     full_name: "John".to_string(),
//!     ..Default::default()
//! };
//! let err = FormValidator::default().validate(&form).unwrap_err();
//! assert_eq!(err.field, FormField::FullName);
//! ```

use super::entities::{Attachment, RegistrationForm};
use super::field::FormField;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const MSG_FULL_NAME: &str = "Please enter your full name";
pub const MSG_PHONE: &str = "Please enter a valid 10-digit phone number";
pub const MSG_QUALIFICATION: &str = "Please select your qualification";
pub const MSG_EXPERTISE: &str = "Please select your area of expertise";
pub const MSG_OTHER_EXPERTISE: &str = "Please specify your area of expertise";
pub const MSG_CV_TYPE: &str = "Please upload a PDF, DOC, or DOCX file";
pub const MSG_CV_SIZE: &str = "File size should be less than 5MB";
pub const MSG_TRANSACTION_ID: &str =
    "Please enter a valid M-PESA Transaction ID (minimum 8 characters)";

/// Minimum number of words in a full name
pub const MIN_NAME_WORDS: usize = 2;

/// Minimum length of the M-PESA transaction ID, after trimming
pub const MIN_TRANSACTION_ID_LEN: usize = 8;

// ASCII digits only; `\d` would also accept other Unicode digits.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

/// A failed rule: which field, and what to tell the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: FormField,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Limits applied to the optional CV attachment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentPolicy {
    /// Allowed extensions, lowercase with leading dot
    pub allowed_extensions: Vec<String>,
    /// Largest accepted size in MiB (inclusive)
    pub max_size_mib: f64,
}

impl Default for AttachmentPolicy {
    fn default() -> Self {
        Self {
            allowed_extensions: vec![".pdf".to_string(), ".doc".to_string(), ".docx".to_string()],
            max_size_mib: 5.0,
        }
    }
}

impl AttachmentPolicy {
    /// Extension is checked before size.
    pub fn check(&self, attachment: &Attachment) -> Result<(), ValidationError> {
        let extension = attachment.extension();
        if !self
            .allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(&extension))
        {
            return Err(ValidationError::new(FormField::Cv, MSG_CV_TYPE));
        }

        if attachment.size_mib() > self.max_size_mib {
            return Err(ValidationError::new(FormField::Cv, MSG_CV_SIZE));
        }

        Ok(())
    }
}

/// Runs the ordered rule set over a [`RegistrationForm`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValidator {
    attachment: AttachmentPolicy,
}

impl FormValidator {
    pub fn new(attachment: AttachmentPolicy) -> Self {
        Self { attachment }
    }

    pub fn attachment_policy(&self) -> &AttachmentPolicy {
        &self.attachment
    }

    /// Validate the form, returning the first failed rule.
    pub fn validate(&self, form: &RegistrationForm) -> Result<(), ValidationError> {
        check_full_name(&form.full_name)?;
        check_phone(&form.phone)?;
        check_selected(&form.qualification, FormField::Qualification, MSG_QUALIFICATION)?;
        check_selected(&form.expertise, FormField::Expertise, MSG_EXPERTISE)?;

        if form.requires_other_expertise() && form.other_expertise.trim().is_empty() {
            return Err(ValidationError::new(
                FormField::OtherExpertise,
                MSG_OTHER_EXPERTISE,
            ));
        }

        if let Some(cv) = &form.cv {
            self.attachment.check(cv)?;
        }

        check_transaction_id(&form.transaction_id)
    }
}

pub fn check_full_name(value: &str) -> Result<(), ValidationError> {
    if value.split_whitespace().count() < MIN_NAME_WORDS {
        return Err(ValidationError::new(FormField::FullName, MSG_FULL_NAME));
    }
    Ok(())
}

pub fn check_phone(value: &str) -> Result<(), ValidationError> {
    if !PHONE_PATTERN.is_match(value.trim()) {
        return Err(ValidationError::new(FormField::Phone, MSG_PHONE));
    }
    Ok(())
}

pub fn check_transaction_id(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() < MIN_TRANSACTION_ID_LEN {
        return Err(ValidationError::new(
            FormField::TransactionId,
            MSG_TRANSACTION_ID,
        ));
    }
    Ok(())
}

fn check_selected(value: &str, field: FormField, message: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(field, message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::entities::EXPERTISE_OTHER;
    use proptest::prelude::*;

    // ==================== Helper ====================

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            full_name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "0712345678".to_string(),
            qualification: "Bachelor".to_string(),
            experience: "3 years".to_string(),
            expertise: "finance".to_string(),
            other_expertise: String::new(),
            transaction_id: "QWE12345".to_string(),
            cv: None,
        }
    }

    fn field_of(form: &RegistrationForm) -> Option<FormField> {
        FormValidator::default().validate(form).err().map(|e| e.field)
    }

    // ==================== Accepted ====================

    #[test]
    fn valid_form_passes() {
        assert!(FormValidator::default().validate(&valid_form()).is_ok());
    }

    #[test]
    fn allowed_attachment_passes() {
        let mut form = valid_form();
        form.cv = Some(Attachment::new("John_Doe.DOCX", 1024));
        assert!(FormValidator::default().validate(&form).is_ok());
    }

    #[test]
    fn attachment_of_exactly_max_size_passes() {
        let mut form = valid_form();
        form.cv = Some(Attachment::new("cv.pdf", 5 * 1024 * 1024));
        assert!(FormValidator::default().validate(&form).is_ok());
    }

    #[test]
    fn transaction_id_of_exactly_eight_passes() {
        let mut form = valid_form();
        form.transaction_id = "  ABCDEFGH  ".to_string();
        assert!(FormValidator::default().validate(&form).is_ok());
    }

    #[test]
    fn other_expertise_filled_passes() {
        let mut form = valid_form();
        form.expertise = EXPERTISE_OTHER.to_string();
        form.other_expertise = "Actuarial science".to_string();
        assert!(FormValidator::default().validate(&form).is_ok());
    }

    // ==================== Rejected ====================

    #[test]
    fn single_word_name_rejected() {
        let mut form = valid_form();
        form.full_name = "  John  ".to_string();
        let err = FormValidator::default().validate(&form).unwrap_err();
        assert_eq!(err.field, FormField::FullName);
        assert_eq!(err.message, MSG_FULL_NAME);
    }

    #[test]
    fn phone_with_separators_rejected() {
        for phone in ["071-234-5678", "+254712345678", "071234567", "07123456789", ""] {
            let mut form = valid_form();
            form.phone = phone.to_string();
            assert_eq!(field_of(&form), Some(FormField::Phone), "phone {:?}", phone);
        }
    }

    #[test]
    fn phone_with_non_ascii_digits_rejected() {
        let mut form = valid_form();
        form.phone = "٠١٢٣٤٥٦٧٨٩".to_string();
        assert_eq!(field_of(&form), Some(FormField::Phone));
    }

    #[test]
    fn missing_selections_rejected_in_order() {
        let mut form = valid_form();
        form.qualification.clear();
        form.expertise.clear();
        assert_eq!(field_of(&form), Some(FormField::Qualification));

        form.qualification = "Diploma".to_string();
        assert_eq!(field_of(&form), Some(FormField::Expertise));
    }

    #[test]
    fn other_expertise_blank_rejected() {
        let mut form = valid_form();
        form.expertise = EXPERTISE_OTHER.to_string();
        form.other_expertise = "   ".to_string();
        let err = FormValidator::default().validate(&form).unwrap_err();
        assert_eq!(err.field, FormField::OtherExpertise);
        assert_eq!(err.message, MSG_OTHER_EXPERTISE);
    }

    #[test]
    fn disallowed_extension_rejected_before_size() {
        let mut form = valid_form();
        form.cv = Some(Attachment::new("cv.png", 50 * 1024 * 1024));
        let err = FormValidator::default().validate(&form).unwrap_err();
        assert_eq!(err.field, FormField::Cv);
        assert_eq!(err.message, MSG_CV_TYPE);
    }

    #[test]
    fn oversized_attachment_rejected() {
        let mut form = valid_form();
        form.cv = Some(Attachment::new("cv.pdf", 5 * 1024 * 1024 + 1));
        let err = FormValidator::default().validate(&form).unwrap_err();
        assert_eq!(err.message, MSG_CV_SIZE);
    }

    #[test]
    fn short_transaction_id_rejected() {
        let mut form = valid_form();
        form.transaction_id = " QWE1234 ".to_string();
        let err = FormValidator::default().validate(&form).unwrap_err();
        assert_eq!(err.field, FormField::TransactionId);
        assert_eq!(err.message, MSG_TRANSACTION_ID);
    }

    #[test]
    fn first_failure_wins() {
        let form = RegistrationForm::default();
        assert_eq!(field_of(&form), Some(FormField::FullName));
    }

    #[test]
    fn custom_policy_applies() {
        let validator = FormValidator::new(AttachmentPolicy {
            allowed_extensions: vec![".txt".to_string()],
            max_size_mib: 1.0,
        });
        let mut form = valid_form();
        form.cv = Some(Attachment::new("cv.txt", 1024));
        assert!(validator.validate(&form).is_ok());

        form.cv = Some(Attachment::new("cv.pdf", 1024));
        assert_eq!(validator.validate(&form).unwrap_err().message, MSG_CV_TYPE);
    }

    // ==================== Properties ====================

    proptest! {
        #[test]
        fn names_with_fewer_than_two_words_rejected(word in "[A-Za-z]{0,12}", pad in " {0,3}") {
            let name = format!("{pad}{word}{pad}");
            prop_assert!(check_full_name(&name).is_err());
        }

        #[test]
        fn names_with_two_words_accepted(a in "[A-Za-z]{1,12}", b in "[A-Za-z]{1,12}", gap in "[ \t]{1,4}") {
            let name = format!("{a}{gap}{b}");
            prop_assert!(check_full_name(&name).is_ok());
        }

        #[test]
        fn non_ten_digit_phones_rejected(phone in "[0-9]{0,9}|[0-9]{11,14}|[0-9]{4}[ -][0-9]{5}") {
            prop_assert!(check_phone(&phone).is_err());
        }

        #[test]
        fn ten_digit_phones_accepted(phone in "[0-9]{10}") {
            prop_assert!(check_phone(&phone).is_ok());
        }

        #[test]
        fn short_transaction_ids_rejected(id in "[A-Z0-9]{0,7}", pad in " {0,4}") {
            let value = format!("{pad}{id}{pad}");
            prop_assert!(check_transaction_id(&value).is_err());
        }

        #[test]
        fn disallowed_extensions_rejected_regardless_of_size(
            ext in "(png|jpg|txt|exe|zip)",
            size in 0u64..(20 * 1024 * 1024),
        ) {
            let attachment = Attachment::new(format!("cv.{ext}"), size);
            let err = AttachmentPolicy::default().check(&attachment).unwrap_err();
            prop_assert_eq!(err.message, MSG_CV_TYPE);
        }

        #[test]
        fn oversized_attachments_rejected_regardless_of_extension(
            name in "cv\\.(pdf|doc|docx|png)",
            extra in 1u64..(20 * 1024 * 1024),
        ) {
            let attachment = Attachment::new(name, 5 * 1024 * 1024 + extra);
            prop_assert!(AttachmentPolicy::default().check(&attachment).is_err());
        }
    }
}
