//! Form field identifiers
//!
//! Each variant maps to the element identifier the surrounding markup uses,
//! so any front-end (terminal, web, test double) can address the same field.

use serde::{Deserialize, Serialize};

/// A named element of the registration form (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FullName,
    Email,
    Phone,
    Qualification,
    Experience,
    Expertise,
    OtherExpertise,
    /// CV attachment input
    Cv,
    TransactionId,
    /// The form as a whole; used for form-level messages
    RegistrationForm,
    /// Container that shows or hides the other-expertise input
    OtherExpertiseGroup,
}

impl FormField {
    /// Fields a user fills in, in display order.
    pub const INPUTS: [FormField; 9] = [
        FormField::FullName,
        FormField::Email,
        FormField::Phone,
        FormField::Qualification,
        FormField::Experience,
        FormField::Expertise,
        FormField::OtherExpertise,
        FormField::Cv,
        FormField::TransactionId,
    ];

    /// Element identifier in the page markup
    pub fn id(&self) -> &'static str {
        match self {
            FormField::FullName => "fullName",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Qualification => "qualification",
            FormField::Experience => "experience",
            FormField::Expertise => "expertise",
            FormField::OtherExpertise => "otherExpertise",
            FormField::Cv => "cv",
            FormField::TransactionId => "transactionId",
            FormField::RegistrationForm => "registrationForm",
            FormField::OtherExpertiseGroup => "otherExpertiseGroup",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            FormField::FullName => "Full name",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::Qualification => "Qualification",
            FormField::Experience => "Experience",
            FormField::Expertise => "Area of expertise",
            FormField::OtherExpertise => "Other expertise",
            FormField::Cv => "CV",
            FormField::TransactionId => "M-PESA transaction ID",
            FormField::RegistrationForm => "Registration form",
            FormField::OtherExpertiseGroup => "Other expertise",
        }
    }

    /// Whether this is a form-level target rather than an input
    pub fn is_form_level(&self) -> bool {
        matches!(self, FormField::RegistrationForm)
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            FormField::RegistrationForm,
            FormField::OtherExpertiseGroup,
        ]
        .into_iter()
        .chain(FormField::INPUTS)
        .find(|field| field.id() == s)
        .ok_or_else(|| format!("Unknown form field: {}", s))
    }
}
