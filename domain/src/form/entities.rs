//! Registration form entities

use serde::{Deserialize, Serialize};

/// Expertise selection value that unlocks the free-text field
pub const EXPERTISE_OTHER: &str = "other";

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// An optional file attached to the form (the CV)
///
/// Only the name and size are known to the form; the content is never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub size_bytes: u64,
}

impl Attachment {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Lowercased extension including the leading dot.
    ///
    /// Everything from the last `.` onwards. A name without a dot yields the
    /// whole name, which never matches an allowed extension.
    pub fn extension(&self) -> String {
        let start = self.name.rfind('.').unwrap_or(0);
        self.name[start..].to_lowercase()
    }

    /// Size in MiB (bytes / 1024 / 1024)
    pub fn size_mib(&self) -> f64 {
        self.size_bytes as f64 / BYTES_PER_MIB
    }
}

/// Raw values of every registration form input, as entered
///
/// This is transient: built for one submission attempt, cleared on success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub qualification: String,
    pub experience: String,
    pub expertise: String,
    pub other_expertise: String,
    pub transaction_id: String,
    /// Optional CV; validated but never transmitted
    #[serde(skip)]
    pub cv: Option<Attachment>,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the expertise selection asks for free text
    pub fn requires_other_expertise(&self) -> bool {
        self.expertise == EXPERTISE_OTHER
    }

    /// Free text to transmit: the entered value when expertise is "other",
    /// otherwise empty.
    pub fn effective_other_expertise(&self) -> &str {
        if self.requires_other_expertise() {
            &self.other_expertise
        } else {
            ""
        }
    }

    /// Clear every input, including the attachment
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
