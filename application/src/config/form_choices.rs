//! Selectable options offered by front-ends for the two choice fields.

use regform_domain::EXPERTISE_OTHER;
use serde::{Deserialize, Serialize};

/// Options for the qualification and expertise selections.
///
/// Validation only requires a non-empty selection; these lists drive what a
/// front-end offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormChoices {
    pub qualifications: Vec<String>,
    pub expertise: Vec<String>,
}

impl Default for FormChoices {
    fn default() -> Self {
        Self {
            qualifications: ["Certificate", "Diploma", "Bachelor", "Master", "PhD"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            expertise: ["finance", "accounting", "audit", "tax", EXPERTISE_OTHER]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl FormChoices {
    /// Whether the expertise list lets the user reach the free-text field
    pub fn offers_other(&self) -> bool {
        self.expertise.iter().any(|e| e == EXPERTISE_OTHER)
    }
}
