//! Form choices from TOML (`[form]` section)

use regform_application::FormChoices;
use regform_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw selection options from TOML
///
/// # Example
///
/// ```toml
/// [form]
/// qualifications = ["Diploma", "Bachelor", "Master"]
/// expertise = ["finance", "audit", "other"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFormConfig {
    pub qualifications: Vec<String>,
    pub expertise: Vec<String>,
}

impl Default for FileFormConfig {
    fn default() -> Self {
        let choices = FormChoices::default();
        Self {
            qualifications: choices.qualifications,
            expertise: choices.expertise,
        }
    }
}

impl FileFormConfig {
    /// Convert to choices, warning about lists that can never be satisfied.
    pub fn to_choices(&self) -> (FormChoices, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        for (field, values) in [
            ("form.qualifications", &self.qualifications),
            ("form.expertise", &self.expertise),
        ] {
            if values.iter().all(|v| v.trim().is_empty()) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyChoices {
                        field: field.to_string(),
                    },
                    format!("{}: no options configured; free text will be asked instead", field),
                ));
            }
        }

        let clean = |values: &[String]| -> Vec<String> {
            values
                .iter()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .collect()
        };

        (
            FormChoices {
                qualifications: clean(&self.qualifications),
                expertise: clean(&self.expertise),
            },
            issues,
        )
    }
}
