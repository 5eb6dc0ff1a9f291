//! Outbound JSON payload

use super::entities::RegistrationForm;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// The JSON body posted to the web-hook (Value Object)
///
/// Values are copied exactly as entered. The CV is not part of the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub qualification: String,
    pub expertise: String,
    pub other_expertise: String,
    pub experience: String,
    pub transaction_id: String,
    /// ISO-8601 UTC, millisecond precision, e.g. `2025-01-31T09:15:00.000Z`
    pub timestamp: String,
}

impl RegistrationPayload {
    /// Build the payload from a validated form, stamped with `submitted_at`.
    pub fn from_form(form: &RegistrationForm, submitted_at: DateTime<Utc>) -> Self {
        Self {
            full_name: form.full_name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            qualification: form.qualification.clone(),
            expertise: form.expertise.clone(),
            other_expertise: form.effective_other_expertise().to_string(),
            experience: form.experience.clone(),
            transaction_id: form.transaction_id.clone(),
            timestamp: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
