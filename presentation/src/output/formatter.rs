//! Payload output formatting

use colored::Colorize;
use regform_domain::RegistrationPayload;

/// Formats payloads for dry runs and confirmations
pub struct PayloadFormatter;

impl PayloadFormatter {
    /// Format as pretty JSON (the exact body that is or would be posted)
    pub fn format_json(payload: &RegistrationPayload) -> String {
        serde_json::to_string_pretty(payload).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format as an aligned field summary
    pub fn format_text(payload: &RegistrationPayload) -> String {
        let rows = [
            ("Full name", payload.full_name.as_str()),
            ("Email", payload.email.as_str()),
            ("Phone", payload.phone.as_str()),
            ("Qualification", payload.qualification.as_str()),
            ("Expertise", payload.expertise.as_str()),
            ("Other expertise", payload.other_expertise.as_str()),
            ("Experience", payload.experience.as_str()),
            ("Transaction ID", payload.transaction_id.as_str()),
            ("Timestamp", payload.timestamp.as_str()),
        ];

        let mut output = format!("{}\n", "Registration".cyan().bold());
        for (label, value) in rows {
            let value = if value.is_empty() { "-" } else { value };
            output.push_str(&format!("  {:<16} {}\n", format!("{}:", label).dimmed(), value));
        }
        output
    }
}
