//! Delivery mode value object

use serde::{Deserialize, Serialize};

/// How much of the web-hook's answer the submitter looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Response is never inspected; success unless the request itself fails
    #[default]
    Opaque,
    /// A non-2xx status counts as a failure
    Acknowledged,
}

impl DeliveryMode {
    pub fn inspects_response(&self) -> bool {
        matches!(self, DeliveryMode::Acknowledged)
    }
}

impl std::str::FromStr for DeliveryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "opaque" | "no-cors" => Ok(DeliveryMode::Opaque),
            "acknowledged" | "ack" => Ok(DeliveryMode::Acknowledged),
            _ => Err(format!("Unknown delivery mode: {}", s)),
        }
    }
}

impl std::fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryMode::Opaque => write!(f, "opaque"),
            DeliveryMode::Acknowledged => write!(f, "acknowledged"),
        }
    }
}
