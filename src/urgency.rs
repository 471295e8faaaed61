use serde::{Deserialize, Serialize};
use std::fmt;

/// Keywords that flag a message as urgent when they occur anywhere in it.
pub const TRIGGERS: [&str; 5] = ["help", "emergency", "fire", "danger", "hurt"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive substring scan over [`TRIGGERS`].
///
/// No word boundaries are applied, so "firefly" counts as "fire".
pub fn assess(text: &str) -> Urgency {
    let normalized = text.to_lowercase();
    if TRIGGERS.iter().any(|trigger| normalized.contains(trigger)) {
        Urgency::High
    } else {
        Urgency::Low
    }
}
