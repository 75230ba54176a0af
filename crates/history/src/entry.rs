use pws_password::{score, StrengthResult};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Generated password with the time it was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The password.
    pub password: String,
    /// When the password was generated.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Length in characters.
    pub length: usize,
    /// Strength computed when the entry was created.
    pub strength: StrengthResult,
}

impl HistoryEntry {
    /// Create an entry for a password generated now.
    pub fn new(password: impl Into<String>) -> Self {
        Self::new_at(password, OffsetDateTime::now_utc())
    }

    /// Create an entry with an explicit timestamp.
    pub fn new_at(password: impl Into<String>, timestamp: OffsetDateTime) -> Self {
        let password = password.into();
        Self {
            length: password.chars().count(),
            strength: score(&password),
            timestamp,
            password,
        }
    }
}
