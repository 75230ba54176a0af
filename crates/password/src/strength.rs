//! Heuristic password strength scoring.
//!
//! The score is an additive tally of length and character
//! variety minus penalties for obvious patterns. It is a
//! quick indicator for display, not an entropy estimate;
//! see [`crate::measure_entropy`] for that.
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt};

/// Highest possible score.
pub const MAX_SCORE: u8 = 8;

const LENGTH_THRESHOLDS: [usize; 4] = [8, 12, 16, 20];
const UNIQUE_RATIO: f64 = 0.7;
const COMMON_SEQUENCES: [&str; 5] = ["123", "abc", "qwe", "asd", "zxc"];
const COMMON_PASSWORDS: [&str; 4] = ["password", "123456", "qwerty", "admin"];

/// Coarse strength bucket.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    /// Score 0 to 2.
    #[default]
    Weak,
    /// Score 3 to 4.
    Fair,
    /// Score 5 to 6.
    Good,
    /// Score 7 to 8.
    Strong,
}

impl StrengthLevel {
    /// Bucket a clamped score.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Self::Weak,
            3..=4 => Self::Fair,
            5..=6 => Self::Good,
            _ => Self::Strong,
        }
    }

    /// Lowercase name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Strong => "strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Score and level for a password.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct StrengthResult {
    /// Score in the range zero to [`MAX_SCORE`].
    pub score: u8,
    /// Level derived from the score.
    pub level: StrengthLevel,
}

impl StrengthResult {
    fn new(score: u8) -> Self {
        Self {
            score,
            level: StrengthLevel::from_score(score),
        }
    }
}

/// Score a password.
///
/// Total over every input; the empty string scores zero.
pub fn score(password: &str) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult::default();
    }

    let chars: Vec<char> = password.chars().collect();
    let length = chars.len();
    let mut score = LENGTH_THRESHOLDS
        .iter()
        .filter(|threshold| length >= **threshold)
        .count() as i32;

    let classes = [
        chars.iter().any(char::is_ascii_lowercase),
        chars.iter().any(char::is_ascii_uppercase),
        chars.iter().any(char::is_ascii_digit),
        chars.iter().any(|c| !c.is_ascii_alphanumeric()),
    ];
    score += classes.iter().filter(|present| **present).count() as i32;

    let unique: HashSet<&char> = chars.iter().collect();
    if unique.len() as f64 / length as f64 > UNIQUE_RATIO {
        score += 1;
    }

    // Penalties
    if length > 1 && unique.len() == 1 {
        score -= 2;
    }
    let folded = password.to_lowercase();
    if COMMON_SEQUENCES.iter().any(|s| folded.contains(s)) {
        score -= 1;
    }
    if COMMON_PASSWORDS.iter().any(|s| folded.contains(s)) {
        score -= 2;
    }

    StrengthResult::new(score.clamp(0, MAX_SCORE as i32) as u8)
}
