//! Options for password generation.
use crate::charset::{Category, SYMBOLS};
use serde::{Deserialize, Serialize};

/// Shortest password that may be generated.
pub const MIN_LENGTH: usize = 4;

/// Longest password that may be generated.
pub const MAX_LENGTH: usize = 128;

/// Length used when none has been chosen.
pub const DEFAULT_LENGTH: usize = 16;

/// Minimum number of passwords in a batch.
pub const MIN_COUNT: usize = 1;

/// Maximum number of passwords in a batch.
pub const MAX_COUNT: usize = 100;

/// Options for password generation.
///
/// The length is always kept within [`MIN_LENGTH`] and
/// [`MAX_LENGTH`]; values outside the range are clamped,
/// including values read from a serialized document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationConfig {
    length: usize,
    #[serde(rename = "uppercase")]
    upper: bool,
    #[serde(rename = "lowercase")]
    lower: bool,
    #[serde(rename = "numbers")]
    digits: bool,
    symbols: bool,
    exclude_similar: bool,
    exclude_ambiguous: bool,
    no_repeats: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_symbols: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new_ascii_printable(DEFAULT_LENGTH)
    }
}

impl GenerationConfig {
    /// Create a config with no character categories enabled.
    pub fn new(length: usize) -> Self {
        Self {
            length: length.clamp(MIN_LENGTH, MAX_LENGTH),
            upper: false,
            lower: false,
            digits: false,
            symbols: false,
            exclude_similar: false,
            exclude_ambiguous: false,
            no_repeats: false,
            custom_symbols: None,
        }
    }

    /// Create with lowercase and uppercase character sets.
    pub fn new_alpha(length: usize) -> Self {
        Self::new(length).upper(true).lower(true)
    }

    /// Create with numeric digits only.
    pub fn new_numeric(length: usize) -> Self {
        Self::new(length).digits(true)
    }

    /// Create with numeric digits, uppercase and lowercase
    /// roman letters.
    pub fn new_alpha_numeric(length: usize) -> Self {
        Self::new(length).upper(true).lower(true).digits(true)
    }

    /// Create with every character category enabled.
    pub fn new_ascii_printable(length: usize) -> Self {
        Self::new_alpha_numeric(length).symbols(true)
    }

    /// Length of the generated password.
    pub fn len(&self) -> usize {
        self.length.clamp(MIN_LENGTH, MAX_LENGTH)
    }

    /// Always false, the length is never below [`MIN_LENGTH`].
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Set the password length.
    pub fn length(mut self, length: usize) -> Self {
        self.length = length.clamp(MIN_LENGTH, MAX_LENGTH);
        self
    }

    /// Toggle uppercase roman letters.
    pub fn upper(mut self, enabled: bool) -> Self {
        self.upper = enabled;
        self
    }

    /// Toggle lowercase roman letters.
    pub fn lower(mut self, enabled: bool) -> Self {
        self.lower = enabled;
        self
    }

    /// Toggle numeric digits.
    pub fn digits(mut self, enabled: bool) -> Self {
        self.digits = enabled;
        self
    }

    /// Toggle punctuation symbols.
    pub fn symbols(mut self, enabled: bool) -> Self {
        self.symbols = enabled;
        self
    }

    /// Remove visually similar characters from the pool.
    pub fn exclude_similar(mut self, enabled: bool) -> Self {
        self.exclude_similar = enabled;
        self
    }

    /// Remove brackets, quotes and other ambiguous punctuation
    /// from the pool.
    pub fn exclude_ambiguous(mut self, enabled: bool) -> Self {
        self.exclude_ambiguous = enabled;
        self
    }

    /// Try to avoid repeating a character within one password.
    pub fn no_repeats(mut self, enabled: bool) -> Self {
        self.no_repeats = enabled;
        self
    }

    /// Replace the built-in symbol set.
    ///
    /// Passing `None` restores the default symbols.
    pub fn custom_symbols(mut self, symbols: Option<String>) -> Self {
        self.custom_symbols = symbols;
        self
    }

    /// Whether a character category is enabled.
    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Upper => self.upper,
            Category::Lower => self.lower,
            Category::Digits => self.digits,
            Category::Symbols => self.symbols,
        }
    }

    /// Whether any character category is enabled.
    pub fn has_category(&self) -> bool {
        Category::ALL.iter().any(|c| self.is_enabled(*c))
    }

    /// Whether similar characters are excluded.
    pub fn excludes_similar(&self) -> bool {
        self.exclude_similar
    }

    /// Whether ambiguous characters are excluded.
    pub fn excludes_ambiguous(&self) -> bool {
        self.exclude_ambiguous
    }

    /// Whether repeated characters should be avoided.
    pub fn avoids_repeats(&self) -> bool {
        self.no_repeats
    }

    /// Symbols used for the symbol category.
    pub fn symbol_set(&self) -> &str {
        self.custom_symbols.as_deref().unwrap_or(SYMBOLS)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;

    #[test]
    fn config_length_clamped() {
        assert_eq!(MIN_LENGTH, GenerationConfig::new(0).len());
        assert_eq!(MAX_LENGTH, GenerationConfig::new(4096).len());
        assert_eq!(
            MAX_LENGTH,
            GenerationConfig::new(8).length(usize::MAX).len()
        );
    }

    #[test]
    fn config_default_enables_all() {
        let config = GenerationConfig::default();
        assert_eq!(DEFAULT_LENGTH, config.len());
        assert!(Category::ALL.iter().all(|c| config.is_enabled(*c)));
        assert!(!config.excludes_similar());
        assert!(!config.avoids_repeats());
    }

    #[test]
    fn config_serde_clamps_length() -> Result<()> {
        let config: GenerationConfig =
            serde_json::from_str(r#"{"length":2,"numbers":true}"#)?;
        assert_eq!(MIN_LENGTH, config.len());
        assert!(config.is_enabled(Category::Digits));
        // Missing fields take the defaults
        assert!(config.is_enabled(Category::Upper));
        Ok(())
    }

    #[test]
    fn config_custom_symbols() {
        let config = GenerationConfig::new(8)
            .symbols(true)
            .custom_symbols(Some("#%".to_owned()));
        assert_eq!("#%", config.symbol_set());
        let config = config.custom_symbols(None);
        assert_eq!(SYMBOLS, config.symbol_set());
    }
}
