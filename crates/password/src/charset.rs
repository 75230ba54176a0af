//! Character sets and the pool built from them.
use crate::{random::random_index, Error, GenerationConfig, Result};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Uppercase roman letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase roman letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Numerical digits.
pub const DIGITS: &str = "0123456789";

/// Default punctuation symbols.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Glyphs that are easily confused with each other.
pub const SIMILAR: &str = "0O1lI|";

/// Punctuation that is awkward to read aloud or type in
/// some contexts.
pub const AMBIGUOUS: &str = "{}[]()/\\'\"`~,;.<>";

/// Character category.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Uppercase letters.
    Upper,
    /// Lowercase letters.
    Lower,
    /// Digits.
    Digits,
    /// Symbols.
    Symbols,
}

impl Category {
    /// All categories in pool order.
    pub const ALL: [Category; 4] =
        [Self::Upper, Self::Lower, Self::Digits, Self::Symbols];
}

/// Ordered pool of eligible characters for one generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterPool(Vec<char>);

impl CharacterPool {
    /// Build the pool for a config.
    ///
    /// Categories are appended in the order of [`Category::ALL`]
    /// and a character that appears in more than one set is only
    /// kept at its first position.
    pub fn from_config(config: &GenerationConfig) -> Result<Self> {
        if !config.has_category() {
            return Err(Error::NoCharsetSelected);
        }

        let mut chars: Vec<char> = Vec::new();
        for category in Category::ALL {
            if !config.is_enabled(category) {
                continue;
            }
            let set = match category {
                Category::Upper => UPPERCASE,
                Category::Lower => LOWERCASE,
                Category::Digits => DIGITS,
                Category::Symbols => config.symbol_set(),
            };
            for c in set.chars() {
                if !chars.contains(&c) {
                    chars.push(c);
                }
            }
        }

        if config.excludes_similar() {
            chars.retain(|c| !SIMILAR.contains(*c));
        }
        if config.excludes_ambiguous() {
            chars.retain(|c| !AMBIGUOUS.contains(*c));
        }

        if chars.is_empty() {
            return Err(Error::CharsetExhausted);
        }
        Ok(Self(chars))
    }

    /// Number of characters in the pool.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the pool contains a character.
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    /// Characters in pool order.
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    /// Draw one character uniformly (modulo bias aside).
    ///
    /// # Panics
    ///
    /// Panics if the pool is empty, which [`CharacterPool::from_config`]
    /// never returns.
    pub fn pick<R: RngCore + ?Sized>(&self, rng: &mut R) -> char {
        self.0[random_index(rng, self.0.len())]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;

    #[test]
    fn pool_category_order() -> Result<()> {
        let pool =
            CharacterPool::from_config(&GenerationConfig::new(8).digits(true).upper(true))?;
        let expected: Vec<char> =
            UPPERCASE.chars().chain(DIGITS.chars()).collect();
        assert_eq!(expected.as_slice(), pool.as_slice());
        Ok(())
    }

    #[test]
    fn pool_full_size() -> Result<()> {
        let pool = CharacterPool::from_config(&GenerationConfig::default())?;
        assert_eq!(26 + 26 + 10 + SYMBOLS.chars().count(), pool.len());
        Ok(())
    }

    #[test]
    fn pool_no_category() {
        let result = CharacterPool::from_config(&GenerationConfig::new(8));
        assert_eq!(Err(Error::NoCharsetSelected), result);
    }

    #[test]
    fn pool_exclude_similar() -> Result<()> {
        let config = GenerationConfig::default().exclude_similar(true);
        let pool = CharacterPool::from_config(&config)?;
        for c in SIMILAR.chars() {
            assert!(!pool.contains(c), "{c} should be excluded");
        }
        // '|' is the only similar symbol
        assert_eq!(26 + 26 + 10 + SYMBOLS.len() - SIMILAR.len(), pool.len());
        Ok(())
    }

    #[test]
    fn pool_exclude_ambiguous() -> Result<()> {
        let config = GenerationConfig::new(8)
            .symbols(true)
            .exclude_ambiguous(true);
        let pool = CharacterPool::from_config(&config)?;
        assert!(pool.contains('!'));
        assert!(!pool.contains('['));
        assert!(!pool.contains('<'));
        Ok(())
    }

    #[test]
    fn pool_custom_symbols_deduplicated() -> Result<()> {
        let config = GenerationConfig::new(8)
            .lower(true)
            .symbols(true)
            .custom_symbols(Some("a##!".to_owned()));
        let pool = CharacterPool::from_config(&config)?;
        assert_eq!(28, pool.len());
        assert_eq!(Some(&'#'), pool.as_slice().get(26));
        Ok(())
    }

    #[test]
    fn pool_exhausted() {
        let config = GenerationConfig::new(8)
            .symbols(true)
            .custom_symbols(Some(SIMILAR.to_owned()))
            .exclude_similar(true);
        assert_eq!(
            Err(Error::CharsetExhausted),
            CharacterPool::from_config(&config)
        );
    }
}
