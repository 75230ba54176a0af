#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Password generation and strength scoring for PassWorkshop.
//!
//! The crate is a stateless core: a [`GenerationConfig`] goes in and
//! a password string comes out, and [`score`] turns any string into a
//! [`StrengthResult`]. Persistence, clipboard access and presentation
//! live in the other workspace crates.
//!
//! ```
//! use pws_password::{generate, score, GenerationConfig};
//!
//! let config = GenerationConfig::new(20).lower(true).digits(true);
//! let password = generate(&config).unwrap();
//! assert_eq!(20, password.chars().count());
//!
//! let strength = score(&password);
//! assert!(strength.score <= 8);
//! ```

pub mod charset;
mod config;
mod error;
mod generator;
mod random;
mod strength;

pub use charset::{Category, CharacterPool};
pub use config::{
    GenerationConfig, DEFAULT_LENGTH, MAX_COUNT, MAX_LENGTH, MIN_COUNT,
    MIN_LENGTH,
};
pub use error::Error;
pub use generator::{generate, generate_with, PasswordResult, MAX_ATTEMPTS};
pub use random::{random_index, RandomSource};
pub use strength::{score, StrengthLevel, StrengthResult, MAX_SCORE};

pub use zxcvbn;

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Measure the entropy in a password.
///
/// This is the zxcvbn estimate and is independent of the
/// heuristic returned by [`score`].
pub fn measure_entropy(
    password: &str,
    user_inputs: &[&str],
) -> zxcvbn::Entropy {
    zxcvbn::zxcvbn(password, user_inputs)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn entropy_weak_and_strong() {
        let weak = measure_entropy("password", &[]);
        assert_eq!(0, u8::from(weak.score()));

        let strong = measure_entropy("vK7#qL2@wN9$rT5&mB3!", &[]);
        assert!(strong.guesses_log10() > weak.guesses_log10());

        let reexported: zxcvbn::Entropy = zxcvbn::zxcvbn("password", &[]);
        assert_eq!(weak.guesses(), reexported.guesses());
    }
}
