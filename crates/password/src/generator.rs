//! Utility for generating random passwords.
use crate::{
    score, CharacterPool, GenerationConfig, RandomSource, Result,
    StrengthResult, MAX_COUNT, MIN_COUNT,
};
use rand::RngCore;
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashSet;

/// Draws allowed per position when avoiding repeats.
pub const MAX_ATTEMPTS: usize = 100;

/// Generated password result.
#[derive(Debug, Clone)]
pub struct PasswordResult {
    /// The generated password.
    pub password: SecretString,
    /// Heuristic strength of the password.
    pub strength: StrengthResult,
    /// Whether the password was drawn from a CSPRNG.
    pub secure_random: bool,
}

/// Generate one password using the default random source.
pub fn generate(config: &GenerationConfig) -> Result<String> {
    let mut rng = RandomSource::new();
    generate_with(config, &mut rng)
}

/// Generate one password drawing from the given random source.
///
/// When repeats are to be avoided each position is redrawn up to
/// [`MAX_ATTEMPTS`] times; if every draw collides the last one is
/// kept. Uniqueness is therefore best effort and a pool smaller
/// than the requested length still terminates.
pub fn generate_with<R: RngCore + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<String> {
    let pool = CharacterPool::from_config(config)?;
    let length = config.len();
    let mut password = String::with_capacity(length);
    let mut used = HashSet::with_capacity(length);

    for _ in 0..length {
        let mut c = pool.pick(rng);
        if config.avoids_repeats() {
            let mut attempts = 1;
            while used.contains(&c) && attempts < MAX_ATTEMPTS {
                c = pool.pick(rng);
                attempts += 1;
            }
            used.insert(c);
        }
        password.push(c);
    }

    Ok(password)
}

impl GenerationConfig {
    /// Generate a random password and score it.
    pub fn one(&self) -> Result<PasswordResult> {
        let mut rng = RandomSource::new();
        self.one_with(&mut rng)
    }

    /// Generate multiple passwords.
    ///
    /// The count is clamped to [`MIN_COUNT`] and [`MAX_COUNT`].
    pub fn many(&self, count: usize) -> Result<Vec<PasswordResult>> {
        let count = count.clamp(MIN_COUNT, MAX_COUNT);
        let mut rng = RandomSource::new();
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            results.push(self.one_with(&mut rng)?);
        }
        tracing::debug!(count = results.len(), "password::generate_many");
        Ok(results)
    }

    fn one_with(&self, rng: &mut RandomSource) -> Result<PasswordResult> {
        let password = SecretString::from(generate_with(self, rng)?);
        let strength = score(password.expose_secret());
        Ok(PasswordResult {
            password,
            strength,
            secure_random: rng.is_secure(),
        })
    }
}
