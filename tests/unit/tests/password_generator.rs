use anyhow::Result;
use pws_password::{
    charset::{AMBIGUOUS, SIMILAR},
    generate, generate_with, CharacterPool, Error, GenerationConfig,
    MAX_COUNT, MAX_LENGTH, MIN_LENGTH,
};
use rand::{rngs::StdRng, SeedableRng};
use secrecy::ExposeSecret;

fn assert_from_pool(config: &GenerationConfig, password: &str) -> Result<()> {
    let pool = CharacterPool::from_config(config)?;
    assert_eq!(config.len(), password.chars().count());
    assert!(password.chars().all(|c| pool.contains(c)));
    Ok(())
}

#[test]
fn generator_every_config_draws_from_pool() -> Result<()> {
    for length in [MIN_LENGTH, 16, 64, MAX_LENGTH] {
        for mask in 1u8..16 {
            let config = GenerationConfig::new(length)
                .upper(mask & 1 != 0)
                .lower(mask & 2 != 0)
                .digits(mask & 4 != 0)
                .symbols(mask & 8 != 0)
                .exclude_similar(mask % 3 == 0);
            let password = generate(&config)?;
            assert_from_pool(&config, &password)?;
        }
    }
    Ok(())
}

#[test]
fn generator_no_charset_selected() {
    let config = GenerationConfig::new(16);
    assert_eq!(Err(Error::NoCharsetSelected), generate(&config));
    assert!(matches!(config.one(), Err(Error::NoCharsetSelected)));
    assert!(matches!(config.many(5), Err(Error::NoCharsetSelected)));
}

#[test]
fn generator_charset_exhausted() {
    let config = GenerationConfig::new(12)
        .symbols(true)
        .custom_symbols(Some(SIMILAR.to_owned()))
        .exclude_similar(true);
    assert_eq!(Err(Error::CharsetExhausted), generate(&config));

    let config = GenerationConfig::new(12)
        .symbols(true)
        .custom_symbols(Some(AMBIGUOUS.to_owned()))
        .exclude_ambiguous(true);
    assert_eq!(Err(Error::CharsetExhausted), generate(&config));
}

#[test]
fn generator_digits_without_similar() -> Result<()> {
    let config = GenerationConfig::new_numeric(64).exclude_similar(true);
    let password = generate(&config)?;
    assert!(password.chars().all(|c| ('2'..='9').contains(&c)));
    Ok(())
}

#[test]
fn generator_no_repeats_unique_when_possible() -> Result<()> {
    let config = GenerationConfig::new(13).upper(true).no_repeats(true);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let password = generate_with(&config, &mut rng)?;
        let mut chars: Vec<char> = password.chars().collect();
        chars.sort_unstable();
        chars.dedup();
        assert_eq!(13, chars.len());
    }
    Ok(())
}

#[test]
fn generator_no_repeats_small_pool_terminates() -> Result<()> {
    let config = GenerationConfig::new(MAX_LENGTH).digits(true).no_repeats(true);
    let password = generate(&config)?;
    assert_eq!(MAX_LENGTH, password.len());
    Ok(())
}

#[test]
fn generator_seeded_is_reproducible() -> Result<()> {
    let config = GenerationConfig::default();
    let first = generate_with(&config, &mut StdRng::seed_from_u64(42))?;
    let second = generate_with(&config, &mut StdRng::seed_from_u64(42))?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn generator_many_clamps_count() -> Result<()> {
    let config = GenerationConfig::new_alpha_numeric(8);
    assert_eq!(1, config.many(0)?.len());
    assert_eq!(MAX_COUNT, config.many(MAX_COUNT + 50)?.len());

    for result in config.many(10)? {
        assert!(result.secure_random);
        assert_from_pool(&config, result.password.expose_secret())?;
        assert_eq!(
            pws_password::score(result.password.expose_secret()),
            result.strength
        );
    }
    Ok(())
}

#[test]
fn generator_length_clamped() -> Result<()> {
    let config = GenerationConfig::new_alpha(1);
    assert_eq!(MIN_LENGTH, generate(&config)?.len());
    let config = GenerationConfig::new_alpha(1024);
    assert_eq!(MAX_LENGTH, generate(&config)?.len());
    Ok(())
}
