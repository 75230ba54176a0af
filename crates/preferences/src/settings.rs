//! Typed view of the generator and interface settings.
use crate::{Error, Preference, Preferences, Result};
use pws_i18n::Language;
use pws_password::{GenerationConfig, DEFAULT_LENGTH, MAX_COUNT, MIN_COUNT};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

const LENGTH: &str = "generator.length";
const UPPERCASE: &str = "generator.uppercase";
const LOWERCASE: &str = "generator.lowercase";
const NUMBERS: &str = "generator.numbers";
const SYMBOLS: &str = "generator.symbols";
const EXCLUDE_SIMILAR: &str = "generator.excludeSimilar";
const EXCLUDE_AMBIGUOUS: &str = "generator.excludeAmbiguous";
const NO_REPEATS: &str = "generator.noRepeats";
const CUSTOM_SYMBOLS: &str = "generator.customSymbols";
const COUNT: &str = "generator.count";
const LANGUAGE: &str = "ui.language";
const THEME: &str = "ui.theme";

const KEYS: [&str; 12] = [
    LENGTH,
    UPPERCASE,
    LOWERCASE,
    NUMBERS,
    SYMBOLS,
    EXCLUDE_SIMILAR,
    EXCLUDE_AMBIGUOUS,
    NO_REPEATS,
    CUSTOM_SYMBOLS,
    COUNT,
    LANGUAGE,
    THEME,
];

/// Color theme.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// Switch to the other theme.
    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Translation key for the theme name.
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Light => "theme_light",
            Self::Dark => "theme_dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(Error::UnknownTheme(s.to_owned())),
        }
    }
}

/// Settings remembered between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Generator options.
    pub config: GenerationConfig,
    /// Number of passwords per batch.
    pub count: usize,
    /// Interface language.
    pub language: Language,
    /// Color theme.
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config: GenerationConfig::new_ascii_printable(DEFAULT_LENGTH),
            count: MIN_COUNT,
            language: Language::default(),
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Read settings from preferences.
    ///
    /// Missing values use the defaults and values of the wrong
    /// type are logged and ignored, so loading never fails.
    pub fn load(prefs: &Preferences) -> Self {
        let defaults = Self::default();
        let config = defaults.config.clone();

        let length = number(prefs, LENGTH)
            .map(|n| n as usize)
            .unwrap_or(config.len());
        let custom_symbols = prefs
            .get_unchecked(CUSTOM_SYMBOLS)
            .and_then(Preference::as_str)
            .map(str::to_owned);

        let config = GenerationConfig::new(length)
            .upper(flag(prefs, UPPERCASE, true))
            .lower(flag(prefs, LOWERCASE, true))
            .digits(flag(prefs, NUMBERS, true))
            .symbols(flag(prefs, SYMBOLS, true))
            .exclude_similar(flag(prefs, EXCLUDE_SIMILAR, false))
            .exclude_ambiguous(flag(prefs, EXCLUDE_AMBIGUOUS, false))
            .no_repeats(flag(prefs, NO_REPEATS, false))
            .custom_symbols(custom_symbols);

        let count = number(prefs, COUNT)
            .map(|n| (n as usize).clamp(MIN_COUNT, MAX_COUNT))
            .unwrap_or(defaults.count);

        let language = string(prefs, LANGUAGE)
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.language);
        let theme = string(prefs, THEME)
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.theme);

        Self {
            config,
            count,
            language,
            theme,
        }
    }

    /// Write every setting to preferences.
    pub async fn save(&self, prefs: &mut Preferences) -> Result<()> {
        let config = &self.config;
        prefs.insert(LENGTH.to_owned(), config.len().into()).await?;
        for (key, category) in [
            (UPPERCASE, pws_password::Category::Upper),
            (LOWERCASE, pws_password::Category::Lower),
            (NUMBERS, pws_password::Category::Digits),
            (SYMBOLS, pws_password::Category::Symbols),
        ] {
            prefs
                .insert(key.to_owned(), config.is_enabled(category).into())
                .await?;
        }
        prefs
            .insert(EXCLUDE_SIMILAR.to_owned(), config.excludes_similar().into())
            .await?;
        prefs
            .insert(
                EXCLUDE_AMBIGUOUS.to_owned(),
                config.excludes_ambiguous().into(),
            )
            .await?;
        prefs
            .insert(NO_REPEATS.to_owned(), config.avoids_repeats().into())
            .await?;

        let defaults = GenerationConfig::default();
        if config.symbol_set() != defaults.symbol_set() {
            prefs
                .insert(
                    CUSTOM_SYMBOLS.to_owned(),
                    config.symbol_set().to_owned().into(),
                )
                .await?;
        } else if prefs.get_unchecked(CUSTOM_SYMBOLS).is_some() {
            prefs.remove(CUSTOM_SYMBOLS).await?;
        }

        prefs
            .insert(
                COUNT.to_owned(),
                self.count.clamp(MIN_COUNT, MAX_COUNT).into(),
            )
            .await?;
        prefs
            .insert(LANGUAGE.to_owned(), self.language.tag().to_owned().into())
            .await?;
        prefs
            .insert(THEME.to_owned(), self.theme.to_string().into())
            .await?;

        tracing::debug!(length = config.len(), "settings::save");
        Ok(())
    }

    /// Remove every stored setting so the defaults apply.
    pub async fn reset(prefs: &mut Preferences) -> Result<()> {
        for key in KEYS {
            if prefs.get_unchecked(key).is_some() {
                prefs.remove(key).await?;
            }
        }
        Ok(())
    }
}

fn flag(prefs: &Preferences, key: &str, default: bool) -> bool {
    match prefs.get_unchecked(key) {
        Some(pref) => pref.as_bool().unwrap_or_else(|| {
            tracing::warn!(key = %key, "settings::expected_bool");
            default
        }),
        None => default,
    }
}

fn number(prefs: &Preferences, key: &str) -> Option<f64> {
    let pref = prefs.get_unchecked(key)?;
    let value = pref.as_number();
    if value.is_none() {
        tracing::warn!(key = %key, "settings::expected_number");
    }
    value.filter(|n| n.is_finite() && *n >= 0.0)
}

fn string<'a>(prefs: &'a Preferences, key: &str) -> Option<&'a str> {
    let pref = prefs.get_unchecked(key)?;
    let value = pref.as_str();
    if value.is_none() {
        tracing::warn!(key = %key, "settings::expected_string");
    }
    value
}
