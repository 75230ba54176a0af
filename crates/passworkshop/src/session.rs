use crate::Result;
use pws_history::{History, JsonHistory};
use pws_i18n::Language;
use pws_preferences::{JsonPreferences, Preferences, Settings};
use std::path::{Path, PathBuf};

/// Stored state for one invocation.
///
/// Owns the preferences and history documents below the
/// data directory along with the settings read from them.
#[derive(Debug)]
pub struct Session {
    data_dir: PathBuf,
    language: Language,
    /// Stored preferences.
    pub preferences: Preferences,
    /// Settings read from the preferences.
    pub settings: Settings,
    /// Password history.
    pub history: History,
}

impl Session {
    /// Load preferences and history from a data directory.
    ///
    /// A language given on the command line wins over the
    /// stored language for this invocation only.
    pub async fn open(
        data_dir: impl AsRef<Path>,
        language: Option<Language>,
    ) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_owned();
        tokio::fs::create_dir_all(&data_dir).await?;

        let mut preferences =
            Preferences::new(Box::new(JsonPreferences::new_dir(&data_dir)));
        preferences.load().await?;
        let settings = Settings::load(&preferences);

        let mut history =
            History::new(Box::new(JsonHistory::new_dir(&data_dir)));
        history.load().await?;

        let language = language.unwrap_or(settings.language);
        tracing::debug!(
            data_dir = %data_dir.display(),
            language = %language,
            history = history.len(),
            "session::open",
        );

        Ok(Self {
            data_dir,
            language,
            preferences,
            settings,
            history,
        })
    }

    /// Directory holding the stored documents.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Display language for this invocation.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Translate a key in the display language.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.language.t(key)
    }

    /// Persist the current settings.
    pub async fn save_settings(&mut self) -> Result<()> {
        self.settings.save(&mut self.preferences).await?;
        Ok(())
    }

    /// Remove stored settings and fall back to the defaults.
    pub async fn reset_settings(&mut self) -> Result<()> {
        Settings::reset(&mut self.preferences).await?;
        self.settings = Settings::load(&self.preferences);
        self.language = self.settings.language;
        Ok(())
    }

    /// Change and persist the display language.
    pub async fn set_language(&mut self, language: Language) -> Result<()> {
        self.settings.language = language;
        self.language = language;
        self.save_settings().await
    }
}
