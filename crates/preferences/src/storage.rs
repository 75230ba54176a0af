//! Storage providers for preferences.
use crate::{Preference, PreferenceMap, PreferencesStorage, Result};
use async_trait::async_trait;
use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

/// File name for the preferences document.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Preferences stored as a JSON document on disc.
///
/// The whole document is rewritten on every change.
#[derive(Debug, Clone)]
pub struct JsonPreferences {
    path: PathBuf,
}

impl JsonPreferences {
    /// Store preferences in the given file.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_owned(),
        }
    }

    /// Store preferences in the standard file below a directory.
    pub fn new_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(PREFERENCES_FILE))
    }

    /// Path to the JSON document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write(&self, preferences: &PreferenceMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let buffer = serde_json::to_vec_pretty(preferences)?;
        tokio::fs::write(&self.path, buffer).await?;
        Ok(())
    }
}

#[async_trait]
impl PreferencesStorage for JsonPreferences {
    async fn load_preferences(&self) -> Result<PreferenceMap> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Ok(Default::default());
        }
        let buffer = tokio::fs::read(&self.path).await?;
        match serde_json::from_slice(&buffer) {
            Ok(prefs) => Ok(prefs),
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %error,
                    "preferences::load_failed, using defaults",
                );
                Ok(Default::default())
            }
        }
    }

    async fn insert_preference(
        &self,
        preferences: &PreferenceMap,
        _key: &str,
        _pref: &Preference,
    ) -> Result<()> {
        self.write(preferences).await
    }

    async fn remove_preference(
        &self,
        preferences: &PreferenceMap,
        _key: &str,
    ) -> Result<()> {
        self.write(preferences).await
    }

    async fn clear_preferences(
        &self,
        preferences: &PreferenceMap,
    ) -> Result<()> {
        self.write(preferences).await
    }
}

/// Preferences kept in memory only.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<PreferenceMap>,
}

impl MemoryPreferences {
    /// Create empty in-memory preferences.
    pub fn new() -> Self {
        Default::default()
    }

    fn store(&self, preferences: &PreferenceMap) {
        let mut values = self
            .values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *values = preferences.clone();
    }
}

#[async_trait]
impl PreferencesStorage for MemoryPreferences {
    async fn load_preferences(&self) -> Result<PreferenceMap> {
        let values = self
            .values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(values.clone())
    }

    async fn insert_preference(
        &self,
        preferences: &PreferenceMap,
        _key: &str,
        _pref: &Preference,
    ) -> Result<()> {
        self.store(preferences);
        Ok(())
    }

    async fn remove_preference(
        &self,
        preferences: &PreferenceMap,
        _key: &str,
    ) -> Result<()> {
        self.store(preferences);
        Ok(())
    }

    async fn clear_preferences(
        &self,
        preferences: &PreferenceMap,
    ) -> Result<()> {
        self.store(preferences);
        Ok(())
    }
}
