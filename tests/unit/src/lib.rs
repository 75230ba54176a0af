//! Shared helpers for the unit tests.
use anyhow::Result;
use pws_history::{History, JsonHistory, MemoryHistory};
use pws_preferences::{JsonPreferences, MemoryPreferences, Preferences};
use std::path::Path;

/// Empty history kept in memory.
pub async fn memory_history() -> Result<History> {
    let mut history = History::new(Box::new(MemoryHistory::new()));
    history.load().await?;
    Ok(history)
}

/// History stored below a directory.
pub async fn json_history(dir: impl AsRef<Path>) -> Result<History> {
    let mut history = History::new(Box::new(JsonHistory::new_dir(dir)));
    history.load().await?;
    Ok(history)
}

/// Empty preferences kept in memory.
pub async fn memory_preferences() -> Result<Preferences> {
    let mut prefs = Preferences::new(Box::new(MemoryPreferences::new()));
    prefs.load().await?;
    Ok(prefs)
}

/// Preferences stored below a directory.
pub async fn json_preferences(dir: impl AsRef<Path>) -> Result<Preferences> {
    let mut prefs = Preferences::new(Box::new(JsonPreferences::new_dir(dir)));
    prefs.load().await?;
    Ok(prefs)
}
