use crate::{HistoryEntry, Result};
use async_trait::async_trait;
use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

/// File name for the history document.
pub const HISTORY_FILE: &str = "history.json";

/// Boxed storage provider.
pub type HistoryStorageProvider =
    Box<dyn HistoryStorage + Send + Sync + 'static>;

/// Storage provider for the password history.
#[async_trait]
pub trait HistoryStorage {
    /// Load entries, newest first.
    async fn load_history(&self) -> Result<Vec<HistoryEntry>>;

    /// Replace the stored entries.
    async fn save_history(&self, entries: &[HistoryEntry]) -> Result<()>;
}

/// History stored as a JSON array on disc.
#[derive(Debug, Clone)]
pub struct JsonHistory {
    path: PathBuf,
}

impl JsonHistory {
    /// Store history in the given file.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_owned(),
        }
    }

    /// Store history in the standard file below a directory.
    pub fn new_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(HISTORY_FILE))
    }

    /// Path to the JSON document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl HistoryStorage for JsonHistory {
    async fn load_history(&self) -> Result<Vec<HistoryEntry>> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Ok(Vec::new());
        }
        let buffer = tokio::fs::read(&self.path).await?;
        match serde_json::from_slice(&buffer) {
            Ok(entries) => Ok(entries),
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %error,
                    "history::load_failed, starting empty",
                );
                Ok(Vec::new())
            }
        }
    }

    async fn save_history(&self, entries: &[HistoryEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let buffer = serde_json::to_vec_pretty(entries)?;
        tokio::fs::write(&self.path, buffer).await?;
        Ok(())
    }
}

/// History kept in memory only.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl MemoryHistory {
    /// Create an empty in-memory history.
    pub fn new() -> Self {
        Default::default()
    }
}

#[async_trait]
impl HistoryStorage for MemoryHistory {
    async fn load_history(&self) -> Result<Vec<HistoryEntry>> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(entries.clone())
    }

    async fn save_history(&self, entries: &[HistoryEntry]) -> Result<()> {
        let mut stored = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *stored = entries.to_vec();
        Ok(())
    }
}
