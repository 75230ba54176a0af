use crate::{Error, HistoryEntry, HistoryStorageProvider, Result};
use pws_i18n::Language;
use std::{fmt, path::Path};
use time::{macros::format_description, Date, OffsetDateTime, UtcOffset};

/// Number of entries kept.
pub const MAX_HISTORY: usize = 10;

/// Name of the export document for a date.
pub fn export_file_name(date: Date) -> String {
    let format = format_description!("[year]-[month]-[day]");
    // The calendar format has no fallible components
    let date = date
        .format(&format)
        .unwrap_or_else(|_| date.to_string());
    format!("passwords_{}.txt", date)
}

/// Recently generated passwords, newest first.
pub struct History {
    entries: Vec<HistoryEntry>,
    max_size: usize,
    provider: HistoryStorageProvider,
}

impl fmt::Debug for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("len", &self.entries.len())
            .field("max_size", &self.max_size)
            .finish()
    }
}

impl History {
    /// Create an empty history using the given storage provider.
    pub fn new(provider: HistoryStorageProvider) -> Self {
        Self {
            entries: Vec::new(),
            max_size: MAX_HISTORY,
            provider,
        }
    }

    /// Load entries from storage.
    ///
    /// Stored entries beyond the size limit are dropped.
    pub async fn load(&mut self) -> Result<()> {
        let mut entries = self.provider.load_history().await?;
        entries.truncate(self.max_size);
        self.entries = entries;
        Ok(())
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entry at a position, zero is the newest.
    pub fn get(&self, index: usize) -> Result<&HistoryEntry> {
        self.entries.get(index).ok_or(Error::NoEntry(index))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a password generated now.
    pub async fn add(&mut self, password: &str) -> Result<&HistoryEntry> {
        self.add_entry(HistoryEntry::new(password)).await
    }

    /// Record an entry at the front.
    ///
    /// An existing entry for the same password is moved rather
    /// than duplicated and the oldest entries beyond the limit
    /// are discarded.
    pub async fn add_entry(
        &mut self,
        entry: HistoryEntry,
    ) -> Result<&HistoryEntry> {
        self.entries.retain(|e| e.password != entry.password);
        self.entries.insert(0, entry);
        self.entries.truncate(self.max_size);
        self.provider.save_history(&self.entries).await?;
        tracing::debug!(len = self.entries.len(), "history::add");
        Ok(&self.entries[0])
    }

    /// Remove every entry.
    pub async fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.provider.save_history(&self.entries).await?;
        Ok(())
    }

    /// Plain text export, one line per entry.
    ///
    /// Dates are shown in the local time zone when it can be
    /// determined and in UTC otherwise.
    pub fn export(&self, language: Language) -> Result<String> {
        let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
        self.export_offset(language, offset)
    }

    /// Plain text export with dates shown at a fixed offset.
    pub fn export_offset(
        &self,
        language: Language,
        offset: UtcOffset,
    ) -> Result<String> {
        if self.entries.is_empty() {
            return Err(Error::NothingToExport);
        }

        let mut lines = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let date =
                language.format_date(&entry.timestamp.to_offset(offset))?;
            lines.push(format!(
                "{} ({}: {}, {}: {})",
                entry.password,
                language.t("length"),
                entry.length,
                language.t("generated_at"),
                date,
            ));
        }
        Ok(lines.join("\n"))
    }

    /// Write the export into a directory using the standard
    /// file name for today and return the path written.
    pub async fn export_dir(
        &self,
        language: Language,
        dir: impl AsRef<Path>,
    ) -> Result<std::path::PathBuf> {
        let path = dir
            .as_ref()
            .join(export_file_name(OffsetDateTime::now_utc().date()));
        self.export_file(language, &path).await?;
        Ok(path)
    }

    /// Write the export to a file.
    pub async fn export_file(
        &self,
        language: Language,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let text = self.export(language)?;
        tokio::fs::write(path.as_ref(), text).await?;
        tracing::info!(
            path = %path.as_ref().display(),
            entries = self.entries.len(),
            "history::export",
        );
        Ok(())
    }
}
