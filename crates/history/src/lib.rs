#![deny(missing_docs)]
#![forbid(unsafe_code)]
//! History of generated passwords.
//!
//! The most recent passwords are kept newest first together
//! with the time they were generated and their strength, and
//! can be exported as a plain text document.
mod entry;
mod error;
mod history;
mod storage;

pub use entry::HistoryEntry;
pub use error::Error;
pub use history::{export_file_name, History, MAX_HISTORY};
pub use storage::{
    HistoryStorage, HistoryStorageProvider, JsonHistory, MemoryHistory,
    HISTORY_FILE,
};

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
