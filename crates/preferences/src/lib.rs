#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Preferences and generator settings persisted between runs.
mod error;
mod preferences;
mod settings;
mod storage;

pub use error::Error;
pub use preferences::*;
pub use settings::{Settings, Theme};
pub use storage::{JsonPreferences, MemoryPreferences, PREFERENCES_FILE};

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
