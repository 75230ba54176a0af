#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Access to the native system clipboard with a timeout
//! that clears copied secrets.
mod clipboard;
mod error;

pub use clipboard::{Clipboard, DEFAULT_TIMEOUT_SECONDS};
pub use error::Error;

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
