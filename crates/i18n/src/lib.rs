//! Translated strings for the PassWorkshop user interface.
//!
//! Strings are looked up by key for a [`Language`]; a key that
//! has no translation is returned unchanged so a missing entry
//! shows up as its key rather than an empty label.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod language;
mod tables;

pub use language::Language;

use thiserror::Error;

/// Errors generated by the i18n library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a language tag is not supported.
    #[error("unsupported language '{0}', expected zh or en")]
    UnknownLanguage(String),

    /// Error generated formatting a date.
    #[error(transparent)]
    Format(#[from] time::error::Format),
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Look up a translated string.
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    let table = match language {
        Language::Zh => tables::ZH,
        Language::En => tables::EN,
    };
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}
