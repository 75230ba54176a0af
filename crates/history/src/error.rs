use thiserror::Error;

/// Errors generated by the history library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when exporting an empty history.
    #[error("no passwords to export")]
    NothingToExport,

    /// Error generated when a history index is out of range.
    #[error("no history entry at position {0}")]
    NoEntry(usize),

    /// Error generated by the i18n library.
    #[error(transparent)]
    I18n(#[from] pws_i18n::Error),

    /// Error generated formatting a date.
    #[error(transparent)]
    Format(#[from] time::error::Format),

    /// Error generated by the io module.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error generated by the JSON library.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
