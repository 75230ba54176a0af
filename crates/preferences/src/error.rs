use thiserror::Error;

/// Errors generated by the preferences library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a preference is not a number.
    #[error("expected preference '{0}' to be a number")]
    PreferenceTypeNumber(String),

    /// Error generated when a preference is not a boolean.
    #[error("expected preference '{0}' to be a boolean")]
    PreferenceTypeBool(String),

    /// Error generated when a preference is not a string.
    #[error("expected preference '{0}' to be a string")]
    PreferenceTypeString(String),

    /// Error generated when a preference is not a string list.
    #[error("expected preference '{0}' to be a list of strings")]
    PreferenceTypeStringList(String),

    /// Error generated when a theme name is not recognized.
    #[error("unknown theme '{0}', expected light or dark")]
    UnknownTheme(String),

    /// Error generated by the i18n library.
    #[error(transparent)]
    I18n(#[from] pws_i18n::Error),

    /// Error generated by the io module.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error generated by the JSON library.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
