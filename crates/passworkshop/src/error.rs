use pws_i18n::Language;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Failure already translated for display.
    #[error("{0}")]
    Message(String),

    #[error("unable to locate a home directory, use --data-dir")]
    HomeDir(#[from] etcetera::HomeDirError),

    #[error(transparent)]
    Password(#[from] pws_password::Error),

    #[error(transparent)]
    Preferences(#[from] pws_preferences::Error),

    #[error(transparent)]
    History(#[from] pws_history::Error),

    #[error(transparent)]
    I18n(#[from] pws_i18n::Error),

    #[error(transparent)]
    Clipboard(#[from] pws_clipboard::Error),

    #[error(transparent)]
    Logs(#[from] pws_logs::Error),

    #[error(transparent)]
    Join(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Message for the user in the given language.
    pub fn localized(&self, language: Language) -> String {
        let key = match self {
            Self::Password(pws_password::Error::NoCharsetSelected) => {
                "select_character_set"
            }
            Self::Password(pws_password::Error::CharsetExhausted) => {
                "charset_exhausted"
            }
            Self::History(pws_history::Error::NothingToExport) => {
                "no_passwords_generated"
            }
            _ => return self.to_string(),
        };
        language.t(key).to_owned()
    }
}
