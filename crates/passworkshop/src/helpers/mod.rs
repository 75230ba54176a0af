use crate::Result;
use etcetera::{
    app_strategy::choose_native_strategy, AppStrategy, AppStrategyArgs,
};
use pws_clipboard::Clipboard;
use pws_i18n::Language;
use pws_password::StrengthLevel;
use std::path::PathBuf;

pub use pws_cli_helpers::messages;

const APP_AUTHOR: &str = "PassWorkshop";
const APP_NAME: &str = "PassWorkshop";

/// Directory for stored documents and logs.
///
/// Defaults to the platform data directory for the application.
pub fn data_dir(storage: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(storage) = storage {
        return Ok(storage);
    }
    let strategy = choose_native_strategy(AppStrategyArgs {
        top_level_domain: "com".to_string(),
        author: APP_AUTHOR.to_string(),
        app_name: APP_NAME.to_string(),
    })?;
    Ok(strategy.data_dir())
}

/// Translated label for a strength level.
pub fn strength_label(language: Language, level: StrengthLevel) -> &'static str {
    let key = match level {
        StrengthLevel::Weak => "strength_weak",
        StrengthLevel::Fair => "strength_fair",
        StrengthLevel::Good => "strength_good",
        StrengthLevel::Strong => "strength_strong",
    };
    language.t(key)
}

/// Translated yes or no.
pub fn flag_label(language: Language, value: bool) -> &'static str {
    language.t(if value { "yes" } else { "no" })
}

/// Copy text to the clipboard.
///
/// With a timeout this waits until the clipboard has been
/// cleared so the process does not exit first.
pub async fn copy_text(text: &str, clear_after: Option<u16>) -> Result<()> {
    match clear_after {
        Some(seconds) => {
            let clipboard = Clipboard::new_timeout(seconds)?;
            let handle = clipboard.set_text_timeout(text).await?;
            handle.await?;
        }
        None => {
            let clipboard = Clipboard::new()?;
            clipboard.set_text(text).await?;
        }
    }
    Ok(())
}
