//! Access to the native system clipboard.
use crate::Result;
use std::{borrow::Cow, sync::Arc};
use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{sleep, Duration},
};
use zeroize::Zeroize;

/// Seconds before copied text is cleared.
pub const DEFAULT_TIMEOUT_SECONDS: u16 = 90;

/// Native system clipboard.
#[derive(Clone)]
pub struct Clipboard {
    clipboard: Arc<Mutex<arboard::Clipboard>>,
    timeout_seconds: u16,
}

impl std::fmt::Debug for Clipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clipboard")
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl Clipboard {
    /// Create a native clipboard using the default
    /// timeout of 90 seconds.
    pub fn new() -> Result<Self> {
        Self::new_timeout(DEFAULT_TIMEOUT_SECONDS)
    }

    /// Create a native clipboard with a timeout.
    pub fn new_timeout(timeout_seconds: u16) -> Result<Self> {
        Ok(Self {
            clipboard: Arc::new(Mutex::new(arboard::Clipboard::new()?)),
            timeout_seconds,
        })
    }

    /// Seconds before text placed with a timeout is cleared.
    pub fn timeout_seconds(&self) -> u16 {
        self.timeout_seconds
    }

    /// Fetches UTF-8 text from the clipboard and returns it.
    ///
    /// # Errors
    ///
    /// Returns error if clipboard is empty or contents are not UTF-8 text.
    pub async fn get_text(&self) -> Result<String> {
        let mut clipboard = self.clipboard.lock().await;
        Ok(clipboard.get_text()?)
    }

    /// Places the text onto the clipboard. Any valid UTF-8
    /// string is accepted.
    ///
    /// # Errors
    ///
    /// Returns error if text failed to be stored on the clipboard.
    pub async fn set_text<'a, T: Into<Cow<'a, str>>>(
        &self,
        text: T,
    ) -> Result<()> {
        let mut clipboard = self.clipboard.lock().await;
        clipboard.set_text(text)?;
        Ok(())
    }

    /// Clears any contents that may be present from the
    /// platform's default clipboard, regardless of the format of the data.
    ///
    /// # Errors
    ///
    /// Returns error on Windows or Linux if clipboard cannot be cleared.
    pub async fn clear(&self) -> Result<()> {
        let mut clipboard = self.clipboard.lock().await;
        clipboard.clear()?;
        Ok(())
    }

    /// Places text on to the clipboard and sets a timeout to clear
    /// the text from the clipboard.
    ///
    /// The text is only cleared if the clipboard contents match the
    /// initial value to allow for the user changing the clipboard
    /// content elsewhere whilst the the timeout is active.
    ///
    /// The returned handle completes once the timeout has elapsed;
    /// a short lived process should await it before exiting.
    pub async fn set_text_timeout<'a, T: Into<Cow<'a, str>>>(
        &self,
        text: T,
    ) -> Result<JoinHandle<()>> {
        let mut text = text.into().into_owned();
        self.set_text(text.as_str()).await?;

        let clipboard = Arc::clone(&self.clipboard);
        let seconds = self.timeout_seconds;
        let handle = tokio::task::spawn(async move {
            sleep(Duration::from_secs(seconds as u64)).await;
            let mut clipboard = clipboard.lock().await;
            match clipboard.get_text() {
                Ok(mut current) => {
                    if current == text {
                        if let Err(error) = clipboard.clear() {
                            tracing::warn!(
                                error = %error,
                                "clipboard::clear_failed",
                            );
                        } else {
                            tracing::debug!("clipboard::cleared");
                        }
                    }
                    current.zeroize();
                }
                Err(error) => {
                    tracing::debug!(error = %error, "clipboard::get_text");
                }
            }
            text.zeroize();
        });
        Ok(handle)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;

    #[tokio::test]
    #[ignore = "requires a desktop clipboard"]
    async fn clipboard_timeout_clears() -> Result<()> {
        let clipboard = Clipboard::new_timeout(1)?;
        let handle = clipboard.set_text_timeout("mock-secret").await?;
        assert_eq!("mock-secret", clipboard.get_text().await?);
        handle.await?;
        assert!(clipboard
            .get_text()
            .await
            .map(|t| t.is_empty())
            .unwrap_or(true));
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a desktop clipboard"]
    async fn clipboard_timeout_keeps_changed_text() -> Result<()> {
        let clipboard = Clipboard::new_timeout(1)?;
        let handle = clipboard.set_text_timeout("mock-secret").await?;
        clipboard.set_text("other").await?;
        handle.await?;
        assert_eq!("other", clipboard.get_text().await?);
        Ok(())
    }
}
