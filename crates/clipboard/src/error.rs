use thiserror::Error;

/// Errors generated by the clipboard library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated by the native clipboard.
    #[error(transparent)]
    Arboard(#[from] arboard::Error),
}
