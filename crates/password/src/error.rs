use thiserror::Error;

/// Errors generated by the password library.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Error generated when no character category is enabled.
    #[error("at least one character set must be selected")]
    NoCharsetSelected,

    /// Error generated when exclusions remove every character
    /// from the pool.
    #[error("no characters remain after applying exclusions")]
    CharsetExhausted,
}
