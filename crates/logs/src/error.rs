use thiserror::Error;

/// Errors generated by the logs library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when the tracing filter directives are invalid.
    #[error(transparent)]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// Error generated when a global subscriber is already installed.
    #[error(transparent)]
    Init(#[from] tracing_subscriber::util::TryInitError),

    /// Error generated formatting a date.
    #[error(transparent)]
    Format(#[from] time::error::Format),

    /// Error generated by the io module.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
