//! Command line password generator with strength scoring
//! and a local history.

pub mod cli;
pub mod commands;
mod error;
pub(crate) mod helpers;
mod session;

pub use error::Error;
pub use pws_cli_helpers::CommandTree;
pub use session::Session;

/// Result type for the executable library.
pub type Result<T> = std::result::Result<T, error::Error>;
