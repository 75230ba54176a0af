//! Colored status messages for terminal output.
use colored::Colorize;

const TICK: &str = "✓";
const ERROR: &str = "Error:";
const WARNING: &str = "Warning:";

/// Print a success message.
pub fn success(msg: impl AsRef<str>) {
    let out = format!("{} {}", msg.as_ref().green(), TICK.green());
    println!("{}", out);
}

/// Print an informational message.
pub fn info(msg: impl AsRef<str>) {
    println!("{}", msg.as_ref().cyan());
}

/// Print a warning to stderr.
pub fn warn(msg: impl AsRef<str>) {
    eprintln!("{} {}", WARNING.yellow(), msg.as_ref());
}

/// Print an error message for failure.
pub fn fail(msg: impl AsRef<str>) {
    eprintln!("{} {}", ERROR.red(), msg.as_ref());
}
