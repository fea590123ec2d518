//! Console status lines
//!
//! Progress goes to stdout, warnings and errors to stderr. The report itself is
//! always written to a file, so nothing here is machine-readable.

use colored::Colorize;
use std::fmt::Display;

/// Informational line on stdout
pub fn info(message: impl Display) {
    println!("{}", message);
}

/// Success line on stdout
pub fn success(message: impl Display) {
    println!("{} {}", "✅".green(), message);
}

/// Non-fatal problem on stderr
pub fn warn(message: impl Display) {
    eprintln!("{} {}", "⚠️  warning:".yellow().bold(), message);
}

/// Fatal problem on stderr
pub fn error(message: impl Display) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}
