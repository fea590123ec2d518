//! dirscan - dump a directory tree into a single markdown document
//!
//! dirscan provides:
//! - Full reports with file contents, language-tagged fences and token counts
//! - Structure-only listings that never read file contents
//! - ASCII tree views

use clap::Parser;
use std::process::ExitCode;

mod backends;
mod cli;
mod core;
mod error;
mod flows;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            crate::core::console::error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
