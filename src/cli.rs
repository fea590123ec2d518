//! CLI module - Command-line interface definition and handler

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::core::console;
use crate::core::metrics::{TokenCounter, ENCODING_NAME};
use crate::core::model::ScanMode;
use crate::error::ScanError;
use crate::flows::report::{run_report, ReportSummary};

/// dirscan - dump a directory tree into a single markdown document.
#[derive(Parser, Debug)]
#[command(name = "dirscan")]
#[command(
    author,
    version,
    about,
    long_about = r#"dirscan walks DIRECTORY and writes <directory_name>_scan.md into the
current working directory.

Modes:
- default:      every file with its content, a language-tagged code fence and
                word/character/token counts
- --path:       one header per file, no content is read
- --path_tree:  an ASCII tree of the directory only

Version-control folders, caches and lockfiles are skipped at every depth.

Examples:
    dirscan ./my-project
    dirscan ./my-project --path
    dirscan ./my-project --path_tree
"#
)]
pub struct Cli {
    /// Directory to scan.
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// List files only (no content, no metrics).
    #[arg(
        long = "path",
        conflicts_with = "path_tree",
        long_help = "Structure-only mode: emit one header per file with its full path.\n\n\
No file content is read and no metrics are computed, so binary and unreadable\n\
files are listed like any other file."
    )]
    pub path: bool,

    /// Emit only an ASCII tree of the directory.
    #[arg(
        long = "path_tree",
        long_help = "Tree mode: emit only an indented ASCII tree of DIRECTORY.\n\n\
Directories are listed before files; names are ordered case-insensitively."
    )]
    pub path_tree: bool,
}

impl Cli {
    /// Scan mode selected by the flags
    pub fn mode(&self) -> ScanMode {
        if self.path {
            ScanMode::StructureOnly
        } else if self.path_tree {
            ScanMode::Tree
        } else {
            ScanMode::Full
        }
    }
}

/// Check that `path` is an existing directory and make it absolute
pub fn resolve_directory(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(ScanError::NotFound(path.to_path_buf()).into());
    }
    if !path.is_dir() {
        return Err(ScanError::NotADirectory(path.to_path_buf()).into());
    }
    path.canonicalize()
        .with_context(|| format!("failed to resolve {}", path.display()))
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let mode = cli.mode();
    let root = resolve_directory(&cli.directory)?;

    let counter = if mode.reads_content() {
        let counter = TokenCounter::detect();
        if counter.has_tokenizer() {
            console::success(format!(
                "Using tiktoken ({}) for accurate GPT token counting",
                ENCODING_NAME
            ));
        } else {
            console::info("ℹ️  Using estimated token counting (tokenizer unavailable)");
        }
        counter
    } else {
        TokenCounter::estimate_only()
    };

    console::info(format!("Scanning directory: {}", root.display()));

    let output_dir = std::env::current_dir().context("failed to read current directory")?;
    let summary = run_report(&root, &output_dir, mode, &counter)?;

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &ReportSummary) {
    console::success(format!(
        "Scan completed! Output saved to: {}",
        summary.output_path.display()
    ));
    console::info(format!("📊 Total files processed: {}", summary.total_files));

    if let Some(totals) = &summary.totals {
        console::info(format!(
            "📝 Total words: {}, characters: {}",
            totals.words, totals.characters
        ));
        match totals.gpt_tokens {
            Some(tokens) => console::info(format!(
                "🔢 Total tokens: {} ({}), ~{} estimated",
                tokens, ENCODING_NAME, totals.estimated_gpt_tokens
            )),
            None => console::info(format!(
                "🔢 Total tokens: ~{} estimated",
                totals.estimated_gpt_tokens
            )),
        }
    }
}
