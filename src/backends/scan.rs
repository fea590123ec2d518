//! Directory walker
//!
//! Uses walkdir for traversal and prunes skip-set names at every depth below the root.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::classify::is_text;
use crate::core::console;
use crate::core::metrics::TokenCounter;
use crate::core::model::{FileRecord, ScanMode};
use crate::core::tables::is_skipped;
use crate::error::{Result, ScanError};

/// Configuration for a scan
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// What to read for each file
    pub mode: ScanMode,

    /// Absolute paths left out of the results (e.g. the report being written)
    pub exclude: Vec<PathBuf>,
}

impl ScanConfig {
    pub fn new(mode: ScanMode) -> Self {
        Self {
            mode,
            exclude: Vec::new(),
        }
    }

    /// Leave `path` out of the results
    pub fn excluding(mut self, path: impl Into<PathBuf>) -> Self {
        self.exclude.push(path.into());
        self
    }
}

/// True for the root itself and for anything not named in the skip set
fn keep_entry(entry: &DirEntry) -> bool {
    entry.depth() == 0 || !is_skipped(entry.file_name())
}

/// Regular files and symlinks that resolve to regular files
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// Scan every file under `root`.
///
/// Records come back in traversal order; callers that need a stable order sort them.
pub fn scan(root: &Path, config: &ScanConfig, counter: &TokenCounter) -> Result<Vec<FileRecord>> {
    if !root.exists() {
        return Err(ScanError::NotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut records = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_entry(keep_entry) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                if err.depth() == 0 {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root.to_path_buf());
                    let source = err
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::other("walk failed at root"));
                    return Err(ScanError::io(path, source));
                }
                console::warn(format!("skipping entry: {}", err));
                continue;
            }
        };

        if !is_regular_file(&entry) {
            continue;
        }

        let path = entry.path();
        if config.exclude.iter().any(|excluded| excluded == path) {
            continue;
        }

        records.push(scan_file(path, config.mode, counter));
    }

    Ok(records)
}

/// Build the record for one file
pub fn scan_file(path: &Path, mode: ScanMode, counter: &TokenCounter) -> FileRecord {
    if !mode.reads_content() {
        return FileRecord::omitted(path);
    }

    if !is_text(path) {
        return FileRecord::binary(path);
    }

    match fs::read(path) {
        Ok(bytes) => {
            let content = String::from_utf8_lossy(&bytes).into_owned();
            let metrics = counter.count_all(&content);
            FileRecord::text(path, content, metrics)
        }
        Err(e) => FileRecord::unreadable(path, e.to_string()),
    }
}
