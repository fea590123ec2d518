//! File classification: text vs binary, and code-fence language tags

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::core::tables::{is_text_extension, language_for_extension, language_for_file_name};

/// Bytes inspected when sniffing for binary content
pub const SNIFF_LEN: usize = 1024;

/// Tag used when neither the suffix nor the file name is known
pub const DEFAULT_LANGUAGE: &str = "text";

/// Lowercase suffix without the dot
fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Decide whether a file should be read as text.
///
/// The guessed MIME type wins, then the extension allowlist, then a NUL-byte
/// sniff of the first `SNIFF_LEN` bytes. A file that cannot be opened or read
/// counts as binary.
pub fn is_text(path: &Path) -> bool {
    if mime_guess::from_path(path)
        .first_raw()
        .is_some_and(|mime| mime.starts_with("text"))
    {
        return true;
    }

    if lowercase_extension(path).is_some_and(|ext| is_text_extension(&ext)) {
        return true;
    }

    sniff_text(path).unwrap_or(false)
}

fn sniff_text(path: &Path) -> std::io::Result<bool> {
    let mut chunk = Vec::with_capacity(SNIFF_LEN);
    File::open(path)?
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut chunk)?;
    Ok(!chunk.contains(&0))
}

/// Markdown language tag for a path
pub fn language_tag(path: &Path) -> &'static str {
    lowercase_extension(path)
        .and_then(|ext| language_for_extension(&ext))
        .or_else(|| {
            path.file_name()
                .and_then(|name| name.to_str())
                .and_then(language_for_file_name)
        })
        .unwrap_or(DEFAULT_LANGUAGE)
}
