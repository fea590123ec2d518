//! Markdown renderer
//!
//! Serializes scan records (or the tree view) into the report document.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::backends::tree::build_tree;
use crate::core::classify::language_tag;
use crate::core::metrics::ENCODING_NAME;
use crate::core::model::{FileContent, FileRecord, Metrics, ScanMode};
use crate::core::paths::{dir_name, display_relative};
use crate::error::Result;

const SEPARATOR: &str = "---\n\n";

/// Renderer for scan reports
pub struct Renderer {
    mode: ScanMode,
    /// Paths kept out of the tree view
    exclude: Vec<PathBuf>,
}

impl Renderer {
    pub fn new(mode: ScanMode) -> Self {
        Self {
            mode,
            exclude: Vec::new(),
        }
    }

    /// Leave `paths` out of the tree view, matching what the scan skipped
    pub fn with_exclude(mut self, paths: &[PathBuf]) -> Self {
        self.exclude = paths.to_vec();
        self
    }

    /// Render the report for `records` found under `base`.
    ///
    /// Records are sorted by path before writing; the input order does not matter.
    pub fn render<W: Write>(&self, records: &[FileRecord], base: &Path, out: &mut W) -> Result<()> {
        self.write_header(records.len(), base, out)?;

        if self.mode == ScanMode::Tree {
            writeln!(out, "## 📂 Project Structure\n")?;
            writeln!(out, "```text")?;
            writeln!(out, "{}", build_tree(base, &self.exclude)?)?;
            writeln!(out, "```")?;
            return Ok(());
        }

        let mut sorted: Vec<&FileRecord> = records.iter().collect();
        sorted.sort_by(|a, b| a.path.cmp(&b.path));

        for record in sorted {
            self.write_section(record, base, out)?;
        }

        Ok(())
    }

    /// Render to an in-memory string
    #[cfg(test)]
    pub fn render_to_string(&self, records: &[FileRecord], base: &Path) -> Result<String> {
        let mut buffer = Vec::new();
        self.render(records, base, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    fn write_header<W: Write>(&self, total: usize, base: &Path, out: &mut W) -> Result<()> {
        let name = dir_name(base).unwrap_or_else(|| base.display().to_string());
        writeln!(out, "# Directory Scan: {}\n", name)?;
        writeln!(out, "**Scanned Path:** `{}`\n", base.display())?;
        writeln!(out, "**Total Files:** {}\n", total)?;
        write!(out, "{}", SEPARATOR)?;
        Ok(())
    }

    fn write_section<W: Write>(&self, record: &FileRecord, base: &Path, out: &mut W) -> Result<()> {
        writeln!(out, "## 📄 {}\n", display_relative(&record.path, base))?;
        writeln!(out, "**Full Path:** `{}`\n", record.path.display())?;

        if self.mode == ScanMode::Full {
            match &record.content {
                FileContent::Binary => {
                    writeln!(out, "*This is a binary file and cannot be displayed.*\n")?;
                }
                FileContent::Unreadable(_) => {
                    writeln!(out, "*{}*\n", record.content)?;
                }
                FileContent::Text(_) if record.content.is_blank() => {
                    writeln!(out, "*This file is empty.*\n")?;
                }
                FileContent::Text(text) => {
                    if let Some(metrics) = &record.metrics {
                        writeln!(out, "{}\n", metrics_line(metrics))?;
                    }
                    let fence = fence_for(text);
                    writeln!(
                        out,
                        "{}{}\n{}\n{}\n",
                        fence,
                        language_tag(&record.path),
                        text,
                        fence
                    )?;
                }
                FileContent::Omitted => {}
            }
        }

        write!(out, "{}", SEPARATOR)?;
        Ok(())
    }
}

/// One-line metrics summary for a text file
pub fn metrics_line(metrics: &Metrics) -> String {
    let mut line = format!(
        "**Metrics:** {} words · {} characters · {} non-whitespace · ~{} tokens (estimated)",
        metrics.words,
        metrics.characters,
        metrics.characters_no_spaces,
        metrics.estimated_gpt_tokens
    );
    if let Some(tokens) = metrics.gpt_tokens {
        line.push_str(&format!(" · {} tokens ({})", tokens, ENCODING_NAME));
    }
    line
}

/// Backtick fence long enough that `content` cannot close it early
fn fence_for(content: &str) -> String {
    let mut longest = 0;
    let mut current = 0;
    for c in content.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    "`".repeat(longest.max(2) + 1)
}
