//! Report flow - scan a directory and write the markdown report
//!
//! Combines the walker and the renderer and owns the output file handle.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::backends::scan::{scan, ScanConfig};
use crate::core::metrics::TokenCounter;
use crate::core::model::{FileRecord, Metrics, ScanMode};
use crate::core::paths::dir_name;
use crate::core::render::Renderer;

/// Suffix appended to the directory name to form the report file name
pub const REPORT_SUFFIX: &str = "_scan.md";

/// Outcome of a report run
#[derive(Debug, Clone)]
pub struct ReportSummary {
    /// Where the report was written
    pub output_path: PathBuf,
    /// Number of files listed
    pub total_files: usize,
    /// Summed metrics over all files (full mode only)
    pub totals: Option<Metrics>,
}

/// `<dir name>_scan.md` for an absolute root
pub fn report_file_name(root: &Path) -> String {
    format!(
        "{}{}",
        dir_name(root).unwrap_or_else(|| "root".to_string()),
        REPORT_SUFFIX
    )
}

/// Sum metrics over records that have them
pub fn total_metrics(records: &[FileRecord]) -> Option<Metrics> {
    let mut totals: Option<Metrics> = None;
    for metrics in records.iter().filter_map(|r| r.metrics.as_ref()) {
        *totals.get_or_insert_with(Metrics::zero) += metrics;
    }
    totals
}

/// Scan `root` and write the report into `output_dir`.
///
/// `root` must be an absolute, existing directory. The report file itself is
/// left out of the scan when `output_dir` lies inside `root`.
pub fn run_report(
    root: &Path,
    output_dir: &Path,
    mode: ScanMode,
    counter: &TokenCounter,
) -> Result<ReportSummary> {
    let output_path = output_dir.join(report_file_name(root));

    let config = ScanConfig::new(mode).excluding(&output_path);
    let records = scan(root, &config, counter)
        .with_context(|| format!("failed to scan {}", root.display()))?;

    write_report(&records, root, mode, &output_path)?;

    let totals = if mode.reads_content() {
        total_metrics(&records)
    } else {
        None
    };

    Ok(ReportSummary {
        output_path,
        total_files: records.len(),
        totals,
    })
}

/// Render `records` into the file at `output_path`, replacing it.
///
/// The report file never shows up in its own tree view.
pub fn write_report(
    records: &[FileRecord],
    root: &Path,
    mode: ScanMode,
    output_path: &Path,
) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("failed to create report {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    Renderer::new(mode)
        .with_exclude(&[output_path.to_path_buf()])
        .render(records, root, &mut writer)
        .with_context(|| format!("failed to write report to {}", output_path.display()))?;

    writer
        .flush()
        .with_context(|| format!("failed to write report to {}", output_path.display()))?;

    Ok(())
}
