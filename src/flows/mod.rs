//! Flows module - Operations combining scanning and rendering
//!
//! Provides:
//! - report: Scan a directory and write the markdown report

pub mod report;
