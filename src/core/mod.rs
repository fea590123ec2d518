//! Core module - Data model, classification, metrics and rendering
//!
//! This module provides:
//! - Scan records and metrics (model)
//! - Text/binary classification and language tags
//! - Word, character and token counting
//! - Markdown rendering of scan results
//! - Static lookup tables and path helpers

pub mod classify;
pub mod console;
pub mod metrics;
pub mod model;
pub mod paths;
pub mod render;
pub mod tables;
