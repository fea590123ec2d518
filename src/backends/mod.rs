//! Backends module - Filesystem traversal
//!
//! Provides:
//! - scan: Flat file scan with walkdir
//! - tree: ASCII tree view

pub mod scan;
pub mod tree;
