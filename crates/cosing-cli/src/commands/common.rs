//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use cosing_store::CosingDb;
use std::path::Path;

use crate::cli::GlobalArgs;

/// Open an existing ingredient store for querying.
///
/// Fails when no database exists at the configured path; queries never
/// create a store.
pub(crate) fn open_store(global: &GlobalArgs) -> Result<CosingDb> {
    let path = Path::new(&global.database);
    if !path.exists() {
        anyhow::bail!(
            "Database not found: {} (run `cosing convert` first)",
            path.display()
        );
    }
    CosingDb::open(path).context("Failed to open database")
}

/// Database file size in megabytes.
pub(crate) fn database_size_mb(path: &Path) -> f64 {
    let bytes = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    bytes as f64 / 1024.0 / 1024.0
}
