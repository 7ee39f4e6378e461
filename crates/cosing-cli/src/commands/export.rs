//! Export command implementation

use anyhow::{Context, Result};
use cosing_store::export::export_to_path;
use std::path::Path;

use crate::cli::{ExportArgs, GlobalArgs};
use crate::commands::common::open_store;

/// Execute the export command
pub fn execute(args: &ExportArgs, global: &GlobalArgs) -> Result<()> {
    let db = open_store(global)?;
    let output = Path::new(&args.output);
    let blocks = export_to_path(&db, output).context("Export failed")?;
    println!("Exported {} ingredients to {}", blocks, output.display());
    Ok(())
}
