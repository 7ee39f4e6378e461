//! Stats command implementation

use anyhow::{Context, Result};
use cosing_store::query::store_stats;

use crate::cli::GlobalArgs;
use crate::commands::common::open_store;

/// Execute the stats command
pub fn execute(global: &GlobalArgs) -> Result<()> {
    let db = open_store(global)?;
    let stats = store_stats(&db)?;
    let json = serde_json::to_string_pretty(&stats).context("Failed to serialize statistics")?;
    println!("{json}");
    Ok(())
}
