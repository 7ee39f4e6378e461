//! Functions command implementation

use anyhow::Result;
use cosing_store::query::all_functions;

use crate::cli::GlobalArgs;
use crate::commands::common::open_store;

/// Execute the functions command
pub fn execute(global: &GlobalArgs) -> Result<()> {
    let db = open_store(global)?;
    for name in all_functions(&db)? {
        println!("{name}");
    }
    Ok(())
}
