//! Search command implementation

use anyhow::Result;
use cosing_store::query::search_ingredients;

use crate::cli::{GlobalArgs, SearchArgs};
use crate::commands::common::open_store;

/// Execute the search command
pub fn execute(args: &SearchArgs, global: &GlobalArgs) -> Result<()> {
    let db = open_store(global)?;
    let hits = search_ingredients(&db, &args.term, args.limit)?;

    if hits.is_empty() {
        println!("No matches for '{}'", args.term);
        return Ok(());
    }

    for hit in &hits {
        println!(
            "{}: {}",
            hit.cosing_ref_no,
            hit.inci_name.as_deref().unwrap_or("(unnamed)")
        );
        if let Some(functions) = &hit.functions {
            println!("  Functions: {functions}");
        }
        println!();
    }
    Ok(())
}
