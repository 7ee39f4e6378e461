//! Function command implementation

use anyhow::Result;
use cosing_store::query::ingredients_by_function;

use crate::cli::{FunctionArgs, GlobalArgs};
use crate::commands::common::open_store;

/// Execute the function command
pub fn execute(args: &FunctionArgs, global: &GlobalArgs) -> Result<()> {
    let db = open_store(global)?;
    let matches = ingredients_by_function(&db, &args.name, args.limit)?;

    if matches.is_empty() {
        println!("No ingredients carry a function matching '{}'", args.name);
        return Ok(());
    }

    for m in &matches {
        println!(
            "{}: {}",
            m.cosing_ref_no,
            m.inci_name.as_deref().unwrap_or("(unnamed)")
        );
    }
    Ok(())
}
