//! Skin command implementation

use anyhow::Result;
use cosing_store::query::skin_conditioning_ingredients;

use crate::cli::{GlobalArgs, SkinArgs};
use crate::commands::common::open_store;

/// Execute the skin command
pub fn execute(args: &SkinArgs, global: &GlobalArgs) -> Result<()> {
    let db = open_store(global)?;
    let matches = skin_conditioning_ingredients(&db, args.limit)?;

    println!("Skin conditioning ingredients:");
    for m in &matches {
        println!("  {}", m.inci_name.as_deref().unwrap_or("(unnamed)"));
    }
    Ok(())
}
