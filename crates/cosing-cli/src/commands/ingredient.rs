//! Ingredient command implementation

use anyhow::{Context, Result};
use cosing_store::query::ingredient_by_ref;

use crate::cli::{GlobalArgs, IngredientArgs};
use crate::commands::common::open_store;

/// Execute the ingredient command
pub fn execute(args: &IngredientArgs, global: &GlobalArgs) -> Result<()> {
    let db = open_store(global)?;

    match ingredient_by_ref(&db, args.ref_no)? {
        Some(detail) => {
            let json =
                serde_json::to_string_pretty(&detail).context("Failed to serialize ingredient")?;
            println!("{json}");
        }
        None => println!("Ingredient not found"),
    }
    Ok(())
}
