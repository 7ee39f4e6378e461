//! Bench command implementation
//!
//! Times the standard query patterns against a loaded store. Numbers are
//! wall-clock and informal, a smoke benchmark rather than a harness.

use anyhow::Result;
use cosing_store::query::{
    ingredient_by_ref, ingredients_by_function, search_by_cas, search_ingredients, store_stats,
};
use std::path::Path;
use std::time::Instant;

use crate::cli::GlobalArgs;
use crate::commands::common::{database_size_mb, open_store};

/// Execute the bench command
pub fn execute(global: &GlobalArgs) -> Result<()> {
    let db = open_store(global)?;

    println!("COSING Database Performance Benchmark");
    println!("{}", "=".repeat(40));

    let start = Instant::now();
    let _ = ingredient_by_ref(&db, 31367)?;
    println!("1. Ingredient lookup by ref: {}", elapsed_ms(start));

    let start = Instant::now();
    let pattern_count: i64 = db.conn().query_row(
        "SELECT COUNT(*) FROM ingredients WHERE inci_name LIKE '%HYALURONIC%'",
        [],
        |row| row.get(0),
    )?;
    println!(
        "2. Pattern search (LIKE): {} ({pattern_count} results)",
        elapsed_ms(start)
    );

    let start = Instant::now();
    let by_function = ingredients_by_function(&db, "SKIN CONDITIONING", 100)?;
    println!(
        "3. Function search: {} ({} results)",
        elapsed_ms(start),
        by_function.len()
    );

    let start = Instant::now();
    let by_cas = search_by_cas(&db, "58-61-7")?;
    println!(
        "4. CAS number lookup: {} ({} results)",
        elapsed_ms(start),
        by_cas.len()
    );

    let start = Instant::now();
    let hits = search_ingredients(&db, "skin", 100)?;
    println!(
        "5. Full-text search: {} ({} matches)",
        elapsed_ms(start),
        hits.len()
    );

    let start = Instant::now();
    let stats = store_stats(&db)?;
    println!("6. Statistics query: {}", elapsed_ms(start));

    println!();
    println!(
        "Database size: {:.2} MB",
        database_size_mb(Path::new(&global.database))
    );
    println!("Total ingredients: {}", stats.total_ingredients);
    Ok(())
}

fn elapsed_ms(start: Instant) -> String {
    format!("{:.2}ms", start.elapsed().as_secs_f64() * 1000.0)
}
