//! Convert command implementation

use anyhow::{Context, Result};
use cosing_core::source::read_records;
use cosing_store::{create_store, ingest_dataset, optimize};
use std::path::Path;

use crate::cli::{ConvertArgs, GlobalArgs};
use crate::commands::common::database_size_mb;

/// Execute the convert command
pub fn execute(args: &ConvertArgs, global: &GlobalArgs) -> Result<()> {
    let input = Path::new(&args.input);
    let db_path = Path::new(&global.database);

    // The input is validated before the existing store is destroyed, so a
    // bad invocation leaves a previous database untouched.
    if !input.exists() {
        anyhow::bail!("TSV file not found: {}", input.display());
    }

    println!("COSING Database Converter");
    println!("{}", "=".repeat(40));

    println!("Loading data from: {}", input.display());
    let records = read_records(input).context("Failed to read source records")?;
    println!("Loaded {} records", records.len());

    println!("Creating database: {}", db_path.display());
    let db = create_store(db_path).context("Failed to create database")?;

    if global.verbose {
        eprintln!("[verbose] Ingesting {} records", records.len());
    }
    let summary = ingest_dataset(&db, &records).context("Ingestion failed")?;

    println!("Optimizing database...");
    optimize(&db).context("Optimization failed")?;

    println!();
    println!("Ingredients: {}", summary.ingredients);
    println!("Functions: {}", summary.functions);
    println!("Restrictions: {}", summary.restrictions);
    println!(
        "Ingredient-Function relationships: {}",
        summary.function_assignments
    );
    println!("CAS numbers: {}", summary.cas_numbers);
    println!("EC numbers: {}", summary.ec_numbers);
    println!();
    println!("Database size: {:.2} MB", database_size_mb(db_path));
    println!("Conversion complete: {}", db_path.display());

    Ok(())
}
