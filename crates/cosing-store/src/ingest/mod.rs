//! Ingestion pipeline.
//!
//! Populates the store from the raw record set in two commit checkpoints:
//! first the deduplicated lookup tables (functions, restrictions), then
//! every ingredient row with its fan-out rows. Any row-insertion failure
//! aborts the run: bulk data is all-or-nothing, unlike schema creation.
//!
//! This is the only component that writes to the store.

pub mod ingredients;
pub mod lookups;

use crate::connection::CosingDb;
use crate::error::StoreResult;
use cosing_core::{NormalizedIngredient, RawRecord};
use duckdb::Connection;
use serde::Serialize;

use self::ingredients::insert_ingredient;
use self::lookups::{collect_lookups, load_function_catalog, populate_functions, populate_restrictions};

/// Row counts after a completed ingestion run.
#[derive(Debug, Clone, Serialize)]
pub struct IngestSummary {
    pub ingredients: i64,
    pub functions: i64,
    pub restrictions: i64,
    pub function_assignments: i64,
    pub cas_numbers: i64,
    pub ec_numbers: i64,
}

/// Ingest the full record set into a freshly created store.
///
/// Normalizes every record up front (a record without a reference number
/// fails the whole run), populates the lookup tables in one transaction,
/// then inserts all ingredients and their fan-out rows in a second one.
pub fn ingest_dataset(db: &CosingDb, records: &[RawRecord]) -> StoreResult<IngestSummary> {
    let normalized: Vec<NormalizedIngredient> = records
        .iter()
        .map(|record| record.normalize().map_err(Into::into))
        .collect::<StoreResult<_>>()?;

    // Checkpoint 1: deduplicated lookup values across the whole dataset.
    let (function_names, restriction_codes) = collect_lookups(&normalized);
    log::debug!(
        "Found {} unique functions, {} unique restrictions",
        function_names.len(),
        restriction_codes.len()
    );
    db.transaction(|conn| {
        populate_functions(conn, &function_names)?;
        populate_restrictions(conn, &restriction_codes)?;
        Ok(())
    })?;

    // The injective name -> id mapping is built once and reused for every
    // association row instead of a per-row lookup.
    let catalog = load_function_catalog(db.conn())?;

    // Checkpoint 2: all ingredient rows and their fan-out rows.
    db.transaction(|conn| {
        for ingredient in &normalized {
            insert_ingredient(conn, ingredient, &catalog)?;
        }
        Ok(())
    })?;
    log::debug!("Inserted {} ingredient records", normalized.len());

    summarize(db.conn())
}

/// Count the rows of every entity table.
fn summarize(conn: &Connection) -> StoreResult<IngestSummary> {
    Ok(IngestSummary {
        ingredients: table_count(conn, "ingredients")?,
        functions: table_count(conn, "functions")?,
        restrictions: table_count(conn, "restrictions")?,
        function_assignments: table_count(conn, "ingredient_functions")?,
        cas_numbers: table_count(conn, "cas_numbers")?,
        ec_numbers: table_count(conn, "ec_numbers")?,
    })
}

/// Row count of a single store table.
pub(crate) fn table_count(conn: &Connection, table: &str) -> StoreResult<i64> {
    let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })?;
    Ok(count)
}
