//! Aggregate statistics.

use crate::connection::CosingDb;
use crate::error::{StoreError, StoreResult};
use crate::ingest::table_count;
use serde::Serialize;

/// A function and how many ingredients carry it.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionCount {
    pub function: String,
    pub count: i64,
}

/// Totals per entity type plus the most-assigned functions.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub total_ingredients: i64,
    pub total_functions: i64,
    pub total_function_assignments: i64,
    pub total_cas_numbers: i64,
    pub total_ec_numbers: i64,
    pub top_functions: Vec<FunctionCount>,
}

/// Compute store-wide statistics.
///
/// Top functions are ranked by assignment count; ties break on function
/// name ascending so the output is stable across reloads.
pub fn store_stats(db: &CosingDb) -> StoreResult<StoreStats> {
    let conn = db.conn();

    let mut stmt = conn
        .prepare(
            "SELECT f.function_name, COUNT(*) AS assignments \
             FROM ingredient_functions link \
             JOIN functions f ON link.function_id = f.id \
             GROUP BY f.function_name \
             ORDER BY assignments DESC, f.function_name ASC \
             LIMIT 10",
        )
        .map_err(|e| StoreError::QueryError(format!("prepare top functions: {e}")))?;
    let top_functions: Vec<FunctionCount> = stmt
        .query_map([], |row| {
            Ok(FunctionCount {
                function: row.get(0)?,
                count: row.get(1)?,
            })
        })
        .map_err(|e| StoreError::QueryError(format!("query top functions: {e}")))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StoreError::QueryError(format!("collect top functions: {e}")))?;

    Ok(StoreStats {
        total_ingredients: table_count(conn, "ingredients")?,
        total_functions: table_count(conn, "functions")?,
        total_function_assignments: table_count(conn, "ingredient_functions")?,
        total_cas_numbers: table_count(conn, "cas_numbers")?,
        total_ec_numbers: table_count(conn, "ec_numbers")?,
        top_functions,
    })
}
