//! Lookup table population: functions and restrictions.
//!
//! Both are global deduplicated value sets. Restrictions are extracted and
//! stored but never joined back to ingredients; the raw field on the
//! ingredient row is the only link, a known gap in the source model.

use crate::error::{StoreError, StoreResult};
use cosing_core::NormalizedIngredient;
use duckdb::Connection;
use std::collections::{BTreeSet, HashMap};

/// Collect the distinct function names and restriction codes of a dataset.
///
/// Sorted sets so inserts (and therefore surrogate ids) are deterministic
/// across reloads of identical input.
pub fn collect_lookups(
    records: &[NormalizedIngredient],
) -> (BTreeSet<String>, BTreeSet<String>) {
    let mut functions = BTreeSet::new();
    let mut restrictions = BTreeSet::new();
    for record in records {
        functions.extend(record.functions.iter().cloned());
        restrictions.extend(record.restriction.iter().cloned());
    }
    (functions, restrictions)
}

/// Insert every function name exactly once.
pub fn populate_functions(conn: &Connection, names: &BTreeSet<String>) -> StoreResult<()> {
    let mut stmt = conn
        .prepare("INSERT INTO functions (function_name) VALUES (?) ON CONFLICT (function_name) DO NOTHING")
        .map_err(|e| StoreError::IngestError(format!("prepare functions insert: {e}")))?;
    for name in names {
        stmt.execute(duckdb::params![name])
            .map_err(|e| StoreError::IngestError(format!("insert function '{name}': {e}")))?;
    }
    Ok(())
}

/// Insert every restriction code exactly once.
pub fn populate_restrictions(conn: &Connection, codes: &BTreeSet<String>) -> StoreResult<()> {
    let mut stmt = conn
        .prepare(
            "INSERT INTO restrictions (restriction_code) VALUES (?) ON CONFLICT (restriction_code) DO NOTHING",
        )
        .map_err(|e| StoreError::IngestError(format!("prepare restrictions insert: {e}")))?;
    for code in codes {
        stmt.execute(duckdb::params![code])
            .map_err(|e| StoreError::IngestError(format!("insert restriction '{code}': {e}")))?;
    }
    Ok(())
}

/// Load the injective function name -> surrogate id mapping.
pub fn load_function_catalog(conn: &Connection) -> StoreResult<HashMap<String, i64>> {
    let mut stmt = conn
        .prepare("SELECT function_name, id FROM functions")
        .map_err(|e| StoreError::QueryError(format!("prepare function catalog: {e}")))?;
    let rows: Vec<(String, i64)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .map_err(|e| StoreError::QueryError(format!("query function catalog: {e}")))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StoreError::QueryError(format!("collect function catalog: {e}")))?;
    Ok(rows.into_iter().collect())
}
