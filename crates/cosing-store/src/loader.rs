//! Destructive schema loader.
//!
//! A conversion run always starts from a clean store: any existing file at
//! the target path is fully replaced, never merged. Schema statements are
//! applied one at a time with a tolerant failure policy: a statement that
//! fails is logged and skipped so a missing optional extension cannot sink
//! the load. Row insertion (see [`crate::ingest`]) is not tolerant.

use crate::connection::CosingDb;
use crate::ddl;
use crate::error::StoreResult;
use duckdb::Connection;
use std::path::Path;

/// Create a fresh store at `path`, replacing any existing one.
///
/// Removes the store file and its write-ahead log, opens a new connection,
/// and applies the embedded schema.
pub fn create_store(path: &Path) -> StoreResult<CosingDb> {
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    let wal = wal_path(path);
    if wal.exists() {
        std::fs::remove_file(&wal)?;
    }

    let db = CosingDb::open(path)?;
    apply_schema(db.conn());
    Ok(db)
}

/// Apply the embedded schema to `conn`, statement by statement.
///
/// Failures are logged as warnings and skipped (tolerant-load policy).
pub fn apply_schema(conn: &Connection) {
    let mut applied = 0usize;
    let mut skipped = 0usize;
    for stmt in ddl::statements() {
        match conn.execute_batch(stmt) {
            Ok(()) => applied += 1,
            Err(e) => {
                skipped += 1;
                log::warn!("Schema statement skipped: {e}");
                log::debug!("Offending statement: {}", first_line(stmt));
            }
        }
    }
    log::debug!("Schema applied: {applied} statements, {skipped} skipped");
}

/// Path of the DuckDB write-ahead log next to the store file.
fn wal_path(path: &Path) -> std::path::PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".wal");
    std::path::PathBuf::from(name)
}

fn first_line(stmt: &str) -> &str {
    stmt.lines().next().unwrap_or(stmt)
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
