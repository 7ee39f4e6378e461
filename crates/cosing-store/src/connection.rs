//! Store connection wrapper.
//!
//! [`CosingDb`] owns a DuckDB [`Connection`] and provides helpers for
//! opening and transacting against the ingredient store.

use crate::error::{StoreError, StoreResult};
use duckdb::Connection;
use std::path::Path;

/// Wrapper around a DuckDB connection to the ingredient store.
///
/// Single-threaded; no `Mutex` needed because ingestion is sequential
/// and queries are independent read-only calls.
pub struct CosingDb {
    conn: Connection,
}

impl CosingDb {
    /// Open (or create) the store at `path`.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| StoreError::ConnectionError(format!("{e}: {}", path.display())))?;
        load_fts(&conn);
        Ok(Self { conn })
    }

    /// Create an in-memory store.
    ///
    /// Useful for unit tests that don't need persistence.
    pub fn open_memory() -> StoreResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| StoreError::ConnectionError(e.to_string()))?;
        load_fts(&conn);
        Ok(Self { conn })
    }

    /// Borrow the underlying DuckDB connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Execute `body` within a `BEGIN` / `COMMIT` transaction, rolling back
    /// on error.
    pub fn transaction<F, T>(&self, body: F) -> StoreResult<T>
    where
        F: FnOnce(&Connection) -> StoreResult<T>,
    {
        self.conn
            .execute_batch("BEGIN TRANSACTION")
            .map_err(|e| StoreError::TransactionError(format!("BEGIN failed: {e}")))?;

        let result = body(&self.conn);

        match &result {
            Ok(_) => {
                if let Err(commit_err) = self.conn.execute_batch("COMMIT") {
                    let _ = self.conn.execute_batch("ROLLBACK");
                    return Err(StoreError::TransactionError(format!(
                        "COMMIT failed: {commit_err}"
                    )));
                }
            }
            Err(_) => {
                let _ = self.conn.execute_batch("ROLLBACK");
            }
        }
        result
    }
}

/// Load the FTS extension on a fresh connection.
///
/// The extension is optional: full-text search degrades to an empty result
/// when it is unavailable, so a failed load is only logged.
fn load_fts(conn: &Connection) {
    if let Err(e) = conn.execute_batch("LOAD fts") {
        log::debug!("FTS extension not loaded: {e}");
    }
}

#[cfg(test)]
#[path = "connection_test.rs"]
mod tests;
