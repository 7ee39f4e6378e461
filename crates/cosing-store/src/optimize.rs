//! Post-load maintenance.
//!
//! Runs once after ingestion commits: rebuild the full-text index over the
//! freshly loaded rows, refresh planner statistics, and compact storage.
//! No data changes happen here.

use crate::connection::CosingDb;
use crate::error::{StoreError, StoreResult};
use duckdb::Connection;

/// Textual ingredient fields mirrored into the full-text index.
const FTS_REBUILD: &str = "PRAGMA create_fts_index(\
    'ingredients', 'cosing_ref_no', \
    'inci_name', 'inn_name', 'chemical_description', \
    overwrite = 1)";

/// Optimize the store after a completed load.
pub fn optimize(db: &CosingDb) -> StoreResult<()> {
    rebuild_text_index(db.conn());

    db.conn()
        .execute_batch("VACUUM ANALYZE")
        .map_err(|e| StoreError::QueryError(format!("VACUUM ANALYZE failed: {e}")))?;
    db.conn()
        .execute_batch("CHECKPOINT")
        .map_err(|e| StoreError::QueryError(format!("CHECKPOINT failed: {e}")))?;
    Ok(())
}

/// Rebuild the full-text index wholesale.
///
/// The index mirrors a subset of ingredient fields and is never updated
/// incrementally. Rebuild failure is tolerated; search then degrades to
/// an empty result.
pub fn rebuild_text_index(conn: &Connection) {
    if let Err(e) = conn.execute_batch(FTS_REBUILD) {
        log::warn!("Full-text index not rebuilt: {e}");
    }
}
