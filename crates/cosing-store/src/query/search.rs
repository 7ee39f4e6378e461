//! Search operations: full-text, by function name, and by CAS number.

use crate::connection::CosingDb;
use crate::error::{StoreError, StoreResult};
use serde::Serialize;

/// One full-text search match.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub cosing_ref_no: i64,
    pub inci_name: Option<String>,
    pub chemical_description: Option<String>,
    /// Comma-joined function names, absent when the ingredient has none.
    pub functions: Option<String>,
}

/// One function-search match.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionMatch {
    pub cosing_ref_no: i64,
    pub inci_name: Option<String>,
    pub chemical_description: Option<String>,
}

/// One CAS-search match.
#[derive(Debug, Clone, Serialize)]
pub struct CasMatch {
    pub cosing_ref_no: i64,
    pub inci_name: Option<String>,
    pub cas_number: String,
}

/// Full-text search over the indexed ingredient fields.
///
/// Results are ranked by the engine's BM25 relevance. When the text index
/// is unavailable (extension missing, index never built) the search
/// degrades to an empty result instead of failing.
pub fn search_ingredients(db: &CosingDb, term: &str, limit: usize) -> StoreResult<Vec<SearchHit>> {
    let sql = "SELECT sub.cosing_ref_no, sub.inci_name, sub.chemical_description, \
                      string_agg(f.function_name, ', ' ORDER BY f.function_name) AS functions \
               FROM ( \
                   SELECT cosing_ref_no, inci_name, chemical_description, \
                          fts_main_ingredients.match_bm25(cosing_ref_no, ?) AS score \
                   FROM ingredients \
               ) sub \
               LEFT JOIN ingredient_functions link ON sub.cosing_ref_no = link.ingredient_ref \
               LEFT JOIN functions f ON link.function_id = f.id \
               WHERE sub.score IS NOT NULL \
               GROUP BY sub.cosing_ref_no, sub.inci_name, sub.chemical_description, sub.score \
               ORDER BY sub.score DESC \
               LIMIT ?";

    let result = (|| -> Result<Vec<SearchHit>, duckdb::Error> {
        let mut stmt = db.conn().prepare(sql)?;
        stmt.query_map(duckdb::params![term, limit as i64], |row| {
            Ok(SearchHit {
                cosing_ref_no: row.get(0)?,
                inci_name: row.get(1)?,
                chemical_description: row.get(2)?,
                functions: row.get(3)?,
            })
        })?
        .collect()
    })();

    match result {
        Ok(hits) => Ok(hits),
        Err(e) => {
            log::warn!("Full-text search unavailable: {e}");
            Ok(Vec::new())
        }
    }
}

/// Ingredients carrying a function whose name contains `name`.
///
/// The match is case-insensitive (the store normalizes nothing here; the
/// source data is upper-case but queries usually are not). Ordered by
/// INCI name.
pub fn ingredients_by_function(
    db: &CosingDb,
    name: &str,
    limit: usize,
) -> StoreResult<Vec<FunctionMatch>> {
    let mut stmt = db
        .conn()
        .prepare(
            "SELECT DISTINCT i.cosing_ref_no, i.inci_name, i.chemical_description \
             FROM ingredients i \
             JOIN ingredient_functions link ON i.cosing_ref_no = link.ingredient_ref \
             JOIN functions f ON link.function_id = f.id \
             WHERE f.function_name ILIKE ? \
             ORDER BY i.inci_name \
             LIMIT ?",
        )
        .map_err(|e| StoreError::QueryError(format!("prepare function search: {e}")))?;

    let pattern = format!("%{name}%");
    let matches: Vec<FunctionMatch> = stmt
        .query_map(duckdb::params![pattern, limit as i64], |row| {
            Ok(FunctionMatch {
                cosing_ref_no: row.get(0)?,
                inci_name: row.get(1)?,
                chemical_description: row.get(2)?,
            })
        })
        .map_err(|e| StoreError::QueryError(format!("query function search: {e}")))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StoreError::QueryError(format!("collect function search: {e}")))?;
    Ok(matches)
}

/// Shortcut for the skin-conditioning function family.
pub fn skin_conditioning_ingredients(
    db: &CosingDb,
    limit: usize,
) -> StoreResult<Vec<FunctionMatch>> {
    ingredients_by_function(db, "SKIN CONDITIONING", limit)
}

/// Every function name, sorted.
pub fn all_functions(db: &CosingDb) -> StoreResult<Vec<String>> {
    let mut stmt = db
        .conn()
        .prepare("SELECT function_name FROM functions ORDER BY function_name")
        .map_err(|e| StoreError::QueryError(format!("prepare functions list: {e}")))?;
    let names: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .map_err(|e| StoreError::QueryError(format!("query functions list: {e}")))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StoreError::QueryError(format!("collect functions list: {e}")))?;
    Ok(names)
}

/// Ingredients listing `cas` as any of their registry numbers.
///
/// Exact match, primary or secondary position.
pub fn search_by_cas(db: &CosingDb, cas: &str) -> StoreResult<Vec<CasMatch>> {
    let mut stmt = db
        .conn()
        .prepare(
            "SELECT i.cosing_ref_no, i.inci_name, cn.cas_number \
             FROM ingredients i \
             JOIN cas_numbers cn ON i.cosing_ref_no = cn.ingredient_ref \
             WHERE cn.cas_number = ? \
             ORDER BY i.cosing_ref_no",
        )
        .map_err(|e| StoreError::QueryError(format!("prepare CAS search: {e}")))?;

    let matches: Vec<CasMatch> = stmt
        .query_map(duckdb::params![cas], |row| {
            Ok(CasMatch {
                cosing_ref_no: row.get(0)?,
                inci_name: row.get(1)?,
                cas_number: row.get(2)?,
            })
        })
        .map_err(|e| StoreError::QueryError(format!("query CAS search: {e}")))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StoreError::QueryError(format!("collect CAS search: {e}")))?;
    Ok(matches)
}
