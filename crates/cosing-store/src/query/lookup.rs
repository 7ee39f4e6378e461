//! Point lookup by reference number.

use crate::connection::CosingDb;
use crate::error::{StoreError, StoreResult};
use duckdb::Connection;
use serde::Serialize;

/// Fully denormalized view of one ingredient.
#[derive(Debug, Clone, Serialize)]
pub struct IngredientDetail {
    pub cosing_ref_no: i64,
    pub inci_name: Option<String>,
    pub inn_name: Option<String>,
    pub ph_eur_name: Option<String>,
    pub cas_no: Option<String>,
    pub ec_no: Option<String>,
    pub chemical_description: Option<String>,
    pub restriction: Option<String>,
    pub update_date: Option<String>,
    /// Function names, sorted.
    pub functions: Vec<String>,
    /// CAS numbers, primary first, then parse order.
    pub cas_numbers: Vec<String>,
    /// EC numbers, primary first, then parse order.
    pub ec_numbers: Vec<String>,
}

/// Fetch one ingredient with its functions and registry numbers.
///
/// Returns `Ok(None)` when the reference number is unknown.
pub fn ingredient_by_ref(db: &CosingDb, ref_no: i64) -> StoreResult<Option<IngredientDetail>> {
    let conn = db.conn();

    let base = conn.query_row(
        "SELECT cosing_ref_no, inci_name, inn_name, ph_eur_name, cas_no, ec_no, \
                chemical_description, restriction, update_date \
         FROM ingredients WHERE cosing_ref_no = ?",
        duckdb::params![ref_no],
        |row| {
            Ok(IngredientDetail {
                cosing_ref_no: row.get(0)?,
                inci_name: row.get(1)?,
                inn_name: row.get(2)?,
                ph_eur_name: row.get(3)?,
                cas_no: row.get(4)?,
                ec_no: row.get(5)?,
                chemical_description: row.get(6)?,
                restriction: row.get(7)?,
                update_date: row.get(8)?,
                functions: Vec::new(),
                cas_numbers: Vec::new(),
                ec_numbers: Vec::new(),
            })
        },
    );

    let mut detail = match base {
        Ok(detail) => detail,
        Err(duckdb::Error::QueryReturnedNoRows) => return Ok(None),
        Err(e) => return Err(StoreError::QueryError(format!("lookup ingredient: {e}"))),
    };

    detail.functions = string_column(
        conn,
        "SELECT f.function_name \
         FROM ingredient_functions link \
         JOIN functions f ON link.function_id = f.id \
         WHERE link.ingredient_ref = ? \
         ORDER BY f.function_name",
        ref_no,
    )?;
    detail.cas_numbers = string_column(
        conn,
        "SELECT cas_number FROM cas_numbers WHERE ingredient_ref = ? ORDER BY ordinal",
        ref_no,
    )?;
    detail.ec_numbers = string_column(
        conn,
        "SELECT ec_number FROM ec_numbers WHERE ingredient_ref = ? ORDER BY ordinal",
        ref_no,
    )?;

    Ok(Some(detail))
}

/// Collect a single-column query keyed by reference number.
fn string_column(conn: &Connection, sql: &str, ref_no: i64) -> StoreResult<Vec<String>> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| StoreError::QueryError(format!("prepare lookup column: {e}")))?;
    let values: Vec<String> = stmt
        .query_map(duckdb::params![ref_no], |row| row.get(0))
        .map_err(|e| StoreError::QueryError(format!("query lookup column: {e}")))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StoreError::QueryError(format!("collect lookup column: {e}")))?;
    Ok(values)
}
