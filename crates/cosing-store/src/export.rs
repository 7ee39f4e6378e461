//! Denormalized key=value export.
//!
//! One block per ingredient, blank-line delimited, with a derived category
//! label. Fields are emitted only when present.

use crate::connection::CosingDb;
use crate::error::{StoreError, StoreResult};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

/// One denormalized export block.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRow {
    pub ref_no: i64,
    pub inci_name: Option<String>,
    pub description: Option<String>,
    /// Pipe-joined function names, absent when the ingredient has none.
    pub functions: Option<String>,
    pub cas_no: Option<String>,
    pub ec_no: Option<String>,
    pub restriction: Option<String>,
}

impl ExportRow {
    /// Derived category label.
    ///
    /// The skin check always precedes the hair check: a function list
    /// containing both substrings is labeled `skincare`.
    pub fn category(&self) -> &'static str {
        let functions = self.functions.as_deref().unwrap_or("");
        if functions.contains("SKIN") {
            "skincare"
        } else if functions.contains("HAIR") {
            "haircare"
        } else {
            "general"
        }
    }
}

/// Fetch all export rows, ordered by INCI name.
pub fn fetch_export_rows(db: &CosingDb) -> StoreResult<Vec<ExportRow>> {
    let mut stmt = db
        .conn()
        .prepare(
            "SELECT i.cosing_ref_no, i.inci_name, i.chemical_description, \
                    string_agg(f.function_name, '|' ORDER BY f.function_name) AS functions, \
                    i.cas_no, i.ec_no, i.restriction \
             FROM ingredients i \
             LEFT JOIN ingredient_functions link ON i.cosing_ref_no = link.ingredient_ref \
             LEFT JOIN functions f ON link.function_id = f.id \
             GROUP BY i.cosing_ref_no, i.inci_name, i.chemical_description, \
                      i.cas_no, i.ec_no, i.restriction \
             ORDER BY i.inci_name",
        )
        .map_err(|e| StoreError::QueryError(format!("prepare export: {e}")))?;

    let rows: Vec<ExportRow> = stmt
        .query_map([], |row| {
            Ok(ExportRow {
                ref_no: row.get(0)?,
                inci_name: row.get(1)?,
                description: row.get(2)?,
                functions: row.get(3)?,
                cas_no: row.get(4)?,
                ec_no: row.get(5)?,
                restriction: row.get(6)?,
            })
        })
        .map_err(|e| StoreError::QueryError(format!("query export: {e}")))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StoreError::QueryError(format!("collect export: {e}")))?;
    Ok(rows)
}

/// Write export rows as blank-line-delimited key=value blocks.
pub fn write_export<W: Write>(rows: &[ExportRow], out: &mut W) -> io::Result<()> {
    writeln!(out, "# INCI ingredient export")?;
    writeln!(out, "# Format: one key=value block per ingredient")?;
    writeln!(out)?;

    for row in rows {
        writeln!(out, "[{}]", row.ref_no)?;
        if let Some(name) = &row.inci_name {
            writeln!(out, "inci_name = {name}")?;
        }
        if let Some(description) = &row.description {
            writeln!(out, "description = {description}")?;
        }
        if let Some(functions) = &row.functions {
            writeln!(out, "functions = {functions}")?;
        }
        if let Some(cas_no) = &row.cas_no {
            writeln!(out, "cas_no = {cas_no}")?;
        }
        if let Some(ec_no) = &row.ec_no {
            writeln!(out, "ec_no = {ec_no}")?;
        }
        writeln!(out, "category = {}", row.category())?;
        if let Some(restriction) = &row.restriction {
            writeln!(out, "restriction = {restriction}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Export the whole store to a file at `path`.
///
/// Returns the number of blocks written.
pub fn export_to_path(db: &CosingDb, path: &Path) -> StoreResult<usize> {
    let rows = fetch_export_rows(db)?;
    let file = std::fs::File::create(path)?;
    let mut out = io::BufWriter::new(file);
    write_export(&rows, &mut out)?;
    out.flush().map_err(StoreError::Io)?;
    Ok(rows.len())
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
