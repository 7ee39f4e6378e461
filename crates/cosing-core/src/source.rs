//! TSV source reader.
//!
//! Reads the COSING export (tab-separated, header row) into [`RawRecord`]s.
//! Header names are trimmed of surrounding whitespace and internal
//! non-breaking spaces are folded to plain spaces, because the published
//! export spells one column `Ph.\u{a0}Eur. Name`.

use crate::error::CoreError;
use crate::record::RawRecord;
use std::path::Path;

/// Expected columns of a COSING export, in no particular order.
pub const COLUMNS: &[&str] = &[
    "COSING Ref No",
    "INCI name",
    "INN name",
    "Ph. Eur. Name",
    "CAS No",
    "EC No",
    "Chem/IUPAC Name / Description",
    "Function",
    "Restriction",
    "Update Date",
];

/// Fold a header cell to its canonical spelling.
fn canonical_header(raw: &str) -> String {
    raw.trim().replace('\u{a0}', " ")
}

/// Read all records from a COSING TSV file.
///
/// Fails when the file is missing, unreadable, or lacks one of the
/// expected columns. Individual field values are returned untouched;
/// normalization happens later in the pipeline.
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>, CoreError> {
    if !path.exists() {
        return Err(CoreError::SourceNotFound {
            path: path.display().to_string(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_path(path)
        .map_err(|e| CoreError::SourceReadError {
            message: e.to_string(),
        })?;

    let headers = reader
        .headers()
        .map_err(|e| CoreError::SourceReadError {
            message: e.to_string(),
        })?
        .clone();

    let index_of = |column: &str| -> Result<usize, CoreError> {
        headers
            .iter()
            .position(|h| canonical_header(h) == column)
            .ok_or_else(|| CoreError::MissingColumn {
                column: column.to_string(),
            })
    };

    let idx_ref = index_of("COSING Ref No")?;
    let idx_inci = index_of("INCI name")?;
    let idx_inn = index_of("INN name")?;
    let idx_ph_eur = index_of("Ph. Eur. Name")?;
    let idx_cas = index_of("CAS No")?;
    let idx_ec = index_of("EC No")?;
    let idx_desc = index_of("Chem/IUPAC Name / Description")?;
    let idx_function = index_of("Function")?;
    let idx_restriction = index_of("Restriction")?;
    let idx_date = index_of("Update Date")?;

    let field = |record: &csv::StringRecord, idx: usize| -> String {
        record.get(idx).unwrap_or_default().to_string()
    };

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| CoreError::SourceReadError {
            message: e.to_string(),
        })?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        records.push(RawRecord {
            line,
            ref_no: field(&row, idx_ref),
            inci_name: field(&row, idx_inci),
            inn_name: field(&row, idx_inn),
            ph_eur_name: field(&row, idx_ph_eur),
            cas_no: field(&row, idx_cas),
            ec_no: field(&row, idx_ec),
            chemical_description: field(&row, idx_desc),
            function: field(&row, idx_function),
            restriction: field(&row, idx_restriction),
            update_date: field(&row, idx_date),
        });
    }

    log::debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
