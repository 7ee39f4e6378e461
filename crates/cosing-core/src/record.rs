//! COSING record model.
//!
//! [`RawRecord`] is one source row as read from the TSV, fields untouched.
//! [`NormalizedIngredient`] is the cleaned form the ingestion pipeline
//! consumes: scalars scrubbed, multi-value fields split, date reformatted.

use crate::error::CoreError;
use crate::normalize::{clean_text, convert_date, split_values};
use serde::Serialize;

/// Separator for packed CAS and EC registry numbers.
pub const REGISTRY_SEPARATOR: char = '/';

/// Separator for packed function names.
pub const FUNCTION_SEPARATOR: char = ',';

/// One raw row from the COSING TSV export.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    /// 1-based line number in the source file, for error reporting.
    pub line: u64,
    pub ref_no: String,
    pub inci_name: String,
    pub inn_name: String,
    pub ph_eur_name: String,
    pub cas_no: String,
    pub ec_no: String,
    pub chemical_description: String,
    pub function: String,
    pub restriction: String,
    pub update_date: String,
}

/// A fully normalized ingredient record, ready for insertion.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedIngredient {
    /// COSING reference number, the identity every dependent row joins on.
    pub ref_no: i64,
    pub inci_name: Option<String>,
    pub inn_name: Option<String>,
    pub ph_eur_name: Option<String>,
    /// Raw CAS field as cleaned text; the split values live in `cas_numbers`.
    pub cas_no: Option<String>,
    /// Raw EC field as cleaned text; the split values live in `ec_numbers`.
    pub ec_no: Option<String>,
    pub chemical_description: Option<String>,
    pub restriction: Option<String>,
    /// ISO 8601 when the source date parsed, the original text otherwise.
    pub update_date: Option<String>,
    /// Parsed CAS numbers, position 0 is primary.
    pub cas_numbers: Vec<String>,
    /// Parsed EC numbers, position 0 is primary.
    pub ec_numbers: Vec<String>,
    /// Parsed function names, order as listed in the source.
    pub functions: Vec<String>,
}

impl RawRecord {
    /// Normalize every field of this record.
    ///
    /// Fails when the reference number is absent or not an integer; the
    /// pipeline never synthesizes identities.
    pub fn normalize(&self) -> Result<NormalizedIngredient, CoreError> {
        let ref_text = clean_text(&self.ref_no).ok_or(CoreError::MissingRefNo { line: self.line })?;
        let ref_no: i64 = ref_text.parse().map_err(|_| CoreError::InvalidRefNo {
            line: self.line,
            value: ref_text.clone(),
        })?;

        Ok(NormalizedIngredient {
            ref_no,
            inci_name: clean_text(&self.inci_name),
            inn_name: clean_text(&self.inn_name),
            ph_eur_name: clean_text(&self.ph_eur_name),
            cas_no: clean_text(&self.cas_no),
            ec_no: clean_text(&self.ec_no),
            chemical_description: clean_text(&self.chemical_description),
            restriction: clean_text(&self.restriction),
            update_date: clean_text(&self.update_date).map(|d| convert_date(&d)),
            cas_numbers: split_values(&self.cas_no, REGISTRY_SEPARATOR),
            ec_numbers: split_values(&self.ec_no, REGISTRY_SEPARATOR),
            functions: split_values(&self.function, FUNCTION_SEPARATOR),
        })
    }
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
