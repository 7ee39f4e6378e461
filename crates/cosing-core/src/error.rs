//! Error types for cosing-core

use thiserror::Error;

/// Core error type for cosingdb
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: Source TSV file not found
    #[error("[C001] Source file not found: {path}")]
    SourceNotFound { path: String },

    /// C002: Failed to read the source file
    #[error("[C002] Failed to read source: {message}")]
    SourceReadError { message: String },

    /// C003: A required column is missing from the header row
    #[error("[C003] Missing column '{column}' in source header")]
    MissingColumn { column: String },

    /// C004: A record carries no reference number
    ///
    /// The reference number is the join key for every dependent table, so
    /// a record without one cannot be ingested.
    #[error("[C004] Record {line} has no COSING reference number")]
    MissingRefNo { line: u64 },

    /// C005: A reference number that is not an integer
    #[error("[C005] Record {line} has invalid reference number '{value}'")]
    InvalidRefNo { line: u64, value: String },
}
