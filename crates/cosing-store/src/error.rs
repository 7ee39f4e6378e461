//! Error types for the ingredient store.

use thiserror::Error;

/// Ingredient store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open or create the store (S001).
    #[error("[S001] Store connection failed: {0}")]
    ConnectionError(String),

    /// SQL execution error inside the store (S002).
    #[error("[S002] Store query failed: {0}")]
    QueryError(String),

    /// Transaction management error (S003).
    #[error("[S003] Store transaction failed: {0}")]
    TransactionError(String),

    /// Ingestion error, data could not be inserted (S004).
    #[error("[S004] Store ingestion failed: {0}")]
    IngestError(String),

    /// A source record failed normalization (S005).
    #[error("[S005] Record rejected")]
    Record(#[from] cosing_core::CoreError),

    /// Filesystem error while replacing the store file (S006).
    #[error("[S006] Store file error: {0}")]
    Io(#[from] std::io::Error),

    /// DuckDB driver error with preserved source chain (S007).
    #[error("[S007] DuckDB error")]
    DuckDb(#[source] duckdb::Error),
}

/// Result type alias for [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;

impl From<duckdb::Error> for StoreError {
    fn from(err: duckdb::Error) -> Self {
        StoreError::DuckDb(err)
    }
}
