//! cosing-store - Ingredient store for cosingdb.
//!
//! Provides a DuckDB-backed store for the COSING ingredient dataset:
//! destructive schema loading, the two-checkpoint ingestion pipeline,
//! post-load optimization, and the read-only query facade.

pub mod connection;
pub mod ddl;
pub mod error;
pub mod export;
pub mod ingest;
pub mod loader;
pub mod optimize;
pub mod query;

pub use connection::CosingDb;
pub use error::{StoreError, StoreResult};
pub use ingest::{ingest_dataset, IngestSummary};
pub use loader::create_store;
pub use optimize::optimize;
