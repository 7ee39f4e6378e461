//! cosing-core - Core library for cosingdb
//!
//! This crate provides the record normalizer and the TSV source reader
//! shared by the store and CLI crates.

pub mod error;
pub mod normalize;
pub mod record;
pub mod source;

pub use error::CoreError;
pub use normalize::{clean_text, convert_date, split_values};
pub use record::{NormalizedIngredient, RawRecord};
pub use source::read_records;
