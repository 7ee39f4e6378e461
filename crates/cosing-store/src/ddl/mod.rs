//! Embedded DDL for the ingredient store.
//!
//! The schema is a single `.sql` artifact embedded via `include_str!` and
//! applied verbatim, statement-by-statement, by [`crate::loader`].

/// The full store schema.
pub static SCHEMA: &str = include_str!("schema.sql");

/// Split the schema into individual statements.
///
/// Statements are separated on `;`; empty fragments are dropped.
pub fn statements() -> impl Iterator<Item = &'static str> {
    SCHEMA
        .split(';')
        .map(str::trim)
        .filter(|stmt| !stmt.is_empty())
}
