//! Ingredient row insertion with fan-out.
//!
//! Each ingredient is upserted by reference number (last write wins), its
//! previous fan-out rows are cleared, and fresh CAS/EC and function
//! association rows are written. Clearing before re-inserting keeps the
//! dependent tables referentially consistent when the source lists the
//! same reference number more than once.

use crate::error::{StoreError, StoreResult};
use cosing_core::NormalizedIngredient;
use duckdb::Connection;
use std::collections::HashMap;

/// Insert one normalized ingredient and all its dependent rows.
pub fn insert_ingredient(
    conn: &Connection,
    ingredient: &NormalizedIngredient,
    catalog: &HashMap<String, i64>,
) -> StoreResult<()> {
    upsert_base_row(conn, ingredient)?;
    clear_fanout(conn, ingredient.ref_no)?;
    insert_registry_numbers(conn, ingredient)?;
    insert_function_links(conn, ingredient, catalog)?;
    Ok(())
}

fn upsert_base_row(conn: &Connection, ingredient: &NormalizedIngredient) -> StoreResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO ingredients \
         (cosing_ref_no, inci_name, inn_name, ph_eur_name, cas_no, ec_no, \
          chemical_description, restriction, update_date) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        duckdb::params![
            ingredient.ref_no,
            ingredient.inci_name,
            ingredient.inn_name,
            ingredient.ph_eur_name,
            ingredient.cas_no,
            ingredient.ec_no,
            ingredient.chemical_description,
            ingredient.restriction,
            ingredient.update_date,
        ],
    )
    .map_err(|e| {
        StoreError::IngestError(format!("insert ingredient {}: {e}", ingredient.ref_no))
    })?;
    Ok(())
}

/// Remove any fan-out rows left by an earlier occurrence of this reference.
fn clear_fanout(conn: &Connection, ref_no: i64) -> StoreResult<()> {
    for table in ["cas_numbers", "ec_numbers", "ingredient_functions"] {
        conn.execute(
            &format!("DELETE FROM {table} WHERE ingredient_ref = ?"),
            duckdb::params![ref_no],
        )
        .map_err(|e| StoreError::IngestError(format!("clear {table} for {ref_no}: {e}")))?;
    }
    Ok(())
}

/// Insert CAS and EC fan-out rows; ordinal 0 carries the primary flag.
fn insert_registry_numbers(
    conn: &Connection,
    ingredient: &NormalizedIngredient,
) -> StoreResult<()> {
    for (ordinal, cas) in ingredient.cas_numbers.iter().enumerate() {
        conn.execute(
            "INSERT INTO cas_numbers (ingredient_ref, cas_number, ordinal, is_primary) \
             VALUES (?, ?, ?, ?)",
            duckdb::params![ingredient.ref_no, cas, ordinal as i64, ordinal == 0],
        )
        .map_err(|e| {
            StoreError::IngestError(format!("insert CAS for {}: {e}", ingredient.ref_no))
        })?;
    }
    for (ordinal, ec) in ingredient.ec_numbers.iter().enumerate() {
        conn.execute(
            "INSERT INTO ec_numbers (ingredient_ref, ec_number, ordinal, is_primary) \
             VALUES (?, ?, ?, ?)",
            duckdb::params![ingredient.ref_no, ec, ordinal as i64, ordinal == 0],
        )
        .map_err(|e| {
            StoreError::IngestError(format!("insert EC for {}: {e}", ingredient.ref_no))
        })?;
    }
    Ok(())
}

/// Insert association rows, resolved through the prebuilt catalog.
fn insert_function_links(
    conn: &Connection,
    ingredient: &NormalizedIngredient,
    catalog: &HashMap<String, i64>,
) -> StoreResult<()> {
    for name in &ingredient.functions {
        let function_id = catalog.get(name).ok_or_else(|| {
            StoreError::IngestError(format!(
                "function '{name}' missing from catalog for ingredient {}",
                ingredient.ref_no
            ))
        })?;
        conn.execute(
            "INSERT INTO ingredient_functions (ingredient_ref, function_id) \
             VALUES (?, ?) ON CONFLICT DO NOTHING",
            duckdb::params![ingredient.ref_no, function_id],
        )
        .map_err(|e| {
            StoreError::IngestError(format!("link function '{name}' to {}: {e}", ingredient.ref_no))
        })?;
    }
    Ok(())
}
