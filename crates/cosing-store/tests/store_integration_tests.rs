//! Integration tests for store ingestion and querying.
//!
//! These tests build synthetic COSING records, ingest them into an
//! in-memory store, and verify behavior through the query facade plus
//! direct SQL where the facade hides the detail.

use cosing_core::RawRecord;
use cosing_store::loader::apply_schema;
use cosing_store::query::{
    all_functions, ingredient_by_ref, ingredients_by_function, search_by_cas, search_ingredients,
    skin_conditioning_ingredients, store_stats,
};
use cosing_store::{export, ingest_dataset, CosingDb};

// ── Helpers ────────────────────────────────────────────────────────────

fn record(line: u64, ref_no: &str, inci: &str, cas: &str, ec: &str, function: &str) -> RawRecord {
    RawRecord {
        line,
        ref_no: ref_no.to_string(),
        inci_name: inci.to_string(),
        cas_no: cas.to_string(),
        ec_no: ec.to_string(),
        function: function.to_string(),
        ..Default::default()
    }
}

fn sample_records() -> Vec<RawRecord> {
    vec![
        RawRecord {
            line: 2,
            ref_no: "31367".to_string(),
            inci_name: "ADENOSINE PHOSPHATE".to_string(),
            cas_no: "58-61-7 / 61-19-8".to_string(),
            ec_no: "200-389-9 / 200-499-4".to_string(),
            chemical_description: "Adenosine 5'-monophosphate".to_string(),
            function: "SKIN CONDITIONING, EMOLLIENT".to_string(),
            restriction: "III/1".to_string(),
            update_date: "01/06/2020".to_string(),
            ..Default::default()
        },
        record(3, "100", "GLYCERIN", "56-81-5", "200-289-5", "SKIN CONDITIONING"),
        record(4, "200", "KERATIN", "68238-35-7", "", "HAIR CONDITIONING"),
        record(5, "300", "AQUA", "7732-18-5", "231-791-2", "SOLVENT"),
    ]
}

fn loaded_store() -> CosingDb {
    let db = CosingDb::open_memory().unwrap();
    apply_schema(db.conn());
    ingest_dataset(&db, &sample_records()).unwrap();
    db
}

fn direct_count(db: &CosingDb, table: &str) -> i64 {
    db.conn()
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })
        .unwrap()
}

// ── Ingestion ──────────────────────────────────────────────────────────

#[test]
fn functions_are_deduplicated_across_the_dataset() {
    let db = loaded_store();
    // SKIN CONDITIONING appears on two records but is stored once.
    let names = all_functions(&db).unwrap();
    assert_eq!(
        names,
        vec!["EMOLLIENT", "HAIR CONDITIONING", "SKIN CONDITIONING", "SOLVENT"]
    );
}

#[test]
fn packed_function_field_creates_two_associations() {
    let db = loaded_store();
    let links: i64 = db
        .conn()
        .query_row(
            "SELECT COUNT(*) FROM ingredient_functions WHERE ingredient_ref = 31367",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(links, 2);
}

#[test]
fn lookup_returns_normalized_multi_values() {
    let db = loaded_store();
    let detail = ingredient_by_ref(&db, 31367).unwrap().unwrap();

    assert_eq!(detail.inci_name.as_deref(), Some("ADENOSINE PHOSPHATE"));
    assert_eq!(detail.cas_numbers, vec!["58-61-7", "61-19-8"]);
    assert_eq!(detail.ec_numbers, vec!["200-389-9", "200-499-4"]);
    assert_eq!(detail.functions, vec!["EMOLLIENT", "SKIN CONDITIONING"]);
    assert_eq!(detail.update_date.as_deref(), Some("2020-06-01"));
    assert_eq!(detail.restriction.as_deref(), Some("III/1"));
}

#[test]
fn first_listed_registry_number_is_primary() {
    let db = loaded_store();
    let primary: String = db
        .conn()
        .query_row(
            "SELECT cas_number FROM cas_numbers \
             WHERE ingredient_ref = 31367 AND is_primary",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(primary, "58-61-7");

    let secondary_primary: i64 = db
        .conn()
        .query_row(
            "SELECT COUNT(*) FROM cas_numbers \
             WHERE ingredient_ref = 31367 AND ordinal > 0 AND is_primary",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(secondary_primary, 0);
}

#[test]
fn missing_ref_no_aborts_the_run() {
    let db = CosingDb::open_memory().unwrap();
    apply_schema(db.conn());

    let mut records = sample_records();
    records.push(record(6, "", "ORPHAN", "", "", ""));

    assert!(ingest_dataset(&db, &records).is_err());
}

#[test]
fn duplicate_ref_no_keeps_last_record_only() {
    let db = CosingDb::open_memory().unwrap();
    apply_schema(db.conn());

    let records = vec![
        record(2, "100", "OLD NAME", "11-11-1 / 22-22-2", "", "SOLVENT"),
        record(3, "100", "NEW NAME", "33-33-3", "", "EMOLLIENT"),
    ];
    ingest_dataset(&db, &records).unwrap();

    let detail = ingredient_by_ref(&db, 100).unwrap().unwrap();
    assert_eq!(detail.inci_name.as_deref(), Some("NEW NAME"));
    assert_eq!(detail.cas_numbers, vec!["33-33-3"]);
    assert_eq!(detail.functions, vec!["EMOLLIENT"]);
}

#[test]
fn reload_on_identical_input_is_idempotent() {
    let db = CosingDb::open_memory().unwrap();
    apply_schema(db.conn());

    let first = ingest_dataset(&db, &sample_records()).unwrap();
    let second = ingest_dataset(&db, &sample_records()).unwrap();

    assert_eq!(first.ingredients, second.ingredients);
    assert_eq!(first.functions, second.functions);
    assert_eq!(first.restrictions, second.restrictions);
    assert_eq!(first.function_assignments, second.function_assignments);
    assert_eq!(first.cas_numbers, second.cas_numbers);
    assert_eq!(first.ec_numbers, second.ec_numbers);
}

// ── Query facade ───────────────────────────────────────────────────────

#[test]
fn lookup_of_unknown_ref_is_none_not_error() {
    let db = loaded_store();
    assert!(ingredient_by_ref(&db, 999_999).unwrap().is_none());
}

#[test]
fn cas_search_finds_primary_and_secondary_listings() {
    let db = CosingDb::open_memory().unwrap();
    apply_schema(db.conn());
    let records = vec![
        record(2, "1", "FIRST", "58-61-7", "", ""),
        record(3, "2", "SECOND", "99-99-9 / 58-61-7", "", ""),
        record(4, "3", "OTHER", "11-11-1", "", ""),
    ];
    ingest_dataset(&db, &records).unwrap();

    let matches = search_by_cas(&db, "58-61-7").unwrap();
    let refs: Vec<i64> = matches.iter().map(|m| m.cosing_ref_no).collect();
    assert_eq!(refs, vec![1, 2]);
}

#[test]
fn function_search_is_case_insensitive_and_name_ordered() {
    let db = loaded_store();
    let matches = ingredients_by_function(&db, "skin conditioning", 50).unwrap();
    let names: Vec<&str> = matches
        .iter()
        .map(|m| m.inci_name.as_deref().unwrap())
        .collect();
    assert_eq!(names, vec!["ADENOSINE PHOSPHATE", "GLYCERIN"]);
}

#[test]
fn skin_shortcut_matches_function_search() {
    let db = loaded_store();
    let via_shortcut = skin_conditioning_ingredients(&db, 50).unwrap();
    let via_search = ingredients_by_function(&db, "SKIN CONDITIONING", 50).unwrap();
    assert_eq!(via_shortcut.len(), via_search.len());
}

#[test]
fn full_text_search_degrades_without_index() {
    // The index is only built by the post-load optimizer; before that the
    // search must return an empty result, never an error.
    let db = loaded_store();
    let hits = search_ingredients(&db, "adenosine", 10).unwrap();
    let _ = hits;
}

#[test]
fn stats_totals_match_direct_counts() {
    let db = loaded_store();
    let stats = store_stats(&db).unwrap();

    assert_eq!(stats.total_ingredients, direct_count(&db, "ingredients"));
    assert_eq!(stats.total_functions, direct_count(&db, "functions"));
    assert_eq!(
        stats.total_function_assignments,
        direct_count(&db, "ingredient_functions")
    );
    assert_eq!(stats.total_cas_numbers, direct_count(&db, "cas_numbers"));
    assert_eq!(stats.total_ec_numbers, direct_count(&db, "ec_numbers"));
}

#[test]
fn top_functions_rank_by_count_then_name() {
    let db = loaded_store();
    let stats = store_stats(&db).unwrap();

    assert_eq!(stats.top_functions[0].function, "SKIN CONDITIONING");
    assert_eq!(stats.top_functions[0].count, 2);
    // Singles tie on count and fall back to name order.
    let singles: Vec<&str> = stats.top_functions[1..]
        .iter()
        .map(|f| f.function.as_str())
        .collect();
    assert_eq!(singles, vec!["EMOLLIENT", "HAIR CONDITIONING", "SOLVENT"]);
}

// ── Export ─────────────────────────────────────────────────────────────

#[test]
fn export_rows_are_name_ordered_with_categories() {
    let db = loaded_store();
    let rows = export::fetch_export_rows(&db).unwrap();

    let names: Vec<&str> = rows
        .iter()
        .map(|r| r.inci_name.as_deref().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["ADENOSINE PHOSPHATE", "AQUA", "GLYCERIN", "KERATIN"]
    );

    let by_name = |name: &str| rows.iter().find(|r| r.inci_name.as_deref() == Some(name));
    assert_eq!(by_name("GLYCERIN").unwrap().category(), "skincare");
    assert_eq!(by_name("KERATIN").unwrap().category(), "haircare");
    assert_eq!(by_name("AQUA").unwrap().category(), "general");
}

#[test]
fn export_skin_beats_hair_when_both_present() {
    let db = CosingDb::open_memory().unwrap();
    apply_schema(db.conn());
    let records = vec![record(
        2,
        "1",
        "BOTH",
        "",
        "",
        "SKIN CONDITIONING, HAIR CONDITIONING",
    )];
    ingest_dataset(&db, &records).unwrap();

    let rows = export::fetch_export_rows(&db).unwrap();
    assert_eq!(rows[0].category(), "skincare");
}

#[test]
fn export_writes_one_block_per_ingredient() {
    let db = loaded_store();
    let rows = export::fetch_export_rows(&db).unwrap();
    let mut out = Vec::new();
    export::write_export(&rows, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.matches('[').count(), 4);
    assert!(text.contains("[31367]"));
    assert!(text.contains("functions = EMOLLIENT|SKIN CONDITIONING"));
    assert!(text.contains("restriction = III/1"));
}
