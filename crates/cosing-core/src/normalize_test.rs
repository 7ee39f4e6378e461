//! Tests for raw field normalization.

use super::*;

// ── clean_text ─────────────────────────────────────────────────────────

#[test]
fn clean_text_trims_whitespace() {
    assert_eq!(clean_text("  GLYCERIN  "), Some("GLYCERIN".to_string()));
}

#[test]
fn clean_text_strips_leading_non_breaking_space() {
    assert_eq!(clean_text("\u{a0}GLYCERIN"), Some("GLYCERIN".to_string()));
    assert_eq!(clean_text(" \u{a0} GLYCERIN "), Some("GLYCERIN".to_string()));
}

#[test]
fn clean_text_maps_empty_to_none() {
    assert_eq!(clean_text(""), None);
    assert_eq!(clean_text("   "), None);
}

#[test]
fn clean_text_maps_placeholder_to_none() {
    assert_eq!(clean_text("-"), None);
    assert_eq!(clean_text(" - "), None);
}

// ── split_values ───────────────────────────────────────────────────────

#[test]
fn split_preserves_order() {
    assert_eq!(
        split_values("58-61-7 / 58-63-9 / 61-19-8", '/'),
        vec!["58-61-7", "58-63-9", "61-19-8"]
    );
}

#[test]
fn split_drops_empty_pieces() {
    assert_eq!(split_values("A //  / B", '/'), vec!["A", "B"]);
}

#[test]
fn split_single_clean_value_is_idempotent() {
    // An already-clean value with no separator yields itself.
    assert_eq!(split_values("58-61-7", '/'), vec!["58-61-7"]);
}

#[test]
fn split_functions_on_comma() {
    assert_eq!(
        split_values("SKIN CONDITIONING, EMOLLIENT", ','),
        vec!["SKIN CONDITIONING", "EMOLLIENT"]
    );
}

// ── convert_date ───────────────────────────────────────────────────────

#[test]
fn convert_date_reformats_valid_dates() {
    assert_eq!(convert_date("01/06/2020"), "2020-06-01");
    assert_eq!(convert_date("31/12/1999"), "1999-12-31");
}

#[test]
fn convert_date_passes_garbage_through() {
    assert_eq!(convert_date("not-a-date"), "not-a-date");
    assert_eq!(convert_date("2020-06-01"), "2020-06-01");
    assert_eq!(convert_date("32/13/2020"), "32/13/2020");
}
