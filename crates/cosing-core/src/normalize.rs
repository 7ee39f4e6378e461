//! Raw field normalization.
//!
//! COSING exports carry a few artifacts that have to be scrubbed before
//! values reach the store: a leading U+00A0 (non-breaking space) on some
//! cells, `-` as an explicit "no value" placeholder, and delimiter-packed
//! multi-value fields (`/` for registry numbers, `,` for functions).

use chrono::NaiveDate;

/// Clean a raw field value, returning `None` when it carries no data.
///
/// Trims surrounding whitespace, strips a leading non-breaking space, and
/// maps the empty string and the `-` placeholder to `None`.
pub fn clean_text(value: &str) -> Option<String> {
    let mut text = value.trim();
    if let Some(rest) = text.strip_prefix('\u{a0}') {
        text = rest.trim();
    }
    if text.is_empty() || text == "-" {
        return None;
    }
    Some(text.to_string())
}

/// Split a delimiter-packed field into cleaned values, order preserved.
///
/// Empty pieces are dropped. Position 0 of the result is treated as the
/// primary value by the ingestion pipeline.
pub fn split_values(value: &str, separator: char) -> Vec<String> {
    value
        .split(separator)
        .filter_map(clean_text)
        .collect()
}

/// Convert a `DD/MM/YYYY` date to ISO 8601 (`YYYY-MM-DD`).
///
/// Anything that does not parse is passed through unchanged. The source
/// data mixes formats and the date is informational only, so this is a
/// lenient fallback rather than validation.
pub fn convert_date(value: &str) -> String {
    match NaiveDate::parse_from_str(value, "%d/%m/%Y") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
