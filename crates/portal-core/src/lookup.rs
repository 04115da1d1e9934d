//! Seat number search.

use std::sync::LazyLock;

use portal_map::resolve_columns;
use portal_model::{Dataset, LookupResult, MAX_SCORE, Record, Status};
use regex::Regex;

use crate::error::LookupError;

/// Minimum total score classified as a pass when no status column exists.
pub const DEFAULT_PASS_THRESHOLD: f64 = 250.0;

/// Name shown when the record has no usable name.
pub const NAME_NOT_AVAILABLE: &str = "Name not available";

/// Total score shown when the dataset has no score column.
pub const SCORE_NOT_AVAILABLE: &str = "N/A";

/// Cell values treated as a missing name (compared lower-cased).
const NAME_PLACEHOLDERS: &[&str] = &["", "n/a", "nan", "none", "null"];

/// Anything that is not a letter, number, punctuation, separator or whitespace.
static DISALLOWED_NAME_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\p{N}\p{P}\p{Z}\s]").expect("Invalid name filter regex")
});

/// Scoring parameters applied to every lookup.
///
/// The pass threshold is an absolute score, independent of `max_score`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookupOptions {
    pub pass_threshold: f64,
    pub max_score: u32,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            pass_threshold: DEFAULT_PASS_THRESHOLD,
            max_score: MAX_SCORE,
        }
    }
}

/// Looks up `key` with the default scoring parameters.
pub fn lookup(dataset: Option<&Dataset>, key: &str) -> Result<LookupResult, LookupError> {
    lookup_with_options(dataset, key, &LookupOptions::default())
}

/// Finds the first record whose seat number equals `key`.
///
/// Matching trims both sides and ignores case. Column roles are resolved
/// against the dataset's own header on every call.
pub fn lookup_with_options(
    dataset: Option<&Dataset>,
    key: &str,
    options: &LookupOptions,
) -> Result<LookupResult, LookupError> {
    let dataset = dataset
        .filter(|dataset| !dataset.is_empty())
        .ok_or(LookupError::NoDataset)?;

    let key = key.trim();
    if key.is_empty() {
        return Err(LookupError::EmptyKey);
    }

    let columns = resolve_columns(dataset.header());
    let seat_column = columns.seat.as_deref().ok_or(LookupError::NoSeatColumn)?;

    let wanted = key.to_uppercase();
    let (index, record) = dataset
        .records()
        .iter()
        .enumerate()
        .find(|(_, record)| cell(record, Some(seat_column)).trim().to_uppercase() == wanted)
        .ok_or_else(|| LookupError::NotFound {
            key: key.to_string(),
        })?;

    let name = display_name(columns.name.as_deref().and_then(|column| record.get(column)));
    let total_score = columns
        .score
        .as_deref()
        .and_then(|column| record.get(column))
        .unwrap_or(SCORE_NOT_AVAILABLE)
        .to_string();
    let status = derive_status(
        cell(record, columns.status.as_deref()),
        &total_score,
        options.pass_threshold,
    );

    Ok(LookupResult {
        seat_number: cell(record, Some(seat_column)).to_string(),
        name,
        total_score,
        max_score: options.max_score,
        status,
        rank: index + 1,
        index,
        raw_record: record.clone(),
    })
}

/// Cleans a name cell for display.
///
/// Placeholder values such as `N/A` or `null` become
/// [`NAME_NOT_AVAILABLE`]; otherwise symbols and control characters are
/// removed, which may leave an empty name.
pub fn display_name(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return NAME_NOT_AVAILABLE.to_string();
    };
    let lowered = raw.trim().to_lowercase();
    if NAME_PLACEHOLDERS.contains(&lowered.as_str()) {
        return NAME_NOT_AVAILABLE.to_string();
    }
    DISALLOWED_NAME_CHARS
        .replace_all(raw, "")
        .trim()
        .to_string()
}

/// Parses a score cell, never failing.
///
/// `%` and `,` are removed, then the longest leading decimal number is
/// read. Text without a leading number yields `0.0`.
pub fn parse_score(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|ch| !matches!(ch, '%' | ',')).collect();
    leading_number(cleaned.trim_start()).unwrap_or(0.0)
}

fn leading_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer = digits_from(end);
    end += integer;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(end + 1);
        if integer > 0 || fraction > 0 {
            end += 1 + fraction;
        }
    }
    if integer == 0 && fraction == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digits_from(end + 1 + sign);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }
    text[..end].parse().ok()
}

fn derive_status(status_value: &str, total_score: &str, pass_threshold: f64) -> Status {
    let status_value = status_value.trim();
    if !status_value.is_empty() {
        return Status::from_column_value(status_value);
    }
    if total_score == SCORE_NOT_AVAILABLE {
        return Status::Unknown;
    }
    if parse_score(total_score) >= pass_threshold {
        Status::Pass
    } else {
        Status::Fail
    }
}

fn cell<'a>(record: &'a Record, column: Option<&str>) -> &'a str {
    column.and_then(|column| record.get(column)).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(header: &[&str], rows: &[&[&str]]) -> Dataset {
        let records = rows
            .iter()
            .map(|row| header.iter().copied().zip(row.iter().copied()).collect())
            .collect();
        Dataset::new(header.iter().map(|h| h.to_string()).collect(), records)
    }

    fn students() -> Dataset {
        dataset(
            &["Seat", "Name", "Total"],
            &[&["101", "Ali", "300"], &["102", "Sara", "200"]],
        )
    }

    #[test]
    fn finds_first_record() {
        let ds = students();
        let result = lookup(Some(&ds), "101").unwrap();
        assert_eq!(result.seat_number, "101");
        assert_eq!(result.name, "Ali");
        assert_eq!(result.total_score, "300");
        assert_eq!(result.max_score, 500);
        assert_eq!(result.status, Status::Pass);
        assert_eq!(result.rank, 1);
        assert_eq!(result.index, 0);
        assert_eq!(result.raw_record.get("Total"), Some("300"));
    }

    #[test]
    fn classifies_failing_score() {
        let ds = students();
        let result = lookup(Some(&ds), "102").unwrap();
        assert_eq!(result.rank, 2);
        assert_eq!(result.status, Status::Fail);
    }

    #[test]
    fn reports_missing_key() {
        let ds = students();
        assert_eq!(
            lookup(Some(&ds), "999"),
            Err(LookupError::NotFound {
                key: "999".to_string()
            })
        );
    }

    #[test]
    fn key_is_trimmed_and_case_insensitive() {
        let ds = dataset(&["Seat", "Name"], &[&["ab-101", "Ali"]]);
        let exact = lookup(Some(&ds), "ab-101").unwrap();
        assert_eq!(lookup(Some(&ds), "  AB-101 ").unwrap(), exact);
    }

    #[test]
    fn rejects_missing_dataset_and_key() {
        assert_eq!(lookup(None, "101"), Err(LookupError::NoDataset));
        let empty = Dataset::new(vec!["Seat".into(), "Name".into()], Vec::new());
        assert_eq!(lookup(Some(&empty), "101"), Err(LookupError::NoDataset));
        let ds = students();
        assert_eq!(lookup(Some(&ds), "   "), Err(LookupError::EmptyKey));
    }

    #[test]
    fn rejects_dataset_without_header() {
        let record: Record = [("Seat", "101")].into_iter().collect();
        let headerless = Dataset::new(Vec::new(), vec![record]);
        assert_eq!(lookup(Some(&headerless), "101"), Err(LookupError::NoSeatColumn));
    }

    #[test]
    fn status_column_wins_over_score() {
        let ds = dataset(
            &["Seat", "Name", "Total", "Status"],
            &[&["101", "Ali", "480", "withdrawn"]],
        );
        let result = lookup(Some(&ds), "101").unwrap();
        assert_eq!(result.status, Status::Other("WITHDRAWN".to_string()));
    }

    #[test]
    fn empty_status_cell_falls_back_to_score() {
        let ds = dataset(
            &["Seat", "Name", "Total", "Result"],
            &[&["101", "Ali", "250", ""]],
        );
        assert_eq!(lookup(Some(&ds), "101").unwrap().status, Status::Pass);
    }

    #[test]
    fn unknown_without_score_or_status() {
        let ds = dataset(&["Seat", "Name"], &[&["101", "Ali"]]);
        let result = lookup(Some(&ds), "101").unwrap();
        assert_eq!(result.total_score, SCORE_NOT_AVAILABLE);
        assert_eq!(result.status, Status::Unknown);
    }

    #[test]
    fn custom_threshold_and_max_score() {
        let ds = students();
        let options = LookupOptions {
            pass_threshold: 150.0,
            max_score: 410,
        };
        let result = lookup_with_options(Some(&ds), "102", &options).unwrap();
        assert_eq!(result.status, Status::Pass);
        assert_eq!(result.max_score, 410);
    }

    #[test]
    fn symbol_only_name_is_cleaned_to_empty() {
        let ds = dataset(&["Seat", "Name", "Total"], &[&["101", "$$$", "300"]]);
        assert_eq!(lookup(Some(&ds), "101").unwrap().name, "");
    }

    #[test]
    fn missing_name_column_is_reported() {
        let ds = dataset(&["Seat", "Total"], &[&["101", "300"]]);
        assert_eq!(lookup(Some(&ds), "101").unwrap().name, NAME_NOT_AVAILABLE);
    }

    #[test]
    fn display_name_placeholders() {
        assert_eq!(display_name(Some("N/A")), NAME_NOT_AVAILABLE);
        assert_eq!(display_name(Some("n/a")), NAME_NOT_AVAILABLE);
        assert_eq!(display_name(Some("NULL")), NAME_NOT_AVAILABLE);
        assert_eq!(display_name(Some("")), NAME_NOT_AVAILABLE);
        assert_eq!(display_name(None), NAME_NOT_AVAILABLE);
    }

    #[test]
    fn display_name_strips_symbols() {
        assert_eq!(display_name(Some("John123!@#$+~")), "John123!@#");
        assert_eq!(display_name(Some("Ali\u{1F600} Hassan")), "Ali Hassan");
        assert_eq!(display_name(Some("\u{7}Sara ")), "Sara");
        assert_eq!(display_name(Some("أحمد علي")), "أحمد علي");
        assert_eq!(display_name(Some("$$$")), "");
    }

    #[test]
    fn parse_score_is_total() {
        assert_eq!(parse_score("300"), 300.0);
        assert_eq!(parse_score("85.5%"), 85.5);
        assert_eq!(parse_score("1,250"), 1250.0);
        assert_eq!(parse_score(" 260 points"), 260.0);
        assert_eq!(parse_score("-12"), -12.0);
        assert_eq!(parse_score(".5"), 0.5);
        assert_eq!(parse_score("2e2"), 200.0);
        assert_eq!(parse_score("3e"), 3.0);
        assert_eq!(parse_score("absent"), 0.0);
        assert_eq!(parse_score(""), 0.0);
        assert_eq!(parse_score("-"), 0.0);
        assert_eq!(parse_score("."), 0.0);
    }
}
