//! Encoding/delimiter search over uploaded bytes.

use portal_model::{Dataset, Record};
use tracing::{debug, trace};

use crate::csv::{Delimiter, parse_header, parse_line};
use crate::encoding::TextEncoding;
use crate::error::{DecodeError, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Minimum number of columns in the header and in every data row.
const MIN_COLUMNS: usize = 2;

/// Search space for [`decode_with_options`].
///
/// Encodings form the outer loop and delimiters the inner loop; the first
/// combination that yields a data row wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    pub encodings: Vec<TextEncoding>,
    pub delimiters: Vec<Delimiter>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            encodings: TextEncoding::ALL.to_vec(),
            delimiters: Delimiter::ALL.to_vec(),
        }
    }
}

/// A decoded dataset together with the combination that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDataset {
    pub dataset: Dataset,
    pub encoding: TextEncoding,
    pub delimiter: Delimiter,
}

/// Decodes raw upload bytes using the default encoding/delimiter order.
pub fn decode(bytes: &[u8]) -> Result<Dataset> {
    decode_detailed(bytes, &DecodeOptions::default()).map(|decoded| decoded.dataset)
}

/// Decodes raw upload bytes using a custom search space.
pub fn decode_with_options(bytes: &[u8], options: &DecodeOptions) -> Result<Dataset> {
    decode_detailed(bytes, options).map(|decoded| decoded.dataset)
}

/// Decodes raw upload bytes, reporting which encoding and delimiter won.
pub fn decode_detailed(bytes: &[u8], options: &DecodeOptions) -> Result<DecodedDataset> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if bytes.iter().all(|&byte| is_blank(byte)) {
        return Err(DecodeError::EmptyInput);
    }

    for &encoding in &options.encodings {
        let Some(text) = encoding.decode(bytes) else {
            trace!(%encoding, "input is not valid in this encoding");
            continue;
        };
        for &delimiter in &options.delimiters {
            if let Some(dataset) = parse_dataset(&text, delimiter) {
                debug!(
                    %encoding,
                    %delimiter,
                    rows = dataset.len(),
                    columns = dataset.column_count(),
                    "decoded CSV"
                );
                return Ok(DecodedDataset {
                    dataset,
                    encoding,
                    delimiter,
                });
            }
            trace!(%encoding, %delimiter, "combination rejected");
        }
    }

    Err(DecodeError::Unparseable)
}

/// ASCII whitespace plus NUL and vertical tab.
fn is_blank(byte: u8) -> bool {
    byte.is_ascii_whitespace() || matches!(byte, b'\0' | b'\x0B')
}

/// Parses decoded text with one delimiter.
///
/// Returns `None` unless the header has at least two named columns and at
/// least one row has a value in the first column.
fn parse_dataset(text: &str, delimiter: Delimiter) -> Option<Dataset> {
    let lines: Vec<&str> = text.trim().split('\n').collect();
    if lines.len() < 2 {
        return None;
    }

    let header_fields = parse_header(lines[0].trim(), delimiter);
    if header_fields.len() < MIN_COLUMNS {
        return None;
    }

    let mut records = Vec::new();
    for line in &lines[1..] {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields = parse_line(line, delimiter);
        if fields.len() < MIN_COLUMNS {
            continue;
        }
        let record = zip_record(&header_fields, fields);
        if record.first_value().is_some_and(|value| !value.is_empty()) {
            records.push(record);
        }
    }

    if records.is_empty() {
        return None;
    }

    let mut header: Vec<String> = Vec::with_capacity(header_fields.len());
    for name in header_fields {
        if !header.contains(&name) {
            header.push(name);
        }
    }
    Some(Dataset::new(header, records))
}

/// Pairs header names with fields by position; missing fields become empty.
fn zip_record(header: &[String], fields: Vec<String>) -> Record {
    let mut values = fields.into_iter();
    let mut record = Record::with_capacity(header.len());
    for name in header {
        let value = values.next().unwrap_or_default();
        record.insert(name.as_str(), value.trim());
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(dataset: &Dataset) -> Vec<&str> {
        dataset.header().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_decode_simple() {
        let dataset = decode(b"Seat,Name,Total\n101,Ali,300\n102,Sara,200\n").unwrap();
        assert_eq!(headers(&dataset), vec!["Seat", "Name", "Total"]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[1].get("Name"), Some("Sara"));
    }

    #[test]
    fn test_decode_strips_bom() {
        let dataset = decode(b"\xEF\xBB\xBFSeat,Name\n101,Ali\n").unwrap();
        assert_eq!(headers(&dataset), vec!["Seat", "Name"]);
    }

    #[test]
    fn test_decode_empty_input() {
        assert_eq!(decode(b""), Err(DecodeError::EmptyInput));
        assert_eq!(decode(b"  \r\n\t "), Err(DecodeError::EmptyInput));
        assert_eq!(decode(b"\xEF\xBB\xBF\n"), Err(DecodeError::EmptyInput));
    }

    #[test]
    fn test_decode_nul_and_vertical_tab_only() {
        assert_eq!(decode(b"\x0b\x00 \n"), Err(DecodeError::EmptyInput));
        assert_eq!(decode(b"\x00\x00"), Err(DecodeError::EmptyInput));
    }

    #[test]
    fn test_decode_header_only() {
        assert_eq!(decode(b"Seat,Name,Total\n"), Err(DecodeError::Unparseable));
    }

    #[test]
    fn test_decode_single_column_rejected() {
        assert_eq!(decode(b"Seat\n101\n102\n"), Err(DecodeError::Unparseable));
    }

    #[test]
    fn test_decode_crlf_line_endings() {
        let dataset = decode(b"Seat,Name\r\n101,Ali\r\n102,Sara\r\n").unwrap();
        assert_eq!(dataset.records()[0].get("Name"), Some("Ali"));
        assert_eq!(dataset.records()[1].get("Name"), Some("Sara"));
    }

    #[test]
    fn test_decode_semicolon() {
        let decoded =
            decode_detailed(b"Seat;Name;Total\n101;Ali;300\n", &DecodeOptions::default())
                .unwrap();
        assert_eq!(decoded.delimiter, Delimiter::Semicolon);
        assert_eq!(decoded.encoding, TextEncoding::Utf8);
        assert_eq!(decoded.dataset.records()[0].get("Total"), Some("300"));
    }

    #[test]
    fn test_decode_tab() {
        let decoded =
            decode_detailed(b"Seat\tName\n101\tAli\n", &DecodeOptions::default()).unwrap();
        assert_eq!(decoded.delimiter, Delimiter::Tab);
    }

    #[test]
    fn test_decode_prefers_comma_when_ambiguous() {
        let decoded = decode_detailed(b"A,B;C\n1,2;3", &DecodeOptions::default()).unwrap();
        assert_eq!(decoded.delimiter, Delimiter::Comma);
        assert_eq!(headers(&decoded.dataset), vec!["A", "B;C"]);
        assert_eq!(decoded.dataset.records()[0].get("B;C"), Some("2;3"));
    }

    #[test]
    fn test_decode_falls_back_to_latin1() {
        let decoded =
            decode_detailed(b"Seat,Name\n101,Jos\xe9\n", &DecodeOptions::default()).unwrap();
        assert_eq!(decoded.encoding, TextEncoding::Latin1);
        assert_eq!(decoded.dataset.records()[0].get("Name"), Some("José"));
    }

    #[test]
    fn test_decode_custom_encoding_order() {
        let options = DecodeOptions {
            encodings: vec![TextEncoding::Utf8, TextEncoding::Windows1256],
            delimiters: vec![Delimiter::Comma],
        };
        let decoded = decode_detailed(b"Seat,Name\n101,\xc7\xd3\xe3\n", &options).unwrap();
        assert_eq!(decoded.encoding, TextEncoding::Windows1256);
        assert_eq!(decoded.dataset.records()[0].get("Name"), Some("اسم"));
    }

    #[test]
    fn test_decode_short_rows_padded_and_long_rows_truncated() {
        let dataset = decode(b"Seat,Name,Total\n101,Ali\n102,Sara,200,extra\n").unwrap();
        assert_eq!(dataset.records()[0].get("Total"), Some(""));
        assert_eq!(dataset.records()[1].len(), 3);
        assert_eq!(dataset.records()[1].get("Total"), Some("200"));
    }

    #[test]
    fn test_decode_skips_rows_without_primary_value() {
        let dataset = decode(b"Seat,Name\n,Ghost\n101,Ali\n\n42\n").unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].get("Seat"), Some("101"));
    }

    #[test]
    fn test_decode_trims_values() {
        let dataset = decode(b" Seat , Name \n  101 ,  Ali  \n").unwrap();
        assert_eq!(headers(&dataset), vec!["Seat", "Name"]);
        assert_eq!(dataset.records()[0].get("Name"), Some("Ali"));
    }

    #[test]
    fn test_decode_duplicate_header_keeps_last_value() {
        let dataset = decode(b"Seat,Name,Name\n101,Ali,Alia\n").unwrap();
        assert_eq!(headers(&dataset), vec!["Seat", "Name"]);
        assert_eq!(dataset.records()[0].get("Name"), Some("Alia"));
    }
}
