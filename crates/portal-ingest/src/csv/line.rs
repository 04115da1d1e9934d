use csv::{ReaderBuilder, StringRecord};

use super::Delimiter;

/// Parses one line of text into trimmed fields.
///
/// Fields may be double-quoted; a doubled quote inside a quoted field is a
/// literal quote. An empty line yields no fields.
pub(crate) fn parse_line(line: &str, delimiter: Delimiter) -> Vec<String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter.as_byte())
        .from_reader(line.as_bytes());
    let mut record = StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(true) => record.iter().map(|field| field.trim().to_string()).collect(),
        Ok(false) | Err(_) => Vec::new(),
    }
}

/// Parses a header line, dropping empty column names.
pub(crate) fn parse_header(line: &str, delimiter: Delimiter) -> Vec<String> {
    parse_line(line, delimiter)
        .into_iter()
        .filter(|name| !name.is_empty())
        .collect()
}
