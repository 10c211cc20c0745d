use std::mem::take;

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Line tokenizer
// ---------------------------------------------------------------------------

/// Split one CSV line into trimmed fields.
///
/// Commas inside a quoted span are literal and `""` inside a quoted span is a
/// single quote. Any other quote toggles the quoted state, so malformed input
/// (e.g. an unterminated quote) still yields a best-effort field list.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                field.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(take(&mut field).trim().to_string()),
            c => field.push(c),
        }
    }
    fields.push(field.trim().to_string());
    fields
}

// ---------------------------------------------------------------------------
// Whole document
// ---------------------------------------------------------------------------

/// Parse a full CSV document: first line is the header, the rest are rows.
///
/// Rows are zipped positionally against the header; short rows are padded
/// with `""` and surplus cells are dropped. Never fails.
pub fn parse(raw: &str) -> Dataset {
    let text = raw.trim().replace('\r', "");
    let mut lines = text.split('\n');

    let columns: Vec<String> = match lines.next() {
        Some(header) => parse_line(header),
        None => return Dataset::default(),
    };

    let records: Vec<Record> = lines
        .enumerate()
        .map(|(i, line)| {
            let values = parse_line(line);
            if values.len() != columns.len() {
                log::warn!(
                    "row {}: {} fields, header has {}",
                    i + 1,
                    values.len(),
                    columns.len()
                );
            }
            columns
                .iter()
                .enumerate()
                .map(|(j, col)| (col.as_str(), values.get(j).map(String::as_str).unwrap_or("")))
                .collect()
        })
        .collect();

    Dataset::new(columns, records)
}
