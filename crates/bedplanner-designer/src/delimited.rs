//! Comma-separated text reading and writing.
//!
//! Shared by the catalog loader and the layout import/export. The reader is
//! quote-aware: a field wrapped in double quotes may contain commas, line
//! breaks and doubled quotes (`""` reads as one `"`). Empty fields are kept
//! so column positions never shift.

use std::collections::HashMap;

/// Split delimited text into records of fields.
///
/// Blank lines are skipped. Both `\n` and `\r\n` line endings are accepted.
/// A leading byte-order mark is ignored.
pub fn parse_records(text: &str) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            // A quote only opens a quoted section at the start of a field
            '"' if field.is_empty() => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                record.push(std::mem::take(&mut field));
                push_record(&mut records, std::mem::take(&mut record));
            }
            _ => field.push(c),
        }
    }

    if in_quotes || !field.is_empty() || !record.is_empty() {
        record.push(field);
        push_record(&mut records, record);
    }

    records
}

fn push_record(records: &mut Vec<Vec<String>>, record: Vec<String>) {
    let blank = record.len() == 1 && record[0].trim().is_empty();
    if !blank {
        records.push(record);
    }
}

/// Wrap a field in quotes, doubling embedded quotes.
pub fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Column lookup by header name.
///
/// Header cells are trimmed and stripped of stray quotes. When a name
/// appears more than once the first column wins.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    columns: HashMap<String, usize>,
    names: Vec<String>,
}

impl HeaderIndex {
    /// Build the index from a header record.
    pub fn new(header: &[String]) -> Self {
        let names: Vec<String> = header
            .iter()
            .map(|h| h.replace('"', "").trim().to_string())
            .collect();
        let mut columns = HashMap::new();
        for (i, name) in names.iter().enumerate() {
            columns.entry(name.clone()).or_insert(i);
        }
        Self { columns, names }
    }

    /// Position of a column, `None` if the header does not name it.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.get(name).copied()
    }

    /// Value of a named column in `record`. Missing columns and short
    /// records both read as `None`.
    pub fn get<'a>(&self, record: &'a [String], name: &str) -> Option<&'a str> {
        self.position(name)
            .and_then(|i| record.get(i))
            .map(String::as_str)
    }

    /// Header names in file order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
