//! CSV input parsing for event logs
//!
//! A small reader for the three-column event log table. Handles the quoting
//! rules the CSV writers in this crate emit: fields wrapped in double quotes
//! may contain commas, embedded quotes doubled as `""`, and newlines. No
//! type coercion happens here; fields stay strings and the validator decides
//! what they mean.

/// One data row as read from the input, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// 1-based line number the record started on.
    pub line: usize,
    /// Field values in column order, unquoted but otherwise untouched.
    pub fields: Vec<String>,
}

/// The parsed table: normalised header plus data rows.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// Header names after normalisation (trimmed, lowercased).
    pub headers: Vec<String>,
    /// Data rows in input order.
    pub records: Vec<RawRecord>,
}

impl RawTable {
    /// Index of a column by its normalised name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Normalise a header cell: trim surrounding whitespace, lowercase.
///
/// Column matching is case-insensitive, so `Case_ID` and `case_id` both
/// resolve to the same column.
fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Parse CSV text into a header row and data records.
///
/// The first non-empty record becomes the header. A leading UTF-8 byte
/// order mark is dropped before it can glue itself to the first header
/// cell. Blank lines are skipped. A trailing newline does not produce an
/// empty record. Input with no rows at all yields an empty table; the
/// validator reports that as a schema defect.
pub fn parse(text: &str) -> RawTable {
    // Excel exports lead with a UTF-8 BOM; U+FEFF is not whitespace and
    // would survive the header trim.
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut records: Vec<RawRecord> = Vec::new();

    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1usize;
    let mut record_line = 1usize;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            '"' => field.push('"'),
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
            }
            '\r' if !in_quotes => {}
            '\n' if !in_quotes => {
                if !fields.is_empty() || !field.is_empty() {
                    fields.push(std::mem::take(&mut field));
                    records.push(RawRecord {
                        line: record_line,
                        fields: std::mem::take(&mut fields),
                    });
                }
                line += 1;
                record_line = line;
            }
            '\n' => {
                field.push('\n');
                line += 1;
            }
            _ => field.push(ch),
        }
    }
    if !fields.is_empty() || !field.is_empty() {
        fields.push(field);
        records.push(RawRecord {
            line: record_line,
            fields,
        });
    }

    let mut rows = records.into_iter();
    let headers = rows
        .next()
        .map(|header| header.fields.iter().map(|h| normalize_header(h)).collect())
        .unwrap_or_default();

    RawTable {
        headers,
        records: rows.collect(),
    }
}
