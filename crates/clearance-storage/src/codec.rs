//! Field escaping for the line-oriented archive format.
//!
//! A record is one line of comma-separated fields. Three characters are
//! escaped inside a field so the delimiter and the line framing survive
//! arbitrary names: `\,` for a literal comma, `\\` for a literal
//! backslash, `\n` for a newline.

use crate::traits::RecordError;

/// Joins fields into one record line, escaping each field.
pub(crate) fn encode_line(fields: &[String]) -> String {
    let mut line = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push(',');
        }
        escape_field(field, &mut line);
    }
    line
}

fn escape_field(field: &str, out: &mut String) {
    for c in field.chars() {
        match c {
            ',' => out.push_str("\\,"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
}

/// Splits a record line into decoded fields, honoring escapes.
pub(crate) fn split_fields(line: &str) -> Result<Vec<String>, RecordError> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(',') => current.push(','),
                Some('\\') => current.push('\\'),
                Some('n') => current.push('\n'),
                Some(other) => {
                    return Err(RecordError::new(format!(
                        "invalid escape sequence: \\{other}"
                    )))
                }
                None => return Err(RecordError::new("dangling escape at end of record")),
            },
            ',' => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    Ok(fields)
}
