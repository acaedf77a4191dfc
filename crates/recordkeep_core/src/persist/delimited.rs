//! Comma-delimited text records.
//!
//! # Invariants
//! - Blank lines are skipped but still counted for line numbers.
//! - Fields are trimmed before conversion.
//! - A short line is `MissingFields`; a bad value is `InvalidField`.

use crate::persist::{read_required, write_replacing, FormatError, PersistError, PersistResult};
use std::path::Path;
use std::str::FromStr;

/// Trimmed fields of one non-blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedLine<'a> {
    /// 1-based line number in the source text.
    pub line: usize,
    pub fields: Vec<&'a str>,
}

impl DelimitedLine<'_> {
    /// Converts field `index` into `T`, reporting `name` on failure.
    pub fn parse_field<T: FromStr>(
        &self,
        index: usize,
        name: &'static str,
    ) -> Result<T, FormatError> {
        let raw = self.fields.get(index).copied().unwrap_or_default();
        raw.parse::<T>().map_err(|_| FormatError::InvalidField {
            line: self.line,
            field: name,
            value: raw.to_string(),
        })
    }

    /// Returns field `index` as text; empty when out of range.
    pub fn text(&self, index: usize) -> &str {
        self.fields.get(index).copied().unwrap_or_default()
    }
}

/// Splits `text` into lines of at least `min_fields` trimmed fields and maps
/// each through `parse_line`, stopping at the first error.
pub fn parse_delimited<T, F>(
    text: &str,
    min_fields: usize,
    mut parse_line: F,
) -> Result<Vec<T>, FormatError>
where
    F: FnMut(&DelimitedLine<'_>) -> Result<T, FormatError>,
{
    let mut records = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }

        let line = DelimitedLine {
            line: index + 1,
            fields: raw.split(',').map(str::trim).collect(),
        };
        if line.fields.len() < min_fields {
            return Err(FormatError::MissingFields {
                line: line.line,
                expected: min_fields,
                found: line.fields.len(),
            });
        }
        records.push(parse_line(&line)?);
    }
    Ok(records)
}

/// Reads and parses a required delimited file.
pub fn load_delimited<T, F>(
    path: impl AsRef<Path>,
    min_fields: usize,
    parse_line: F,
) -> PersistResult<Vec<T>>
where
    F: FnMut(&DelimitedLine<'_>) -> Result<T, FormatError>,
{
    let path = path.as_ref();
    let content = read_required(path)?;
    parse_delimited(&content, min_fields, parse_line)
        .map_err(|err| PersistError::format(path, err))
}

/// Writes one line per item, newline-terminated.
pub fn save_lines<I, S>(lines: I, path: impl AsRef<Path>) -> PersistResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    write_replacing(path.as_ref(), out.as_bytes())
}
