//! Line-level parsing for the textual matrix format
//!
//! Each function handles exactly one line and reports a
//! [`FormatErrorKind`]; attaching the line number is the caller's job.

use crate::format::{Entry, ENTRY_CLOSE, ENTRY_FIELDS, ENTRY_OPEN, FIELD_SEPARATOR, HEADER_SEPARATOR};
use crate::{FormatErrorKind, MatrixElement};

/// Parse a `key=<integer>` header line
///
/// Whitespace around the key and the value is ignored.
pub fn parse_header(line: &str, key: &'static str) -> Result<usize, FormatErrorKind> {
    let missing = FormatErrorKind::MissingHeader { expected: key };

    let (found_key, value) = line.split_once(HEADER_SEPARATOR).ok_or(missing)?;
    if found_key.trim() != key {
        return Err(missing);
    }

    value
        .trim()
        .parse::<usize>()
        .map_err(|_| FormatErrorKind::InvalidHeader { expected: key })
}

/// Parse a `(row, col, value)` element line
///
/// Coordinates must be non-negative; the value must fit in `T`.
pub fn parse_entry<T: MatrixElement>(line: &str) -> Result<Entry<T>, FormatErrorKind> {
    let inner = line
        .trim()
        .strip_prefix(ENTRY_OPEN)
        .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
        .ok_or(FormatErrorKind::MalformedEntry)?;

    let mut fields = [""; ENTRY_FIELDS];
    let mut found = 0;
    for field in inner.split(FIELD_SEPARATOR) {
        if found < ENTRY_FIELDS {
            fields[found] = field.trim();
        }
        found += 1;
    }
    if found != ENTRY_FIELDS {
        return Err(FormatErrorKind::WrongFieldCount { found });
    }

    let row = fields[0]
        .parse::<usize>()
        .map_err(|_| FormatErrorKind::InvalidInteger { field: 0 })?;
    let col = fields[1]
        .parse::<usize>()
        .map_err(|_| FormatErrorKind::InvalidInteger { field: 1 })?;
    let value = fields[2]
        .parse::<T>()
        .map_err(|_| FormatErrorKind::InvalidInteger { field: 2 })?;

    Ok(Entry::new(row, col, value))
}
