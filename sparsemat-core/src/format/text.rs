//! Canonical text codec
//!
//! ```text
//! rows=<integer>
//! cols=<integer>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Both header lines are mandatory and come first, in that order. Blank
//! lines are ignored anywhere in the input.

use core::fmt;

use super::{Entry, MatrixData, COLS_KEY, ENTRY_CLOSE, ENTRY_OPEN, HEADER_SEPARATOR, ROWS_KEY};
use crate::validation::{entry_in_bounds, parse_entry, parse_header};
use crate::{FormatError, FormatErrorKind, MatrixElement};

/// Options controlling how strictly matrix text is parsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject entries outside the declared shape
    pub check_bounds: bool,
}

impl ParseOptions {
    pub const fn new() -> Self {
        Self {
            check_bounds: false,
        }
    }

    /// Enable or disable bounds checking of element coordinates
    pub const fn with_bounds_check(mut self, check_bounds: bool) -> Self {
        self.check_bounds = check_bounds;
        self
    }
}

/// Parse matrix text with default options
pub fn parse_matrix_text<T: MatrixElement>(input: &str) -> Result<MatrixData<T>, FormatError> {
    parse_matrix_text_with(input, ParseOptions::default())
}

/// Parse matrix text
///
/// Element lines are returned in file order, including any zero values
/// or repeated coordinates.
pub fn parse_matrix_text_with<T: MatrixElement>(
    input: &str,
    options: ParseOptions,
) -> Result<MatrixData<T>, FormatError> {
    let end_line = input.lines().count() + 1;
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(index, text)| (index + 1, text.trim()))
        .filter(|(_, text)| !text.is_empty());

    let rows = read_header(&mut lines, ROWS_KEY, end_line)?;
    let cols = read_header(&mut lines, COLS_KEY, end_line)?;

    let mut data = MatrixData::new(rows, cols);
    for (line, text) in lines {
        let entry = parse_entry::<T>(text).map_err(|kind| FormatError::new(line, kind))?;
        if options.check_bounds && !entry_in_bounds(entry.row, entry.col, rows, cols) {
            return Err(FormatError::new(
                line,
                FormatErrorKind::OutOfBounds {
                    row: entry.row,
                    col: entry.col,
                },
            ));
        }
        data.entries.push(entry);
    }

    Ok(data)
}

fn read_header<'a>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    key: &'static str,
    end_line: usize,
) -> Result<usize, FormatError> {
    match lines.next() {
        Some((line, text)) => parse_header(text, key).map_err(|kind| FormatError::new(line, kind)),
        None => Err(FormatError::new(
            end_line,
            FormatErrorKind::MissingHeader { expected: key },
        )),
    }
}

/// Write the canonical text form
///
/// Entries are written in the order given; zero values are skipped. No
/// trailing newline is written.
pub fn write_matrix_text<W, T, I>(out: &mut W, rows: usize, cols: usize, entries: I) -> fmt::Result
where
    W: fmt::Write,
    T: MatrixElement,
    I: IntoIterator<Item = Entry<T>>,
{
    write!(out, "{ROWS_KEY}{HEADER_SEPARATOR}{rows}")?;
    write!(out, "\n{COLS_KEY}{HEADER_SEPARATOR}{cols}")?;
    for entry in entries.into_iter().filter(|entry| !entry.value.is_zero()) {
        write!(
            out,
            "\n{ENTRY_OPEN}{}, {}, {}{ENTRY_CLOSE}",
            entry.row, entry.col, entry.value
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn test_parse_matrix_text() {
        let input = "rows=2\ncols=3\n(0, 0, 1)\n(1, 2, -4)\n";
        let data = parse_matrix_text::<i64>(input).unwrap();

        assert_eq!(data.dimensions(), (2, 3));
        assert_eq!(
            data.entries,
            vec![Entry::new(0, 0, 1), Entry::new(1, 2, -4)]
        );
    }

    #[test]
    fn test_parse_tolerates_blank_lines_and_crlf() {
        let input = "\r\nrows = 2\r\n\r\ncols=2\r\n(1, 1, 9)\r\n\r\n";
        let data = parse_matrix_text::<i32>(input).unwrap();

        assert_eq!(data.dimensions(), (2, 2));
        assert_eq!(data.entries, vec![Entry::new(1, 1, 9)]);
    }

    #[test]
    fn test_parse_header_only() {
        let data = parse_matrix_text::<i64>("rows=4\ncols=5").unwrap();
        assert_eq!(data.dimensions(), (4, 5));
        assert!(data.entries.is_empty());
    }

    #[test]
    fn test_parse_missing_headers() {
        assert_eq!(
            parse_matrix_text::<i64>(""),
            Err(FormatError::new(
                1,
                FormatErrorKind::MissingHeader { expected: "rows" }
            ))
        );
        assert_eq!(
            parse_matrix_text::<i64>("rows=2"),
            Err(FormatError::new(
                2,
                FormatErrorKind::MissingHeader { expected: "cols" }
            ))
        );
        // Headers in the wrong order
        assert_eq!(
            parse_matrix_text::<i64>("cols=2\nrows=2"),
            Err(FormatError::new(
                1,
                FormatErrorKind::MissingHeader { expected: "rows" }
            ))
        );
        // Element before the headers
        assert_eq!(
            parse_matrix_text::<i64>("(0, 0, 1)\nrows=1\ncols=1"),
            Err(FormatError::new(
                1,
                FormatErrorKind::MissingHeader { expected: "rows" }
            ))
        );
    }

    #[test]
    fn test_parse_reports_offending_line() {
        let input = "rows=2\ncols=2\n(0, 0, 1)\n\n(0, 1)\n";
        assert_eq!(
            parse_matrix_text::<i64>(input),
            Err(FormatError::new(
                5,
                FormatErrorKind::WrongFieldCount { found: 2 }
            ))
        );

        let input = "rows=2\ncols=x";
        assert_eq!(
            parse_matrix_text::<i64>(input),
            Err(FormatError::new(
                2,
                FormatErrorKind::InvalidHeader { expected: "cols" }
            ))
        );
    }

    #[test]
    fn test_bounds_check_is_opt_in() {
        let input = "rows=2\ncols=2\n(2, 0, 1)";

        let data = parse_matrix_text::<i64>(input).unwrap();
        assert_eq!(data.entries, vec![Entry::new(2, 0, 1)]);

        let strict = ParseOptions::new().with_bounds_check(true);
        assert_eq!(
            parse_matrix_text_with::<i64>(input, strict),
            Err(FormatError::new(
                3,
                FormatErrorKind::OutOfBounds { row: 2, col: 0 }
            ))
        );
    }

    #[test]
    fn test_write_matrix_text() {
        let mut out = String::new();
        let entries = vec![Entry::new(0, 0, 1i64), Entry::new(0, 1, 0), Entry::new(1, 1, -2)];
        write_matrix_text(&mut out, 2, 2, entries).unwrap();

        assert_eq!(out, "rows=2\ncols=2\n(0, 0, 1)\n(1, 1, -2)");
    }

    #[test]
    fn test_write_then_parse() {
        let mut out = String::new();
        let entries = vec![Entry::new(3, 1, 7i64), Entry::new(0, 2, -1)];
        write_matrix_text(&mut out, 4, 3, entries.clone()).unwrap();

        let data = parse_matrix_text::<i64>(&out).unwrap();
        assert_eq!(data.dimensions(), (4, 3));
        assert_eq!(data.entries, entries);
    }
}
