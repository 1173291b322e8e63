//! Error types for sparse matrix operations

use crate::ops::Operation;

/// Errors raised by the matrix engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparseError {
    /// Operand shapes are incompatible for the requested operation
    DimensionMismatch {
        /// Operation that rejected its operands
        op: Operation,
        /// Shape of the left operand as (rows, cols)
        left: (usize, usize),
        /// Shape of the right operand as (rows, cols)
        right: (usize, usize),
    },
    /// Checked integer arithmetic overflowed while computing an entry
    Overflow {
        /// Operation that overflowed
        op: Operation,
        /// Row of the result entry being computed
        row: usize,
        /// Column of the result entry being computed
        col: usize,
    },
}

impl core::fmt::Display for SparseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SparseError::DimensionMismatch { op, left, right } => match op {
                Operation::Multiply => write!(
                    f,
                    "Dimension mismatch in {op}: {}x{} by {}x{} (inner dimensions {} and {} differ)",
                    left.0, left.1, right.0, right.1, left.1, right.0
                ),
                _ => write!(
                    f,
                    "Dimension mismatch in {op}: {}x{} and {}x{} must have equal shape",
                    left.0, left.1, right.0, right.1
                ),
            },
            SparseError::Overflow { op, row, col } => {
                write!(f, "Integer overflow in {op} at ({row}, {col})")
            }
        }
    }
}

impl core::error::Error for SparseError {}

/// Why a line of matrix text was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// A mandatory header line is absent or out of order
    MissingHeader {
        /// Header key that was expected on this line
        expected: &'static str,
    },
    /// A header line has the right key but its value is not a count
    InvalidHeader {
        /// Header key whose value failed to parse
        expected: &'static str,
    },
    /// An element line is not wrapped in parentheses
    MalformedEntry,
    /// An element line does not hold exactly three fields
    WrongFieldCount {
        /// Number of comma-separated fields found
        found: usize,
    },
    /// An element field is not a valid integer for its position
    InvalidInteger {
        /// Zero-based field position (0 = row, 1 = col, 2 = value)
        field: usize,
    },
    /// Entry lies outside the declared shape (only with bounds checking)
    OutOfBounds {
        /// Offending row index
        row: usize,
        /// Offending column index
        col: usize,
    },
}

/// Error raised while parsing the textual matrix format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatError {
    /// 1-based line number of the offending line
    pub line: usize,
    /// What was wrong with it
    pub kind: FormatErrorKind,
}

impl FormatError {
    pub const fn new(line: usize, kind: FormatErrorKind) -> Self {
        Self { line, kind }
    }
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match self.kind {
            FormatErrorKind::MissingHeader { expected } => {
                write!(f, "expected `{expected}=<integer>` header")
            }
            FormatErrorKind::InvalidHeader { expected } => {
                write!(f, "`{expected}` header must be a non-negative integer")
            }
            FormatErrorKind::MalformedEntry => {
                write!(f, "element must be written as `(row, col, value)`")
            }
            FormatErrorKind::WrongFieldCount { found } => {
                write!(f, "element has {found} fields, expected 3")
            }
            FormatErrorKind::InvalidInteger { field } => {
                let name = match field {
                    0 => "row",
                    1 => "col",
                    _ => "value",
                };
                write!(f, "invalid integer in `{name}` field")
            }
            FormatErrorKind::OutOfBounds { row, col } => {
                write!(f, "element ({row}, {col}) lies outside the declared shape")
            }
        }
    }
}

impl core::error::Error for FormatError {}

/// Result type for engine operations
pub type Result<T> = core::result::Result<T, SparseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_dimension_mismatch_names_both_shapes() {
        let err = SparseError::DimensionMismatch {
            op: Operation::Add,
            left: (2, 3),
            right: (3, 2),
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch in add: 2x3 and 3x2 must have equal shape"
        );

        let err = SparseError::DimensionMismatch {
            op: Operation::Multiply,
            left: (2, 3),
            right: (2, 3),
        };
        assert!(err.to_string().contains("inner dimensions 3 and 2 differ"));
    }

    #[test]
    fn test_format_error_display() {
        let err = FormatError::new(4, FormatErrorKind::WrongFieldCount { found: 2 });
        assert_eq!(err.to_string(), "line 4: element has 2 fields, expected 3");

        let err = FormatError::new(1, FormatErrorKind::MissingHeader { expected: "rows" });
        assert_eq!(err.to_string(), "line 1: expected `rows=<integer>` header");
    }
}
