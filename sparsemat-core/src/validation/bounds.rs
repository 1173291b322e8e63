//! Shape validation for matrix operations
//!
//! These checks run before any work is done so that a rejected operation
//! never produces a partial result.

use crate::{Operation, SparseError};

/// Validate that two operands have identical shape
///
/// Used by the additive operations; `op` is carried into the error so the
/// caller can tell which operation rejected its operands.
pub const fn validate_same_shape(
    op: Operation,
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), SparseError> {
    if left.0 != right.0 || left.1 != right.1 {
        return Err(SparseError::DimensionMismatch { op, left, right });
    }
    Ok(())
}

/// Validate that `left` columns match `right` rows
pub const fn validate_inner_dimensions(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), SparseError> {
    if left.1 != right.0 {
        return Err(SparseError::DimensionMismatch {
            op: Operation::Multiply,
            left,
            right,
        });
    }
    Ok(())
}

/// Whether a coordinate lies inside `[0, rows) x [0, cols)`
pub const fn entry_in_bounds(row: usize, col: usize, rows: usize, cols: usize) -> bool {
    row < rows && col < cols
}
