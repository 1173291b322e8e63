//! Matrix arithmetic
//!
//! All operations leave their operands untouched and return a new matrix.
//! Shapes are validated before any work is done, and overflow aborts the
//! whole operation, so a failed call never yields a partial result.

use core::fmt;
use core::str::FromStr;

use hashbrown::HashMap;

use crate::column_index::ColumnIndex;
use crate::traits::progress::ProgressTicker;
use crate::validation::{validate_inner_dimensions, validate_same_shape};
use crate::{MatrixElement, NoProgress, ProgressObserver, Result, SparseError, SparseMatrix};

/// Binary matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Entrywise sum of two equally shaped matrices
    Add,
    /// Entrywise difference of two equally shaped matrices
    Subtract,
    /// Matrix product, inner dimensions must agree
    Multiply,
}

impl Operation {
    /// Every operation, in prompt order
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Lowercase command name, as accepted by `FromStr`
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Apply this operation to `left` and `right`
    pub fn apply<T: MatrixElement>(
        self,
        left: &SparseMatrix<T>,
        right: &SparseMatrix<T>,
    ) -> Result<SparseMatrix<T>> {
        self.apply_with_progress(left, right, &mut NoProgress)
    }

    /// Apply this operation, reporting progress when it is a multiplication
    pub fn apply_with_progress<T, O>(
        self,
        left: &SparseMatrix<T>,
        right: &SparseMatrix<T>,
        observer: &mut O,
    ) -> Result<SparseMatrix<T>>
    where
        T: MatrixElement,
        O: ProgressObserver + ?Sized,
    {
        match self {
            Operation::Add => left.add(right),
            Operation::Subtract => left.subtract(right),
            Operation::Multiply => left.multiply_with_progress(right, observer),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an operation name is not recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownOperation;

impl fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown operation, expected one of: add, subtract, multiply")
    }
}

impl core::error::Error for UnknownOperation {}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let s = s.trim();
        let op = if s.eq_ignore_ascii_case("add") || s == "+" {
            Operation::Add
        } else if s.eq_ignore_ascii_case("subtract") || s.eq_ignore_ascii_case("sub") || s == "-" {
            Operation::Subtract
        } else if s.eq_ignore_ascii_case("multiply") || s.eq_ignore_ascii_case("mul") || s == "*" {
            Operation::Multiply
        } else {
            return Err(UnknownOperation);
        };
        Ok(op)
    }
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Entrywise sum
    ///
    /// Runs in O(nnz(self) + nnz(other)); zero sums are not stored.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Result<Self> {
        validate_same_shape(Operation::Add, self.dimensions(), other.dimensions())?;
        self.fold_entries(other, Operation::Add, <T as MatrixElement>::checked_add)
    }

    /// Entrywise difference `self - other`
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        validate_same_shape(Operation::Subtract, self.dimensions(), other.dimensions())?;
        self.fold_entries(other, Operation::Subtract, <T as MatrixElement>::checked_sub)
    }

    /// Seed with a copy of `self`, then fold each entry of `other` in
    fn fold_entries(
        &self,
        other: &Self,
        op: Operation,
        combine: fn(T, T) -> Option<T>,
    ) -> Result<Self> {
        let mut result = self.clone();
        for entry in other.iter() {
            let value = combine(result.get_element(entry.row, entry.col), entry.value).ok_or(
                SparseError::Overflow {
                    op,
                    row: entry.row,
                    col: entry.col,
                },
            )?;
            result.set_element(entry.row, entry.col, value);
        }
        Ok(result)
    }

    /// Matrix product `self * other`
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        self.multiply_with_progress(other, &mut NoProgress)
    }

    /// Matrix product, reporting coarse progress to `observer`
    ///
    /// Each result cell is summed in an `i128` accumulator and range-checked
    /// against `T` once, so whether the product fits never depends on the
    /// order entries are visited. For `i128` elements the accumulator has no
    /// headroom and an intermediate sum can still overflow.
    ///
    /// Progress is measured over the non-zero entries of `self`. The
    /// observer sees a final `1.0` only when the product succeeds.
    pub fn multiply_with_progress<O>(&self, other: &Self, observer: &mut O) -> Result<Self>
    where
        O: ProgressObserver + ?Sized,
    {
        validate_inner_dimensions(self.dimensions(), other.dimensions())?;

        let index = ColumnIndex::build(other);
        let mut sums: HashMap<(usize, usize), i128> = HashMap::new();
        let mut ticker = ProgressTicker::new(observer, self.nnz());

        for (done, (&(i, k), &left)) in self.entries_map().iter().enumerate() {
            let left = left.widen();
            for &(j, right) in index.get(k) {
                let sum = sums.entry((i, j)).or_insert(0);
                let current = *sum;
                *sum = left
                    .checked_mul(right.widen())
                    .and_then(|product| current.checked_add(product))
                    .ok_or(multiply_overflow(i, j))?;
            }
            ticker.tick(done + 1);
        }

        let mut result = Self::new(self.rows(), other.cols());
        for ((i, j), sum) in sums {
            let value = T::narrow(sum).ok_or(multiply_overflow(i, j))?;
            result.set_element(i, j, value);
        }

        ticker.finish();
        Ok(result)
    }
}

const fn multiply_overflow(row: usize, col: usize) -> SparseError {
    SparseError::Overflow {
        op: Operation::Multiply,
        row,
        col,
    }
}
