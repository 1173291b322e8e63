//! Sparse matrix storage and element access
//!
//! Only non-zero entries are stored, keyed by `(row, col)`. Coordinates are
//! not checked against the declared shape: `get_element` and `set_element`
//! accept any position, and bounds are the caller's concern.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use hashbrown::HashMap;

use crate::format::{parse_matrix_text_with, write_matrix_text, Entry, MatrixData, ParseOptions};
use crate::{FormatError, MatrixElement};

/// Sparse matrix of signed integers
///
/// Invariant: no stored entry is zero. `rows` and `cols` are fixed at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix<T = i64> {
    rows: usize,
    cols: usize,
    entries: HashMap<(usize, usize), T>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an empty matrix with the given shape
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Create a matrix from a list of entries
    ///
    /// Entries are applied in order through [`SparseMatrix::set_element`].
    pub fn from_entries<I>(rows: usize, cols: usize, entries: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Entry<T>>,
    {
        let mut matrix = Self::new(rows, cols);
        for entry in entries {
            let Entry { row, col, value } = entry.into();
            matrix.set_element(row, col, value);
        }
        matrix
    }

    /// Parse matrix text with explicit options
    pub fn parse_with(input: &str, options: ParseOptions) -> Result<Self, FormatError> {
        parse_matrix_text_with(input, options).map(Self::from)
    }

    /// Number of declared rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of declared columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get matrix dimensions as (rows, cols)
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored non-zero entries
    #[inline]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are stored
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the value at a position, zero if nothing is stored there
    #[inline]
    pub fn get_element(&self, row: usize, col: usize) -> T {
        self.entries.get(&(row, col)).copied().unwrap_or(T::ZERO)
    }

    /// Set the value at a position
    ///
    /// Setting zero removes any stored entry.
    #[inline]
    pub fn set_element(&mut self, row: usize, col: usize, value: T) {
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    /// Iterate stored entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = Entry<T>> + '_ {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| Entry::new(row, col, value))
    }

    /// Stored entries in row-major order
    pub fn sorted_entries(&self) -> Vec<Entry<T>> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|entry| (entry.row, entry.col));
        entries
    }

    /// Convert to the parsed-data form, entries in row-major order
    pub fn to_data(&self) -> MatrixData<T> {
        MatrixData {
            rows: self.rows,
            cols: self.cols,
            entries: self.sorted_entries(),
        }
    }

    /// Canonical text form, entries in row-major order
    pub fn to_canonical_text(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = write_matrix_text(&mut out, self.rows, self.cols, self.sorted_entries());
        out
    }

    pub(crate) fn entries_map(&self) -> &HashMap<(usize, usize), T> {
        &self.entries
    }
}

impl<T: MatrixElement> From<MatrixData<T>> for SparseMatrix<T> {
    fn from(data: MatrixData<T>) -> Self {
        Self::from_entries(data.rows, data.cols, data.entries)
    }
}

impl<T: MatrixElement> From<&SparseMatrix<T>> for MatrixData<T> {
    fn from(matrix: &SparseMatrix<T>) -> Self {
        matrix.to_data()
    }
}

impl<T: MatrixElement> FromStr for SparseMatrix<T> {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, ParseOptions::default())
    }
}

impl<T: MatrixElement> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_matrix_text(f, self.rows, self.cols, self.sorted_entries())
    }
}
