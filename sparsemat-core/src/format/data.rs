//! Parsed matrix data exchanged with loaders and serializers

use alloc::vec::Vec;

/// A single non-zero element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

impl<T> Entry<T> {
    pub const fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }
}

impl<T> From<(usize, usize, T)> for Entry<T> {
    fn from((row, col, value): (usize, usize, T)) -> Self {
        Self { row, col, value }
    }
}

/// Shape plus element list, as produced by a parser
///
/// `entries` may contain zeros or repeated coordinates; building a
/// `SparseMatrix` from it applies each entry in order through
/// `set_element`, so later duplicates win and zeros store nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixData<T> {
    pub rows: usize,
    pub cols: usize,
    pub entries: Vec<Entry<T>>,
}

impl<T> MatrixData<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: Vec::new(),
        }
    }

    /// Get dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}
