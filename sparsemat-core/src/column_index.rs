//! Column-indexed view used by multiplication
//!
//! For a product `A * B`, every non-zero `A[i][k]` pairs with the entries
//! of `B` whose row is `k`, i.e. the entries sharing `A`'s column index.
//! This view groups `B`'s entries by that shared index so each `A[i][k]`
//! needs one lookup instead of a scan over all of `B`.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::{MatrixElement, SparseMatrix};

/// Entries of a right-hand operand grouped by the shared inner index
#[derive(Debug, Clone)]
pub struct ColumnIndex<T> {
    by_inner: HashMap<usize, Vec<(usize, T)>>,
}

impl<T: MatrixElement> ColumnIndex<T> {
    /// Build the view over `matrix`, keyed by `matrix`'s row index
    pub fn build(matrix: &SparseMatrix<T>) -> Self {
        let mut by_inner: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
        for (&(row, col), &value) in matrix.entries_map() {
            by_inner.entry(row).or_default().push((col, value));
        }
        Self { by_inner }
    }

    /// `(col, value)` pairs stored under inner index `k`
    #[inline]
    pub fn get(&self, k: usize) -> &[(usize, T)] {
        self.by_inner.get(&k).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct inner indices with at least one entry
    pub fn len(&self) -> usize {
        self.by_inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_inner.is_empty()
    }
}
