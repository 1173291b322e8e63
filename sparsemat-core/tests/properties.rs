//! Property-based tests for the sparse matrix engine
//!
//! Matrices are generated directly in memory with small values so that no
//! product or sum can overflow `i64`.

use proptest::prelude::*;
use sparsemat_core::{Operation, SparseError, SparseMatrix};

const MAX_DIM: usize = 6;

fn matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = SparseMatrix<i64>> {
    let max_nnz = rows * cols;
    // An empty shape gets max_nnz == 0, so the placeholder 0..1 ranges never yield entries
    prop::collection::vec((0..rows.max(1), 0..cols.max(1), -50i64..50), 0..=max_nnz)
        .prop_map(move |entries| SparseMatrix::from_entries(rows, cols, entries))
}

fn shape() -> impl Strategy<Value = (usize, usize)> {
    (0..=MAX_DIM, 0..=MAX_DIM)
}

fn same_shape_pair() -> impl Strategy<Value = (SparseMatrix<i64>, SparseMatrix<i64>)> {
    shape().prop_flat_map(|(r, c)| (matrix_strategy(r, c), matrix_strategy(r, c)))
}

fn sorted_triples(matrix: &SparseMatrix<i64>) -> Vec<(usize, usize, i64)> {
    matrix
        .sorted_entries()
        .into_iter()
        .map(|entry| (entry.row, entry.col, entry.value))
        .collect()
}

proptest! {
    /// Property: set followed by get returns the value, and zero leaves nothing stored
    #[test]
    fn prop_set_then_get(
        (matrix, row, col, value) in shape()
            .prop_flat_map(|(r, c)| (matrix_strategy(r, c), 0..10usize, 0..10usize, -100i64..100))
    ) {
        let mut matrix = matrix;
        matrix.set_element(row, col, value);
        prop_assert_eq!(matrix.get_element(row, col), value);

        matrix.set_element(row, col, 0);
        prop_assert_eq!(matrix.get_element(row, col), 0);
        prop_assert!(matrix.iter().all(|entry| (entry.row, entry.col) != (row, col)));
    }

    /// Property: no stored entry is ever zero
    #[test]
    fn prop_results_hold_no_zeros((a, b) in same_shape_pair()) {
        for result in [a.add(&b).unwrap(), a.subtract(&b).unwrap()] {
            prop_assert!(result.iter().all(|entry| entry.value != 0));
        }
    }

    /// Property: (A + B) - B == A
    #[test]
    fn prop_add_subtract_inverse((a, b) in same_shape_pair()) {
        let round_trip = a.add(&b).unwrap().subtract(&b).unwrap();
        prop_assert_eq!(round_trip, a);
    }

    /// Property: A + B == B + A
    #[test]
    fn prop_add_commutative((a, b) in same_shape_pair()) {
        prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }

    /// Property: A - B is the entrywise negation of B - A
    #[test]
    fn prop_subtract_anti_commutative((a, b) in same_shape_pair()) {
        let forward = a.subtract(&b).unwrap();
        let backward = b.subtract(&a).unwrap();
        let negated = SparseMatrix::from_entries(
            backward.rows(),
            backward.cols(),
            backward.iter().map(|entry| (entry.row, entry.col, -entry.value)),
        );
        prop_assert_eq!(forward, negated);
    }

    /// Property: A(B + C) == AB + AC
    #[test]
    fn prop_multiply_distributes_over_add(
        (a, b, c) in (0..=MAX_DIM, 0..=MAX_DIM, 0..=MAX_DIM).prop_flat_map(|(m, n, p)| {
            (matrix_strategy(m, n), matrix_strategy(n, p), matrix_strategy(n, p))
        })
    ) {
        let left = a.multiply(&b.add(&c).unwrap()).unwrap();
        let right = a.multiply(&b).unwrap().add(&a.multiply(&c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    /// Property: sparse product matches the dense definition
    #[test]
    fn prop_multiply_matches_dense(
        (a, b) in (0..=MAX_DIM, 0..=MAX_DIM, 0..=MAX_DIM)
            .prop_flat_map(|(m, n, p)| (matrix_strategy(m, n), matrix_strategy(n, p)))
    ) {
        let product = a.multiply(&b).unwrap();
        prop_assert_eq!(product.dimensions(), (a.rows(), b.cols()));

        for i in 0..a.rows() {
            for j in 0..b.cols() {
                let expected: i64 = (0..a.cols())
                    .map(|k| a.get_element(i, k) * b.get_element(k, j))
                    .sum();
                prop_assert_eq!(product.get_element(i, j), expected);
            }
        }
    }

    /// Property: incompatible shapes fail for every operation
    #[test]
    fn prop_mismatch_is_rejected(
        (r1, c1, r2, c2) in (1..=MAX_DIM, 1..=MAX_DIM, 1..=MAX_DIM, 1..=MAX_DIM)
    ) {
        let a = SparseMatrix::<i64>::new(r1, c1);
        let b = SparseMatrix::<i64>::new(r2, c2);

        for op in Operation::ALL {
            let compatible = match op {
                Operation::Multiply => c1 == r2,
                _ => (r1, c1) == (r2, c2),
            };
            match op.apply(&a, &b) {
                Ok(result) => prop_assert!(compatible, "{op} accepted {:?}", result.dimensions()),
                Err(SparseError::DimensionMismatch { op: failed, left, right }) => {
                    prop_assert!(!compatible);
                    prop_assert_eq!(failed, op);
                    prop_assert_eq!(left, (r1, c1));
                    prop_assert_eq!(right, (r2, c2));
                }
                Err(other) => prop_assert!(false, "unexpected error {other}"),
            }
        }
    }

    /// Property: canonical text reloads to an equal matrix
    #[test]
    fn prop_text_round_trip((matrix, _) in same_shape_pair()) {
        let text = matrix.to_canonical_text();
        let reloaded: SparseMatrix<i64> = text.parse().unwrap();

        prop_assert_eq!(reloaded.dimensions(), matrix.dimensions());
        prop_assert_eq!(sorted_triples(&reloaded), sorted_triples(&matrix));
    }
}

#[test]
fn all_zero_plus_b_is_b() {
    let b = SparseMatrix::<i64>::from_entries(3, 3, [(0usize, 2usize, 5i64), (2, 1, -3)]);
    let zero = SparseMatrix::<i64>::new(3, 3);

    assert_eq!(sorted_triples(&zero.add(&b).unwrap()), sorted_triples(&b));
}

#[test]
fn two_by_three_plus_three_by_two_fails() {
    let a = SparseMatrix::<i64>::from_entries(2, 3, [(0usize, 0usize, 1i64)]);
    let b = SparseMatrix::<i64>::from_entries(3, 2, [(0usize, 0usize, 1i64)]);

    assert!(matches!(
        a.add(&b),
        Err(SparseError::DimensionMismatch { .. })
    ));
}
