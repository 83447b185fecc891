//! Pure summation kernels
//!
//! The per-partition kernel and the final fold both accumulate in a
//! fixed left-to-right, row-major order, so floating-point results are
//! reproducible across runs and worker counts only reassociate at
//! partition boundaries.

use crate::element::MatrixElement;
use crate::matrix::DenseMatrix;
use crate::partition::Partition;

/// Sum every element of the partition's rows, clamped to the matrix
///
/// Accumulates row by row, and left to right within a row, starting
/// from [`MatrixElement::ZERO`]. A partition that starts at or past the
/// last row contributes zero. Never writes to the matrix.
pub fn partial_sum<M: DenseMatrix>(matrix: &M, partition: Partition) -> M::Element {
    let mut acc = M::Element::ZERO;
    for index in partition.clamped(matrix.rows()) {
        for value in matrix.row(index) {
            acc += *value;
        }
    }
    acc
}

/// Sum the whole matrix in a single pass
///
/// Visits elements in the same order as the partitioned kernels, so it
/// serves as the sequential baseline for parity checks.
pub fn total_sum<M: DenseMatrix>(matrix: &M) -> M::Element {
    partial_sum(matrix, Partition::new(0, matrix.rows()))
}

/// Fold per-worker partial sums in dispatch order
pub fn fold_partials<E, I>(partials: I) -> E
where
    E: MatrixElement,
    I: IntoIterator<Item = E>,
{
    let mut total = E::ZERO;
    for partial in partials {
        total += partial;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: [[f64; 2]; 3] = [[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];

    struct FixtureMatrix;

    impl DenseMatrix for FixtureMatrix {
        type Element = f64;

        fn rows(&self) -> usize {
            ROWS.len()
        }

        fn cols(&self) -> usize {
            2
        }

        fn row(&self, index: usize) -> &[f64] {
            &ROWS[index]
        }
    }

    #[test]
    fn per_row_partial_sums() {
        assert_eq!(partial_sum(&FixtureMatrix, Partition::new(0, 1)), 3.0);
        assert_eq!(partial_sum(&FixtureMatrix, Partition::new(1, 1)), 7.0);
        assert_eq!(partial_sum(&FixtureMatrix, Partition::new(2, 1)), 11.0);
    }

    #[test]
    fn overhanging_partition_truncates_at_last_row() {
        assert_eq!(partial_sum(&FixtureMatrix, Partition::new(2, 7)), 11.0);
    }

    #[test]
    fn out_of_range_partition_sums_zero() {
        assert_eq!(partial_sum(&FixtureMatrix, Partition::new(5, 2)), 0.0);
    }

    #[test]
    fn total_covers_every_element() {
        assert_eq!(total_sum(&FixtureMatrix), 21.0);
    }

    #[test]
    fn fold_combines_partials_in_order() {
        assert_eq!(fold_partials([3.0, 7.0, 11.0]), 21.0);
        assert_eq!(fold_partials::<f64, _>([]), 0.0);
    }

    #[test]
    fn element_access_through_the_trait() {
        assert_eq!(FixtureMatrix.get(1, 1), Some(4.0));
        assert_eq!(FixtureMatrix.get(1, 2), None);
        assert_eq!(FixtureMatrix.get(3, 0), None);
    }
}
