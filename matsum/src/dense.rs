//! Owned dense matrix storage
//!
//! A row-major flat buffer with validated constructors. This is the
//! concrete storage the coordinator is normally pointed at; anything
//! else that implements [`DenseMatrix`] works the same way.

use matsum_core::{validate_dimensions, validate_rectangular, DenseMatrix, MatrixElement, Result};

/// Owned row-major dense matrix
#[derive(Debug, Clone, PartialEq)]
pub struct VecMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: MatrixElement> VecMatrix<T> {
    /// Build from per-row vectors, validating that all rows have equal length
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = validate_rectangular(rows.iter().map(Vec::len))?;
        let row_count = rows.len();
        let mut data = Vec::with_capacity(row_count * cols);
        for row in rows {
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: row_count,
            cols,
        })
    }

    /// Build from a flat row-major buffer of `rows * cols` elements
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        validate_dimensions(rows, cols, data.len())?;
        Ok(Self { data, rows, cols })
    }

    /// Matrix of the given shape filled with zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::ZERO; rows * cols],
            rows,
            cols,
        }
    }

    /// Matrix of the given shape filled by `f(row, col)`
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        Self { data, rows, cols }
    }

    /// Flat row-major view of the backing buffer
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: MatrixElement> DenseMatrix for VecMatrix<T> {
    type Element = T;

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn row(&self, index: usize) -> &[T] {
        let offset = index * self.cols;
        &self.data[offset..offset + self.cols]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matsum_core::SumError;

    #[test]
    fn from_rows_flattens_in_row_major_order() {
        let matrix = VecMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.cols(), 2);
        assert_eq!(matrix.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(matrix.row(1), &[3.0, 4.0]);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let result = VecMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert_eq!(result, Err(SumError::RaggedMatrix));
    }

    #[test]
    fn from_vec_checks_the_shape() {
        assert!(VecMatrix::from_vec(2, 3, vec![0i32; 6]).is_ok());
        assert_eq!(
            VecMatrix::from_vec(2, 3, vec![0i32; 5]),
            Err(SumError::DimensionMismatch)
        );
    }

    #[test]
    fn empty_matrices_are_valid() {
        let no_rows = VecMatrix::<f64>::from_rows(vec![]).unwrap();
        assert_eq!(no_rows.rows(), 0);
        assert_eq!(no_rows.cols(), 0);

        let no_cols = VecMatrix::<f64>::from_rows(vec![vec![], vec![]]).unwrap();
        assert_eq!(no_cols.rows(), 2);
        assert_eq!(no_cols.cols(), 0);
        assert_eq!(no_cols.row(0), &[] as &[f64]);
    }

    #[test]
    fn get_respects_bounds() {
        let matrix = VecMatrix::<u32>::zeros(2, 2);
        assert_eq!(matrix.get(1, 1), Some(0));
        assert_eq!(matrix.get(2, 0), None);
        assert_eq!(matrix.get(0, 2), None);
    }
}
