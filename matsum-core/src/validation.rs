//! Pure validation functions for summation inputs
//!
//! Mathematical checks with no I/O and no allocation. The summation
//! path itself assumes well-formed inputs; constructors and the
//! coordinator call these to fail fast instead.

use crate::error::{Result, SumError};

/// Validate a configured worker count
///
/// Zero workers cannot cover any rows, so the configuration is rejected
/// before partitioning.
pub const fn validate_worker_count(workers: usize) -> Result<()> {
    if workers == 0 {
        return Err(SumError::InvalidWorkerCount);
    }
    Ok(())
}

/// Validate that a flat buffer matches the claimed matrix shape
///
/// The element count is computed with overflow protection; a shape
/// whose product does not fit in usize is rejected outright.
pub const fn validate_dimensions(rows: usize, cols: usize, len: usize) -> Result<()> {
    match rows.checked_mul(cols) {
        None => Err(SumError::SizeOverflow),
        Some(expected) => {
            if expected == len {
                Ok(())
            } else {
                Err(SumError::DimensionMismatch)
            }
        }
    }
}

/// Verify that all row lengths are equal
///
/// Returns the common row width, or zero for a matrix with no rows.
pub fn validate_rectangular<I>(lengths: I) -> Result<usize>
where
    I: IntoIterator<Item = usize>,
{
    let mut iter = lengths.into_iter();
    let Some(width) = iter.next() else {
        return Ok(0);
    };
    for length in iter {
        if length != width {
            return Err(SumError::RaggedMatrix);
        }
    }
    Ok(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_worker_count() {
        assert_eq!(validate_worker_count(1), Ok(()));
        assert_eq!(validate_worker_count(64), Ok(()));
        assert_eq!(validate_worker_count(0), Err(SumError::InvalidWorkerCount));
    }

    #[test]
    fn test_validate_dimensions() {
        assert_eq!(validate_dimensions(3, 2, 6), Ok(()));
        assert_eq!(validate_dimensions(0, 5, 0), Ok(()));
        assert_eq!(validate_dimensions(3, 2, 5), Err(SumError::DimensionMismatch));

        // Oversized shapes are rejected before any length comparison
        assert_eq!(
            validate_dimensions(usize::MAX, 2, 0),
            Err(SumError::SizeOverflow)
        );
    }

    #[test]
    fn test_validate_rectangular() {
        assert_eq!(validate_rectangular([2, 2, 2]), Ok(2));
        assert_eq!(validate_rectangular([]), Ok(0));
        assert_eq!(validate_rectangular([0, 0]), Ok(0));
        assert_eq!(validate_rectangular([2, 3, 2]), Err(SumError::RaggedMatrix));
    }
}
