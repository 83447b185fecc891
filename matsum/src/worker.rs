//! Worker tasks
//!
//! A worker task pairs a dispatch index with an assigned partition. It
//! runs exactly once, reads only its own row range, and produces one
//! partial sum; the coordinator consumes that result exactly once.

use matsum_core::{partial_sum, DenseMatrix, Partition};

/// A unit of concurrent execution that sums one partition
#[derive(Debug, Clone, Copy)]
pub struct WorkerTask {
    index: usize,
    partition: Partition,
}

impl WorkerTask {
    /// Build a new worker task for the given dispatch index and range
    pub fn new(index: usize, partition: Partition) -> Self {
        Self { index, partition }
    }

    /// Position of this task in dispatch (and reduction) order
    pub fn index(&self) -> usize {
        self.index
    }

    /// The assigned row range
    pub fn partition(&self) -> Partition {
        self.partition
    }

    /// Sum the assigned rows of `matrix`
    ///
    /// Clamps the partition to the matrix, accumulates in row-major
    /// order, and never writes to the matrix.
    pub fn run<M: DenseMatrix>(&self, matrix: &M) -> M::Element {
        let range = self.partition.clamped(matrix.rows());
        log::trace!(
            "worker {} summing rows {}..{}",
            self.index,
            range.start,
            range.end
        );
        partial_sum(matrix, self.partition)
    }
}
