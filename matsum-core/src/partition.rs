//! Row-range partitioning for parallel summation
//!
//! A partition is a contiguous row range assigned to one worker. The
//! partitions for a matrix are produced by a policy; the default
//! fixed-block policy hands every worker an identical block size even
//! when that leaves late workers empty, while the balanced policy is a
//! separate opt-in mode that divides rows as evenly as possible.

use core::ops::Range;

/// A contiguous row range `[start, start + rows)` assigned to one worker
///
/// The range may start beyond the matrix or extend past its last row;
/// workers clamp it with [`Partition::clamped`] before reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    /// First row of the range
    pub start: usize,
    /// Number of rows requested, before clamping
    pub rows: usize,
}

impl Partition {
    /// Create a partition covering `[start, start + rows)`
    pub const fn new(start: usize, rows: usize) -> Self {
        Self { start, rows }
    }

    /// One past the last requested row, saturating at `usize::MAX`
    pub const fn end(&self) -> usize {
        self.start.saturating_add(self.rows)
    }

    /// The row range restricted to a matrix of `row_count` rows
    pub fn clamped(&self, row_count: usize) -> Range<usize> {
        self.start.min(row_count)..self.end().min(row_count)
    }

    /// Whether the clamped range covers no rows
    pub fn is_empty_for(&self, row_count: usize) -> bool {
        self.clamped(row_count).is_empty()
    }
}

/// How row ranges are assigned to workers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PartitionPolicy {
    /// Every worker is assigned the same block of
    /// `row_count % workers + row_count / workers` rows, with starts
    /// stepping by that block size. Blocks that begin at or past the
    /// last row cover nothing once clamped, and the final occupied
    /// block is truncated at the last row. Splits are uneven for most
    /// shapes; callers wanting even blocks opt into
    /// [`PartitionPolicy::Balanced`] instead.
    #[default]
    FixedBlock,
    /// `row_count / workers` rows per worker, with the first
    /// `row_count % workers` workers taking one extra row. Covers every
    /// row exactly once with block sizes differing by at most one.
    Balanced,
}

/// Uniform block size used by [`PartitionPolicy::FixedBlock`]
///
/// `workers` must be at least one.
pub const fn fixed_block_size(row_count: usize, workers: usize) -> usize {
    row_count % workers + row_count / workers
}

/// Iterate over the `workers` partitions of `row_count` rows
///
/// Yields exactly `workers` partitions in dispatch order. With zero
/// workers the iterator is empty; the coordinator rejects that
/// configuration before partitioning.
pub fn partitions(row_count: usize, workers: usize, policy: PartitionPolicy) -> Partitions {
    Partitions {
        row_count,
        workers,
        policy,
        index: 0,
    }
}

/// Iterator over the partitions of a matrix, one per worker
pub struct Partitions {
    row_count: usize,
    workers: usize,
    policy: PartitionPolicy,
    index: usize,
}

impl Iterator for Partitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        if self.index >= self.workers {
            return None;
        }
        let index = self.index;
        self.index += 1;

        Some(match self.policy {
            PartitionPolicy::FixedBlock => {
                let size = fixed_block_size(self.row_count, self.workers);
                Partition::new(index.saturating_mul(size), size)
            }
            PartitionPolicy::Balanced => {
                let base = self.row_count / self.workers;
                let extra = self.row_count % self.workers;
                let start = index * base + index.min(extra);
                Partition::new(start, base + usize::from(index < extra))
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.workers.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Partitions {
    fn len(&self) -> usize {
        self.workers.saturating_sub(self.index)
    }
}
