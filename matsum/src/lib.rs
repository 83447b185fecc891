//! Matsum - Row-Partitioned Parallel Matrix Summation
//!
//! This library sums every element of a dense numeric matrix by
//! splitting its rows into contiguous partitions, summing each
//! partition on its own worker, and folding the partial sums into one
//! total.
//!
//! ## Architecture
//!
//! Matsum follows a specification/implementation separation:
//!
//! - **matsum-core**: pure traits, partition policies, kernels, and
//!   validation (no threads, no allocation)
//! - **matsum**: owned matrix storage and concurrent execution
//!
//! ## Quick Start
//!
//! ```rust
//! use matsum::{SumConfig, SumCoordinator, VecMatrix};
//!
//! fn example() -> matsum::Result<()> {
//!     let matrix = VecMatrix::from_rows(vec![
//!         vec![1.0, 2.0],
//!         vec![3.0, 4.0],
//!         vec![5.0, 6.0],
//!     ])?;
//!
//!     let coordinator = SumCoordinator::new(SumConfig::default().with_workers(3));
//!     assert_eq!(coordinator.sum(&matrix)?, 21.0);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Execution models
//!
//! - **Spawn-per-worker** (default): one dedicated thread per
//!   partition, all launched before any join, joined in dispatch order.
//! - **Pooled**: a bounded rayon pool sized to the worker count, with
//!   the same fan-out, join-all, reduce ordering.

// Re-export core abstractions
pub use matsum_core::{
    // Core traits
    DenseMatrix, MatrixElement,
    // Partitioning
    fixed_block_size, partitions, Partition, PartitionPolicy, Partitions,
    // Kernels
    fold_partials, partial_sum, total_sum,
    // Error handling
    Result, SumError,
    // Validation utilities
    validate_dimensions, validate_rectangular, validate_worker_count,
};

// Implementation modules
pub mod agent;
pub mod coordinator;
pub mod dense;
pub mod worker;

// Public exports
pub use agent::{CounterAgent, Direction};
pub use coordinator::{ExecutionModel, SumConfig, SumCoordinator};
pub use dense::VecMatrix;
pub use worker::WorkerTask;
