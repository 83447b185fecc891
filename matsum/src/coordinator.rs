//! Coordinator: fan-out, join-all, reduce
//!
//! The coordinator launches one worker per partition, waits for every
//! worker to finish, then folds the partial sums in dispatch order.
//! Workers share nothing but read-only access to the matrix, so the
//! joins are the only synchronization points in the whole pipeline.

use std::panic;
use std::thread;

use matsum_core::{
    fold_partials, partitions, validate_worker_count, DenseMatrix, PartitionPolicy, Result,
    SumError,
};
use rayon::prelude::*;

use crate::worker::WorkerTask;

/// How worker tasks are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecutionModel {
    /// One dedicated thread per worker task, all spawned before any
    /// join is attempted
    #[default]
    SpawnPerWorker,
    /// A bounded rayon pool with one pool thread per worker task
    Pooled,
}

/// Configuration for a [`SumCoordinator`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SumConfig {
    /// Number of worker tasks per summation
    pub workers: usize,
    /// Row-range assignment policy
    pub policy: PartitionPolicy,
    /// Scheduling model
    pub model: ExecutionModel,
}

impl SumConfig {
    /// Set the worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the partition policy
    pub fn with_policy(mut self, policy: PartitionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the scheduling model
    pub fn with_model(mut self, model: ExecutionModel) -> Self {
        self.model = model;
        self
    }
}

impl Default for SumConfig {
    fn default() -> Self {
        Self {
            workers: thread::available_parallelism().map(usize::from).unwrap_or(1),
            policy: PartitionPolicy::default(),
            model: ExecutionModel::default(),
        }
    }
}

/// Orchestrates dispatch, waits for completion, reduces partial sums
#[derive(Debug, Clone)]
pub struct SumCoordinator {
    config: SumConfig,
}

impl SumCoordinator {
    /// Create a coordinator with the given configuration
    pub fn new(config: SumConfig) -> Self {
        Self { config }
    }

    /// Coordinator with the default configuration
    pub fn with_defaults() -> Self {
        Self::new(SumConfig::default())
    }

    /// Get the coordinator configuration
    pub fn config(&self) -> &SumConfig {
        &self.config
    }

    /// Sum every element of `matrix` across the configured workers
    ///
    /// Partitions the rows, launches every worker before waiting on
    /// any, then folds the partial sums left to right by worker index.
    /// The matrix is borrowed read-only for the whole call. Fails fast
    /// on a zero worker count; a worker that never finishes blocks the
    /// call, since there is no timeout or abort path.
    pub fn sum<M>(&self, matrix: &M) -> Result<M::Element>
    where
        M: DenseMatrix + Sync,
        M::Element: Send,
    {
        validate_worker_count(self.config.workers)?;

        let tasks: Vec<WorkerTask> =
            partitions(matrix.rows(), self.config.workers, self.config.policy)
                .enumerate()
                .map(|(index, partition)| WorkerTask::new(index, partition))
                .collect();

        log::debug!(
            "dispatching {} workers over {} rows ({:?}, {:?})",
            tasks.len(),
            matrix.rows(),
            self.config.policy,
            self.config.model
        );

        let partials = match self.config.model {
            ExecutionModel::SpawnPerWorker => spawn_all(matrix, &tasks),
            ExecutionModel::Pooled => pooled(matrix, &tasks, self.config.workers)?,
        };

        Ok(fold_partials(partials))
    }
}

/// Launch one scoped thread per task, then join them in task order
///
/// Every thread is spawned before the first join. A join blocks until
/// its worker has genuinely finished; there is no interruption path to
/// retry. A panicking worker is a defect, not a recoverable condition,
/// so its payload is rethrown after the scope unwinds the remaining
/// threads.
fn spawn_all<M>(matrix: &M, tasks: &[WorkerTask]) -> Vec<M::Element>
where
    M: DenseMatrix + Sync,
    M::Element: Send,
{
    thread::scope(|scope| {
        let handles: Vec<_> = tasks
            .iter()
            .map(|&task| scope.spawn(move || task.run(matrix)))
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(partial) => partial,
                Err(payload) => panic::resume_unwind(payload),
            })
            .collect()
    })
}

/// Run the tasks on a bounded pool sized to the worker count
///
/// `collect` keeps the output in task order, so the reduction below it
/// sees the same ordering as the spawn-per-worker path.
fn pooled<M>(matrix: &M, tasks: &[WorkerTask], workers: usize) -> Result<Vec<M::Element>>
where
    M: DenseMatrix + Sync,
    M::Element: Send,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("matsum-worker-{i}"))
        .build()
        .map_err(|_| SumError::ExecutorUnavailable)?;

    Ok(pool.install(|| tasks.par_iter().map(|task| task.run(matrix)).collect()))
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trips_through_json() {
        let config = SumConfig::default()
            .with_workers(4)
            .with_policy(PartitionPolicy::Balanced)
            .with_model(ExecutionModel::Pooled);
        let json = serde_json::to_string(&config).unwrap();
        let back: SumConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
