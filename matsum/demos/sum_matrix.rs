//! Demo driver: build a dense matrix and sum it across workers

use clap::Parser;
use matsum::{ExecutionModel, PartitionPolicy, SumConfig, SumCoordinator, VecMatrix};

#[derive(Parser)]
#[command(about = "Row-partitioned parallel matrix summation")]
struct Args {
    /// Matrix rows
    #[arg(long, default_value_t = 1024)]
    rows: usize,

    /// Matrix columns
    #[arg(long, default_value_t = 512)]
    cols: usize,

    /// Worker count (defaults to available parallelism)
    #[arg(long)]
    workers: Option<usize>,

    /// Use the balanced partition policy instead of fixed blocks
    #[arg(long)]
    balanced: bool,

    /// Run on a bounded worker pool instead of a thread per worker
    #[arg(long)]
    pooled: bool,
}

fn main() -> matsum::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let cols = args.cols;
    let matrix = VecMatrix::from_fn(args.rows, cols, |row, col| (row * cols + col) as f64);

    let mut config = SumConfig::default();
    if let Some(workers) = args.workers {
        config = config.with_workers(workers);
    }
    if args.balanced {
        config = config.with_policy(PartitionPolicy::Balanced);
    }
    if args.pooled {
        config = config.with_model(ExecutionModel::Pooled);
    }

    let coordinator = SumCoordinator::new(config);
    let total = coordinator.sum(&matrix)?;

    println!(
        "{} x {} matrix, {} workers: total {total}",
        args.rows,
        args.cols,
        coordinator.config().workers
    );
    Ok(())
}
