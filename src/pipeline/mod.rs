//! Scoring pipeline
//!
//! Runs a [`Transform`] over a batch of items on a pool of worker threads
//! and returns the accepted results in ascending score order.
//!
//! ```text
//!              Monitor mode                        Partitioned mode
//!
//!   items ──▶ Dispatcher ──put──▶ BoundedQueue    items ──▶ split into W ranges
//!                 │                   │ take                   │ │ │
//!                 │              W × Worker                  W × thread
//!                 │                   │ insert                 │ │ │ (local results)
//!                 │                   ▼                        ▼ ▼ ▼
//!                 │             ResultStore ◀── last worker    merge once
//!                 └── wait all done ─┘    fires the latch      │
//!                           drain ──────────▶ results ◀────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use scorepipe::pipeline::{run_pipeline, PipelineConfig};
//! use scorepipe::scoring::{Item, SyntheticWorkload};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PipelineConfig {
//!     buffer_capacity: 1,
//!     workers: 2,
//!     ..PipelineConfig::default()
//! };
//! let transform = Arc::new(SyntheticWorkload::new(10, Duration::ZERO));
//! let items = vec![Item::new("A", 1.0, 10.0), Item::new("B", 5.0, 3.0)];
//!
//! let outcome = run_pipeline(&config, transform, items)?;
//! assert_eq!(outcome.results.len(), 1);
//! assert_eq!(outcome.results[0].item().name(), "A");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod config;
mod coordinator;
mod dispatcher;
mod error;
mod partitioned;
mod types;
mod worker;

pub use config::{PipelineConfig, PipelineMode, DEFAULT_WORKERS};
pub use coordinator::ActiveWorkers;
pub use dispatcher::Dispatcher;
pub use error::{PipelineError, PipelineResult};
pub use partitioned::{partition_ranges, PartitionedRun};
pub use types::{PipelineOutcome, RunStats, WorkerStats};
pub use worker::{Worker, WorkerState};

use crate::scoring::{Item, Transform};
use std::sync::Arc;

/// Run one batch through the pipeline selected by `config.mode`
pub fn run_pipeline(
    config: &PipelineConfig,
    transform: Arc<dyn Transform>,
    items: Vec<Item>,
) -> PipelineResult<PipelineOutcome> {
    log::info!(
        "Running {} pipeline over {} items with {} workers",
        config.mode,
        items.len(),
        config.workers
    );

    match config.mode {
        PipelineMode::Monitor => Dispatcher::new(config.clone(), transform)?.run(items),
        PipelineMode::Partitioned => PartitionedRun::new(config.clone(), transform)?.run(items),
    }
}

#[cfg(test)]
mod tests;
