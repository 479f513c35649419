//! Dispatcher: feeds the buffer, closes it, waits for the pool, drains results

use crate::monitor::{BoundedQueue, ResultStore};
use crate::pipeline::config::PipelineConfig;
use crate::pipeline::coordinator::ActiveWorkers;
use crate::pipeline::error::{PipelineError, PipelineResult};
use crate::pipeline::types::{PipelineOutcome, RunStats, WorkerStats};
use crate::pipeline::worker::Worker;
use crate::scoring::{Item, Transform};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

type WorkerHandle = JoinHandle<PipelineResult<WorkerStats>>;

/// Single coordinating task of a monitor-mode run
///
/// Each call to [`Dispatcher::run`] builds a fresh buffer, result store and
/// worker roster, and tears them down when it returns.
pub struct Dispatcher {
    config: PipelineConfig,
    transform: Arc<dyn Transform>,
}

impl Dispatcher {
    pub fn new(config: PipelineConfig, transform: Arc<dyn Transform>) -> PipelineResult<Self> {
        config.validate()?;
        Ok(Self { config, transform })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Score every item and return the accepted results in ascending order
    ///
    /// Blocks the calling thread while the buffer is full and until every
    /// worker has stopped.
    pub fn run(&self, items: Vec<Item>) -> PipelineResult<PipelineOutcome> {
        let store = Arc::new(ResultStore::new(self.config.result_capacity)?);
        self.run_with_store(items, store)
    }

    pub(crate) fn run_with_store(
        &self,
        items: Vec<Item>,
        store: Arc<ResultStore>,
    ) -> PipelineResult<PipelineOutcome> {
        let started = Instant::now();
        let items_read = items.len();
        let queue = Arc::new(BoundedQueue::new(self.config.buffer_capacity)?);
        let roster = Arc::new(ActiveWorkers::new(self.config.workers));

        let handles = self.spawn_workers(&queue, &store, &roster)?;
        log::debug!(
            "Dispatching {} items to {} workers (buffer {}, results {})",
            items_read,
            handles.len(),
            self.config.buffer_capacity,
            self.config.result_capacity
        );

        let fed = feed(&queue, items);
        // Closing wakes every blocked worker, including after a failed feed
        queue.close_input()?;
        roster.wait_all_done()?;

        // No worker can touch the store past this point
        let results = store.drain()?;
        let per_worker = join_workers(handles)?;
        fed?;

        let stats = RunStats::collect(
            items_read,
            &per_worker,
            queue.high_water_mark()?,
            started.elapsed(),
        );
        stats.log_summary();

        Ok(PipelineOutcome { results, stats })
    }

    fn spawn_workers(
        &self,
        queue: &Arc<BoundedQueue>,
        store: &Arc<ResultStore>,
        roster: &Arc<ActiveWorkers>,
    ) -> PipelineResult<Vec<WorkerHandle>> {
        let mut handles = Vec::with_capacity(self.config.workers);

        for id in 0..self.config.workers {
            let worker = Worker::new(
                id,
                Arc::clone(queue),
                Arc::clone(store),
                Arc::clone(roster),
                Arc::clone(&self.transform),
            );

            match thread::Builder::new()
                .name(format!("worker-{id}"))
                .spawn(move || worker.run())
            {
                Ok(handle) => handles.push(handle),
                Err(source) => {
                    log::error!("Could not spawn worker {}: {}", id, source);
                    // Workers id.. never ran; account for them before shutting down
                    for _ in id..self.config.workers {
                        roster.worker_stopped()?;
                    }
                    queue.close_input()?;
                    if let Err(e) = join_workers(handles) {
                        log::warn!("Worker failed during aborted start: {}", e);
                    }
                    return Err(PipelineError::WorkerSpawn { worker: id, source });
                }
            }
        }

        Ok(handles)
    }
}

fn feed(queue: &BoundedQueue, items: Vec<Item>) -> PipelineResult<()> {
    for item in items {
        queue.put(item)?;
    }
    Ok(())
}

// Join every worker before reporting the first failure
fn join_workers(handles: Vec<WorkerHandle>) -> PipelineResult<Vec<WorkerStats>> {
    let outcomes: Vec<PipelineResult<WorkerStats>> = handles
        .into_iter()
        .enumerate()
        .map(|(worker, handle)| {
            handle
                .join()
                .unwrap_or(Err(PipelineError::WorkerPanicked { worker }))
        })
        .collect();

    outcomes.into_iter().collect()
}
