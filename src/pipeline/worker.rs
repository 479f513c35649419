//! Worker loop: take, score, maybe insert, until the buffer reports the end

use crate::monitor::{BoundedQueue, ResultStore};
use crate::pipeline::coordinator::ActiveWorkers;
use crate::pipeline::error::PipelineResult;
use crate::pipeline::types::WorkerStats;
use crate::scoring::{Item, ScoredItem, Transform};
use std::sync::Arc;

/// Lifecycle of a worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    /// Taking and scoring items
    Running,
    /// `take` returned the end-of-input sentinel
    Draining,
    /// Reported to [`ActiveWorkers`]
    Stopped,
}

pub struct Worker {
    id: usize,
    queue: Arc<BoundedQueue>,
    store: Arc<ResultStore>,
    roster: Arc<ActiveWorkers>,
    transform: Arc<dyn Transform>,
}

impl Worker {
    pub fn new(
        id: usize,
        queue: Arc<BoundedQueue>,
        store: Arc<ResultStore>,
        roster: Arc<ActiveWorkers>,
        transform: Arc<dyn Transform>,
    ) -> Self {
        Self {
            id,
            queue,
            store,
            roster,
            transform,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Run until the buffer is closed and empty
    ///
    /// The stop is reported to the roster when this returns, on error,
    /// and on panic inside the transform.
    pub fn run(self) -> PipelineResult<WorkerStats> {
        let mut lifecycle = Lifecycle {
            queue: &self.queue,
            roster: &self.roster,
            worker: self.id,
            state: WorkerState::Running,
        };
        log::debug!("Worker {} starting", self.id);

        let mut stats = WorkerStats::default();
        while lifecycle.state == WorkerState::Running {
            lifecycle.state = self.step(&mut stats)?;
        }

        log::debug!(
            "Worker {} draining after {} items ({} stored, {} dropped)",
            self.id,
            stats.processed,
            stats.stored,
            stats.dropped
        );
        Ok(stats)
    }

    fn step(&self, stats: &mut WorkerStats) -> PipelineResult<WorkerState> {
        match self.queue.take()? {
            Some(item) => {
                self.process(item, stats)?;
                Ok(WorkerState::Running)
            }
            None => Ok(WorkerState::Draining),
        }
    }

    fn process(&self, item: Item, stats: &mut WorkerStats) -> PipelineResult<()> {
        stats.processed += 1;
        let score = self.transform.score(&item);
        log::trace!("Worker {} scored '{}' at {}", self.id, item.name(), score);

        match ScoredItem::admit(item, score) {
            Some(scored) => stats.record(self.store.insert(scored)?),
            None => stats.dropped += 1,
        }
        Ok(())
    }
}

// Moves the worker to Stopped on every exit path. An abnormal stop closes
// the buffer so the dispatcher cannot block on a pool that no longer takes.
struct Lifecycle<'a> {
    queue: &'a BoundedQueue,
    roster: &'a ActiveWorkers,
    worker: usize,
    state: WorkerState,
}

impl Drop for Lifecycle<'_> {
    fn drop(&mut self) {
        if self.state == WorkerState::Running {
            log::warn!("Worker {} stopped before input was exhausted", self.worker);
            if let Err(e) = self.queue.close_input() {
                log::error!("Worker {} could not close the buffer: {}", self.worker, e);
            }
        }
        self.state = WorkerState::Stopped;

        match self.roster.worker_stopped() {
            Ok(true) => log::debug!("Worker {} stopped; all workers done", self.worker),
            Ok(false) => log::debug!("Worker {} stopped", self.worker),
            Err(e) => log::error!("Worker {} could not report stop: {}", self.worker, e),
        }
    }
}
