//! Active-worker accounting and the one-shot "all workers done" latch

use crate::core::sync::handle_mutex_poison;
use crate::pipeline::error::{PipelineError, PipelineResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Condvar, Mutex};

/// Shared count of running workers
///
/// The count is set before any worker starts and only ever decreases.
/// The worker whose decrement takes it from 1 to 0 fires the latch; every
/// other decrement is silent.
#[derive(Debug)]
pub struct ActiveWorkers {
    active: AtomicUsize,
    done: Mutex<bool>,
    all_done: Condvar,
    completions: AtomicUsize,
}

impl ActiveWorkers {
    /// A roster of zero workers is already done.
    pub fn new(workers: usize) -> Self {
        Self {
            active: AtomicUsize::new(workers),
            done: Mutex::new(workers == 0),
            all_done: Condvar::new(),
            completions: AtomicUsize::new(0),
        }
    }

    pub fn active(&self) -> usize {
        self.active.load(Ordering::Acquire)
    }

    /// Report one worker as stopped
    ///
    /// Returns `true` for the single caller that performed the last
    /// decrement and fired the latch.
    pub fn worker_stopped(&self) -> PipelineResult<bool> {
        let previous = self
            .active
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
            .map_err(|_| PipelineError::Coordination {
                message: "more workers stopped than were started".to_string(),
            })?;

        if previous != 1 {
            return Ok(false);
        }

        let mut done = handle_mutex_poison(self.done.lock(), coordination)?;
        *done = true;
        self.completions.fetch_add(1, Ordering::AcqRel);
        drop(done);

        self.all_done.notify_all();
        Ok(true)
    }

    /// Block until the last worker has stopped
    pub fn wait_all_done(&self) -> PipelineResult<()> {
        let done = handle_mutex_poison(self.done.lock(), coordination)?;
        let _done = handle_mutex_poison(self.all_done.wait_while(done, |done| !*done), coordination)?;
        Ok(())
    }

    pub fn is_done(&self) -> PipelineResult<bool> {
        Ok(*handle_mutex_poison(self.done.lock(), coordination)?)
    }

    /// How many times the latch fired (zero or one)
    pub fn completion_count(&self) -> usize {
        self.completions.load(Ordering::Acquire)
    }
}

fn coordination(message: String) -> PipelineError {
    PipelineError::Coordination { message }
}
