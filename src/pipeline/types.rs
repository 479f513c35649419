//! Run results and counters

use crate::monitor::Admission;
use crate::scoring::ScoredItem;
use std::time::Duration;

/// Counters kept by one worker (or one partition thread)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerStats {
    /// Items taken and scored
    pub processed: usize,
    /// Results accepted into the store
    pub stored: usize,
    /// Items failing the accept rule
    pub dropped: usize,
    /// Accepted results the full store turned away
    pub overflowed: usize,
    /// Results that reached an already drained store
    pub late: usize,
}

impl WorkerStats {
    pub(crate) fn record(&mut self, admission: Admission) {
        match admission {
            Admission::Stored { .. } => self.stored += 1,
            Admission::Overflow => self.overflowed += 1,
            Admission::Sealed => self.late += 1,
        }
    }

    pub fn merge(&mut self, other: &WorkerStats) {
        self.processed += other.processed;
        self.stored += other.stored;
        self.dropped += other.dropped;
        self.overflowed += other.overflowed;
        self.late += other.late;
    }
}

/// Summary of a whole run
#[derive(Debug, Clone, PartialEq)]
pub struct RunStats {
    pub items_read: usize,
    pub workers: usize,
    pub totals: WorkerStats,
    /// Highest buffer occupancy (zero for partitioned runs)
    pub peak_buffered: usize,
    pub elapsed: Duration,
}

impl RunStats {
    pub(crate) fn collect(
        items_read: usize,
        per_worker: &[WorkerStats],
        peak_buffered: usize,
        elapsed: Duration,
    ) -> Self {
        let totals = per_worker.iter().fold(WorkerStats::default(), |mut acc, s| {
            acc.merge(s);
            acc
        });

        Self {
            items_read,
            workers: per_worker.len(),
            totals,
            peak_buffered,
            elapsed,
        }
    }

    pub(crate) fn log_summary(&self) {
        log::info!(
            "Processed {} of {} items with {} workers in {:.3}s",
            self.totals.processed,
            self.items_read,
            self.workers,
            self.elapsed.as_secs_f64()
        );
        log::info!(
            "Stored {} results; dropped {} by accept rule, {} over capacity",
            self.totals.stored,
            self.totals.dropped,
            self.totals.overflowed
        );
        if self.totals.late > 0 {
            log::warn!("{} results arrived after the final drain", self.totals.late);
        }
        log::debug!("Peak buffer occupancy: {}", self.peak_buffered);
    }
}

/// Ordered results plus the statistics of the run that produced them
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Ascending by score
    pub results: Vec<ScoredItem>,
    pub stats: RunStats,
}
