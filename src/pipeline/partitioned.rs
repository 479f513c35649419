//! Partitioned execution: contiguous per-thread ranges, merged once at the end
//!
//! Threads share nothing while scoring. Each keeps its accepted results
//! locally and the merge inserts them into one [`ResultStore`] under a
//! single lock, so ordering and capacity rules are the same as in monitor
//! mode.

use crate::monitor::ResultStore;
use crate::pipeline::config::PipelineConfig;
use crate::pipeline::error::{PipelineError, PipelineResult};
use crate::pipeline::types::{PipelineOutcome, RunStats, WorkerStats};
use crate::scoring::{Item, ScoredItem, Transform};
use std::ops::Range;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Split `0..len` into `threads` contiguous ranges
///
/// Every range holds `len / threads` indices except the last, which also
/// takes the remainder. Ranges may be empty when `len < threads`.
pub fn partition_ranges(len: usize, threads: usize) -> Vec<Range<usize>> {
    if threads == 0 {
        return Vec::new();
    }

    let per = len / threads;
    (0..threads)
        .map(|t| {
            let start = t * per;
            let end = if t + 1 == threads { len } else { start + per };
            start..end
        })
        .collect()
}

pub struct PartitionedRun {
    config: PipelineConfig,
    transform: Arc<dyn Transform>,
}

struct Partition {
    accepted: Vec<ScoredItem>,
    stats: WorkerStats,
}

impl PartitionedRun {
    pub fn new(config: PipelineConfig, transform: Arc<dyn Transform>) -> PipelineResult<Self> {
        config.validate()?;
        Ok(Self { config, transform })
    }

    pub fn run(&self, items: Vec<Item>) -> PipelineResult<PipelineOutcome> {
        let started = Instant::now();
        let items_read = items.len();
        let store = ResultStore::new(self.config.result_capacity)?;

        let chunks = split_into(items, &partition_ranges(items_read, self.config.workers));
        log::debug!(
            "Scoring {} items in {} partitions",
            items_read,
            chunks.len()
        );

        let partitions = self.score_partitions(chunks)?;

        let mut per_thread = Vec::with_capacity(partitions.len());
        for Partition {
            accepted,
            mut stats,
        } in partitions
        {
            for admission in store.insert_batch(accepted)? {
                stats.record(admission);
            }
            per_thread.push(stats);
        }

        let results = store.drain()?;
        let stats = RunStats::collect(items_read, &per_thread, 0, started.elapsed());
        stats.log_summary();

        Ok(PipelineOutcome { results, stats })
    }

    fn score_partitions(&self, chunks: Vec<Vec<Item>>) -> PipelineResult<Vec<Partition>> {
        let transform: &dyn Transform = &*self.transform;

        thread::scope(|scope| -> PipelineResult<Vec<Partition>> {
            let mut handles = Vec::with_capacity(chunks.len());
            for (id, chunk) in chunks.into_iter().enumerate() {
                let handle = thread::Builder::new()
                    .name(format!("partition-{id}"))
                    .spawn_scoped(scope, move || score_chunk(id, chunk, transform))
                    .map_err(|source| PipelineError::WorkerSpawn { worker: id, source })?;
                handles.push(handle);
            }

            let joined: Vec<PipelineResult<Partition>> = handles
                .into_iter()
                .enumerate()
                .map(|(worker, handle)| {
                    handle
                        .join()
                        .map_err(|_| PipelineError::WorkerPanicked { worker })
                })
                .collect();
            joined.into_iter().collect()
        })
    }
}

fn score_chunk(id: usize, chunk: Vec<Item>, transform: &dyn Transform) -> Partition {
    let mut stats = WorkerStats::default();
    let mut accepted = Vec::new();

    for item in chunk {
        stats.processed += 1;
        let score = transform.score(&item);
        match ScoredItem::admit(item, score) {
            Some(scored) => accepted.push(scored),
            None => stats.dropped += 1,
        }
    }

    log::debug!(
        "Partition {} scored {} items, {} accepted",
        id,
        stats.processed,
        accepted.len()
    );
    Partition { accepted, stats }
}

// Consumes `items` into one vector per range, preserving input order
fn split_into(mut items: Vec<Item>, ranges: &[Range<usize>]) -> Vec<Vec<Item>> {
    let mut chunks: Vec<Vec<Item>> = ranges
        .iter()
        .rev()
        .map(|range| items.split_off(range.start))
        .collect();
    chunks.reverse();
    chunks
}
