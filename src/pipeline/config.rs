//! Pipeline sizing and execution mode

use crate::monitor::{DEFAULT_BUFFER_CAPACITY, DEFAULT_RESULT_CAPACITY};
use crate::pipeline::error::{PipelineError, PipelineResult};
use serde::Deserialize;
use strum_macros::{Display, EnumIter, EnumString};

/// Reference worker count (W)
pub const DEFAULT_WORKERS: usize = 10;

/// How items are distributed over threads
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PipelineMode {
    /// Dispatcher feeds a bounded buffer drained by a worker pool
    #[default]
    Monitor,
    /// Input split into contiguous per-thread ranges, merged at the end
    Partitioned,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Slots in the bounded buffer (D)
    pub buffer_capacity: usize,
    /// Maximum number of reported results (R)
    pub result_capacity: usize,
    /// Worker threads (W)
    pub workers: usize,
    pub mode: PipelineMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            result_capacity: DEFAULT_RESULT_CAPACITY,
            workers: DEFAULT_WORKERS,
            mode: PipelineMode::default(),
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> PipelineResult<()> {
        let checks = [
            ("buffer capacity", self.buffer_capacity),
            ("result capacity", self.result_capacity),
            ("workers", self.workers),
        ];

        match checks.iter().find(|(_, value)| *value == 0) {
            Some((name, _)) => Err(PipelineError::InvalidConfig {
                message: format!("{} must be greater than 0", name),
            }),
            None => Ok(()),
        }
    }
}
