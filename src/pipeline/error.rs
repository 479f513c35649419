//! Pipeline Error Types

use crate::monitor::MonitorError;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Invalid pipeline configuration: {message}")]
    InvalidConfig { message: String },

    #[error(transparent)]
    Monitor(#[from] MonitorError),

    #[error("Failed to spawn worker {worker}: {source}")]
    WorkerSpawn {
        worker: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Worker {worker} panicked")]
    WorkerPanicked { worker: usize },

    #[error("Worker coordination failed: {message}")]
    Coordination { message: String },
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
