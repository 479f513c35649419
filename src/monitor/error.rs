//! Monitor Error Types

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MonitorError {
    #[error("Capacity of the {monitor} must be greater than 0")]
    ZeroCapacity { monitor: &'static str },

    #[error("Input already closed; no further items can be put")]
    InputClosed,

    #[error("Result store already drained")]
    AlreadyDrained,

    #[error("Monitor poisoned: {message}")]
    Poisoned { message: String },
}

/// Result type for monitor operations
pub type MonitorResult<T> = Result<T, MonitorError>;
