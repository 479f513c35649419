//! Application Error Types
//!
//! Everything that can end a run, wrapped so `startup` can log it once
//! and exit with a failure status.

use crate::core::error_handling::ContextualError;
use crate::input::InputError;
use crate::pipeline::PipelineError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("{message}")]
    ConfigRead {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    ConfigParse {
        message: String,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("{message}")]
    Output {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Runtime error: {message}")]
    Runtime { message: String },

    #[error("Logging setup failed: {message}")]
    Logging { message: String },
}

impl AppError {
    /// Operation named in the fatal log line of a system error
    pub fn operation(&self) -> &'static str {
        match self {
            AppError::Config { .. } | AppError::ConfigRead { .. } | AppError::ConfigParse { .. } => {
                "Configuration loading"
            }
            AppError::Input(_) => "Reading input",
            AppError::Pipeline(_) | AppError::Runtime { .. } => "Running pipeline",
            AppError::Output { .. } => "Writing report",
            AppError::Logging { .. } => "Logging setup",
        }
    }
}

impl ContextualError for AppError {
    fn is_user_actionable(&self) -> bool {
        self.user_message().is_some()
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            AppError::Config { message }
            | AppError::ConfigRead { message, .. }
            | AppError::ConfigParse { message, .. }
            | AppError::Output { message, .. } => Some(message),
            AppError::Input(e) => e.user_message(),
            AppError::Pipeline(PipelineError::InvalidConfig { message }) => Some(message),
            AppError::Pipeline(_) | AppError::Runtime { .. } | AppError::Logging { .. } => None,
        }
    }
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;
