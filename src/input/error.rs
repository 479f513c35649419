//! Input Error Types

use crate::core::error_handling::ContextualError;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("{message}")]
    Read {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed input {message}")]
    Malformed {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ContextualError for InputError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            InputError::Read { message, .. } | InputError::Malformed { message, .. } => {
                Some(message)
            }
        }
    }
}

/// Result type for input operations
pub type InputResult<T> = Result<T, InputError>;
