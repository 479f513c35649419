//! Generic error handling utilities
//!
//! Fatal errors from any layer (configuration, input decoding, pipeline
//! setup, report output) funnel through [`log_error_with_context`] so the
//! operator sees one consistent line per failed run.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)`; otherwise it returns `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error carries a message the operator can act on
    /// directly (bad flag value, malformed input file, missing config key)
    fn is_user_actionable(&self) -> bool;

    /// Returns the specific user message if this is a user-actionable error
    fn user_message(&self) -> Option<&str>;
}

/// Log errors with appropriate detail level based on error specificity
///
/// User-actionable errors print their own message; system errors print the
/// operation context. Full detail always goes to debug level.
///
/// # Examples
/// ```rust,no_run
/// # use scorepipe::core::error_handling::log_error_with_context;
/// # use scorepipe::app::error::AppError;
/// let err = AppError::Config {
///     message: "workers must be greater than 0".to_string(),
/// };
/// log_error_with_context(&err, "Configuration loading");
/// // Logs: "FATAL: workers must be greater than 0"
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => log::error!("FATAL: {}", user_msg),
        _ => log::error!("FATAL: {}: {}", operation_context, error),
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
