//! Synchronization utilities for robust mutex handling
//!
//! The monitors and the worker coordination all sit on `std::sync::Mutex`.
//! A panic while one of those locks is held poisons it; these helpers turn
//! the poison into the caller's own error type instead of unwinding again.

use std::sync::LockResult;

/// Handle poisoned mutex cases with consistent error handling
///
/// Works for both `Mutex::lock` and `Condvar::wait*` results, since both
/// report poisoning through a `LockResult` carrying the guard.
///
/// # Arguments
/// * `result` - The result from a lock or condition-variable wait
/// * `error_constructor` - Function to create the appropriate error type
///
/// # Examples
/// ```
/// use std::sync::Mutex;
/// use scorepipe::core::sync::handle_mutex_poison;
/// use scorepipe::monitor::MonitorError;
///
/// let mutex = Mutex::new(42);
/// let guard = handle_mutex_poison(mutex.lock(), |message| MonitorError::Poisoned { message })
///     .unwrap();
/// assert_eq!(*guard, 42);
/// ```
pub fn handle_mutex_poison<T, E>(
    result: LockResult<T>,
    error_constructor: impl FnOnce(String) -> E,
) -> Result<T, E> {
    result.map_err(|poison_err| {
        error_constructor(format!(
            "Internal synchronisation error (mutex poisoned). This indicates a panic occurred while holding a lock. PoisonError: {:?}",
            poison_err
        ))
    })
}
