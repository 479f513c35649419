//! Monitors shared between the dispatcher and the worker pool
//!
//! Each monitor owns its state behind a single mutex and exposes only
//! synchronized methods; no field is reachable from outside.
//!
//! ```text
//!  Dispatcher                                   Dispatcher
//!      │ put (blocks while full)                    ▲ drain (after all workers stop)
//!      ▼                                            │
//! ┌──────────────────┐  take   ┌────────┐  insert ┌──────────────────┐
//! │ BoundedQueue (D) │ ──────▶ │ Worker │ ──────▶ │ ResultStore (R)  │
//! │   LIFO slots     │         │  × W   │         │ sorted ascending │
//! └──────────────────┘         └────────┘         └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use scorepipe::monitor::{Admission, BoundedQueue, ResultStore};
//! use scorepipe::scoring::{Item, ScoredItem};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let queue = BoundedQueue::new(2)?;
//! queue.put(Item::new("first", 1.0, 2.0))?;
//! queue.put(Item::new("second", 1.0, 3.0))?;
//! queue.close_input()?;
//!
//! // LIFO: the last item put comes out first
//! assert_eq!(queue.take()?.map(|i| i.name().to_string()), Some("second".to_string()));
//!
//! let store = ResultStore::new(10)?;
//! let scored = ScoredItem::admit(Item::new("first", 1.0, 2.0), 0.25).unwrap();
//! assert_eq!(store.insert(scored)?, Admission::Stored { rank: 0 });
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod buffer;
mod error;
mod results;

pub use buffer::BoundedQueue;
pub use error::{MonitorError, MonitorResult};
pub use results::{Admission, ResultStore};

/// Reference buffer capacity (D)
pub const DEFAULT_BUFFER_CAPACITY: usize = 15;

/// Reference result capacity (R)
pub const DEFAULT_RESULT_CAPACITY: usize = 100;

#[cfg(test)]
mod tests;
