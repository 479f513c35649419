//! Items, scores and the scoring transform
//!
//! An [`Item`] is moved into a worker, scored by a [`Transform`], and
//! either becomes a [`ScoredItem`] or is dropped by the accept rule.

mod item;
mod transform;

pub use item::{Item, ScoredItem};
pub use transform::{SyntheticWorkload, Transform, DEFAULT_WORKLOAD_BOUND, DEFAULT_WORKLOAD_DELAY};
