//! The per-item scoring function

use super::item::Item;
use std::thread;
use std::time::Duration;

/// Loop bound of the reference workload (bound³ accumulations per item)
pub const DEFAULT_WORKLOAD_BOUND: usize = 100;

/// Fixed latency floor added after the arithmetic of each item
pub const DEFAULT_WORKLOAD_DELAY: Duration = Duration::from_millis(100);

/// Deterministic, CPU-bound scoring of a single item
///
/// Implementations must be pure with respect to the item: the same item
/// always yields the same score.
pub trait Transform: Send + Sync {
    fn score(&self, item: &Item) -> f64;
}

impl<F> Transform for F
where
    F: Fn(&Item) -> f64 + Send + Sync,
{
    fn score(&self, item: &Item) -> f64 {
        self(item)
    }
}

/// Dummy workload standing in for real per-item work
///
/// Accumulates `(price - weight) / (price + weight + 1)` once per iteration
/// of three nested loops of `bound` each, then sleeps for `delay`.
/// A zero denominator follows IEEE-754: `±inf` for a non-zero numerator,
/// NaN for `0 / 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticWorkload {
    bound: usize,
    delay: Duration,
}

impl SyntheticWorkload {
    pub fn new(bound: usize, delay: Duration) -> Self {
        Self { bound, delay }
    }

    pub fn bound(&self) -> usize {
        self.bound
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SyntheticWorkload {
    fn default() -> Self {
        Self::new(DEFAULT_WORKLOAD_BOUND, DEFAULT_WORKLOAD_DELAY)
    }
}

impl Transform for SyntheticWorkload {
    fn score(&self, item: &Item) -> f64 {
        let mut result = 0.0;
        for _ in 0..self.bound {
            for _ in 0..self.bound {
                for _ in 0..self.bound {
                    result += (item.price() - item.weight()) / (item.price() + item.weight() + 1.0);
                }
            }
        }

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        result
    }
}
