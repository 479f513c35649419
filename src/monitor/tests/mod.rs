//! Test modules for the monitors
//!
//! Organized by monitor, with the multi-threaded suites kept apart.

mod concurrent;

use crate::scoring::{Item, ScoredItem};

pub(super) fn item(name: &str) -> Item {
    Item::new(name, 1.0, 2.0)
}

pub(super) fn scored(name: &str, score: f64) -> ScoredItem {
    ScoredItem::admit(Item::new(name, 1.0, 2.0), score).expect("test scores are positive")
}

pub(super) fn names(entries: &[ScoredItem]) -> Vec<&str> {
    entries.iter().map(|e| e.item().name()).collect()
}

pub(super) fn is_sorted_by_score(entries: &[ScoredItem]) -> bool {
    entries.windows(2).all(|w| w[0].score() <= w[1].score())
}
