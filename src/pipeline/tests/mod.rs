//! Test modules for the pipeline
//!
//! Organized by component, with whole-run behavior in `runs`.

mod dispatcher;

use crate::scoring::{Item, ScoredItem, Transform};
use std::sync::Arc;

/// Cheap deterministic transform: price minus weight
pub(super) fn margin() -> Arc<dyn Transform> {
    Arc::new(|item: &Item| item.price() - item.weight())
}

/// Items whose margins are 1.0, 2.0, ... `count`
pub(super) fn ascending_items(count: usize) -> Vec<Item> {
    (1..=count)
        .map(|i| Item::new(format!("item-{i}"), 1.0, 1.0 + i as f64))
        .collect()
}

pub(super) fn names(results: &[ScoredItem]) -> Vec<&str> {
    results.iter().map(|r| r.item().name()).collect()
}

pub(super) fn is_sorted_by_score(results: &[ScoredItem]) -> bool {
    results.windows(2).all(|w| w[0].score() <= w[1].score())
}
