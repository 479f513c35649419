//! Tests for the monitor-mode dispatcher

use super::{ascending_items, is_sorted_by_score, margin, names};
use crate::monitor::{Admission, ResultStore};
use crate::pipeline::{Dispatcher, PipelineConfig, PipelineError};
use crate::scoring::{Item, ScoredItem, SyntheticWorkload, Transform};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn config(buffer_capacity: usize, result_capacity: usize, workers: usize) -> PipelineConfig {
    PipelineConfig {
        buffer_capacity,
        result_capacity,
        workers,
        ..PipelineConfig::default()
    }
}

#[test]
fn test_negative_margin_item_is_dropped() {
    let transform = Arc::new(SyntheticWorkload::new(100, Duration::ZERO));
    let dispatcher = Dispatcher::new(config(1, 100, 2), transform).unwrap();

    let outcome = dispatcher
        .run(vec![Item::new("A", 1.0, 10.0), Item::new("B", 5.0, 3.0)])
        .unwrap();

    assert_eq!(names(&outcome.results), vec!["A"]);
    // 100³ × 9/12
    assert!((outcome.results[0].score() - 750_000.0).abs() < 1e-3);
    assert_eq!(outcome.stats.totals.processed, 2);
    assert_eq!(outcome.stats.totals.dropped, 1);
}

#[test]
fn test_results_are_ascending() {
    let dispatcher = Dispatcher::new(config(3, 100, 4), margin()).unwrap();
    let mut items = ascending_items(40);
    items.reverse();

    let outcome = dispatcher.run(items).unwrap();

    assert_eq!(outcome.results.len(), 40);
    assert!(is_sorted_by_score(&outcome.results));
    assert_eq!(outcome.results[0].item().name(), "item-1");
    assert_eq!(outcome.results[39].item().name(), "item-40");
}

#[test]
fn test_overflow_drops_last_insert() {
    // One worker and a single slot: items are scored in input order
    let dispatcher = Dispatcher::new(config(1, 3, 1), margin()).unwrap();

    let outcome = dispatcher.run(ascending_items(4)).unwrap();

    assert_eq!(names(&outcome.results), vec!["item-1", "item-2", "item-3"]);
    assert_eq!(outcome.stats.totals.stored, 3);
    assert_eq!(outcome.stats.totals.overflowed, 1);
}

#[test]
fn test_empty_input_yields_no_results() {
    let dispatcher = Dispatcher::new(config(2, 10, 3), margin()).unwrap();

    let outcome = dispatcher.run(Vec::new()).unwrap();

    assert!(outcome.results.is_empty());
    assert_eq!(outcome.stats.items_read, 0);
    assert_eq!(outcome.stats.workers, 3);
    assert_eq!(outcome.stats.peak_buffered, 0);
}

#[test]
fn test_accept_rule_filters_every_failure_kind() {
    let dispatcher = Dispatcher::new(config(2, 10, 2), margin()).unwrap();
    let items = vec![
        Item::new("kept", 1.0, 3.0),
        Item::new("", 1.0, 3.0),
        Item::new("zero", 2.0, 2.0),
        Item::new("negative", 3.0, 1.0),
        Item::new("nan", f64::INFINITY, f64::INFINITY),
    ];

    let outcome = dispatcher.run(items).unwrap();

    assert_eq!(names(&outcome.results), vec!["kept"]);
    assert_eq!(outcome.stats.totals.dropped, 4);
}

#[test]
fn test_store_is_sealed_once_run_returns() {
    let slow: Arc<dyn Transform> = Arc::new(|item: &Item| {
        thread::sleep(Duration::from_millis(5));
        item.price() - item.weight()
    });
    let dispatcher = Dispatcher::new(config(2, 50, 4), slow).unwrap();
    let store = Arc::new(ResultStore::new(50).unwrap());

    let outcome = dispatcher
        .run_with_store(ascending_items(20), Arc::clone(&store))
        .unwrap();

    assert_eq!(outcome.results.len(), 20);
    assert_eq!(outcome.stats.totals.late, 0);
    assert!(store.is_sealed().unwrap());

    let late = ScoredItem::admit(Item::new("late", 1.0, 2.0), 1.0).unwrap();
    assert_eq!(store.insert(late).unwrap(), Admission::Sealed);
}

#[test]
fn test_peak_buffer_occupancy_within_capacity() {
    let dispatcher = Dispatcher::new(config(3, 200, 2), margin()).unwrap();

    let outcome = dispatcher.run(ascending_items(150)).unwrap();

    assert!(outcome.stats.peak_buffered >= 1);
    assert!(outcome.stats.peak_buffered <= 3);
}

#[test]
fn test_panicking_transform_fails_run_without_hanging() {
    let explosive: Arc<dyn Transform> = Arc::new(|item: &Item| {
        if item.name() == "item-3" {
            panic!("transform failure");
        }
        item.price() - item.weight()
    });
    let dispatcher = Dispatcher::new(config(1, 100, 2), explosive).unwrap();

    match dispatcher.run(ascending_items(50)) {
        Err(PipelineError::WorkerPanicked { .. }) => {}
        other => panic!("Expected WorkerPanicked, got {:?}", other.map(|o| o.stats)),
    }
}

#[test]
fn test_invalid_config_is_rejected() {
    match Dispatcher::new(config(0, 10, 1), margin()) {
        Err(PipelineError::InvalidConfig { message }) => {
            assert_eq!(message, "buffer capacity must be greater than 0")
        }
        Err(e) => panic!("Expected InvalidConfig, got {:?}", e),
        Ok(_) => panic!("Expected InvalidConfig, got a dispatcher"),
    }
}
