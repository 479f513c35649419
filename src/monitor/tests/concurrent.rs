//! Tests for concurrent monitor access

use super::{is_sorted_by_score, item, scored};
use crate::monitor::{Admission, BoundedQueue, ResultStore};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

// Deterministic pseudo-random scores in (0, 1000)
fn lcg_scores(seed: u64, count: usize) -> Vec<f64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % 999_983) as f64 / 1000.0 + 0.001
        })
        .collect()
}

#[test]
fn test_occupancy_never_exceeds_capacity() {
    let capacity = 3;
    let total = 500;
    let queue = Arc::new(BoundedQueue::new(capacity).unwrap());

    let consumers: Vec<_> = (0..4)
        .map(|_| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                let mut taken = 0usize;
                while let Some(_item) = queue.take().unwrap() {
                    taken += 1;
                    assert!(queue.len().unwrap() <= capacity);
                }
                taken
            })
        })
        .collect();

    for i in 0..total {
        let occupied = queue.put(item(&format!("item-{i}"))).unwrap();
        assert!(occupied >= 1 && occupied <= capacity);
    }
    queue.close_input().unwrap();

    let consumed: usize = consumers.into_iter().map(|c| c.join().unwrap()).sum();

    assert_eq!(consumed, total);
    assert_eq!(queue.len().unwrap(), 0);
    assert!(queue.high_water_mark().unwrap() <= capacity);
}

#[test]
fn test_concurrent_inserts_stay_sorted() {
    let threads = 8;
    let per_thread = 50;
    let store = Arc::new(ResultStore::new(threads * per_thread).unwrap());
    let done = Arc::new(AtomicBool::new(false));

    let observer = {
        let store = Arc::clone(&store);
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut observations = 0usize;
            while !done.load(Ordering::Acquire) {
                let snapshot = store.snapshot().unwrap();
                assert!(is_sorted_by_score(&snapshot));
                observations += 1;
            }
            observations
        })
    };

    let writers: Vec<_> = (0..threads)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for (i, score) in lcg_scores(t as u64 + 1, per_thread).into_iter().enumerate() {
                    let admission = store.insert(scored(&format!("t{t}-{i}"), score)).unwrap();
                    assert!(matches!(admission, Admission::Stored { .. }));
                }
            })
        })
        .collect();

    for writer in writers {
        writer.join().unwrap();
    }
    done.store(true, Ordering::Release);
    assert!(observer.join().unwrap() > 0);

    let drained = store.drain().unwrap();
    assert_eq!(drained.len(), threads * per_thread);
    assert!(is_sorted_by_score(&drained));
}

#[test]
fn test_concurrent_inserts_respect_capacity() {
    let store = Arc::new(ResultStore::new(25).unwrap());

    let writers: Vec<_> = (0..5)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for (i, score) in lcg_scores(t + 100, 20).into_iter().enumerate() {
                    store.insert(scored(&format!("t{t}-{i}"), score)).unwrap();
                }
            })
        })
        .collect();

    for writer in writers {
        writer.join().unwrap();
    }

    assert_eq!(store.len().unwrap(), 25);
    assert_eq!(store.overflow_count().unwrap(), 75);
    assert!(is_sorted_by_score(&store.snapshot().unwrap()));
}
