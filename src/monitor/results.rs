//! Always-sorted, capacity-bounded result collector

use crate::core::sync::handle_mutex_poison;
use crate::monitor::error::{MonitorError, MonitorResult};
use crate::scoring::ScoredItem;
use std::sync::{Mutex, MutexGuard};

/// Outcome of [`ResultStore::insert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Stored at this position of the ascending order
    Stored { rank: usize },
    /// Store was full; the item was dropped
    Overflow,
    /// Store was already drained; the item was dropped
    Sealed,
}

#[derive(Debug)]
struct StoreState {
    entries: Vec<ScoredItem>,
    sealed: bool,
    overflowed: usize,
}

/// Concurrent collection of [`ScoredItem`]s kept in ascending score order
///
/// Every insert lands at its sorted position, so the contents are ordered
/// at every point another thread can observe them. Equal scores keep
/// their insertion order. Once full, further inserts are dropped.
#[derive(Debug)]
pub struct ResultStore {
    state: Mutex<StoreState>,
    capacity: usize,
}

impl ResultStore {
    pub fn new(capacity: usize) -> MonitorResult<Self> {
        if capacity == 0 {
            return Err(MonitorError::ZeroCapacity {
                monitor: "result store",
            });
        }

        Ok(Self {
            state: Mutex::new(StoreState {
                entries: Vec::with_capacity(capacity),
                sealed: false,
                overflowed: 0,
            }),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn insert(&self, scored: ScoredItem) -> MonitorResult<Admission> {
        let mut state = self.lock()?;
        Ok(self.insert_locked(&mut state, scored))
    }

    /// Insert a whole batch inside one exclusive section
    ///
    /// Admissions are returned in batch order.
    pub fn insert_batch(&self, batch: Vec<ScoredItem>) -> MonitorResult<Vec<Admission>> {
        let mut state = self.lock()?;
        Ok(batch
            .into_iter()
            .map(|scored| self.insert_locked(&mut state, scored))
            .collect())
    }

    fn insert_locked(&self, state: &mut StoreState, scored: ScoredItem) -> Admission {
        if state.sealed {
            log::warn!(
                "Result for '{}' arrived after the store was drained",
                scored.item().name()
            );
            return Admission::Sealed;
        }

        if state.entries.len() >= self.capacity {
            state.overflowed += 1;
            log::debug!(
                "Result store full ({}); dropping '{}'",
                self.capacity,
                scored.item().name()
            );
            return Admission::Overflow;
        }

        // Upper bound: after every entry with an equal score
        let rank = state
            .entries
            .partition_point(|entry| entry.score() <= scored.score());
        state.entries.insert(rank, scored);
        Admission::Stored { rank }
    }

    /// Take the ordered contents and seal the store
    ///
    /// Inserts after this point return [`Admission::Sealed`]. A second
    /// drain is an error.
    pub fn drain(&self) -> MonitorResult<Vec<ScoredItem>> {
        let mut state = self.lock()?;
        if state.sealed {
            return Err(MonitorError::AlreadyDrained);
        }
        state.sealed = true;
        Ok(std::mem::take(&mut state.entries))
    }

    /// Copy of the ordered contents without sealing
    pub fn snapshot(&self) -> MonitorResult<Vec<ScoredItem>> {
        Ok(self.lock()?.entries.clone())
    }

    pub fn len(&self) -> MonitorResult<usize> {
        Ok(self.lock()?.entries.len())
    }

    pub fn is_empty(&self) -> MonitorResult<bool> {
        Ok(self.lock()?.entries.is_empty())
    }

    /// Number of inserts dropped because the store was full
    pub fn overflow_count(&self) -> MonitorResult<usize> {
        Ok(self.lock()?.overflowed)
    }

    pub fn is_sealed(&self) -> MonitorResult<bool> {
        Ok(self.lock()?.sealed)
    }

    fn lock(&self) -> MonitorResult<MutexGuard<'_, StoreState>> {
        handle_mutex_poison(self.state.lock(), |message| MonitorError::Poisoned {
            message,
        })
    }
}
