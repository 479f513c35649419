//! Bounded blocking buffer between the dispatcher and the workers
//!
//! All state lives behind one mutex. Producers wait on `not_full`,
//! consumers on `not_empty`; closing input wakes both sides.

use crate::core::sync::handle_mutex_poison;
use crate::monitor::error::{MonitorError, MonitorResult};
use crate::scoring::Item;
use std::sync::{Condvar, Mutex, MutexGuard};

#[derive(Debug)]
struct BufferState {
    /// Occupied slots; the most recently put item is last
    slots: Vec<Item>,
    /// Set once by `close_input`, never cleared
    input_closed: bool,
    /// Highest occupancy observed so far
    high_water: usize,
}

/// Fixed-capacity blocking stack of [`Item`]s
///
/// `take` pops the most recently put item (LIFO), not the oldest one.
#[derive(Debug)]
pub struct BoundedQueue {
    state: Mutex<BufferState>,
    not_full: Condvar,
    not_empty: Condvar,
    capacity: usize,
}

impl BoundedQueue {
    pub fn new(capacity: usize) -> MonitorResult<Self> {
        if capacity == 0 {
            return Err(MonitorError::ZeroCapacity {
                monitor: "bounded queue",
            });
        }

        Ok(Self {
            state: Mutex::new(BufferState {
                slots: Vec::with_capacity(capacity),
                input_closed: false,
                high_water: 0,
            }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Put an item, blocking while the buffer is full
    ///
    /// Returns the occupancy right after the put. There is no timeout:
    /// a slow worker pool holds the producer here.
    pub fn put(&self, item: Item) -> MonitorResult<usize> {
        let guard = self.lock()?;
        let mut state = handle_mutex_poison(
            self.not_full.wait_while(guard, |s| {
                !s.input_closed && s.slots.len() >= self.capacity
            }),
            poisoned,
        )?;

        if state.input_closed {
            return Err(MonitorError::InputClosed);
        }

        state.slots.push(item);
        let occupied = state.slots.len();
        state.high_water = state.high_water.max(occupied);
        drop(state);

        self.not_empty.notify_one();
        log::trace!("Buffer holds {}/{} after put", occupied, self.capacity);
        Ok(occupied)
    }

    /// Take the most recently put item, blocking while the buffer is empty
    /// and input is still open
    ///
    /// `None` means input is closed and nothing is left; it is terminal.
    pub fn take(&self) -> MonitorResult<Option<Item>> {
        let guard = self.lock()?;
        let mut state = handle_mutex_poison(
            self.not_empty
                .wait_while(guard, |s| s.slots.is_empty() && !s.input_closed),
            poisoned,
        )?;

        let item = state.slots.pop();
        let occupied = state.slots.len();
        drop(state);

        if item.is_some() {
            self.not_full.notify_one();
            log::trace!("Buffer holds {}/{} after take", occupied, self.capacity);
        }
        Ok(item)
    }

    /// Signal that no more items will be put and wake every waiter
    pub fn close_input(&self) -> MonitorResult<()> {
        let mut state = self.lock()?;
        state.input_closed = true;
        drop(state);

        self.not_empty.notify_all();
        self.not_full.notify_all();
        log::debug!("Buffer input closed");
        Ok(())
    }

    pub fn is_input_closed(&self) -> MonitorResult<bool> {
        Ok(self.lock()?.input_closed)
    }

    /// Current number of occupied slots
    pub fn len(&self) -> MonitorResult<usize> {
        Ok(self.lock()?.slots.len())
    }

    pub fn is_empty(&self) -> MonitorResult<bool> {
        Ok(self.lock()?.slots.is_empty())
    }

    /// Highest occupancy reached since construction
    pub fn high_water_mark(&self) -> MonitorResult<usize> {
        Ok(self.lock()?.high_water)
    }

    fn lock(&self) -> MonitorResult<MutexGuard<'_, BufferState>> {
        handle_mutex_poison(self.state.lock(), poisoned)
    }
}

fn poisoned(message: String) -> MonitorError {
    MonitorError::Poisoned { message }
}
