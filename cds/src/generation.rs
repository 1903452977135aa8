//! Modification counters and the snapshots cursors take of them.
//!
//! A [`Generation`] is stamped on a vector and bumped by every structural
//! mutation. A [`Snapshot`] records the stamp at cursor creation together
//! with a weak, non-owning link back to the counter it came from. A snapshot
//! is current only while it points at the same counter and the stamps agree;
//! stamps only move forward, so a stale snapshot never becomes current
//! again.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

/// Monotonic modification counter owned by one container.
#[derive(Debug, Default)]
pub(crate) struct Generation {
    counter: Arc<AtomicU64>,
}

impl Generation {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn current(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }

    pub(crate) fn bump(&mut self) {
        self.counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            origin: Arc::downgrade(&self.counter),
            stamp: self.current(),
        }
    }
}

/// A generation stamp plus a weak reference to the counter that issued it.
#[derive(Clone, Debug)]
pub(crate) struct Snapshot {
    origin: Weak<AtomicU64>,
    stamp: u64,
}

impl Snapshot {
    pub(crate) fn stamp(&self) -> u64 {
        self.stamp
    }

    /// The weak link keeps the counter's allocation alive, so a pointer match
    /// cannot be a reused address.
    pub(crate) fn is_current(&self, generation: &Generation) -> bool {
        Weak::as_ptr(&self.origin) == Arc::as_ptr(&generation.counter)
            && self.stamp == generation.current()
    }
}
