//! Vector construction parameters.

use crate::memory::System;

/// Initial capacity used by [`VectorConfig::default`].
pub const DEFAULT_CAPACITY: usize = 8;

/// Configuration for a [`Vector`](crate::Vector).
///
/// The element size is carried by the vector's type parameter, so only the
/// initial capacity and the memory strategy are configurable. Both are
/// consumed at construction.
#[derive(Clone, Debug)]
pub struct VectorConfig<M = System> {
    /// Number of elements to reserve up front.
    ///
    /// Default: 8.
    pub capacity: usize,

    /// Memory strategy the vector allocates its buffer with.
    ///
    /// Default: [`System`].
    pub memory: M,
}

impl VectorConfig<System> {
    /// Create a config for the given capacity using the system allocator.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            memory: System,
        }
    }
}

impl<M> VectorConfig<M> {
    /// Replace the memory strategy, keeping the capacity.
    pub fn with_memory<N>(self, memory: N) -> VectorConfig<N> {
        VectorConfig {
            capacity: self.capacity,
            memory,
        }
    }

    /// Replace the initial capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Default for VectorConfig<System> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
