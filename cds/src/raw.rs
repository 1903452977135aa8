//! Raw element storage.
//!
//! [`RawBuf`] owns a block of exactly `capacity * size_of::<T>()` bytes
//! obtained from a [`MemoryStrategy`]. It knows nothing about which slots
//! are initialised; that bookkeeping belongs to the vector.

use std::alloc::Layout;
use std::mem;
use std::ptr::NonNull;

use crate::error::VectorError;
use crate::memory::MemoryStrategy;

pub(crate) struct RawBuf<T, M: MemoryStrategy> {
    ptr: NonNull<T>,
    capacity: usize,
    memory: M,
}

// Safe: the buffer is uniquely owned, like the block behind a `Box<[T]>`
unsafe impl<T: Send, M: MemoryStrategy + Send> Send for RawBuf<T, M> {}
unsafe impl<T: Sync, M: MemoryStrategy + Sync> Sync for RawBuf<T, M> {}

impl<T, M: MemoryStrategy> RawBuf<T, M> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Validates `memory` and allocates room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// - `VectorError::InvalidStrategy` if a memory hook is missing
    /// - `VectorError::CapacityOverflow` if the byte size does not fit in `isize`
    /// - `VectorError::AllocationFailed` if the strategy refuses the block
    pub(crate) fn with_capacity(capacity: usize, memory: M) -> Result<Self, VectorError> {
        if !memory.is_valid() {
            tracing::debug!("rejecting memory strategy with missing hooks");
            return Err(VectorError::InvalidStrategy);
        }

        let mut buf = Self::empty(memory);
        buf.resize_to(capacity)?;
        Ok(buf)
    }

    /// An unallocated buffer. Skips validation, so only for strategies that
    /// are always valid.
    pub(crate) fn empty(memory: M) -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            memory,
        }
    }

    fn layout(capacity: usize) -> Result<Layout, VectorError> {
        Layout::array::<T>(capacity).map_err(|_| VectorError::CapacityOverflow {
            requested: capacity,
        })
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    pub(crate) fn memory(&self) -> &M {
        &self.memory
    }

    /// Moves the storage to a block of exactly `capacity` elements.
    ///
    /// The first `min(old, new)` slots keep their bytes. On error nothing
    /// changes: the old block stays in place with its old capacity.
    pub(crate) fn resize_to(&mut self, capacity: usize) -> Result<(), VectorError> {
        if capacity == self.capacity {
            return Ok(());
        }
        if Self::IS_ZST {
            self.capacity = capacity;
            return Ok(());
        }

        let new_layout = Self::layout(capacity)?;

        if self.capacity == 0 {
            let ptr = self
                .memory
                .allocate(new_layout)
                .ok_or(VectorError::AllocationFailed {
                    requested: new_layout.size(),
                })?;
            self.ptr = ptr.cast();
            self.capacity = capacity;
            return Ok(());
        }

        let old_layout = Self::layout(self.capacity)?;

        if capacity == 0 {
            // Safe: `ptr` was produced by `memory` with `old_layout`
            unsafe {
                self.memory.deallocate(self.ptr.cast(), old_layout);
            }
            self.ptr = NonNull::dangling();
            self.capacity = 0;
            return Ok(());
        }

        // Safe: `ptr` was produced by `memory` with `old_layout`, and
        // `new_layout` was checked by `Layout::array`
        let moved = unsafe {
            self.memory
                .reallocate(self.ptr.cast(), old_layout, new_layout.size())
        };
        let ptr = moved.ok_or(VectorError::AllocationFailed {
            requested: new_layout.size(),
        })?;
        self.ptr = ptr.cast();
        self.capacity = capacity;
        Ok(())
    }
}

impl<T, M: MemoryStrategy> Drop for RawBuf<T, M> {
    fn drop(&mut self) {
        if Self::IS_ZST || self.capacity == 0 {
            return;
        }
        if let Ok(layout) = Self::layout(self.capacity) {
            // Safe: `ptr` was produced by `memory` with this layout
            unsafe {
                self.memory.deallocate(self.ptr.cast(), layout);
            }
        }
    }
}
