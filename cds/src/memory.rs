//! Pluggable memory strategies.
//!
//! A [`MemoryStrategy`] bundles the allocate/reallocate/deallocate triple a
//! [`Vector`](crate::Vector) uses for its element buffer. The vector copies
//! the strategy in at construction and validates it before the first
//! allocation.

use std::alloc::{self, Layout};
use std::fmt;
use std::ptr::NonNull;

/// Source of raw memory for vector buffers.
///
/// # Safety
///
/// Implementors must behave like [`std::alloc::GlobalAlloc`]:
/// - `allocate` returns either `None` or a block valid for `layout`. It is
///   safe to call, so it must cope with zero-sized layouts; the provided
///   strategies return `None` for them.
/// - `reallocate` returns either `None`, leaving the old block untouched and
///   still owned by the caller, or a block valid for `new_size` bytes at the
///   same alignment whose prefix holds the old contents.
/// - `deallocate` releases a block previously returned by this strategy.
///
/// The vector never requests zero-sized blocks.
pub unsafe trait MemoryStrategy {
    /// Allocates a block described by `layout`.
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// Moves the block at `ptr` to a block of `new_size` bytes.
    ///
    /// # Safety
    ///
    /// `ptr` must come from this strategy and `layout` must be the layout it
    /// was allocated with. `new_size` must be non-zero and must not overflow
    /// `isize` once rounded up to `layout.align()`.
    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        layout: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>>;

    /// Releases the block at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must come from this strategy and `layout` must be the layout it
    /// was allocated with.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Whether the strategy can serve all three operations.
    fn is_valid(&self) -> bool {
        true
    }
}

/// Returns `true` iff `strategy` provides allocate, reallocate and deallocate.
#[must_use]
pub fn validate<S: MemoryStrategy + ?Sized>(strategy: &S) -> bool {
    strategy.is_valid()
}

/// The process allocator, as exposed by [`std::alloc`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct System;

unsafe impl MemoryStrategy for System {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        if layout.size() == 0 {
            return None;
        }
        // Safe: `layout` has a non-zero size
        NonNull::new(unsafe { alloc::alloc(layout) })
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        layout: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        NonNull::new(alloc::realloc(ptr.as_ptr(), layout, new_size))
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        alloc::dealloc(ptr.as_ptr(), layout);
    }
}

/// Allocation hook: returns null on failure.
pub type AllocateFn = unsafe fn(Layout) -> *mut u8;
/// Reallocation hook: returns null on failure and leaves the old block alone.
pub type ReallocateFn = unsafe fn(*mut u8, Layout, usize) -> *mut u8;
/// Deallocation hook.
pub type DeallocateFn = unsafe fn(*mut u8, Layout);

/// A memory strategy assembled from three plain function hooks.
///
/// Any hook may be missing; such a value is kept around as a description
/// only and is rejected by every vector constructor. `Default` yields the
/// empty (invalid) triple.
#[derive(Clone, Copy, Default)]
pub struct MemoryHooks {
    allocate: Option<AllocateFn>,
    reallocate: Option<ReallocateFn>,
    deallocate: Option<DeallocateFn>,
}

impl MemoryHooks {
    /// Hooks backed by [`std::alloc`].
    #[must_use]
    pub fn system() -> Self {
        Self {
            allocate: Some(alloc::alloc),
            reallocate: Some(alloc::realloc),
            deallocate: Some(alloc::dealloc),
        }
    }

    /// Assembles a strategy from individual hooks.
    ///
    /// # Safety
    ///
    /// Every present hook must honour the [`MemoryStrategy`] contract,
    /// with null standing for failure.
    #[must_use]
    pub unsafe fn from_parts(
        allocate: Option<AllocateFn>,
        reallocate: Option<ReallocateFn>,
        deallocate: Option<DeallocateFn>,
    ) -> Self {
        Self {
            allocate,
            reallocate,
            deallocate,
        }
    }

    /// True iff all three hooks are present.
    #[must_use]
    pub fn validate(&self) -> bool {
        self.allocate.is_some() && self.reallocate.is_some() && self.deallocate.is_some()
    }
}

impl fmt::Debug for MemoryHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryHooks")
            .field("allocate", &self.allocate.is_some())
            .field("reallocate", &self.reallocate.is_some())
            .field("deallocate", &self.deallocate.is_some())
            .finish()
    }
}

unsafe impl MemoryStrategy for MemoryHooks {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        if layout.size() == 0 {
            return None;
        }
        let allocate = self.allocate?;
        // Safe: `from_parts` made the caller vouch for the hook, and `layout`
        // has a non-zero size
        NonNull::new(unsafe { allocate(layout) })
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        layout: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        let reallocate = self.reallocate?;
        NonNull::new(reallocate(ptr.as_ptr(), layout, new_size))
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        if let Some(deallocate) = self.deallocate {
            deallocate(ptr.as_ptr(), layout);
        }
    }

    fn is_valid(&self) -> bool {
        self.validate()
    }
}

unsafe impl<S: MemoryStrategy + ?Sized> MemoryStrategy for &S {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        (**self).allocate(layout)
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        layout: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        (**self).reallocate(ptr, layout, new_size)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        (**self).deallocate(ptr, layout);
    }

    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }
}
