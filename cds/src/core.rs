use std::fmt;
use std::mem;
use std::ptr;

use crate::config::VectorConfig;
use crate::error::VectorError;
use crate::generation::Generation;
use crate::iter::{Iter, VectorCursor, VectorIter, VectorRevIter};
use crate::memory::{MemoryStrategy, System};
use crate::raw::RawBuf;

/// Capacity a full vector grows to when it is small or was never allocated.
pub const MIN_GROW_CAPACITY: usize = 8;
/// Removal shrinks the buffer once `capacity / len` reaches this ratio.
pub const SHRINK_RATIO: usize = 4;

/// A resizable array of plain-old-data elements with generation-checked
/// iterators and a pluggable memory strategy.
pub struct Vector<T: Copy, M: MemoryStrategy = System> {
    buf: RawBuf<T, M>,
    len: usize,
    generation: Generation,
}

impl<T: Copy> Vector<T, System> {
    /// Creates an empty vector without allocating a buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: RawBuf::empty(System),
            len: 0,
            generation: Generation::new(),
        }
    }

    /// Creates an empty vector with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::AllocationFailed` or `VectorError::CapacityOverflow`
    /// if the buffer cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, VectorError> {
        Self::with_capacity_in(capacity, System)
    }
}

impl<T: Copy> Default for Vector<T, System> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, M: MemoryStrategy> Vector<T, M> {
    /// Creates an empty vector with room for `capacity` elements, allocated
    /// through `memory`.
    ///
    /// # Errors
    ///
    /// - `VectorError::InvalidStrategy` if `memory` is missing a hook
    /// - `VectorError::AllocationFailed` if the initial buffer cannot be allocated
    /// - `VectorError::CapacityOverflow` if `capacity` elements cannot be addressed
    pub fn with_capacity_in(capacity: usize, memory: M) -> Result<Self, VectorError> {
        Ok(Self {
            buf: RawBuf::with_capacity(capacity, memory)?,
            len: 0,
            generation: Generation::new(),
        })
    }

    /// Creates an empty vector from a [`VectorConfig`].
    ///
    /// # Errors
    ///
    /// Same as [`Vector::with_capacity_in`].
    pub fn from_config(config: VectorConfig<M>) -> Result<Self, VectorError> {
        Self::with_capacity_in(config.capacity, config.memory)
    }

    /// Copies this vector into a new, independent buffer from `memory`.
    ///
    /// The copy has the same capacity and contents and a fresh generation.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::with_capacity_in`].
    pub fn copy_in<N: MemoryStrategy>(&self, memory: N) -> Result<Vector<T, N>, VectorError> {
        let mut other = Vector::with_capacity_in(self.capacity(), memory)?;
        // Safe: `other` has room for `capacity >= len` elements and the
        // buffers are distinct allocations
        unsafe {
            ptr::copy_nonoverlapping(self.buf.ptr(), other.buf.ptr(), self.len);
        }
        other.len = self.len;
        Ok(other)
    }

    /// Copies this vector using a clone of its own memory strategy.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::with_capacity_in`].
    pub fn try_clone(&self) -> Result<Self, VectorError>
    where
        M: Clone,
    {
        self.copy_in(self.memory().clone())
    }

    /// Copies the half-open range `[begin, end)` into a new vector.
    ///
    /// A `begin` that is not valid for this vector is replaced by
    /// [`Vector::begin`], an invalid `end` by [`Vector::end`]. Elements are
    /// taken with `begin`'s `next` hook until it is exhausted or its position
    /// is similar to `end`. The caller's iterators are not advanced.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::with_capacity_in`] and [`Vector::push_back`].
    pub fn slice(
        &self,
        begin: &Iter<VectorCursor<T, M>>,
        end: &Iter<VectorCursor<T, M>>,
    ) -> Result<Self, VectorError>
    where
        M: Clone,
    {
        self.slice_in(begin, end, self.memory().clone())
    }

    /// Like [`Vector::slice`], allocating the result through `memory`.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::with_capacity_in`] and [`Vector::push_back`].
    pub fn slice_in<N: MemoryStrategy>(
        &self,
        begin: &Iter<VectorCursor<T, M>>,
        end: &Iter<VectorCursor<T, M>>,
        memory: N,
    ) -> Result<Vector<T, N>, VectorError> {
        let mut cursor = if begin.is_valid(self) {
            begin.clone()
        } else {
            self.begin()
        };
        let end = if end.is_valid(self) {
            end.clone()
        } else {
            self.end()
        };

        let mut out = Vector::with_capacity_in(cursor.distance(&end), memory)?;
        while !cursor.similar(&end) {
            match cursor.next(self) {
                Some(value) => out.push_back(value)?,
                None => break,
            }
        }
        Ok(out)
    }

    /// Releases the buffer and the vector. Equivalent to dropping it.
    pub fn destroy(self) {}

    /// Size of one element in bytes.
    #[must_use]
    pub fn element_size(&self) -> usize {
        mem::size_of::<T>()
    }

    /// Number of structural mutations applied so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.current()
    }

    pub(crate) fn generation_ref(&self) -> &Generation {
        &self.generation
    }

    #[must_use]
    pub fn memory(&self) -> &M {
        self.buf.memory()
    }

    // Element access

    /// Copies out the element at `pos`.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::IndexOutOfBounds` if `pos >= len`.
    pub fn at(&self, pos: usize) -> Result<T, VectorError> {
        self.get(pos).copied().ok_or(VectorError::IndexOutOfBounds {
            index: pos,
            length: self.len,
        })
    }

    /// Copies out the first element.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::EmptyVector` if the vector is empty.
    pub fn front(&self) -> Result<T, VectorError> {
        self.as_slice().first().copied().ok_or(VectorError::EmptyVector)
    }

    /// Copies out the last element.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::EmptyVector` if the vector is empty.
    pub fn back(&self) -> Result<T, VectorError> {
        self.as_slice().last().copied().ok_or(VectorError::EmptyVector)
    }

    /// Returns a reference to the element at `pos`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, pos: usize) -> Option<&T> {
        self.as_slice().get(pos)
    }

    /// Returns a mutable reference to the element at `pos`.
    ///
    /// Overwriting an element in place is not a structural mutation and does
    /// not advance the generation.
    #[must_use]
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(pos)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // Safe: the first `len` slots are initialised and `ptr` is non-null
        // and aligned even when nothing is allocated
        unsafe { std::slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safe: see `as_slice`; `&mut self` makes the borrow unique
        unsafe { std::slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    // Iterators

    /// Forward iterator positioned at the first element.
    #[must_use]
    pub fn begin(&self) -> Iter<VectorCursor<T, M>> {
        Iter::new(VectorCursor::new(self, 0, false))
    }

    /// Reverse iterator positioned past the last element; `next` walks
    /// towards the front.
    #[must_use]
    pub fn rbegin(&self) -> Iter<VectorCursor<T, M>> {
        Iter::new(VectorCursor::new(self, self.len, true))
    }

    /// Forward iterator positioned past the last element.
    #[must_use]
    pub fn end(&self) -> Iter<VectorCursor<T, M>> {
        Iter::new(VectorCursor::new(self, self.len, false))
    }

    /// Reverse iterator positioned past the last element.
    #[must_use]
    pub fn rend(&self) -> Iter<VectorCursor<T, M>> {
        Iter::new(VectorCursor::new(self, self.len, true))
    }

    /// Returns a borrowing iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> VectorIter<'_, T> {
        self.into_iter()
    }

    /// Returns a borrowing iterator from the last element to the first.
    #[must_use]
    pub fn iter_rev(&self) -> VectorRevIter<'_, T> {
        VectorRevIter::new(self.as_slice())
    }

    // Capacity

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Grows the buffer to hold at least `capacity` elements.
    ///
    /// Never shrinks. Does not count as a structural mutation.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::AllocationFailed` or `VectorError::CapacityOverflow`
    /// if the buffer cannot grow; the vector is left unchanged.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), VectorError> {
        if capacity <= self.capacity() {
            return Ok(());
        }
        let from = self.capacity();
        self.buf.resize_to(capacity)?;
        tracing::trace!(from, to = capacity, "reserved vector capacity");
        Ok(())
    }

    /// Shrinks the buffer to exactly `len` elements.
    ///
    /// Best effort: if the memory strategy refuses, the larger buffer stays.
    pub fn shrink_to_fit(&mut self) {
        if self.len >= self.capacity() {
            return;
        }
        let from = self.capacity();
        match self.buf.resize_to(self.len) {
            Ok(()) => tracing::trace!(from, to = self.len, "shrunk vector to fit"),
            Err(err) => tracing::debug!(%err, from, "shrink to fit failed, keeping capacity"),
        }
    }

    // Modifiers

    /// Removes all elements. Capacity is kept.
    pub fn clear(&mut self) {
        self.len = 0;
        self.generation.bump();
    }

    /// Inserts `value` at `pos`, shifting `[pos, len)` one slot right.
    ///
    /// `pos` must name an existing element; appending goes through
    /// [`Vector::push_back`].
    ///
    /// # Errors
    ///
    /// - `VectorError::IndexOutOfBounds` if `pos >= len`
    /// - `VectorError::AllocationFailed` if the buffer cannot grow
    pub fn insert(&mut self, pos: usize, value: T) -> Result<(), VectorError> {
        self.check_bounds(pos)?;
        self.grow_for_one()?;

        // Safe: `pos < len < capacity`, so both ranges lie inside the buffer
        unsafe {
            let slot = self.buf.ptr().add(pos);
            ptr::copy(slot, slot.add(1), self.len - pos);
            slot.write(value);
        }
        self.len += 1;
        self.generation.bump();
        Ok(())
    }

    /// Removes the element at `pos`, shifting the tail one slot left, then
    /// applies the shrink policy.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::IndexOutOfBounds` if `pos >= len`.
    pub fn erase(&mut self, pos: usize) -> Result<(), VectorError> {
        self.check_bounds(pos)?;

        self.len -= 1;
        // Safe: `pos <= len` after the decrement and `[pos + 1, old len)`
        // lies inside the buffer
        unsafe {
            let slot = self.buf.ptr().add(pos);
            ptr::copy(slot.add(1), slot, self.len - pos);
        }
        self.generation.bump();
        self.shrink_after_remove();
        Ok(())
    }

    /// Appends `value`.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::AllocationFailed` if the buffer cannot grow; the
    /// vector is left unchanged.
    pub fn push_back(&mut self, value: T) -> Result<(), VectorError> {
        self.grow_for_one()?;

        // Safe: `grow_for_one` guarantees `len < capacity`
        unsafe {
            self.buf.ptr().add(self.len).write(value);
        }
        self.len += 1;
        self.generation.bump();
        Ok(())
    }

    /// Removes and returns the last element, then applies the shrink policy.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::EmptyVector` if the vector is empty.
    pub fn pop_back(&mut self) -> Result<T, VectorError> {
        let value = self.back()?;
        self.len -= 1;
        self.generation.bump();
        self.shrink_after_remove();
        Ok(value)
    }

    /// Appends every element of `values` in order.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::AllocationFailed` if the buffer cannot grow.
    /// Elements appended before the failure stay.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), VectorError> {
        for value in values {
            self.push_back(*value)?;
        }
        Ok(())
    }

    /// Changes the length to `count`.
    ///
    /// Growing reserves `count` first and fills new slots with `initializer`;
    /// shrinking drops elements from the tail, applying the shrink policy
    /// after each one as repeated [`Vector::erase`] calls would. Either way
    /// the generation advances once. Equal lengths are a no-op.
    ///
    /// # Errors
    ///
    /// - `VectorError::MissingInitializer` if growing without an initializer
    /// - `VectorError::AllocationFailed` if the buffer cannot grow; the vector
    ///   is left unchanged
    pub fn resize(&mut self, count: usize, initializer: Option<T>) -> Result<(), VectorError> {
        if count > self.len {
            let value = initializer.ok_or(VectorError::MissingInitializer)?;
            self.reserve(count)?;
            // Safe: `reserve` guarantees `count <= capacity`
            unsafe {
                let base = self.buf.ptr();
                for index in self.len..count {
                    base.add(index).write(value);
                }
            }
            self.len = count;
            self.generation.bump();
        } else if count < self.len {
            while self.len > count {
                self.len -= 1;
                self.shrink_after_remove();
            }
            self.generation.bump();
        }
        Ok(())
    }

    /// Exchanges the contents, capacities and memory strategies of two
    /// vectors in O(1).
    ///
    /// Both generations advance, so every outstanding iterator on either
    /// vector becomes invalid.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.buf, &mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
        self.generation.bump();
        other.generation.bump();
    }

    fn check_bounds(&self, pos: usize) -> Result<(), VectorError> {
        if pos >= self.len {
            Err(VectorError::IndexOutOfBounds {
                index: pos,
                length: self.len,
            })
        } else {
            Ok(())
        }
    }

    /// Makes room for one more element: a full buffer doubles, with a floor
    /// of [`MIN_GROW_CAPACITY`].
    fn grow_for_one(&mut self) -> Result<(), VectorError> {
        if self.len < self.capacity() {
            return Ok(());
        }
        let target = self
            .len
            .checked_mul(2)
            .ok_or(VectorError::CapacityOverflow {
                requested: self.len,
            })?
            .max(MIN_GROW_CAPACITY);
        let from = self.capacity();
        self.buf.resize_to(target)?;
        tracing::trace!(from, to = target, "grew vector");
        Ok(())
    }

    /// Halves the buffer once occupancy falls to a quarter or less. Failure
    /// keeps the larger buffer and is not reported.
    fn shrink_after_remove(&mut self) {
        if self.len == 0 || self.capacity() / self.len < SHRINK_RATIO {
            return;
        }
        let from = self.capacity();
        let target = from / 2;
        match self.buf.resize_to(target) {
            Ok(()) => tracing::trace!(from, to = target, "shrunk vector"),
            Err(err) => tracing::debug!(%err, from, "shrink after removal failed, keeping capacity"),
        }
    }
}

impl<T: Copy + fmt::Debug, M: MemoryStrategy> fmt::Debug for Vector<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, M, N> PartialEq<Vector<T, N>> for Vector<T, M>
where
    T: Copy + PartialEq,
    M: MemoryStrategy,
    N: MemoryStrategy,
{
    fn eq(&self, other: &Vector<T, N>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Copy + PartialEq, M: MemoryStrategy> PartialEq<[T]> for Vector<T, M> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Copy + PartialEq, M: MemoryStrategy, const N: usize> PartialEq<[T; N]> for Vector<T, M> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Copy + Eq, M: MemoryStrategy> Eq for Vector<T, M> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(values: &[i32]) -> Vector<i32> {
        let mut vector = Vector::new();
        vector.extend_from_slice(values).unwrap();
        vector
    }

    #[test]
    fn test_new_is_empty_without_buffer() {
        let vector: Vector<i32> = Vector::new();
        assert!(vector.is_empty());
        assert_eq!(vector.len(), 0);
        assert_eq!(vector.capacity(), 0);
        assert_eq!(vector.generation(), 0);
        assert_eq!(vector.element_size(), 4);
    }

    #[test]
    fn test_with_capacity_reserves() {
        let vector: Vector<u64> = Vector::with_capacity(12).unwrap();
        assert_eq!(vector.capacity(), 12);
        assert_eq!(vector.len(), 0);
    }

    #[test]
    fn test_growth_bootstraps_to_eight_then_doubles() {
        let mut vector = Vector::new();
        let mut seen = Vec::new();
        for i in 0..40 {
            vector.push_back(i).unwrap();
            if seen.last() != Some(&vector.capacity()) {
                seen.push(vector.capacity());
            }
        }
        assert_eq!(seen, vec![8, 16, 32, 64]);
    }

    #[test]
    fn test_growth_from_small_full_buffer_uses_floor() {
        let mut vector: Vector<i32> = Vector::with_capacity(2).unwrap();
        vector.push_back(1).unwrap();
        vector.push_back(2).unwrap();
        assert_eq!(vector.capacity(), 2);
        vector.push_back(3).unwrap();
        assert_eq!(vector.capacity(), 8);
    }

    #[test]
    fn test_shrink_policy_halves_at_quarter_occupancy() {
        let mut vector: Vector<i32> = Vector::with_capacity(16).unwrap();
        vector.extend_from_slice(&[1, 2, 3, 4, 5]).unwrap();
        vector.pop_back().unwrap(); // 4 of 16: ratio 4
        assert_eq!(vector.capacity(), 8);
        vector.pop_back().unwrap(); // 3 of 8: ratio 2
        assert_eq!(vector.capacity(), 8);
        vector.pop_back().unwrap(); // 2 of 8: ratio 4
        assert_eq!(vector.capacity(), 4);
        vector.pop_back().unwrap(); // 1 of 4: ratio 4
        assert_eq!(vector.capacity(), 2);
        vector.pop_back().unwrap(); // empty: no shrink
        assert_eq!(vector.capacity(), 2);
        assert!(vector.is_empty());
    }

    #[test]
    fn test_shrink_keeps_contents() {
        let mut vector: Vector<i32> = Vector::with_capacity(64).unwrap();
        vector.extend_from_slice(&[10, 20, 30, 40, 50]).unwrap();
        vector.erase(0).unwrap();
        assert_eq!(vector.capacity(), 32);
        assert_eq!(vector, [20, 30, 40, 50]);
    }

    #[test]
    fn test_insert_shifts_right() {
        let mut vector = filled(&[0, 2, 3]);
        vector.insert(1, 9).unwrap();
        assert_eq!(vector, [0, 9, 2, 3]);
        vector.insert(0, -1).unwrap();
        assert_eq!(vector, [-1, 0, 9, 2, 3]);
    }

    #[test]
    fn test_insert_at_end_is_rejected() {
        let mut vector = filled(&[1, 2]);
        assert_eq!(
            vector.insert(2, 3),
            Err(VectorError::IndexOutOfBounds {
                index: 2,
                length: 2
            })
        );
        let mut empty: Vector<i32> = Vector::new();
        assert!(empty.insert(0, 1).is_err());
        assert_eq!(empty.generation(), 0);
    }

    #[test]
    fn test_erase_shifts_left() {
        let mut vector = filled(&[0, 1, 2, 3]);
        vector.erase(1).unwrap();
        assert_eq!(vector, [0, 2, 3]);
        vector.erase(2).unwrap();
        assert_eq!(vector, [0, 2]);
        assert!(vector.erase(2).is_err());
    }

    #[test]
    fn test_each_mutation_bumps_generation_once() {
        let mut vector = filled(&[1, 2, 3, 4]);
        let mut expected = vector.generation();

        vector.push_back(5).unwrap();
        expected += 1;
        assert_eq!(vector.generation(), expected);

        vector.insert(0, 0).unwrap();
        expected += 1;
        assert_eq!(vector.generation(), expected);

        vector.erase(0).unwrap();
        expected += 1;
        assert_eq!(vector.generation(), expected);

        vector.pop_back().unwrap();
        expected += 1;
        assert_eq!(vector.generation(), expected);

        vector.resize(10, Some(7)).unwrap();
        expected += 1;
        assert_eq!(vector.generation(), expected);

        vector.resize(2, None).unwrap();
        expected += 1;
        assert_eq!(vector.generation(), expected);

        vector.clear();
        expected += 1;
        assert_eq!(vector.generation(), expected);
    }

    #[test]
    fn test_failed_operations_leave_generation() {
        let mut vector = filled(&[1]);
        let generation = vector.generation();
        assert!(vector.erase(5).is_err());
        assert!(vector.insert(1, 0).is_err());
        vector.resize(1, None).unwrap();
        vector.reserve(100).unwrap();
        vector.shrink_to_fit();
        assert_eq!(vector.generation(), generation);
    }

    #[test]
    fn test_resize_grow_and_shrink() {
        let mut vector = filled(&[1, 2]);
        vector.resize(5, Some(0)).unwrap();
        assert_eq!(vector, [1, 2, 0, 0, 0]);
        vector.resize(1, None).unwrap();
        assert_eq!(vector, [1]);
        assert_eq!(vector.resize(3, None), Err(VectorError::MissingInitializer));
        assert_eq!(vector, [1]);
    }

    #[test]
    fn test_resize_shrink_matches_repeated_erase() {
        let mut by_resize: Vector<i32> = Vector::with_capacity(64).unwrap();
        by_resize.extend_from_slice(&[0; 40]).unwrap();
        let mut by_erase = by_resize.try_clone().unwrap();

        by_resize.resize(3, None).unwrap();
        while by_erase.len() > 3 {
            by_erase.erase(by_erase.len() - 1).unwrap();
        }
        assert_eq!(by_resize.capacity(), by_erase.capacity());
        assert_eq!(by_resize, by_erase);
    }

    #[test]
    fn test_reserve_never_shrinks() {
        let mut vector: Vector<u8> = Vector::with_capacity(10).unwrap();
        vector.reserve(4).unwrap();
        assert_eq!(vector.capacity(), 10);
        vector.reserve(100).unwrap();
        assert_eq!(vector.capacity(), 100);
    }

    #[test]
    fn test_shrink_to_fit_empty_releases_buffer() {
        let mut vector: Vector<u8> = Vector::with_capacity(10).unwrap();
        vector.shrink_to_fit();
        assert_eq!(vector.capacity(), 0);
        vector.push_back(1).unwrap();
        assert_eq!(vector.capacity(), 8);
    }

    #[test]
    fn test_front_back_at() {
        let vector = filled(&[4, 5, 6]);
        assert_eq!(vector.front(), Ok(4));
        assert_eq!(vector.back(), Ok(6));
        assert_eq!(vector.at(1), Ok(5));
        assert_eq!(
            vector.at(3),
            Err(VectorError::IndexOutOfBounds {
                index: 3,
                length: 3
            })
        );

        let empty: Vector<i32> = Vector::new();
        assert_eq!(empty.front(), Err(VectorError::EmptyVector));
        assert_eq!(empty.back(), Err(VectorError::EmptyVector));
    }

    #[test]
    fn test_get_mut_does_not_bump_generation() {
        let mut vector = filled(&[1, 2, 3]);
        let generation = vector.generation();
        *vector.get_mut(1).unwrap() = 20;
        assert_eq!(vector, [1, 20, 3]);
        assert_eq!(vector.generation(), generation);
        assert!(vector.get_mut(3).is_none());
    }

    #[test]
    fn test_swap_exchanges_everything() {
        let mut a = filled(&[1, 2, 3]);
        let mut b: Vector<i32> = Vector::with_capacity(100).unwrap();
        b.push_back(9).unwrap();
        let (ga, gb) = (a.generation(), b.generation());

        a.swap(&mut b);

        assert_eq!(a, [9]);
        assert_eq!(a.capacity(), 100);
        assert_eq!(b, [1, 2, 3]);
        assert_eq!(b.capacity(), 8);
        assert_eq!(a.generation(), ga + 1);
        assert_eq!(b.generation(), gb + 1);
    }

    #[test]
    fn test_zero_sized_elements() {
        let mut vector: Vector<()> = Vector::new();
        for _ in 0..20 {
            vector.push_back(()).unwrap();
        }
        assert_eq!(vector.len(), 20);
        assert_eq!(vector.capacity(), 32);
        assert_eq!(vector.element_size(), 0);
        assert_eq!(vector.pop_back(), Ok(()));
    }

    #[test]
    fn test_debug_lists_elements() {
        let vector = filled(&[1, 2]);
        assert_eq!(format!("{vector:?}"), "[1, 2]");
    }
}
