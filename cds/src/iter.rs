use std::fmt;
use std::marker::PhantomData;

use crate::core::Vector;
use crate::generation::Snapshot;
use crate::memory::{MemoryStrategy, System};

/// Capability set of an iterator over some backing structure.
///
/// Each method is one optional hook. The provided defaults describe a hook
/// that is not configured: validity and stepping report `false`/`None`,
/// `similar` is `false` and `distance` is 0. Teardown is `Drop`.
///
/// The backing structure is not stored in the cursor; it is lent to every
/// call, and the cursor decides whether it still matches.
pub trait Cursor {
    /// The structure the cursor walks.
    type Source: ?Sized;
    /// What a step yields.
    type Item;

    /// Whether the cursor's view of `source` is still trustworthy.
    fn is_valid(&self, _source: &Self::Source) -> bool {
        false
    }

    fn has_next(&self, _source: &Self::Source) -> bool {
        false
    }

    fn next(&mut self, _source: &Self::Source) -> Option<Self::Item> {
        None
    }

    fn has_back(&self, _source: &Self::Source) -> bool {
        false
    }

    fn back(&mut self, _source: &Self::Source) -> Option<Self::Item> {
        None
    }

    /// Position equality, used to detect "reached end" in range walks.
    fn similar(&self, _other: &Self) -> bool {
        false
    }

    fn distance(&self, _other: &Self) -> usize {
        0
    }
}

/// A generic iterator object driven by a [`Cursor`].
///
/// `Iter` owns its cursor (the position record) and never owns the backing
/// structure. Every operation delegates to the matching hook.
///
/// Passing a different structure than the one the cursor was created from
/// is allowed; cursors that track identity (such as [`VectorCursor`])
/// report themselves invalid in that case.
#[derive(Clone, Debug)]
pub struct Iter<C> {
    cursor: C,
}

#[allow(clippy::should_implement_trait)]
impl<C: Cursor> Iter<C> {
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// The position record, readable regardless of validity.
    #[must_use]
    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    #[must_use]
    pub fn is_valid(&self, source: &C::Source) -> bool {
        self.cursor.is_valid(source)
    }

    #[must_use]
    pub fn has_next(&self, source: &C::Source) -> bool {
        self.cursor.has_next(source)
    }

    /// Yields the next item and advances, or `None` when exhausted or stale.
    pub fn next(&mut self, source: &C::Source) -> Option<C::Item> {
        self.cursor.next(source)
    }

    #[must_use]
    pub fn has_back(&self, source: &C::Source) -> bool {
        self.cursor.has_back(source)
    }

    /// Steps back and yields the item stepped onto.
    pub fn back(&mut self, source: &C::Source) -> Option<C::Item> {
        self.cursor.back(source)
    }

    #[must_use]
    pub fn similar(&self, other: &Self) -> bool {
        self.cursor.similar(&other.cursor)
    }

    #[must_use]
    pub fn distance(&self, other: &Self) -> usize {
        self.cursor.distance(&other.cursor)
    }

    /// Releases the position record. The backing structure is untouched.
    pub fn destroy(self) {}

    /// Adapts the iterator into a std [`Iterator`] over `source`.
    ///
    /// The walk stops at the first step where `has_next` is false, which
    /// includes the cursor going stale.
    pub fn walk<'i, 's>(&'i mut self, source: &'s C::Source) -> Walk<'i, 's, C> {
        Walk { iter: self, source }
    }
}

/// Std iterator adapter returned by [`Iter::walk`].
pub struct Walk<'i, 's, C: Cursor> {
    iter: &'i mut Iter<C>,
    source: &'s C::Source,
}

impl<C: Cursor> Iterator for Walk<'_, '_, C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.iter.has_next(self.source) {
            return None;
        }
        self.iter.next(self.source)
    }
}

/// Position record of a [`Vector`] iterator.
///
/// Holds an index in `[0, len]` and the vector's generation at the time the
/// cursor was created. Reverse cursors swap the forward and backward hooks.
pub struct VectorCursor<T, M = System> {
    position: usize,
    snapshot: Snapshot,
    reverse: bool,
    _marker: PhantomData<fn() -> (T, M)>,
}

impl<T: Copy, M: MemoryStrategy> VectorCursor<T, M> {
    pub(crate) fn new(vector: &Vector<T, M>, position: usize, reverse: bool) -> Self {
        Self {
            position,
            snapshot: vector.generation_ref().snapshot(),
            reverse,
            _marker: PhantomData,
        }
    }

    /// Current index into the vector.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Vector generation captured when the cursor was created.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.snapshot.stamp()
    }

    #[must_use]
    pub fn is_reverse(&self) -> bool {
        self.reverse
    }

    fn forward_ready(&self, vector: &Vector<T, M>) -> bool {
        self.is_valid(vector) && self.position < vector.len()
    }

    fn backward_ready(&self, vector: &Vector<T, M>) -> bool {
        self.is_valid(vector) && self.position > 0
    }

    fn advance(&mut self, vector: &Vector<T, M>) -> Option<T> {
        if !self.forward_ready(vector) {
            return None;
        }
        let value = vector.get(self.position).copied();
        self.position += 1;
        value
    }

    fn retreat(&mut self, vector: &Vector<T, M>) -> Option<T> {
        if !self.backward_ready(vector) {
            return None;
        }
        self.position -= 1;
        vector.get(self.position).copied()
    }
}

impl<T: Copy, M: MemoryStrategy> Cursor for VectorCursor<T, M> {
    type Source = Vector<T, M>;
    type Item = T;

    fn is_valid(&self, vector: &Vector<T, M>) -> bool {
        self.snapshot.is_current(vector.generation_ref())
    }

    fn has_next(&self, vector: &Vector<T, M>) -> bool {
        if self.reverse {
            self.backward_ready(vector)
        } else {
            self.forward_ready(vector)
        }
    }

    fn next(&mut self, vector: &Vector<T, M>) -> Option<T> {
        if self.reverse {
            self.retreat(vector)
        } else {
            self.advance(vector)
        }
    }

    fn has_back(&self, vector: &Vector<T, M>) -> bool {
        if self.reverse {
            self.forward_ready(vector)
        } else {
            self.backward_ready(vector)
        }
    }

    fn back(&mut self, vector: &Vector<T, M>) -> Option<T> {
        if self.reverse {
            self.advance(vector)
        } else {
            self.retreat(vector)
        }
    }

    fn similar(&self, other: &Self) -> bool {
        self.position == other.position
    }

    fn distance(&self, other: &Self) -> usize {
        self.position.abs_diff(other.position)
    }
}

impl<T, M> Clone for VectorCursor<T, M> {
    fn clone(&self) -> Self {
        Self {
            position: self.position,
            snapshot: self.snapshot.clone(),
            reverse: self.reverse,
            _marker: PhantomData,
        }
    }
}

impl<T, M> fmt::Debug for VectorCursor<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorCursor")
            .field("position", &self.position)
            .field("generation", &self.snapshot.stamp())
            .field("reverse", &self.reverse)
            .finish()
    }
}

/// Borrowing iterator over the elements of a `Vector`
///
/// This iterator implements `Clone` and walks from either end.
#[derive(Clone, Debug)]
pub struct VectorIter<'a, T> {
    elements: std::slice::Iter<'a, T>,
}

impl<'a, T> VectorIter<'a, T> {
    pub(crate) fn new(elements: &'a [T]) -> Self {
        Self {
            elements: elements.iter(),
        }
    }
}

impl<'a, T> Iterator for VectorIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<T> DoubleEndedIterator for VectorIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.elements.next_back()
    }
}

impl<T> ExactSizeIterator for VectorIter<'_, T> {}

impl<'a, T: Copy, M: MemoryStrategy> IntoIterator for &'a Vector<T, M> {
    type Item = &'a T;
    type IntoIter = VectorIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        VectorIter::new(self.as_slice())
    }
}

/// Reverse borrowing iterator over the elements of a `Vector`
#[derive(Clone, Debug)]
pub struct VectorRevIter<'a, T> {
    elements: std::iter::Rev<std::slice::Iter<'a, T>>,
}

impl<'a, T> VectorRevIter<'a, T> {
    pub(crate) fn new(elements: &'a [T]) -> Self {
        Self {
            elements: elements.iter().rev(),
        }
    }
}

impl<'a, T> Iterator for VectorRevIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<T> ExactSizeIterator for VectorRevIter<'_, T> {}
