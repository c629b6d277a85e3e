//! Forward cursors: the traversal capability filters are built on.
//!
//! A [`Cursor`] is an opaque position in a fixed sequence. It can be
//! dereferenced, stepped forward by one, and compared for equality with
//! another cursor over the *same* sequence. A half-open range is a pair of
//! cursors `[first, last)`; `last` is the sentinel and is never dereferenced.
//!
//! Cursors over borrowed data hold a shared borrow, so the underlying sequence
//! cannot be mutated while any cursor into it is alive.

use std::fmt;

/// Forward-iteration position over a sequence.
///
/// Two cursors are equal iff they denote the same position of the same
/// sequence. Comparing cursors from different sequences is meaningless.
pub trait Cursor: Clone + PartialEq {
    /// Element produced by dereferencing.
    type Item;

    /// Element at the current position.
    ///
    /// # Panics
    /// Implementations panic when called at the end position.
    fn get(&self) -> Self::Item;

    /// Move to the next position.
    ///
    /// # Panics
    /// Implementations may panic when called at the end position.
    fn advance(&mut self);
}

// -----------------------------------------------------------------------------
// Slice cursors
// -----------------------------------------------------------------------------

/// Cursor into a borrowed slice, yielding `&T`.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Cursor at the first element of `slice`.
    #[inline]
    pub fn begin(slice: &'a [T]) -> Self {
        Self { slice, pos: 0 }
    }

    /// Sentinel cursor one past the last element of `slice`.
    #[inline]
    pub fn end(slice: &'a [T]) -> Self {
        Self {
            slice,
            pos: slice.len(),
        }
    }

    /// Offset of this cursor from the start of the slice.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }
}

/// `[begin, end)` cursors spanning the whole of `slice`.
#[inline]
pub fn slice_cursors<T>(slice: &[T]) -> (SliceCursor<'_, T>, SliceCursor<'_, T>) {
    (SliceCursor::begin(slice), SliceCursor::end(slice))
}

impl<T> Clone for SliceCursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.slice, other.slice) && self.pos == other.pos
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("pos", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn get(&self) -> &'a T {
        match self.slice.get(self.pos) {
            Some(item) => item,
            None => panic!(
                "SliceCursor::get at end position {} of a {}-element slice",
                self.pos,
                self.slice.len()
            ),
        }
    }

    #[inline]
    fn advance(&mut self) {
        assert!(
            self.pos < self.slice.len(),
            "SliceCursor::advance past the end of a {}-element slice",
            self.slice.len()
        );
        self.pos += 1;
    }
}

// -----------------------------------------------------------------------------
// Ranges
// -----------------------------------------------------------------------------

/// A `[first, last)` cursor pair walked as an [`Iterator`].
///
/// Each call to `next` dereferences `first` and steps it once; iteration stops
/// as soon as `first == last`.
#[derive(Clone, Debug)]
pub struct CursorRange<C> {
    first: C,
    last: C,
}

impl<C: Cursor> CursorRange<C> {
    #[inline]
    pub fn new(first: C, last: C) -> Self {
        Self { first, last }
    }

    /// `true` once the range has been fully consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first == self.last
    }

    /// Split back into the current `(first, last)` pair.
    #[inline]
    pub fn into_bounds(self) -> (C, C) {
        (self.first, self.last)
    }
}

impl<C: Cursor> Iterator for CursorRange<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        if self.first == self.last {
            return None;
        }
        let item = self.first.get();
        self.first.advance();
        Some(item)
    }
}

impl<C: Cursor> std::iter::FusedIterator for CursorRange<C> {}

/// Walk `[first, last)` and call `f` on each element.
pub fn for_each_in<C, F>(mut first: C, last: C, mut f: F)
where
    C: Cursor,
    F: FnMut(C::Item),
{
    while first != last {
        f(first.get());
        first.advance();
    }
}
