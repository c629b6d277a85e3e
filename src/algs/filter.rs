//! Lazy filtering over a cursor range.
//!
//! [`FilterSequence`] wraps a `[first, last)` pair of underlying cursors and a
//! predicate, and is itself a [`Cursor`] over only the accepted elements. No
//! copy of the underlying data is made and no element is tested twice: the
//! filter walks the underlying range exactly once over a full traversal.
//!
//! # States
//! A filter is either **live** (its current position holds an accepted
//! element) or **exhausted** (its current position is the sentinel). Both
//! construction and [`advance`](FilterSequence::advance) establish this before
//! returning. Exhaustion is terminal.
//!
//! # Equality
//! Comparing two filter cursors is governed by [`EqualityMode`]:
//!
//! - [`EqualityMode::Positional`] (the default): equal iff both current
//!   positions are equal.
//! - [`EqualityMode::ExhaustedOnly`]: `a == b` iff `a`'s current position is
//!   `b`'s *sentinel*. This only answers "has `a` reached the end that `b`
//!   marks", and is not symmetric.
//!
//! The two modes agree when a live cursor is compared against an end cursor
//! built from `(last, last)`, which is how ranges are normally walked. They
//! disagree for any comparison against a non-end cursor: under
//! `ExhaustedOnly`, `while it != some_live_cursor` runs until `it` is
//! exhausted regardless of where `some_live_cursor` points.
//!
//! # Preconditions
//! Dereferencing or advancing an exhausted filter is a contract violation and
//! panics. The underlying sequence must not change while a filter over it is
//! alive, and the predicate must give the same answer every time it is asked
//! about the same element; neither is checked.

use std::fmt;

use crate::algs::cursor::{Cursor, CursorRange};
use crate::algs::predicates::Predicate;
use crate::mesh_error::MeshFilterError;

/// How two [`FilterSequence`] cursors are compared.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EqualityMode {
    /// Equal iff the current positions are equal.
    #[default]
    Positional,
    /// `a == b` iff `a`'s current position is `b`'s sentinel.
    ExhaustedOnly,
}

/// Cursor over the elements of `[first, last)` accepted by a predicate.
#[derive(Clone)]
pub struct FilterSequence<P, C> {
    predicate: P,
    current: C,
    sentinel: C,
    equality: EqualityMode,
}

impl<P, C> FilterSequence<P, C>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    /// Filter `[first, last)` by `predicate`, with positional equality.
    ///
    /// Skips ahead to the first accepted element, so the result may already be
    /// exhausted (empty range, or nothing accepted). That is not an error.
    pub fn new(predicate: P, first: C, last: C) -> Self {
        Self::with_equality(predicate, first, last, EqualityMode::default())
    }

    /// Like [`new`](Self::new) with an explicit [`EqualityMode`].
    pub fn with_equality(predicate: P, first: C, last: C, equality: EqualityMode) -> Self {
        let mut seq = Self {
            predicate,
            current: first,
            sentinel: last,
            equality,
        };
        seq.skip_rejected();
        if seq.is_exhausted() {
            log::trace!("FilterSequence: no accepted element in range");
        }
        seq
    }

    /// Step `current` forward until it is accepted or reaches the sentinel.
    #[inline]
    fn skip_rejected(&mut self) {
        while self.current != self.sentinel && !self.predicate.test(&self.current.get()) {
            self.current.advance();
        }
    }

    /// The accepted element at the current position.
    ///
    /// Calling this repeatedly without advancing yields the same element and
    /// does not re-evaluate the predicate.
    ///
    /// # Panics
    /// If the sequence is exhausted.
    #[inline]
    pub fn value_at(&self) -> C::Item {
        assert!(
            !self.is_exhausted(),
            "FilterSequence::value_at called on an exhausted sequence"
        );
        self.current.get()
    }

    /// Non-panicking [`value_at`](Self::value_at).
    #[inline]
    pub fn try_value_at(&self) -> Result<C::Item, MeshFilterError> {
        if self.is_exhausted() {
            Err(MeshFilterError::ExhaustedCursor)
        } else {
            Ok(self.current.get())
        }
    }

    /// Move to the next accepted element, or to the end.
    ///
    /// # Panics
    /// If the sequence is already exhausted.
    #[inline]
    pub fn advance(&mut self) {
        assert!(
            !self.is_exhausted(),
            "FilterSequence::advance called on an exhausted sequence"
        );
        self.current.advance();
        self.skip_rejected();
        if self.is_exhausted() {
            log::trace!("FilterSequence: exhausted");
        }
    }

    /// An exhausted filter sharing this one's sentinel and predicate.
    ///
    /// Suitable as the `last` half of a `[first, last)` pair under either
    /// equality mode. The predicate is cloned but never evaluated.
    pub fn end(&self) -> Self
    where
        P: Clone,
    {
        Self {
            predicate: self.predicate.clone(),
            current: self.sentinel.clone(),
            sentinel: self.sentinel.clone(),
            equality: self.equality,
        }
    }

    /// Walk the remaining accepted elements as an [`Iterator`].
    pub fn into_range(self) -> CursorRange<Self>
    where
        P: Clone,
    {
        let last = self.end();
        CursorRange::new(self, last)
    }
}

impl<P, C: PartialEq> FilterSequence<P, C> {
    /// `true` once the current position has reached the sentinel.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.current == self.sentinel
    }

    /// Compare with `other` under this cursor's [`EqualityMode`].
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        match self.equality {
            EqualityMode::Positional => self.current == other.current,
            EqualityMode::ExhaustedOnly => self.current == other.sentinel,
        }
    }

    #[inline]
    pub fn equality_mode(&self) -> EqualityMode {
        self.equality
    }

    /// Underlying cursor at the current position.
    #[inline]
    pub fn current(&self) -> &C {
        &self.current
    }

    /// Underlying end-of-range cursor.
    #[inline]
    pub fn sentinel(&self) -> &C {
        &self.sentinel
    }

    #[inline]
    pub fn predicate(&self) -> &P {
        &self.predicate
    }
}

/// Delegates to [`FilterSequence::equals`] using the left operand's mode.
impl<P, C: PartialEq> PartialEq for FilterSequence<P, C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<P, C: fmt::Debug> fmt::Debug for FilterSequence<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterSequence")
            .field("current", &self.current)
            .field("sentinel", &self.sentinel)
            .field("equality", &self.equality)
            .finish_non_exhaustive()
    }
}

/// A filter is a cursor, so filtered ranges can be handed to anything that
/// takes a `[first, last)` cursor pair, including another filter.
impl<P, C> Cursor for FilterSequence<P, C>
where
    C: Cursor,
    P: Predicate<C::Item> + Clone,
{
    type Item = C::Item;

    #[inline]
    fn get(&self) -> C::Item {
        self.value_at()
    }

    #[inline]
    fn advance(&mut self) {
        FilterSequence::advance(self)
    }
}

/// Build a [`FilterSequence`] over `[first, last)`, inferring its types.
///
/// ```rust
/// # use mesh_filter::algs::cursor::slice_cursors;
/// # use mesh_filter::algs::filter::make_filtered;
/// let data = [1, 2, 3, 4, 5, 6];
/// let (b, e) = slice_cursors(&data);
/// let mut it = make_filtered(b, e, |x: &&i32| **x % 2 == 0);
/// assert_eq!(*it.value_at(), 2);
/// it.advance();
/// assert_eq!(*it.value_at(), 4);
/// ```
#[inline]
pub fn make_filtered<P, C>(first: C, last: C, predicate: P) -> FilterSequence<P, C>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    FilterSequence::new(predicate, first, last)
}

/// The `(begin, end)` filter pair for `[first, last)`.
///
/// The end cursor is built from `(last, last)`, matching how a caller would
/// construct it by hand; it never evaluates the predicate.
pub fn filtered_bounds<P, C>(
    first: C,
    last: C,
    predicate: P,
) -> (FilterSequence<P, C>, FilterSequence<P, C>)
where
    C: Cursor,
    P: Predicate<C::Item> + Clone,
{
    let end = FilterSequence::new(predicate.clone(), last.clone(), last.clone());
    (FilterSequence::new(predicate, first, last), end)
}

/// Accepted elements of `[first, last)` as an [`Iterator`].
#[inline]
pub fn filtered<P, C>(first: C, last: C, predicate: P) -> CursorRange<FilterSequence<P, C>>
where
    C: Cursor,
    P: Predicate<C::Item> + Clone,
{
    FilterSequence::new(predicate, first, last).into_range()
}
