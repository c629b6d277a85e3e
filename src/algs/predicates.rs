//! Element predicates for [`FilterSequence`](crate::algs::filter::FilterSequence).
//!
//! A predicate decides membership of one element. It must be pure with
//! respect to traversal: asking twice about the same element must give the
//! same answer. Filters hold their predicate by value, so any external state a
//! predicate reads has to be captured explicitly (see [`Counting`]).

use std::cell::Cell;
use std::rc::Rc;

use crate::geometry::point::{Point, Positioned};

/// Membership test over elements of type `T`.
pub trait Predicate<T> {
    fn test(&mut self, item: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: FnMut(&T) -> bool,
{
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        self(item)
    }
}

/// Accepts elements strictly closer than `radius` to `center`.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WithinDistance {
    pub center: Point,
    pub radius: f64,
}

impl WithinDistance {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl<T: Positioned> Predicate<T> for WithinDistance {
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        (item.position() - self.center).norm() < self.radius
    }
}

/// Accepts elements whose x-coordinate is negative (a half-space slice).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NegativeX;

impl<T: Positioned> Predicate<T> for NegativeX {
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        item.position().x < 0.0
    }
}

/// Logical negation of another predicate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Not<P>(pub P);

impl<T, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        !self.0.test(item)
    }
}

/// Shared invocation counter handed out by [`Counting`].
#[derive(Clone, Debug, Default)]
pub struct CallCount(Rc<Cell<usize>>);

impl CallCount {
    #[inline]
    pub fn get(&self) -> usize {
        self.0.get()
    }

    #[inline]
    pub fn reset(&self) {
        self.0.set(0);
    }
}

/// Wraps a predicate and counts how many times it is evaluated.
///
/// Clones share the same counter, so a filter's end cursor (which holds its
/// own copy of the predicate) reports into the same [`CallCount`].
#[derive(Clone, Debug)]
pub struct Counting<P> {
    inner: P,
    calls: CallCount,
}

impl<P> Counting<P> {
    /// Wrap `inner`; the returned handle observes every evaluation.
    pub fn new(inner: P) -> (Self, CallCount) {
        let calls = CallCount::default();
        (
            Self {
                inner,
                calls: calls.clone(),
            },
            calls,
        )
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<T, P: Predicate<T>> Predicate<T> for Counting<P> {
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        self.calls.0.set(self.calls.0.get() + 1);
        self.inner.test(item)
    }
}
