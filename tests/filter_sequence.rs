// Behavioural tests for FilterSequence over slice cursors.
use mesh_filter::algs::cursor::{Cursor, CursorRange, slice_cursors};
use mesh_filter::algs::filter::{EqualityMode, FilterSequence, filtered, make_filtered};
use mesh_filter::algs::predicates::{Counting, WithinDistance};
use mesh_filter::geometry::point::Point;
use proptest::prelude::*;

fn is_even(x: &&i32) -> bool {
    **x % 2 == 0
}

#[test]
fn evens_of_one_to_six() {
    let data = [1, 2, 3, 4, 5, 6];
    let (b, e) = slice_cursors(&data);
    let (pred, calls) = Counting::new(is_even);
    let mut it = make_filtered(b, e, pred);
    let mut out = Vec::new();
    while !it.is_exhausted() {
        out.push(*it.value_at());
        it.advance();
    }
    assert_eq!(out, vec![2, 4, 6]);
    assert_eq!(calls.get(), 6);
}

#[test]
fn empty_range_is_exhausted_without_evaluating() {
    let data: Vec<i32> = Vec::new();
    let (b, e) = slice_cursors(&data);
    let (pred, calls) = Counting::new(|_: &&i32| true);
    let it = make_filtered(b, e, pred);
    assert!(it.is_exhausted());
    assert_eq!(it.current(), it.sentinel());
    assert_eq!(calls.get(), 0);
}

#[test]
fn nothing_accepted_is_exhausted_on_construction() {
    let data = [1, 3, 5, 7];
    let (b, e) = slice_cursors(&data);
    let (pred, calls) = Counting::new(is_even);
    let it = FilterSequence::new(pred, b, e);
    assert!(it.is_exhausted());
    assert_eq!(calls.get(), data.len());
    assert_eq!(it.into_range().count(), 0);
}

#[test]
fn points_near_a_center() {
    let points = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(5.0, 5.0, 5.0),
        Point::new(0.05, 0.05, 0.05),
    ];
    let (b, e) = slice_cursors(&points);
    let near = WithinDistance::new(Point::new(0.1, 0.1, 0.1), 1.1);
    let kept: Vec<Point> = filtered(b, e, near).copied().collect();
    assert_eq!(
        kept,
        vec![Point::new(0.0, 0.0, 0.0), Point::new(0.05, 0.05, 0.05)]
    );
}

#[test]
fn end_cursor_is_stable_under_both_modes() {
    let data = [2, 4];
    let (b, e) = slice_cursors(&data);
    for mode in [EqualityMode::Positional, EqualityMode::ExhaustedOnly] {
        let mut it = FilterSequence::with_equality(is_even, b, e, mode);
        let end = it.end();
        it.advance();
        it.advance();
        assert!(it.is_exhausted());
        assert!(it == end, "mode {mode:?}");
        // Re-checking the exhausted state does not move anything.
        assert!(it.is_exhausted());
        assert_eq!(it.current(), &e);
    }
}

#[test]
fn exhausted_only_equality_ignores_live_positions() {
    let data = [2, 4, 6, 8];
    let (b, e) = slice_cursors(&data);
    let first = FilterSequence::with_equality(is_even, b, e, EqualityMode::ExhaustedOnly);
    let mut third = first.clone();
    third.advance();
    third.advance();

    // A loop meant to stop at `third` runs to the end instead.
    let mut it = first.clone();
    let mut visited = 0;
    while it != third {
        visited += 1;
        it.advance();
    }
    assert_eq!(visited, 4);

    // Positional equality stops where asked.
    let first = FilterSequence::new(is_even, b, e);
    let mut third = first.clone();
    third.advance();
    third.advance();
    let mut it = first;
    let mut visited = 0;
    while it != third {
        visited += 1;
        it.advance();
    }
    assert_eq!(visited, 2);
}

#[test]
#[should_panic(expected = "exhausted sequence")]
fn advancing_past_the_end_is_a_contract_violation() {
    let data = [1, 2];
    let (b, e) = slice_cursors(&data);
    let mut it = make_filtered(b, e, is_even);
    it.advance();
    it.advance();
}

#[test]
fn filter_is_a_cursor_for_generic_consumers() {
    fn sum_range<C: Cursor<Item = i32>>(first: C, last: C) -> i32 {
        CursorRange::new(first, last).sum()
    }

    let data = [1, 2, 3, 4];
    let (b, e) = slice_cursors(&data);
    let doubled: Vec<i32> = CursorRange::new(b, e).map(|x| x * 2).collect();
    let (db, de) = slice_cursors(&doubled);
    let it = make_filtered(db, de, |x: &&i32| **x > 4);
    let end = it.end();
    let total: i32 = CursorRange::new(it, end).copied().sum();
    assert_eq!(total, 6 + 8);

    let squares = [0, 1, 4, 9];
    assert_eq!(sum_range(IntCursor::new(&squares, 0), IntCursor::new(&squares, 4)), 14);
}

/// A cursor yielding owned values, to check the filter does not assume
/// reference items.
#[derive(Clone, PartialEq, Debug)]
struct IntCursor<'a> {
    data: &'a [i32],
    pos: usize,
}

impl<'a> IntCursor<'a> {
    fn new(data: &'a [i32], pos: usize) -> Self {
        Self { data, pos }
    }
}

impl Cursor for IntCursor<'_> {
    type Item = i32;

    fn get(&self) -> i32 {
        self.data[self.pos]
    }

    fn advance(&mut self) {
        self.pos += 1;
    }
}

#[test]
fn owned_item_cursor() {
    let data = [5, -3, 8, -1];
    let it = make_filtered(
        IntCursor::new(&data, 0),
        IntCursor::new(&data, 4),
        |x: &i32| *x < 0,
    );
    let neg: Vec<i32> = it.into_range().collect();
    assert_eq!(neg, vec![-3, -1]);
}

proptest! {
    #[test]
    fn prop_filter_law(data in proptest::collection::vec(-100i32..100, 0..64), m in 1i32..5) {
        let (b, e) = slice_cursors(&data);
        let got: Vec<i32> = filtered(b, e, move |x: &&i32| x.rem_euclid(m) == 0).copied().collect();
        let want: Vec<i32> = data.iter().copied().filter(|x| x.rem_euclid(m) == 0).collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn prop_each_element_tested_at_most_once(data in proptest::collection::vec(any::<i32>(), 0..64)) {
        let (b, e) = slice_cursors(&data);
        let (pred, calls) = Counting::new(|x: &&i32| **x > 0);
        let produced = filtered(b, e, pred).count();
        prop_assert!(calls.get() <= data.len());
        prop_assert_eq!(produced, data.iter().filter(|&&x| x > 0).count());
    }

    #[test]
    fn prop_dereference_is_idempotent(data in proptest::collection::vec(0i32..10, 1..32)) {
        let (b, e) = slice_cursors(&data);
        let mut it = make_filtered(b, e, |x: &&i32| **x >= 5);
        while !it.is_exhausted() {
            let a = it.value_at();
            let b = it.value_at();
            prop_assert!(std::ptr::eq(a, b));
            prop_assert!(*a >= 5);
            it.advance();
        }
    }
}
