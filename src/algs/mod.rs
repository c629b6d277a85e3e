//! Traversal algorithms: cursors, predicates, filters and operators.

pub mod cursor;
pub mod filter;
pub mod linear_operator;
pub mod predicates;

pub use cursor::{Cursor, CursorRange, SliceCursor, slice_cursors};
pub use filter::{EqualityMode, FilterSequence, filtered, filtered_bounds, make_filtered};
pub use predicates::{Counting, NegativeX, Not, Predicate, WithinDistance};
