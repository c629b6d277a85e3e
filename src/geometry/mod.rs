//! Geometry utilities for mesh-filter.
//!
//! Only the small amount of geometry the predicates and the subgraph view need:
//! a 3-D point with subtraction and a Euclidean norm.

pub mod point;

pub use point::{Point, Positioned, norm_2};
