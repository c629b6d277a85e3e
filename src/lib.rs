#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-filter
//!
//! mesh-filter provides lazy, allocation-free filtering over forward cursor
//! ranges, together with the small mesh-graph toolkit it is typically used
//! with: positioned graph nodes, tetrahedral mesh ingestion, matrix-free
//! linear operators and a headless subgraph view.
//!
//! ## Features
//! - [`FilterSequence`](algs::filter::FilterSequence): a cursor over only the
//!   elements of `[first, last)` accepted by a predicate; each underlying
//!   element is tested at most once per traversal
//! - Configurable cursor equality ([`EqualityMode`](algs::filter::EqualityMode))
//! - Positional predicates (`WithinDistance`, `NegativeX`) usable on points
//!   and graph nodes alike
//! - `Graph<V>` with node and edge cursors, built directly or from tetrahedra
//! - `SubgraphView`, which turns a filtered node range into an induced subgraph
//!
//! ## Usage
//!
//! ```rust
//! use mesh_filter::prelude::*;
//!
//! let points = [
//!     Point::new(0.0, 0.0, 0.0),
//!     Point::new(5.0, 5.0, 5.0),
//!     Point::new(0.05, 0.05, 0.05),
//! ];
//! let (b, e) = slice_cursors(&points);
//! let near = WithinDistance::new(Point::new(0.1, 0.1, 0.1), 1.1);
//! let kept: Vec<Point> = filtered(b, e, near).copied().collect();
//! assert_eq!(kept, vec![points[0], points[2]]);
//! ```
//!
//! ## Invariant checking
//! Enable the `check-invariants` (or `strict-invariants`) feature to run the
//! structural checks of [`DebugInvariants`] in release builds too.

pub mod algs;
pub mod debug_invariants;
pub mod geometry;
pub mod mesh_error;
pub mod mesh_generation;
pub mod topology;
pub mod view;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::cursor::{Cursor, CursorRange, SliceCursor, slice_cursors};
    pub use crate::algs::filter::{
        EqualityMode, FilterSequence, filtered, filtered_bounds, make_filtered,
    };
    pub use crate::algs::linear_operator::{
        Assign, AssignMode, IdentityOperator, LinearOperator, MinusAssign, PlusAssign,
    };
    pub use crate::algs::predicates::{Counting, NegativeX, Not, Predicate, WithinDistance};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::point::{Point, Positioned, norm_2};
    pub use crate::mesh_error::MeshFilterError;
    pub use crate::mesh_generation::{Tetrahedron, graph_from_tetrahedra};
    pub use crate::topology::graph::{Edge, EdgeCursor, Graph, Node, NodeCursor};
    pub use crate::topology::node::{EdgeId, NodeId};
    pub use crate::view::{NodeMap, SubgraphView, ViewSnapshot};
}
