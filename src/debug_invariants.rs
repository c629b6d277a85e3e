//! Opt-in structural checks for the collaborator types.
//!
//! Checks are never run implicitly on the filter hot path: the filter's own
//! invariant can only be verified by re-evaluating its predicate, which would
//! break the single-evaluation guarantee.

use crate::mesh_error::MeshFilterError;

/// Types whose internal consistency can be checked on demand.
pub trait DebugInvariants {
    /// Panic on the first violated invariant when invariant checking is enabled.
    fn debug_assert_invariants(&self);

    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), MeshFilterError>;

    /// Validate and log instead of failing; returns `true` when consistent.
    fn check_invariants_logged(&self, context: &str) -> bool {
        match self.validate_invariants() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[invariants] {context}: {e}");
                false
            }
        }
    }
}

/// Run a fallible invariant check and panic with context on error.
///
/// Active in debug builds and whenever the `check-invariants` or
/// `strict-invariants` feature is enabled; compiles to nothing otherwise.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
