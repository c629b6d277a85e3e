//! Matrix-free linear operators.
//!
//! A [`LinearOperator`] never materializes its matrix. Solvers drive it
//! through [`LinearOperator::mult`], which writes `A * v` into a caller-owned
//! destination under an assignment policy: plain assignment, accumulate, or
//! subtract. This lets `w = A v`, `w += A v` and `w -= A v` share one kernel
//! without temporaries.

use crate::mesh_error::MeshFilterError;

/// How a computed entry is combined with the destination entry.
pub trait AssignMode: Copy {
    fn apply(dst: &mut f64, src: f64);
}

/// `dst = src`
#[derive(Copy, Clone, Debug, Default)]
pub struct Assign;

/// `dst += src`
#[derive(Copy, Clone, Debug, Default)]
pub struct PlusAssign;

/// `dst -= src`
#[derive(Copy, Clone, Debug, Default)]
pub struct MinusAssign;

impl AssignMode for Assign {
    #[inline]
    fn apply(dst: &mut f64, src: f64) {
        *dst = src;
    }
}

impl AssignMode for PlusAssign {
    #[inline]
    fn apply(dst: &mut f64, src: f64) {
        *dst += src;
    }
}

impl AssignMode for MinusAssign {
    #[inline]
    fn apply(dst: &mut f64, src: f64) {
        *dst -= src;
    }
}

/// A linear map `R^cols -> R^rows` applied without storing its matrix.
pub trait LinearOperator {
    fn num_rows(&self) -> usize;

    fn num_cols(&self) -> usize;

    /// Number of matrix entries, `rows * cols`.
    fn size(&self) -> usize {
        self.num_rows() * self.num_cols()
    }

    /// Combine `A * v` into `w` entry by entry according to `mode`.
    ///
    /// # Errors
    /// `DimensionMismatch` if `v.len() != num_cols()` or `w.len() != num_rows()`.
    fn mult<A: AssignMode>(
        &self,
        v: &[f64],
        w: &mut [f64],
        mode: A,
    ) -> Result<(), MeshFilterError>;

    /// `A * v` in a freshly allocated vector.
    fn apply(&self, v: &[f64]) -> Result<Vec<f64>, MeshFilterError> {
        let mut w = vec![0.0; self.num_rows()];
        self.mult(v, &mut w, Assign)?;
        Ok(w)
    }
}

/// Check operand lengths against an operator's shape.
pub fn check_shape<L: LinearOperator + ?Sized>(
    op: &L,
    v: &[f64],
    w: &[f64],
) -> Result<(), MeshFilterError> {
    if v.len() != op.num_cols() {
        return Err(MeshFilterError::DimensionMismatch {
            what: "input vector",
            expected: op.num_cols(),
            found: v.len(),
        });
    }
    if w.len() != op.num_rows() {
        return Err(MeshFilterError::DimensionMismatch {
            what: "output vector",
            expected: op.num_rows(),
            found: w.len(),
        });
    }
    Ok(())
}

/// The `n x n` identity, applied matrix-free.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IdentityOperator {
    n: usize,
}

impl IdentityOperator {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// Side length of the (square) operator.
    pub fn dim(&self) -> usize {
        self.n
    }
}

impl LinearOperator for IdentityOperator {
    #[inline]
    fn num_rows(&self) -> usize {
        self.n
    }

    #[inline]
    fn num_cols(&self) -> usize {
        self.n
    }

    fn mult<A: AssignMode>(
        &self,
        v: &[f64],
        w: &mut [f64],
        _mode: A,
    ) -> Result<(), MeshFilterError> {
        check_shape(self, v, w)?;
        for (dst, &src) in w.iter_mut().zip(v) {
            A::apply(dst, src);
        }
        Ok(())
    }
}
