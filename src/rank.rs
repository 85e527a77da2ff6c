//! Numerical rank computation for dense real matrices.
//!
//! Every stage of the intersection pipeline that reasons about linear
//! dependence does so through a single notion of rank: the number of singular
//! values above a relative tolerance. Centralizing that definition matters
//! because two different stages compare ranks of related matrices (a basis
//! matrix on its own, and the horizontal concatenation of two basis matrices).
//! If those ranks were computed with different methods or tolerances, the
//! stages could reach contradictory conclusions about the same input.
//!
//! The singular values are obtained from [`faer`]'s SVD without accumulating
//! the singular vectors, which keeps the cost of a rank query at a minimum.
//! The tolerance follows the usual convention for floating-point rank
//! determination: `max(nrows, ncols) * eps * sigma_max`, with `sigma_max`
//! clamped below by 1 so that an exactly-zero matrix still has rank zero.

use faer::diag::Diag;
use faer::dyn_stack::{MemBuffer, MemStack};
use faer::linalg::svd::{self, ComputeSvdVectors};
use faer::prelude::Reborrow;
use faer::{Mat, MatMut, MatRef, Par};

use crate::error::{ZassenhausError, ZassenhausErrorKind};

/// Relative tolerance used to decide which singular values count towards the
/// rank.
///
/// `sigma_max` is the largest singular value of the matrix under
/// consideration. The `max(1.0)` clamp keeps the threshold meaningful for
/// matrices whose entries are all tiny or all zero.
#[inline]
pub fn rank_tolerance(nrows: usize, ncols: usize, sigma_max: f64) -> f64 {
    nrows.max(ncols) as f64 * f64::EPSILON * sigma_max.max(1.0)
}

/// Numerical rank of a dense real matrix.
///
/// This trait provides the single rank definition shared by the precondition
/// checks and the dimension formula. Implementations exist for `faer`'s owned
/// matrix and both of its view types, so callers never need to convert or
/// clone just to ask for a rank.
pub trait NumericalRank {
    /// Returns the number of singular values above [`rank_tolerance`].
    ///
    /// # Errors
    /// Returns an error if the underlying SVD fails to converge.
    fn numerical_rank(&self) -> Result<usize, ZassenhausError>;
}

/// Implementation for `faer`'s immutable dense matrix view (`MatRef`).
/// This is the primary implementation; the other two delegate to it.
impl NumericalRank for MatRef<'_, f64> {
    fn numerical_rank(&self) -> Result<usize, ZassenhausError> {
        let (nrows, ncols) = self.shape();
        if nrows == 0 || ncols == 0 {
            return Ok(0);
        }

        // Compute singular values only. Requesting no singular vectors lets
        // the SVD driver skip the accumulation phase entirely.
        let mut singular = Diag::<f64>::zeros(nrows.min(ncols));
        let mut mem = MemBuffer::new(svd::svd_scratch::<f64>(
            nrows,
            ncols,
            ComputeSvdVectors::No,
            ComputeSvdVectors::No,
            Par::Seq,
            Default::default(),
        ));
        let stack = MemStack::new(&mut mem);
        svd::svd(
            *self,
            singular.as_mut(),
            None,
            None,
            Par::Seq,
            stack,
            Default::default(),
        )
        .map_err(|_| ZassenhausErrorKind::SvdNoConvergence)?;

        let s = singular.as_ref();
        let len = nrows.min(ncols);
        let sigma_max = (0..len).fold(0.0_f64, |acc, i| acc.max(s[i]));
        let tol = rank_tolerance(nrows, ncols, sigma_max);
        Ok((0..len).filter(|&i| s[i] > tol).count())
    }
}

/// Implementation for `faer`'s mutable dense matrix view (`MatMut`).
/// Delegates to the `MatRef` implementation via a reborrow.
impl NumericalRank for MatMut<'_, f64> {
    #[inline]
    fn numerical_rank(&self) -> Result<usize, ZassenhausError> {
        self.rb().numerical_rank()
    }
}

/// Implementation for `faer`'s owned dense matrix (`Mat`).
/// Delegates to the `MatRef` implementation via a reference.
impl NumericalRank for Mat<f64> {
    #[inline]
    fn numerical_rank(&self) -> Result<usize, ZassenhausError> {
        self.as_ref().numerical_rank()
    }
}
