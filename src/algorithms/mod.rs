//! Core algorithm stages for the Zassenhaus intersection computation.
//!
//! ** NOTE: We recommend using the high-level function
//! [`crate::solvers::intersection_basis`] instead. The items in this module
//! are intended for use cases where fine-grained control over the individual
//! pipeline stages is required.
//!
//! The pipeline is split into two submodules:
//!
//! - **[`rref`]**: Gauss–Jordan reduction of a dense matrix to reduced
//!   row-echelon form with partial pivoting, producing an [`EchelonForm`].
//! - **[`zassenhaus`]**: the stages specific to the intersection computation:
//!   precondition validation, the rank-based dimension formula, block-matrix
//!   assembly, and extraction of the basis from the echelon form.
//!
//! This module also centralizes the numerical tolerances the stages share, so
//! that pivot detection and zero-row detection cannot drift apart.

pub mod rref;
pub mod zassenhaus;

use faer::Mat;

/// Threshold on the sum of absolute values of a row's left block, below which
/// the row is considered to have reduced entirely to zero.
///
/// After reduction, every row that still carries left-block content has a
/// pivot normalized to exactly 1.0 somewhere in its left block, so genuine
/// non-zero rows sit far above this threshold.
pub const ZERO_ROW_TOLERANCE: f64 = 1e-5;

/// Absolute threshold below which a pivot candidate is treated as zero during
/// row reduction.
///
/// `scale` is the largest absolute entry of the matrix before reduction; the
/// `max(1.0)` clamp keeps the threshold meaningful for matrices with only
/// small entries.
#[inline]
pub fn pivot_tolerance(scale: f64) -> f64 {
    1e-10 * scale.max(1.0)
}

/// A matrix in reduced row-echelon form together with its pivot structure.
///
/// Produced by [`rref::reduced_row_echelon`]. The pivot record is what makes
/// the echelon form useful beyond its entries: the number of pivots is the
/// rank of the original matrix, and the pivot columns identify which rows
/// still carry content in a given column range.
#[derive(Debug, Clone)]
pub struct EchelonForm {
    /// The reduced matrix. Each pivot entry is exactly 1.0 and is the only
    /// non-zero entry in its column; pivots appear in strictly increasing
    /// column order from the top row down.
    pub matrix: Mat<f64>,
    /// Column index of each pivot, one entry per pivot row, in increasing
    /// order.
    pub pivots: Vec<usize>,
}

impl EchelonForm {
    /// The rank of the reduced matrix, i.e. the number of pivot rows.
    #[inline]
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }
}
