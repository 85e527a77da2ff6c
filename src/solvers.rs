//! This module provides the high-level, user-friendly API for computing a
//! basis of the intersection of two vector subspaces.

use crate::algorithms::rref::reduced_row_echelon;
use crate::algorithms::zassenhaus::{
    assemble_block_matrix, extract_intersection, intersection_dimension, validate_full_rank,
    validate_shapes,
};
use crate::error::ZassenhausError;
use faer::{Mat, MatRef};

/// Computes a basis for `span(u) ∩ span(v)` with the Zassenhaus algorithm.
///
/// The two subspaces are given as the column spans of `u` (n×m1) and `v`
/// (n×m2). Both matrices must have at least two rows, share their row count,
/// and have linearly independent columns. The computation proceeds in four
/// stages: shape validation, estimation of the intersection dimension `k`
/// from the rank formula, reduction of the Zassenhaus block matrix to reduced
/// row-echelon form, and extraction of the basis from the rows whose left
/// block vanished.
///
/// The full-rank check runs after the dimension estimate, so a rank-deficient
/// input whose estimated intersection is already trivial returns the zero
/// sentinel rather than an error.
///
/// # Arguments
/// * `u`: Basis matrix of the first subspace, one basis vector per column.
/// * `v`: Basis matrix of the second subspace, one basis vector per column.
///
/// # Returns
/// An `n × k` matrix whose columns are linearly independent and span exactly
/// the intersection, where `k` is the intersection dimension. When the
/// intersection is trivial (`k = 0`), the result is an `n × 1` zero column:
/// a sentinel for the empty basis rather than an `n × 0` matrix.
///
/// # Errors
/// * `InvalidDimension` if the ambient dimension is below 2.
/// * `DimensionMismatch` if `u` and `v` have different row counts.
/// * `NotFullRank` if either matrix has linearly dependent columns.
/// * `InconsistentReduction` if the reduction exposes a number of zero rows
///   that contradicts the rank formula; this indicates a tolerance breakdown,
///   not invalid input.
///
/// # Example
/// ```rust
/// use faer::mat;
/// use zassenhaus_project::intersection_basis;
///
/// // Two planes in R^4 meeting in the line spanned by (1, -1, 0, 1).
/// let u = mat![
///     [1.0, 0.0],
///     [-1.0, 0.0],
///     [0.0, 1.0],
///     [1.0, -1.0],
/// ];
/// let v = mat![
///     [5.0, 0.0],
///     [0.0, 5.0],
///     [-3.0, -3.0],
///     [3.0, -2.0],
/// ];
///
/// let w = intersection_basis(u.as_ref(), v.as_ref()).unwrap();
/// assert_eq!(w.nrows(), 4);
/// assert_eq!(w.ncols(), 1);
/// let scale = w[(0, 0)];
/// assert!((w[(1, 0)] + scale).abs() < 1e-8);
/// assert!(w[(2, 0)].abs() < 1e-8);
/// assert!((w[(3, 0)] - scale).abs() < 1e-8);
/// ```
pub fn intersection_basis(
    u: MatRef<'_, f64>,
    v: MatRef<'_, f64>,
) -> Result<Mat<f64>, ZassenhausError> {
    validate_shapes(u, v)?;

    let k = intersection_dimension(u, v)?;
    if k == 0 {
        // Trivial intersection: the empty-basis sentinel, one zero column.
        return Ok(Mat::zeros(u.nrows(), 1));
    }

    validate_full_rank(u, v)?;

    let block = assemble_block_matrix(u, v);
    let echelon = reduced_row_echelon(block);
    extract_intersection(&echelon, u.nrows(), k)
}
