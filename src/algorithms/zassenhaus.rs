//! Pipeline stages of the Zassenhaus subspace-intersection algorithm.
//!
//! ** NOTE: We recommend using the high-level function
//! [`crate::solvers::intersection_basis`] instead. This module is intended for
//! use cases where the individual stages need to be driven or inspected
//! separately.
//!
//! The algorithm encodes two subspace bases `U` (n×m1) and `V` (n×m2) into a
//! single `(m1+m2) × 2n` block matrix
//!
//! ```text
//!     | Uᵗ  Uᵗ |
//!     | Vᵗ  0  |
//! ```
//!
//! whose row space simultaneously tracks vectors of `span(U) + span(V)` (left
//! block) and the `span(U)`-coordinates that produced them (right block).
//! After reduction to reduced row-echelon form, the rows whose left block
//! vanished identify exactly the relations lying in `span(U) ∩ span(V)`; their
//! right blocks, transposed, form a basis of the intersection.
//!
//! The stages here are pure functions over `faer` matrices and perform no
//! allocation beyond their outputs.

use faer::{Mat, MatRef};

use super::{EchelonForm, ZERO_ROW_TOLERANCE};
use crate::error::{ZassenhausError, ZassenhausErrorKind};
use crate::rank::NumericalRank;

/// Checks the shape preconditions: ambient dimension at least 2, and both
/// basis matrices embedded in the same ambient space.
///
/// # Errors
/// `InvalidDimension` if `u` has fewer than 2 rows, `DimensionMismatch` if
/// `v`'s row count differs from `u`'s.
pub fn validate_shapes(u: MatRef<'_, f64>, v: MatRef<'_, f64>) -> Result<(), ZassenhausError> {
    let n = u.nrows();
    if n < 2 {
        return Err(ZassenhausErrorKind::InvalidDimension { n }.into());
    }
    if v.nrows() != n {
        return Err(ZassenhausErrorKind::DimensionMismatch {
            u_rows: n,
            v_rows: v.nrows(),
        }
        .into());
    }
    Ok(())
}

/// Checks that both basis matrices have full rank, i.e. that their columns
/// are linearly independent.
///
/// # Errors
/// `NotFullRank` naming the offending matrix, or a rank-computation failure.
pub fn validate_full_rank(u: MatRef<'_, f64>, v: MatRef<'_, f64>) -> Result<(), ZassenhausError> {
    for (name, basis) in [("U", u), ("V", v)] {
        let rank = basis.numerical_rank()?;
        let expected = basis.nrows().min(basis.ncols());
        if rank != expected {
            return Err(ZassenhausErrorKind::NotFullRank {
                name,
                rank,
                cols: basis.ncols(),
            }
            .into());
        }
    }
    Ok(())
}

/// Horizontal concatenation `[left | right]` of two matrices with the same
/// row count.
///
/// # Panics
/// Panics if the row counts differ. Callers validate shapes before reaching
/// for concatenation.
pub fn hstack(left: MatRef<'_, f64>, right: MatRef<'_, f64>) -> Mat<f64> {
    assert_eq!(
        left.nrows(),
        right.nrows(),
        "Cannot concatenate matrices with {} and {} rows.",
        left.nrows(),
        right.nrows(),
    );
    let split = left.ncols();
    Mat::from_fn(left.nrows(), split + right.ncols(), |i, j| {
        if j < split { left[(i, j)] } else { right[(i, j - split)] }
    })
}

/// Expected dimension of `span(u) ∩ span(v)` from the rank formula
/// `dim(A ∩ B) = dim(A) + dim(B) − dim(A + B)`.
///
/// All three ranks go through the same numerical-rank routine, so the formula
/// cannot mix inconsistent rank decisions. The subtraction saturates: the
/// concatenated rank cannot mathematically exceed the sum, so a saturated
/// result only ever reflects a borderline tolerance call, and it degrades to
/// the trivial answer 0.
///
/// # Errors
/// Propagates rank-computation failures.
pub fn intersection_dimension(
    u: MatRef<'_, f64>,
    v: MatRef<'_, f64>,
) -> Result<usize, ZassenhausError> {
    let rank_u = u.numerical_rank()?;
    let rank_v = v.numerical_rank()?;
    let rank_sum = hstack(u, v).numerical_rank()?;
    Ok((rank_u + rank_v).saturating_sub(rank_sum))
}

/// Assembles the `(m1+m2) × 2n` Zassenhaus block matrix from the two basis
/// matrices.
///
/// The top `m1` rows are `[Uᵗ | Uᵗ]`; the bottom `m2` rows are `[Vᵗ | 0]`.
pub fn assemble_block_matrix(u: MatRef<'_, f64>, v: MatRef<'_, f64>) -> Mat<f64> {
    let n = u.nrows();
    let m1 = u.ncols();
    let m2 = v.ncols();
    Mat::from_fn(m1 + m2, 2 * n, |i, j| {
        if i < m1 {
            // Row i of the top block is the i-th column of U, repeated on
            // both halves.
            u[(j % n, i)]
        } else if j < n {
            v[(j, i - m1)]
        } else {
            0.0
        }
    })
}

/// Reads the intersection basis off the echelon form of the block matrix.
///
/// A row belongs to the intersection when its left block (the first
/// `ambient_dim` columns) reduced to numerical zero while its right block did
/// not, measured as sums of absolute values against [`ZERO_ROW_TOLERANCE`].
/// Rows that vanished entirely encode dependencies among the input columns,
/// not intersection relations, and are ignored. All qualifying rows are
/// gathered wherever they appear; under the reduction used here they end up
/// contiguous, but the extraction does not rely on that. The right blocks of
/// those rows, transposed, form the `ambient_dim × k` basis.
///
/// # Errors
/// `InconsistentReduction` if the number of zero rows disagrees with
/// `expected_dim`, the dimension predicted by the rank formula. A mismatch
/// can only arise from a tolerance or arithmetic inconsistency between the
/// stages, so it is surfaced instead of returning a wrong-size basis.
pub fn extract_intersection(
    echelon: &EchelonForm,
    ambient_dim: usize,
    expected_dim: usize,
) -> Result<Mat<f64>, ZassenhausError> {
    let matrix = &echelon.matrix;
    debug_assert_eq!(matrix.ncols(), 2 * ambient_dim);

    let mut zero_rows = Vec::new();
    for row in 0..matrix.nrows() {
        let left_weight: f64 = (0..ambient_dim).map(|j| matrix[(row, j)].abs()).sum();
        let right_weight: f64 = (ambient_dim..2 * ambient_dim)
            .map(|j| matrix[(row, j)].abs())
            .sum();
        // A surviving relation row has a pivot normalized to 1.0 in its right
        // block, so the two weights are separated by orders of magnitude.
        if left_weight <= ZERO_ROW_TOLERANCE && right_weight > ZERO_ROW_TOLERANCE {
            zero_rows.push(row);
        }
    }

    if zero_rows.len() != expected_dim {
        return Err(ZassenhausErrorKind::InconsistentReduction {
            expected: expected_dim,
            found: zero_rows.len(),
        }
        .into());
    }

    let mut basis = Mat::zeros(ambient_dim, expected_dim);
    for (col, &row) in zero_rows.iter().enumerate() {
        for i in 0..ambient_dim {
            basis[(i, col)] = matrix[(row, ambient_dim + i)];
        }
    }
    Ok(basis)
}
