//! Reduction of a dense real matrix to reduced row-echelon form.
//!
//! This is the workhorse of the intersection computation: the block matrix
//! assembled from the two input bases is reduced here, and the basis is then
//! read off the reduced rows. The reduction is a textbook Gauss–Jordan
//! elimination with partial pivoting. At each step the remaining rows are
//! scanned for the entry of largest absolute value in the current column;
//! candidates at or below [`pivot_tolerance`](super::pivot_tolerance) are
//! treated as zero and the column is skipped. Each accepted pivot is
//! normalized to 1.0 and eliminated from every other row, so the result is the
//! canonical reduced form: pivots in strictly increasing column order, each
//! the only non-zero entry of its column.
//!
//! The tolerance is fixed once from the magnitude of the input matrix rather
//! than re-derived per column. Rank decisions made during the reduction must
//! agree with the zero-row classification performed afterwards, and a single
//! threshold is the simplest way to keep the two consistent.

use faer::Mat;

use super::{EchelonForm, pivot_tolerance};

/// Reduces `matrix` to reduced row-echelon form, consuming it.
///
/// Rows are permuted by partial pivoting, scaled so that every pivot is
/// exactly 1.0, and combined so that each pivot is the only non-zero entry in
/// its column. Rows that reduce to zero end up below all pivot rows.
///
/// # Returns
/// An [`EchelonForm`] holding the reduced matrix and the pivot columns.
pub fn reduced_row_echelon(mut matrix: Mat<f64>) -> EchelonForm {
    let nrows = matrix.nrows();
    let ncols = matrix.ncols();

    let scale = (0..nrows)
        .flat_map(|i| (0..ncols).map(move |j| (i, j)))
        .fold(0.0_f64, |acc, (i, j)| acc.max(matrix[(i, j)].abs()));
    let tol = pivot_tolerance(scale);

    let mut pivots = Vec::with_capacity(nrows.min(ncols));
    let mut pivot_row = 0;

    for col in 0..ncols {
        if pivot_row == nrows {
            break;
        }

        // Partial pivoting: pick the row with the largest magnitude in this
        // column among the rows not yet assigned a pivot.
        let mut best_row = pivot_row;
        let mut best_val = matrix[(pivot_row, col)].abs();
        for row in (pivot_row + 1)..nrows {
            let candidate = matrix[(row, col)].abs();
            if candidate > best_val {
                best_row = row;
                best_val = candidate;
            }
        }

        // No usable pivot in this column; it is a free column.
        if best_val <= tol {
            continue;
        }

        if best_row != pivot_row {
            for j in 0..ncols {
                let tmp = matrix[(best_row, j)];
                matrix[(best_row, j)] = matrix[(pivot_row, j)];
                matrix[(pivot_row, j)] = tmp;
            }
        }

        // Normalize the pivot row so the pivot entry is exactly 1.0.
        let pivot_value = matrix[(pivot_row, col)];
        for j in 0..ncols {
            matrix[(pivot_row, j)] /= pivot_value;
        }
        matrix[(pivot_row, col)] = 1.0;

        // Eliminate the pivot column from every other row.
        for row in 0..nrows {
            if row == pivot_row {
                continue;
            }
            let factor = matrix[(row, col)];
            if factor != 0.0 {
                for j in 0..ncols {
                    matrix[(row, j)] -= factor * matrix[(pivot_row, j)];
                }
                matrix[(row, col)] = 0.0;
            }
        }

        pivots.push(col);
        pivot_row += 1;
    }

    EchelonForm { matrix, pivots }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faer::{Mat, mat};

    fn assert_matrix_close(actual: &Mat<f64>, expected: &Mat<f64>, tol: f64) {
        assert_eq!(actual.nrows(), expected.nrows());
        assert_eq!(actual.ncols(), expected.ncols());
        for i in 0..actual.nrows() {
            for j in 0..actual.ncols() {
                assert!(
                    (actual[(i, j)] - expected[(i, j)]).abs() <= tol,
                    "entry ({}, {}): {} vs {}",
                    i,
                    j,
                    actual[(i, j)],
                    expected[(i, j)]
                );
            }
        }
    }

    #[test]
    fn test_reduces_invertible_matrix_to_identity() {
        let m: Mat<f64> = mat![[2.0, 1.0], [1.0, 3.0]];
        let echelon = reduced_row_echelon(m);
        let eye: Mat<f64> = mat![[1.0, 0.0], [0.0, 1.0]];
        assert_matrix_close(&echelon.matrix, &eye, 1e-12);
        assert_eq!(echelon.pivots, vec![0, 1]);
        assert_eq!(echelon.rank(), 2);
    }

    #[test]
    fn test_free_column_is_skipped() {
        // Middle column is a combination of the first, so it carries no pivot.
        let m: Mat<f64> = mat![[1.0, 2.0, 0.0], [0.0, 0.0, 1.0]];
        let echelon = reduced_row_echelon(m);
        assert_eq!(echelon.pivots, vec![0, 2]);
        let expected: Mat<f64> = mat![[1.0, 2.0, 0.0], [0.0, 0.0, 1.0]];
        assert_matrix_close(&echelon.matrix, &expected, 1e-12);
    }

    #[test]
    fn test_dependent_rows_reduce_to_zero_rows_at_bottom() {
        let m: Mat<f64> = mat![
            [1.0, 2.0, 3.0],
            [2.0, 4.0, 6.0],
            [0.0, 1.0, 1.0],
        ];
        let echelon = reduced_row_echelon(m);
        assert_eq!(echelon.rank(), 2);
        // The dependent row must have been reduced away entirely.
        let last_row_weight: f64 = (0..3).map(|j| echelon.matrix[(2, j)].abs()).sum();
        assert!(last_row_weight <= 1e-10);
    }

    #[test]
    fn test_reduction_is_idempotent() {
        let m: Mat<f64> = mat![
            [3.0, 1.0, 0.0, 2.0],
            [0.0, 0.0, 5.0, 1.0],
            [6.0, 2.0, 5.0, 5.0],
        ];
        let once = reduced_row_echelon(m);
        let twice = reduced_row_echelon(once.matrix.clone());
        assert_eq!(once.pivots, twice.pivots);
        assert_matrix_close(&once.matrix, &twice.matrix, 1e-10);
    }

    #[test]
    fn test_zero_matrix_has_no_pivots() {
        let m: Mat<f64> = Mat::zeros(2, 3);
        let echelon = reduced_row_echelon(m);
        assert!(echelon.pivots.is_empty());
        assert_eq!(echelon.rank(), 0);
    }
}
