//! Random test-problem generation.
//!
//! Random subspaces make good test problems for the intersection computation
//! because their expected behavior is known generically: independently drawn
//! spans intersect trivially whenever their dimensions sum to at most the
//! ambient dimension, and a shared block of columns plants a common subspace
//! of known dimension. Using a caller-supplied seeded generator keeps every
//! experiment and test run reproducible.

use faer::Mat;
use rand::Rng;

/// Draws an `nrows × ncols` matrix with independent entries uniform on
/// `[-1, 1)`.
///
/// For `ncols <= nrows` the columns of such a matrix are linearly independent
/// with probability one, so the result can serve directly as a subspace
/// basis.
pub fn random_basis(nrows: usize, ncols: usize, rng: &mut impl Rng) -> Mat<f64> {
    Mat::from_fn(nrows, ncols, |_, _| rng.random::<f64>() * 2.0 - 1.0)
}

/// Generates a pair of random bases `(U, V)` in an `n`-dimensional ambient
/// space whose spans share a planted common subspace of dimension `shared`.
///
/// `U` has `m1` columns and `V` has `m2` columns; the first `shared` columns
/// of each are drawn once and reused, and the remaining columns are drawn
/// independently. Provided `m1 + m2 - shared <= n`, the intersection of the
/// two spans has dimension exactly `shared` with probability one.
///
/// # Panics
/// Panics if `shared` exceeds `m1` or `m2`, or if `m1 + m2 - shared > n`
/// (in that case the spans would generically intersect in more than the
/// planted subspace).
pub fn random_subspace_pair(
    n: usize,
    m1: usize,
    m2: usize,
    shared: usize,
    rng: &mut impl Rng,
) -> (Mat<f64>, Mat<f64>) {
    assert!(
        shared <= m1 && shared <= m2,
        "Planted dimension {shared} exceeds a basis size ({m1}, {m2})."
    );
    assert!(
        m1 + m2 - shared <= n,
        "Bases of sizes {m1} and {m2} sharing {shared} column(s) do not fit independently in dimension {n}."
    );

    let common = random_basis(n, shared, rng);
    let u_rest = random_basis(n, m1 - shared, rng);
    let v_rest = random_basis(n, m2 - shared, rng);

    let u = Mat::from_fn(n, m1, |i, j| {
        if j < shared {
            common[(i, j)]
        } else {
            u_rest[(i, j - shared)]
        }
    });
    let v = Mat::from_fn(n, m2, |i, j| {
        if j < shared {
            common[(i, j)]
        } else {
            v_rest[(i, j - shared)]
        }
    });
    (u, v)
}
