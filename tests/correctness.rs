//! Integration test suite to verify the mathematical correctness of the
//! intersection computation.
//!
//! # Test Methodology
//!
//! The defining properties of an intersection basis `W` of `span(U)` and
//! `span(V)` can all be phrased as rank identities, which makes them directly
//! checkable with the same numerical-rank routine the library itself uses:
//!
//! 1. **Dimension**: `rank(W) = rank(U) + rank(V) − rank([U|V])`. The right
//!    side is the standard dimension formula for the intersection of two
//!    subspaces, computed here independently of the algorithm under test.
//! 2. **Containment**: appending `W` to either input must not increase its
//!    rank, i.e. `rank([U|W]) = rank(U)` and `rank([V|W]) = rank(V)`, which
//!    holds exactly when every column of `W` lies in both spans.
//! 3. **Triviality**: when the two spans meet only in the origin, the result
//!    is the zero-column sentinel, detectable by its norm.
//!
//! These identities are verified on hand-constructed inputs with known
//! intersections and on randomly generated inputs, both fully random and with
//! a planted common subspace. Random generation is seeded so every run is
//! deterministic. Invalid inputs are checked to fail with the documented
//! typed errors before any reduction work happens.

use anyhow::{Result, ensure};
use faer::{Mat, mat, prelude::*};
use rand::{Rng, SeedableRng, rngs::StdRng};
use zassenhaus_project::algorithms::zassenhaus::hstack;
use zassenhaus_project::rank::NumericalRank;
use zassenhaus_project::solvers::intersection_basis;
use zassenhaus_project::utils::generate::{random_basis, random_subspace_pair};

/// Threshold below which the zero-column sentinel is accepted as zero.
const SENTINEL_TOLERANCE: f64 = 1e-5;

/// Checks the rank identities that characterize a correct intersection basis.
fn verify_intersection(u: &Mat<f64>, v: &Mat<f64>, w: &Mat<f64>) -> Result<()> {
    let rank_u = u.numerical_rank()?;
    let rank_v = v.numerical_rank()?;
    let rank_sum = hstack(u.as_ref(), v.as_ref()).numerical_rank()?;
    let expected_dim = rank_u + rank_v - rank_sum;

    let computed_dim = w.numerical_rank()?;
    ensure!(
        computed_dim == expected_dim,
        "Basis has rank {} but the dimension formula gives {}.",
        computed_dim,
        expected_dim,
    );

    let rank_uw = hstack(u.as_ref(), w.as_ref()).numerical_rank()?;
    ensure!(
        rank_uw == rank_u,
        "Appending W raised the rank of U from {} to {}; W is not contained in span(U).",
        rank_u,
        rank_uw,
    );
    let rank_vw = hstack(v.as_ref(), w.as_ref()).numerical_rank()?;
    ensure!(
        rank_vw == rank_v,
        "Appending W raised the rank of V from {} to {}; W is not contained in span(V).",
        rank_v,
        rank_vw,
    );
    Ok(())
}

#[test]
fn test_known_line_intersection() -> Result<()> {
    // Two planes in R^4 meeting in the line spanned by (1, -1, 0, 1).
    let u: Mat<f64> = mat![
        [1.0, 0.0],
        [-1.0, 0.0],
        [0.0, 1.0],
        [1.0, -1.0],
    ];
    let v: Mat<f64> = mat![
        [5.0, 0.0],
        [0.0, 5.0],
        [-3.0, -3.0],
        [3.0, -2.0],
    ];

    let w = intersection_basis(u.as_ref(), v.as_ref())?;
    ensure!(w.nrows() == 4, "Incorrect row count for W.");
    ensure!(w.ncols() == 1, "Incorrect column count for W.");

    // W must be a non-zero scalar multiple of the known direction: stacking
    // it next to that direction leaves a rank-1 matrix.
    let line: Mat<f64> = mat![[1.0], [-1.0], [0.0], [1.0]];
    let stacked = hstack(w.as_ref(), line.as_ref());
    ensure!(
        stacked.numerical_rank()? == 1,
        "W does not span the expected line.",
    );

    verify_intersection(&u, &v, &w)
}

#[test]
fn test_trivial_intersection_yields_zero_sentinel() -> Result<()> {
    // U spans the first two standard basis vectors of R^6, V the next two.
    let u: Mat<f64> = Mat::from_fn(6, 2, |i, j| if i == j { 1.0 } else { 0.0 });
    let v: Mat<f64> = Mat::from_fn(6, 2, |i, j| if i == j + 2 { 1.0 } else { 0.0 });

    let w = intersection_basis(u.as_ref(), v.as_ref())?;
    ensure!(
        w.norm_l2() <= SENTINEL_TOLERANCE,
        "W is non-zero for a trivial intersection.",
    );
    ensure!(
        (w.nrows(), w.ncols()) == (6, 1),
        "Sentinel must be a single zero column.",
    );
    Ok(())
}

#[test]
fn test_random_inputs_satisfy_rank_identities() -> Result<()> {
    let n = 20;
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..10 {
        let m1 = rng.random_range(1..n);
        let m2 = rng.random_range(1..n);
        let u = random_basis(n, m1, &mut rng);
        let v = random_basis(n, m2, &mut rng);

        let w = intersection_basis(u.as_ref(), v.as_ref())?;
        verify_intersection(&u, &v, &w)?;
    }
    Ok(())
}

#[test]
fn test_planted_intersection_has_planted_dimension() -> Result<()> {
    let n = 16;
    let mut rng = StdRng::seed_from_u64(9);

    for shared in 0..=4 {
        let (u, v) = random_subspace_pair(n, 5, 6, shared, &mut rng);
        let w = intersection_basis(u.as_ref(), v.as_ref())?;

        let computed_dim = if shared == 0 {
            ensure!(
                w.norm_l2() <= SENTINEL_TOLERANCE,
                "Expected the zero sentinel for a trivial planted intersection.",
            );
            0
        } else {
            w.numerical_rank()?
        };
        ensure!(
            computed_dim == shared,
            "Planted dimension {} but computed {}.",
            shared,
            computed_dim,
        );
        verify_intersection(&u, &v, &w)?;
    }
    Ok(())
}

#[test]
fn test_one_dimensional_ambient_space_is_rejected() {
    let u: Mat<f64> = mat![[2.0]];
    let v: Mat<f64> = mat![[1.0]];
    let err = intersection_basis(u.as_ref(), v.as_ref()).unwrap_err();
    assert!(err.is_invalid_dimension());
}

#[test]
fn test_rank_deficient_basis_is_rejected() {
    // U's second column is four times its first; V is a valid basis whose
    // span meets span(U) non-trivially, so the rank check is actually
    // reached.
    let u: Mat<f64> = mat![
        [1.0, 4.0],
        [-1.0, -4.0],
        [0.0, 0.0],
        [1.0, 4.0],
    ];
    let v: Mat<f64> = mat![
        [5.0, 0.0],
        [0.0, 5.0],
        [-3.0, -3.0],
        [3.0, -2.0],
    ];
    let err = intersection_basis(u.as_ref(), v.as_ref()).unwrap_err();
    assert!(err.is_not_full_rank());
}

#[test]
fn test_mismatched_row_counts_are_rejected() {
    let u: Mat<f64> = mat![
        [1.0, 4.0],
        [-1.0, -4.0],
        [0.0, 0.0],
        [1.0, 0.0],
    ];
    let v: Mat<f64> = mat![[5.0, 0.0], [0.0, 5.0], [-3.0, -3.0]];
    let err = intersection_basis(u.as_ref(), v.as_ref()).unwrap_err();
    assert!(err.is_dimension_mismatch());
}

#[test]
fn test_wide_basis_spanning_whole_space() -> Result<()> {
    // U has more columns than rows but full rank, so span(U) is all of R^3
    // and the intersection is span(V). The reduction produces rows that
    // vanish entirely (dependencies among U's columns); they must not leak
    // into the basis.
    let mut rng = StdRng::seed_from_u64(11);
    let u = random_basis(3, 4, &mut rng);
    let v = random_basis(3, 2, &mut rng);

    let w = intersection_basis(u.as_ref(), v.as_ref())?;
    ensure!(
        w.numerical_rank()? == 2,
        "Intersection with the whole space must be span(V).",
    );
    verify_intersection(&u, &v, &w)
}

#[test]
fn test_nested_subspaces_intersect_in_the_smaller() -> Result<()> {
    // span(U) is a subspace of span(V), so the intersection is span(U)
    // itself.
    let mut rng = StdRng::seed_from_u64(3);
    let v = random_basis(12, 6, &mut rng);
    // U's columns are random combinations of V's columns.
    let coeffs = random_basis(6, 3, &mut rng);
    let u = &v * &coeffs;

    let w = intersection_basis(u.as_ref(), v.as_ref())?;
    ensure!(w.numerical_rank()? == 3, "Intersection must be all of span(U).");
    verify_intersection(&u, &v, &w)
}
