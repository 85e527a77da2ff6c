//! Zassenhaus algorithm for computing a basis of the intersection of two
//! vector subspaces.
//!
//! This crate implements the classical Zassenhaus construction for two
//! subspaces of R^n, each given as the column span of a dense matrix with
//! linearly independent columns. The result is an exact-by-construction basis
//! of `span(U) ∩ span(V)` (not an approximate projection), obtained from the
//! reduced row-echelon form of a block matrix built out of the two bases.
//!
//! Built on the [`faer`] linear algebra framework, the implementation
//! operates on dense `f64` matrices and uses `faer`'s SVD for the rank
//! decisions that drive the algorithm.
//!
//! ## Algorithm
//!
//! Given `U` (n×m1) and `V` (n×m2), the engine runs four ordered stages:
//!
//! 1. **Validation**: the ambient dimension must be at least 2, both matrices
//!    must share their row count, and both must be full rank. Violations
//!    surface as typed [`error::ZassenhausError`] values before any reduction
//!    work happens.
//! 2. **Dimension estimate**: the expected intersection dimension is
//!    `k = rank(U) + rank(V) − rank([U|V])`. When `k = 0` the engine
//!    short-circuits and returns the zero sentinel without reducing anything.
//! 3. **Block reduction**: the `(m1+m2) × 2n` matrix `[[Uᵗ | Uᵗ], [Vᵗ | 0]]`
//!    is brought to reduced row-echelon form by Gauss–Jordan elimination with
//!    partial pivoting.
//! 4. **Extraction**: rows whose left block vanished encode the relations
//!    lying in both spans; their right blocks, transposed, are the basis.
//!    The number of such rows is cross-checked against `k`.
//!
//! ## Numerical tolerances
//!
//! Three thresholds govern the floating-point behavior, each documented where
//! it is defined: the relative SVD rank tolerance
//! ([`rank::rank_tolerance`]), the pivot threshold of the reduction
//! ([`algorithms::pivot_tolerance`]), and the zero-row threshold of the
//! extraction ([`algorithms::ZERO_ROW_TOLERANCE`]). Rank decisions all flow
//! through one routine so the validation and estimation stages cannot
//! disagree with each other.
//!
//! ## Example Usage
//!
//! Two planes in R^4 that meet in a line:
//!
//! ```rust
//! use faer::mat;
//! use zassenhaus_project::intersection_basis;
//!
//! // Columns are the basis vectors of each subspace.
//! let u = mat![
//!     [1.0, 0.0],
//!     [-1.0, 0.0],
//!     [0.0, 1.0],
//!     [1.0, -1.0],
//! ];
//! let v = mat![
//!     [5.0, 0.0],
//!     [0.0, 5.0],
//!     [-3.0, -3.0],
//!     [3.0, -2.0],
//! ];
//!
//! let w = intersection_basis(u.as_ref(), v.as_ref()).unwrap();
//!
//! // The intersection is the line spanned by (1, -1, 0, 1).
//! assert_eq!(w.nrows(), 4);
//! assert_eq!(w.ncols(), 1);
//! let scale = w[(0, 0)];
//! assert!((w[(1, 0)] + scale).abs() < 1e-8);
//! assert!(w[(2, 0)].abs() < 1e-8);
//! assert!((w[(3, 0)] - scale).abs() < 1e-8);
//! ```
//!
//! A trivial intersection returns the `n × 1` zero-column sentinel rather
//! than an `n × 0` matrix:
//!
//! ```rust
//! use faer::{mat, prelude::*};
//! use zassenhaus_project::intersection_basis;
//!
//! let u = mat![[1.0], [0.0], [0.0]];
//! let v = mat![[0.0], [1.0], [0.0]];
//!
//! let w = intersection_basis(u.as_ref(), v.as_ref()).unwrap();
//! assert_eq!((w.nrows(), w.ncols()), (3, 1));
//! assert!(w.norm_l2() < 1e-12);
//! ```
//!
//! ## Performance Characteristics
//!
//! The computation is single-threaded, synchronous, and stateless; it is safe
//! to call concurrently with independent inputs. The dominant cost is the
//! row reduction, roughly cubic in `max(m1 + m2, n)`; the SVD-based rank
//! queries are of the same order but carried out on the smaller input
//! matrices.

// Declare the modules that form the crate's API structure.
pub mod algorithms;
pub mod error;
pub mod rank;
pub mod solvers;
pub mod utils;

// Re-export the main API for convenient access.
pub use error::ZassenhausError;
pub use solvers::intersection_basis;
