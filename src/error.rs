//! This module defines the custom error types for the library.
//!
//! All failure conditions of the subspace-intersection pipeline are collected
//! into a single enum wrapped by the public [`ZassenhausError`] type.
//!
//! Using the [`thiserror`] crate allows us to create idiomatic error types with
//! minimal boilerplate. The SVD routine used for rank computation reports its
//! failure through a type that does not implement the standard
//! [`std::error::Error`] trait, so that condition is represented by a dedicated
//! variant rather than a wrapped source error.
use thiserror::Error;

/// Represents all possible errors that can occur while computing an
/// intersection basis.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ZassenhausError(#[from] ZassenhausErrorKind);

/// Private enum containing the distinct kinds of errors.
/// This separation allows for a clean `Display` implementation via
/// [`thiserror`] while keeping the set of variants free to evolve.
#[derive(Error, Debug, PartialEq)]
pub(crate) enum ZassenhausErrorKind {
    /// The ambient space must have dimension at least 2 for the block
    /// construction to be meaningful.
    #[error("Ambient dimension must be at least 2, but the basis matrices have {n} row(s).")]
    InvalidDimension { n: usize },

    /// The two basis matrices must be embedded in the same ambient space,
    /// i.e. share their row count.
    #[error(
        "Basis matrices do not share an ambient dimension: U has {u_rows} rows but V has {v_rows}."
    )]
    DimensionMismatch { u_rows: usize, v_rows: usize },

    /// A basis matrix has linearly dependent columns, so its columns do not
    /// form a basis of its column span.
    #[error("Basis matrix {name} is not full rank: numerical rank {rank} with {cols} column(s).")]
    NotFullRank {
        name: &'static str,
        rank: usize,
        cols: usize,
    },

    /// The singular value decomposition used for rank computation did not
    /// converge.
    #[error("SVD failed to converge while computing a matrix rank.")]
    SvdNoConvergence,

    /// The number of zero-left-block rows in the echelon form disagrees with
    /// the intersection dimension predicted by the rank formula. This points
    /// at a tolerance or arithmetic inconsistency, never at invalid input.
    #[error(
        "Echelon form exposed {found} zero row(s) in the left block, but the rank formula predicts an intersection of dimension {expected}."
    )]
    InconsistentReduction { expected: usize, found: usize },
}

impl ZassenhausError {
    /// Returns `true` if this error reports an ambient dimension below 2.
    pub fn is_invalid_dimension(&self) -> bool {
        matches!(self.0, ZassenhausErrorKind::InvalidDimension { .. })
    }

    /// Returns `true` if this error reports basis matrices with different
    /// row counts.
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self.0, ZassenhausErrorKind::DimensionMismatch { .. })
    }

    /// Returns `true` if this error reports a rank-deficient basis matrix.
    pub fn is_not_full_rank(&self) -> bool {
        matches!(self.0, ZassenhausErrorKind::NotFullRank { .. })
    }

    /// Returns `true` if this error reports an internal consistency failure
    /// between the rank formula and the echelon reduction.
    pub fn is_inconsistent_reduction(&self) -> bool {
        matches!(self.0, ZassenhausErrorKind::InconsistentReduction { .. })
    }
}

// Manually implement PartialEq for the public error type.
// We compare the inner `ZassenhausErrorKind`.
impl PartialEq for ZassenhausError {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
