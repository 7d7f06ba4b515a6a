//! Error types for the eigenvalue routines and their collaborators.

use thiserror::Error;

/// Errors surfaced by the iteration routines.
///
/// Running out of iterations is not an error; see [`crate::EigenPair::converged`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EigenError {
    #[error("Matrix is empty")]
    EmptyMatrix,

    #[error("Matrix must be square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Dimension mismatch: expected length {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Starting vector must be non-zero")]
    ZeroStartVector,

    #[error("Tolerance must be positive and finite (got {0})")]
    InvalidTolerance(f64),

    #[error("Iteration cap must be at least 1")]
    InvalidIterationCap,

    /// Singular matrix detected during LU factorization.
    #[error("Singular matrix: pivot at index {pivot_index} is zero or too small (value: {value})")]
    SingularMatrix { pivot_index: usize, value: f64 },

    #[error("Damping factor must lie in [0, 1] (got {0})")]
    InvalidDamping(f64),

    #[error("Link target {page} is out of range for {pages} pages")]
    LinkOutOfRange { page: usize, pages: usize },
}

pub type Result<T> = std::result::Result<T, EigenError>;
