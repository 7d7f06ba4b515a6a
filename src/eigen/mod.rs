//! Iterative eigenvalue routines.
//!
//! All three share one control pattern: apply an update rule, measure the
//! change in the estimate, stop when the change drops to `tol` or after
//! `max_iter` updates. Hitting the cap is reported through `converged`,
//! never as an error.
//!
//! None of the routines handle complex eigenvalues. The power family needs a
//! strictly dominant eigenvalue (of A, or of A^-1 for the inverse variant);
//! QR iteration needs a real spectrum with distinct magnitudes.

pub mod inverse;
pub mod power;
pub mod qr_iteration;

use serde::Serialize;

use crate::config::{IterationConfig, PivotPolicy};
use crate::error::{EigenError, Result};
use crate::math::linalg::norm_inf;

pub use inverse::inverse_power_iteration;
pub use power::power_iteration;
pub use qr_iteration::qr_iteration;

/// Eigenvalue estimate with its eigenvector, scaled to unit infinity norm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EigenPair {
    pub value: f64,
    pub vector: Vec<f64>,
    pub iterations: usize,
    pub converged: bool,
}

/// Diagonal of the final QR working matrix, in diagonal order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spectrum {
    pub values: Vec<f64>,
    pub iterations: usize,
    pub converged: bool,
}

/// Raw outcome of the ratio iteration, before any reciprocal is taken.
pub(crate) struct RatioOutcome {
    pub lambda: f64,
    pub vector: Vec<f64>,
    pub iterations: usize,
    pub converged: bool,
}

pub(crate) fn check_start_vector(n: usize, x0: &[f64]) -> Result<()> {
    if x0.len() != n {
        return Err(EigenError::DimensionMismatch {
            expected: n,
            found: x0.len(),
        });
    }
    if x0.iter().all(|v| *v == 0.0) {
        return Err(EigenError::ZeroStartVector);
    }
    Ok(())
}

/// Index of the maximum entry, first one on ties.
fn argmax(x: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in x.iter().enumerate().skip(1) {
        if *v > x[best] {
            best = i;
        }
    }
    best
}

/// Index of the largest-magnitude entry, first one on ties.
fn argmax_abs(x: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in x.iter().enumerate().skip(1) {
        if v.abs() > x[best].abs() {
            best = i;
        }
    }
    best
}

/// Drives x_{k+1} = step(x_k) with the eigenvalue estimate x_{k+1}[j] / x_k[j].
///
/// Iterates are not rescaled between steps. The returned vector is
/// (x_k / lambda^k) / ||x_k / lambda^k||_inf; when lambda^k over- or underflows
/// this produces NaN components. A zero pivot component likewise yields an
/// infinite or NaN estimate. Both are left unguarded.
pub(crate) fn ratio_iteration<F>(
    x0: &[f64],
    config: &IterationConfig,
    mut step: F,
) -> RatioOutcome
where
    F: FnMut(&[f64]) -> Vec<f64>,
{
    let mut pivot = argmax(x0);
    let mut x_prev = x0.to_vec();
    let mut x_next = x0.to_vec();
    let mut lambda_prev = 0.0;
    let mut lambda = 0.0;
    let mut err = config.tol + 1.0;
    let mut k = 0usize;

    while err > config.tol && k < config.max_iter {
        if config.pivot == PivotPolicy::Recompute {
            pivot = argmax_abs(&x_prev);
        }
        x_next = step(&x_prev);
        lambda = x_next[pivot] / x_prev[pivot];
        err = (lambda_prev - lambda).abs();

        k += 1;
        lambda_prev = lambda;
        x_prev.clone_from(&x_next);
    }

    let scale = lambda.powf(k as f64);
    let scaled: Vec<f64> = x_next.iter().map(|v| v / scale).collect();
    let norm = norm_inf(&scaled);
    let vector = scaled.iter().map(|v| v / norm).collect();

    RatioOutcome {
        lambda,
        vector,
        iterations: k,
        converged: err <= config.tol,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pivots_prefer_the_first_index_on_ties() {
        assert_eq!(argmax(&[1.0, 1.0, 1.0]), 0);
        assert_eq!(argmax(&[-5.0, 2.0, 2.0]), 1);
        assert_eq!(argmax_abs(&[-5.0, 2.0, 5.0]), 0);
    }

    #[test]
    fn start_vector_is_validated() {
        assert_eq!(
            check_start_vector(3, &[1.0, 2.0]),
            Err(EigenError::DimensionMismatch { expected: 3, found: 2 })
        );
        assert_eq!(
            check_start_vector(2, &[0.0, 0.0]),
            Err(EigenError::ZeroStartVector)
        );
        assert!(check_start_vector(2, &[0.0, -1.0]).is_ok());
    }
}
