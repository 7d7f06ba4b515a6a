use crate::config::IterationConfig;
use crate::eigen::{check_start_vector, ratio_iteration, EigenPair};
use crate::error::Result;
use crate::math::linalg::{mat_vec, square_dim};

/// Dominant (largest-magnitude) eigenvalue of `a` and its eigenvector.
///
/// Repeatedly multiplies `x0` by `a`, estimating the eigenvalue as the ratio
/// of consecutive iterates at a pivot component (see [`crate::PivotPolicy`]).
/// Stops once consecutive estimates differ by at most `config.tol` or after
/// `config.max_iter` products.
pub fn power_iteration(a: &[Vec<f64>], x0: &[f64], config: &IterationConfig) -> Result<EigenPair> {
    config.check()?;
    let n = square_dim(a)?;
    check_start_vector(n, x0)?;

    let out = ratio_iteration(x0, config, |x| mat_vec(a, x));

    if out.converged {
        tracing::debug!(iterations = out.iterations, eigenvalue = out.lambda, "power iteration converged");
    } else {
        tracing::warn!(
            iterations = out.iterations,
            eigenvalue = out.lambda,
            "power iteration hit the iteration cap before converging"
        );
    }

    Ok(EigenPair {
        value: out.lambda,
        vector: out.vector,
        iterations: out.iterations,
        converged: out.converged,
    })
}
