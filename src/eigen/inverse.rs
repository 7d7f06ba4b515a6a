use crate::config::IterationConfig;
use crate::eigen::{check_start_vector, ratio_iteration, EigenPair};
use crate::error::Result;
use crate::math::linalg::square_dim;
use crate::math::lu::LuFactorization;

/// Smallest-magnitude eigenvalue of `a` and its eigenvector.
///
/// Power iteration on A^-1: each step solves A x_{k+1} = x_k with one LU
/// factorization computed up front and dropped on return. The returned value is
/// the reciprocal of the converged ratio; the vector is normalized from the
/// ratio itself.
///
/// Fails with [`crate::EigenError::SingularMatrix`] when `a` is not invertible.
pub fn inverse_power_iteration(
    a: &[Vec<f64>],
    x0: &[f64],
    config: &IterationConfig,
) -> Result<EigenPair> {
    config.check()?;
    let n = square_dim(a)?;
    check_start_vector(n, x0)?;

    let lu = LuFactorization::new(a)?;
    let out = ratio_iteration(x0, config, |x| lu.solve(x));
    let value = 1.0 / out.lambda;

    if out.converged {
        tracing::debug!(iterations = out.iterations, eigenvalue = value, "inverse power iteration converged");
    } else {
        tracing::warn!(
            iterations = out.iterations,
            eigenvalue = value,
            "inverse power iteration hit the iteration cap before converging"
        );
    }

    Ok(EigenPair {
        value,
        vector: out.vector,
        iterations: out.iterations,
        converged: out.converged,
    })
}
