use crate::config::IterationConfig;
use crate::eigen::Spectrum;
use crate::error::Result;
use crate::math::linalg::{diagonal, mat_mul, norm2, square_dim};
use crate::math::qr::{qr_decompose, Qr};

/// Approximates every eigenvalue of `a` with unshifted QR iteration.
///
/// T_0 = A, T_{k+1} = R_k Q_k where T_k = Q_k R_k. Stops when the Euclidean
/// norm of the change in diag(T) is at most `config.tol`. Values come back in
/// diagonal order, not sorted. With complex pairs or tied magnitudes the
/// diagonal need not settle and only the cap ends the loop.
///
/// `config.pivot` has no effect here.
pub fn qr_iteration(a: &[Vec<f64>], config: &IterationConfig) -> Result<Spectrum> {
    config.check()?;
    square_dim(a)?;

    let mut t = a.to_vec();
    let mut eigs = diagonal(&t);
    let mut err = config.tol + 1.0;
    let mut k = 0usize;

    while err > config.tol && k < config.max_iter {
        let eig0 = std::mem::take(&mut eigs);
        let Qr { q, r } = qr_decompose(&t);
        t = mat_mul(&r, &q);
        eigs = diagonal(&t);

        let diff: Vec<f64> = eigs.iter().zip(&eig0).map(|(e, e0)| e - e0).collect();
        err = norm2(&diff);
        k += 1;
    }

    let converged = err <= config.tol;
    if converged {
        tracing::debug!(iterations = k, "QR iteration converged");
    } else {
        tracing::warn!(iterations = k, residual = err, "QR iteration hit the iteration cap before converging");
    }

    Ok(Spectrum {
        values: eigs,
        iterations: k,
        converged,
    })
}
