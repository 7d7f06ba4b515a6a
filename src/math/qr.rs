use crate::math::linalg::{identity, norm2, norm_inf, Matrix};

/// A = Q R with Q orthogonal and R upper triangular.
#[derive(Debug, Clone)]
pub struct Qr {
    pub q: Matrix,
    pub r: Matrix,
}

/// Householder QR of a square matrix.
///
/// Each step builds H = I - 2 v v^T zeroing the subdiagonal of one column
/// of R, and accumulates Q = H_1 H_2 ... H_k from the right.
pub fn qr_decompose(a: &[Vec<f64>]) -> Qr {
    let n = a.len();
    let mut q = identity(n);
    let mut r = a.to_vec();

    for col in 0..n.saturating_sub(1) {
        let mut v: Vec<f64> = (col..n).map(|i| r[i][col]).collect();

        // Only an exactly zero tail is skipped. Dividing by the largest entry
        // keeps the norm of tiny or huge columns from under- or overflowing.
        let scale = norm_inf(&v);
        if scale == 0.0 {
            continue;
        }
        for vi in v.iter_mut() {
            *vi /= scale;
        }

        // v = x + sign(x0) |x| e1, sign(0) taken as +1
        let norm_x = norm2(&v);
        let sign = if v[0] >= 0.0 { 1.0 } else { -1.0 };
        v[0] += sign * norm_x;
        let norm_v = norm2(&v);
        for vi in v.iter_mut() {
            *vi /= norm_v;
        }

        // R <- H R
        for j in col..n {
            let mut dot = 0.0;
            for i in col..n {
                dot += v[i - col] * r[i][j];
            }
            for i in col..n {
                r[i][j] -= 2.0 * dot * v[i - col];
            }
        }
        // Reduced column: what is left below the diagonal is rounding noise
        for row in r.iter_mut().skip(col + 1) {
            row[col] = 0.0;
        }

        // Q <- Q H
        for row in q.iter_mut() {
            let mut qv = 0.0;
            for j in col..n {
                qv += row[j] * v[j - col];
            }
            for j in col..n {
                row[j] -= 2.0 * qv * v[j - col];
            }
        }
    }

    Qr { q, r }
}
