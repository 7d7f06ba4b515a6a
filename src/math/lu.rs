use crate::error::{EigenError, Result};
use crate::math::linalg::{square_dim, Matrix};

/// LU factorization with partial pivoting, P A = L U.
///
/// L (unit diagonal) and U are packed into one matrix; `perm[i]` is the row
/// of A that ended up in row i.
#[derive(Debug, Clone)]
pub struct LuFactorization {
    lu: Matrix,
    perm: Vec<usize>,
}

impl LuFactorization {
    /// Factorizes `a`, failing with [`EigenError::SingularMatrix`] on a zero pivot.
    ///
    /// A pivot counts as zero when it is at most `n * EPSILON * max|a_ij|`,
    /// so the test scales with the matrix.
    pub fn new(a: &[Vec<f64>]) -> Result<Self> {
        let n = square_dim(a)?;
        let max_abs = a.iter().flatten().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        let tiny = n as f64 * f64::EPSILON * max_abs;
        let mut lu = a.to_vec();
        let mut perm: Vec<usize> = (0..n).collect();

        for k in 0..n {
            // Largest magnitude in column k at or below the diagonal
            let mut pivot_row = k;
            let mut max_val = lu[k][k].abs();
            for i in (k + 1)..n {
                let val = lu[i][k].abs();
                if val > max_val {
                    max_val = val;
                    pivot_row = i;
                }
            }

            if max_val <= tiny {
                return Err(EigenError::SingularMatrix {
                    pivot_index: k,
                    value: max_val,
                });
            }

            if pivot_row != k {
                lu.swap(k, pivot_row);
                perm.swap(k, pivot_row);
            }

            let pivot = lu[k][k];
            for i in (k + 1)..n {
                let factor = lu[i][k] / pivot;
                lu[i][k] = factor;
                for j in (k + 1)..n {
                    lu[i][j] -= factor * lu[k][j];
                }
            }
        }

        Ok(Self { lu, perm })
    }

    pub fn dim(&self) -> usize {
        self.perm.len()
    }

    /// Solves A x = b with the stored factors.
    pub fn solve(&self, b: &[f64]) -> Vec<f64> {
        let n = self.dim();

        // L y = P b
        let mut x: Vec<f64> = self.perm.iter().map(|&p| b[p]).collect();
        for i in 0..n {
            let mut sum = x[i];
            for j in 0..i {
                sum -= self.lu[i][j] * x[j];
            }
            x[i] = sum;
        }

        // U x = y
        for i in (0..n).rev() {
            let mut sum = x[i];
            for j in (i + 1)..n {
                sum -= self.lu[i][j] * x[j];
            }
            x[i] = sum / self.lu[i][i];
        }
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::linalg::mat_vec;
    use approx::assert_relative_eq;

    #[test]
    fn solves_system_needing_a_row_swap() {
        let a = vec![
            vec![0.0, 2.0, 1.0],
            vec![1.0, 1.0, 0.0],
            vec![3.0, 0.0, 1.0],
        ];
        let lu = LuFactorization::new(&a).expect("non-singular");
        let x_true = [1.0, -2.0, 3.0];
        let b = mat_vec(&a, &x_true);
        let x = lu.solve(&b);
        for (xi, ti) in x.iter().zip(x_true.iter()) {
            assert_relative_eq!(*xi, *ti, epsilon = 1e-12);
        }
    }

    #[test]
    fn factors_are_reused_across_solves() {
        let a = vec![vec![4.0, 3.0], vec![6.0, 3.0]];
        let lu = LuFactorization::new(&a).expect("non-singular");
        for b in [[1.0, 0.0], [0.0, 1.0], [7.0, 9.0]] {
            let x = lu.solve(&b);
            let back = mat_vec(&a, &x);
            assert_relative_eq!(back[0], b[0], epsilon = 1e-12);
            assert_relative_eq!(back[1], b[1], epsilon = 1e-12);
        }
    }

    #[test]
    fn singular_matrix_is_rejected() {
        let a = vec![vec![1.0, 2.0], vec![2.0, 4.0]];
        match LuFactorization::new(&a) {
            Err(EigenError::SingularMatrix { pivot_index, .. }) => assert_eq!(pivot_index, 1),
            other => panic!("expected singular error, got {:?}", other),
        }
    }

    #[test]
    fn small_scale_matrix_is_not_singular() {
        let a: Matrix = vec![
            vec![0.0, 2e-15, 1e-15],
            vec![1e-15, 1e-15, 0.0],
            vec![3e-15, 0.0, 1e-15],
        ];
        let lu = LuFactorization::new(&a).expect("invertible at any scale");
        let x_true = [1.0, -2.0, 3.0];
        let x = lu.solve(&mat_vec(&a, &x_true));
        for (xi, ti) in x.iter().zip(x_true.iter()) {
            assert_relative_eq!(*xi, *ti, epsilon = 1e-10);
        }
    }

    #[test]
    fn zero_matrix_is_singular() {
        let a = vec![vec![0.0, 0.0], vec![0.0, 0.0]];
        assert_eq!(
            LuFactorization::new(&a).unwrap_err(),
            EigenError::SingularMatrix { pivot_index: 0, value: 0.0 }
        );
    }
}
