use crate::error::{EigenError, Result};

/// Dense row-major matrix, one `Vec<f64>` per row.
pub type Matrix = Vec<Vec<f64>>;

/// Returns the dimension of `a`, or an error if it is empty or not square.
pub fn square_dim(a: &[Vec<f64>]) -> Result<usize> {
    let n = a.len();
    if n == 0 {
        return Err(EigenError::EmptyMatrix);
    }
    for (row, r) in a.iter().enumerate() {
        if r.len() != n {
            return Err(EigenError::NotSquare {
                row,
                expected: n,
                found: r.len(),
            });
        }
    }
    Ok(n)
}

/// y = A x
pub fn mat_vec(a: &[Vec<f64>], x: &[f64]) -> Vec<f64> {
    let n = a.len();
    let mut y = vec![0.0; n];
    for i in 0..n {
        let mut sum = 0.0;
        for (aij, xj) in a[i].iter().zip(x) {
            sum += aij * xj;
        }
        y[i] = sum;
    }
    y
}

/// C = A B for square matrices of equal size.
pub fn mat_mul(a: &[Vec<f64>], b: &[Vec<f64>]) -> Matrix {
    let n = a.len();
    let mut c = vec![vec![0.0; n]; n];
    for i in 0..n {
        for k in 0..n {
            let aik = a[i][k];
            if aik == 0.0 {
                continue;
            }
            for j in 0..n {
                c[i][j] += aik * b[k][j];
            }
        }
    }
    c
}

pub fn diagonal(a: &[Vec<f64>]) -> Vec<f64> {
    a.iter().enumerate().map(|(i, row)| row[i]).collect()
}

pub fn identity(n: usize) -> Matrix {
    let mut m = vec![vec![0.0; n]; n];
    for (i, row) in m.iter_mut().enumerate() {
        row[i] = 1.0;
    }
    m
}

/// Largest absolute component.
pub fn norm_inf(x: &[f64]) -> f64 {
    x.iter().fold(0.0, |acc: f64, v| acc.max(v.abs()))
}

pub fn norm2(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum::<f64>().sqrt()
}

pub fn norm1(x: &[f64]) -> f64 {
    x.iter().map(|v| v.abs()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_dim_rejects_ragged_rows() {
        let a = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(
            square_dim(&a),
            Err(EigenError::NotSquare { row: 1, expected: 2, found: 1 })
        );
        assert_eq!(square_dim(&[]), Err(EigenError::EmptyMatrix));
        assert_eq!(square_dim(&[vec![4.0]]), Ok(1));
    }

    #[test]
    fn products_and_norms() {
        let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert_eq!(mat_vec(&a, &[1.0, -1.0]), vec![-1.0, -1.0]);
        assert_eq!(mat_mul(&a, &identity(2)), a);
        assert_eq!(mat_mul(&a, &a), vec![vec![7.0, 10.0], vec![15.0, 22.0]]);
        assert_eq!(diagonal(&a), vec![1.0, 4.0]);

        let v = [3.0, -4.0, 0.0];
        assert_eq!(norm_inf(&v), 4.0);
        assert_eq!(norm2(&v), 5.0);
        assert_eq!(norm1(&v), 7.0);
    }
}
