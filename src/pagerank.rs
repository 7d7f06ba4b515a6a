//! Stationary distribution of a random surfer over a link graph.

use serde::Serialize;

use crate::config::IterationConfig;
use crate::eigen::power_iteration;
use crate::error::{EigenError, Result};
use crate::math::linalg::{norm1, square_dim, Matrix};

/// Column-stochastic Google matrix G = d M + (1 - d)/n.
///
/// `links[j]` lists the pages that page `j` links to. Column j of M spreads
/// 1/outdeg(j) over those targets; a page without out-links spreads 1/n over
/// every page. Duplicate links count once per occurrence.
pub fn google_matrix(links: &[Vec<usize>], damping: f64) -> Result<Matrix> {
    let n = links.len();
    if n == 0 {
        return Err(EigenError::EmptyMatrix);
    }
    if !(0.0..=1.0).contains(&damping) {
        return Err(EigenError::InvalidDamping(damping));
    }

    let teleport = (1.0 - damping) / n as f64;
    let mut g = vec![vec![teleport; n]; n];

    for (j, targets) in links.iter().enumerate() {
        if targets.is_empty() {
            for row in g.iter_mut() {
                row[j] += damping / n as f64;
            }
            continue;
        }
        let w = damping / targets.len() as f64;
        for &i in targets {
            if i >= n {
                return Err(EigenError::LinkOutOfRange { page: i, pages: n });
            }
            g[i][j] += w;
        }
    }
    Ok(g)
}

#[derive(Debug, Clone, Serialize)]
pub struct StationaryDistribution {
    /// Probability of each page; non-negative and summing to 1.
    pub ranks: Vec<f64>,
    pub eigenvalue: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Power iteration on `g` from the uniform vector, rescaled to unit 1-norm.
pub fn stationary_distribution(g: &[Vec<f64>], config: &IterationConfig) -> Result<StationaryDistribution> {
    let n = square_dim(g)?;
    let x0 = vec![1.0 / n as f64; n];
    let pair = power_iteration(g, &x0, config)?;

    let total = norm1(&pair.vector);
    let ranks = pair.vector.iter().map(|v| v / total).collect();

    Ok(StationaryDistribution {
        ranks,
        eigenvalue: pair.value,
        iterations: pair.iterations,
        converged: pair.converged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn columns_sum_to_one_including_dangling_pages() {
        let links = vec![vec![1, 2], vec![2], vec![], vec![0, 1, 2]];
        let g = google_matrix(&links, 0.85).expect("valid links");
        for j in 0..4 {
            let col: f64 = g.iter().map(|row| row[j]).sum();
            assert_abs_diff_eq!(col, 1.0, epsilon = 1e-14);
        }
        assert_abs_diff_eq!(g[3][2], 0.25, epsilon = 1e-14);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert_eq!(google_matrix(&[vec![0]], 1.5), Err(EigenError::InvalidDamping(1.5)));
        assert_eq!(
            google_matrix(&[vec![3], vec![]], 0.85),
            Err(EigenError::LinkOutOfRange { page: 3, pages: 2 })
        );
        assert_eq!(google_matrix(&[], 0.85), Err(EigenError::EmptyMatrix));
    }
}
