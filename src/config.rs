use serde::{Deserialize, Serialize};

use crate::error::{EigenError, Result};

/// How the power-method family picks the component used for the eigenvalue ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotPolicy {
    /// Index of the maximum entry of the starting vector, chosen once.
    ///
    /// If that entry stops being representative of the dominant eigenvector
    /// the ratio can divide by a near-zero component.
    #[default]
    Fixed,
    /// Index of the largest-magnitude entry of the current iterate, re-chosen every step.
    Recompute,
}

/// Stopping rule shared by all three routines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IterationConfig {
    pub tol: f64,
    pub max_iter: usize,
    #[serde(default)]
    pub pivot: PivotPolicy,
}

impl Default for IterationConfig {
    fn default() -> Self {
        Self {
            tol: 1e-10,
            max_iter: 1000,
            pivot: PivotPolicy::Fixed,
        }
    }
}

impl IterationConfig {
    pub fn new(tol: f64, max_iter: usize) -> Self {
        Self {
            tol,
            max_iter,
            pivot: PivotPolicy::Fixed,
        }
    }

    pub fn with_pivot(mut self, pivot: PivotPolicy) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn check(&self) -> Result<()> {
        if !(self.tol > 0.0 && self.tol.is_finite()) {
            return Err(EigenError::InvalidTolerance(self.tol));
        }
        if self.max_iter == 0 {
            return Err(EigenError::InvalidIterationCap);
        }
        Ok(())
    }
}
