//! Power, inverse power and basic QR iteration for real dense matrices.

pub mod config;
pub mod eigen;
pub mod error;
pub mod io;
pub mod math;
pub mod pagerank;

pub use config::{IterationConfig, PivotPolicy};
pub use eigen::{inverse_power_iteration, power_iteration, qr_iteration, EigenPair, Spectrum};
pub use error::{EigenError, Result};
pub use math::linalg::Matrix;
pub use pagerank::{google_matrix, stationary_distribution, StationaryDistribution};
