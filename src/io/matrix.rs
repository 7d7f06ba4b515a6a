use anyhow::Context;

use crate::math::linalg::Matrix;

/// Load a square matrix from CSV. Non-numeric cells (row labels, a header row)
/// are skipped; every remaining row must have the same number of numeric cells.
pub fn load_matrix_csv(path: &str) -> anyhow::Result<Matrix> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to open matrix CSV: {}", path))?;

    let mut matrix: Matrix = Vec::new();
    for (line, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Bad CSV record {} in {}", line + 1, path))?;
        let row: Vec<f64> = record
            .iter()
            .filter_map(|field| field.trim().parse::<f64>().ok())
            .collect();
        if !row.is_empty() {
            matrix.push(row);
        }
    }

    let n = matrix.len();
    anyhow::ensure!(n > 0, "matrix CSV {} is empty or unparsable", path);
    anyhow::ensure!(matrix.iter().all(|r| r.len() == n), "matrix in {} must be square (n x n)", path);
    Ok(matrix)
}
