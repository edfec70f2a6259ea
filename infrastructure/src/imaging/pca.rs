//! Principal component analysis over a single matrix.
//!
//! Rows are samples, columns are features. Components are ordered by
//! decreasing explained variance and sign-normalized so that the loading with
//! the largest magnitude is positive, which makes the projection
//! deterministic for a given input.

use nalgebra::{DMatrix, SymmetricEigen};
use thiserror::Error;

const EIGEN_EPS: f64 = 1.0e-12;
const EIGEN_MAX_ITER: usize = 10_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PcaError {
    #[error("Requested {requested} components but at most {max} are available")]
    TooManyComponents { requested: usize, max: usize },

    #[error("Eigendecomposition did not converge")]
    NotConverged,
}

/// Fit PCA on `data` and project it onto the leading `n_components` axes.
///
/// Returns an `n_samples × n_components` matrix.
pub fn fit_transform(data: &DMatrix<f64>, n_components: usize) -> Result<DMatrix<f64>, PcaError> {
    let (n_samples, n_features) = data.shape();
    let max = n_samples.min(n_features);
    if n_components == 0 || n_components > max {
        return Err(PcaError::TooManyComponents {
            requested: n_components,
            max,
        });
    }

    let mut centered = data.clone();
    for mut column in centered.column_iter_mut() {
        let mean = column.mean();
        column.add_scalar_mut(-mean);
    }

    // Scatter matrix; the 1/(n-1) factor does not change the eigenvectors.
    let scatter = centered.transpose() * &centered;
    let eigen = SymmetricEigen::try_new(scatter, EIGEN_EPS, EIGEN_MAX_ITER)
        .ok_or(PcaError::NotConverged)?;

    let mut order: Vec<usize> = (0..n_features).collect();
    order.sort_by(|&a, &b| eigen.eigenvalues[b].total_cmp(&eigen.eigenvalues[a]));

    let mut components = DMatrix::<f64>::zeros(n_features, n_components);
    for (k, &idx) in order.iter().take(n_components).enumerate() {
        let axis = eigen.eigenvectors.column(idx);
        let sign = match axis.iamax() {
            i if axis[i] < 0.0 => -1.0,
            _ => 1.0,
        };
        components.set_column(k, &(axis * sign));
    }

    Ok(centered * components)
}

/// Flatten a matrix row by row
pub fn flatten_rows(matrix: &DMatrix<f64>) -> Vec<f64> {
    matrix
        .row_iter()
        .flat_map(|row| row.iter().copied().collect::<Vec<_>>())
        .collect()
}
