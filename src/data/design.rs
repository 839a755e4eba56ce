//! Design-matrix construction.

use faer::{Col, Mat};

use super::columns::Column;
use super::dataset::Dataset;

/// Build the design matrix `[const=1, YOUTUBE, FACEBOOK, NEWSPAPER]`.
///
/// Pure function: deterministic, preserves dataset row order, and is rebuilt
/// identically wherever it is needed (fit and diagnostics). The intercept
/// column comes first; the fitter never adds another one.
pub fn design_matrix(dataset: &Dataset) -> Mat<f64> {
    let n = dataset.n_rows();

    Mat::from_fn(n, Column::PREDICTORS.len() + 1, |i, j| {
        if j == 0 {
            1.0
        } else {
            dataset.column(Column::PREDICTORS[j - 1])[i]
        }
    })
}

/// Extract the response vector (`SALES`) in dataset row order.
pub fn response(dataset: &Dataset) -> Col<f64> {
    Col::from_fn(dataset.n_rows(), |i| dataset.column(Column::Sales)[i])
}
