//! Matrix utility functions.

use faer::Mat;

/// Detect columns that are constant (zero variance).
pub fn detect_constant_columns(x: &Mat<f64>, tolerance: f64) -> Vec<bool> {
    let n_cols = x.ncols();
    let n_rows = x.nrows();

    if n_rows == 0 {
        return vec![true; n_cols];
    }

    let mut constant = vec![false; n_cols];

    for j in 0..n_cols {
        let first = x[(0, j)];
        let all_same = (1..n_rows).all(|i| (x[(i, j)] - first).abs() < tolerance);
        constant[j] = all_same;
    }

    constant
}

/// Whether any column of `x` is a non-zero constant.
///
/// Determines which total sum of squares the R² calculation uses: centered
/// when a constant is present, uncentered otherwise. This mirrors how
/// statsmodels detects an implicit intercept in an exog matrix.
pub fn has_constant_column(x: &Mat<f64>, tolerance: f64) -> bool {
    detect_constant_columns(x, tolerance)
        .iter()
        .enumerate()
        .any(|(j, &is_const)| is_const && x.nrows() > 0 && x[(0, j)].abs() > tolerance)
}
