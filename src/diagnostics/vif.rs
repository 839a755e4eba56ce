//! Variance Inflation Factors for multicollinearity detection.

use faer::{Col, Mat};

use crate::diagnostics::DiagnosticError;
use crate::solvers::{FittedRegressor, OlsRegressor, Regressor};

/// Compute the Variance Inflation Factor for every design-matrix column,
/// intercept included.
///
/// For column j:
///
/// VIF_j = 1 / (1 - R²_j)
///
/// where R²_j comes from regressing column j on all other design-matrix
/// columns, without adding another constant. When column j is the intercept
/// the remaining columns carry no constant, so that auxiliary R² is
/// uncentered, matching statsmodels' `variance_inflation_factor`.
///
/// Returns one value per column, in design-matrix column order.
pub fn variance_inflation_factors(x: &Mat<f64>) -> Result<Vec<f64>, DiagnosticError> {
    let n = x.nrows();
    let k = x.ncols();

    if k < 2 {
        return Err(DiagnosticError::InsufficientObservations {
            test: "VIF",
            needed: 2,
            got: k,
        });
    }

    let mut vifs = Vec::with_capacity(k);

    for j in 0..k {
        let x_other = Mat::from_fn(n, k - 1, |i, c| {
            let source = if c < j { c } else { c + 1 };
            x[(i, source)]
        });
        let y_j = Col::from_fn(n, |i| x[(i, j)]);

        let fitted = OlsRegressor::new()
            .fit(&x_other, &y_j)
            .map_err(|source| DiagnosticError::Regression { test: "VIF", source })?;

        let r_squared = fitted.r_squared();
        let vif = if r_squared < 1.0 - 1e-14 {
            (1.0 / (1.0 - r_squared)).max(1.0)
        } else {
            f64::INFINITY
        };

        vifs.push(vif);
    }

    Ok(vifs)
}
