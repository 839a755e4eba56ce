//! Ramsey RESET test for functional-form misspecification.

use faer::{Col, Mat};
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

use crate::core::RegressionResult;
use crate::diagnostics::DiagnosticError;
use crate::solvers::{FittedRegressor, OlsRegressor, Regressor};

/// Result of the RESET test.
#[derive(Debug, Clone, Serialize)]
pub struct ResetResult {
    /// F-statistic of the restricted-vs-augmented comparison.
    #[serde(rename = "fValue")]
    pub f_value: f64,

    /// Upper-tail p-value of the F-statistic.
    #[serde(rename = "pValue")]
    pub p_value: f64,

    /// Maximum power of the fitted values included in the augmentation.
    #[serde(rename = "resetPower")]
    pub power: usize,
}

/// Ramsey's Regression Equation Specification Error Test.
///
/// Augments the design matrix with powers `2..=power` of the fitted values,
/// re-fits, and compares the two residual sums of squares with an F-test:
///
/// F = ((rss₀ − rss₁) / (power − 1)) / (rss₁ / df_resid₁)
///
/// A significant statistic indicates omitted nonlinear terms.
pub fn ramsey_reset(
    result: &RegressionResult,
    x: &Mat<f64>,
    y: &Col<f64>,
    power: usize,
) -> Result<ResetResult, DiagnosticError> {
    if power < 2 {
        return Err(DiagnosticError::InvalidPower(power));
    }

    let n = result.n_observations;
    let k = x.ncols();
    let n_powers = power - 1;

    let x_aug = Mat::from_fn(n, k + n_powers, |i, j| {
        if j < k {
            x[(i, j)]
        } else {
            // Powers 2..=power of the fitted values, in ascending order.
            result.fitted_values[i].powi((j - k + 2) as i32)
        }
    });

    let augmented = OlsRegressor::new()
        .fit(&x_aug, y)
        .map_err(|source| DiagnosticError::Regression {
            test: "RESET",
            source,
        })?;
    let augmented = augmented.result();

    let df_num = n_powers as f64;
    let df_den = augmented.residual_df() as f64;

    let f_value = ((result.rss - augmented.rss) / df_num) / (augmented.rss / df_den);
    let f_dist = FisherSnedecor::new(df_num, df_den).ok();
    let p_value = f_dist.map_or(f64::NAN, |d| 1.0 - d.cdf(f_value));

    Ok(ResetResult {
        f_value,
        p_value,
        power,
    })
}
