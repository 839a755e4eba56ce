//! Goldfeld-Quandt test for heteroskedasticity.

use faer::{Col, Mat};
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

use crate::diagnostics::DiagnosticError;
use crate::solvers::{FittedRegressor, OlsRegressor, Regressor};

/// Alternative hypothesis reported with the test: residual variance
/// increasing with row index.
const ORDERING: &str = "increasing";

/// Result of the Goldfeld-Quandt test.
#[derive(Debug, Clone, Serialize)]
pub struct GoldfeldQuandtResult {
    /// Ratio of the two subsample residual mean squares (high / low).
    #[serde(rename = "fValue")]
    pub f_value: f64,

    /// Upper-tail p-value under the "increasing" alternative.
    #[serde(rename = "pValue")]
    pub p_value: f64,

    /// The ordering criterion the split was taken under.
    pub order: &'static str,
}

/// Goldfeld-Quandt split-sample variance comparison.
///
/// Observations are split at `n / 2` in dataset row order (no re-sorting),
/// OLS is fit separately on each half, and the residual mean squares are
/// compared:
///
/// F = mse_resid(high half) / mse_resid(low half)
///
/// with an F(df_high, df_low) upper-tail p-value, matching statsmodels'
/// `het_goldfeldquandt` defaults.
pub fn goldfeld_quandt(x: &Mat<f64>, y: &Col<f64>) -> Result<GoldfeldQuandtResult, DiagnosticError> {
    let n = x.nrows();
    let k = x.ncols();
    let split = n / 2;

    // Each half must leave positive residual degrees of freedom.
    if split <= k || n - split <= k {
        return Err(DiagnosticError::InsufficientObservations {
            test: "Goldfeld-Quandt",
            needed: 2 * (k + 1),
            got: n,
        });
    }

    let x_low = Mat::from_fn(split, k, |i, j| x[(i, j)]);
    let y_low = Col::from_fn(split, |i| y[i]);
    let x_high = Mat::from_fn(n - split, k, |i, j| x[(split + i, j)]);
    let y_high = Col::from_fn(n - split, |i| y[split + i]);

    let low = OlsRegressor::new()
        .fit(&x_low, &y_low)
        .map_err(|source| DiagnosticError::Regression {
            test: "Goldfeld-Quandt",
            source,
        })?;
    let high = OlsRegressor::new()
        .fit(&x_high, &y_high)
        .map_err(|source| DiagnosticError::Regression {
            test: "Goldfeld-Quandt",
            source,
        })?;

    let low = low.result();
    let high = high.result();

    let f_value = high.mse_resid() / low.mse_resid();

    let df_high = high.residual_df() as f64;
    let df_low = low.residual_df() as f64;
    let f_dist = FisherSnedecor::new(df_high, df_low).ok();
    let p_value = f_dist.map_or(f64::NAN, |d| 1.0 - d.cdf(f_value));

    Ok(GoldfeldQuandtResult {
        f_value,
        p_value,
        order: ORDERING,
    })
}
