//! Durbin-Watson statistic and Breusch-Godfrey test for residual
//! autocorrelation.

use faer::{Col, Mat};
use serde::Serialize;
use statrs::distribution::{ChiSquared, ContinuousCDF, FisherSnedecor};

use crate::core::RegressionResult;
use crate::diagnostics::DiagnosticError;
use crate::solvers::{FittedRegressor, OlsRegressor, Regressor};

/// Durbin-Watson statistic for first-order autocorrelation.
///
/// `Σ(e[t] - e[t-1])² / Σe[t]²` over residuals in dataset row order.
/// A plain statistic in [0, 4]; values near 2 indicate no autocorrelation.
/// No p-value is attached.
pub fn durbin_watson(residuals: &Col<f64>) -> f64 {
    let n = residuals.nrows();

    let mut numerator = 0.0;
    for t in 1..n {
        numerator += (residuals[t] - residuals[t - 1]).powi(2);
    }

    let denominator: f64 = residuals.iter().map(|&e| e.powi(2)).sum();
    numerator / denominator
}

/// Result of the Breusch-Godfrey test.
#[derive(Debug, Clone, Serialize)]
pub struct BreuschGodfreyResult {
    /// Lagrange-multiplier statistic `n · R²` of the auxiliary regression.
    #[serde(rename = "lagrangeMultiplier")]
    pub lagrange_multiplier: f64,

    /// Upper-tail χ²(nlags) p-value of the LM statistic.
    #[serde(rename = "lagrangeMultiplierPValue")]
    pub lagrange_multiplier_p_value: f64,

    /// F-form of the test statistic.
    #[serde(rename = "fValue")]
    pub f_value: f64,

    /// Upper-tail p-value of the F-form statistic.
    #[serde(rename = "pValue")]
    pub p_value: f64,

    /// Lag order of the alternative hypothesis.
    #[serde(rename = "bgNLags")]
    pub n_lags: usize,
}

/// Breusch-Godfrey test for autocorrelation up to order `nlags`.
///
/// Regresses the residuals on the original design matrix augmented with
/// lags 1..=nlags of the residuals (zero-padded at the start, so the
/// auxiliary regression keeps all n rows). Reports both the
/// LM statistic `n · R²` against χ²(nlags) and the equivalent F-form
/// comparison of residual sums of squares. Because the residuals are
/// orthogonal to the original design matrix, the restricted sum of squares
/// is the model's own `Σe²`.
pub fn breusch_godfrey(
    result: &RegressionResult,
    x: &Mat<f64>,
    nlags: usize,
) -> Result<BreuschGodfreyResult, DiagnosticError> {
    let n = result.n_observations;
    let k = x.ncols();

    if nlags == 0 || nlags >= n {
        return Err(DiagnosticError::InvalidLags { nlags, nobs: n });
    }

    let residuals = &result.residuals;
    let lags = lag_matrix(residuals, nlags);

    let x_aug = Mat::from_fn(n, k + nlags, |i, j| {
        if j < k {
            x[(i, j)]
        } else {
            lags[(i, j - k)]
        }
    });

    let auxiliary = OlsRegressor::new()
        .fit(&x_aug, residuals)
        .map_err(|source| DiagnosticError::Regression {
            test: "Breusch-Godfrey",
            source,
        })?;
    let auxiliary = auxiliary.result();

    let lagrange_multiplier = n as f64 * auxiliary.r_squared;
    let chi2 = ChiSquared::new(nlags as f64).ok();
    let lagrange_multiplier_p_value =
        chi2.map_or(f64::NAN, |d| 1.0 - d.cdf(lagrange_multiplier));

    let df_num = nlags as f64;
    let df_den = auxiliary.residual_df() as f64;
    let f_value = ((result.rss - auxiliary.rss) / df_num) / (auxiliary.rss / df_den);
    let f_dist = FisherSnedecor::new(df_num, df_den).ok();
    let p_value = f_dist.map_or(f64::NAN, |d| 1.0 - d.cdf(f_value));

    Ok(BreuschGodfreyResult {
        lagrange_multiplier,
        lagrange_multiplier_p_value,
        f_value,
        p_value,
        n_lags: nlags,
    })
}

/// Build the residual lag matrix: column `j` holds lag `j + 1`, with zeros
/// where the lag reaches before the first observation.
fn lag_matrix(series: &Col<f64>, nlags: usize) -> Mat<f64> {
    let n = series.nrows();

    Mat::from_fn(n, nlags, |t, j| {
        let lag = j + 1;
        if t >= lag {
            series[t - lag]
        } else {
            0.0
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn alternating_residuals_push_dw_to_four() {
        let residuals = Col::from_fn(50, |i| if i % 2 == 0 { 1.0 } else { -1.0 });
        let dw = durbin_watson(&residuals);
        assert!(dw > 3.5, "dw = {dw}");
        assert!(dw <= 4.0 + 1e-12);
    }

    #[test]
    fn constant_sign_residuals_push_dw_to_zero() {
        let residuals = Col::from_fn(50, |i| 1.0 + (i as f64) * 1e-6);
        let dw = durbin_watson(&residuals);
        assert!(dw < 0.5, "dw = {dw}");
        assert!(dw >= 0.0);
    }

    #[test]
    fn lag_matrix_zero_pads_leading_rows() {
        let series = Col::from_fn(5, |i| (i + 1) as f64);
        let lags = lag_matrix(&series, 3);

        assert_eq!(lags.nrows(), 5);
        assert_eq!(lags.ncols(), 3);

        // Row 0 has no history at all.
        for j in 0..3 {
            assert_relative_eq!(lags[(0, j)], 0.0);
        }
        // Row 3: lag1 = series[2], lag2 = series[1], lag3 = series[0].
        assert_relative_eq!(lags[(3, 0)], 3.0);
        assert_relative_eq!(lags[(3, 1)], 2.0);
        assert_relative_eq!(lags[(3, 2)], 1.0);
    }

    #[test]
    fn zero_lags_is_rejected() {
        let x = Mat::from_fn(20, 2, |i, j| if j == 0 { 1.0 } else { i as f64 });
        let y = Col::from_fn(20, |i| 1.0 + i as f64 + ((i * 7) % 3) as f64 * 0.1);
        let result = OlsRegressor::new().fit(&x, &y).expect("fit").into_result();

        let err = breusch_godfrey(&result, &x, 0).unwrap_err();
        assert!(matches!(err, DiagnosticError::InvalidLags { nlags: 0, .. }));
    }

    #[test]
    fn uncorrelated_residuals_give_small_lm() {
        let n = 120;
        let x = Mat::from_fn(n, 2, |i, j| if j == 0 { 1.0 } else { (i as f64 * 0.53).sin() });
        // Deterministic noise with no serial structure at lags 1..3.
        let y = Col::from_fn(n, |i| 2.0 + x[(i, 1)] + ((i * 31) % 17) as f64 * 0.01);
        let result = OlsRegressor::new().fit(&x, &y).expect("fit").into_result();

        let bg = breusch_godfrey(&result, &x, 3).expect("test should compute");

        assert_eq!(bg.n_lags, 3);
        assert!(bg.lagrange_multiplier >= 0.0);
        assert!(bg.lagrange_multiplier_p_value >= 0.0 && bg.lagrange_multiplier_p_value <= 1.0);
        assert!(bg.p_value >= 0.0 && bg.p_value <= 1.0);
    }
}
