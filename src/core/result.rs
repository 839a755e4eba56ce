//! Regression result structure.

use faer::Col;

/// Complete result from an OLS fit on an explicit design matrix.
///
/// The design matrix carries its own intercept column, so `coefficients[0]`
/// is the intercept and the coefficient-indexed vectors (`coefficients`,
/// `std_errors`, `t_values`, `p_values`) are all aligned with the
/// design-matrix column order. Observation-indexed vectors
/// (`fitted_values`, `residuals`) preserve dataset row order.
///
/// The sum-of-squares fields follow the statsmodels naming (`rss` for the
/// residual sum of squares, `ess` for the explained one); the output schema
/// maps them to its historically inverted `sse`/`ssr` keys.
#[derive(Debug, Clone)]
pub struct RegressionResult {
    /// Estimated coefficients, design-matrix column order.
    pub coefficients: Col<f64>,

    /// Standard errors of the coefficients.
    pub std_errors: Col<f64>,

    /// t-statistics (coefficient / standard error).
    pub t_values: Col<f64>,

    /// Two-sided p-values from t(df_resid).
    pub p_values: Col<f64>,

    /// Fitted values `Xβ`, dataset row order.
    pub fitted_values: Col<f64>,

    /// Residuals `y - Xβ`, dataset row order.
    pub residuals: Col<f64>,

    /// Number of observations.
    pub n_observations: usize,

    /// Number of coefficients (design-matrix columns).
    pub n_coefficients: usize,

    /// Whether the design matrix contains a constant column.
    ///
    /// Decides between centered and uncentered total sum of squares, and
    /// whether the model degrees of freedom exclude the intercept.
    pub has_constant: bool,

    /// Coefficient of determination.
    pub r_squared: f64,

    /// F-statistic for overall model significance.
    pub f_statistic: f64,

    /// P-value for the F-statistic.
    pub f_pvalue: f64,

    /// Residual sum of squares `Σe²`.
    pub rss: f64,

    /// Total sum of squares (centered when a constant is present).
    pub tss: f64,

    /// Explained sum of squares (`tss - rss`).
    pub ess: f64,
}

impl RegressionResult {
    /// Residual degrees of freedom (`n - k`).
    pub fn residual_df(&self) -> usize {
        self.n_observations.saturating_sub(self.n_coefficients)
    }

    /// Model degrees of freedom (`k - 1` with a constant, else `k`).
    pub fn model_df(&self) -> usize {
        if self.has_constant {
            self.n_coefficients.saturating_sub(1)
        } else {
            self.n_coefficients
        }
    }

    /// Total degrees of freedom (`n - 1` with a constant, else `n`).
    pub fn total_df(&self) -> usize {
        if self.has_constant {
            self.n_observations.saturating_sub(1)
        } else {
            self.n_observations
        }
    }

    /// Residual mean square (`rss / df_resid`), also known as s².
    pub fn mse_resid(&self) -> f64 {
        self.rss / self.residual_df() as f64
    }

    /// Model mean square (`ess / df_model`).
    pub fn mse_model(&self) -> f64 {
        self.ess / self.model_df() as f64
    }

    /// Total mean square (`tss / df_total`).
    pub fn mse_total(&self) -> f64 {
        self.tss / self.total_df() as f64
    }
}
