//! The flat fixture document written to JSON.

use serde::Serialize;

use crate::core::RegressionResult;
use crate::diagnostics::DiagnosticsReport;

/// The complete fixture document.
///
/// Field declaration order is the wire order; downstream consumers compare
/// this file byte-for-byte, so neither key names nor ordering may change.
///
/// Counts and degrees of freedom are serialized as floats where the
/// reference fixture (produced by statsmodels) emits floats.
///
/// Note the deliberate naming inversion: the JSON key `sse` carries the
/// residual sum of squares (internal `rss`) and `ssr` carries the explained
/// sum of squares (internal `ess`). Downstream consumers depend on these
/// keys as they are.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDocument {
    pub no_of_observations: f64,
    pub coefficients: Vec<f64>,
    pub no_of_coefficients: usize,
    pub std_error_of_coefficients: Vec<f64>,
    pub t_values: Vec<f64>,
    pub p_values: Vec<f64>,
    pub predicted: Vec<f64>,
    pub residuals: Vec<f64>,
    /// Residual mean square, duplicated under its historical key.
    pub s_square: f64,
    pub r_squared: f64,
    pub f_value: f64,
    pub p_value_of_f_value: f64,
    pub residual_degrees_of_freedom: f64,
    pub model_degrees_of_freedom: f64,
    pub sse: f64,
    pub sst: f64,
    pub ssr: f64,
    pub mse_resid: f64,
    pub mse_total: f64,
    pub mse_model: f64,
    pub residual_diagnostic: DiagnosticsReport,
}

impl OutputDocument {
    /// Flatten a fitted model and its diagnostics into the wire document.
    pub fn new(result: &RegressionResult, diagnostics: DiagnosticsReport) -> Self {
        Self {
            no_of_observations: result.n_observations as f64,
            coefficients: result.coefficients.iter().copied().collect(),
            no_of_coefficients: result.n_coefficients,
            std_error_of_coefficients: result.std_errors.iter().copied().collect(),
            t_values: result.t_values.iter().copied().collect(),
            p_values: result.p_values.iter().copied().collect(),
            predicted: result.fitted_values.iter().copied().collect(),
            residuals: result.residuals.iter().copied().collect(),
            s_square: result.mse_resid(),
            r_squared: result.r_squared,
            f_value: result.f_statistic,
            p_value_of_f_value: result.f_pvalue,
            residual_degrees_of_freedom: result.residual_df() as f64,
            model_degrees_of_freedom: result.model_df() as f64,
            sse: result.rss,
            sst: result.tss,
            ssr: result.ess,
            mse_resid: result.mse_resid(),
            mse_total: result.mse_total(),
            mse_model: result.mse_model(),
            residual_diagnostic: diagnostics,
        }
    }
}
