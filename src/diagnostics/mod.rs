//! Residual diagnostics for the fitted regression.
//!
//! Four independent tests plus variance inflation factors:
//!
//! - **RESET**: functional-form misspecification via powers of the fitted values
//! - **Goldfeld-Quandt**: heteroskedasticity via a split-sample variance ratio
//! - **Durbin-Watson**: first-order residual autocorrelation (plain statistic)
//! - **Breusch-Godfrey**: higher-order autocorrelation via an auxiliary regression
//! - **VIF**: multicollinearity, one factor per design-matrix column
//!
//! No test depends on another's output; any individual failure aborts the
//! run because the fixture schema requires every block to be present.

mod autocorrelation;
mod goldfeld_quandt;
mod reset;
mod vif;

use faer::{Col, Mat};
use serde::Serialize;
use thiserror::Error;

use crate::core::RegressionResult;
use crate::solvers::RegressionError;

pub use autocorrelation::{breusch_godfrey, durbin_watson, BreuschGodfreyResult};
pub use goldfeld_quandt::{goldfeld_quandt, GoldfeldQuandtResult};
pub use reset::{ramsey_reset, ResetResult};
pub use vif::variance_inflation_factors;

/// Maximum power of the fitted values used by the RESET test.
pub const RESET_POWER: usize = 4;

/// Lag order used by the Breusch-Godfrey test.
pub const BG_NLAGS: usize = 3;

/// Errors raised while computing a diagnostic test.
#[derive(Debug, Error)]
pub enum DiagnosticError {
    #[error("{test}: insufficient observations: need more than {needed}, got {got}")]
    InsufficientObservations {
        test: &'static str,
        needed: usize,
        got: usize,
    },

    #[error("{test}: auxiliary regression failed: {source}")]
    Regression {
        test: &'static str,
        #[source]
        source: RegressionError,
    },

    #[error("RESET power must be at least 2, got {0}")]
    InvalidPower(usize),

    #[error("Breusch-Godfrey lag count must be in 1..{nobs}, got {nlags}")]
    InvalidLags { nlags: usize, nobs: usize },
}

/// All diagnostic results, serialized under the `residualDiagnostic` key.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticsReport {
    #[serde(rename = "RESET")]
    pub reset: ResetResult,

    #[serde(rename = "Goldfeld-Quandt")]
    pub goldfeld_quandt: GoldfeldQuandtResult,

    #[serde(rename = "Durbin-Watson")]
    pub durbin_watson: f64,

    #[serde(rename = "Breusch-Godfrey")]
    pub breusch_godfrey: BreuschGodfreyResult,

    #[serde(rename = "VIF")]
    pub vif: Vec<f64>,
}

/// Run the full diagnostics suite against a fitted model.
///
/// `x` and `y` are the same design matrix and response the model was fit on.
pub fn compute_diagnostics(
    result: &RegressionResult,
    x: &Mat<f64>,
    y: &Col<f64>,
) -> Result<DiagnosticsReport, DiagnosticError> {
    let reset = ramsey_reset(result, x, y, RESET_POWER)?;
    let goldfeld_quandt = goldfeld_quandt(x, y)?;
    let durbin_watson = durbin_watson(&result.residuals);
    let breusch_godfrey = breusch_godfrey(result, x, BG_NLAGS)?;
    let vif = variance_inflation_factors(x)?;

    Ok(DiagnosticsReport {
        reset,
        goldfeld_quandt,
        durbin_watson,
        breusch_godfrey,
        vif,
    })
}
