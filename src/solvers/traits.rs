//! Core traits for regression estimators.

use faer::{Col, Mat};
use thiserror::Error;

use crate::core::RegressionResult;

/// Errors that can occur during regression fitting.
#[derive(Debug, Error)]
pub enum RegressionError {
    #[error("dimension mismatch: X has {x_rows} rows but y has {y_len} elements")]
    DimensionMismatch { x_rows: usize, y_len: usize },

    #[error("insufficient observations: need more than {needed} rows, got {got}")]
    InsufficientObservations { needed: usize, got: usize },

    #[error("design matrix is singular: predictors are perfectly collinear")]
    SingularDesignMatrix,
}

/// A regression estimator that can be fit to data.
///
/// The design matrix is taken as-is, intercept column included; estimators
/// never augment it. Fitting returns a fitted model exposing the full
/// `RegressionResult`.
pub trait Regressor {
    /// The type of the fitted model.
    type Fitted: FittedRegressor;

    /// Fit the model to the data.
    ///
    /// # Arguments
    /// * `x` - Design matrix of shape (n_observations, n_coefficients)
    /// * `y` - Response vector of length n_observations
    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError>;
}

/// A fitted regression model.
pub trait FittedRegressor {
    /// Make predictions on new data with the same column layout.
    fn predict(&self, x: &Mat<f64>) -> Col<f64>;

    /// Access the regression results (coefficients, statistics, etc.).
    fn result(&self) -> &RegressionResult;

    /// Get the coefficients (convenience method).
    fn coefficients(&self) -> &Col<f64> {
        &self.result().coefficients
    }

    /// Get R² (convenience method).
    fn r_squared(&self) -> f64 {
        self.result().r_squared
    }
}
