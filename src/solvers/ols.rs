//! Ordinary Least Squares regression solver.

use faer::{Col, Mat};
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

use crate::core::RegressionResult;
use crate::inference::CoefficientInference;
use crate::solvers::traits::{FittedRegressor, RegressionError, Regressor};
use crate::utils::has_constant_column;

/// Ordinary Least Squares estimator over an explicit design matrix.
///
/// Uses QR decomposition with column pivoting to determine the numerical
/// rank. A rank-deficient design matrix is a hard error
/// (`RegressionError::SingularDesignMatrix`) rather than an aliased fit:
/// the fixture schema requires one finite estimate per column.
///
/// # Example
///
/// ```rust,ignore
/// use regression_fixture::solvers::{OlsRegressor, Regressor, FittedRegressor};
/// use faer::{Mat, Col};
///
/// let x = Mat::from_fn(100, 2, |i, j| if j == 0 { 1.0 } else { i as f64 });
/// let y = Col::from_fn(100, |i| 1.0 + 2.0 * i as f64);
///
/// let fitted = OlsRegressor::new().fit(&x, &y)?;
/// println!("R² = {}", fitted.r_squared());
/// ```
#[derive(Debug, Clone)]
pub struct OlsRegressor {
    rank_tolerance: f64,
}

impl Default for OlsRegressor {
    fn default() -> Self {
        Self {
            rank_tolerance: 1e-10,
        }
    }
}

impl OlsRegressor {
    /// Create an OLS regressor with the default rank tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the rank tolerance used for singularity detection.
    pub fn with_rank_tolerance(mut self, tolerance: f64) -> Self {
        self.rank_tolerance = tolerance;
        self
    }
}

impl Regressor for OlsRegressor {
    type Fitted = FittedOls;

    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError> {
        let n = x.nrows();
        let k = x.ncols();

        if n != y.nrows() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: n,
                y_len: y.nrows(),
            });
        }

        // A positive residual df is required for every statistic we report.
        if n <= k {
            return Err(RegressionError::InsufficientObservations { needed: k, got: n });
        }

        let coefficients = self.solve_with_qr(x, y)?;

        // Fitted values and residuals in dataset row order.
        let mut fitted_values = Col::zeros(n);
        let mut residuals = Col::zeros(n);
        for i in 0..n {
            let mut pred = 0.0;
            for j in 0..k {
                pred += x[(i, j)] * coefficients[j];
            }
            fitted_values[i] = pred;
            residuals[i] = y[i] - pred;
        }

        let result = self.compute_statistics(x, y, coefficients, fitted_values, residuals)?;

        Ok(FittedOls { result })
    }
}

impl OlsRegressor {
    /// Solve the least squares problem using QR decomposition with column
    /// pivoting, failing on rank deficiency.
    fn solve_with_qr(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Col<f64>, RegressionError> {
        let k = x.ncols();

        let qr = x.col_piv_qr();
        let q = qr.compute_Q();
        let r = qr.R();
        let perm = qr.P();

        // perm_inv[j] = where original column j ended up after pivoting.
        let perm_arr = perm.arrays().1;
        let mut perm_inv: Vec<usize> = vec![0; k];
        perm_inv[..k].copy_from_slice(&perm_arr[..k]);

        for i in 0..k {
            if r[(i, i)].abs() < self.rank_tolerance {
                return Err(RegressionError::SingularDesignMatrix);
            }
        }

        // Solve R * beta_perm = Q' * y by back-substitution.
        let qty = q.transpose() * y;
        let mut beta_perm = Col::zeros(k);
        for i in (0..k).rev() {
            let mut sum = qty[i];
            for j in (i + 1)..k {
                sum -= r[(i, j)] * beta_perm[j];
            }
            beta_perm[i] = sum / r[(i, i)];
        }

        // Map back to original column order.
        let mut coefficients = Col::zeros(k);
        for j in 0..k {
            coefficients[j] = beta_perm[perm_inv[j]];
        }

        Ok(coefficients)
    }

    /// Compute fit and inference statistics.
    fn compute_statistics(
        &self,
        x: &Mat<f64>,
        y: &Col<f64>,
        coefficients: Col<f64>,
        fitted_values: Col<f64>,
        residuals: Col<f64>,
    ) -> Result<RegressionResult, RegressionError> {
        let n = y.nrows();
        let k = x.ncols();

        let has_constant = has_constant_column(x, self.rank_tolerance);

        let rss: f64 = residuals.iter().map(|&e| e.powi(2)).sum();

        // Centered total sum of squares when the design matrix embeds a
        // constant, uncentered otherwise (the VIF auxiliary regression on
        // the intercept column hits the uncentered branch).
        let tss: f64 = if has_constant {
            let y_mean: f64 = y.iter().sum::<f64>() / n as f64;
            y.iter().map(|&yi| (yi - y_mean).powi(2)).sum()
        } else {
            y.iter().map(|&yi| yi.powi(2)).sum()
        };

        let ess = tss - rss;
        let r_squared = if tss > 0.0 { 1.0 - rss / tss } else { 0.0 };

        let df_resid = (n - k) as f64;
        let df_model = if has_constant { (k - 1) as f64 } else { k as f64 };

        let mse_resid = rss / df_resid;
        let f_statistic = if df_model > 0.0 && mse_resid > 0.0 {
            (ess / df_model) / mse_resid
        } else {
            f64::NAN
        };

        let f_pvalue = if f_statistic.is_finite() && df_model > 0.0 {
            let f_dist = FisherSnedecor::new(df_model, df_resid).ok();
            f_dist.map_or(f64::NAN, |d| 1.0 - d.cdf(f_statistic))
        } else {
            f64::NAN
        };

        let std_errors = CoefficientInference::standard_errors(x, mse_resid)
            .map_err(|_| RegressionError::SingularDesignMatrix)?;
        let t_values = CoefficientInference::t_statistics(&coefficients, &std_errors);
        let p_values = CoefficientInference::p_values(&t_values, df_resid);

        Ok(RegressionResult {
            coefficients,
            std_errors,
            t_values,
            p_values,
            fitted_values,
            residuals,
            n_observations: n,
            n_coefficients: k,
            has_constant,
            r_squared,
            f_statistic,
            f_pvalue,
            rss,
            tss,
            ess,
        })
    }
}

/// A fitted OLS regression model.
#[derive(Debug, Clone)]
pub struct FittedOls {
    result: RegressionResult,
}

impl FittedRegressor for FittedOls {
    fn predict(&self, x: &Mat<f64>) -> Col<f64> {
        let n = x.nrows();
        let k = x.ncols();
        let mut predictions = Col::zeros(n);

        for i in 0..n {
            let mut pred = 0.0;
            for j in 0..k {
                pred += x[(i, j)] * self.result.coefficients[j];
            }
            predictions[i] = pred;
        }

        predictions
    }

    fn result(&self) -> &RegressionResult {
        &self.result
    }
}

impl FittedOls {
    /// Consume the fitted model and take ownership of its result.
    pub fn into_result(self) -> RegressionResult {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn with_intercept(n: usize, f: impl Fn(usize) -> f64) -> Mat<f64> {
        Mat::from_fn(n, 2, move |i, j| if j == 0 { 1.0 } else { f(i) })
    }

    #[test]
    fn recovers_exact_line() {
        let x = with_intercept(5, |i| i as f64);
        let y = Col::from_fn(5, |i| 2.0 + 3.0 * i as f64);

        let fitted = OlsRegressor::new().fit(&x, &y).expect("fit should succeed");

        assert_relative_eq!(fitted.coefficients()[0], 2.0, epsilon = 1e-10);
        assert_relative_eq!(fitted.coefficients()[1], 3.0, epsilon = 1e-10);
        assert_relative_eq!(fitted.r_squared(), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn duplicated_column_is_singular() {
        let x = Mat::from_fn(10, 3, |i, j| match j {
            0 => 1.0,
            _ => i as f64, // columns 1 and 2 identical
        });
        let y = Col::from_fn(10, |i| i as f64);

        let err = OlsRegressor::new().fit(&x, &y).unwrap_err();
        assert!(matches!(err, RegressionError::SingularDesignMatrix));
    }

    #[test]
    fn too_few_rows_is_rejected() {
        let x = Mat::from_fn(3, 4, |i, j| ((i + 1) * (j + 2)) as f64 + (i as f64).sin());
        let y = Col::from_fn(3, |i| i as f64);

        let err = OlsRegressor::new().fit(&x, &y).unwrap_err();
        assert!(matches!(
            err,
            RegressionError::InsufficientObservations { .. }
        ));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let x = with_intercept(5, |i| i as f64);
        let y = Col::from_fn(4, |i| i as f64);

        let err = OlsRegressor::new().fit(&x, &y).unwrap_err();
        assert!(matches!(err, RegressionError::DimensionMismatch { .. }));
    }

    #[test]
    fn residuals_sum_to_zero_with_intercept() {
        let x = with_intercept(20, |i| (i as f64 * 0.7).sin() * 3.0);
        let y = Col::from_fn(20, |i| 1.5 + 0.5 * (i as f64 * 0.7).sin() * 3.0 + (i % 3) as f64);

        let fitted = OlsRegressor::new().fit(&x, &y).expect("fit should succeed");

        let sum: f64 = fitted.result().residuals.iter().sum();
        assert_relative_eq!(sum, 0.0, epsilon = 1e-8);
    }

    #[test]
    fn predict_matches_fitted_values_on_training_data() {
        let x = with_intercept(15, |i| i as f64 * 1.3);
        let y = Col::from_fn(15, |i| 4.0 - 0.2 * i as f64 * 1.3 + ((i * 7) % 5) as f64 * 0.1);

        let fitted = OlsRegressor::new().fit(&x, &y).expect("fit should succeed");
        let preds = fitted.predict(&x);

        for i in 0..15 {
            assert_relative_eq!(preds[i], fitted.result().fitted_values[i], epsilon = 1e-12);
        }
    }
}
