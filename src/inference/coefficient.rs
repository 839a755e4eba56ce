//! Coefficient inference calculations.

use faer::{Col, Mat};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Computes inference statistics for regression coefficients.
///
/// The design matrix is used as given; because the intercept travels as an
/// explicit column, its standard error falls out of `(X'X)⁻¹` like any
/// other coefficient's.
pub struct CoefficientInference;

impl CoefficientInference {
    /// Compute standard errors for OLS coefficients.
    ///
    /// SE(β_j) = sqrt(σ² * (X'X)⁻¹_{jj})
    pub fn standard_errors(x: &Mat<f64>, mse_resid: f64) -> Result<Col<f64>, &'static str> {
        let k = x.ncols();
        let xtx_inv = Self::compute_xtx_inverse(x)?;

        let mut se = Col::zeros(k);
        for j in 0..k {
            let var = mse_resid * xtx_inv[(j, j)];
            se[j] = if var >= 0.0 { var.sqrt() } else { f64::NAN };
        }

        Ok(se)
    }

    /// Compute t-statistics for coefficients.
    ///
    /// t_j = β_j / SE(β_j)
    pub fn t_statistics(coefficients: &Col<f64>, std_errors: &Col<f64>) -> Col<f64> {
        let k = coefficients.nrows();
        let mut t_values = Col::zeros(k);

        for j in 0..k {
            if std_errors[j].is_nan() || std_errors[j] == 0.0 {
                t_values[j] = f64::NAN;
            } else {
                t_values[j] = coefficients[j] / std_errors[j];
            }
        }

        t_values
    }

    /// Compute two-sided p-values from t-statistics.
    ///
    /// p_j = 2 * P(|T| > |t_j|) where T ~ t(df)
    pub fn p_values(t_values: &Col<f64>, df: f64) -> Col<f64> {
        let k = t_values.nrows();
        let mut p_vals = Col::zeros(k);

        if df <= 0.0 {
            for j in 0..k {
                p_vals[j] = f64::NAN;
            }
            return p_vals;
        }

        let t_dist = StudentsT::new(0.0, 1.0, df).ok();

        for j in 0..k {
            match (&t_dist, t_values[j].is_nan()) {
                (Some(dist), false) => {
                    let abs_t = t_values[j].abs();
                    p_vals[j] = 2.0 * (1.0 - dist.cdf(abs_t));
                }
                _ => p_vals[j] = f64::NAN,
            }
        }

        p_vals
    }

    /// Compute (X'X)⁻¹ via QR decomposition.
    fn compute_xtx_inverse(x: &Mat<f64>) -> Result<Mat<f64>, &'static str> {
        let k = x.ncols();
        let xtx = x.transpose() * x;

        let qr = xtx.qr();
        let q = qr.compute_Q();
        let r = qr.R();

        for i in 0..k {
            if r[(i, i)].abs() < 1e-10 {
                return Err("X'X is singular");
            }
        }

        // Solve R * column = Q' * e_col for each identity column.
        let mut xtx_inv = Mat::zeros(k, k);
        let qt = q.transpose();

        for col in 0..k {
            for i in (0..k).rev() {
                let mut sum = qt[(i, col)];
                for j in (i + 1)..k {
                    sum -= r[(i, j)] * xtx_inv[(j, col)];
                }
                xtx_inv[(i, col)] = sum / r[(i, i)];
            }
        }

        Ok(xtx_inv)
    }
}
