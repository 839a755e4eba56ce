//! Builds the marketing regression test fixture.
//!
//! This crate fits an ordinary least squares regression of `SALES` on
//! `[const, YOUTUBE, FACEBOOK, NEWSPAPER]`, computes a suite of residual
//! diagnostics (RESET, Goldfeld-Quandt, Durbin-Watson, Breusch-Godfrey, VIF),
//! and serializes everything into a single JSON document consumed by another
//! system's test suite. The pipeline is strictly sequential and one-shot:
//!
//! ```text
//! CSV -> Dataset -> design matrix -> OLS fit -> diagnostics -> JSON
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use regression_fixture::prelude::*;
//! use std::path::Path;
//!
//! let document = run_pipeline(
//!     Path::new("data/marketingData.csv"),
//!     Path::new("data/marketingResult.json"),
//! )?;
//! println!("R² = {}", document.r_squared);
//! ```

pub mod app;
pub mod core;
pub mod data;
pub mod diagnostics;
pub mod inference;
pub mod report;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::app::{run_pipeline, PipelineError};
    pub use crate::core::RegressionResult;
    pub use crate::data::{design_matrix, load_dataset, response, Column, Dataset, LoadError};
    pub use crate::diagnostics::{
        breusch_godfrey, durbin_watson, goldfeld_quandt, ramsey_reset, variance_inflation_factors,
        BreuschGodfreyResult, DiagnosticError, DiagnosticsReport, GoldfeldQuandtResult,
        ResetResult,
    };
    pub use crate::report::{write_document, OutputDocument};
    pub use crate::solvers::{FittedOls, FittedRegressor, OlsRegressor, RegressionError, Regressor};
}

pub use crate::app::{run_pipeline, PipelineError};
pub use crate::core::RegressionResult;
pub use crate::report::OutputDocument;
