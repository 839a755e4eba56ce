//! Core types for regression analysis.

mod result;

pub use result::RegressionResult;
