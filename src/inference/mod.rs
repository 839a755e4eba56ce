//! Coefficient-level inference statistics.

mod coefficient;

pub use coefficient::CoefficientInference;
