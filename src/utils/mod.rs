//! Small matrix utilities shared by the solver and diagnostics.

mod matrix;

pub use matrix::{detect_constant_columns, has_constant_column};
