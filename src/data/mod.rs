//! Dataset loading and design-matrix construction.

mod columns;
mod dataset;
mod design;

pub use columns::Column;
pub use dataset::{load_dataset, Dataset, LoadError};
pub use design::{design_matrix, response};
