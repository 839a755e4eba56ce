//! The sequential fixture-building pipeline.

use std::path::Path;

use log::info;
use thiserror::Error;

use crate::data::{design_matrix, load_dataset, response, LoadError};
use crate::diagnostics::{compute_diagnostics, DiagnosticError};
use crate::report::{log_summary, write_document, OutputDocument, WriteError};
use crate::solvers::{OlsRegressor, RegressionError, Regressor};

/// Fixed input path of the marketing dataset.
pub const INPUT_PATH: &str = "data/marketingData.csv";

/// Fixed output path of the JSON fixture.
pub const OUTPUT_PATH: &str = "data/marketingResult.json";

/// Any failure along the pipeline. All variants are fatal; no partial
/// output file is written.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to load dataset: {0}")]
    Load(#[from] LoadError),

    #[error("regression failed: {0}")]
    Regression(#[from] RegressionError),

    #[error("diagnostic computation failed: {0}")]
    Diagnostic(#[from] DiagnosticError),

    #[error("failed to write fixture: {0}")]
    Write(#[from] WriteError),
}

/// Run the whole pipeline: load, build the design matrix, fit, compute the
/// diagnostics, and write the fixture JSON.
///
/// Strictly sequential; a failure at any stage aborts before the output
/// file is touched. Returns the document for inspection by callers (the
/// binary ignores it, tests assert on it).
pub fn run_pipeline(input: &Path, output: &Path) -> Result<OutputDocument, PipelineError> {
    let dataset = load_dataset(input)?;
    info!(
        "loaded {} observations from '{}'",
        dataset.n_rows(),
        input.display()
    );

    let x = design_matrix(&dataset);
    let y = response(&dataset);

    let fitted = OlsRegressor::new().fit(&x, &y)?;
    let result = fitted.into_result();

    let diagnostics = compute_diagnostics(&result, &x, &y)?;

    let document = OutputDocument::new(&result, diagnostics);
    log_summary(&document);

    write_document(output, &document)?;
    info!("fixture written to '{}'", output.display());

    Ok(document)
}
