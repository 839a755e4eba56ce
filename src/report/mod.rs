//! Fixture document assembly and JSON export.

mod document;

use std::fs;
use std::path::Path;

use log::info;
use thiserror::Error;

pub use document::OutputDocument;

/// Errors raised while serializing or writing the fixture.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to serialize fixture document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Serialize the document and write it to `path`, overwriting any existing
/// file.
///
/// The JSON string is rendered completely before the file is touched, so a
/// serialization failure never leaves a partial file behind.
pub fn write_document(path: &Path, document: &OutputDocument) -> Result<(), WriteError> {
    let json = serde_json::to_string(document)?;

    fs::write(path, json).map_err(|source| WriteError::Io {
        path: path.display().to_string(),
        source,
    })?;

    Ok(())
}

/// Log a human-readable summary of the fit and each diagnostic result.
///
/// Non-contractual output for manual inspection only; the JSON file is the
/// interface.
pub fn log_summary(document: &OutputDocument) {
    info!(
        "OLS fit: n = {}, k = {}, R² = {:.6}, F = {:.4} (p = {:.6})",
        document.no_of_observations,
        document.no_of_coefficients,
        document.r_squared,
        document.f_value,
        document.p_value_of_f_value,
    );
    info!(
        "coefficients [const, youtube, facebook, newspaper] = {:?}",
        document.coefficients
    );
    info!(
        "sum of squares: sse = {:.6}, ssr = {:.6}, sst = {:.6}",
        document.sse, document.ssr, document.sst
    );

    let diag = &document.residual_diagnostic;
    info!(
        "RESET: F = {:.4}, p = {:.6}, power = {}",
        diag.reset.f_value, diag.reset.p_value, diag.reset.power
    );
    info!(
        "Goldfeld-Quandt: F = {:.4}, p = {:.6}, order = {}",
        diag.goldfeld_quandt.f_value, diag.goldfeld_quandt.p_value, diag.goldfeld_quandt.order
    );
    info!("Durbin-Watson: {:.4}", diag.durbin_watson);
    info!(
        "Breusch-Godfrey: LM = {:.4} (p = {:.6}), F = {:.4} (p = {:.6}), nlags = {}",
        diag.breusch_godfrey.lagrange_multiplier,
        diag.breusch_godfrey.lagrange_multiplier_p_value,
        diag.breusch_godfrey.f_value,
        diag.breusch_godfrey.p_value,
        diag.breusch_godfrey.n_lags
    );
    info!("VIFs: {:?}", diag.vif);
}
