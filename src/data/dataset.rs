//! CSV ingest for the fixed-schema marketing dataset.
//!
//! The input file is comma-separated with a `.` decimal separator and no
//! header row; the four fields map positionally to
//! `YOUTUBE, FACEBOOK, NEWSPAPER, SALES`. Unlike a general-purpose ingest,
//! any malformed row aborts the load: the fixture must be computed from the
//! complete dataset or not at all.

use std::fs::File;
use std::path::Path;

use thiserror::Error;

use super::columns::Column;

/// Errors raised while loading the marketing CSV.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error at line {line}: {source}")]
    Csv {
        line: usize,
        #[source]
        source: csv::Error,
    },

    #[error("line {line}: expected {expected} fields, got {got}")]
    Row {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("line {line}, column {column}: '{value}' is not a finite number")]
    Value {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("input file contains no data rows")]
    Empty,
}

/// The loaded marketing dataset: four numeric series of equal length.
///
/// Column-major storage; immutable after loading. Row order is preserved
/// from the file and carried through fitted values, residuals, and the
/// Durbin-Watson/Goldfeld-Quandt diagnostics.
#[derive(Debug, Clone)]
pub struct Dataset {
    youtube: Vec<f64>,
    facebook: Vec<f64>,
    newspaper: Vec<f64>,
    sales: Vec<f64>,
}

impl Dataset {
    /// Number of observations.
    pub fn n_rows(&self) -> usize {
        self.sales.len()
    }

    /// Access one column as a slice, in dataset row order.
    pub fn column(&self, column: Column) -> &[f64] {
        match column {
            Column::Youtube => &self.youtube,
            Column::Facebook => &self.facebook,
            Column::Newspaper => &self.newspaper,
            Column::Sales => &self.sales,
        }
    }
}

/// Load the marketing dataset from `path`.
///
/// Fails on the first missing file, short/long row, or non-numeric value.
pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        // Flexible mode so a short or long row reaches our own field-count
        // check and gets a line-numbered error instead of a reader error.
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut youtube = Vec::new();
    let mut facebook = Vec::new();
    let mut newspaper = Vec::new();
    let mut sales = Vec::new();

    for (idx, record) in reader.records().enumerate() {
        // CSV lines are 1-based and there is no header row.
        let line = idx + 1;

        let record = record.map_err(|source| LoadError::Csv { line, source })?;

        if record.len() != Column::ALL.len() {
            return Err(LoadError::Row {
                line,
                expected: Column::ALL.len(),
                got: record.len(),
            });
        }

        let mut values = [0.0_f64; 4];
        for column in Column::ALL {
            let raw = record.get(column.csv_index()).unwrap_or("");
            let parsed = raw.parse::<f64>().ok().filter(|v| v.is_finite());
            values[column.csv_index()] = parsed.ok_or_else(|| LoadError::Value {
                line,
                column: column.label(),
                value: raw.to_string(),
            })?;
        }

        youtube.push(values[Column::Youtube.csv_index()]);
        facebook.push(values[Column::Facebook.csv_index()]);
        newspaper.push(values[Column::Newspaper.csv_index()]);
        sales.push(values[Column::Sales.csv_index()]);
    }

    if sales.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(Dataset {
        youtube,
        facebook,
        newspaper,
        sales,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn loads_well_formed_rows() {
        let file = write_csv("276.12,45.36,83.04,26.52\n53.4,47.16,54.12,12.48\n");
        let dataset = load_dataset(file.path()).expect("load should succeed");

        assert_eq!(dataset.n_rows(), 2);
        assert_eq!(dataset.column(Column::Youtube), &[276.12, 53.4]);
        assert_eq!(dataset.column(Column::Sales), &[26.52, 12.48]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_dataset(Path::new("/nonexistent/marketing.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn wrong_field_count_reports_line() {
        let file = write_csv("1.0,2.0,3.0,4.0\n1.0,2.0,3.0\n");
        let err = load_dataset(file.path()).unwrap_err();
        match err {
            LoadError::Row { line, expected, got } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 4);
                assert_eq!(got, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_value_names_column() {
        let file = write_csv("1.0,2.0,3.0,N/A\n");
        let err = load_dataset(file.path()).unwrap_err();
        match err {
            LoadError::Value { line, column, value } => {
                assert_eq!(line, 1);
                assert_eq!(column, "SALES");
                assert_eq!(value, "N/A");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_finite_value_is_rejected() {
        let file = write_csv("1.0,inf,3.0,4.0\n");
        let err = load_dataset(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Value { .. }));
    }

    #[test]
    fn empty_file_is_rejected() {
        let file = write_csv("");
        let err = load_dataset(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }
}
