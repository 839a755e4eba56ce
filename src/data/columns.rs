//! Column roles of the marketing dataset.

/// The four column roles of the marketing CSV, in file order.
///
/// The loader maps CSV fields to roles positionally, and the design-matrix
/// builder emits the predictors in exactly this order (after the intercept).
/// Downstream diagnostics and the output schema index columns positionally,
/// so the ordering here is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Youtube,
    Facebook,
    Newspaper,
    Sales,
}

impl Column {
    /// All columns in CSV field order.
    pub const ALL: [Column; 4] = [
        Column::Youtube,
        Column::Facebook,
        Column::Newspaper,
        Column::Sales,
    ];

    /// The predictor columns in design-matrix order (after the intercept).
    pub const PREDICTORS: [Column; 3] = [Column::Youtube, Column::Facebook, Column::Newspaper];

    /// Canonical label, as used in log output and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Column::Youtube => "YOUTUBE",
            Column::Facebook => "FACEBOOK",
            Column::Newspaper => "NEWSPAPER",
            Column::Sales => "SALES",
        }
    }

    /// Zero-based position of this column in a CSV record.
    pub fn csv_index(self) -> usize {
        match self {
            Column::Youtube => 0,
            Column::Facebook => 1,
            Column::Newspaper => 2,
            Column::Sales => 3,
        }
    }
}
