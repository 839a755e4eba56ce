//! Common test utilities and data generators.

#![allow(dead_code)]

use faer::{Col, Mat};
use std::fmt::Write as _;

/// Simple deterministic "random" in [-1, 1] for reproducibility.
fn next_rand(state: &mut u64) -> f64 {
    *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
    ((*state >> 33) as f64) / (i32::MAX as f64) * 2.0 - 1.0
}

/// The generating coefficients of the synthetic marketing scenario:
/// SALES = 3 + 0.05*YOUTUBE + 0.1*FACEBOOK + 0.0002*NEWSPAPER + noise.
pub const TRUE_COEFFICIENTS: [f64; 4] = [3.0, 0.05, 0.1, 0.0002];

/// Generate marketing-shaped rows `[youtube, facebook, newspaper, sales]`.
pub fn generate_marketing_rows(n_rows: usize, noise_std: f64, seed: u64) -> Vec<[f64; 4]> {
    let mut state = seed;
    let mut rows = Vec::with_capacity(n_rows);

    for _ in 0..n_rows {
        let youtube = 175.0 + 170.0 * next_rand(&mut state);
        let facebook = 25.0 + 24.0 * next_rand(&mut state);
        let newspaper = 55.0 + 50.0 * next_rand(&mut state);
        let sales = TRUE_COEFFICIENTS[0]
            + TRUE_COEFFICIENTS[1] * youtube
            + TRUE_COEFFICIENTS[2] * facebook
            + TRUE_COEFFICIENTS[3] * newspaper
            + noise_std * next_rand(&mut state);
        rows.push([youtube, facebook, newspaper, sales]);
    }

    rows
}

/// Build the design matrix `[const, youtube, facebook, newspaper]` and the
/// response vector from generated rows.
pub fn design_from_rows(rows: &[[f64; 4]]) -> (Mat<f64>, Col<f64>) {
    let n = rows.len();
    let x = Mat::from_fn(n, 4, |i, j| if j == 0 { 1.0 } else { rows[i][j - 1] });
    let y = Col::from_fn(n, |i| rows[i][3]);
    (x, y)
}

/// Render rows as headerless CSV, the loader's input format.
pub fn rows_to_csv(rows: &[[f64; 4]]) -> String {
    let mut csv = String::new();
    for row in rows {
        writeln!(csv, "{},{},{},{}", row[0], row[1], row[2], row[3]).expect("write to string");
    }
    csv
}
