//! Utility functions and types

use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

/// Whether degenerate-input warnings are logged.
///
/// Carried explicitly by the routines that can emit them instead of muting
/// diagnostics process-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnostics {
    #[default]
    Emit,
    Suppress,
}

impl Diagnostics {
    pub fn enabled(&self) -> bool {
        matches!(self, Diagnostics::Emit)
    }
}

/// Per-column mean and population standard deviation
pub fn column_mean_std(x: &Array2<f64>) -> (Array1<f64>, Array1<f64>) {
    let n = x.nrows();
    if n == 0 {
        return (Array1::zeros(x.ncols()), Array1::zeros(x.ncols()));
    }
    let mean = x.sum_axis(Axis(0)) / n as f64;
    let std = x
        .axis_iter(Axis(1))
        .zip(mean.iter())
        .map(|(col, &m)| (col.iter().map(|v| (v - m).powi(2)).sum::<f64>() / n as f64).sqrt())
        .collect();
    (mean, std)
}
