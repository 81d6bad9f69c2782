//! Feature scaling implementations

use crate::error::{GridError, Result};
use crate::utils::{column_mean_std, Diagnostics};
use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Type of scaler to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalerType {
    /// Standard scaling (z-score normalization): (x - mean) / std
    #[default]
    Standard,
    /// Min-Max scaling: (x - min) / (max - min)
    MinMax,
    /// Max absolute scaling: x / max(|x|)
    MaxAbs,
    /// No scaling
    None,
}

/// Fitted per-column parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScalerParams {
    center: Array1<f64>, // mean, min, or 0
    scale: Array1<f64>,  // std, range, or max |x|
}

/// Column-wise feature scaler over dense matrices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scaler {
    scaler_type: ScalerType,
    params: Option<ScalerParams>,
    diagnostics: Diagnostics,
}

impl Scaler {
    /// Create a new scaler
    pub fn new(scaler_type: ScalerType) -> Self {
        Self {
            scaler_type,
            params: None,
            diagnostics: Diagnostics::Emit,
        }
    }

    /// Standardizing scaler (zero mean, unit variance per column)
    pub fn standard() -> Self {
        Self::new(ScalerType::Standard)
    }

    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn scaler_type(&self) -> ScalerType {
        self.scaler_type
    }

    pub fn is_fitted(&self) -> bool {
        self.params.is_some()
    }

    /// Fitted centers (mean for standard scaling)
    pub fn center(&self) -> Option<&Array1<f64>> {
        self.params.as_ref().map(|p| &p.center)
    }

    /// Fitted scales (population std for standard scaling)
    pub fn scale(&self) -> Option<&Array1<f64>> {
        self.params.as_ref().map(|p| &p.scale)
    }

    /// Fit the scaler to the data
    pub fn fit(&mut self, x: &Array2<f64>) -> Result<&mut Self> {
        if x.nrows() == 0 {
            return Err(GridError::PreprocessingError(
                "cannot fit a scaler on zero samples".to_string(),
            ));
        }
        if x.iter().any(|v| !v.is_finite()) {
            return Err(GridError::PreprocessingError(
                "input contains NaN or infinite values".to_string(),
            ));
        }
        if self.diagnostics.enabled() && x.nrows() < 2 && self.scaler_type == ScalerType::Standard {
            warn!("Standardizing a single sample, every column will be zero");
        }

        let n_cols = x.ncols();
        let (center, mut scale) = match self.scaler_type {
            ScalerType::Standard => column_mean_std(x),
            ScalerType::MinMax => {
                let min = x.fold_axis(Axis(0), f64::INFINITY, |&a, &b| a.min(b));
                let max = x.fold_axis(Axis(0), f64::NEG_INFINITY, |&a, &b| a.max(b));
                let range = &max - &min;
                (min, range)
            }
            ScalerType::MaxAbs => {
                let max_abs = x.fold_axis(Axis(0), 0.0f64, |&a, &b| a.max(b.abs()));
                (Array1::zeros(n_cols), max_abs)
            }
            ScalerType::None => (Array1::zeros(n_cols), Array1::ones(n_cols)),
        };

        // Constant columns pass through centered but unscaled
        let mut constant = 0;
        scale.mapv_inplace(|s| {
            if s == 0.0 {
                constant += 1;
                1.0
            } else {
                s
            }
        });
        if constant > 0 && self.diagnostics.enabled() {
            warn!(columns = constant, "Constant feature columns left unscaled");
        }

        self.params = Some(ScalerParams { center, scale });
        Ok(self)
    }

    /// Transform the data
    pub fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        let params = self.params.as_ref().ok_or(GridError::NotFitted)?;
        self.check_width(x, params)?;
        Ok((x - &params.center) / &params.scale)
    }

    /// Fit and transform in one step
    pub fn fit_transform(&mut self, x: &Array2<f64>) -> Result<Array2<f64>> {
        self.fit(x)?;
        self.transform(x)
    }

    /// Inverse transform the data
    pub fn inverse_transform(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        let params = self.params.as_ref().ok_or(GridError::NotFitted)?;
        self.check_width(x, params)?;
        Ok(x * &params.scale + &params.center)
    }

    fn check_width(&self, x: &Array2<f64>, params: &ScalerParams) -> Result<()> {
        if x.ncols() != params.center.len() {
            return Err(GridError::ShapeError {
                expected: format!("{} columns", params.center.len()),
                actual: format!("{} columns", x.ncols()),
            });
        }
        Ok(())
    }
}

/// Standardize `x` with a scaler that is discarded afterwards
pub fn standardize(x: &Array2<f64>, diagnostics: Diagnostics) -> Result<Array2<f64>> {
    Scaler::standard().with_diagnostics(diagnostics).fit_transform(x)
}
