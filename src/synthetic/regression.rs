//! Synthetic regression data
//!
//! Features are drawn independently from a normal distribution; the target is
//! an aggregation of each row plus independent Gaussian noise.

use crate::error::{GridError, Result};
use crate::utils::Diagnostics;
use ndarray::{Array1, Array2, ArrayView1};
use rand::prelude::*;
use rand_distr::Normal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Row-wise aggregation producing the noiseless target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    #[default]
    Sum,
    Mean,
    Product,
    Min,
    Max,
    /// Euclidean norm of the row
    Norm,
}

impl Aggregation {
    pub fn apply(&self, row: ArrayView1<f64>) -> f64 {
        match self {
            Aggregation::Sum => row.sum(),
            Aggregation::Mean => row.sum() / row.len() as f64,
            Aggregation::Product => row.product(),
            Aggregation::Min => row.iter().copied().fold(f64::INFINITY, f64::min),
            Aggregation::Max => row.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Aggregation::Norm => row.iter().map(|v| v * v).sum::<f64>().sqrt(),
        }
    }
}

/// Configuration for [`make_regression`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegressionDataConfig {
    /// Mean of the feature distribution
    pub x_mean: f64,
    /// Standard deviation of the feature distribution
    pub x_std: f64,
    pub n_samples: usize,
    pub n_features: usize,
    pub formula: Aggregation,
    /// Standard deviation of the additive target noise
    pub noise_std: f64,
    /// Random seed; `None` draws from entropy
    pub seed: Option<u64>,
    pub diagnostics: Diagnostics,
}

impl Default for RegressionDataConfig {
    fn default() -> Self {
        Self {
            x_mean: 10.0,
            x_std: 1.0,
            n_samples: 100,
            n_features: 3,
            formula: Aggregation::Sum,
            noise_std: 1.0,
            seed: None,
            diagnostics: Diagnostics::Emit,
        }
    }
}

impl RegressionDataConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the feature distribution
    pub fn with_features(mut self, mean: f64, std: f64) -> Self {
        self.x_mean = mean;
        self.x_std = std;
        self
    }

    /// Builder method to set the matrix shape
    pub fn with_shape(mut self, n_samples: usize, n_features: usize) -> Self {
        self.n_samples = n_samples;
        self.n_features = n_features;
        self
    }

    pub fn with_formula(mut self, formula: Aggregation) -> Self {
        self.formula = formula;
        self
    }

    pub fn with_noise(mut self, std: f64) -> Self {
        self.noise_std = std;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.n_samples == 0 {
            return Err(GridError::InvalidParameter {
                name: "n_samples".to_string(),
                value: "0".to_string(),
                reason: "at least one sample is required".to_string(),
            });
        }
        if !self.x_mean.is_finite() {
            return Err(GridError::InvalidParameter {
                name: "x_mean".to_string(),
                value: self.x_mean.to_string(),
                reason: "must be finite".to_string(),
            });
        }
        for (name, std) in [("x_std", self.x_std), ("noise_std", self.noise_std)] {
            if !(std >= 0.0 && std.is_finite()) {
                return Err(GridError::InvalidParameter {
                    name: name.to_string(),
                    value: std.to_string(),
                    reason: "must be finite and non-negative".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Generated feature matrix and target vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionData {
    pub x: Array2<f64>,
    pub y: Array1<f64>,
}

impl RegressionData {
    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }
}

/// Generate data using the configured aggregation
pub fn make_regression(config: &RegressionDataConfig) -> Result<RegressionData> {
    let formula = config.formula;
    make_regression_with(config, |row| formula.apply(row))
}

/// Generate data with a caller-supplied aggregation over each row
pub fn make_regression_with<F>(config: &RegressionDataConfig, formula: F) -> Result<RegressionData>
where
    F: Fn(ArrayView1<f64>) -> f64,
{
    config.validate()?;

    let x_dist = Normal::new(config.x_mean, config.x_std)?;
    let noise = Normal::new(0.0, config.noise_std)?;

    if config.diagnostics.enabled() {
        if config.x_std == 0.0 {
            warn!("Feature standard deviation is 0, every feature column will be constant");
        }
        if config.n_features == 0 {
            warn!("No features requested, targets are noise around the empty-row aggregate");
        }
        if config.n_samples < 2 {
            warn!(n_samples = config.n_samples, "Fewer than 2 samples, standardization is degenerate");
        }
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let x = Array2::from_shape_fn((config.n_samples, config.n_features), |_| {
        x_dist.sample(&mut rng)
    });
    let y: Array1<f64> = x
        .rows()
        .into_iter()
        .map(|row| formula(row) + noise.sample(&mut rng))
        .collect();

    debug!(
        n_samples = config.n_samples,
        n_features = config.n_features,
        formula = ?config.formula,
        "Generated regression data"
    );

    Ok(RegressionData { x, y })
}
