//! Task and model-family configuration

use crate::error::{GridError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type of ML task handed to the evaluation driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// Regression
    Regression,
    /// Classification
    Classification,
}

impl TaskType {
    pub fn is_classification(&self) -> bool {
        matches!(self, TaskType::Classification)
    }
}

/// Broad algorithm class grouping estimators into one table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelFamily {
    /// Linear models (least squares, penalized, Bayesian, robust, SGD)
    Linear,
    /// Support-vector regressors with the full grids
    Svm,
    /// Support-vector regressors with reduced grids
    #[serde(alias = "svm-small")]
    SvmSmall,
    /// Neighbor-based regressors
    #[serde(alias = "neighbors")]
    Neighbor,
    /// Gaussian-process regressors
    #[serde(alias = "gp")]
    GaussianProcess,
}

impl ModelFamily {
    /// All families in display order
    pub const ALL: [ModelFamily; 5] = [
        ModelFamily::Linear,
        ModelFamily::Svm,
        ModelFamily::SvmSmall,
        ModelFamily::Neighbor,
        ModelFamily::GaussianProcess,
    ];

    /// Short command-line name
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelFamily::Linear => "linear",
            ModelFamily::Svm => "svm",
            ModelFamily::SvmSmall => "svm-small",
            ModelFamily::Neighbor => "neighbors",
            ModelFamily::GaussianProcess => "gp",
        }
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelFamily {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(ModelFamily::Linear),
            "svm" => Ok(ModelFamily::Svm),
            "svm-small" | "svm_small" => Ok(ModelFamily::SvmSmall),
            "neighbors" | "neighbor" | "knn" => Ok(ModelFamily::Neighbor),
            "gp" | "gaussian-process" | "gaussian_process" => Ok(ModelFamily::GaussianProcess),
            other => Err(GridError::ConfigError(format!("Unknown model family: {}", other))),
        }
    }
}
