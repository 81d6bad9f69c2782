//! Run configuration

use crate::error::Result;
use crate::preprocessing::ScalerType;
use crate::synthetic::{Aggregation, RegressionDataConfig};
use crate::training::{ModelFamily, TaskType};
use crate::utils::Diagnostics;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Configuration for one generate → scale → dispatch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Synthetic data settings; fields left out keep the reference run values
    #[serde(deserialize_with = "data_over_reference")]
    pub data: RegressionDataConfig,
    /// Model family handed to the driver
    pub family: ModelFamily,
    /// Task flag passed through to the driver
    pub task: TaskType,
    /// Feature scaling applied before dispatch
    pub scaler: ScalerType,
}

/// Data settings of the reference run: N(10, 3) features, 100 × 3, sum, noise 0.3
fn reference_data() -> RegressionDataConfig {
    RegressionDataConfig::new()
        .with_features(10.0, 3.0)
        .with_shape(100, 3)
        .with_formula(Aggregation::Sum)
        .with_noise(0.3)
}

/// Data fields as they may appear in a partial config file
#[derive(Deserialize)]
struct DataOverrides {
    x_mean: Option<f64>,
    x_std: Option<f64>,
    n_samples: Option<usize>,
    n_features: Option<usize>,
    formula: Option<Aggregation>,
    noise_std: Option<f64>,
    seed: Option<u64>,
    diagnostics: Option<Diagnostics>,
}

fn data_over_reference<'de, D>(deserializer: D) -> std::result::Result<RegressionDataConfig, D::Error>
where
    D: Deserializer<'de>,
{
    let o = DataOverrides::deserialize(deserializer)?;
    let base = reference_data();
    Ok(RegressionDataConfig {
        x_mean: o.x_mean.unwrap_or(base.x_mean),
        x_std: o.x_std.unwrap_or(base.x_std),
        n_samples: o.n_samples.unwrap_or(base.n_samples),
        n_features: o.n_features.unwrap_or(base.n_features),
        formula: o.formula.unwrap_or(base.formula),
        noise_std: o.noise_std.unwrap_or(base.noise_std),
        seed: o.seed.or(base.seed),
        diagnostics: o.diagnostics.unwrap_or(base.diagnostics),
    })
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data: reference_data(),
            family: ModelFamily::GaussianProcess,
            task: TaskType::Regression,
            scaler: ScalerType::Standard,
        }
    }
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_family(mut self, family: ModelFamily) -> Self {
        self.family = family;
        self
    }

    pub fn with_data(mut self, data: RegressionDataConfig) -> Self {
        self.data = data;
        self
    }

    pub fn with_scaler(mut self, scaler: ScalerType) -> Self {
        self.scaler = scaler;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.data.seed = Some(seed);
        self
    }

    /// Silence degenerate-input warnings for this run only
    pub fn quiet(mut self) -> Self {
        self.data.diagnostics = Diagnostics::Suppress;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.family, ModelFamily::GaussianProcess);
        assert_eq!(config.task, TaskType::Regression);
        assert_eq!(config.data.x_std, 3.0);
        assert_eq!(config.data.noise_std, 0.3);
        assert!(config.data.seed.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = RunConfig::from_json(r#"{"family": "linear", "data": {"n_samples": 20}}"#).unwrap();
        assert_eq!(config.family, ModelFamily::Linear);
        assert_eq!(config.data.n_samples, 20);
        assert_eq!(config.data.n_features, 3);
        assert_eq!(config.scaler, ScalerType::Standard);
    }

    #[test]
    fn test_partial_data_keeps_reference_values() {
        let config = RunConfig::from_json(r#"{"data": {"seed": 4}}"#).unwrap();
        let expected = RunConfig::default().with_seed(4);
        assert_eq!(config, expected);
        assert_eq!(config.data.x_std, 3.0);
        assert_eq!(config.data.noise_std, 0.3);

        let config = RunConfig::from_json(r#"{"data": {"noise_std": 0.0, "formula": "max"}}"#).unwrap();
        assert_eq!(config.data.noise_std, 0.0);
        assert_eq!(config.data.formula, Aggregation::Max);
        assert_eq!(config.data.x_mean, 10.0);
    }

    #[test]
    fn test_json_round_trip() {
        let config = RunConfig::new().with_family(ModelFamily::SvmSmall).with_seed(9).quiet();
        let parsed = RunConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_bad_json() {
        assert!(RunConfig::from_json("{not json").is_err());
    }
}
