//! Error types for grid assembly, data generation and dispatch

use thiserror::Error;

/// Result type alias for regress-grid operations
pub type Result<T> = std::result::Result<T, GridError>;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum GridError {
    #[error("Preprocessing error: {0}")]
    PreprocessingError(String),

    #[error("Dispatch error: {0}")]
    DispatchError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid shape: expected {expected}, got {actual}")]
    ShapeError { expected: String, actual: String },

    #[error("Scaler not fitted")]
    NotFitted,

    #[error("Unknown parameter for {estimator}: {name}")]
    UnknownParameter { estimator: String, name: String },

    #[error("Invalid parameter: {name} = {value}, {reason}")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Empty grid for {0}")]
    EmptyGrid(String),
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        GridError::SerializationError(err.to_string())
    }
}

impl From<ndarray::ShapeError> for GridError {
    fn from(err: ndarray::ShapeError) -> Self {
        GridError::ShapeError {
            expected: "valid shape".to_string(),
            actual: err.to_string(),
        }
    }
}

impl From<rand_distr::NormalError> for GridError {
    fn from(err: rand_distr::NormalError) -> Self {
        GridError::ConfigError(format!("Invalid normal distribution: {}", err))
    }
}
