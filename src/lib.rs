//! regress-grid - Hyperparameter grids for regression estimators
//!
//! This crate provides:
//! - Typed, schema-validated parameter grids assembled from a shared vocabulary
//! - Model family tables (linear, SVM, neighbors, Gaussian process)
//! - Synthetic regression data and feature scaling
//! - An evaluation driver seam the tables and data are dispatched to
//!
//! # Modules
//!
//! - [`optimizer`] - Parameter values, fragments, grids, vocabulary
//! - [`training`] - Estimators, family tables, evaluation dispatch
//! - [`synthetic`] - Synthetic regression data
//! - [`preprocessing`] - Feature scaling
//! - [`pipeline`] - Generate → scale → dispatch runs
//! - [`cli`] - Command-line interface

// Core error handling
pub mod error;

// Search spaces and estimators
pub mod optimizer;
pub mod training;

// Data
pub mod synthetic;
pub mod preprocessing;

// Orchestration
pub mod pipeline;
pub mod utils;

// Services
pub mod cli;

pub use error::{GridError, Result};

/// Re-export commonly used types
pub mod prelude {
    // Error handling
    pub use crate::error::{GridError, Result};

    // Grids
    pub use crate::optimizer::{vocabulary, Candidate, GpKernel, GridBuilder, ParamFragment, ParamGrid, ParamKind, ParamValue};

    // Estimators and dispatch
    pub use crate::training::{dispatch, Estimator, EvaluationDriver, ModelEntry, ModelFamily, ModelTable, SearchPlanner, TaskType};

    // Data
    pub use crate::synthetic::{make_regression, make_regression_with, Aggregation, RegressionData, RegressionDataConfig};
    pub use crate::preprocessing::{standardize, Scaler, ScalerType};
    pub use crate::utils::Diagnostics;

    // Pipeline
    pub use crate::pipeline::{prepare, run, PreparedRun, RunConfig, RunOutcome};
}
