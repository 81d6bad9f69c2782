//! Estimators, model family tables and evaluation dispatch
//!
//! Provides:
//! - Estimator identities with their accepted-parameter schemas
//! - Model family tables (linear, SVM, neighbors, Gaussian process)
//! - The evaluation driver seam and a planning driver

mod config;
mod estimators;
pub mod driver;
pub mod tables;

pub use config::{ModelFamily, TaskType};
pub use driver::{dispatch, EvaluationDriver, PlannedSearch, SearchPlanner};
pub use estimators::{Estimator, ParamSpec};
pub use tables::{ModelEntry, ModelTable};
