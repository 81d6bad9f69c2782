//! Evaluation driver seam
//!
//! The driver is the component that actually fits every estimator against
//! every candidate of its grid. This crate only hands it a validated table and
//! well-formed data; [`SearchPlanner`] is the built-in driver, which records
//! the planned search without fitting anything.

use super::config::TaskType;
use super::estimators::Estimator;
use super::tables::ModelTable;
use crate::error::{GridError, Result};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Consumer of a model family table plus data
pub trait EvaluationDriver {
    /// Run the search over every entry of `table`
    fn evaluate(
        &mut self,
        table: &ModelTable,
        x: &Array2<f64>,
        y: &Array1<f64>,
        task: TaskType,
    ) -> Result<()>;
}

/// Check shapes and hand the table to the driver
pub fn dispatch<D: EvaluationDriver + ?Sized>(
    driver: &mut D,
    table: &ModelTable,
    x: &Array2<f64>,
    y: &Array1<f64>,
    task: TaskType,
) -> Result<()> {
    if x.nrows() != y.len() {
        return Err(GridError::ShapeError {
            expected: format!("{} targets", x.nrows()),
            actual: format!("{} targets", y.len()),
        });
    }
    if table.is_empty() {
        return Err(GridError::DispatchError(format!(
            "model table for {} has no entries",
            table.family
        )));
    }
    if task.is_classification() {
        warn!(family = %table.family, "Dispatching regression estimators for a classification task");
    }

    info!(
        family = %table.family,
        estimators = table.len(),
        candidates = table.n_candidates(),
        n_samples = x.nrows(),
        n_features = x.ncols(),
        "Dispatching model table"
    );
    driver.evaluate(table, x, y, task)
}

/// What the planner would run for one estimator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedSearch {
    pub estimator: Estimator,
    pub n_params: usize,
    pub n_candidates: usize,
    pub n_samples: usize,
    pub n_features: usize,
    pub task: TaskType,
}

/// Driver that enumerates the search instead of running it
#[derive(Debug, Clone, Default)]
pub struct SearchPlanner {
    plans: Vec<PlannedSearch>,
    /// Cap on candidates per estimator before a warning is logged
    candidate_budget: Option<usize>,
}

impl SearchPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Warn when an estimator's grid exceeds `budget` candidates
    pub fn with_candidate_budget(mut self, budget: usize) -> Self {
        self.candidate_budget = Some(budget);
        self
    }

    /// Plans recorded so far, in table order
    pub fn plans(&self) -> &[PlannedSearch] {
        &self.plans
    }

    /// Total candidates across all recorded plans
    pub fn total_candidates(&self) -> usize {
        self.plans
            .iter()
            .fold(0usize, |acc, p| acc.saturating_add(p.n_candidates))
    }
}

impl EvaluationDriver for SearchPlanner {
    fn evaluate(
        &mut self,
        table: &ModelTable,
        x: &Array2<f64>,
        _y: &Array1<f64>,
        task: TaskType,
    ) -> Result<()> {
        for entry in table.iter() {
            let n_candidates = entry.grid.n_candidates();

            if entry.estimator.is_expensive() {
                warn!(estimator = %entry.estimator, "Estimator is slow to fit, expect a long search");
            }
            if let Some(budget) = self.candidate_budget {
                if n_candidates > budget {
                    warn!(
                        estimator = %entry.estimator,
                        candidates = n_candidates,
                        budget,
                        "Grid exceeds candidate budget"
                    );
                }
            }
            debug!(
                estimator = %entry.estimator,
                params = entry.grid.len(),
                candidates = n_candidates,
                "Planned search"
            );

            self.plans.push(PlannedSearch {
                estimator: entry.estimator,
                n_params: entry.grid.len(),
                n_candidates,
                n_samples: x.nrows(),
                n_features: x.ncols(),
                task,
            });
        }

        info!(
            family = %table.family,
            candidates = table.n_candidates(),
            "Search plan complete"
        );
        Ok(())
    }
}
