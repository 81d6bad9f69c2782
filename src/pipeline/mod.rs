//! Search pipeline
//!
//! Generates synthetic data, scales the features, builds the selected model
//! family table and hands everything to an evaluation driver.

mod config;

pub use config::RunConfig;

use crate::error::Result;
use crate::preprocessing::Scaler;
use crate::synthetic::make_regression;
use crate::training::{dispatch, EvaluationDriver, ModelTable};
use ndarray::{Array1, Array2};
use std::time::Instant;
use tracing::info;

/// Data and table ready for dispatch
#[derive(Debug, Clone)]
pub struct PreparedRun {
    /// Scaled feature matrix
    pub x: Array2<f64>,
    pub y: Array1<f64>,
    pub table: ModelTable,
}

/// Summary of a completed run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub n_samples: usize,
    pub n_features: usize,
    pub n_estimators: usize,
    pub n_candidates: usize,
    pub elapsed_secs: f64,
}

/// Generate, scale and build the table without dispatching
pub fn prepare(config: &RunConfig) -> Result<PreparedRun> {
    let data = make_regression(&config.data)?;

    // Fitted state is discarded after this single transform
    let x = Scaler::new(config.scaler)
        .with_diagnostics(config.data.diagnostics)
        .fit_transform(&data.x)?;

    let table = config.family.table()?;

    Ok(PreparedRun { x, y: data.y, table })
}

/// Run the full pipeline against `driver`
pub fn run<D: EvaluationDriver + ?Sized>(config: &RunConfig, driver: &mut D) -> Result<RunOutcome> {
    let start = Instant::now();
    let prepared = prepare(config)?;

    dispatch(driver, &prepared.table, &prepared.x, &prepared.y, config.task)?;

    let outcome = RunOutcome {
        n_samples: prepared.x.nrows(),
        n_features: prepared.x.ncols(),
        n_estimators: prepared.table.len(),
        n_candidates: prepared.table.n_candidates(),
        elapsed_secs: start.elapsed().as_secs_f64(),
    };
    info!(
        family = %config.family,
        estimators = outcome.n_estimators,
        candidates = outcome.n_candidates,
        elapsed_secs = outcome.elapsed_secs,
        "Run finished"
    );
    Ok(outcome)
}
