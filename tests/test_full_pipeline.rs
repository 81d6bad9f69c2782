//! Integration test: Full pipeline (generate → scale → dispatch)

use ndarray::{Array1, Array2};
use regress_grid::pipeline::{prepare, run, RunConfig};
use regress_grid::preprocessing::Scaler;
use regress_grid::synthetic::{make_regression, Aggregation, RegressionDataConfig};
use regress_grid::training::{
    dispatch, Estimator, EvaluationDriver, ModelFamily, ModelTable, SearchPlanner, TaskType,
};
use regress_grid::utils::column_mean_std;
use regress_grid::{GridError, Result};
use std::io::Write;

/// Driver that records what it was handed
#[derive(Default)]
struct RecordingDriver {
    calls: usize,
    estimators: Vec<Estimator>,
    shape: (usize, usize),
    targets: usize,
    task: Option<TaskType>,
}

impl EvaluationDriver for RecordingDriver {
    fn evaluate(
        &mut self,
        table: &ModelTable,
        x: &Array2<f64>,
        y: &Array1<f64>,
        task: TaskType,
    ) -> Result<()> {
        self.calls += 1;
        self.estimators = table.estimators();
        self.shape = x.dim();
        self.targets = y.len();
        self.task = Some(task);
        Ok(())
    }
}

/// Driver that refuses every table
struct FailingDriver;

impl EvaluationDriver for FailingDriver {
    fn evaluate(&mut self, table: &ModelTable, _: &Array2<f64>, _: &Array1<f64>, _: TaskType) -> Result<()> {
        Err(GridError::DispatchError(format!("cannot evaluate {}", table.family)))
    }
}

#[test]
fn test_reference_scenario() {
    let config = RegressionDataConfig::new()
        .with_features(10.0, 3.0)
        .with_shape(100, 3)
        .with_formula(Aggregation::Sum)
        .with_noise(0.3)
        .with_seed(42);
    let data = make_regression(&config).unwrap();
    assert_eq!(data.x.dim(), (100, 3));
    assert_eq!(data.y.dim(), 100);

    let scaled = Scaler::standard().fit_transform(&data.x).unwrap();
    assert_eq!(scaled.dim(), (100, 3));

    let table = ModelFamily::GaussianProcess.table().unwrap();
    assert_eq!(table.len(), 1);
    let grid = &table.entries[0].grid;
    for key in ["kernel", "n_restarts_optimizer", "alpha", "normalize_y"] {
        assert!(!grid.get(key).unwrap().is_empty(), "missing {}", key);
    }

    let mut driver = RecordingDriver::default();
    dispatch(&mut driver, &table, &scaled, &data.y, TaskType::Regression).unwrap();
    assert_eq!(driver.calls, 1);
    assert_eq!(driver.estimators, vec![Estimator::GaussianProcessRegressor]);
    assert_eq!(driver.shape, (100, 3));
    assert_eq!(driver.targets, 100);
    assert_eq!(driver.task, Some(TaskType::Regression));
}

#[test]
fn test_default_run_matches_reference_scenario() {
    let mut driver = RecordingDriver::default();
    let outcome = run(&RunConfig::default(), &mut driver).unwrap();

    assert_eq!(outcome.n_samples, 100);
    assert_eq!(outcome.n_features, 3);
    assert_eq!(outcome.n_estimators, 1);
    assert_eq!(driver.estimators, vec![Estimator::GaussianProcessRegressor]);
}

#[test]
fn test_prepared_features_are_standardized() {
    let prepared = prepare(&RunConfig::default().with_seed(3)).unwrap();
    let (mean, std) = column_mean_std(&prepared.x);
    for j in 0..3 {
        assert!(mean[j].abs() < 1e-10);
        assert!((std[j] - 1.0).abs() < 1e-10);
    }
}

#[test]
fn test_every_family_dispatches() {
    for family in ModelFamily::ALL {
        let config = RunConfig::new().with_family(family).with_seed(1).quiet();
        let mut planner = SearchPlanner::new();
        let outcome = run(&config, &mut planner).unwrap();

        assert_eq!(planner.plans().len(), outcome.n_estimators);
        assert!(planner.plans().iter().all(|p| p.n_candidates > 0));
        assert!(planner.plans().iter().all(|p| p.task == TaskType::Regression));
    }
}

#[test]
fn test_driver_errors_propagate() {
    let result = run(&RunConfig::default().with_seed(8), &mut FailingDriver);
    assert!(matches!(result, Err(GridError::DispatchError(_))));
}

#[test]
fn test_invalid_data_config_stops_before_dispatch() {
    let mut config = RunConfig::default();
    config.data.n_samples = 0;

    let mut driver = RecordingDriver::default();
    assert!(run(&config, &mut driver).is_err());
    assert_eq!(driver.calls, 0);
}

#[test]
fn test_run_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"family": "neighbors", "data": {{"n_samples": 30, "n_features": 2, "seed": 4}}}}"#
    )
    .unwrap();

    let config = RunConfig::from_json_file(file.path()).unwrap();
    let mut driver = RecordingDriver::default();
    run(&config, &mut driver).unwrap();

    assert_eq!(driver.shape, (30, 2));
    assert_eq!(
        driver.estimators,
        vec![Estimator::RadiusNeighborsRegressor, Estimator::KNeighborsRegressor]
    );
}
