//! Integration tests for data processing: synthetic generation and scaling

use ndarray::Array2;
use regress_grid::preprocessing::{standardize, Scaler, ScalerType};
use regress_grid::synthetic::{make_regression, Aggregation, RegressionDataConfig};
use regress_grid::utils::{column_mean_std, Diagnostics};

// ============================================================================
// Synthetic data
// ============================================================================

#[test]
fn test_generated_shapes() {
    for &(n, f) in &[(1, 1), (2, 5), (4, 0), (50, 3), (257, 7)] {
        let config = RegressionDataConfig::new().with_shape(n, f).with_seed(n as u64);
        let data = make_regression(&config).unwrap();
        assert_eq!(data.x.nrows(), n);
        assert_eq!(data.x.ncols(), f);
        assert_eq!(data.y.len(), n);
        assert_eq!(data.n_samples(), n);
        assert_eq!(data.n_features(), f);
    }
}

#[test]
fn test_zero_noise_targets_equal_row_sums() {
    let config = RegressionDataConfig::new()
        .with_features(10.0, 3.0)
        .with_shape(100, 3)
        .with_formula(Aggregation::Sum)
        .with_noise(0.0)
        .with_seed(2024);
    let data = make_regression(&config).unwrap();

    for (row, &target) in data.x.rows().into_iter().zip(data.y.iter()) {
        assert!((row.sum() - target).abs() < 1e-9);
    }
}

#[test]
fn test_feature_distribution_roughly_matches() {
    let config = RegressionDataConfig::new()
        .with_features(10.0, 3.0)
        .with_shape(5000, 2)
        .with_seed(7);
    let data = make_regression(&config).unwrap();
    let (mean, std) = column_mean_std(&data.x);
    for j in 0..2 {
        assert!((mean[j] - 10.0).abs() < 0.3, "mean {} too far from 10", mean[j]);
        assert!((std[j] - 3.0).abs() < 0.3, "std {} too far from 3", std[j]);
    }
}

#[test]
fn test_noise_changes_targets() {
    let base = RegressionDataConfig::new().with_seed(99);
    let data = make_regression(&base.clone().with_noise(0.5)).unwrap();
    let differs = data
        .x
        .rows()
        .into_iter()
        .zip(data.y.iter())
        .any(|(row, &t)| (row.sum() - t).abs() > 1e-9);
    assert!(differs);
}

#[test]
fn test_unseeded_runs_differ() {
    let config = RegressionDataConfig::new().with_diagnostics(Diagnostics::Suppress);
    let a = make_regression(&config).unwrap();
    let b = make_regression(&config).unwrap();
    assert_ne!(a.x, b.x);
}

// ============================================================================
// Scaling
// ============================================================================

#[test]
fn test_standardized_columns() {
    let config = RegressionDataConfig::new().with_features(10.0, 3.0).with_seed(5);
    let data = make_regression(&config).unwrap();

    let scaled = standardize(&data.x, Diagnostics::Emit).unwrap();
    assert_eq!(scaled.dim(), data.x.dim());

    let (mean, std) = column_mean_std(&scaled);
    for j in 0..scaled.ncols() {
        assert!(mean[j].abs() < 1e-10);
        assert!((std[j] - 1.0).abs() < 1e-10);
    }
}

#[test]
fn test_two_samples_are_enough() {
    let x = Array2::from_shape_vec((2, 2), vec![0.0, 5.0, 2.0, 9.0]).unwrap();
    let scaled = standardize(&x, Diagnostics::Emit).unwrap();
    assert!((scaled[[0, 0]] + 1.0).abs() < 1e-12);
    assert!((scaled[[1, 0]] - 1.0).abs() < 1e-12);
}

#[test]
fn test_scaler_reuse_on_new_data() {
    let train = Array2::from_shape_vec((3, 1), vec![1.0, 2.0, 3.0]).unwrap();
    let test = Array2::from_shape_vec((1, 1), vec![4.0]).unwrap();

    let mut scaler = Scaler::new(ScalerType::Standard);
    scaler.fit(&train).unwrap();
    let out = scaler.transform(&test).unwrap();

    let std = (2.0f64 / 3.0).sqrt();
    assert!((out[[0, 0]] - 2.0 / std).abs() < 1e-12);
}

#[test]
fn test_none_scaler_is_identity() {
    let x = Array2::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let out = Scaler::new(ScalerType::None).fit_transform(&x).unwrap();
    assert_eq!(out, x);
}

#[test]
fn test_featureless_data_scales_to_empty_matrix() {
    let config = RegressionDataConfig::new()
        .with_shape(6, 0)
        .with_seed(3)
        .with_diagnostics(Diagnostics::Suppress);
    let data = make_regression(&config).unwrap();

    let scaled = standardize(&data.x, Diagnostics::Suppress).unwrap();
    assert_eq!(scaled.dim(), (6, 0));
    assert_eq!(data.y.len(), 6);
}
