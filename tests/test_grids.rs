//! Integration test: Grid assembly, vocabulary and model family tables

use regress_grid::optimizer::search_space::{floats, ints, tokens};
use regress_grid::optimizer::{vocabulary, GpKernel, ParamFragment, ParamGrid, ParamValue};
use regress_grid::training::{Estimator, ModelFamily};
use regress_grid::GridError;

// ============================================================================
// Table structure
// ============================================================================

#[test]
fn test_every_grid_is_non_empty() {
    for family in ModelFamily::ALL {
        let table = family.table().expect("tables should validate");
        assert!(!table.is_empty(), "{} has no entries", family);

        for entry in table.iter() {
            assert!(!entry.grid.is_empty(), "{} grid is empty", entry.estimator);
            for (key, values) in entry.grid.entries() {
                assert!(!key.is_empty(), "{} has an empty key", entry.estimator);
                assert!(!values.is_empty(), "{}.{} has no candidates", entry.estimator, key);
            }
        }
    }
}

#[test]
fn test_every_grid_key_is_accepted_by_its_estimator() {
    for family in ModelFamily::ALL {
        for entry in family.table().unwrap().iter() {
            for (key, values) in entry.grid.entries() {
                for value in values {
                    assert!(
                        entry.estimator.accepts(key, value),
                        "{} rejects {} = {}",
                        entry.estimator,
                        key,
                        value
                    );
                }
            }
        }
    }
}

#[test]
fn test_linear_table_order() {
    let table = ModelFamily::Linear.table().unwrap();
    assert_eq!(
        table.estimators(),
        vec![
            Estimator::LinearRegression,
            Estimator::Ridge,
            Estimator::Lasso,
            Estimator::ElasticNet,
            Estimator::Lars,
            Estimator::LassoLars,
            Estimator::OrthogonalMatchingPursuit,
            Estimator::BayesianRidge,
            Estimator::ARDRegression,
            Estimator::SGDRegressor,
            Estimator::PassiveAggressiveRegressor,
            Estimator::RANSACRegressor,
            Estimator::HuberRegressor,
            Estimator::KernelRidge,
        ]
    );
}

#[test]
fn test_svm_small_is_smaller_than_svm() {
    let full = ModelFamily::Svm.table().unwrap();
    let small = ModelFamily::SvmSmall.table().unwrap();

    assert_eq!(full.estimators(), small.estimators());
    assert!(small.n_candidates() < full.n_candidates());
    // the reduced grids drop the tolerance and iteration sweeps
    assert!(small.entries[0].grid.get("tol").is_none());
    assert!(full.entries[0].grid.get("max_iter").unwrap().contains(&ParamValue::Unlimited));
}

#[test]
fn test_sentinels_in_linear_grids() {
    let table = ModelFamily::Linear.table().unwrap();
    let omp = table
        .iter()
        .find(|e| e.estimator == Estimator::OrthogonalMatchingPursuit)
        .unwrap();
    let coefs = omp.grid.get("n_nonzero_coefs").unwrap();
    assert!(coefs.contains(&ParamValue::Unlimited));
    assert!(coefs.contains(&ParamValue::Default));

    let lars = table.iter().find(|e| e.estimator == Estimator::Lars).unwrap();
    assert!(!lars.grid.get("n_nonzero_coefs").unwrap().contains(&ParamValue::Default));
}

#[test]
fn test_gaussian_process_table() {
    let table = ModelFamily::GaussianProcess.table().unwrap();
    assert_eq!(table.len(), 1);

    let grid = &table.entries[0].grid;
    let mut keys: Vec<&str> = grid.keys().collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["alpha", "kernel", "n_restarts_optimizer", "normalize_y"]);
    assert_eq!(
        grid.get("kernel").unwrap(),
        &[
            ParamValue::Kernel(GpKernel::Rbf),
            ParamValue::Kernel(GpKernel::Constant),
            ParamValue::Kernel(GpKernel::DotProduct),
            ParamValue::Kernel(GpKernel::White),
        ]
    );
}

#[test]
fn test_tables_are_rebuilt_fresh() {
    let a = ModelFamily::Neighbor.table().unwrap();
    let b = ModelFamily::Neighbor.table().unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// Merge semantics
// ============================================================================

#[test]
fn test_literal_override_after_two_fragments() {
    let first = ParamFragment::new("first").with("normalize", vec![ParamValue::Bool(true)]);
    let second = ParamFragment::new("second").with("normalize", vec![ParamValue::Bool(false)]);

    let grid = ParamGrid::builder(Estimator::LinearRegression)
        .merge(first)
        .merge(second)
        .set("normalize", vec![ParamValue::Bool(true), ParamValue::Bool(false)])
        .build()
        .unwrap();

    assert_eq!(
        grid.get("normalize").unwrap(),
        &[ParamValue::Bool(true), ParamValue::Bool(false)]
    );
}

#[test]
fn test_later_fragment_wins_over_earlier() {
    let grid = ParamGrid::builder(Estimator::SVR)
        .merge(vocabulary::c())
        .merge(vocabulary::c_small())
        .build()
        .unwrap();
    assert_eq!(grid.get("C"), vocabulary::c_small().values("C"));
}

#[test]
fn test_fragment_reuse_under_new_key() {
    let n_iter = vocabulary::n_iter();
    let grid = ParamGrid::builder(Estimator::RANSACRegressor)
        .set("max_trials", n_iter.values("n_iter").unwrap().to_vec())
        .build()
        .unwrap();
    assert_eq!(grid.get("max_trials").unwrap(), &ints(&[5, 10, 20])[..]);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_grid_rejects_foreign_parameter() {
    let err = ParamGrid::builder(Estimator::KNeighborsRegressor)
        .merge(vocabulary::neighbor_radius())
        .build()
        .unwrap_err();
    match err {
        GridError::UnknownParameter { estimator, name } => {
            assert_eq!(estimator, "KNeighborsRegressor");
            assert_eq!(name, "radius");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_grid_rejects_symbolic_value_in_numeric_slot() {
    let mut alphas = floats(&[1e-6, 1e-5]);
    alphas.push(ParamValue::from("optimal"));
    let result = ParamGrid::builder(Estimator::SGDRegressor).set("alpha", alphas).build();
    assert!(matches!(result, Err(GridError::InvalidParameter { .. })));
}

#[test]
fn test_grid_rejects_unknown_token() {
    let result = ParamGrid::builder(Estimator::Ridge)
        .set("solver", tokens(&["svd", "newton-cg"]))
        .build();
    assert!(matches!(result, Err(GridError::InvalidParameter { .. })));
}

// ============================================================================
// Enumeration
// ============================================================================

#[test]
fn test_exhaustive_enumeration_matches_count() {
    for family in [ModelFamily::Neighbor, ModelFamily::GaussianProcess, ModelFamily::SvmSmall] {
        for entry in family.table().unwrap().iter() {
            assert_eq!(entry.grid.candidates().count(), entry.grid.n_candidates());
        }
    }
}

#[test]
fn test_every_candidate_assigns_every_key() {
    let table = ModelFamily::GaussianProcess.table().unwrap();
    let grid = &table.entries[0].grid;
    for candidate in grid.candidates() {
        assert_eq!(candidate.len(), grid.len());
        for (key, value) in &candidate {
            assert!(grid.get(key).unwrap().contains(value));
        }
    }
}
