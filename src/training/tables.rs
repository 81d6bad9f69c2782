//! Model family tables
//!
//! Each table is an ordered list of (estimator, grid) pairs. Grids are rebuilt
//! on every call and validated against their estimator while being built.

use super::config::ModelFamily;
use super::estimators::Estimator;
use crate::error::Result;
use crate::optimizer::search_space::{bools, floats, ints, tokens};
use crate::optimizer::vocabulary as v;
use crate::optimizer::{GpKernel, ParamGrid, ParamValue};
use serde::Serialize;

/// One estimator paired with its grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelEntry {
    pub estimator: Estimator,
    pub grid: ParamGrid,
}

impl ModelEntry {
    pub fn new(grid: ParamGrid) -> Self {
        Self {
            estimator: grid.estimator(),
            grid,
        }
    }
}

/// Ordered estimators of one family
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelTable {
    pub family: ModelFamily,
    pub entries: Vec<ModelEntry>,
}

impl ModelTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelEntry> {
        self.entries.iter()
    }

    /// Total number of (estimator, candidate) pairs an exhaustive driver will try
    pub fn n_candidates(&self) -> usize {
        self.entries
            .iter()
            .fold(0usize, |acc, e| acc.saturating_add(e.grid.n_candidates()))
    }

    /// Estimators in table order
    pub fn estimators(&self) -> Vec<Estimator> {
        self.entries.iter().map(|e| e.estimator).collect()
    }
}

impl ModelFamily {
    /// Build this family's table
    pub fn table(&self) -> Result<ModelTable> {
        let entries = match self {
            ModelFamily::Linear => linear_models()?,
            ModelFamily::Svm => svm_models()?,
            ModelFamily::SvmSmall => svm_models_small()?,
            ModelFamily::Neighbor => neighbor_models()?,
            ModelFamily::GaussianProcess => gaussian_process_models()?,
        };
        Ok(ModelTable {
            family: *self,
            entries: entries.into_iter().map(ModelEntry::new).collect(),
        })
    }
}

/// The prior-precision style list shared by the Bayesian regressors
fn bayes_priors() -> Vec<ParamValue> {
    floats(&[1e-6, 1e-4, 1e-2, 0.1, 0.0])
}

fn l1_ratios() -> Vec<ParamValue> {
    floats(&[0.1, 0.2, 0.3, 0.5, 0.7, 0.8, 0.9])
}

fn eps_losses() -> Vec<ParamValue> {
    tokens(&["epsilon_insensitive", "squared_epsilon_insensitive"])
}

pub fn linear_models() -> Result<Vec<ParamGrid>> {
    let mut n_nonzero = ints(&[100, 300, 500]);
    n_nonzero.push(ParamValue::Unlimited);
    let mut n_nonzero_or_default = n_nonzero.clone();
    n_nonzero_or_default.push(ParamValue::Default);

    // RANSAC reuses the iteration-count vocabulary under its own key
    let n_iter = v::n_iter();
    let max_trials = n_iter.values("n_iter").map(<[_]>::to_vec).unwrap_or_default();

    let mut min_samples = floats(&[0.1, 0.5, 0.9]);
    min_samples.push(ParamValue::Default);

    Ok(vec![
        ParamGrid::builder(Estimator::LinearRegression)
            .merge(v::normalize())
            .build()?,
        ParamGrid::builder(Estimator::Ridge)
            .merge(v::alpha())
            .merge(v::normalize())
            .merge(v::tol())
            .set("solver", tokens(&["svd", "cholesky", "lsqr", "sparse_cg", "sag"]))
            .build()?,
        ParamGrid::builder(Estimator::Lasso)
            .merge(v::alpha())
            .merge(v::normalize())
            .merge(v::tol())
            .merge(v::warm_start())
            .build()?,
        ParamGrid::builder(Estimator::ElasticNet)
            .merge(v::alpha())
            .merge(v::normalize())
            .merge(v::tol())
            .set("l1_ratio", l1_ratios())
            .build()?,
        ParamGrid::builder(Estimator::Lars)
            .merge(v::normalize())
            .set("n_nonzero_coefs", n_nonzero)
            .build()?,
        ParamGrid::builder(Estimator::LassoLars)
            .merge(v::normalize())
            .merge(v::max_iter_inf())
            .merge(v::normalize())
            .merge(v::alpha())
            .build()?,
        ParamGrid::builder(Estimator::OrthogonalMatchingPursuit)
            .set("n_nonzero_coefs", n_nonzero_or_default)
            .merge(v::tol())
            .merge(v::normalize())
            .build()?,
        ParamGrid::builder(Estimator::BayesianRidge)
            .set("n_iter", ints(&[100, 300, 1000]))
            .merge(v::tol())
            .merge(v::normalize())
            .set("alpha_1", bayes_priors())
            .set("alpha_2", bayes_priors())
            .set("lambda_1", bayes_priors())
            .set("lambda_2", bayes_priors())
            .build()?,
        ParamGrid::builder(Estimator::ARDRegression)
            .set("n_iter", ints(&[100, 300, 1000]))
            .merge(v::tol())
            .merge(v::normalize())
            .set("alpha_1", bayes_priors())
            .set("alpha_2", bayes_priors())
            .set("lambda_1", bayes_priors())
            .set("lambda_2", bayes_priors())
            .set("threshold_lambda", floats(&[1e2, 1e3, 1e4, 1e6]))
            .build()?,
        ParamGrid::builder(Estimator::SGDRegressor)
            .set(
                "loss",
                tokens(&[
                    "squared_loss",
                    "huber",
                    "epsilon_insensitive",
                    "squared_epsilon_insensitive",
                ]),
            )
            .merge(v::penalty_12e())
            .merge(v::n_iter())
            .merge(v::epsilon())
            .merge(v::eta0())
            .set("alpha", floats(&[1e-6, 1e-5, 1e-2]))
            .set("l1_ratio", l1_ratios())
            .set("learning_rate", tokens(&["constant", "optimal", "invscaling"]))
            .set("power_t", floats(&[0.1, 0.25, 0.5]))
            .build()?,
        ParamGrid::builder(Estimator::PassiveAggressiveRegressor)
            .merge(v::c())
            .merge(v::epsilon())
            .merge(v::n_iter())
            .merge(v::warm_start())
            .set("loss", eps_losses())
            .build()?,
        ParamGrid::builder(Estimator::RANSACRegressor)
            .set("min_samples", min_samples)
            .set("max_trials", max_trials)
            .set("stop_score", floats(&[0.8, 0.9, 1.0]))
            .set("stop_probability", floats(&[0.9, 0.95, 0.99, 1.0]))
            .set("loss", tokens(&["absolute_loss", "squared_loss"]))
            .build()?,
        ParamGrid::builder(Estimator::HuberRegressor)
            .set("epsilon", floats(&[1.1, 1.35, 1.5, 2.0]))
            .merge(v::max_iter())
            .merge(v::alpha())
            .merge(v::warm_start())
            .merge(v::tol())
            .build()?,
        ParamGrid::builder(Estimator::KernelRidge)
            .merge(v::alpha())
            .merge(v::degree())
            .merge(v::gamma())
            .merge(v::coef0())
            .build()?,
    ])
}

pub fn svm_models_small() -> Result<Vec<ParamGrid>> {
    Ok(vec![
        ParamGrid::builder(Estimator::SVR)
            .merge(v::c_small())
            .merge(v::epsilon())
            .merge(v::kernel())
            .merge(v::degree())
            .merge(v::gamma_small())
            .merge(v::coef0_small())
            .merge(v::shrinking())
            .build()?,
        ParamGrid::builder(Estimator::NuSVR)
            .merge(v::c_small())
            .merge(v::nu_small())
            .merge(v::kernel())
            .merge(v::degree())
            .merge(v::gamma_small())
            .merge(v::coef0_small())
            .merge(v::shrinking())
            .build()?,
        ParamGrid::builder(Estimator::LinearSVR)
            .merge(v::c_small())
            .merge(v::epsilon())
            .set("loss", eps_losses())
            .set("intercept_scaling", floats(&[0.1, 1.0, 10.0]))
            .build()?,
    ])
}

pub fn svm_models() -> Result<Vec<ParamGrid>> {
    Ok(vec![
        ParamGrid::builder(Estimator::SVR)
            .merge(v::c())
            .merge(v::epsilon())
            .merge(v::kernel())
            .merge(v::degree())
            .merge(v::gamma())
            .merge(v::coef0())
            .merge(v::shrinking())
            .merge(v::tol())
            .merge(v::max_iter_inf2())
            .build()?,
        ParamGrid::builder(Estimator::NuSVR)
            .merge(v::c())
            .merge(v::nu())
            .merge(v::kernel())
            .merge(v::degree())
            .merge(v::gamma())
            .merge(v::coef0())
            .merge(v::shrinking())
            .merge(v::tol())
            .merge(v::max_iter_inf2())
            .build()?,
        ParamGrid::builder(Estimator::LinearSVR)
            .merge(v::c())
            .merge(v::epsilon())
            .merge(v::tol())
            .merge(v::max_iter())
            .set("loss", eps_losses())
            .set("intercept_scaling", floats(&[0.1, 0.5, 1.0, 5.0, 10.0]))
            .build()?,
    ])
}

pub fn neighbor_models() -> Result<Vec<ParamGrid>> {
    Ok(vec![
        ParamGrid::builder(Estimator::RadiusNeighborsRegressor)
            .merge(v::neighbor_radius())
            .merge(v::neighbor_algo())
            .merge(v::neighbor_leaf_size())
            .merge(v::neighbor_metric())
            .set("weights", tokens(&["uniform", "distance"]))
            .set("p", ints(&[1, 2]))
            .build()?,
        ParamGrid::builder(Estimator::KNeighborsRegressor)
            .merge(v::n_neighbors())
            .merge(v::neighbor_algo())
            .merge(v::neighbor_leaf_size())
            .merge(v::neighbor_metric())
            .set("p", ints(&[1, 2]))
            .set("weights", tokens(&["uniform", "distance"]))
            .build()?,
    ])
}

pub fn gaussian_process_models() -> Result<Vec<ParamGrid>> {
    Ok(vec![ParamGrid::builder(Estimator::GaussianProcessRegressor)
        .set(
            "kernel",
            vec![
                GpKernel::Rbf.into(),
                GpKernel::Constant.into(),
                GpKernel::DotProduct.into(),
                GpKernel::White.into(),
            ],
        )
        .set("n_restarts_optimizer", ints(&[3]))
        .set("alpha", floats(&[1e-10, 1e-5]))
        .set("normalize_y", bools())
        .build()?])
}
