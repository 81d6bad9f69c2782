//! Regression estimators and the parameters each one accepts

use super::config::ModelFamily;
use crate::optimizer::{ParamKind, ParamValue};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::optimizer::ParamKind::{Bool, Default as Dflt, Float, Int, Kernel, OneOf, Unlimited};

const RIDGE_SOLVERS: &[&str] = &["auto", "svd", "cholesky", "lsqr", "sparse_cg", "sag", "saga"];
const COORD_SELECTION: &[&str] = &["cyclic", "random"];
const PRECOMPUTE: &[&str] = &["auto"];
const SGD_LOSSES: &[&str] = &[
    "squared_loss",
    "huber",
    "epsilon_insensitive",
    "squared_epsilon_insensitive",
];
const PENALTIES: &[&str] = &["none", "l1", "l2", "elasticnet"];
const LEARNING_RATES: &[&str] = &["constant", "optimal", "invscaling"];
const EPS_LOSSES: &[&str] = &["epsilon_insensitive", "squared_epsilon_insensitive"];
const RANSAC_LOSSES: &[&str] = &["absolute_loss", "squared_loss"];
const KERNEL_RIDGE_KERNELS: &[&str] = &[
    "linear",
    "poly",
    "polynomial",
    "rbf",
    "laplacian",
    "sigmoid",
    "cosine",
    "chi2",
    "additive_chi2",
];
const SVM_KERNELS: &[&str] = &["linear", "poly", "rbf", "sigmoid", "precomputed"];
const SVM_GAMMA: &[&str] = &["auto", "scale"];
const WEIGHTS: &[&str] = &["uniform", "distance"];
const NEIGHBOR_ALGOS: &[&str] = &["auto", "ball_tree", "kd_tree", "brute"];
const NEIGHBOR_METRICS: &[&str] = &[
    "cityblock",
    "euclidean",
    "l1",
    "l2",
    "manhattan",
    "minkowski",
    "chebyshev",
];
const GP_OPTIMIZERS: &[&str] = &["fmin_l_bfgs_b"];

/// One accepted parameter: its name and the value kinds it takes
pub type ParamSpec = (&'static str, &'static [ParamKind]);

const LINEAR_REGRESSION: &[ParamSpec] = &[
    ("fit_intercept", &[Bool]),
    ("normalize", &[Bool]),
    ("copy_X", &[Bool]),
    ("n_jobs", &[Int, Dflt]),
];

const RIDGE: &[ParamSpec] = &[
    ("alpha", &[Float]),
    ("fit_intercept", &[Bool]),
    ("normalize", &[Bool]),
    ("copy_X", &[Bool]),
    ("max_iter", &[Int, Dflt]),
    ("tol", &[Float]),
    ("solver", &[OneOf(RIDGE_SOLVERS)]),
    ("random_state", &[Int, Dflt]),
];

const LASSO: &[ParamSpec] = &[
    ("alpha", &[Float]),
    ("fit_intercept", &[Bool]),
    ("normalize", &[Bool]),
    ("precompute", &[Bool, OneOf(PRECOMPUTE)]),
    ("copy_X", &[Bool]),
    ("max_iter", &[Int]),
    ("tol", &[Float]),
    ("warm_start", &[Bool]),
    ("positive", &[Bool]),
    ("random_state", &[Int, Dflt]),
    ("selection", &[OneOf(COORD_SELECTION)]),
];

const ELASTIC_NET: &[ParamSpec] = &[
    ("alpha", &[Float]),
    ("l1_ratio", &[Float]),
    ("fit_intercept", &[Bool]),
    ("normalize", &[Bool]),
    ("precompute", &[Bool, OneOf(PRECOMPUTE)]),
    ("copy_X", &[Bool]),
    ("max_iter", &[Int]),
    ("tol", &[Float]),
    ("warm_start", &[Bool]),
    ("positive", &[Bool]),
    ("random_state", &[Int, Dflt]),
    ("selection", &[OneOf(COORD_SELECTION)]),
];

const LARS: &[ParamSpec] = &[
    ("fit_intercept", &[Bool]),
    ("verbose", &[Bool, Int]),
    ("normalize", &[Bool]),
    ("precompute", &[Bool, OneOf(PRECOMPUTE)]),
    ("n_nonzero_coefs", &[Int, Unlimited]),
    ("eps", &[Float]),
    ("copy_X", &[Bool]),
    ("fit_path", &[Bool]),
];

const LASSO_LARS: &[ParamSpec] = &[
    ("alpha", &[Float]),
    ("fit_intercept", &[Bool]),
    ("verbose", &[Bool, Int]),
    ("normalize", &[Bool]),
    ("precompute", &[Bool, OneOf(PRECOMPUTE)]),
    ("max_iter", &[Int, Unlimited]),
    ("eps", &[Float]),
    ("copy_X", &[Bool]),
    ("fit_path", &[Bool]),
    ("positive", &[Bool]),
];

const OMP: &[ParamSpec] = &[
    ("n_nonzero_coefs", &[Int, Unlimited, Dflt]),
    ("tol", &[Float, Dflt]),
    ("fit_intercept", &[Bool]),
    ("normalize", &[Bool]),
    ("precompute", &[Bool, OneOf(PRECOMPUTE)]),
];

const BAYESIAN_RIDGE: &[ParamSpec] = &[
    ("n_iter", &[Int]),
    ("tol", &[Float]),
    ("alpha_1", &[Float]),
    ("alpha_2", &[Float]),
    ("lambda_1", &[Float]),
    ("lambda_2", &[Float]),
    ("compute_score", &[Bool]),
    ("fit_intercept", &[Bool]),
    ("normalize", &[Bool]),
    ("copy_X", &[Bool]),
    ("verbose", &[Bool]),
];

const ARD: &[ParamSpec] = &[
    ("n_iter", &[Int]),
    ("tol", &[Float]),
    ("alpha_1", &[Float]),
    ("alpha_2", &[Float]),
    ("lambda_1", &[Float]),
    ("lambda_2", &[Float]),
    ("compute_score", &[Bool]),
    ("threshold_lambda", &[Float]),
    ("fit_intercept", &[Bool]),
    ("normalize", &[Bool]),
    ("copy_X", &[Bool]),
    ("verbose", &[Bool]),
];

const SGD: &[ParamSpec] = &[
    ("loss", &[OneOf(SGD_LOSSES)]),
    ("penalty", &[OneOf(PENALTIES)]),
    ("alpha", &[Float]),
    ("l1_ratio", &[Float]),
    ("fit_intercept", &[Bool]),
    ("max_iter", &[Int, Dflt]),
    ("tol", &[Float, Dflt]),
    ("shuffle", &[Bool]),
    ("verbose", &[Int]),
    ("epsilon", &[Float]),
    ("random_state", &[Int, Dflt]),
    ("learning_rate", &[OneOf(LEARNING_RATES)]),
    ("eta0", &[Float]),
    ("power_t", &[Float]),
    ("warm_start", &[Bool]),
    ("average", &[Bool, Int]),
    ("n_iter", &[Int, Dflt]),
];

const PASSIVE_AGGRESSIVE: &[ParamSpec] = &[
    ("C", &[Float]),
    ("fit_intercept", &[Bool]),
    ("max_iter", &[Int, Dflt]),
    ("tol", &[Float, Dflt]),
    ("shuffle", &[Bool]),
    ("verbose", &[Int]),
    ("loss", &[OneOf(EPS_LOSSES)]),
    ("epsilon", &[Float]),
    ("random_state", &[Int, Dflt]),
    ("warm_start", &[Bool]),
    ("average", &[Bool, Int]),
    ("n_iter", &[Int, Dflt]),
];

const RANSAC: &[ParamSpec] = &[
    ("min_samples", &[Float, Dflt]),
    ("residual_threshold", &[Float, Dflt]),
    ("max_trials", &[Int]),
    ("max_skips", &[Int, Unlimited]),
    ("stop_n_inliers", &[Int, Unlimited]),
    ("stop_score", &[Float, Unlimited]),
    ("stop_probability", &[Float]),
    ("loss", &[OneOf(RANSAC_LOSSES)]),
    ("random_state", &[Int, Dflt]),
];

const HUBER: &[ParamSpec] = &[
    ("epsilon", &[Float]),
    ("max_iter", &[Int]),
    ("alpha", &[Float]),
    ("warm_start", &[Bool]),
    ("fit_intercept", &[Bool]),
    ("tol", &[Float]),
];

const KERNEL_RIDGE: &[ParamSpec] = &[
    ("alpha", &[Float]),
    ("kernel", &[OneOf(KERNEL_RIDGE_KERNELS)]),
    ("gamma", &[Float, Dflt]),
    ("degree", &[Int, Float]),
    ("coef0", &[Float]),
];

const SVR: &[ParamSpec] = &[
    ("kernel", &[OneOf(SVM_KERNELS)]),
    ("degree", &[Int]),
    ("gamma", &[Float, OneOf(SVM_GAMMA)]),
    ("coef0", &[Float]),
    ("tol", &[Float]),
    ("C", &[Float]),
    ("epsilon", &[Float]),
    ("shrinking", &[Bool]),
    ("cache_size", &[Float]),
    ("verbose", &[Bool]),
    ("max_iter", &[Int, Unlimited]),
];

const NU_SVR: &[ParamSpec] = &[
    ("nu", &[Float]),
    ("C", &[Float]),
    ("kernel", &[OneOf(SVM_KERNELS)]),
    ("degree", &[Int]),
    ("gamma", &[Float, OneOf(SVM_GAMMA)]),
    ("coef0", &[Float]),
    ("shrinking", &[Bool]),
    ("tol", &[Float]),
    ("cache_size", &[Float]),
    ("verbose", &[Bool]),
    ("max_iter", &[Int, Unlimited]),
];

const LINEAR_SVR: &[ParamSpec] = &[
    ("epsilon", &[Float]),
    ("tol", &[Float]),
    ("C", &[Float]),
    ("loss", &[OneOf(EPS_LOSSES)]),
    ("fit_intercept", &[Bool]),
    ("intercept_scaling", &[Float]),
    ("dual", &[Bool]),
    ("verbose", &[Int]),
    ("random_state", &[Int, Dflt]),
    ("max_iter", &[Int]),
];

const RADIUS_NEIGHBORS: &[ParamSpec] = &[
    ("radius", &[Float]),
    ("weights", &[OneOf(WEIGHTS)]),
    ("algorithm", &[OneOf(NEIGHBOR_ALGOS)]),
    ("leaf_size", &[Int]),
    ("p", &[Int]),
    ("metric", &[OneOf(NEIGHBOR_METRICS)]),
    ("n_jobs", &[Int, Dflt]),
];

const K_NEIGHBORS: &[ParamSpec] = &[
    ("n_neighbors", &[Int]),
    ("weights", &[OneOf(WEIGHTS)]),
    ("algorithm", &[OneOf(NEIGHBOR_ALGOS)]),
    ("leaf_size", &[Int]),
    ("p", &[Int]),
    ("metric", &[OneOf(NEIGHBOR_METRICS)]),
    ("n_jobs", &[Int, Dflt]),
];

const GAUSSIAN_PROCESS: &[ParamSpec] = &[
    ("kernel", &[Kernel, Dflt]),
    ("alpha", &[Float]),
    ("optimizer", &[OneOf(GP_OPTIMIZERS), Dflt]),
    ("n_restarts_optimizer", &[Int]),
    ("normalize_y", &[Bool]),
    ("copy_X_train", &[Bool]),
    ("random_state", &[Int, Dflt]),
];

/// Regression estimator identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Estimator {
    LinearRegression,
    Ridge,
    Lasso,
    ElasticNet,
    Lars,
    LassoLars,
    OrthogonalMatchingPursuit,
    BayesianRidge,
    ARDRegression,
    SGDRegressor,
    PassiveAggressiveRegressor,
    RANSACRegressor,
    HuberRegressor,
    KernelRidge,
    SVR,
    NuSVR,
    LinearSVR,
    RadiusNeighborsRegressor,
    KNeighborsRegressor,
    GaussianProcessRegressor,
}

impl Estimator {
    /// Constructor name
    pub fn name(&self) -> &'static str {
        match self {
            Estimator::LinearRegression => "LinearRegression",
            Estimator::Ridge => "Ridge",
            Estimator::Lasso => "Lasso",
            Estimator::ElasticNet => "ElasticNet",
            Estimator::Lars => "Lars",
            Estimator::LassoLars => "LassoLars",
            Estimator::OrthogonalMatchingPursuit => "OrthogonalMatchingPursuit",
            Estimator::BayesianRidge => "BayesianRidge",
            Estimator::ARDRegression => "ARDRegression",
            Estimator::SGDRegressor => "SGDRegressor",
            Estimator::PassiveAggressiveRegressor => "PassiveAggressiveRegressor",
            Estimator::RANSACRegressor => "RANSACRegressor",
            Estimator::HuberRegressor => "HuberRegressor",
            Estimator::KernelRidge => "KernelRidge",
            Estimator::SVR => "SVR",
            Estimator::NuSVR => "NuSVR",
            Estimator::LinearSVR => "LinearSVR",
            Estimator::RadiusNeighborsRegressor => "RadiusNeighborsRegressor",
            Estimator::KNeighborsRegressor => "KNeighborsRegressor",
            Estimator::GaussianProcessRegressor => "GaussianProcessRegressor",
        }
    }

    /// Family the estimator belongs to. Both SVM tables map to `Svm`.
    pub fn family(&self) -> ModelFamily {
        match self {
            Estimator::SVR | Estimator::NuSVR | Estimator::LinearSVR => ModelFamily::Svm,
            Estimator::RadiusNeighborsRegressor | Estimator::KNeighborsRegressor => {
                ModelFamily::Neighbor
            }
            Estimator::GaussianProcessRegressor => ModelFamily::GaussianProcess,
            _ => ModelFamily::Linear,
        }
    }

    /// Accepted parameters with their value kinds
    pub fn schema(&self) -> &'static [ParamSpec] {
        match self {
            Estimator::LinearRegression => LINEAR_REGRESSION,
            Estimator::Ridge => RIDGE,
            Estimator::Lasso => LASSO,
            Estimator::ElasticNet => ELASTIC_NET,
            Estimator::Lars => LARS,
            Estimator::LassoLars => LASSO_LARS,
            Estimator::OrthogonalMatchingPursuit => OMP,
            Estimator::BayesianRidge => BAYESIAN_RIDGE,
            Estimator::ARDRegression => ARD,
            Estimator::SGDRegressor => SGD,
            Estimator::PassiveAggressiveRegressor => PASSIVE_AGGRESSIVE,
            Estimator::RANSACRegressor => RANSAC,
            Estimator::HuberRegressor => HUBER,
            Estimator::KernelRidge => KERNEL_RIDGE,
            Estimator::SVR => SVR,
            Estimator::NuSVR => NU_SVR,
            Estimator::LinearSVR => LINEAR_SVR,
            Estimator::RadiusNeighborsRegressor => RADIUS_NEIGHBORS,
            Estimator::KNeighborsRegressor => K_NEIGHBORS,
            Estimator::GaussianProcessRegressor => GAUSSIAN_PROCESS,
        }
    }

    /// Value kinds accepted for a parameter, or `None` if the name is unknown
    pub fn accepted_kinds(&self, param: &str) -> Option<&'static [ParamKind]> {
        self.schema()
            .iter()
            .find(|(name, _)| *name == param)
            .map(|(_, kinds)| *kinds)
    }

    /// Whether the estimator takes `value` for `param`
    pub fn accepts(&self, param: &str, value: &ParamValue) -> bool {
        self.accepted_kinds(param)
            .map(|kinds| kinds.iter().any(|k| k.accepts(value)))
            .unwrap_or(false)
    }

    /// Whether the estimator is slow enough to deserve a warning before a sweep
    pub fn is_expensive(&self) -> bool {
        matches!(
            self,
            Estimator::ARDRegression | Estimator::GaussianProcessRegressor
        )
    }
}

impl fmt::Display for Estimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimizer::GpKernel;

    #[test]
    fn test_schema_lookup() {
        assert!(Estimator::Ridge.accepted_kinds("solver").is_some());
        assert!(Estimator::Ridge.accepted_kinds("n_neighbors").is_none());
    }

    #[test]
    fn test_accepts_typed_values() {
        assert!(Estimator::Ridge.accepts("solver", &"svd".into()));
        assert!(!Estimator::Ridge.accepts("solver", &"newton".into()));
        assert!(Estimator::Lars.accepts("n_nonzero_coefs", &ParamValue::Unlimited));
        assert!(!Estimator::Lars.accepts("n_nonzero_coefs", &ParamValue::Default));
        assert!(Estimator::OrthogonalMatchingPursuit.accepts("n_nonzero_coefs", &ParamValue::Default));
        assert!(Estimator::GaussianProcessRegressor.accepts("kernel", &GpKernel::DotProduct.into()));
        assert!(!Estimator::SVR.accepts("kernel", &GpKernel::Rbf.into()));
    }

    #[test]
    fn test_families() {
        assert_eq!(Estimator::HuberRegressor.family(), ModelFamily::Linear);
        assert_eq!(Estimator::NuSVR.family(), ModelFamily::Svm);
        assert_eq!(Estimator::KNeighborsRegressor.family(), ModelFamily::Neighbor);
    }

    #[test]
    fn test_schema_names_unique() {
        let all = [
            Estimator::LinearRegression,
            Estimator::SGDRegressor,
            Estimator::RANSACRegressor,
            Estimator::GaussianProcessRegressor,
        ];
        for est in all {
            let mut names: Vec<&str> = est.schema().iter().map(|(n, _)| *n).collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "{} repeats a parameter", est);
        }
    }
}
