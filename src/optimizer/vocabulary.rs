//! Shared hyperparameter vocabulary
//!
//! Reusable single-key fragments that the model family tables union into
//! per-estimator grids.

use super::search_space::{bools, floats, ints, tokens, ParamFragment, ParamValue};

fn fragment(name: &str, key: &str, values: Vec<ParamValue>) -> ParamFragment {
    ParamFragment::new(name).with(key, values)
}

pub fn alpha() -> ParamFragment {
    fragment("alpha", "alpha", floats(&[1e-6, 1e-4, 1e-2, 0.1, 0.5, 1.0, 10.0]))
}

pub fn normalize() -> ParamFragment {
    fragment("normalize", "normalize", bools())
}

pub fn tol() -> ParamFragment {
    fragment("tol", "tol", floats(&[1e-5, 1e-4, 1e-3, 1e-2]))
}

pub fn warm_start() -> ParamFragment {
    fragment("warm_start", "warm_start", bools())
}

pub fn max_iter() -> ParamFragment {
    fragment("max_iter", "max_iter", ints(&[100, 300, 1000]))
}

/// Iteration caps including no upper bound
pub fn max_iter_inf() -> ParamFragment {
    let mut values = ints(&[100, 300, 500, 1000]);
    values.push(ParamValue::Unlimited);
    fragment("max_iter_inf", "max_iter", values)
}

/// Iteration caps for libsvm-style estimators, which need far more passes
pub fn max_iter_inf2() -> ParamFragment {
    let mut values = ints(&[1000, 5000, 10_000]);
    values.push(ParamValue::Unlimited);
    fragment("max_iter_inf2", "max_iter", values)
}

pub fn n_iter() -> ParamFragment {
    fragment("n_iter", "n_iter", ints(&[5, 10, 20]))
}

pub fn penalty_12e() -> ParamFragment {
    fragment("penalty_12e", "penalty", tokens(&["l1", "l2", "elasticnet"]))
}

pub fn epsilon() -> ParamFragment {
    fragment("epsilon", "epsilon", floats(&[0.01, 0.1, 0.5, 1.0]))
}

pub fn eta0() -> ParamFragment {
    fragment("eta0", "eta0", floats(&[1e-3, 1e-2, 0.1]))
}

pub fn c() -> ParamFragment {
    fragment("C", "C", floats(&[1e-2, 0.1, 1.0, 5.0, 10.0, 100.0]))
}

pub fn c_small() -> ParamFragment {
    fragment("C_small", "C", floats(&[0.1, 1.0, 5.0]))
}

pub fn kernel() -> ParamFragment {
    fragment("kernel", "kernel", tokens(&["linear", "poly", "rbf", "sigmoid"]))
}

pub fn degree() -> ParamFragment {
    fragment("degree", "degree", ints(&[1, 2, 3, 4, 5]))
}

pub fn gamma() -> ParamFragment {
    fragment("gamma", "gamma", floats(&[1e-3, 1e-2, 0.1, 0.5, 1.0, 2.0]))
}

pub fn gamma_small() -> ParamFragment {
    fragment("gamma_small", "gamma", floats(&[1e-3, 0.1, 1.0]))
}

pub fn coef0() -> ParamFragment {
    fragment("coef0", "coef0", floats(&[0.0, 0.1, 0.3, 0.5, 0.7, 1.0]))
}

pub fn coef0_small() -> ParamFragment {
    fragment("coef0_small", "coef0", floats(&[0.0, 0.5, 1.0]))
}

pub fn shrinking() -> ParamFragment {
    fragment("shrinking", "shrinking", bools())
}

pub fn nu() -> ParamFragment {
    fragment("nu", "nu", floats(&[1e-4, 1e-2, 0.1, 0.3, 0.5, 0.75, 0.9]))
}

pub fn nu_small() -> ParamFragment {
    fragment("nu_small", "nu", floats(&[1e-2, 0.1, 0.5, 0.9]))
}

pub fn neighbor_radius() -> ParamFragment {
    fragment("neighbor_radius", "radius", floats(&[1e-2, 0.1, 1.0, 5.0, 10.0]))
}

pub fn neighbor_algo() -> ParamFragment {
    fragment(
        "neighbor_algo",
        "algorithm",
        tokens(&["auto", "ball_tree", "kd_tree", "brute"]),
    )
}

pub fn neighbor_leaf_size() -> ParamFragment {
    fragment("neighbor_leaf_size", "leaf_size", ints(&[1, 2, 5, 10, 20, 30, 50, 100]))
}

pub fn neighbor_metric() -> ParamFragment {
    fragment(
        "neighbor_metric",
        "metric",
        tokens(&["cityblock", "euclidean", "l1", "l2", "manhattan"]),
    )
}

pub fn n_neighbors() -> ParamFragment {
    fragment("n_neighbors", "n_neighbors", ints(&[2, 3, 5, 10, 25]))
}

/// Every vocabulary fragment, in declaration order
pub fn all() -> Vec<ParamFragment> {
    vec![
        alpha(),
        normalize(),
        tol(),
        warm_start(),
        max_iter(),
        max_iter_inf(),
        max_iter_inf2(),
        n_iter(),
        penalty_12e(),
        epsilon(),
        eta0(),
        c(),
        c_small(),
        kernel(),
        degree(),
        gamma(),
        gamma_small(),
        coef0(),
        coef0_small(),
        shrinking(),
        nu(),
        nu_small(),
        neighbor_radius(),
        neighbor_algo(),
        neighbor_leaf_size(),
        neighbor_metric(),
        n_neighbors(),
    ]
}

/// Look up a fragment by name
pub fn get(name: &str) -> Option<ParamFragment> {
    all().into_iter().find(|f| f.name() == name)
}
