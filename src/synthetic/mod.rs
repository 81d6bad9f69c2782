//! Synthetic data generation module
//!
//! Provides normally distributed feature matrices with targets derived from
//! a row-wise aggregation plus Gaussian noise.

mod regression;

pub use regression::{
    make_regression, make_regression_with, Aggregation, RegressionData, RegressionDataConfig,
};
