//! Data preprocessing module
//!
//! Provides column-wise feature scaling (standard, min-max, max-abs) over
//! dense `ndarray` matrices.

mod scaler;

pub use scaler::{standardize, Scaler, ScalerType};
