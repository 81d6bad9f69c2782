//! Hyperparameter search spaces
//!
//! Provides:
//! - Typed candidate values with explicit sentinels
//! - Named fragments with mapping-union merge semantics
//! - Schema-validated grids with exhaustive and randomized enumeration
//! - The shared parameter vocabulary

pub mod search_space;
pub mod grid;
pub mod vocabulary;

pub use search_space::{GpKernel, ParamFragment, ParamKind, ParamValue};
pub use grid::{Candidate, Candidates, GridBuilder, ParamGrid};
