//! Validated parameter grids
//!
//! A grid is assembled from vocabulary fragments plus literal entries and is
//! checked against the paired estimator's schema before it can be used.

use super::search_space::{ParamFragment, ParamValue};
use crate::error::{GridError, Result};
use crate::training::Estimator;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;
use std::collections::HashMap;

/// One point of a grid: a value chosen for every key
pub type Candidate = HashMap<String, ParamValue>;

/// Candidate values per hyperparameter for one estimator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamGrid {
    estimator: Estimator,
    params: Vec<(String, Vec<ParamValue>)>,
}

impl ParamGrid {
    /// Start assembling a grid for `estimator`
    pub fn builder(estimator: Estimator) -> GridBuilder {
        GridBuilder::new(estimator)
    }

    /// Validate a fragment against the estimator's schema and wrap it
    pub fn from_fragment(estimator: Estimator, fragment: ParamFragment) -> Result<Self> {
        let params = fragment.into_entries();
        validate(estimator, &params)?;
        Ok(Self { estimator, params })
    }

    pub fn estimator(&self) -> Estimator {
        self.estimator
    }

    /// Keys in assembly order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }

    /// Candidate values for a key
    pub fn get(&self, key: &str) -> Option<&[ParamValue]> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    /// Entries in assembly order
    pub fn entries(&self) -> &[(String, Vec<ParamValue>)] {
        &self.params
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Size of the exhaustive search (product of the candidate list lengths),
    /// saturating at `usize::MAX`
    pub fn n_candidates(&self) -> usize {
        self.params
            .iter()
            .try_fold(1usize, |acc, (_, v)| acc.checked_mul(v.len()))
            .unwrap_or(usize::MAX)
    }

    /// Iterate every combination; the last key varies fastest
    pub fn candidates(&self) -> Candidates<'_> {
        Candidates {
            grid: self,
            indices: vec![0; self.params.len()],
            done: self.params.is_empty(),
        }
    }

    /// Draw one combination uniformly at random
    pub fn sample(&self, rng: &mut impl Rng) -> Candidate {
        self.params
            .iter()
            .map(|(key, values)| {
                let idx = rng.gen_range(0..values.len());
                (key.clone(), values[idx].clone())
            })
            .collect()
    }

    /// Draw `n` combinations for a randomized search
    pub fn sample_candidates(&self, n: usize, seed: Option<u64>) -> Vec<Candidate> {
        let mut rng = match seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_entropy(),
        };
        (0..n).map(|_| self.sample(&mut rng)).collect()
    }
}

/// Exhaustive iterator over a grid, see [`ParamGrid::candidates`]
pub struct Candidates<'a> {
    grid: &'a ParamGrid,
    indices: Vec<usize>,
    done: bool,
}

impl Iterator for Candidates<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        if self.done {
            return None;
        }

        let current: Candidate = self
            .grid
            .params
            .iter()
            .zip(self.indices.iter())
            .map(|((key, values), &i)| (key.clone(), values[i].clone()))
            .collect();

        // Odometer increment from the last key
        let mut pos = self.indices.len();
        loop {
            if pos == 0 {
                self.done = true;
                break;
            }
            pos -= 1;
            self.indices[pos] += 1;
            if self.indices[pos] < self.grid.params[pos].1.len() {
                break;
            }
            self.indices[pos] = 0;
        }

        Some(current)
    }
}

/// Fluent grid assembly with mapping-union semantics
#[derive(Debug, Clone)]
pub struct GridBuilder {
    estimator: Estimator,
    fragment: ParamFragment,
}

impl GridBuilder {
    pub fn new(estimator: Estimator) -> Self {
        Self {
            estimator,
            fragment: ParamFragment::new(estimator.name()),
        }
    }

    /// Union a named fragment; its keys override earlier ones
    pub fn merge(mut self, fragment: ParamFragment) -> Self {
        self.fragment = self.fragment.merge(&fragment);
        self
    }

    /// Set a literal entry; overrides any earlier value for the key
    pub fn set(mut self, key: impl Into<String>, values: Vec<ParamValue>) -> Self {
        self.fragment.insert(key, values);
        self
    }

    /// Validate and produce the grid
    pub fn build(self) -> Result<ParamGrid> {
        ParamGrid::from_fragment(self.estimator, self.fragment)
    }
}

fn validate(estimator: Estimator, params: &[(String, Vec<ParamValue>)]) -> Result<()> {
    if params.is_empty() {
        return Err(GridError::EmptyGrid(estimator.name().to_string()));
    }

    for (key, values) in params {
        if key.is_empty() {
            return Err(GridError::InvalidParameter {
                name: key.clone(),
                value: String::new(),
                reason: "parameter name must not be empty".to_string(),
            });
        }
        if estimator.accepted_kinds(key).is_none() {
            return Err(GridError::UnknownParameter {
                estimator: estimator.name().to_string(),
                name: key.clone(),
            });
        }
        if values.is_empty() {
            return Err(GridError::InvalidParameter {
                name: key.clone(),
                value: "[]".to_string(),
                reason: "candidate list must not be empty".to_string(),
            });
        }
        if let Some(bad) = values.iter().find(|v| !estimator.accepts(key, v)) {
            return Err(GridError::InvalidParameter {
                name: key.clone(),
                value: bad.to_string(),
                reason: format!("{} does not accept a {} here", estimator, bad.kind_name()),
            });
        }
    }

    Ok(())
}
