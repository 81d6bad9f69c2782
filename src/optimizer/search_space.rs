//! Typed hyperparameter values and named grid fragments

use serde::{Serialize, Serializer};
use std::fmt;

/// Kernel choices for Gaussian-process regressors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GpKernel {
    /// Radial basis function (squared exponential)
    Rbf,
    /// Constant kernel
    Constant,
    /// Dot-product (linear) kernel
    DotProduct,
    /// White-noise kernel
    White,
}

impl GpKernel {
    /// Constructor-style label, e.g. `RBF()`
    pub fn label(&self) -> &'static str {
        match self {
            GpKernel::Rbf => "RBF()",
            GpKernel::Constant => "ConstantKernel()",
            GpKernel::DotProduct => "DotProduct()",
            GpKernel::White => "WhiteKernel()",
        }
    }
}

/// A single candidate value for one hyperparameter.
///
/// Sentinels that a dynamically typed grid would mix into numeric lists
/// (infinity, "no limit", `None`) get their own variants so that every
/// estimator schema can say explicitly whether it takes them.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Symbolic option such as a solver or loss name
    Token(String),
    /// No upper bound (infinite iterations / coefficients)
    Unlimited,
    /// Leave the estimator's own default in place
    Default,
    Kernel(GpKernel),
}

impl ParamValue {
    /// Short name of the variant, used in validation messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParamValue::Int(_) => "int",
            ParamValue::Float(_) => "float",
            ParamValue::Bool(_) => "bool",
            ParamValue::Token(_) => "token",
            ParamValue::Unlimited => "unlimited",
            ParamValue::Default => "default",
            ParamValue::Kernel(_) => "kernel",
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Float(v) => write!(f, "{}", v),
            ParamValue::Bool(v) => write!(f, "{}", v),
            ParamValue::Token(v) => write!(f, "'{}'", v),
            ParamValue::Unlimited => write!(f, "inf"),
            ParamValue::Default => write!(f, "None"),
            ParamValue::Kernel(k) => write!(f, "{}", k.label()),
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ParamValue::Int(v) => serializer.serialize_i64(*v),
            ParamValue::Float(v) => serializer.serialize_f64(*v),
            ParamValue::Bool(v) => serializer.serialize_bool(*v),
            ParamValue::Token(v) => serializer.serialize_str(v),
            ParamValue::Unlimited => serializer.serialize_str("inf"),
            ParamValue::Default => serializer.serialize_none(),
            ParamValue::Kernel(k) => serializer.serialize_str(k.label()),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Token(v.to_string())
    }
}

impl From<GpKernel> for ParamValue {
    fn from(k: GpKernel) -> Self {
        ParamValue::Kernel(k)
    }
}

/// Build a float candidate list
pub fn floats(values: &[f64]) -> Vec<ParamValue> {
    values.iter().copied().map(ParamValue::Float).collect()
}

/// Build an integer candidate list
pub fn ints(values: &[i64]) -> Vec<ParamValue> {
    values.iter().copied().map(ParamValue::Int).collect()
}

/// Build a token candidate list
pub fn tokens(values: &[&str]) -> Vec<ParamValue> {
    values.iter().map(|&v| ParamValue::from(v)).collect()
}

/// `[true, false]`
pub fn bools() -> Vec<ParamValue> {
    vec![ParamValue::Bool(true), ParamValue::Bool(false)]
}

/// What an estimator parameter accepts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamKind {
    /// Finite real number; integers are accepted as well
    Float,
    Int,
    Bool,
    /// One of a fixed set of tokens
    OneOf(&'static [&'static str]),
    Unlimited,
    Default,
    Kernel,
}

impl ParamKind {
    /// Whether a candidate value is acceptable for this kind
    pub fn accepts(&self, value: &ParamValue) -> bool {
        match (self, value) {
            (ParamKind::Float, ParamValue::Float(v)) => v.is_finite(),
            (ParamKind::Float, ParamValue::Int(_)) => true,
            (ParamKind::Int, ParamValue::Int(_)) => true,
            (ParamKind::Bool, ParamValue::Bool(_)) => true,
            (ParamKind::OneOf(allowed), ParamValue::Token(t)) => allowed.contains(&t.as_str()),
            (ParamKind::Unlimited, ParamValue::Unlimited) => true,
            (ParamKind::Default, ParamValue::Default) => true,
            (ParamKind::Kernel, ParamValue::Kernel(_)) => true,
            _ => false,
        }
    }
}

/// A named, ordered mapping from parameter name to candidate values.
///
/// Merging follows mapping-union semantics: a key keeps the position of its
/// first insertion while the value merged last wins.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ParamFragment {
    name: String,
    entries: Vec<(String, Vec<ParamValue>)>,
}

impl ParamFragment {
    /// Create an empty fragment
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Fragment name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set (or override) one key
    pub fn with(mut self, key: impl Into<String>, values: Vec<ParamValue>) -> Self {
        self.insert(key, values);
        self
    }

    /// Set (or override) one key in place
    pub fn insert(&mut self, key: impl Into<String>, values: Vec<ParamValue>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = values,
            None => self.entries.push((key, values)),
        }
    }

    /// Union another fragment into this one, later entries winning
    pub fn merge(mut self, other: &ParamFragment) -> Self {
        for (key, values) in &other.entries {
            self.insert(key.clone(), values.clone());
        }
        self
    }

    /// Candidate values for a key
    pub fn values(&self, key: &str) -> Option<&[ParamValue]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[(String, Vec<ParamValue>)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> Vec<(String, Vec<ParamValue>)> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_builder() {
        let frag = ParamFragment::new("svm")
            .with("C", floats(&[0.1, 1.0]))
            .with("kernel", tokens(&["rbf", "linear"]))
            .with("shrinking", bools());

        assert_eq!(frag.len(), 3);
        assert_eq!(frag.keys().collect::<Vec<_>>(), vec!["C", "kernel", "shrinking"]);
    }

    #[test]
    fn test_merge_last_write_wins() {
        let base = ParamFragment::new("a").with("tol", floats(&[1e-3])).with("alpha", floats(&[1.0]));
        let other = ParamFragment::new("b").with("tol", floats(&[1e-5, 1e-4]));

        let merged = base.merge(&other);

        assert_eq!(merged.values("tol"), Some(floats(&[1e-5, 1e-4]).as_slice()));
        // position of the first insertion is kept
        assert_eq!(merged.keys().collect::<Vec<_>>(), vec!["tol", "alpha"]);
    }

    #[test]
    fn test_kind_accepts() {
        assert!(ParamKind::Float.accepts(&ParamValue::Int(0)));
        assert!(!ParamKind::Float.accepts(&ParamValue::Float(f64::INFINITY)));
        assert!(!ParamKind::Int.accepts(&ParamValue::Float(1.0)));
        assert!(ParamKind::OneOf(&["svd", "lsqr"]).accepts(&"svd".into()));
        assert!(!ParamKind::OneOf(&["svd", "lsqr"]).accepts(&"saga".into()));
        assert!(ParamKind::Kernel.accepts(&GpKernel::Rbf.into()));
    }

    #[test]
    fn test_display_and_serialize() {
        assert_eq!(ParamValue::Unlimited.to_string(), "inf");
        assert_eq!(ParamValue::Default.to_string(), "None");
        assert_eq!(ParamValue::from("huber").to_string(), "'huber'");

        let json = serde_json::to_string(&vec![
            ParamValue::Int(3),
            ParamValue::Default,
            ParamValue::Kernel(GpKernel::White),
        ])
        .unwrap();
        assert_eq!(json, r#"[3,null,"WhiteKernel()"]"#);
    }
}
