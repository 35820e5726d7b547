//! Named numeric parameters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from parameter name to value, e.g. `{a: 2, b: 1}` for `y = a*x + b`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet(BTreeMap<String, f64>);

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.0.insert(name.into(), value)
    }

    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    /// Value of `name`, or NaN when absent.
    ///
    /// Evaluators read parameters through this after the sampler has checked
    /// the set against the curve's parameter names, so NaN only surfaces when
    /// an evaluator is called directly with an incomplete set; such points
    /// are then dropped by the finite filter.
    pub fn value(&self, name: &str) -> f64 {
        self.get(name).unwrap_or(f64::NAN)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a, const N: usize> From<[(&'a str, f64); N]> for ParameterSet {
    fn from(pairs: [(&'a str, f64); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a> FromIterator<(&'a str, f64)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.to_owned(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_defaults_to_nan() {
        let p = ParameterSet::from([("a", 2.0)]);
        assert_eq!(p.value("a"), 2.0);
        assert!(p.value("b").is_nan());
        assert_eq!(p.get("b"), None);
    }

    #[test]
    fn test_builder_and_iteration_order() {
        let p = ParameterSet::new().with("b", 1.0).with("a", 2.0);
        assert_eq!(p.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(p.len(), 2);
        assert!(p.contains("a"));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let p = ParameterSet::from([("a", 1.0), ("k", 3.0)]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"a":1.0,"k":3.0}"#);
        let back: ParameterSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
