//! Preset parameter sets shipped with each curve.
//!
//! Each curve has a fixed rule mapping an index `i` in `[0, n)` to a
//! parameter set. The rules are plain arithmetic on `i`, so the generated
//! templates are reproducible bit for bit.

use std::collections::HashMap;
use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::ParameterSet;

/// Number of templates generated per curve unless configured otherwise.
pub const DEFAULT_TEMPLATE_COUNT: usize = 10;

/// A named preset parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub parameters: ParameterSet,
}

/// Source of human-facing template names.
pub trait TemplateNaming {
    /// Name for template `index` (0-based) of `curve`, if this source has one.
    fn name(&self, curve: &str, index: usize) -> Option<String>;
}

/// Falls back to `"Template 1"`, `"Template 2"`, ... for every curve.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberedNames;

impl TemplateNaming for NumberedNames {
    fn name(&self, _curve: &str, _index: usize) -> Option<String> {
        None
    }
}

/// Names looked up from a per-curve table.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    names: HashMap<String, Vec<String>>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<I, S>(&mut self, curve: impl Into<String>, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names
            .insert(curve.into(), names.into_iter().map(Into::into).collect());
    }
}

impl TemplateNaming for NameTable {
    fn name(&self, curve: &str, index: usize) -> Option<String> {
        self.names.get(curve)?.get(index).cloned()
    }
}

fn numbered(index: usize) -> String {
    format!("Template {}", index + 1)
}

type TemplateRule = fn(usize, usize) -> Option<ParameterSet>;

/// `(i % m) - offset` as a float, the cycling coefficient most rules use.
fn cycle(i: usize, m: usize, offset: f64) -> f64 {
    (i % m) as f64 - offset
}

fn linear(i: usize, n: usize) -> Option<ParameterSet> {
    let a = (i as f64 - n as f64 / 2.0) * 0.4 + 1.0;
    let b = cycle(i, 3, 1.0) * 2.0;
    Some(ParameterSet::from([("a", a), ("b", b)]))
}

fn quadratic(i: usize, _n: usize) -> Option<ParameterSet> {
    Some(ParameterSet::from([
        ("a", 0.5 + 0.2 * i as f64),
        ("b", cycle(i, 4, 2.0) * 0.8),
        ("c", cycle(i, 5, 2.0) * 1.2),
    ]))
}

fn cubic(i: usize, _n: usize) -> Option<ParameterSet> {
    Some(ParameterSet::from([
        ("a", 0.2 + 0.1 * i as f64),
        ("b", cycle(i, 5, 2.0) * 0.8),
    ]))
}

fn quartic(i: usize, _n: usize) -> Option<ParameterSet> {
    Some(ParameterSet::from([
        ("a", 0.02 + 0.04 * i as f64),
        ("b", cycle(i, 5, 2.0) * 0.5),
        ("c", cycle(i, 3, 1.0) * 1.0),
    ]))
}

fn absolute(i: usize, _n: usize) -> Option<ParameterSet> {
    Some(ParameterSet::from([
        ("a", 0.5 + 0.3 * i as f64),
        ("b", cycle(i, 5, 2.0) * 1.0),
    ]))
}

fn exponential(i: usize, _n: usize) -> Option<ParameterSet> {
    Some(ParameterSet::from([
        ("a", 1.0),
        ("b", -1.0 + 0.2 * i as f64),
        ("c", cycle(i, 3, 1.0) * 0.5),
    ]))
}

fn logarithm(i: usize, _n: usize) -> Option<ParameterSet> {
    Some(ParameterSet::from([
        ("a", 1.0),
        ("b", 0.5 + 0.1 * i as f64),
        ("c", f64::max(0.1, (i % 4) as f64 * 0.5)),
        ("d", cycle(i, 3, 1.0) * 0.5),
    ]))
}

fn power(i: usize, _n: usize) -> Option<ParameterSet> {
    const EXPONENTS: [f64; 10] = [0.5, 1.5, 2.5, 3.0, 0.8, 1.2, 2.2, 2.8, 3.5, 1.7];
    let b = *EXPONENTS.get(i)?;
    Some(ParameterSet::from([("a", 1.0), ("b", b), ("c", 0.0)]))
}

fn sine(i: usize, _n: usize) -> Option<ParameterSet> {
    Some(ParameterSet::from([
        ("a", 1.0),
        ("b", 0.5 + i as f64 * 0.5),
        ("c", i as f64 * PI / 10.0),
        ("d", 0.0),
    ]))
}

fn cosine_sum(i: usize, _n: usize) -> Option<ParameterSet> {
    const COMBOS: [(f64, f64); 10] = [
        (1.0, 2.0), (2.0, 3.0), (3.0, 5.0), (1.0, 5.0), (2.0, 7.0),
        (3.0, 7.0), (5.0, 8.0), (5.0, 9.0), (7.0, 9.0), (8.0, 13.0),
    ];
    let (b, d) = COMBOS[i % COMBOS.len()];
    Some(ParameterSet::from([("a", 1.0), ("b", b), ("c", 0.6), ("d", d)]))
}

fn damped_sine(i: usize, _n: usize) -> Option<ParameterSet> {
    Some(ParameterSet::from([
        ("a", 1.0),
        ("b", 0.05 + 0.05 * i as f64),
        ("c", 2.0 + i as f64),
    ]))
}

fn gaussian(i: usize, _n: usize) -> Option<ParameterSet> {
    Some(ParameterSet::from([
        ("a", 1.0),
        ("b", cycle(i, 5, 2.0) * 1.0),
        ("c", 0.3 + 0.1 * (i % 5) as f64),
    ]))
}

fn sinc(i: usize, _n: usize) -> Option<ParameterSet> {
    Some(ParameterSet::from([
        ("a", 1.0),
        ("b", 1.0 + 0.6 * i as f64),
        ("c", 1.0),
    ]))
}

fn logistic(i: usize, _n: usize) -> Option<ParameterSet> {
    Some(ParameterSet::from([
        ("a", 1.0),
        ("b", 2.0 + 0.5 * i as f64),
        ("c", cycle(i, 5, 2.0) * 0.5),
        ("d", 0.0),
    ]))
}

fn tangent(i: usize, _n: usize) -> Option<ParameterSet> {
    Some(ParameterSet::from([
        ("a", 1.0),
        ("b", 0.5 + 0.3 * i as f64),
        ("c", i as f64 * PI / 12.0),
        ("d", 0.0),
    ]))
}

fn rational(i: usize, _n: usize) -> Option<ParameterSet> {
    Some(ParameterSet::from([("a", 1.0), ("b", 0.2 + 0.2 * i as f64)]))
}

fn circle(i: usize, _n: usize) -> Option<ParameterSet> {
    Some(ParameterSet::from([("a", 0.5 + 0.1 * i as f64)]))
}

fn ellipse(i: usize, _n: usize) -> Option<ParameterSet> {
    Some(ParameterSet::from([
        ("a", 1.0 + 0.2 * (i % 5) as f64),
        ("b", 0.5 + 0.1 * ((i + 2) % 5) as f64),
    ]))
}

fn lissajous(i: usize, _n: usize) -> Option<ParameterSet> {
    const PAIRS: [(f64, f64); 10] = [
        (1.0, 2.0), (2.0, 1.0), (2.0, 3.0), (3.0, 2.0), (3.0, 4.0),
        (4.0, 3.0), (3.0, 5.0), (5.0, 3.0), (5.0, 4.0), (4.0, 5.0),
    ];
    let (p, q) = PAIRS[i % PAIRS.len()];
    Some(ParameterSet::from([
        ("a", 1.0),
        ("b", 1.0),
        ("p", p),
        ("q", q),
        ("delta", (i % 10) as f64 * PI / 10.0),
    ]))
}

fn hypotrochoid(i: usize, _n: usize) -> Option<ParameterSet> {
    const TRIPLES: [(f64, f64, f64); 10] = [
        (5.0, 3.0, 5.0), (7.0, 3.0, 3.0), (8.0, 3.0, 5.0), (9.0, 4.0, 3.0), (10.0, 3.0, 5.0),
        (11.0, 5.0, 5.0), (12.0, 5.0, 3.0), (13.0, 5.0, 4.0), (14.0, 3.0, 6.0), (15.0, 4.0, 5.0),
    ];
    let (big_r, r, d) = *TRIPLES.get(i)?;
    Some(ParameterSet::from([("R", big_r), ("r", r), ("d", d)]))
}

fn epicycloid(i: usize, _n: usize) -> Option<ParameterSet> {
    const PAIRS: [(f64, f64); 10] = [
        (3.0, 1.0), (4.0, 1.0), (5.0, 1.0), (5.0, 2.0), (6.0, 1.0),
        (7.0, 2.0), (7.0, 3.0), (8.0, 3.0), (9.0, 2.0), (10.0, 3.0),
    ];
    let (big_r, r) = PAIRS[i % PAIRS.len()];
    Some(ParameterSet::from([("R", big_r), ("r", r), ("d", r)]))
}

fn spiral(i: usize, _n: usize) -> Option<ParameterSet> {
    Some(ParameterSet::from([("a", 0.0), ("b", 0.05 + 0.02 * i as f64)]))
}

fn superellipse(i: usize, _n: usize) -> Option<ParameterSet> {
    const EXPONENTS: [f64; 10] = [2.0, 2.5, 3.0, 3.5, 4.0, 1.5, 5.0, 6.0, 2.2, 2.8];
    Some(ParameterSet::from([
        ("a", 1.0 + 0.2 * (i % 5) as f64),
        ("b", 1.0 + 0.2 * ((i + 2) % 5) as f64),
        ("n", EXPONENTS[i % EXPONENTS.len()]),
    ]))
}

fn rose(i: usize, _n: usize) -> Option<ParameterSet> {
    // k = 3, 4, ..., 12
    if i >= 10 {
        return None;
    }
    Some(ParameterSet::from([("a", 1.0), ("k", (i + 3) as f64)]))
}

fn unit_growth(i: usize, _n: usize) -> Option<ParameterSet> {
    Some(ParameterSet::from([("a", 1.0 + 0.1 * i as f64)]))
}

fn log_spiral(i: usize, _n: usize) -> Option<ParameterSet> {
    Some(ParameterSet::from([("a", 0.1), ("b", 0.1 + 0.05 * i as f64)]))
}

fn hyperbolic_spiral(i: usize, _n: usize) -> Option<ParameterSet> {
    Some(ParameterSet::from([("a", 1.0 + 0.2 * i as f64)]))
}

fn archimedean_spiral(i: usize, _n: usize) -> Option<ParameterSet> {
    Some(ParameterSet::from([("a", 0.0), ("b", 0.1 + 0.05 * i as f64)]))
}

fn butterfly(i: usize, _n: usize) -> Option<ParameterSet> {
    Some(ParameterSet::from([("scale", 1.0 + 0.1 * i as f64)]))
}

fn hexagram(i: usize, _n: usize) -> Option<ParameterSet> {
    Some(ParameterSet::from([
        ("scale", 1.0 + 0.1 * i as f64),
        ("rotation", i as f64 * (PI / 30.0)),
    ]))
}

fn rule_for(curve: &str) -> Option<TemplateRule> {
    let rule: TemplateRule = match curve {
        "Linear" => linear,
        "Quadratic" => quadratic,
        "Cubic (odd)" => cubic,
        "Quartic (even-symmetric)" => quartic,
        "Absolute value" => absolute,
        "Exponential" => exponential,
        "Logarithm" => logarithm,
        "Power (|x|^b)" => power,
        "Sine" => sine,
        "Cosine sum" => cosine_sum,
        "Damped sine" => damped_sine,
        "Gaussian bell" => gaussian,
        "Sinc" => sinc,
        "Logistic (sigmoid)" => logistic,
        "Tangent" => tangent,
        "Rational" => rational,
        "Circle" => circle,
        "Ellipse" => ellipse,
        "Lissajous" => lissajous,
        "Hypotrochoid (spiro)" => hypotrochoid,
        "Epicycloid (spiro)" => epicycloid,
        "Spiral (parametric)" => spiral,
        "Superellipse" => superellipse,
        "Rose curve" => rose,
        "Cardioid" | "Lemniscate of Bernoulli" => unit_growth,
        "Logarithmic spiral" => log_spiral,
        "Hyperbolic spiral" => hyperbolic_spiral,
        "Archimedean spiral" => archimedean_spiral,
        "Butterfly (polar)" => butterfly,
        "Hexagram" => hexagram,
        _ => return None,
    };
    Some(rule)
}

/// Generates the preset parameter sets of each curve.
#[derive(Debug, Clone, Copy)]
pub struct TemplateProvider {
    count: usize,
}

impl Default for TemplateProvider {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE_COUNT)
    }
}

impl TemplateProvider {
    /// Provider generating up to `count` templates per curve.
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Parameter sets for `curve` in template order; empty for an unknown curve.
    pub fn parameter_sets(&self, curve: &str) -> Vec<ParameterSet> {
        let Some(rule) = rule_for(curve) else {
            log::trace!("no template rule for curve {curve:?}");
            return Vec::new();
        };
        (0..self.count).map_while(|i| rule(i, self.count)).collect()
    }

    /// Templates named `"Template 1"`, `"Template 2"`, ...
    pub fn templates_for(&self, curve: &str) -> Vec<Template> {
        self.templates_for_with(curve, &NumberedNames)
    }

    /// Templates named by `naming`, falling back to numbered names.
    pub fn templates_for_with(&self, curve: &str, naming: &dyn TemplateNaming) -> Vec<Template> {
        self.parameter_sets(curve)
            .into_iter()
            .enumerate()
            .map(|(i, parameters)| Template {
                name: naming.name(curve, i).unwrap_or_else(|| numbered(i)),
                parameters,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rose_first_template() {
        let templates = TemplateProvider::default().templates_for("Rose curve");
        assert_eq!(templates.len(), 10);
        assert_eq!(templates[0].name, "Template 1");
        assert_eq!(templates[0].parameters, ParameterSet::from([("a", 1.0), ("k", 3.0)]));
        assert_eq!(templates[9].parameters.value("k"), 12.0);
    }

    #[test]
    fn test_linear_rule() {
        let sets = TemplateProvider::default().parameter_sets("Linear");
        // i = 0: a = (0 - 5) * 0.4 + 1 = -1, b = (0 - 1) * 2 = -2
        assert_eq!(sets[0].value("a"), (0.0 - 5.0) * 0.4 + 1.0);
        assert_eq!(sets[0].value("b"), -2.0);
        assert_eq!(sets[1].value("b"), 0.0);
        assert_eq!(sets[2].value("b"), 2.0);
    }

    #[test]
    fn test_logarithm_offset_floor() {
        let sets = TemplateProvider::default().parameter_sets("Logarithm");
        assert_eq!(sets[0].value("c"), 0.1);
        assert_eq!(sets[1].value("c"), 0.5);
        assert_eq!(sets[4].value("c"), 0.1);
    }

    #[test]
    fn test_unknown_curve_has_no_templates() {
        assert!(TemplateProvider::default().templates_for("__nonexistent__").is_empty());
    }

    #[test]
    fn test_fixed_lists_stop_early() {
        let provider = TemplateProvider::new(15);
        assert_eq!(provider.parameter_sets("Power (|x|^b)").len(), 10);
        assert_eq!(provider.parameter_sets("Hypotrochoid (spiro)").len(), 10);
        assert_eq!(provider.parameter_sets("Rose curve").len(), 10);
        assert_eq!(provider.parameter_sets("Cosine sum").len(), 15);
    }

    #[test]
    fn test_smaller_count() {
        assert_eq!(TemplateProvider::new(3).templates_for("Circle").len(), 3);
        assert!(TemplateProvider::new(0).templates_for("Circle").is_empty());
    }

    #[test]
    fn test_name_table_with_fallback() {
        let mut table = NameTable::new();
        table.insert("Cardioid", ["Apple", "Heart"]);
        let templates = TemplateProvider::default().templates_for_with("Cardioid", &table);
        assert_eq!(templates[0].name, "Apple");
        assert_eq!(templates[1].name, "Heart");
        assert_eq!(templates[2].name, "Template 3");
    }

    #[test]
    fn test_generation_is_reproducible() {
        let provider = TemplateProvider::default();
        assert_eq!(
            provider.templates_for("Lissajous"),
            provider.templates_for("Lissajous")
        );
    }
}
