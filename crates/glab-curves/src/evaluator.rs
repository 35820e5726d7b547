//! Pure curve evaluators, one variant per family.

use glab_math::Point2;

use crate::{CurveFamily, ParameterSet};

pub type ScalarFn = fn(f64, &ParameterSet) -> f64;
pub type PointFn = fn(f64, &ParameterSet) -> Point2;
pub type VertexFn = fn(&ParameterSet) -> Vec<Point2>;

/// The formula of a curve as an executable function.
///
/// Every evaluator is a plain `fn` with no captured state, so identical
/// inputs always produce identical outputs.
#[derive(Clone, Copy)]
pub enum Evaluator {
    Cartesian(ScalarFn),
    Parametric(PointFn),
    /// Computes `r(θ)` and returns the converted point `(r cos θ, r sin θ)`.
    Polar(PointFn),
    Polygon(VertexFn),
}

impl Evaluator {
    pub fn family(&self) -> CurveFamily {
        match self {
            Evaluator::Cartesian(_) => CurveFamily::Cartesian,
            Evaluator::Parametric(_) => CurveFamily::Parametric,
            Evaluator::Polar(_) => CurveFamily::Polar,
            Evaluator::Polygon(_) => CurveFamily::Polygon,
        }
    }
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Evaluator::{:?}", self.family())
    }
}

/// Convert a polar radius at angle `theta` to a cartesian point.
pub fn polar_point(theta: f64, r: f64) -> Point2 {
    Point2::new(r * theta.cos(), r * theta.sin())
}
