//! Curve families.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The shape of a curve's evaluator and of its sampled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveFamily {
    /// `y = f(x)` sampled over `x`.
    Cartesian,
    /// `(x(t), y(t))` sampled over `t`.
    Parametric,
    /// `r(θ)` converted to `(r cos θ, r sin θ)` by the evaluator, sampled over `θ`.
    Polar,
    /// An explicit vertex list; the independent variable is ignored.
    Polygon,
}

impl CurveFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            CurveFamily::Cartesian => "cartesian",
            CurveFamily::Parametric => "parametric",
            CurveFamily::Polar => "polar",
            CurveFamily::Polygon => "polygon",
        }
    }
}

impl fmt::Display for CurveFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
