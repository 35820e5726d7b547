//! Polar curves `r(θ)`, converted to cartesian points by each evaluator.

use std::f64::consts::PI;

use glab_core::CurveId;
use glab_math::Point2;

use crate::evaluator::polar_point;
use crate::{CurveDefinition, CurveFamily, Domain, Evaluator, ParameterSet};

fn entry(
    id: u32,
    name: &'static str,
    formula: &'static str,
    latex: &'static str,
    parameter_names: &'static [&'static str],
    domain: Domain,
    f: fn(f64, &ParameterSet) -> Point2,
) -> CurveDefinition {
    CurveDefinition {
        id: CurveId::new(id),
        name,
        family: CurveFamily::Polar,
        formula,
        latex,
        parameter_names,
        domain,
        evaluator: Evaluator::Polar(f),
    }
}

fn rose(theta: f64, p: &ParameterSet) -> Point2 {
    polar_point(theta, p.value("a") * (p.value("k") * theta).cos())
}

fn cardioid(theta: f64, p: &ParameterSet) -> Point2 {
    polar_point(theta, p.value("a") * (1.0 - theta.cos()))
}

fn lemniscate(theta: f64, p: &ParameterSet) -> Point2 {
    let val = (2.0 * theta).cos();
    if val < 0.0 {
        return Point2::NAN;
    }
    polar_point(theta, p.value("a") * val.sqrt())
}

fn log_spiral(theta: f64, p: &ParameterSet) -> Point2 {
    polar_point(theta, p.value("a") * (p.value("b") * theta).exp())
}

fn hyperbolic_spiral(theta: f64, p: &ParameterSet) -> Point2 {
    polar_point(theta, p.value("a") / (theta + 1e-9))
}

fn archimedean_spiral(theta: f64, p: &ParameterSet) -> Point2 {
    polar_point(theta, p.value("a") + p.value("b") * theta)
}

fn butterfly(theta: f64, p: &ParameterSet) -> Point2 {
    let r = theta.sin().exp() - 2.0 * (4.0 * theta).cos()
        + ((2.0 * theta - PI) / 24.0).sin().powi(5);
    polar_point(theta, r * p.value("scale"))
}

#[rustfmt::skip]
pub(crate) fn definitions() -> Vec<CurveDefinition> {
    vec![
        entry(24, "Rose curve", "r = a*cos(k*θ)", "r = a\\cos(k\\theta)", &["a", "k"],
            Domain::new(0.0, 2.0 * PI, 2400), rose),
        entry(25, "Cardioid", "r = a*(1 - cos θ)", "r = a(1 - \\cos(\\theta))", &["a"],
            Domain::new(0.0, 2.0 * PI, 2000), cardioid),
        entry(26, "Lemniscate of Bernoulli", "r = a*sqrt(cos(2θ))",
            "r = a\\sqrt{\\cos(2\\theta)}", &["a"],
            Domain::new(0.0, 2.0 * PI, 2200), lemniscate),
        entry(27, "Logarithmic spiral", "r = a*exp(b*θ)", "r = ae^{b\\theta}", &["a", "b"],
            Domain::new(0.0, 6.0 * PI, 2400), log_spiral),
        entry(28, "Hyperbolic spiral", "r = a/θ", "r = \\frac{a}{\\theta}", &["a"],
            Domain::new(0.1, 10.0 * PI, 2400), hyperbolic_spiral),
        entry(29, "Archimedean spiral", "r = a + b*θ", "r = a + b\\theta", &["a", "b"],
            Domain::new(0.0, 8.0 * PI, 2400), archimedean_spiral),
        entry(30, "Butterfly (polar)", "r = e^{sin θ} - 2 cos(4θ) + sin^5((2θ-π)/24)",
            "r = e^{\\sin(\\theta)} - 2\\cos(4\\theta) + \\sin^5\\left(\\frac{2\\theta-\\pi}{24}\\right)",
            &["scale"], Domain::new(0.0, 12.0 * PI, 3600), butterfly),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cardioid_cusp_and_far_point() {
        let params = ParameterSet::from([("a", 1.0)]);
        assert_eq!(cardioid(0.0, &params), Point2::ZERO);
        let far = cardioid(PI, &params);
        assert_abs_diff_eq!(far.x, -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(far.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lemniscate_gap() {
        let params = ParameterSet::from([("a", 1.0)]);
        let gap = lemniscate(PI / 2.0, &params);
        assert!(gap.x.is_nan() && gap.y.is_nan());
        assert_abs_diff_eq!(lemniscate(0.0, &params).x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rose_petal_tip() {
        let params = ParameterSet::from([("a", 1.0), ("k", 3.0)]);
        let tip = rose(0.0, &params);
        assert_abs_diff_eq!(tip.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hyperbolic_spiral_finite_at_zero() {
        let params = ParameterSet::from([("a", 1.0)]);
        assert!(hyperbolic_spiral(0.0, &params).x.is_finite());
    }
}
