//! Cartesian curves `y = f(x)`.

use glab_core::CurveId;

use crate::{CurveDefinition, CurveFamily, Domain, Evaluator, ParameterSet};

fn entry(
    id: u32,
    name: &'static str,
    formula: &'static str,
    latex: &'static str,
    parameter_names: &'static [&'static str],
    domain: Domain,
    f: fn(f64, &ParameterSet) -> f64,
) -> CurveDefinition {
    CurveDefinition {
        id: CurveId::new(id),
        name,
        family: CurveFamily::Cartesian,
        formula,
        latex,
        parameter_names,
        domain,
        evaluator: Evaluator::Cartesian(f),
    }
}

fn linear(x: f64, p: &ParameterSet) -> f64 {
    p.value("a") * x + p.value("b")
}

fn quadratic(x: f64, p: &ParameterSet) -> f64 {
    p.value("a") * x.powi(2) + p.value("b") * x + p.value("c")
}

fn cubic_odd(x: f64, p: &ParameterSet) -> f64 {
    p.value("a") * x.powi(3) + p.value("b") * x
}

fn quartic_even(x: f64, p: &ParameterSet) -> f64 {
    p.value("a") * x.powi(4) + p.value("b") * x.powi(2) + p.value("c")
}

fn absolute(x: f64, p: &ParameterSet) -> f64 {
    p.value("a") * x.abs() + p.value("b")
}

fn exponential(x: f64, p: &ParameterSet) -> f64 {
    p.value("a") * (p.value("b") * x).exp() + p.value("c")
}

fn logarithm(x: f64, p: &ParameterSet) -> f64 {
    let z = p.value("b") * x + p.value("c");
    if z > 0.0 {
        p.value("a") * z.ln() + p.value("d")
    } else {
        f64::NAN
    }
}

fn power_abs(x: f64, p: &ParameterSet) -> f64 {
    p.value("a") * x.abs().powf(p.value("b")) + p.value("c")
}

fn sine(x: f64, p: &ParameterSet) -> f64 {
    p.value("a") * (p.value("b") * x + p.value("c")).sin() + p.value("d")
}

fn cosine_sum(x: f64, p: &ParameterSet) -> f64 {
    p.value("a") * (p.value("b") * x).cos() + p.value("c") * (p.value("d") * x).cos()
}

fn damped_sine(x: f64, p: &ParameterSet) -> f64 {
    p.value("a") * (-p.value("b") * x.abs()).exp() * (p.value("c") * x).sin()
}

fn gaussian(x: f64, p: &ParameterSet) -> f64 {
    let c = p.value("c");
    p.value("a") * (-(x - p.value("b")).powi(2) / (2.0 * (c.powi(2) + 1e-9))).exp()
}

fn sinc(x: f64, p: &ParameterSet) -> f64 {
    p.value("a") * (p.value("b") * x).sin() / (p.value("c") * x + 1e-9)
}

fn logistic(x: f64, p: &ParameterSet) -> f64 {
    p.value("a") / (1.0 + (-p.value("b") * (x - p.value("c"))).exp()) + p.value("d")
}

/// Points where `|cos|` falls to this or below are treated as asymptotes.
const TANGENT_ASYMPTOTE_GUARD: f64 = 0.02;

fn tangent(x: f64, p: &ParameterSet) -> f64 {
    let arg = p.value("b") * x + p.value("c");
    if arg.cos().abs() > TANGENT_ASYMPTOTE_GUARD {
        p.value("a") * arg.tan() + p.value("d")
    } else {
        f64::NAN
    }
}

fn rational(x: f64, p: &ParameterSet) -> f64 {
    p.value("a") * x / (1.0 + p.value("b") * x.powi(2))
}

#[rustfmt::skip]
pub(crate) fn definitions() -> Vec<CurveDefinition> {
    vec![
        entry(1, "Linear", "y = a*x + b", "y = ax + b", &["a", "b"],
            Domain::new(-10.0, 10.0, 1200), linear),
        entry(2, "Quadratic", "y = a*x^2 + b*x + c", "y = ax^2 + bx + c", &["a", "b", "c"],
            Domain::new(-6.0, 6.0, 1400), quadratic),
        entry(3, "Cubic (odd)", "y = a*x^3 + b*x", "y = ax^3 + bx", &["a", "b"],
            Domain::new(-4.0, 4.0, 1400), cubic_odd),
        entry(4, "Quartic (even-symmetric)", "y = a*x^4 + b*x^2 + c", "y = ax^4 + bx^2 + c",
            &["a", "b", "c"], Domain::new(-3.0, 3.0, 1400), quartic_even),
        entry(5, "Absolute value", "y = a*|x| + b", "y = a|x| + b", &["a", "b"],
            Domain::new(-10.0, 10.0, 1200), absolute),
        entry(6, "Exponential", "y = a*exp(b*x) + c", "y = ae^{bx} + c", &["a", "b", "c"],
            Domain::new(-4.0, 4.0, 1600), exponential),
        entry(7, "Logarithm", "y = a*ln(b*x + c) + d", "y = a\\log(bx + c) + d",
            &["a", "b", "c", "d"], Domain::new(-5.0, 5.0, 1600), logarithm),
        entry(8, "Power (|x|^b)", "y = a*|x|^b + c", "y = a|x|^{b} + c", &["a", "b", "c"],
            Domain::new(-4.0, 4.0, 1400), power_abs),
        entry(9, "Sine", "y = a*sin(b*x + c) + d", "y = a\\sin(bx + c) + d",
            &["a", "b", "c", "d"], Domain::new(-10.0, 10.0, 2000), sine),
        entry(10, "Cosine sum", "y = a*cos(b*x) + c*cos(d*x)", "y = a\\cos(bx) + c\\cos(dx)",
            &["a", "b", "c", "d"], Domain::new(-15.0, 15.0, 2400), cosine_sum),
        entry(11, "Damped sine", "y = a*exp(-b*|x|)*sin(c*x)", "y = ae^{-b|x|}\\sin(cx)",
            &["a", "b", "c"], Domain::new(-40.0, 40.0, 2600), damped_sine),
        entry(12, "Gaussian bell", "y = a*exp(-((x-b)^2)/(2*c^2))",
            "y = ae^{-(x-b)^2/(2c^2)}", &["a", "b", "c"],
            Domain::new(-6.0, 6.0, 1600), gaussian),
        entry(13, "Sinc", "y = a*sin(b*x)/(c*x)", "y = a\\sin(bx)/(cx)", &["a", "b", "c"],
            Domain::new(-30.0, 30.0, 2800), sinc),
        entry(14, "Logistic (sigmoid)", "y = a/(1+exp(-b*(x-c))) + d",
            "y = a/(1 + e^{-b(x-c)}) + d", &["a", "b", "c", "d"],
            Domain::new(-8.0, 8.0, 1600), logistic),
        entry(15, "Tangent", "y = a*tan(b*x + c) + d", "y = a\\tan(bx + c) + d",
            &["a", "b", "c", "d"], Domain::new(-6.0, 6.0, 2600), tangent),
        entry(16, "Rational", "y = a*x/(1 + b*x^2)", "y = ax/(1 + bx^2)", &["a", "b"],
            Domain::new(-10.0, 10.0, 2000), rational),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p<const N: usize>(pairs: [(&str, f64); N]) -> ParameterSet {
        ParameterSet::from(pairs)
    }

    #[test]
    fn test_linear() {
        let params = p([("a", 2.0), ("b", 1.0)]);
        assert_eq!(linear(-10.0, &params), -19.0);
        assert_eq!(linear(10.0, &params), 21.0);
    }

    #[test]
    fn test_logarithm_outside_domain_is_nan() {
        let params = p([("a", 1.0), ("b", 1.0), ("c", 0.0), ("d", 0.0)]);
        assert!(logarithm(-1.0, &params).is_nan());
        assert!(logarithm(0.0, &params).is_nan());
        assert_relative_eq!(logarithm(std::f64::consts::E, &params), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tangent_asymptote_is_nan() {
        let params = p([("a", 1.0), ("b", 1.0), ("c", 0.0), ("d", 0.0)]);
        assert!(tangent(std::f64::consts::FRAC_PI_2, &params).is_nan());
        assert_relative_eq!(tangent(std::f64::consts::FRAC_PI_4, &params), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sinc_guarded_at_zero() {
        let params = p([("a", 1.0), ("b", 1.0), ("c", 1.0)]);
        assert_eq!(sinc(0.0, &params), 0.0);
        assert!(sinc(1e-3, &params).is_finite());
    }

    #[test]
    fn test_gaussian_peak() {
        let params = p([("a", 2.0), ("b", 1.0), ("c", 0.5)]);
        assert_relative_eq!(gaussian(1.0, &params), 2.0);
        assert!(gaussian(0.0, &params) < 2.0);
    }

    #[test]
    fn test_ids_are_sequential() {
        let defs = definitions();
        assert_eq!(defs.len(), 16);
        for (i, def) in defs.iter().enumerate() {
            assert_eq!(def.id.value(), i as u32 + 1);
            assert_eq!(def.family, CurveFamily::Cartesian);
        }
    }
}
