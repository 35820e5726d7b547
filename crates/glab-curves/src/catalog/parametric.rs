//! Parametric curves `(x(t), y(t))`.

use std::f64::consts::PI;

use glab_core::CurveId;
use glab_math::{dvec2, Point2};

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
        family: CurveFamily::Parametric,
        formula,
        latex,
        parameter_names,
        domain,
        evaluator: Evaluator::Parametric(f),
    }
}

/// Sign with `sign(0) == 0`, unlike `f64::signum`.
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        v
    }
}

fn circle(t: f64, p: &ParameterSet) -> Point2 {
    let a = p.value("a");
    dvec2(a * t.cos(), a * t.sin())
}

fn ellipse(t: f64, p: &ParameterSet) -> Point2 {
    dvec2(p.value("a") * t.cos(), p.value("b") * t.sin())
}

fn lissajous(t: f64, p: &ParameterSet) -> Point2 {
    dvec2(
        p.value("a") * (p.value("p") * t + p.value("delta")).sin(),
        p.value("b") * (p.value("q") * t).sin(),
    )
}

fn hypotrochoid(t: f64, p: &ParameterSet) -> Point2 {
    let (big_r, r, d) = (p.value("R"), p.value("r"), p.value("d"));
    let k = (big_r - r) / (r + 1e-9);
    dvec2(
        (big_r - r) * t.cos() + d * (k * t).cos(),
        (big_r - r) * t.sin() - d * (k * t).sin(),
    )
}

fn epicycloid(t: f64, p: &ParameterSet) -> Point2 {
    let (big_r, r, d) = (p.value("R"), p.value("r"), p.value("d"));
    let k = (big_r + r) / (r + 1e-9);
    dvec2(
        (big_r + r) * t.cos() - d * (k * t).cos(),
        (big_r + r) * t.sin() - d * (k * t).sin(),
    )
}

fn spiral(t: f64, p: &ParameterSet) -> Point2 {
    let r = p.value("a") + p.value("b") * t;
    dvec2(r * t.cos(), r * t.sin())
}

fn superellipse(t: f64, p: &ParameterSet) -> Point2 {
    let exponent = 2.0 / (p.value("n") + 1e-9);
    let (c, s) = (t.cos(), t.sin());
    dvec2(
        p.value("a") * sign(c) * c.abs().powf(exponent),
        p.value("b") * sign(s) * s.abs().powf(exponent),
    )
}

#[rustfmt::skip]
pub(crate) fn definitions() -> Vec<CurveDefinition> {
    vec![
        entry(17, "Circle", "x=a*cos(t), y=a*sin(t)",
            "\\begin{cases} x = a\\cos(t) \\\\ y = a\\sin(t) \\end{cases}",
            &["a"], Domain::new(0.0, 2.0 * PI, 1600), circle),
        entry(18, "Ellipse", "x=a*cos(t), y=b*sin(t)",
            "\\begin{cases} x = a\\cos(t) \\\\ y = b\\sin(t) \\end{cases}",
            &["a", "b"], Domain::new(0.0, 2.0 * PI, 1600), ellipse),
        entry(19, "Lissajous", "x=a*sin(p*t+δ), y=b*sin(q*t)",
            "\\begin{cases} x = a\\sin(pt + \\delta) \\\\ y = b\\sin(qt) \\end{cases}",
            &["a", "b", "p", "q", "delta"], Domain::new(0.0, 2.0 * PI, 2400), lissajous),
        entry(20, "Hypotrochoid (spiro)",
            "x=(R-r)cos t + d cos((R-r)/r * t); y=(R-r)sin t - d sin((R-r)/r * t)",
            "\\begin{cases} x = (R-r)\\cos(t) + d\\cos\\left(\\frac{(R-r)t}{r}\\right) \\\\ \
             y = (R-r)\\sin(t) - d\\sin\\left(\\frac{(R-r)t}{r}\\right) \\end{cases}",
            &["R", "r", "d"], Domain::new(0.0, 2.0 * PI * 24.0, 4800), hypotrochoid),
        entry(21, "Epicycloid (spiro)",
            "x=(R+r)cos t - d cos((R+r)/r * t); y=(R+r)sin t - d sin((R+r)/r * t)",
            "\\begin{cases} x = (R+r)\\cos(t) - d\\cos\\left(\\frac{(R+r)t}{r}\\right) \\\\ \
             y = (R+r)\\sin(t) - d\\sin\\left(\\frac{(R+r)t}{r}\\right) \\end{cases}",
            &["R", "r", "d"], Domain::new(0.0, 2.0 * PI * 16.0, 4000), epicycloid),
        entry(22, "Spiral (parametric)", "x=(a+b*t)cos t, y=(a+b*t)sin t",
            "\\begin{cases} x = (a+bt)\\cos(t) \\\\ y = (a+bt)\\sin(t) \\end{cases}",
            &["a", "b"], Domain::new(0.0, 12.0 * PI, 3600), spiral),
        entry(23, "Superellipse", "superellipse |x/a|^n + |y/b|^n = 1",
            "\\begin{cases} x = a\\cos(t)^{2/n} \\\\ y = b\\sin(t)^{2/n} \\end{cases}",
            &["a", "b", "n"], Domain::new(0.0, 2.0 * PI, 2000), superellipse),
    ]
}
