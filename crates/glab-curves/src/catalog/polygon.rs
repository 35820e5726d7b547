//! Polygon curves given as explicit vertex lists.

use std::f64::consts::PI;

use glab_core::CurveId;
use glab_math::{dvec2, Point2};

use crate::{CurveDefinition, CurveFamily, Domain, Evaluator, ParameterSet};

/// Points emitted across the whole outline when densifying polygon edges.
const OUTLINE_DENSITY: f64 = 2000.0;

/// Densify a closed outline: each edge `v[i] -> v[i+1]` contributes the
/// points at `t = j / per_edge` for integer `j` with `j < per_edge`, so the
/// edge's end vertex is left to the next edge.
fn densify(vertices: &[Point2]) -> Vec<Point2> {
    let edges = vertices.len().saturating_sub(1);
    if edges == 0 {
        return vertices.to_vec();
    }
    let per_edge = (OUTLINE_DENSITY / edges as f64).max(2.0);
    let steps = per_edge.ceil() as usize;

    let mut points = Vec::with_capacity(edges * steps);
    for edge in vertices.windows(2) {
        let (p0, p1) = (edge[0], edge[1]);
        for j in 0..steps {
            let t = j as f64 / per_edge;
            points.push(p0 + (p1 - p0) * t);
        }
    }
    points
}

/// Twelve vertices alternating between the outer radius `scale` and the
/// inner radius `scale * √3 / 3`, closed back onto the first vertex.
fn hexagram_vertices(scale: f64, rotation: f64) -> Vec<Point2> {
    let outer = scale;
    let inner = 3f64.sqrt() / 3.0 * outer;
    let mut vertices: Vec<Point2> = (0..12)
        .map(|k| {
            let ang = rotation + k as f64 * (PI / 6.0);
            let rad = if k % 2 == 0 { outer } else { inner };
            dvec2(rad * ang.cos(), rad * ang.sin())
        })
        .collect();
    vertices.push(vertices[0]);
    vertices
}

fn hexagram(p: &ParameterSet) -> Vec<Point2> {
    densify(&hexagram_vertices(p.value("scale"), p.value("rotation")))
}

pub(crate) fn definitions() -> Vec<CurveDefinition> {
    vec![CurveDefinition {
        id: CurveId::new(31),
        name: "Hexagram",
        family: CurveFamily::Polygon,
        formula: "12-vertex star polygon (two equilateral triangles)",
        latex: "\\{\\, s\\,\\rho_k (\\cos(\\varphi + k\\pi/6), \\sin(\\varphi + k\\pi/6)) \\,\\}_{k=0}^{11}",
        parameter_names: &["scale", "rotation"],
        domain: Domain::new(0.0, 1.0, 2000),
        evaluator: Evaluator::Polygon(hexagram),
    }]
}
