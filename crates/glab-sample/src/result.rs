//! Output of a sampling call.

use glab_core::{BoundingBox, GlabError, Result};
use glab_curves::{CurveFamily, Domain, ParameterSet};
use glab_math::{Aabb2, Point2};
use serde::{Deserialize, Serialize};

/// One kept sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

impl From<Point2> for SamplePoint {
    fn from(p: Point2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<SamplePoint> for Point2 {
    fn from(p: SamplePoint) -> Self {
        Point2::new(p.x, p.y)
    }
}

/// A successfully sampled curve, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub family: CurveFamily,
    /// Finite points in sampling order.
    pub points: Vec<SamplePoint>,
    pub formula: String,
    pub parameters: ParameterSet,
    /// Resolved grid; absent for polygons, which ignore it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
    /// Independent variable (`x`, `t` or `θ`) of each kept point.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variable: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Aabb2>,
}

impl Sample {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<SamplePoint> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<SamplePoint> {
        self.points.last().copied()
    }
}

impl BoundingBox for Sample {
    type Bounds = Aabb2;

    fn bounding_box(&self) -> Option<Aabb2> {
        let points: Vec<Point2> = self.points.iter().copied().map(Point2::from).collect();
        Aabb2::from_points(&points)
    }
}

/// The serializable result contract: a sample or an error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampleResult {
    Success(Sample),
    Failure { error: String },
}

impl SampleResult {
    pub fn is_error(&self) -> bool {
        matches!(self, SampleResult::Failure { .. })
    }

    pub fn sample(&self) -> Option<&Sample> {
        match self {
            SampleResult::Success(sample) => Some(sample),
            SampleResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SampleResult::Success(_) => None,
            SampleResult::Failure { error } => Some(error.as_str()),
        }
    }

    /// Kept points; empty on failure.
    pub fn points(&self) -> &[SamplePoint] {
        match self {
            SampleResult::Success(sample) => &sample.points,
            SampleResult::Failure { .. } => &[],
        }
    }
}

impl From<Result<Sample>> for SampleResult {
    fn from(result: Result<Sample>) -> Self {
        match result {
            Ok(sample) => SampleResult::Success(sample),
            Err(err) => err.into(),
        }
    }
}

impl From<GlabError> for SampleResult {
    fn from(err: GlabError) -> Self {
        SampleResult::Failure {
            error: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_sample() -> Sample {
        Sample {
            family: CurveFamily::Cartesian,
            points: vec![SamplePoint { x: 0.0, y: 1.0 }, SamplePoint { x: 1.0, y: 3.0 }],
            formula: "y = a*x + b".into(),
            parameters: ParameterSet::from([("a", 2.0), ("b", 1.0)]),
            domain: Some(Domain::new(0.0, 1.0, 2)),
            variable: vec![0.0, 1.0],
            bounds: None,
        }
    }

    #[test]
    fn test_success_json_shape() {
        let json = serde_json::to_value(SampleResult::Success(tiny_sample())).unwrap();
        assert_eq!(json["family"], "cartesian");
        assert_eq!(json["points"][1]["x"], 1.0);
        assert_eq!(json["points"][1]["y"], 3.0);
        assert_eq!(json["formula"], "y = a*x + b");
        assert_eq!(json["parameters"]["a"], 2.0);
        assert!(json.get("error").is_none());
        assert!(json.get("bounds").is_none());
    }

    #[test]
    fn test_failure_json_shape() {
        let result: SampleResult = GlabError::CurveNotFound("Nope".into()).into();
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"error":"Curve not found: Nope"}"#);
        assert!(result.points().is_empty());
    }

    #[test]
    fn test_untagged_roundtrip_picks_variant() {
        let text = r#"{"error":"boom"}"#;
        let parsed: SampleResult = serde_json::from_str(text).unwrap();
        assert_eq!(parsed.error(), Some("boom"));
    }

    #[test]
    fn test_bounding_box() {
        let bounds = tiny_sample().bounding_box().unwrap();
        assert_eq!(bounds.min, Point2::new(0.0, 1.0));
        assert_eq!(bounds.max, Point2::new(1.0, 3.0));
    }
}
