use glab_curves::ParameterSet;
use serde::{Deserialize, Serialize};

/// Everything needed for one sampling call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRequest {
    pub curve: String,
    #[serde(default)]
    pub parameters: ParameterSet,
    /// Replaces the curve's default `[start, stop]`, keeping its sample count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<(f64, f64)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_count: Option<usize>,
}

impl SampleRequest {
    pub fn new(curve: impl Into<String>, parameters: ParameterSet) -> Self {
        Self {
            curve: curve.into(),
            parameters,
            range: None,
            sample_count: None,
        }
    }

    pub fn with_range(mut self, start: f64, stop: f64) -> Self {
        self.range = Some((start, stop));
        self
    }

    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = Some(sample_count);
        self
    }
}
