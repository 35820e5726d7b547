//! Sampler configuration.

use std::path::Path;

use glab_core::{GlabError, Result, Validate};
use glab_curves::templates::DEFAULT_TEMPLATE_COUNT;
use serde::{Deserialize, Serialize};

/// Limits and knobs for sampling, loadable from JSON.
///
/// Missing fields take their default values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Templates generated per curve.
    pub template_count: usize,
    /// Largest accepted grid size; larger requests are rejected as invalid domains.
    pub max_sample_count: usize,
    /// Batches at least this long are sampled in parallel.
    pub parallel_threshold: usize,
}

impl SamplerConfig {
    pub const DEFAULT_MAX_SAMPLE_COUNT: usize = 100_000;
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4;
    /// Upper bound on `template_count`; every template is built eagerly.
    pub const MAX_TEMPLATE_COUNT: usize = 1_000;

    pub fn new(template_count: usize, max_sample_count: usize, parallel_threshold: usize) -> Self {
        Self {
            template_count,
            max_sample_count,
            parallel_threshold,
        }
    }

    /// Tighter limits for untrusted callers.
    pub fn strict() -> Self {
        Self {
            max_sample_count: 10_000,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GlabError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            template_count: DEFAULT_TEMPLATE_COUNT,
            max_sample_count: Self::DEFAULT_MAX_SAMPLE_COUNT,
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl Validate for SamplerConfig {
    fn validate(&self) -> Result<()> {
        if self.max_sample_count < 2 {
            return Err(GlabError::Config(format!(
                "max_sample_count must be at least 2, got {}",
                self.max_sample_count
            )));
        }
        if self.template_count > Self::MAX_TEMPLATE_COUNT {
            return Err(GlabError::Config(format!(
                "template_count must be at most {}, got {}",
                Self::MAX_TEMPLATE_COUNT,
                self.template_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SamplerConfig::default();
        assert_eq!(config.template_count, 10);
        assert_eq!(config.max_sample_count, 100_000);
        assert!(SamplerConfig::strict().max_sample_count < config.max_sample_count);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = SamplerConfig::from_json_str(r#"{"template_count": 3}"#).unwrap();
        assert_eq!(config.template_count, 3);
        assert_eq!(config.parallel_threshold, 4);
    }

    #[test]
    fn test_bad_json_is_config_error() {
        assert!(matches!(
            SamplerConfig::from_json_str("{not json"),
            Err(GlabError::Config(_))
        ));
        assert!(matches!(
            SamplerConfig::from_json_str(r#"{"max_sample_count": 1}"#),
            Err(GlabError::Config(_))
        ));
    }

    #[test]
    fn test_template_count_is_capped() {
        assert!(matches!(
            SamplerConfig::from_json_str(r#"{"template_count": 18446744073709551615}"#),
            Err(GlabError::Config(_))
        ));
        assert!(matches!(
            SamplerConfig::from_json_str(r#"{"template_count": 1001}"#),
            Err(GlabError::Config(_))
        ));
        let config = SamplerConfig::from_json_str(r#"{"template_count": 1000}"#).unwrap();
        assert_eq!(config.template_count, SamplerConfig::MAX_TEMPLATE_COUNT);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            SamplerConfig::from_json_file("/nonexistent/glab.json"),
            Err(GlabError::Io(_))
        ));
    }
}
