//! The calling contract consumed by presentation layers.

use glab_core::{GlabError, Result, Validate};
use glab_curves::{CurveInfo, CurveRegistry, ParameterSet, Template, TemplateProvider};
use rayon::prelude::*;

use crate::{SampleRequest, SampleResult, Sampler, SamplerConfig};

/// Registry, templates and sampler behind one read-only handle.
///
/// Nothing is mutated after construction, so a `GraphLab` can be shared
/// across threads and every call is independent.
#[derive(Debug, Clone, Copy)]
pub struct GraphLab<'r> {
    registry: &'r CurveRegistry,
    templates: TemplateProvider,
    config: SamplerConfig,
}

impl GraphLab<'static> {
    /// The shipped catalogue, shared process-wide, with `config`.
    pub fn new(config: SamplerConfig) -> Result<Self> {
        config.validate()?;
        Ok(GraphLab::with_registry(CurveRegistry::global()?, config))
    }
}

/// Log a failed call; a broken catalogue is louder than a bad request.
fn report(curve: &str, err: &GlabError) {
    if err.is_request_error() {
        log::warn!("sampling {curve:?} rejected: {err}");
    } else {
        log::error!("sampling {curve:?} failed on a malformed catalogue entry: {err}");
    }
}

impl<'r> GraphLab<'r> {
    pub fn with_registry(registry: &'r CurveRegistry, config: SamplerConfig) -> Self {
        Self {
            registry,
            templates: TemplateProvider::new(config.template_count),
            config,
        }
    }

    pub fn registry(&self) -> &'r CurveRegistry {
        self.registry
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    pub fn sampler(&self) -> Sampler<'r> {
        Sampler::new(self.registry, self.config)
    }

    pub fn list_curves(&self) -> Vec<&'static str> {
        self.registry.names()
    }

    pub fn curve_info(&self, name: &str) -> Result<CurveInfo> {
        self.registry.describe(name)
    }

    /// Preset parameter sets of `name`; empty for an unknown curve.
    pub fn templates(&self, name: &str) -> Vec<Template> {
        self.templates.templates_for(name)
    }

    pub fn listing(&self) -> String {
        self.registry.listing()
    }

    pub fn default_range(&self, name: &str) -> Result<(f64, f64)> {
        Ok(self.registry.get(name)?.domain.range())
    }

    pub fn default_sample_count(&self, name: &str) -> Result<usize> {
        Ok(self.registry.get(name)?.domain.sample_count)
    }

    /// Sample `name`; failures come back as [`SampleResult::Failure`].
    pub fn sample(
        &self,
        name: &str,
        params: &ParameterSet,
        range: Option<(f64, f64)>,
    ) -> SampleResult {
        let result = self.sampler().sample(name, params, range);
        if let Err(err) = &result {
            report(name, err);
        }
        result.into()
    }

    pub fn sample_request(&self, request: &SampleRequest) -> SampleResult {
        let result = self.sampler().sample_request(request);
        if let Err(err) = &result {
            report(&request.curve, err);
        }
        result.into()
    }

    /// Sample independent requests, in parallel once the batch is large enough.
    ///
    /// Results are in request order.
    pub fn sample_batch(&self, requests: &[SampleRequest]) -> Vec<SampleResult> {
        if requests.len() >= self.config.parallel_threshold.max(1) {
            log::debug!("sampling batch of {} in parallel", requests.len());
            requests.par_iter().map(|r| self.sample_request(r)).collect()
        } else {
            requests.iter().map(|r| self.sample_request(r)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glab_core::GlabError;

    fn lab() -> GraphLab<'static> {
        GraphLab::new(SamplerConfig::default()).unwrap()
    }

    #[test]
    fn test_unknown_curve_is_error_value() {
        let result = lab().sample("__nonexistent__", &ParameterSet::new(), None);
        assert!(result.is_error());
        assert!(result.points().is_empty());
        assert_eq!(result.error(), Some("Curve not found: __nonexistent__"));
    }

    #[test]
    fn test_new_shares_global_registry() {
        let a = lab();
        let b = GraphLab::new(SamplerConfig::strict()).unwrap();
        assert!(std::ptr::eq(a.registry(), b.registry()));
        assert!(std::ptr::eq(a.registry(), CurveRegistry::global().unwrap()));
    }

    #[test]
    fn test_custom_registry() {
        let registry = CurveRegistry::builtin().unwrap();
        let lab = GraphLab::with_registry(&registry, SamplerConfig::default());
        assert_eq!(lab.list_curves().len(), 31);
        assert!(!std::ptr::eq(lab.registry(), CurveRegistry::global().unwrap()));
    }

    #[test]
    fn test_defaults() {
        let lab = lab();
        assert_eq!(lab.default_range("Linear").unwrap(), (-10.0, 10.0));
        assert_eq!(lab.default_sample_count("Sine").unwrap(), 2000);
        assert!(matches!(
            lab.default_range("nope"),
            Err(GlabError::CurveNotFound(_))
        ));
    }

    #[test]
    fn test_template_count_follows_config() {
        let config = SamplerConfig {
            template_count: 4,
            ..SamplerConfig::default()
        };
        let lab = GraphLab::new(config).unwrap();
        assert_eq!(lab.templates("Cardioid").len(), 4);
        assert!(lab.templates("nope").is_empty());
    }

    #[test]
    fn test_oversized_template_count_rejected() {
        let config = SamplerConfig {
            template_count: usize::MAX,
            ..SamplerConfig::default()
        };
        assert!(matches!(GraphLab::new(config), Err(GlabError::Config(_))));
    }

    #[test]
    fn test_batch_preserves_order() {
        let lab = lab();
        let requests: Vec<_> = lab
            .list_curves()
            .into_iter()
            .map(|name| {
                let params = lab.templates(name).remove(0).parameters;
                SampleRequest::new(name, params)
            })
            .collect();
        let results = lab.sample_batch(&requests);
        assert_eq!(results.len(), requests.len());
        for (request, result) in requests.iter().zip(&results) {
            let sample = result.sample().unwrap();
            assert_eq!(sample.formula, lab.curve_info(&request.curve).unwrap().formula);
        }
    }
}
