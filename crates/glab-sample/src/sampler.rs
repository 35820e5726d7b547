//! Evaluation of catalogue curves over a grid.
//!
//! Gridded families (cartesian, parametric, polar) are evaluated at every
//! point of an evenly spaced grid and only finite results are kept.
//! Polygons return their outline directly. Individual bad points never fail
//! a call; only an unknown curve, a malformed definition, a parameter
//! mismatch, or an invalid domain do.

use glab_core::{BoundingBox, GlabError, Result, Validate};
use glab_curves::{CurveDefinition, CurveRegistry, Domain, Evaluator, ParameterSet};
use glab_math::{is_finite_point, Point2};

use crate::{Sample, SampleRequest, SamplerConfig};

/// Stateless sampler over a borrowed registry.
#[derive(Debug, Clone, Copy)]
pub struct Sampler<'r> {
    registry: &'r CurveRegistry,
    config: SamplerConfig,
}

impl<'r> Sampler<'r> {
    pub fn new(registry: &'r CurveRegistry, config: SamplerConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Sample `curve` with `params`, optionally over `range` instead of its default interval.
    pub fn sample(
        &self,
        curve: &str,
        params: &ParameterSet,
        range: Option<(f64, f64)>,
    ) -> Result<Sample> {
        let def = self.registry.get(curve)?;
        let domain = match range {
            Some((start, stop)) => def.domain.with_range(start, stop),
            None => def.domain,
        };
        self.sample_definition(def, params, domain)
    }

    pub fn sample_request(&self, request: &SampleRequest) -> Result<Sample> {
        let def = self.registry.get(&request.curve)?;
        let mut domain = def.domain;
        if let Some((start, stop)) = request.range {
            domain = domain.with_range(start, stop);
        }
        if let Some(count) = request.sample_count {
            domain = domain.with_sample_count(count);
        }
        self.sample_definition(def, &request.parameters, domain)
    }

    /// Sample a definition that need not come from the registry.
    pub fn sample_definition(
        &self,
        def: &CurveDefinition,
        params: &ParameterSet,
        domain: Domain,
    ) -> Result<Sample> {
        if def.evaluator.family() != def.family {
            return Err(GlabError::UnsupportedFamily(def.name.to_owned()));
        }
        def.check_parameters(params)?;

        let (points, variable, domain) = match def.evaluator {
            Evaluator::Cartesian(f) => {
                let grid = self.grid(&domain)?;
                let (points, xs) = keep_finite(grid.map(|x| (x, Point2::new(x, f(x, params)))));
                (points, xs, Some(domain))
            }
            Evaluator::Parametric(f) | Evaluator::Polar(f) => {
                let grid = self.grid(&domain)?;
                let (points, ts) = keep_finite(grid.map(|t| (t, f(t, params))));
                (points, ts, Some(domain))
            }
            Evaluator::Polygon(f) => {
                let vertices = f(params);
                let raw = vertices.len();
                let points: Vec<Point2> = vertices
                    .into_iter()
                    .filter(|&p| is_finite_point(p))
                    .collect();
                if points.len() < raw {
                    log::trace!("{}: dropped {} non-finite vertices", def.name, raw - points.len());
                }
                (points, Vec::new(), None)
            }
        };

        log::debug!(
            "sampled {} [{}]: kept {} points",
            def.name,
            def.family,
            points.len()
        );

        let mut sample = Sample {
            family: def.family,
            points: points.into_iter().map(Into::into).collect(),
            formula: def.formula.to_owned(),
            parameters: params.clone(),
            domain,
            variable,
            bounds: None,
        };
        sample.bounds = sample.bounding_box();
        Ok(sample)
    }

    fn grid(&self, domain: &Domain) -> Result<glab_math::Linspace> {
        domain.validate()?;
        if domain.sample_count > self.config.max_sample_count {
            return Err(GlabError::InvalidDomain(format!(
                "sample count {} exceeds the limit of {}",
                domain.sample_count, self.config.max_sample_count
            )));
        }
        domain.grid()
    }
}

/// Keep `(variable, point)` pairs whose point is finite, in order.
fn keep_finite(samples: impl ExactSizeIterator<Item = (f64, Point2)>) -> (Vec<Point2>, Vec<f64>) {
    let raw = samples.len();
    let mut points = Vec::with_capacity(raw);
    let mut variable = Vec::with_capacity(raw);
    for (v, p) in samples {
        if is_finite_point(p) {
            points.push(p);
            variable.push(v);
        }
    }
    if points.len() < raw {
        log::trace!("dropped {} of {} samples as non-finite", raw - points.len(), raw);
    }
    (points, variable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glab_core::CurveId;
    use glab_curves::CurveFamily;

    fn registry() -> CurveRegistry {
        CurveRegistry::builtin().unwrap()
    }

    #[test]
    fn test_linear_keeps_every_point() {
        let reg = registry();
        let sampler = Sampler::new(&reg, SamplerConfig::default());
        let params = ParameterSet::from([("a", 2.0), ("b", 1.0)]);
        let sample = sampler.sample("Linear", &params, None).unwrap();
        assert_eq!(sample.len(), 1200);
        let first = sample.first().unwrap();
        let last = sample.last().unwrap();
        assert_abs_diff_eq!(first.x, -10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.y, -19.0, epsilon = 1e-9);
        assert_abs_diff_eq!(last.x, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(last.y, 21.0, epsilon = 1e-9);
    }

    #[test]
    fn test_logarithm_drops_undefined_points() {
        let reg = registry();
        let sampler = Sampler::new(&reg, SamplerConfig::default());
        let params = ParameterSet::from([("a", 1.0), ("b", 1.0), ("c", 0.0), ("d", 0.0)]);
        let sample = sampler.sample("Logarithm", &params, None).unwrap();
        assert!(!sample.is_empty());
        assert!(sample.len() < 1600);
        assert!(sample.points.iter().all(|p| p.x > 0.0));
        assert_eq!(sample.variable.len(), sample.len());
    }

    #[test]
    fn test_range_override_keeps_count() {
        let reg = registry();
        let sampler = Sampler::new(&reg, SamplerConfig::default());
        let params = ParameterSet::from([("a", 1.0), ("b", 0.0)]);
        let sample = sampler.sample("Linear", &params, Some((0.0, 1.0))).unwrap();
        assert_eq!(sample.domain, Some(Domain::new(0.0, 1.0, 1200)));
        assert_eq!(sample.len(), 1200);
    }

    #[test]
    fn test_request_count_override() {
        let reg = registry();
        let sampler = Sampler::new(&reg, SamplerConfig::default());
        let request = SampleRequest::new("Circle", ParameterSet::from([("a", 1.0)]))
            .with_sample_count(5);
        let sample = sampler.sample_request(&request).unwrap();
        assert_eq!(sample.len(), 5);
        assert_abs_diff_eq!(sample.points[2].x, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_count_above_limit_rejected() {
        let reg = registry();
        let sampler = Sampler::new(&reg, SamplerConfig::strict());
        let request = SampleRequest::new("Circle", ParameterSet::from([("a", 1.0)]))
            .with_sample_count(1_000_000);
        assert!(matches!(
            sampler.sample_request(&request),
            Err(GlabError::InvalidDomain(_))
        ));
    }

    #[test]
    fn test_degenerate_count_rejected() {
        let reg = registry();
        let sampler = Sampler::new(&reg, SamplerConfig::default());
        let request = SampleRequest::new("Circle", ParameterSet::from([("a", 1.0)]))
            .with_sample_count(1);
        assert!(matches!(
            sampler.sample_request(&request),
            Err(GlabError::InvalidDomain(_))
        ));
    }

    #[test]
    fn test_missing_parameter() {
        let reg = registry();
        let sampler = Sampler::new(&reg, SamplerConfig::default());
        let err = sampler
            .sample("Linear", &ParameterSet::from([("a", 1.0)]), None)
            .unwrap_err();
        assert!(matches!(err, GlabError::MissingParameter { .. }));
    }

    #[test]
    fn test_mismatched_family_is_unsupported() {
        fn line(x: f64, _p: &ParameterSet) -> f64 {
            x
        }
        let reg = registry();
        let sampler = Sampler::new(&reg, SamplerConfig::default());
        let broken = CurveDefinition {
            id: CurveId::new(99),
            name: "Broken",
            family: CurveFamily::Polar,
            formula: "y = x",
            latex: "y = x",
            parameter_names: &[],
            domain: Domain::new(0.0, 1.0, 10),
            evaluator: Evaluator::Cartesian(line),
        };
        assert!(matches!(
            sampler.sample_definition(&broken, &ParameterSet::new(), broken.domain),
            Err(GlabError::UnsupportedFamily(name)) if name == "Broken"
        ));
    }

    #[test]
    fn test_polygon_has_no_domain() {
        let reg = registry();
        let sampler = Sampler::new(&reg, SamplerConfig::default());
        let params = ParameterSet::from([("scale", 1.0), ("rotation", 0.0)]);
        let sample = sampler.sample("Hexagram", &params, None).unwrap();
        assert_eq!(sample.family, CurveFamily::Polygon);
        assert!(sample.domain.is_none());
        assert!(sample.variable.is_empty());
        assert!(sample.len() > 12);
    }

    #[test]
    fn test_polygon_ignores_domain_overrides() {
        let reg = registry();
        let sampler = Sampler::new(&reg, SamplerConfig::default());
        let params = ParameterSet::from([("scale", 1.0), ("rotation", 0.0)]);
        let plain = sampler.sample("Hexagram", &params, None).unwrap();
        let request = SampleRequest::new("Hexagram", params)
            .with_range(-3.0, 3.0)
            .with_sample_count(7);
        let overridden = sampler.sample_request(&request).unwrap();
        assert_eq!(overridden.len(), 12 * 167);
        assert_eq!(overridden.points, plain.points);
        assert!(overridden.domain.is_none());
    }

    #[test]
    fn test_nan_parameter_drops_everything() {
        let reg = registry();
        let sampler = Sampler::new(&reg, SamplerConfig::default());
        let params = ParameterSet::from([("scale", f64::NAN), ("rotation", 0.0)]);
        let sample = sampler.sample("Hexagram", &params, None).unwrap();
        assert!(sample.is_empty());
        assert!(sample.bounds.is_none());
    }
}
