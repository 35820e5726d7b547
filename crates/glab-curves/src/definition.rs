//! Immutable curve catalogue entries.

use glab_core::{CurveId, GlabError, Result, Validate};
use serde::{Deserialize, Serialize};

use crate::{CurveFamily, Domain, Evaluator, ParameterSet};

/// One entry of the curve catalogue.
#[derive(Debug, Clone)]
pub struct CurveDefinition {
    pub id: CurveId,
    pub name: &'static str,
    pub family: CurveFamily,
    /// Human-readable formula, purely descriptive.
    pub formula: &'static str,
    pub latex: &'static str,
    /// Ordered parameter names; this is both the arity and the display order.
    pub parameter_names: &'static [&'static str],
    pub domain: Domain,
    pub evaluator: Evaluator,
}

impl CurveDefinition {
    /// Projection of this definition for display.
    pub fn info(&self) -> CurveInfo {
        CurveInfo {
            id: self.id,
            name: self.name.to_owned(),
            family: self.family,
            formula: self.formula.to_owned(),
            latex: self.latex.to_owned(),
            parameter_names: self.parameter_names.iter().map(|s| (*s).to_owned()).collect(),
            domain: self.domain,
        }
    }

    /// Check that `params` names exactly this curve's parameters.
    pub fn check_parameters(&self, params: &ParameterSet) -> Result<()> {
        for &name in self.parameter_names {
            if !params.contains(name) {
                return Err(GlabError::MissingParameter {
                    curve: self.name.to_owned(),
                    parameter: name.to_owned(),
                });
            }
        }
        let unexpected = params
            .names()
            .find(|n| !self.parameter_names.iter().any(|p| p == n));
        if let Some(extra) = unexpected {
            return Err(GlabError::UnexpectedParameter {
                curve: self.name.to_owned(),
                parameter: extra.to_owned(),
            });
        }
        Ok(())
    }
}

impl Validate for CurveDefinition {
    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(GlabError::InvalidDefinition(format!(
                "curve {} has an empty name",
                self.id
            )));
        }
        if self.evaluator.family() != self.family {
            return Err(GlabError::UnsupportedFamily(format!(
                "{} (declared {}, evaluator is {})",
                self.name,
                self.family,
                self.evaluator.family()
            )));
        }
        for (i, name) in self.parameter_names.iter().enumerate() {
            if self.parameter_names[..i].contains(name) {
                return Err(GlabError::InvalidDefinition(format!(
                    "{} lists parameter '{}' twice",
                    self.name, name
                )));
            }
        }
        self.domain.validate().map_err(|e| {
            GlabError::InvalidDefinition(format!("{} has a bad default domain: {}", self.name, e))
        })
    }
}

/// Serializable description of a curve: formula, family, parameters and domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveInfo {
    pub id: CurveId,
    pub name: String,
    pub family: CurveFamily,
    pub formula: String,
    pub latex: String,
    pub parameter_names: Vec<String>,
    pub domain: Domain,
}
