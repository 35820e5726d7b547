//! Lookup table of curve definitions.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::OnceLock;

use glab_core::{GlabError, Result, Validate};

use crate::catalog::builtin_definitions;
use crate::{CurveDefinition, CurveInfo};

/// Read-only table of curves, keyed by exact name, iterated in insertion order.
#[derive(Debug, Clone)]
pub struct CurveRegistry {
    curves: Vec<CurveDefinition>,
    index: HashMap<&'static str, usize>,
}

impl CurveRegistry {
    /// Build a registry from `definitions`, validating each entry.
    pub fn new(definitions: Vec<CurveDefinition>) -> Result<Self> {
        let mut index = HashMap::with_capacity(definitions.len());
        for (i, def) in definitions.iter().enumerate() {
            def.validate()?;
            if index.insert(def.name, i).is_some() {
                return Err(GlabError::DuplicateCurve(def.name.to_owned()));
            }
        }
        log::debug!("curve registry built with {} curves", definitions.len());
        Ok(Self {
            curves: definitions,
            index,
        })
    }

    /// The shipped catalogue.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_definitions())
    }

    /// Process-wide shared copy of the shipped catalogue.
    ///
    /// Returns the construction error if the shipped table is malformed.
    pub fn global() -> Result<&'static Self> {
        static GLOBAL: OnceLock<std::result::Result<CurveRegistry, String>> = OnceLock::new();
        GLOBAL
            .get_or_init(|| Self::builtin().map_err(|e| e.to_string()))
            .as_ref()
            .map_err(|msg| GlabError::InvalidDefinition(msg.clone()))
    }

    /// Curve names in catalogue order.
    pub fn names(&self) -> Vec<&'static str> {
        self.curves.iter().map(|c| c.name).collect()
    }

    pub fn get(&self, name: &str) -> Result<&CurveDefinition> {
        self.index
            .get(name)
            .map(|&i| &self.curves[i])
            .ok_or_else(|| GlabError::CurveNotFound(name.to_owned()))
    }

    pub fn describe(&self, name: &str) -> Result<CurveInfo> {
        self.get(name).map(CurveDefinition::info)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurveDefinition> {
        self.curves.iter()
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// One line per curve: `"01. Linear [cartesian] :: y = a*x + b :: params=a,b"`.
    pub fn listing(&self) -> String {
        let mut out = String::new();
        for (i, c) in self.curves.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = write!(
                out,
                "{}. {} [{}] :: {} :: params={}",
                c.id,
                c.name,
                c.family,
                c.formula,
                c.parameter_names.join(",")
            );
        }
        out
    }
}
