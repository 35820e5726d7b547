//! Default sampling interval and resolution of a curve.

use glab_core::{GlabError, Result, Validate};
use glab_math::Linspace;
use serde::{Deserialize, Serialize};

/// Sampling interval `[start, stop]` and the number of grid points over it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub start: f64,
    pub stop: f64,
    pub sample_count: usize,
}

impl Domain {
    pub const fn new(start: f64, stop: f64, sample_count: usize) -> Self {
        Self {
            start,
            stop,
            sample_count,
        }
    }

    /// Same resolution over a different interval.
    pub fn with_range(self, start: f64, stop: f64) -> Self {
        Self {
            start,
            stop,
            ..self
        }
    }

    /// Same interval at a different resolution.
    pub fn with_sample_count(self, sample_count: usize) -> Self {
        Self {
            sample_count,
            ..self
        }
    }

    pub fn range(&self) -> (f64, f64) {
        (self.start, self.stop)
    }

    /// The evenly spaced grid over this domain.
    pub fn grid(&self) -> Result<Linspace> {
        self.validate()?;
        Linspace::new(self.start, self.stop, self.sample_count)
    }
}

impl Validate for Domain {
    fn validate(&self) -> Result<()> {
        if self.sample_count < 2 {
            return Err(GlabError::InvalidDomain(format!(
                "sample count must be at least 2, got {}",
                self.sample_count
            )));
        }
        if !self.start.is_finite() || !self.stop.is_finite() {
            return Err(GlabError::InvalidDomain(format!(
                "bounds must be finite, got [{}, {}]",
                self.start, self.stop
            )));
        }
        if !(self.stop - self.start).is_finite() {
            return Err(GlabError::InvalidDomain(format!(
                "interval [{}, {}] is too wide to sample",
                self.start, self.stop
            )));
        }
        if self.start >= self.stop {
            return Err(GlabError::InvalidDomain(format!(
                "start must be below stop, got [{}, {}]",
                self.start, self.stop
            )));
        }
        Ok(())
    }
}
