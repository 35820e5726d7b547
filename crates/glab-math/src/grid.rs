//! Evenly spaced sampling grids.

use glab_core::{GlabError, Result};

/// Iterator over `count` values evenly spaced from `start` to `stop` inclusive.
///
/// The `i`-th value is `start + (stop - start) * (i / (count - 1))`, so the
/// first value is exactly `start` and the last is `stop` up to rounding.
/// Scaling the span by a fraction in `[0, 1]` keeps every value finite for
/// any interval whose width is finite.
#[derive(Debug, Clone)]
pub struct Linspace {
    start: f64,
    span: f64,
    divisions: f64,
    next: usize,
    count: usize,
}

impl Linspace {
    pub fn new(start: f64, stop: f64, count: usize) -> Result<Self> {
        if count < 2 {
            return Err(GlabError::InvalidDomain(format!(
                "sample count must be at least 2, got {count}"
            )));
        }
        if !start.is_finite() || !stop.is_finite() {
            return Err(GlabError::InvalidDomain(format!(
                "bounds must be finite, got [{start}, {stop}]"
            )));
        }
        let span = stop - start;
        if !span.is_finite() {
            return Err(GlabError::InvalidDomain(format!(
                "interval [{start}, {stop}] is too wide to sample"
            )));
        }
        Ok(Self {
            start,
            span,
            divisions: (count - 1) as f64,
            next: 0,
            count,
        })
    }

    fn value_at(&self, i: usize) -> f64 {
        self.start + self.span * (i as f64 / self.divisions)
    }
}

impl Iterator for Linspace {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.count {
            return None;
        }
        let v = self.value_at(self.next);
        self.next += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Linspace {}

/// Collect a [`Linspace`] into a vector.
pub fn linspace(start: f64, stop: f64, count: usize) -> Result<Vec<f64>> {
    Ok(Linspace::new(start, stop, count)?.collect())
}
