// File: crates/chart-core/src/axis.rs
// Summary: Value axis model with label, range and tick generation.

use crate::grid::nice_ticks;

/// Headroom added above the largest value when fitting an axis (matplotlib-like 5%).
pub const AUTO_MARGIN: f64 = 0.05;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Fit to `values`, anchoring at zero the way bar charts do.
    pub fn fit(label: impl Into<String>, values: &[f64]) -> Self {
        let mut lo = 0.0f64;
        let mut hi = 0.0f64;
        for &v in values.iter().filter(|v| v.is_finite()) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        let span = hi - lo;
        if span <= 0.0 {
            return Self::new(label, 0.0, 1.0);
        }
        let pad = span * AUTO_MARGIN;
        let min = if lo < 0.0 { lo - pad } else { 0.0 };
        Self::new(label, min, hi + pad)
    }

    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-12)
    }

    pub fn ticks(&self, target: usize) -> Vec<f64> {
        nice_ticks(self.min, self.max, target)
    }
}
