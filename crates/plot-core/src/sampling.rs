// File: crates/plot-core/src/sampling.rs
// Summary: Sample sequence generation for an x range.

use crate::definition::XRange;
use crate::grid::linspace;

/// Minimum number of samples regardless of range width.
pub const MIN_SAMPLES: usize = 100;
/// Samples per unit of x.
pub const SAMPLES_PER_UNIT: f64 = 200.0;
/// Upper bound enforced by `XRange::new`.
pub const MAX_SAMPLES: usize = 2_000_000;

/// `max(100, trunc(200 * (end - start)))`.
pub fn sample_count(range: &XRange) -> usize {
    let raw = (range.span() * SAMPLES_PER_UNIT) as usize;
    raw.max(MIN_SAMPLES)
}

/// Evenly spaced x values over a range, endpoints included.
#[derive(Clone, Debug)]
pub struct SampleSequence {
    xs: Vec<f64>,
}

impl SampleSequence {
    pub fn new(range: &XRange) -> Self {
        let n = sample_count(range);
        tracing::debug!(start = range.start(), end = range.end(), samples = n, "generating sample sequence");
        Self { xs: linspace(range.start(), range.end(), n) }
    }

    pub fn xs(&self) -> &[f64] { &self.xs }
    pub fn len(&self) -> usize { self.xs.len() }
    pub fn is_empty(&self) -> bool { self.xs.is_empty() }

    /// Pair each sample with the matching value of `ys`.
    pub fn zip(&self, ys: &[f64]) -> Vec<(f64, f64)> {
        self.xs.iter().copied().zip(ys.iter().copied()).collect()
    }
}
