// File: crates/plot-core/src/series.rs
// Summary: Line series model: labelled (x, y) samples with gap handling and downsampling.

use skia_safe as skia;

use crate::downsample::lttb;

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
    /// Explicit stroke colour; `None` picks the next theme palette entry.
    pub color: Option<skia::Color>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), data_xy: Vec::new(), color: None }
    }

    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data_xy: data, color: None }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Contiguous runs of finite points. Non-finite samples (log of a negative,
    /// division by zero) split the curve so nothing is drawn across them.
    pub fn finite_runs(&self) -> Vec<&[(f64, f64)]> {
        let mut runs = Vec::new();
        let mut start: Option<usize> = None;
        for (i, &(x, y)) in self.data_xy.iter().enumerate() {
            let ok = x.is_finite() && y.is_finite();
            match (ok, start) {
                (true, None) => start = Some(i),
                (false, Some(s)) => {
                    runs.push(&self.data_xy[s..i]);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push(&self.data_xy[s..]);
        }
        runs
    }

    /// Finite runs, each downsampled with LTTB to at most `max_points`.
    pub fn drawable_runs(&self, max_points: usize) -> Vec<Vec<(f64, f64)>> {
        self.finite_runs()
            .into_iter()
            .map(|run| {
                if run.len() > max_points && max_points >= 2 {
                    lttb(run, max_points)
                } else {
                    run.to_vec()
                }
            })
            .collect()
    }

    /// (min, max) of finite y values, if any.
    pub fn finite_y_range(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &(x, y) in &self.data_xy {
            if x.is_finite() && y.is_finite() {
                lo = lo.min(y);
                hi = hi.max(y);
            }
        }
        if lo.is_finite() && hi.is_finite() { Some((lo, hi)) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_split_at_nan_and_infinity() {
        let s = Series::with_data(
            "log(x)",
            vec![(0.0, f64::NEG_INFINITY), (1.0, 0.0), (2.0, 0.7), (3.0, f64::NAN), (4.0, 1.4)],
        );
        let runs = s.finite_runs();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], &[(1.0, 0.0), (2.0, 0.7)]);
        assert_eq!(runs[1], &[(4.0, 1.4)]);
        assert_eq!(s.finite_y_range(), Some((0.0, 1.4)));
    }

    #[test]
    fn all_nan_series_has_no_range() {
        let s = Series::with_data("sqrt(x)", vec![(0.0, f64::NAN), (1.0, f64::NAN)]);
        assert!(s.finite_runs().is_empty());
        assert_eq!(s.finite_y_range(), None);
    }
}
