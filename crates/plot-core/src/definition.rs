// File: crates/plot-core/src/definition.rs
// Summary: Graph definition model (equations, x range, optional y limits) with validated constructors.

use thiserror::Error;

use crate::sampling::{sample_count, MAX_SAMPLES};

/// Reasons a range or limit pair is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    #[error("bounds must be finite numbers")]
    NotFinite,
    #[error("start must be less than end")]
    StartNotBeforeEnd,
    #[error("lower limit must be less than upper limit")]
    LowNotBelowHigh,
    #[error("range is too wide: {samples} samples exceeds the limit of {MAX_SAMPLES}")]
    TooWide { samples: usize },
}

/// Horizontal extent of a graph. Contract: `start < end`, both finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct XRange {
    start: f64,
    end: f64,
}

impl XRange {
    pub fn new(start: f64, end: f64) -> Result<Self, RangeError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(RangeError::NotFinite);
        }
        if start >= end {
            return Err(RangeError::StartNotBeforeEnd);
        }
        let range = Self { start, end };
        let samples = sample_count(&range);
        if samples > MAX_SAMPLES {
            return Err(RangeError::TooWide { samples });
        }
        Ok(range)
    }

    pub fn start(&self) -> f64 { self.start }
    pub fn end(&self) -> f64 { self.end }
    pub fn span(&self) -> f64 { self.end - self.start }
}

/// Clamped vertical extent. Contract: `low < high`, both finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YLimits {
    low: f64,
    high: f64,
}

impl YLimits {
    pub fn new(low: f64, high: f64) -> Result<Self, RangeError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(RangeError::NotFinite);
        }
        if low >= high {
            return Err(RangeError::LowNotBelowHigh);
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 { self.low }
    pub fn high(&self) -> f64 { self.high }
}

/// One saved or about-to-be-plotted graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphDefinition {
    pub equations: Vec<String>,
    pub x_range: XRange,
    pub y_limits: Option<YLimits>,
}

impl GraphDefinition {
    pub fn new(equations: Vec<String>, x_range: XRange, y_limits: Option<YLimits>) -> Self {
        Self { equations, x_range, y_limits }
    }

    /// Chart title listing every equation.
    pub fn title(&self) -> String {
        format!("Graphs of {}", self.equations.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_range_rejects_inverted_and_empty() {
        assert_eq!(XRange::new(1.0, 1.0), Err(RangeError::StartNotBeforeEnd));
        assert_eq!(XRange::new(2.0, -2.0), Err(RangeError::StartNotBeforeEnd));
        assert!(XRange::new(-2.0, 2.0).is_ok());
    }

    #[test]
    fn x_range_rejects_non_finite() {
        assert_eq!(XRange::new(f64::NEG_INFINITY, 0.0), Err(RangeError::NotFinite));
        assert_eq!(XRange::new(0.0, f64::NAN), Err(RangeError::NotFinite));
    }

    #[test]
    fn x_range_rejects_absurd_spans() {
        assert!(matches!(XRange::new(0.0, 1.0e9), Err(RangeError::TooWide { .. })));
    }

    #[test]
    fn y_limits_require_low_below_high() {
        assert_eq!(YLimits::new(3.0, 3.0), Err(RangeError::LowNotBelowHigh));
        let l = YLimits::new(-1.5, 4.0).unwrap();
        assert_eq!((l.low(), l.high()), (-1.5, 4.0));
    }

    #[test]
    fn title_joins_equations() {
        let def = GraphDefinition::new(
            vec!["sin(x)".into(), "x**2".into()],
            XRange::new(0.0, 1.0).unwrap(),
            None,
        );
        assert_eq!(def.title(), "Graphs of sin(x), x**2");
    }
}
