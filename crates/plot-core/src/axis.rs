// File: crates/plot-core/src/axis.rs
// Summary: Axis model with labels and ranges.

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

    pub fn default_x() -> Self { Self::new("x", 0.0, 1.0) }

    pub fn default_y() -> Self { Self::new("y", 0.0, 1.0) }

    pub fn span(&self) -> f64 { self.max - self.min }
}
