// File: crates/plot-store/src/record.rs
// Summary: Column encoding of a graph definition:
//   [equations joined by ';', x-start, x-end, y-low or empty, y-high or empty]

use std::fmt;

use plot_core::{GraphDefinition, XRange, YLimits};

use crate::error::StoreError;

pub const EQUATION_SEPARATOR: char = ';';
pub const COLUMNS: usize = 5;

/// Integral values keep a trailing `.0` (`5.0`, not `5`), matching files written by earlier tools.
pub fn format_number(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

pub fn encode(def: &GraphDefinition) -> Vec<String> {
    let (low, high) = match def.y_limits {
        Some(l) => (format_number(l.low()), format_number(l.high())),
        None => (String::new(), String::new()),
    };
    vec![
        def.equations.join(&EQUATION_SEPARATOR.to_string()),
        format_number(def.x_range.start()),
        format_number(def.x_range.end()),
        low,
        high,
    ]
}

/// Decode the row at 1-based position `index`.
pub fn decode(index: usize, fields: &[String]) -> Result<GraphDefinition, StoreError> {
    let malformed = |reason: String| StoreError::Malformed { index, reason };
    if fields.len() < COLUMNS {
        return Err(malformed(format!("expected {COLUMNS} columns, found {}", fields.len())));
    }
    let number = |column: &str, text: &str| -> Result<f64, StoreError> {
        text.trim()
            .parse::<f64>()
            .map_err(|_| malformed(format!("{column} {text:?} is not a number")))
    };

    let equations = fields[0].split(EQUATION_SEPARATOR).map(|s| s.to_string()).collect();
    let start = number("x-start", &fields[1])?;
    let end = number("x-end", &fields[2])?;
    let x_range = XRange::new(start, end).map_err(|e| malformed(format!("x range: {e}")))?;

    // Limits only apply when both columns are filled in.
    let (low, high) = (fields[3].trim(), fields[4].trim());
    let y_limits = if low.is_empty() || high.is_empty() {
        None
    } else {
        let l = number("y-low", low)?;
        let h = number("y-high", high)?;
        Some(YLimits::new(l, h).map_err(|e| malformed(format!("y limits: {e}")))?)
    };

    Ok(GraphDefinition::new(equations, x_range, y_limits))
}

/// One listed row with its 1-based position.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub index: usize,
    pub fields: Vec<String>,
}

impl Entry {
    pub fn definition(&self) -> Result<GraphDefinition, StoreError> {
        decode(self.index, &self.fields)
    }

    fn field(&self, i: usize) -> &str {
        self.fields.get(i).map(String::as_str).unwrap_or("")
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. Eq: {} | X: {} to {} | Y: {}, {}",
            self.index,
            self.field(0),
            self.field(1),
            self.field(2),
            self.field(3),
            self.field(4)
        )
    }
}
