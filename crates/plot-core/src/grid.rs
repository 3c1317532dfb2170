// File: crates/plot-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// Evenly spaced values from `start` to `end` inclusive. The last value is exactly `end`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    let mut out: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
    out[steps - 1] = end;
    out
}

/// Round `raw` to a 1/2/5 x 10^n step.
fn nice_step(raw: f64) -> f64 {
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 { 1.0 } else if norm <= 2.0 { 2.0 } else if norm <= 5.0 { 5.0 } else { 10.0 };
    nice * mag
}

/// Tick positions covering `[min, max]` with roughly `target` intervals.
/// Returns the step alongside the ticks so callers can pick a label precision.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> (Vec<f64>, f64) {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return (vec![min], 1.0);
    }
    let step = nice_step(span / target as f64);
    let first = (min / step - 1e-9).ceil() * step;
    let mut ticks = Vec::new();
    let mut k = 0usize;
    loop {
        let v = first + step * k as f64;
        if v > max + step * 1e-9 { break; }
        ticks.push(v);
        k += 1;
        if k > 1_000 { break; }
    }
    (ticks, step)
}

/// Format a tick value with just enough decimals for `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };
    let s = format!("{:.*}", decimals, value);
    // avoid "-0" / "-0.00"
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}
