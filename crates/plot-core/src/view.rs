// File: crates/plot-core/src/view.rs
// First-class view state: visible ranges and helpers for pan/zoom/autoscale.

use crate::Chart;
use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Current axis ranges of `chart`.
    pub fn from_chart(chart: &Chart) -> Self {
        Self {
            x_min: chart.x_axis.min,
            x_max: chart.x_axis.max,
            y_min: chart.y_axis.min,
            y_max: chart.y_axis.max,
        }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }

    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64, width: i32, height: i32, insets: &Insets) {
        let plot_w = ((width - insets.right as i32 - insets.left as i32) as f64).max(1.0);
        let plot_h = ((height - insets.bottom as i32 - insets.top as i32) as f64).max(1.0);
        let x_span = self.x_max - self.x_min;
        let y_span = self.y_max - self.y_min;
        let wx = -dx / plot_w * x_span;
        let wy = dy / plot_h * y_span; // screen y down -> world up
        self.x_min += wx; self.x_max += wx;
        self.y_min += wy; self.y_max += wy;
    }

    /// Zoom around the world point under the cursor. Positive `scroll` zooms in.
    pub fn zoom_at_pixel(&mut self, scroll: f64, cursor_x: f64, cursor_y: f64, width: i32, height: i32, insets: &Insets) {
        let w = width as f64; let h = height as f64;
        let l = insets.left as f64; let rpx = w - insets.right as f64;
        let t = insets.top as f64; let bpx = h - insets.bottom as f64;
        let plot_w = (rpx - l).max(1.0); let plot_h = (bpx - t).max(1.0);
        let cx = cursor_x.clamp(l, rpx.max(l)); let cy = cursor_y.clamp(t, bpx.max(t));
        let x_span = self.x_max - self.x_min; let y_span = self.y_max - self.y_min;
        let wx = self.x_min + (cx - l) / plot_w * x_span;
        let wy = self.y_max - (cy - t) / plot_h * y_span;
        let factor = (1.0 - scroll).clamp(0.1, 10.0);
        let nx = x_span * factor; let ny = y_span * factor;
        let rx = (wx - self.x_min) / x_span; let ry = (self.y_max - wy) / y_span;
        self.x_min = wx - rx * nx; self.x_max = self.x_min + nx;
        self.y_max = wy + ry * ny; self.y_min = self.y_max - ny;
    }

    /// Fit y to the finite samples inside the visible x range. Returns false when none are visible.
    pub fn autoscale_y_visible(&mut self, chart: &Chart, margin: f64) -> bool {
        if let Some((ymin, ymax)) = visible_y_range(chart, self.x_min, self.x_max) {
            let (lo, hi) = pad_range(ymin, ymax, margin);
            self.y_min = lo;
            self.y_max = hi;
            true
        } else { false }
    }
}

/// Widen `[lo, hi]` by `margin` of its span; a flat range becomes one unit tall.
pub fn pad_range(lo: f64, hi: f64, margin: f64) -> (f64, f64) {
    if (hi - lo).abs() < 1e-9 {
        return (lo - 0.5, hi + 0.5);
    }
    let m = (hi - lo) * margin;
    (lo - m, hi + m)
}

/// (min, max) of finite y values whose x lies in `[x_min, x_max]`.
pub fn visible_y_range(chart: &Chart, x_min: f64, x_max: f64) -> Option<(f64, f64)> {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    let mut any = false;
    for s in &chart.series {
        for &(x, y) in &s.data_xy {
            if x >= x_min && x <= x_max && y.is_finite() {
                y_min = y_min.min(y);
                y_max = y_max.max(y);
                any = true;
            }
        }
    }
    if any { Some((y_min, y_max)) } else { None }
}
