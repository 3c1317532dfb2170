// File: crates/plot-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (RGBA8 / PNG) using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;
use tracing::debug;

use crate::definition::{GraphDefinition, YLimits};
use crate::geometry::{clamp, RectI32};
use crate::grid::{format_tick, nice_ticks};
use crate::series::Series;
use crate::text::{Anchor, Role, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::{pad_range, visible_y_range};
use crate::Axis;

/// Fraction of the data span added above and below an autoscaled y axis.
pub const Y_MARGIN: f64 = 0.02;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (title, ticks, axis labels, legend). Off for pixel-stable snapshots.
    pub draw_labels: bool,
    /// Per-run vertex budget before LTTB downsampling kicks in.
    pub max_points: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            max_points: 4_000,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    /// Empty chart framed for `def`: title from the equations, x axis over the range,
    /// y axis clamped to the limits when present.
    pub fn for_definition(def: &GraphDefinition) -> Self {
        let mut chart = Self::new(def.title());
        chart.x_axis = Axis::new("x", def.x_range.start(), def.x_range.end());
        if let Some(l) = def.y_limits {
            chart.y_axis = Axis::new("y", l.low(), l.high());
        }
        chart
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Set the y axis: `limits` when given, otherwise fitted to the finite samples.
    pub fn fit_y(&mut self, limits: Option<YLimits>) {
        match limits {
            Some(l) => {
                self.y_axis.min = l.low();
                self.y_axis.max = l.high();
            }
            None => self.autoscale_y(Y_MARGIN),
        }
    }

    /// Fit the y axis to every finite sample inside the x axis, padded by `margin`.
    /// With nothing finite to show the axis falls back to [0, 1].
    pub fn autoscale_y(&mut self, margin: f64) {
        let (lo, hi) = match visible_y_range(self, self.x_axis.min, self.x_axis.max) {
            Some((lo, hi)) => pad_range(lo, hi, margin),
            None => (0.0, 1.0),
        };
        self.y_axis.min = lo;
        self.y_axis.max = hi;
    }

    /// Render to a tightly packed RGBA8 buffer. Returns (pixels, width, height, row stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let info = rgba_info(w, h);
        let mut surface = self.render_surface(opts)?;
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back {}x{} surface", w, h);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    /// Render and encode as PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        debug!(width = w, height = h, series = self.series.len(), "rendering chart");
        let mut surface = skia::surfaces::raster(&rgba_info(w, h), None, None)
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        let theme = &opts.theme;

        canvas.clear(theme.background);

        let area = RectI32::plot_area(w, h, &opts.insets);
        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };

        let (x_ticks, x_step) = nice_ticks(self.x_axis.min, self.x_axis.max, 8);
        let (y_ticks, y_step) = nice_ticks(self.y_axis.min, self.y_axis.max, 6);
        let map = Mapper::new(area, &self.x_axis, &self.y_axis);

        draw_grid(canvas, theme, area, &map, &x_ticks, &y_ticks);

        canvas.save();
        canvas.clip_rect(to_rect(area), skia::ClipOp::Intersect, true);
        for (i, s) in self.series.iter().enumerate() {
            let color = s.color.unwrap_or_else(|| theme.series_color(i));
            draw_line_series(canvas, &map, s, color, opts.max_points);
        }
        canvas.restore();

        draw_axes(canvas, theme, area);

        if let Some(shaper) = &shaper {
            draw_tick_labels(canvas, shaper, theme, area, &map, (&x_ticks, x_step), (&y_ticks, y_step));
            draw_axis_labels(canvas, shaper, theme, area, &self.x_axis, &self.y_axis);
            let cx = (area.left + area.right) as f32 * 0.5;
            shaper.draw(canvas, &self.title, Role::Title, Anchor::Center, (cx, area.top as f32 - 14.0), theme.title);
            draw_legend(canvas, shaper, theme, area, &self.series);
        }

        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

fn rgba_info(w: i32, h: i32) -> skia::ImageInfo {
    skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Premul, None)
}

fn to_rect(r: RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

/// World -> pixel transform for the plot area.
struct Mapper {
    area: RectI32,
    x_min: f64,
    x_span: f64,
    y_min: f64,
    y_span: f64,
}

impl Mapper {
    fn new(area: RectI32, x: &Axis, y: &Axis) -> Self {
        Self {
            area,
            x_min: x.min,
            x_span: x.span().max(1e-12),
            y_min: y.min,
            y_span: y.span().max(1e-12),
        }
    }

    // Pixel coordinates are clamped well outside the surface so huge values
    // (tan near its poles) still produce finite path vertices.
    fn sx(&self, x: f64) -> f32 {
        let px = self.area.left as f64 + (x - self.x_min) / self.x_span * self.area.width() as f64;
        clamp(px, -1.0e5, 1.0e5) as f32
    }

    fn sy(&self, y: f64) -> f32 {
        let py = self.area.bottom as f64 - (y - self.y_min) / self.y_span * self.area.height() as f64;
        clamp(py, -1.0e5, 1.0e5) as f32
    }
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn draw_grid(canvas: &skia::Canvas, theme: &Theme, area: RectI32, map: &Mapper, x_ticks: &[f64], y_ticks: &[f64]) {
    let paint = stroke(theme.grid, 1.0);
    let (l, t, r, b) = (area.left as f32, area.top as f32, area.right as f32, area.bottom as f32);
    for &x in x_ticks {
        let px = map.sx(x);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    for &y in y_ticks {
        let py = map.sy(y);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, theme: &Theme, area: RectI32) {
    let paint = stroke(theme.axis_line, 1.5);
    canvas.draw_rect(to_rect(area), &paint);
}

fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    theme: &Theme,
    area: RectI32,
    map: &Mapper,
    (x_ticks, x_step): (&[f64], f64),
    (y_ticks, y_step): (&[f64], f64),
) {
    let tick = stroke(theme.tick, 1.0);
    let (l, b) = (area.left as f32, area.bottom as f32);
    for &x in x_ticks {
        let px = map.sx(x);
        canvas.draw_line((px, b), (px, b + 4.0), &tick);
        shaper.draw(canvas, &format_tick(x, x_step), Role::Tick, Anchor::Center, (px, b + 18.0), theme.tick);
    }
    for &y in y_ticks {
        let py = map.sy(y);
        canvas.draw_line((l - 4.0, py), (l, py), &tick);
        shaper.draw(canvas, &format_tick(y, y_step), Role::Tick, Anchor::Right, (l - 7.0, py + 4.0), theme.tick);
    }
}

fn draw_axis_labels(canvas: &skia::Canvas, shaper: &TextShaper, theme: &Theme, area: RectI32, x: &Axis, y: &Axis) {
    let cx = (area.left + area.right) as f32 * 0.5;
    shaper.draw(canvas, &x.label, Role::AxisLabel, Anchor::Center, (cx, area.bottom as f32 + 40.0), theme.axis_label);
    let cy = (area.top + area.bottom) as f32 * 0.5;
    shaper.draw(canvas, &y.label, Role::AxisLabel, Anchor::Left, (8.0, cy), theme.axis_label);
}

fn draw_line_series(canvas: &skia::Canvas, map: &Mapper, series: &Series, color: skia::Color, max_points: usize) {
    let paint = stroke(color, 2.0);
    for run in series.drawable_runs(max_points) {
        let Some(&(x0, y0)) = run.first() else { continue };
        if run.len() == 1 {
            // isolated finite sample between gaps
            let mut dot = paint.clone();
            dot.set_style(skia::paint::Style::Fill);
            canvas.draw_circle((map.sx(x0), map.sy(y0)), 1.5, &dot);
            continue;
        }
        let mut path = skia::Path::new();
        path.move_to((map.sx(x0), map.sy(y0)));
        for &(x, y) in run.iter().skip(1) {
            path.line_to((map.sx(x), map.sy(y)));
        }
        canvas.draw_path(&path, &paint);
    }
}

fn draw_legend(canvas: &skia::Canvas, shaper: &TextShaper, theme: &Theme, area: RectI32, series: &[Series]) {
    if series.is_empty() {
        return;
    }
    let size = Role::Legend.size();
    let row_h = 18.0f32;
    let swatch = 22.0f32;
    let pad = 8.0f32;
    let text_w = series
        .iter()
        .map(|s| shaper.width(&s.label, Role::Legend))
        .fold(0.0f32, f32::max);
    let box_w = pad * 3.0 + swatch + text_w;
    let box_h = pad * 2.0 + row_h * series.len() as f32;
    let right = area.right as f32 - 10.0;
    let top = area.top as f32 + 10.0;
    let rect = skia::Rect::from_ltrb(right - box_w, top, right, top + box_h);

    let mut fill = skia::Paint::default();
    fill.set_color(theme.legend_fill);
    fill.set_style(skia::paint::Style::Fill);
    canvas.draw_rect(rect, &fill);
    canvas.draw_rect(rect, &stroke(theme.legend_border, 1.0));

    for (i, s) in series.iter().enumerate() {
        let color = s.color.unwrap_or_else(|| theme.series_color(i));
        let mid = top + pad + row_h * i as f32 + row_h * 0.5;
        let x0 = rect.left + pad;
        canvas.draw_line((x0, mid), (x0 + swatch, mid), &stroke(color, 2.0));
        shaper.draw(canvas, &s.label, Role::Legend, Anchor::Left, (x0 + swatch + pad, mid + size * 0.35), theme.axis_label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::XRange;

    #[test]
    fn definition_frames_axes() {
        let def = GraphDefinition::new(
            vec!["x".into()],
            XRange::new(-2.0, 3.0).unwrap(),
            Some(YLimits::new(-1.0, 1.0).unwrap()),
        );
        let chart = Chart::for_definition(&def);
        assert_eq!((chart.x_axis.min, chart.x_axis.max), (-2.0, 3.0));
        assert_eq!((chart.y_axis.min, chart.y_axis.max), (-1.0, 1.0));
        assert_eq!(chart.title, "Graphs of x");
    }

    #[test]
    fn limits_win_over_autoscale() {
        let mut chart = Chart::new("t");
        chart.x_axis = Axis::new("x", 0.0, 1.0);
        chart.add_series(Series::with_data("s", vec![(0.0, -100.0), (1.0, 100.0)]));
        chart.fit_y(Some(YLimits::new(-1.0, 1.0).unwrap()));
        assert_eq!((chart.y_axis.min, chart.y_axis.max), (-1.0, 1.0));
        chart.fit_y(None);
        assert!(chart.y_axis.min < -100.0 && chart.y_axis.max > 100.0);
    }

    #[test]
    fn autoscale_without_finite_samples_falls_back() {
        let mut chart = Chart::new("t");
        chart.add_series(Series::with_data("s", vec![(0.5, f64::NAN)]));
        chart.autoscale_y(Y_MARGIN);
        assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 1.0));
    }
}
