// File: crates/plot-core/tests/smoke.rs
// Purpose: End-to-end render smoke tests for PNG files, PNG bytes, and RGBA buffers.

use plot_core::{Chart, GraphDefinition, RenderOptions, SampleSequence, Series, XRange, YLimits};

fn sine_chart(limits: Option<YLimits>) -> Chart {
    let def = GraphDefinition::new(vec!["sin(x)".into()], XRange::new(-3.0, 3.0).unwrap(), limits);
    let samples = SampleSequence::new(&def.x_range);
    let ys: Vec<f64> = samples.xs().iter().map(|x| x.sin()).collect();
    let mut chart = Chart::for_definition(&def);
    chart.add_series(Series::with_data("sin(x)", samples.zip(&ys)));
    chart.fit_y(def.y_limits);
    chart
}

#[test]
fn render_smoke_png() {
    let chart = sine_chart(None);
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer() {
    let chart = sine_chart(Some(YLimits::new(-0.5, 0.5).unwrap()));
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    opts.width = 320;
    opts.height = 200;
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (320, 200));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is opaque background
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
    // Something other than background was drawn
    assert!(px.chunks_exact(4).any(|p| p[0..3] != [255, 255, 255]));
}

#[test]
fn render_survives_unplottable_samples() {
    let def = GraphDefinition::new(vec!["log(x)".into()], XRange::new(-1.0, 1.0).unwrap(), None);
    let samples = SampleSequence::new(&def.x_range);
    let ys: Vec<f64> = samples.xs().iter().map(|x| x.ln()).collect();
    let mut chart = Chart::for_definition(&def);
    chart.add_series(Series::with_data("log(x)", samples.zip(&ys)));
    chart.fit_y(None);
    assert!(chart.y_axis.min.is_finite() && chart.y_axis.max.is_finite());

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    chart.render_to_rgba8(&opts).expect("render with gaps");
}
