use anyhow::Result;
use plot_core::{Chart, GraphDefinition, RenderOptions, SampleSequence, Series, XRange};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart(span: f64) -> Chart {
    let def = GraphDefinition::new(vec!["sin(x)".into()], XRange::new(0.0, span).unwrap(), None);
    let samples = SampleSequence::new(&def.x_range);
    let ys: Vec<f64> = samples.xs().iter().map(|x| x.sin() * 10.0).collect();
    let mut ch = Chart::for_definition(&def);
    ch.add_series(Series::with_data("sin(x)", samples.zip(&ys)));
    ch.fit_y(None);
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &span in &[10.0f64, 250.0f64] {
        group.bench_function(format!("span_{span}"), |b| {
            let ch = build_chart(span);
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
