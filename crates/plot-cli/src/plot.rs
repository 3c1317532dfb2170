// File: crates/plot-cli/src/plot.rs
// Summary: Turn a graph definition into a chart, one series per equation that still evaluates.

use plot_core::{Chart, GraphDefinition, SampleSequence, Series};
use plot_expr::{ExprError, Sandbox};

/// A chart plus the equations that could not be drawn.
#[derive(Debug)]
pub struct PlotOutcome {
    pub chart: Chart,
    pub failures: Vec<(String, ExprError)>,
}

pub fn build_chart(def: &GraphDefinition, sandbox: &Sandbox) -> PlotOutcome {
    let samples = SampleSequence::new(&def.x_range);
    let mut chart = Chart::for_definition(def);
    let mut failures = Vec::new();
    for eq in &def.equations {
        match sandbox.evaluate(eq, samples.xs()) {
            Ok(ys) => chart.add_series(Series::with_data(eq.trim(), samples.zip(&ys))),
            Err(e) => failures.push((eq.clone(), e)),
        }
    }
    chart.fit_y(def.y_limits);
    PlotOutcome { chart, failures }
}
