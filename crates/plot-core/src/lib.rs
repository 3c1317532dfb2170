// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports graph definitions, sampling, and the chart renderer.

pub mod axis;
pub mod chart;
pub mod definition;
pub mod downsample;
pub mod geometry;
pub mod grid;
pub mod sampling;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::Axis;
pub use chart::{Chart, RenderOptions};
pub use definition::{GraphDefinition, RangeError, XRange, YLimits};
pub use downsample::lttb;
pub use sampling::{sample_count, SampleSequence};
pub use series::Series;
pub use text::TextShaper;
pub use theme::Theme;
pub use view::ViewState;
