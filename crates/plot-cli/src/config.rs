// File: crates/plot-cli/src/config.rs
// Summary: Command-line flags with environment fallbacks; every flag is optional.

use std::path::PathBuf;

use clap::Parser;
use plot_core::theme;
use plot_core::RenderOptions;
use plot_store::DEFAULT_FILE;
use tracing::warn;

#[derive(Parser, Debug, Clone)]
#[command(name = "graph-plotter", about = "Plot equations of x and keep them in a CSV file")]
pub struct Cli {
    /// CSV file holding saved graphs
    #[arg(long, env = "GRAPH_PLOTTER_FILE", default_value = DEFAULT_FILE)]
    pub file: PathBuf,

    /// Chart theme (light or dark)
    #[arg(long, env = "GRAPH_PLOTTER_THEME", default_value = "light")]
    pub theme: String,

    /// Write PNG files instead of opening a window (also the fallback when no display can be reached)
    #[arg(long)]
    pub headless: bool,

    /// Directory for PNG output when running headless
    #[arg(long, env = "GRAPH_PLOTTER_OUT", default_value = "plots")]
    pub output_dir: PathBuf,

    /// Chart width in pixels
    #[arg(long, default_value_t = plot_core::types::WIDTH as u32,
          value_parser = clap::value_parser!(u32).range(64..=8192))]
    pub width: u32,

    /// Chart height in pixels
    #[arg(long, default_value_t = plot_core::types::HEIGHT as u32,
          value_parser = clap::value_parser!(u32).range(64..=8192))]
    pub height: u32,
}

impl Cli {
    /// Render settings for every chart drawn this session.
    pub fn render_options(&self) -> RenderOptions {
        let known = theme::presets().iter().any(|t| t.name.eq_ignore_ascii_case(&self.theme));
        if !known {
            warn!(theme = %self.theme, "unknown theme; using light");
        }
        RenderOptions {
            width: self.width as i32,
            height: self.height as i32,
            theme: theme::find(&self.theme),
            ..RenderOptions::default()
        }
    }
}
