// File: crates/plot-cli/src/main.rs
// Summary: graph-plotter entry point: flags, logging, display backend selection, session.

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use plot_cli::display::window_available;
use plot_cli::{ChartDisplay, Cli, PngDisplay, Prompter, Session, WindowDisplay};
use plot_store::RecordStore;

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries the prompts.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let opts = cli.render_options();
    let store = RecordStore::open(&cli.file);

    if cli.headless {
        return run(store, PngDisplay::new(&cli.output_dir, opts));
    }
    let window = if window_available() {
        WindowDisplay::new(opts.clone())
    } else {
        Err(anyhow::anyhow!("DISPLAY and WAYLAND_DISPLAY are unset"))
    };
    match window {
        Ok(display) => run(store, display),
        Err(e) => {
            warn!(error = %format!("{e:#}"), "no display; writing plots to {}", cli.output_dir.display());
            run(store, PngDisplay::new(&cli.output_dir, opts))
        }
    }
}

fn run<D: ChartDisplay>(store: RecordStore, display: D) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let prompter = Prompter::new(stdin.lock(), stdout.lock());
    Session::new(prompter, store, display).run()?;
    Ok(())
}
