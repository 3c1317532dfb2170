// File: crates/plot-cli/src/lib.rs
// Summary: Interactive graph plotter: console prompts, chart display backends and the session driver.

pub mod config;
pub mod display;
pub mod plot;
pub mod prompt;
pub mod session;

pub use config::Cli;
pub use display::{ChartDisplay, PngDisplay, Shown, WindowDisplay};
pub use prompt::{PromptError, Prompter};
pub use session::Session;
