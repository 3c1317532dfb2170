// File: crates/plot-cli/src/display.rs
// Summary: Where a finished chart goes: a blocking window (winit + softbuffer RGBA blit) or a PNG file.

use std::num::NonZeroU32;
use std::panic;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use plot_core::chart::Y_MARGIN;
use plot_core::{Chart, RenderOptions, ViewState};
use tracing::{debug, info};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{
    ElementState, Event, KeyboardInput, MouseButton, MouseScrollDelta, VirtualKeyCode, WindowEvent,
};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

/// What happened to a shown chart.
#[derive(Clone, Debug, PartialEq)]
pub enum Shown {
    /// Displayed in a window until the user closed it.
    Window,
    /// Written to this PNG file.
    Saved(PathBuf),
}

pub trait ChartDisplay {
    /// Present `chart`. Window backends block until the window is closed.
    fn show(&mut self, chart: &Chart) -> Result<Shown>;
}

/// True when a windowing system looks reachable. Only X11/Wayland sessions can be probed up front.
pub fn window_available() -> bool {
    if cfg!(all(unix, not(target_os = "macos"), not(target_os = "ios"), not(target_os = "android"))) {
        std::env::var_os("DISPLAY").is_some() || std::env::var_os("WAYLAND_DISPLAY").is_some()
    } else {
        true
    }
}

/// Writes each chart to `<dir>/plot-NNN.png`, never overwriting an existing file.
pub struct PngDisplay {
    dir: PathBuf,
    opts: RenderOptions,
    counter: usize,
}

impl PngDisplay {
    pub fn new(dir: impl Into<PathBuf>, opts: RenderOptions) -> Self {
        Self { dir: dir.into(), opts, counter: 0 }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn next_path(&mut self) -> PathBuf {
        loop {
            self.counter += 1;
            let path = self.dir.join(format!("plot-{:03}.png", self.counter));
            if !path.exists() {
                return path;
            }
        }
    }
}

impl ChartDisplay for PngDisplay {
    fn show(&mut self, chart: &Chart) -> Result<Shown> {
        let path = self.next_path();
        chart
            .render_to_png(&self.opts, &path)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        info!(path = %path.display(), "chart written");
        Ok(Shown::Saved(path))
    }
}

/// Interactive window. Wheel zooms around the cursor, left-drag pans,
/// `R` resets the view, `A` fits y to what is visible, `Esc` closes.
pub struct WindowDisplay {
    // One event loop per process; each `show` re-enters it.
    event_loop: EventLoop<()>,
    opts: RenderOptions,
}

impl WindowDisplay {
    /// Connect to the windowing system. Fails instead of panicking when the
    /// display named by the environment cannot be reached.
    pub fn new(opts: RenderOptions) -> Result<Self> {
        let event_loop = quietly(EventLoop::new).context("cannot connect to a display")?;
        Ok(Self { event_loop, opts })
    }
}

/// Run `f`, turning a panic into an error without printing the panic message.
fn quietly<T>(f: impl FnOnce() -> T + panic::UnwindSafe) -> Result<T> {
    let hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let outcome = panic::catch_unwind(f);
    panic::set_hook(hook);
    outcome.map_err(|payload| {
        let msg = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown failure".to_string());
        anyhow!(msg)
    })
}

impl ChartDisplay for WindowDisplay {
    fn show(&mut self, chart: &Chart) -> Result<Shown> {
        let window = WindowBuilder::new()
            .with_title(chart.title.as_str())
            .with_inner_size(LogicalSize::new(self.opts.width as f64, self.opts.height as f64))
            .build(&self.event_loop)
            .context("failed to open chart window")?;

        let context = unsafe { softbuffer::Context::new(&window) }
            .map_err(|e| anyhow!("softbuffer context: {e}"))?;
        let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
            .map_err(|e| anyhow!("softbuffer surface: {e}"))?;

        let mut working = chart.clone();
        let home = ViewState::from_chart(chart);
        let mut view = home;
        let mut opts = self.opts.clone();
        let insets = opts.insets;
        let mut size = window.inner_size();
        let mut cursor: Option<(f64, f64)> = None;
        let mut dragging = false;
        let mut failure: Option<anyhow::Error> = None;

        self.event_loop.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Wait;
            match event {
                Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                    WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                    WindowEvent::Resized(new_size) => {
                        size = new_size;
                        window.request_redraw();
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        if let (true, Some((lx, ly))) = (dragging, cursor) {
                            let (w, h) = dims(size);
                            view.pan_by_pixels(position.x - lx, position.y - ly, w, h, &insets);
                            window.request_redraw();
                        }
                        cursor = Some((position.x, position.y));
                    }
                    WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                        dragging = state == ElementState::Pressed;
                    }
                    WindowEvent::MouseWheel { delta, .. } => {
                        if let Some((cx, cy)) = cursor {
                            let scroll = match delta {
                                MouseScrollDelta::LineDelta(_, y) => y as f64 * 0.1,
                                MouseScrollDelta::PixelDelta(p) => p.y / 240.0,
                            };
                            let (w, h) = dims(size);
                            view.zoom_at_pixel(scroll, cx, cy, w, h, &insets);
                            window.request_redraw();
                        }
                    }
                    WindowEvent::KeyboardInput {
                        input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                        ..
                    } => match key {
                        VirtualKeyCode::R => {
                            view = home;
                            window.request_redraw();
                        }
                        VirtualKeyCode::A => {
                            if view.autoscale_y_visible(&working, Y_MARGIN) {
                                window.request_redraw();
                            }
                        }
                        VirtualKeyCode::Escape => *control_flow = ControlFlow::Exit,
                        _ => {}
                    },
                    _ => {}
                },
                Event::RedrawRequested(id) if id == window.id() => {
                    let (w, h) = dims(size);
                    opts.width = w;
                    opts.height = h;
                    view.apply_to_chart(&mut working);
                    if let Err(e) = blit(&mut surface, &working, &opts) {
                        failure = Some(e);
                        *control_flow = ControlFlow::Exit;
                    }
                }
                _ => {}
            }
        });

        window.set_visible(false);
        debug!(title = %chart.title, "chart window closed");
        match failure {
            Some(e) => Err(e),
            None => Ok(Shown::Window),
        }
    }
}

fn dims(size: PhysicalSize<u32>) -> (i32, i32) {
    (size.width.max(1) as i32, size.height.max(1) as i32)
}

/// Render to RGBA and copy into the window buffer as 0RGB words.
fn blit(surface: &mut softbuffer::Surface, chart: &Chart, opts: &RenderOptions) -> Result<()> {
    let (rgba, w, h, _) = chart.render_to_rgba8(opts)?;
    let (nw, nh) = match (NonZeroU32::new(w), NonZeroU32::new(h)) {
        (Some(nw), Some(nh)) => (nw, nh),
        _ => return Ok(()),
    };
    surface.resize(nw, nh).map_err(|e| anyhow!("resize surface: {e}"))?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("surface buffer: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
    }
    frame.present().map_err(|e| anyhow!("present frame: {e}"))?;
    Ok(())
}
