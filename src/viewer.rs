//! Interactive window showing a radial gauge.

use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::{Duration, Instant};

use pixels::{Pixels, SurfaceTexture};
use rusttype::Font;
use tracing::{debug, error, info, warn};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::chart::ChartConfig;
use crate::config::WindowConfig;
use crate::entry::Entry;
use crate::error::Result;
use crate::radial_gauge::RadialGaugeChart;
use crate::raster::Canvas;

/// Command enum for updating a chart while it is on screen
#[derive(Debug, Clone, PartialEq)]
pub enum ChartCommand {
    SetEntries(Vec<Entry>),
    /// Replaces the value of the entry at `index`, keeping its presentation.
    SetValue {
        index: usize,
        value: Option<f32>,
    },
    SetStartAngle(f32),
    SetForceLegendRight(bool),
    RestartAnimation,
}

/// Consecutive failed frames before the viewer gives up.
const MAX_RENDER_FAILURES: u32 = 120;

/// Fraction of the entry animation completed after `elapsed`.
pub fn animation_progress(config: &ChartConfig, elapsed: Duration) -> f32 {
    if !config.is_animated || config.animation_duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / config.animation_duration.as_secs_f32()).clamp(0.0, 1.0)
}

pub struct GaugeViewer {
    chart: RadialGaugeChart,
    entries: Vec<Entry>,
    window: WindowConfig,
    font: Option<Font<'static>>,
}

impl GaugeViewer {
    pub fn new(chart: RadialGaugeChart, entries: Vec<Entry>) -> Self {
        Self {
            chart,
            entries,
            window: WindowConfig::default(),
            font: None,
        }
    }

    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    pub fn with_font(mut self, font: Font<'static>) -> Self {
        self.font = Some(font);
        self
    }

    pub fn show(&self) -> Result<()> {
        self.run_window(None)
    }

    pub fn show_with_commands(&self, receiver: Receiver<ChartCommand>) -> Result<()> {
        self.run_window(Some(receiver))
    }

    fn run_window(&self, receiver: Option<Receiver<ChartCommand>>) -> Result<()> {
        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&self.window.title)
            .with_inner_size(LogicalSize::new(
                self.window.width as f64,
                self.window.height as f64,
            ))
            .build(&event_loop)?;

        let window = Arc::new(window);
        let window_clone = window.clone();
        let size = window.inner_size();
        let mut fb_width = size.width as usize;
        let mut fb_height = size.height as usize;
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;
        info!(width = fb_width, height = fb_height, "viewer started");

        let mut state = ViewState::new(self.chart.clone(), self.entries.clone(), Instant::now());
        let font = self.font.as_ref();
        let frame_duration = Duration::from_secs_f64(1.0 / self.window.max_framerate.max(1.0));
        let mut last_frame = Instant::now();
        let mut failures = RenderFailures::default();

        event_loop.run(move |event, window_target| {
            window_target.set_control_flow(ControlFlow::Poll);
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        fb_width = new_size.width as usize;
                        fb_height = new_size.height as usize;
                        if let Err(err) = pixels.resize_buffer(new_size.width, new_size.height) {
                            warn!(%err, "failed to resize pixel buffer");
                        }
                        if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                            warn!(%err, "failed to resize surface");
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        let now = Instant::now();
                        if let Some(ref receiver) = receiver {
                            state.update_with_commands(receiver, now);
                        }

                        let chart = state.frame_chart(now);
                        {
                            let mut canvas = Canvas::new(pixels.frame_mut(), fb_width, fb_height);
                            if let Some(font) = font {
                                canvas = canvas.with_font(font);
                            }
                            canvas.clear(chart.base.background_color);
                            chart.draw(&state.entries, &mut canvas, fb_width as f32, fb_height as f32);
                        }
                        match pixels.render() {
                            Ok(()) => failures.record_success(),
                            Err(err) => {
                                warn!(%err, "render failed");
                                if failures.record_failure() {
                                    error!(count = MAX_RENDER_FAILURES, "render keeps failing, closing viewer");
                                    window_target.exit();
                                }
                            }
                        }
                    }
                    _ => {}
                },
                Event::AboutToWait => {
                    if last_frame.elapsed() >= frame_duration {
                        window_clone.request_redraw();
                        last_frame = Instant::now();
                    }
                }
                _ => {}
            }
        })?;

        Ok(())
    }
}

/// Tracks failed frames so a lost or resized surface does not end the viewer.
#[derive(Debug, Default)]
struct RenderFailures {
    consecutive: u32,
}

impl RenderFailures {
    fn record_success(&mut self) {
        self.consecutive = 0;
    }

    /// Returns `true` once the failure run reaches [`MAX_RENDER_FAILURES`].
    fn record_failure(&mut self) -> bool {
        self.consecutive = self.consecutive.saturating_add(1);
        self.consecutive >= MAX_RENDER_FAILURES
    }
}

/// What the viewer draws, updated from the command channel.
struct ViewState {
    chart: RadialGaugeChart,
    entries: Vec<Entry>,
    animation_start: Instant,
}

impl ViewState {
    fn new(chart: RadialGaugeChart, entries: Vec<Entry>, now: Instant) -> Self {
        Self {
            chart,
            entries,
            animation_start: now,
        }
    }

    fn apply(&mut self, command: ChartCommand, now: Instant) {
        debug!(?command, "applying chart command");
        match command {
            ChartCommand::SetEntries(entries) => {
                self.entries = entries;
                self.animation_start = now;
            }
            ChartCommand::SetValue { index, value } => match self.entries.get_mut(index) {
                Some(entry) => *entry = entry.with_value(value),
                None => warn!(index, count = self.entries.len(), "no entry at index"),
            },
            ChartCommand::SetStartAngle(angle) => self.chart.start_angle = angle,
            ChartCommand::SetForceLegendRight(force) => self.chart.force_legend_right = force,
            ChartCommand::RestartAnimation => self.animation_start = now,
        }
    }

    fn update_with_commands(&mut self, receiver: &Receiver<ChartCommand>, now: Instant) {
        while let Ok(command) = receiver.try_recv() {
            self.apply(command, now);
        }
    }

    /// The chart as it should look at `now`.
    fn frame_chart(&self, now: Instant) -> RadialGaugeChart {
        let mut chart = self.chart.clone();
        let elapsed = now.saturating_duration_since(self.animation_start);
        chart.base.animation_progress *= animation_progress(&chart.base, elapsed);
        chart
    }
}

#[cfg(test)]
#[path = "viewer_tests.rs"]
mod tests;
