//! Radial gauge charts: one concentric ring per entry, drawn onto any
//! [`DrawingSurface`].
//!
//! Values larger than a ring's scale wrap around into extra laps, each a
//! little darker than the last. Charts render to a recorded [`Scene`], a
//! software [`Canvas`], an [`SvgSurface`], or a live [`GaugeViewer`] window.

use tracing_subscriber::EnvFilter;

pub mod caption;
pub mod chart;
pub mod cli;
pub mod color;
pub mod config;
pub mod entry;
pub mod error;
pub mod radial_gauge;
pub mod raster;
pub mod surface;
pub mod svg;
pub mod viewer;

pub use caption::{partition_captions, CaptionPainter, LegendCaptions};
pub use chart::{ChartConfig, ValueRangeProvider};
pub use color::{change_brightness, Color};
pub use config::{ChartFile, WindowConfig};
pub use entry::Entry;
pub use error::{GaugeError, Result};
pub use radial_gauge::{laps, Lap, RadialGaugeChart, RingLayout};
pub use raster::{load_font, Canvas};
pub use surface::{DrawCommand, DrawingSurface, Point, Rect, Scene, StrokeCap, TextAnchor};
pub use svg::SvgSurface;
pub use viewer::{ChartCommand, GaugeViewer};

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `default_filter` when it is set.
pub fn init_tracing(default_filter: &str) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| GaugeError::Tracing(e.to_string()))
}
