use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::Rng;

use crate::color::Color;
use crate::entry::Entry;
use crate::viewer::ChartCommand;

/// Ring colors used by the demo chart
const DEMO_PALETTE: [Color; 6] = [
    Color::new(0x2e, 0xcc, 0x71),
    Color::new(0x34, 0x98, 0xdb),
    Color::new(0xe6, 0x7e, 0x22),
    Color::new(0x9b, 0x59, 0xb6),
    Color::new(0xe7, 0x4c, 0x3c),
    Color::new(0x1a, 0xbc, 0x9c),
];

/// Demo values are percentages; anything above 100 wraps into extra laps.
const DEMO_MAX_VALUE: f32 = 100.0;

#[derive(Parser, Debug)]
#[command(name = "radial-gauge")]
#[command(author, version, about = "Concentric ring gauge charts")]
#[command(long_about = "Draws one ring per entry, filling it in proportion to the entry value.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Configuration, font or window error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open a window showing the chart
    Show(ShowArgs),

    /// Write the chart as an SVG document
    Svg(SvgArgs),
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Chart file (TOML); random demo entries are shown without one
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// TrueType/OpenType font used for captions
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Read `INDEX VALUE` updates from stdin (`INDEX -` clears a value)
    #[arg(long)]
    pub stdin: bool,
}

#[derive(Parser, Debug)]
pub struct SvgArgs {
    /// Chart file (TOML)
    #[arg(short, long)]
    pub config: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Document width (default: window width from the chart file)
    #[arg(long)]
    pub width: Option<f32>,

    /// Document height (default: window height from the chart file)
    #[arg(long)]
    pub height: Option<f32>,
}

/// Default log filter for a `-v` count.
pub const fn filter_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Parses one stdin update line: `INDEX VALUE` or `INDEX -`.
pub fn parse_value_line(line: &str) -> Option<ChartCommand> {
    let mut parts = line.split_whitespace();
    let index = parts.next()?.parse::<usize>().ok()?;
    let value = match parts.next()? {
        "-" => None,
        raw => Some(raw.parse::<f32>().ok().filter(|v| v.is_finite())?),
    };
    if parts.next().is_some() {
        return None;
    }
    Some(ChartCommand::SetValue { index, value })
}

/// Random entries for running the viewer without a chart file.
pub fn demo_entries<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Entry> {
    (0..count)
        .map(|i| {
            let value = rng.random_range(0.0..DEMO_MAX_VALUE * 1.6);
            Entry::builder()
                .value(value)
                .label(format!("Series {}", i + 1))
                .value_label(format!("{value:.0}%"))
                .color(DEMO_PALETTE[i % DEMO_PALETTE.len()])
                .max_value(DEMO_MAX_VALUE)
                .build()
        })
        .collect()
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
