use std::io::{self, BufRead};
use std::sync::mpsc::{self, Sender};
use std::thread;

use clap::Parser;
use tracing::{info, warn};

use radial_gauge::cli::{
    demo_entries, filter_directive, parse_value_line, Cli, Commands, ShowArgs, SvgArgs,
};
use radial_gauge::{
    load_font, svg, ChartCommand, ChartFile, GaugeViewer, RadialGaugeChart, Result, WindowConfig,
};

const DEMO_ENTRY_COUNT: usize = 4;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = radial_gauge::init_tracing(filter_directive(cli.verbose)) {
        eprintln!("Warning: {e}");
    }

    let result = match &cli.command {
        Commands::Show(args) => run_show(args),
        Commands::Svg(args) => run_svg(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_show(args: &ShowArgs) -> Result<()> {
    let (chart, entries, window) = match &args.config {
        Some(path) => {
            let file = ChartFile::load(path)?;
            let chart = file.to_chart();
            (chart, file.entries, file.window)
        }
        None => (
            RadialGaugeChart::default(),
            demo_entries(&mut rand::rng(), DEMO_ENTRY_COUNT),
            WindowConfig::default(),
        ),
    };
    info!(entries = entries.len(), title = %window.title, "opening viewer");

    let mut viewer = GaugeViewer::new(chart, entries).with_window(window);
    match &args.font {
        Some(path) => viewer = viewer.with_font(load_font(path)?),
        None => warn!("no --font given, captions will not be drawn"),
    }

    if args.stdin {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || read_commands(&sender));
        viewer.show_with_commands(receiver)
    } else {
        viewer.show()
    }
}

/// Forwards stdin update lines to the viewer until stdin or the viewer closes.
fn read_commands(sender: &Sender<ChartCommand>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }
        match parse_value_line(&line) {
            Some(command) => {
                if sender.send(command).is_err() {
                    break;
                }
            }
            None => warn!(%line, "ignoring malformed update line"),
        }
    }
}

fn run_svg(args: &SvgArgs) -> Result<()> {
    let file = ChartFile::load(&args.config)?;
    let width = args.width.unwrap_or(file.window.width as f32);
    let height = args.height.unwrap_or(file.window.height as f32);

    let document = svg::render_document(
        &file.to_chart(),
        &file.entries,
        width,
        height,
        &file.window.title,
    );

    match &args.output {
        Some(path) => {
            svg::write_document(path, &document)?;
            info!(path = %path.display(), "wrote chart");
        }
        None => println!("{document}"),
    }
    Ok(())
}
