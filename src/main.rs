use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use oxidescope::processing::time_format::TimeFormat;
use oxidescope::{report, CursorEvent, GlobalStats, LoadSummary, MeasureConfig, Session};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Cursor measurements on a time/amplitude CSV capture",
    long_about = None
)]
struct Args {
    /// CSV file with a time column and an amplitude column
    file: PathBuf,

    /// JSON config overriding column names, unit and precisions
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Place a cursor at this time in seconds (repeat to place A, then B, ...)
    #[arg(long = "cursor", allow_negative_numbers = true)]
    cursors: Vec<f64>,

    /// Zoom window as start,end percentages of the full range
    #[arg(long, value_delimiter = ',')]
    zoom: Option<Vec<f64>>,

    /// Print machine-readable JSON instead of the text report
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    load: LoadSummary,
    global_stats: Option<&'a GlobalStats>,
    axis_format: TimeFormat,
    events: Vec<CursorEvent>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => MeasureConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MeasureConfig::default(),
    };

    let mut session = Session::new(config);
    let load = session
        .load_csv(&args.file)
        .with_context(|| format!("loading {}", args.file.display()))?;

    if let Some(zoom) = &args.zoom {
        let [start, end] = zoom.as_slice() else {
            anyhow::bail!("--zoom expects two values: start,end");
        };
        session.set_zoom(*start, *end);
    }

    let mut events = Vec::with_capacity(args.cursors.len());
    for &t in &args.cursors {
        let event = session
            .place_cursor(t)
            .with_context(|| format!("placing cursor at {t}"))?;
        if !args.json {
            println!("{}", report::cursor_line(&event.cursor, &session));
        }
        events.push(event);
    }

    if args.json {
        let out = JsonReport {
            load,
            global_stats: session.global_stats(),
            axis_format: session.axis_format(),
            events,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", report::session_report(&session));
    }

    Ok(())
}
