//! `meetgrid` CLI — place meetings on the weekly grid and pre-check edits from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Where does a Tuesday 09:00-10:15 meeting go?
//! meetgrid place --start 09:00 --end 10:15 --day TU
//!
//! # Same, on a custom bell schedule
//! meetgrid place --start 09:30 --end 10:45 --day TU --layout blocks.json
//!
//! # Check a candidate edit ({candidate, committed?, existing} JSON on stdin)
//! meetgrid check < edit.json
//!
//! # List every overlap, not just the first
//! meetgrid check -i edit.json --all
//!
//! # Free 75-minute starts on Monday given a JSON array of meetings
//! meetgrid openings --day MO --duration 75 -i meetings.json
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use meeting_grid::clock::parse_hhmm;
use meeting_grid::{check_all, check_conflict, open_slots, CheckResult, Conflict, Day, GridLayout, Meeting};
use serde::{Deserialize, Serialize};
use std::io::{self, IsTerminal, Read};
use tracing::{debug, Level};

#[derive(Parser)]
#[command(
    name = "meetgrid",
    version,
    about = "Weekly grid placement and meeting overlap pre-checks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Grid layout JSON file (uses the standard 08:00-18:00 hourly layout if omitted)
    #[arg(long, global = true)]
    layout: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace); logs go to stderr
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Map a meeting time to its grid row, column and span
    Place {
        /// Start time (HH:MM, 24-hour)
        #[arg(long)]
        start: String,
        /// End time (HH:MM, 24-hour)
        #[arg(long)]
        end: String,
        /// Day code (MO, TU, WE, TH, FR, SA, SU)
        #[arg(long)]
        day: String,
    },
    /// Check a candidate meeting against already-placed meetings
    Check {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Also list every overlapping meeting
        #[arg(long)]
        all: bool,
    },
    /// List canonical start times where a meeting of the given length fits
    Openings {
        /// Day code (MO, TU, WE, TH, FR, SA, SU)
        #[arg(long)]
        day: String,
        /// Meeting length in minutes
        #[arg(long)]
        duration: i64,
        /// JSON array of placed meetings (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

/// Body of `meetgrid check`.
#[derive(Deserialize)]
struct CheckRequest {
    candidate: Meeting,
    #[serde(default)]
    committed: Option<Meeting>,
    #[serde(default)]
    existing: Vec<Meeting>,
}

#[derive(Serialize)]
struct CheckReport {
    #[serde(flatten)]
    result: CheckResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    conflicts: Option<Vec<Conflict>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let layout = load_layout(cli.layout.as_deref())?;

    match cli.command {
        Commands::Place { start, end, day } => {
            let start = parse_hhmm(&start).context("Invalid --start")?;
            let end = parse_hhmm(&end).context("Invalid --end")?;
            let day: Day = day.parse().context("Invalid --day")?;
            print_json(&layout.place(start, end, day))?;
        }
        Commands::Check { input, all } => {
            let body = read_input(input.as_deref())?;
            let request: CheckRequest =
                serde_json::from_str(&body).context("Failed to parse check request JSON")?;
            debug!(existing = request.existing.len(), "checking candidate");

            let verdict = check_conflict(
                &request.candidate,
                request.committed.as_ref(),
                &request.existing,
            );
            let report = CheckReport {
                result: verdict.to_result(&request.candidate),
                conflicts: all.then(|| check_all(&request.candidate, &request.existing)),
            };
            print_json(&report)?;
        }
        Commands::Openings {
            day,
            duration,
            input,
        } => {
            let day: Day = day.parse().context("Invalid --day")?;
            let body = read_input(input.as_deref())?;
            let existing: Vec<Meeting> =
                serde_json::from_str(&body).context("Failed to parse meetings JSON")?;
            print_json(&open_slots(&layout, day, duration, &existing))?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn load_layout(path: Option<&str>) -> Result<GridLayout> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read layout file: {}", path))?;
            let layout = GridLayout::from_json(&json)
                .with_context(|| format!("Invalid layout file: {}", path))?;
            debug!(path, rows = layout.instants().len(), "loaded layout");
            Ok(layout)
        }
        None => Ok(GridLayout::standard()),
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value)?;
    println!("{}", pretty);
    Ok(())
}
