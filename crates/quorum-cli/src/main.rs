//! `quorum` CLI — find meeting slots that work for every attendee.
//!
//! ## Usage
//!
//! ```sh
//! # Attendees from a file, one-hour meeting, up to five suggestions
//! quorum --input attendees.json --length 60 --max-slots 5 \
//!     --from "2014-08-01 08:00" --to "2014-08-07 16:00"
//!
//! # Attendees piped via stdin, evaluated in another reference timezone
//! cat attendees.json | quorum --timezone Europe/Warsaw \
//!     --from "2014-08-01 08:00" --to "2014-08-01 16:00"
//!
//! # Write the outcome to a file instead of stdout
//! quorum -i attendees.json --from "2014-08-01 08:00" --to "2014-08-01 16:00" \
//!     -o outcome.json
//! ```
//!
//! The outcome is the scheduler's wire shape, pretty-printed:
//! `{ "message": null, "data": [ ...start times... ] }` on success, or a
//! message plus the best-effort fallback slot when no time suits everyone.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};

use quorum_core::{AttendeeList, Scheduler};

#[derive(Parser)]
#[command(
    name = "quorum",
    version,
    about = "Find meeting slots that work for every attendee"
)]
struct Cli {
    /// Attendee JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Meeting length in minutes
    #[arg(short, long, default_value_t = 60)]
    length: i64,

    /// Maximum number of suggested start times
    #[arg(short, long, default_value_t = 5)]
    max_slots: usize,

    /// Search window start, "YYYY-MM-DD HH:MM" wall clock in the reference timezone
    #[arg(long)]
    from: String,

    /// Search window end (exclusive), same format
    #[arg(long)]
    to: String,

    /// Reference IANA timezone for the window bounds and the reported slots
    #[arg(short, long, default_value = "UTC")]
    timezone: String,

    /// Candidate grid granularity in minutes
    #[arg(long, default_value_t = 30)]
    interval: i64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let reference_tz: chrono_tz::Tz = cli
        .timezone
        .parse()
        .map_err(|_| anyhow::anyhow!("unrecognized timezone: {}", cli.timezone))?;

    let json = read_input(cli.input.as_deref())?;
    let mut attendees =
        AttendeeList::from_json(&json).context("Failed to load attendee records")?;

    let scheduler = Scheduler::new(reference_tz).with_sampling_interval(cli.interval);
    let outcome = scheduler
        .find_available_slots(&mut attendees, cli.length, cli.max_slots, &cli.from, &cli.to)
        .context("Slot search failed")?;

    let rendered = serde_json::to_string_pretty(&outcome)?;
    write_output(cli.output.as_deref(), &rendered)?;

    Ok(())
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

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
