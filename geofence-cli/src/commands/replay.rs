//! Replay commands: feed JSON-lines location pings through the service.
//!
//! Each input line is one `LocationEvent`:
//!
//! ```text
//! {"vehicle_id":"TAXI_001","lat":12.96,"lon":77.65,"timestamp":"2025-11-30T12:30:00Z"}
//! ```
//!
//! Every accepted ping produces one `ZoneChangeEvent` line on the output.
//! Lines that fail to parse or validate are reported on stderr and skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use geofence::tracker::LocationEvent;
use geofence::GeofenceService;
use tracing::{info, warn};

use crate::error::CliError;

/// Counts from one replay run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Pings ingested.
    pub accepted: usize,
    /// Lines skipped because they were malformed or invalid.
    pub rejected: usize,
    /// Accepted pings that changed zone membership.
    pub transitions: usize,
}

/// Arguments for the replay command.
pub struct ReplayArgs {
    pub input: Option<PathBuf>,
    pub status: bool,
}

/// Replay pings from a file (or stdin) and print the resulting events.
pub fn run(service: &GeofenceService, args: ReplayArgs) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    replay_input(service, args.input.as_deref(), &mut out)?;

    if args.status {
        for status in service.statuses() {
            write_json(&mut out, &status)?;
        }
    }
    Ok(())
}

/// Replay pings from a file, then print one vehicle's status.
pub fn run_status(
    service: &GeofenceService,
    input: &Path,
    vehicle_id: &str,
) -> Result<(), CliError> {
    replay_input(service, Some(input), &mut io::sink())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_json(&mut out, &service.status(vehicle_id))
}

fn replay_input<W: Write>(
    service: &GeofenceService,
    input: Option<&Path>,
    out: &mut W,
) -> Result<ReplaySummary, CliError> {
    match input {
        Some(path) => {
            let file = File::open(path).map_err(|e| CliError::io(path, e))?;
            replay(service, BufReader::new(file), out, &path.display().to_string())
        }
        None => {
            let stdin = io::stdin();
            replay(service, stdin.lock(), out, "<stdin>")
        }
    }
}

/// Ingest every line of `reader`, writing one JSON event per accepted ping.
///
/// Lines are read as raw bytes, so a line that is not valid UTF-8 is rejected
/// like any other malformed line. Blank lines are ignored. `source` names the
/// input in error messages.
pub fn replay<R: BufRead, W: Write>(
    service: &GeofenceService,
    reader: R,
    out: &mut W,
    source: &str,
) -> Result<ReplaySummary, CliError> {
    let mut summary = ReplaySummary::default();

    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(|e| CliError::io(source, e))?;
        let line_no = index + 1;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let event: LocationEvent = match serde_json::from_slice(&line) {
            Ok(event) => event,
            Err(e) => {
                reject(&mut summary, source, line_no, &e);
                continue;
            }
        };

        match service.ingest(&event) {
            Ok(change) => {
                summary.accepted += 1;
                if change.is_transition() {
                    summary.transitions += 1;
                }
                write_json(out, &change)?;
            }
            Err(e) => reject(&mut summary, source, line_no, &e),
        }
    }

    info!(
        source,
        accepted = summary.accepted,
        rejected = summary.rejected,
        transitions = summary.transitions,
        "Replay complete"
    );
    Ok(summary)
}

fn reject(
    summary: &mut ReplaySummary,
    source: &str,
    line_no: usize,
    error: &dyn std::fmt::Display,
) {
    summary.rejected += 1;
    warn!(source, line = line_no, error = %error, "Skipping input line");
    eprintln!("{}:{}: {}", source, line_no, error);
}

fn write_json<W: Write, T: serde::Serialize>(out: &mut W, value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string(value)
        .map_err(|e| CliError::io("<stdout>", io::Error::new(io::ErrorKind::InvalidData, e)))?;
    writeln!(out, "{}", json).map_err(|e| CliError::io("<stdout>", e))
}
