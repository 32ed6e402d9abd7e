//! Geofence CLI - Command-line interface
//!
//! This binary drives the geofence library: it inspects configured zones,
//! classifies single points and replays JSON-lines location pings through
//! the transition tracker.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use geofence::config::{config_file_path, GeofenceConfig};
use geofence::logging::{init_logging, LoggingGuard};
use geofence::GeofenceService;

use commands::config::ConfigCommands;
use commands::replay::ReplayArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "geofence")]
#[command(version, about = "Track vehicle zone transitions from location pings", long_about = None)]
struct Cli {
    /// Configuration file (default: ~/.geofence/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List configured zones in precedence order
    Zones,

    /// Print the zone containing a point
    Classify {
        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },

    /// Ingest JSON-lines location pings and print zone-change events
    Replay {
        /// Input file (default: stdin)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Print every tracked vehicle's status after the replay
        #[arg(long)]
        status: bool,
    },

    /// Replay pings from a file, then print one vehicle's status
    Status {
        /// Input file with JSON-lines location pings
        #[arg(long)]
        input: PathBuf,

        /// Vehicle to report on
        vehicle_id: String,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.unwrap_or_else(config_file_path);

    // Config commands operate on the file itself and must work even when it
    // does not parse.
    if let Commands::Config { command } = cli.command {
        return commands::config::run(command, &config_path);
    }

    let config = GeofenceConfig::load_from(&config_path)?;
    let _logging_guard: LoggingGuard = init_logging(&config.logging)?;
    let service = GeofenceService::from_config(&config)?;

    match cli.command {
        Commands::Zones => commands::zones::run_list(service.classifier()),
        Commands::Classify { lat, lon } => {
            commands::zones::run_classify(service.classifier(), lat, lon)
        }
        Commands::Replay { input, status } => {
            commands::replay::run(&service, ReplayArgs { input, status })
        }
        Commands::Status { input, vehicle_id } => {
            commands::replay::run_status(&service, &input, &vehicle_id)
        }
        Commands::Config { command } => commands::config::run(command, &config_path),
    }
}
