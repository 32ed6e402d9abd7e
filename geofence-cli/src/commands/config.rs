//! Configuration management CLI commands.
//!
//! Provides `config init`, `config show` and `config path` for creating and
//! inspecting the configuration file from the command line.

use std::path::Path;

use clap::Subcommand;
use geofence::config::GeofenceConfig;

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write a configuration file with the default zones
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration (file values over defaults)
    Show,

    /// Show the configuration file path
    Path,
}

/// Run a config subcommand against the given config file path.
pub fn run(command: ConfigCommands, path: &Path) -> Result<(), CliError> {
    match command {
        ConfigCommands::Init { force } => run_init(path, force),
        ConfigCommands::Show => run_show(path),
        ConfigCommands::Path => run_path(path),
    }
}

/// Write the default configuration.
fn run_init(path: &Path, force: bool) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "'{}' already exists. Use --force to overwrite it.",
            path.display()
        )));
    }

    GeofenceConfig::default().save_to(path)?;

    println!("Configuration file: {}", path.display());
    println!();
    println!("Edit the [zone.<NAME>] sections to define your zones.");
    println!("Zones listed first win where rectangles overlap.");
    Ok(())
}

/// Print the effective configuration as INI.
fn run_show(path: &Path) -> Result<(), CliError> {
    let config = GeofenceConfig::load_from(path)?;
    print!("{}", config.to_ini_string());
    Ok(())
}

/// Show the configuration file path.
fn run_path(path: &Path) -> Result<(), CliError> {
    println!("{}", path.display());
    Ok(())
}
