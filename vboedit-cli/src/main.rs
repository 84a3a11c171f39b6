//! vboedit CLI - Command-line interface
//!
//! Adds derived channels to Racelogic VBOX `.vbo` files through the
//! vboedit library.

mod commands;
mod error;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::debug;
use vboedit::logging::init_logging;

use commands::add::{FuelArgs, HeadingArgs, OversteerArgs, RotationSpeedArgs};
use commands::avi::AviArgs;
use commands::columns::{ConstantArgs, RemoveArgs};
use commands::common::{load_config, resolve_config_path};
use commands::config::ConfigCommands;
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "vboedit")]
#[command(version = vboedit::VERSION)]
#[command(about = "Add derived channels to Racelogic VBOX .vbo telemetry files", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Also write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Config file [default: <config dir>/vboedit/config.ini]
    #[arg(long = "config", global = true, value_name = "PATH")]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Add a smoothed GPS heading column
    Heading(HeadingArgs),

    /// Add a rotation speed (yaw rate) column, deriving heading if needed
    RotationSpeed(RotationSpeedArgs),

    /// Add an oversteer column, deriving rotation speed if needed
    Oversteer(OversteerArgs),

    /// Add a rolling fuel consumption column
    Fuel(FuelArgs),

    /// Add the [avi] section with video index and sync time columns
    Avi(AviArgs),

    /// Add a column with the same value in every row
    Constant(ConstantArgs),

    /// Remove a column and its header label
    Remove(RemoveArgs),

    /// Show sections and columns of a file
    Info {
        /// Input .vbo file
        input: PathBuf,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let _guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    let config_path = resolve_config_path(cli.config_file.as_deref());
    debug!(config = %config_path.display(), "starting");

    let config = || load_config(&config_path);

    match cli.command {
        Commands::Heading(args) => commands::add::run_heading(args, &config()?),
        Commands::RotationSpeed(args) => commands::add::run_rotation_speed(args, &config()?),
        Commands::Oversteer(args) => commands::add::run_oversteer(args, &config()?),
        Commands::Fuel(args) => commands::add::run_fuel(args, &config()?),
        Commands::Avi(args) => commands::avi::run(args, &config()?),
        Commands::Constant(args) => commands::columns::run_constant(args),
        Commands::Remove(args) => commands::columns::run_remove(args),
        Commands::Info { input } => commands::info::run(&input),
        Commands::Config { command } => commands::config::run(command, &config_path),
    }
}
