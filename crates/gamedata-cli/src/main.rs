//! # gamedata CLI entry point
//!
//! Parses command-line arguments, installs the tracing subscriber, and
//! dispatches to subcommand handlers. Handlers return the process exit
//! status.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gamedata_cli::targets::{run_targets, TargetsArgs};
use gamedata_cli::validate::{run_validate, ValidateArgs};

/// Gameplay data validator.
///
/// Checks the Skill, Enemy, Passive and Quest collection documents for
/// structural and type conformance before they ship.
#[derive(Parser, Debug)]
#[command(name = "gamedata", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate every collection document and report all defects.
    Validate(ValidateArgs),

    /// List the validation targets and whether their files exist.
    Targets(TargetsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    tracing::debug!(cwd = %cwd.display(), "gamedata starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &cwd, &mut out),
        Commands::Targets(args) => run_targets(&args, &cwd, &mut out),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
