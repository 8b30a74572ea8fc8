//! # cofactor CLI entry point
//!
//! Parses command-line arguments, initializes logging, loads the optional
//! configuration file, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cofactor_cli::config::load_config;
use cofactor_cli::det::{run_det, DetArgs};
use cofactor_cli::pivot::{run_pivot, PivotArgs};

/// Cofactor — step-by-step determinants by Laplace expansion.
///
/// Expands along the row with the most zeros, uses direct formulas for 2x2
/// and 3x3 minors, and prints every submatrix, sign, and partial product.
#[derive(Parser, Debug)]
#[command(name = "cofactor", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute a determinant and print every expansion step.
    Det(DetArgs),

    /// Show zero counts per line and the pivot each rule would choose.
    Pivot(PivotArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("cofactor CLI starting");

    let result = load_config(cli.config.as_deref()).and_then(|config| match &cli.command {
        Commands::Det(args) => run_det(args, &config),
        Commands::Pivot(args) => run_pivot(args),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
