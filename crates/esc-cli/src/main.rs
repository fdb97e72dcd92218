//! # esc CLI entry point
//!
//! Parses command-line arguments, resolves configuration and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use esc_cli::check::{run_check, CheckArgs};
use esc_cli::config::{EscConfig, OutputFormat, Overrides};
use esc_cli::inspect::{run_classify, run_compliance, FileArgs};
use esc_criteria::Criterion;

/// Elastic stability conditions for 6×6 Voigt stiffness tensors.
///
/// Checks symmetry conformance and Born mechanical stability against a
/// crystal system, infers the Laue class of a tensor, and computes the
/// compliance tensor.
#[derive(Parser, Debug)]
#[command(name = "esc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Equality tolerance (overrides the configuration file).
    #[arg(long, global = true, allow_negative_numbers = true)]
    tolerance: Option<f64>,

    /// Use exact equality instead of a tolerance.
    #[arg(long, global = true, conflicts_with = "tolerance")]
    exact: bool,

    /// Output format (overrides the configuration file).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check symmetry conformance against a crystal system.
    Symmetry(CheckArgs),

    /// Check Born mechanical stability for a crystal system.
    Stability(CheckArgs),

    /// Check both symmetry conformance and mechanical stability.
    Check(CheckArgs),

    /// Infer the most specific Laue class of a tensor.
    Classify(FileArgs),

    /// Print the compliance tensor (inverse of the stiffness tensor).
    Compliance(FileArgs),
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            tolerance: self.tolerance,
            exact: self.exact,
            format: self.format,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
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

    tracing::debug!("esc CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = EscConfig::resolve(cli.config.as_deref(), cli.overrides()).and_then(|config| {
        match &cli.command {
            Commands::Symmetry(args) => run_check(args, &[Criterion::Symmetry], &config),
            Commands::Stability(args) => run_check(args, &[Criterion::Stability], &config),
            Commands::Check(args) => run_check(
                args,
                &[Criterion::Symmetry, Criterion::Stability],
                &config,
            ),
            Commands::Classify(args) => run_classify(args, &config),
            Commands::Compliance(args) => run_compliance(args, &config),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
