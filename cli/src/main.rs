//! Fee Calculator CLI
//!
//! Attorney fee calculation and estimates from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "fee-calc")]
#[command(about = "Attorney fee calculator for the former JFBA fee standard")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate fees for one request
    Calculate {
        /// JSON request file, or `-` for stdin
        #[arg(short, long)]
        request: String,

        /// Consumption tax rate as a fraction
        #[arg(
            long,
            default_value_t = commands::DEFAULT_TAX_RATE,
            value_parser = commands::parse_tax_rate
        )]
        tax_rate: f64,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write an estimate document for one request
    Estimate {
        /// JSON request file, or `-` for stdin
        #[arg(short, long)]
        request: String,

        /// JSON file with letterhead and remarks
        #[arg(short, long)]
        settings: Option<String>,

        /// Consumption tax rate as a fraction
        #[arg(
            long,
            default_value_t = commands::DEFAULT_TAX_RATE,
            value_parser = commands::parse_tax_rate
        )]
        tax_rate: f64,

        /// Output file (default: Estimate_YYYYMMDD_HHMM.txt)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the fee schedule documentation as JSON
    Schedule,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Calculate {
            request,
            tax_rate,
            json,
        } => commands::calculate::run(&request, tax_rate, json),
        Commands::Estimate {
            request,
            settings,
            tax_rate,
            output,
        } => commands::estimate::run(&request, settings.as_deref(), tax_rate, output),
        Commands::Schedule => commands::schedule::run(),
    }
}
