//! Command-line front end for the unimax maximisation toolkit
//!
//! # Commands
//!
//! - `newton` - maximise a built-in objective with Newton's method
//! - `golden-section` - maximise a built-in objective with golden-section search
//! - `demo` - run the canonical side-by-side session
//!
//! # Architecture
//!
//! The binary is a thin shell: argument parsing and logging live here, the
//! iteration kernels live in `unimax_core` and every printed trace comes
//! from `unimax_report`.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod objectives;

pub use error::{CliError, Result};

#[derive(Parser)]
#[command(name = "unimax")]
#[command(author, version, about = "Single-variable maximisation from the command line")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Maximise an objective with Newton's method
    Newton {
        /// Objective to maximise
        #[arg(short, long, default_value = "sine-hump")]
        objective: String,

        /// Initial guess x0
        #[arg(short, long, default_value_t = 2.5)]
        guess: f64,

        /// Number of iterations to run
        #[arg(short, long, default_value_t = 3)]
        iterations: usize,

        /// Decimal places in the printed trace
        #[arg(short, long, default_value_t = 3)]
        precision: usize,
    },

    /// Maximise an objective with golden-section search
    GoldenSection {
        /// Objective to maximise
        #[arg(short, long, default_value = "sine-hump")]
        objective: String,

        /// Lower bracket bound
        #[arg(short, long, default_value_t = 0.0)]
        lower: f64,

        /// Upper bracket bound
        #[arg(short, long, default_value_t = 4.0)]
        upper: f64,

        /// Number of iterations to run
        #[arg(short, long, default_value_t = 8)]
        iterations: usize,

        /// Decimal places in the printed table
        #[arg(short, long, default_value_t = 4)]
        precision: usize,
    },

    /// Run the canonical demo session (Newton then golden-section)
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Newton {
            objective,
            guess,
            iterations,
            precision,
        } => commands::newton::run(&objective, guess, iterations, precision),
        Commands::GoldenSection {
            objective,
            lower,
            upper,
            iterations,
            precision,
        } => commands::golden::run(&objective, lower, upper, iterations, precision),
        Commands::Demo => commands::demo::run(),
    }
}
