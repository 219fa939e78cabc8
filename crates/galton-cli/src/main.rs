//! Galton Command-Line Interface
//!
//! The main entry point for the `galton` CLI tool.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{backends, board, experiment, version};

/// Galton - quantum Galton board simulation and statistics
#[derive(Parser)]
#[command(name = "galton")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a board experiment and write its artifacts
    Experiment {
        /// Experiment name (gaussian, exponential, interference, all)
        #[arg(short, long, default_value = "gaussian")]
        name: String,

        /// Number of board layers
        #[arg(short, long, default_value = "20")]
        layers: usize,

        /// Number of shots
        #[arg(short, long, default_value = "20000")]
        shots: u32,

        /// Block size for coarsening the weight distribution
        #[arg(short, long, default_value = "1")]
        block_size: usize,

        /// RNG seed for reproducible simulator runs
        #[arg(long)]
        seed: Option<u64>,

        /// Backend to execute on
        #[arg(long, default_value = "simulator")]
        backend: String,

        /// Output directory for metadata and distribution files
        #[arg(short, long, default_value = "results")]
        out: String,
    },

    /// Build a board circuit and print or export it
    Board {
        /// Number of board layers
        #[arg(short, long, default_value = "20")]
        layers: usize,

        /// Uniform bias angle theta (radians); omit for fair coins
        #[arg(short, long)]
        theta: Option<f64>,

        /// Per-step bias angles, comma separated (overrides --theta)
        #[arg(long, value_delimiter = ',')]
        per_step: Option<Vec<f64>>,

        /// Couple adjacent steps (ignores bias angles)
        #[arg(long)]
        interference: bool,

        /// Write the circuit as JSON instead of printing a summary
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List available backends
    Backends,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Experiment {
            name,
            layers,
            shots,
            block_size,
            seed,
            backend,
            out,
        } => experiment::execute(&name, layers, shots, block_size, seed, &backend, &out).await,

        Commands::Board {
            layers,
            theta,
            per_step,
            interference,
            output,
        } => board::execute(layers, theta, per_step, interference, output.as_deref()),

        Commands::Backends => backends::execute().await,

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
