use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "pyprune")]
#[command(about = "Prune a Python distribution down to what an application needs")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a source tree and print its runtime imports
    Imports {
        /// Path to source directory to analyze
        source_dir: PathBuf,
        #[command(flatten)]
        policy: cli::PolicyArgs,
        /// Print the full classification and file statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove unneeded files from a Python distribution
    Prune {
        /// Path to Python distribution directory
        dist_path: PathBuf,
        /// Path to source directory to analyze
        source_dir: PathBuf,
        #[command(flatten)]
        policy: cli::PolicyArgs,
        /// Only analyze and output required imports
        #[arg(long)]
        imports_only: bool,
        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over --debug when set
    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Imports {
            source_dir,
            policy,
            json,
        } => cli::imports::run(&source_dir, &policy, json),
        Commands::Prune {
            dist_path,
            source_dir,
            policy,
            imports_only,
            json,
        } => cli::prune::run(&dist_path, &source_dir, &policy, imports_only, json),
    };

    // Display error with helpful suggestions
    if let Err(ref e) = result {
        eprintln!("\n{}", pyprune_core::format_error_with_help(e));
        std::process::exit(1);
    }
}
