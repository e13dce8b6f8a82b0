//! Studyweave CLI — the main entry point.
//!
//! Commands:
//! - `serve`  — Start the HTTP API server
//! - `plan`   — Build a study plan from a request file, offline
//! - `doctor` — Diagnose configuration and provider health

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "studyweave",
    about = "Studyweave — AI study companion backend",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Build a study plan from a JSON request file without starting a server
    Plan {
        /// Path to a JSON file with subjects and daily hour budgets
        #[arg(short, long)]
        file: std::path::PathBuf,

        /// Plan start date (YYYY-MM-DD); defaults to the request's
        /// start_date, then to today
        #[arg(short, long)]
        start: Option<chrono::NaiveDate>,
    },

    /// Diagnose configuration and provider health
    Doctor,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Plan { file, start } => commands::plan::run(&file, start)?,
        Commands::Doctor => commands::doctor::run().await?,
    }

    Ok(())
}
