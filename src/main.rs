//! SCN CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "scn")]
#[command(about = "Render a resolved code graph as Symbolic Context Notation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./scn.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a graph snapshot to SCN
    Render {
        /// Graph snapshot (.json, .yaml or .yml)
        input: PathBuf,

        /// Write the document here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render a graph snapshot and print size statistics
    Stats {
        /// Graph snapshot (.json, .yaml or .yml)
        input: PathBuf,
    },
    /// Validate a graph snapshot without rendering
    Check {
        /// Graph snapshot (.json, .yaml or .yml)
        input: PathBuf,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the document.
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "scn={log_level},scn_core={log_level},scn_render={log_level}"
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cwd = std::env::current_dir()?;
    let config = config::ScnConfig::resolve(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Render { input, output } => commands::render(&input, output.as_deref(), &config),
        Commands::Stats { input } => commands::stats(&input, &config),
        Commands::Check { input } => commands::check(&input),
        Commands::Version => {
            println!("scn v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
