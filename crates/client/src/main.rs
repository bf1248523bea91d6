//! Combat gauge command-line client.
//!
//! Run with: `combat-gauge <command>`
mod commands;
mod config;
mod logging;
mod render;

use anyhow::Result;
use clap::Parser;
use commands::{Evaluate, Replay};

use crate::config::ClientConfig;

/// Combat power gauge for virtual tabletop encounters
#[derive(Parser)]
#[command(name = "combat-gauge")]
#[command(about = "Combat power gauge for virtual tabletop encounters", long_about = None)]
#[command(version)]
struct Cli {
    /// Mirror logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Evaluate a single combat snapshot
    Evaluate(Evaluate),

    /// Replay a script of host events through a live gauge
    Replay(Replay),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(&config, cli.verbose)?;

    match cli.command {
        Command::Evaluate(cmd) => cmd.execute(&config),
        Command::Replay(cmd) => cmd.execute(&config).await,
    }
}
