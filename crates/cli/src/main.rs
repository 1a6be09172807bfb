//! stackhook CLI
//!
//! Runs a deployment hook once against a live stack, outside of a host tool.

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::RunnerConfig;

/// stackhook: run deployment hooks against a stack.
#[derive(Parser, Debug)]
#[command(name = "stackhook", version, about)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(
        short,
        long,
        env = "STACKHOOK_CONFIG",
        default_value = "stackhook.toml",
        global = true
    )]
    config: PathBuf,

    /// Output format.
    #[arg(long, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a hook once.
    Run(commands::run::RunArgs),
    /// List registered hooks.
    Hooks,
    /// List known Auto Scaling process names.
    Processes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => {
            let (config, found) = RunnerConfig::load(&cli.config)?;
            if !found {
                info!(path = %cli.config.display(), "config file not found, using defaults");
            }
            commands::run::run(&config, &args).await
        }
        Command::Hooks => commands::hooks::run(&cli.format),
        Command::Processes => commands::processes::run(&cli.format),
    }
}
