use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use itime_cli::commands::{events, report};
use itime_cli::{Cli, Commands, Config, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    match &cli.command {
        Some(Commands::Report {
            log,
            json,
            hide_zero,
        }) => {
            let format = if *json {
                OutputFormat::Json
            } else {
                config.format
            };
            report::run(&mut io::stdout().lock(), log, format, *hide_zero || config.hide_zero)?;
        }
        Some(Commands::Events { log }) => {
            events::run(&mut io::stdout().lock(), log)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
