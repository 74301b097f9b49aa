//! Position-size calculator CLI and HTTP service.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, LogLevel};
use propdesk_config::{load_config_or_default, AppConfig};
use propdesk_monitor::setup_logging;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Execute command
    match cli.command {
        Commands::Calculate(args) => {
            let config = init(&cli.config, cli.log_level.as_ref(), cli.json_logs)?;
            cli::commands::calculate::run(args, &config).await
        }
        Commands::Serve(args) => {
            let config = init(&cli.config, cli.log_level.as_ref(), cli.json_logs)?;
            cli::commands::serve::run(args, &config).await
        }
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config).await,
    }
}

/// Load configuration, then setup logging. CLI flags win over the file.
fn init(config_path: &Path, log_level: Option<&LogLevel>, json_logs: bool) -> Result<AppConfig> {
    let config = load_config_or_default(config_path)
        .with_context(|| format!("Failed to load configuration from {:?}", config_path))?;

    let level = log_level
        .map(|level| level.as_str().to_string())
        .unwrap_or_else(|| config.logging.level.clone());
    setup_logging(&level, json_logs || config.logging.is_json());

    Ok(config)
}
