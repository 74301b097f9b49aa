//! Validate configuration command.

use anyhow::Result;
use propdesk_config::load_config;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {} ({})", config.logging.level, config.logging.format);
            println!("Listen address: {}", config.server.address());
            println!("Default account size: {}", config.calculator.default_account_size);
            println!("Default risk: {}%", config.calculator.default_risk_percent);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
