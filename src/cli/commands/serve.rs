//! Serve command implementation.

use anyhow::{Context, Result};
use propdesk_api::AppState;
use propdesk_config::AppConfig;
use tracing::info;

use crate::cli::ServeArgs;

pub async fn run(args: ServeArgs, config: &AppConfig) -> Result<()> {
    let mut server = config.server.clone();
    if let Some(host) = args.host {
        server.host = host;
    }
    if let Some(port) = args.port {
        server.port = port;
    }

    info!(
        app = %config.app.name,
        environment = %config.app.environment,
        "Starting calculator service"
    );

    propdesk_api::run(&server, AppState::new(config))
        .await
        .context("Calculator service failed")
}
