// ABOUTME: Server binary for the recipe adjuster agent
// ABOUTME: Loads configuration, wires the Spoonacular client into the dispatcher and serves HTTP
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Recipe Adjuster Agent Server Binary
//!
//! Starts the A2A JSON-RPC endpoint together with the direct recipe,
//! webhook, discovery and health routes.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use recipe_adjuster_agent::{
    agent::TaskDispatcher,
    config::ServerConfig,
    external::SpoonacularClient,
    logging::LoggingConfig,
    recipes::DailyTipProvider,
    routes::{self, AppState},
};
use recipe_core::constants::endpoints;
use tokio::net::TcpListener;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "recipe-agent-server")]
#[command(about = "Recipe Adjuster - A2A agent that scales recipes and parses ingredient lists")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override listen address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    LoggingConfig::from_env().with_level(config.log_level).init()?;

    info!("Starting Recipe Adjuster Agent");
    info!("{}", config.summary());

    let spoonacular = Arc::new(SpoonacularClient::new(config.spoonacular_client_config())?);
    let dispatcher = TaskDispatcher::new(
        spoonacular.clone(),
        spoonacular,
        Arc::new(DailyTipProvider),
    );

    let base_url = config.base_url();
    let app = routes::app(AppState::new(dispatcher, &base_url), &config);

    let address = format!("{}:{}", config.host, config.http_port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    display_available_endpoints(&base_url);
    info!("Server listening on {address}");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}

#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(base_url: &str) {
    info!("=== Available API Endpoints ===");
    info!("   A2A JSON-RPC:      POST {base_url}{}", endpoints::A2A_RECIPE);
    info!("   Agent Card:        GET  {base_url}{}", endpoints::AGENT_CARD);
    info!("   Adjust Recipe:     POST {base_url}{}", endpoints::ADJUST);
    info!("   Parse Ingredients: POST {base_url}{}", endpoints::PARSE);
    info!("   Webhook:           POST {base_url}{}", endpoints::WEBHOOK);
    info!("   Health:            GET  {base_url}{}", endpoints::HEALTH_CHECK);
    info!("=== End of Endpoint List ===");
}
