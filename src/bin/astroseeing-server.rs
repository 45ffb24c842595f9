// ABOUTME: HTTP server binary exposing the seeing calculator and sky score endpoints
// ABOUTME: Loads configuration from the environment and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

//! # AstroSeeing Server Binary
//!
//! Starts the HTTP API backed by the live Open-Meteo services.

use anyhow::Result;
use astroseeing::{
    config::environment::ServerConfig,
    logging,
    server::{self, ServerResources},
};
use astroseeing_core::constants::endpoints;
use clap::Parser;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "astroseeing-server")]
#[command(about = "AstroSeeing - sky quality and seeing API for amateur astronomers")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle container environments where clap may not work properly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using default configuration");
            Args { http_port: None }
        }
    };

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting AstroSeeing server");
    info!("{}", config.summary());

    display_available_endpoints(&config);

    let resources = ServerResources::new(config);
    if let Err(e) = server::run(resources).await {
        error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let host = config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("   Health Check:      GET  http://{host}:{port}{}", endpoints::HEALTH_CHECK);
    info!("   Readiness:         GET  http://{host}:{port}{}", endpoints::READY);
    info!(
        "   Seeing Calculator: GET  http://{host}:{port}{}?seeing={{1-10}}&aperture_mm={{mm}}",
        endpoints::SEEING
    );
    info!(
        "   Sky Report:        GET  http://{host}:{port}{}?city={{name}} | latitude=..&longitude=..",
        endpoints::SKY
    );
    info!("   Sky Evaluate:      POST http://{host}:{port}{}", endpoints::SKY_EVALUATE);
    info!("=== End of Endpoint List ===");
}
