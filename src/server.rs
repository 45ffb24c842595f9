// ABOUTME: HTTP server assembly: shared resources, router composition, and graceful shutdown
// ABOUTME: Layers request ids, tracing, CORS, and a whole-request timeout over the domain routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

use crate::config::ServerConfig;
use crate::external::{ObservationSource, OpenMeteoClient};
use crate::gateway::ObservationGateway;
use crate::middleware::setup_cors;
use crate::routes::{HealthRoutes, SeeingRoutes, SkyRoutes};
use anyhow::Result;
use astroseeing_core::constants::timeouts::HTTP_REQUEST_TIMEOUT_SECS;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Everything the HTTP handlers share
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Observation gateway
    pub gateway: Arc<ObservationGateway>,
}

impl ServerResources {
    /// Resources backed by the live Open-Meteo client
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let source = Arc::new(OpenMeteoClient::new(config.gateway.clone()));
        Self::with_source(config, source)
    }

    /// Resources backed by an arbitrary observation source
    #[must_use]
    pub fn with_source(config: ServerConfig, source: Arc<dyn ObservationSource>) -> Self {
        let gateway = ObservationGateway::new(source, config.default_location.clone());
        Self {
            config: Arc::new(config),
            gateway: Arc::new(gateway),
        }
    }
}

/// Compose every route with the shared middleware stack
///
/// Outermost first: request id assignment, tracing, CORS, timeout, request
/// id propagation onto the response.
pub fn build_router(resources: &ServerResources) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(SeeingRoutes::routes())
        .merge(SkyRoutes::routes(Arc::clone(&resources.gateway)))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(Duration::from_secs(
            HTTP_REQUEST_TIMEOUT_SECS,
        )))
        .layer(setup_cors(&resources.config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Bind and serve until Ctrl-C / SIGTERM
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails
pub async fn run(resources: ServerResources) -> Result<()> {
    let addr = SocketAddr::new(resources.config.host, resources.config.http_port);
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, build_router(&resources))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
