// ABOUTME: Sky report command for astroseeing-cli
// ABOUTME: Resolves the location through the live gateway and prints the observing report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

use crate::helpers::display;
use crate::OutputFormat;
use anyhow::Result;
use astroseeing::config::environment::ServerConfig;
use astroseeing::external::OpenMeteoClient;
use astroseeing::gateway::ObservationGateway;
use astroseeing::routes::sky::SkyQuery;
use astroseeing_intelligence::ObservingReport;
use std::sync::Arc;
use tracing::info;

/// Fetch observations for the requested location and print the report
pub async fn run(
    city: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    name: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let location = SkyQuery {
        latitude,
        longitude,
        name,
        city,
    }
    .into_location_query()?;

    let config = ServerConfig::from_env()?;
    let source = Arc::new(OpenMeteoClient::new(config.gateway));
    let gateway = ObservationGateway::new(source, config.default_location);

    info!("Looking up {location:?}");
    let snapshot = gateway.lookup(location).await.into_result()?;
    let report = ObservingReport::from_snapshot(&snapshot);

    match format {
        OutputFormat::Json => display::print_json(&report)?,
        OutputFormat::Text => display::display_observing_report(&report),
    }
    Ok(())
}
