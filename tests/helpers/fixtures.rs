// ABOUTME: Canned observations and router builders shared by integration tests
// ABOUTME: Routers are backed by the in-memory observation source, never the network
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

use astroseeing::config::ServerConfig;
use astroseeing::external::MockObservationSource;
use astroseeing::server::{build_router, ServerResources};
use astroseeing_core::models::{AirQualityObservation, WeatherObservation};
use axum::Router;
use std::sync::Arc;

/// Windy, partly cloudy night with light haze
#[allow(dead_code)]
pub const fn windy_night() -> WeatherObservation {
    WeatherObservation {
        temperature_c: 12.0,
        humidity_pct: 60.0,
        cloud_cover_pct: 20.0,
        wind_speed_kmh: 25.0,
        is_day: false,
    }
}

/// Heavy smoke
#[allow(dead_code)]
pub const fn smoky_air() -> AirQualityObservation {
    AirQualityObservation {
        pm25: 30.0,
        pm10: None,
        us_aqi: None,
    }
}

/// Full router over the given mock source with default configuration
#[allow(dead_code)]
pub fn router_with(source: MockObservationSource) -> Router {
    build_router(&ServerResources::with_source(
        ServerConfig::default(),
        Arc::new(source),
    ))
}

/// Full router over the default mock source
#[allow(dead_code)]
pub fn router() -> Router {
    router_with(MockObservationSource::new())
}
