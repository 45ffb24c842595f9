// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service defaults, upstream endpoints, and validation bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

//! Constants module
//!
//! Scoring policy coefficients live with the engine in
//! `astroseeing-intelligence`; this module only carries service-level values.

/// Service identity
pub mod service_names {
    /// Name used in structured logs
    pub const ASTROSEEING_SERVER: &str = "astroseeing-server";
    /// Name used by the command-line client
    pub const ASTROSEEING_CLI: &str = "astroseeing-cli";
}

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY: &str = "/ready";
    /// Seeing calculator endpoint
    pub const SEEING: &str = "/api/seeing";
    /// Location-based observing report endpoint
    pub const SKY: &str = "/api/sky";
    /// Pure evaluation of caller-supplied observations
    pub const SKY_EVALUATE: &str = "/api/sky/evaluate";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Timeout configurations
pub mod timeouts {
    /// Upstream request timeout in seconds
    pub const GATEWAY_TIMEOUT_SECS: u64 = 15;
    /// Upstream connect timeout in seconds
    pub const GATEWAY_CONNECT_TIMEOUT_SECS: u64 = 5;
    /// Whole-request timeout applied by the HTTP server, in seconds
    pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 45;
}

/// Open-Meteo upstream endpoints
pub mod open_meteo {
    /// Forecast API base URL
    pub const FORECAST_BASE_URL: &str = "https://api.open-meteo.com";
    /// Air-quality API base URL
    pub const AIR_QUALITY_BASE_URL: &str = "https://air-quality-api.open-meteo.com";
    /// Geocoding API base URL
    pub const GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com";
    /// Current-conditions variables requested from the forecast API
    pub const FORECAST_CURRENT_FIELDS: &str =
        "temperature_2m,relative_humidity_2m,cloud_cover,wind_speed_10m,is_day";
    /// Current-conditions variables requested from the air-quality API
    pub const AIR_QUALITY_CURRENT_FIELDS: &str = "pm2_5,pm10,us_aqi";
    /// Default language for geocoding results
    pub const DEFAULT_LANGUAGE: &str = "en";
}

/// Location used when the caller supplies none
pub mod default_location {
    /// Latitude of San Carlos de Bariloche
    pub const LATITUDE: f64 = -41.1335;
    /// Longitude of San Carlos de Bariloche
    pub const LONGITUDE: f64 = -71.3103;
    /// Display name
    pub const NAME: &str = "Bariloche (Default)";
}

/// Validation bounds for user and upstream values
pub mod limits {
    /// Lowest seeing value on the Pickering-style scale
    pub const MIN_SEEING: u8 = 1;
    /// Highest seeing value on the Pickering-style scale
    pub const MAX_SEEING: u8 = 10;
    /// Upper bound for any percentage field
    pub const MAX_PERCENTAGE: f64 = 100.0;
    /// Latitude bound in degrees
    pub const MAX_LATITUDE: f64 = 90.0;
    /// Longitude bound in degrees
    pub const MAX_LONGITUDE: f64 = 180.0;
    /// Longest accepted city search query
    pub const MAX_PLACE_QUERY_LEN: usize = 120;
}

/// Security configurations
pub mod security {
    /// CORS allowed origins
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}
