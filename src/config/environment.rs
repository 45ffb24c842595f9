// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads ports, upstream endpoints, timeouts, and the default location from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

//! Environment-based configuration management

use crate::external::OpenMeteoConfig;
use astroseeing_core::constants::{
    default_location, open_meteo, ports, security, timeouts,
};
use astroseeing_core::errors::{AppError, AppResult};
use astroseeing_core::models::{Coordinates, ResolvedLocation};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use tracing::info;
use url::Url;

/// Environment type for logging detail and other deployment switches
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed service
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: IpAddr,
    /// HTTP port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Upstream Open-Meteo settings
    pub gateway: OpenMeteoConfig,
    /// Location used when a request names none
    pub default_location: ResolvedLocation,
    /// Allowed CORS origins; `["*"]` allows any
    pub cors_allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable is present but cannot be parsed
    /// or is out of range
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let gateway = OpenMeteoConfig {
            forecast_base_url: url_var("OPEN_METEO_FORECAST_URL", open_meteo::FORECAST_BASE_URL)?,
            air_quality_base_url: url_var(
                "OPEN_METEO_AIR_QUALITY_URL",
                open_meteo::AIR_QUALITY_BASE_URL,
            )?,
            geocoding_base_url: url_var("OPEN_METEO_GEOCODING_URL", open_meteo::GEOCODING_BASE_URL)?,
            language: env_var_or("OPEN_METEO_LANGUAGE", open_meteo::DEFAULT_LANGUAGE),
            timeout_secs: positive_secs("GATEWAY_TIMEOUT_SECS", timeouts::GATEWAY_TIMEOUT_SECS)?,
            connect_timeout_secs: positive_secs(
                "GATEWAY_CONNECT_TIMEOUT_SECS",
                timeouts::GATEWAY_CONNECT_TIMEOUT_SECS,
            )?,
        };

        let coordinates = Coordinates::new(
            parse_var("DEFAULT_LATITUDE", default_location::LATITUDE)?,
            parse_var("DEFAULT_LONGITUDE", default_location::LONGITUDE)?,
        )
        .map_err(|e| AppError::config_invalid(format!("Invalid default location: {}", e.message)))?;

        Ok(Self {
            host: parse_var("HOST", IpAddr::from([127, 0, 0, 1]))?,
            http_port: parse_var("HTTP_PORT", ports::DEFAULT_HTTP_PORT)?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            gateway,
            default_location: ResolvedLocation::new(
                coordinates,
                Some(env_var_or("DEFAULT_LOCATION_NAME", default_location::NAME)),
            ),
            cors_allowed_origins: parse_origins(&env_var_or(
                "CORS_ALLOWED_ORIGINS",
                security::CORS_ALLOWED_ORIGINS,
            )),
        })
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "AstroSeeing configuration: listen={}:{} environment={} forecast={} air_quality={} \
             geocoding={} language={} timeout={}s connect_timeout={}s default_location=\"{}\" cors={}",
            self.host,
            self.http_port,
            self.environment,
            self.gateway.forecast_base_url,
            self.gateway.air_quality_base_url,
            self.gateway.geocoding_base_url,
            self.gateway.language,
            self.gateway.timeout_secs,
            self.gateway.connect_timeout_secs,
            self.default_location.name,
            self.cors_allowed_origins.join(","),
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        let coordinates = Coordinates {
            latitude: default_location::LATITUDE,
            longitude: default_location::LONGITUDE,
        };
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            http_port: ports::DEFAULT_HTTP_PORT,
            environment: Environment::default(),
            gateway: OpenMeteoConfig::default(),
            default_location: ResolvedLocation::new(
                coordinates,
                Some(default_location::NAME.to_owned()),
            ),
            cors_allowed_origins: vec![security::CORS_ALLOWED_ORIGINS.to_owned()],
        }
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_var<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config_invalid(format!("Invalid {key} value {raw:?}: {e}"))),
        _ => Ok(default),
    }
}

fn positive_secs(key: &str, default: u64) -> AppResult<u64> {
    let secs = parse_var(key, default)?;
    if secs == 0 {
        return Err(AppError::config_invalid(format!("{key} must be greater than zero")));
    }
    Ok(secs)
}

/// Base URL with any trailing slash removed
fn url_var(key: &str, default: &str) -> AppResult<String> {
    let raw = env_var_or(key, default);
    let parsed = Url::parse(&raw)
        .map_err(|e| AppError::config_invalid(format!("Invalid {key} value {raw:?}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::config_invalid(format!(
            "{key} must be an http(s) URL, got {raw:?}"
        )));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
