// ABOUTME: Logging configuration and structured logging setup for the server and CLI
// ABOUTME: Configures log levels, formatters, and noise filters for tracing-subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

//! Structured logging configuration

use astroseeing_core::constants::service_names;
use anyhow::Result;
use serde_json::json;
use std::env;
use std::io;
use tracing::{debug, info, warn};
use tracing_subscriber::{
    filter::Directive,
    fmt::{self, format::FmtSpan, MakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Include span open/close events
    pub include_spans: bool,
    /// Write to stderr instead of stdout
    pub to_stderr: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, production, testing)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl LogFormat {
    fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("json") => Self::Json,
            Some("compact") => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            to_stderr: false,
            service_name: service_names::ASTROSEEING_SERVER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = LogFormat::from_env_value(env::var("LOG_FORMAT").ok().as_deref());
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        // In production, use more detailed logging
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            to_stderr: false,
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::ASTROSEEING_SERVER.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Quiet configuration for the command-line client
    ///
    /// Logs go to stderr so stdout stays machine-readable.
    #[must_use]
    pub fn for_cli(verbose: bool) -> Self {
        Self {
            level: if verbose { "debug" } else { "warn" }.into(),
            format: LogFormat::Compact,
            to_stderr: true,
            service_name: service_names::ASTROSEEING_CLI.into(),
            ..Self::default()
        }
    }

    /// Build the filter, always applying dependency noise reduction
    fn env_filter(&self) -> EnvFilter {
        let base = if self.to_stderr {
            EnvFilter::new(&self.level)
        } else {
            env::var("RUST_LOG").map_or_else(|_| EnvFilter::new(&self.level), EnvFilter::new)
        };

        [
            "hyper=warn",
            "hyper::proto=warn",
            "hyper_util=warn",
            "reqwest=warn",
            "rustls=warn",
            "tower_http=info",
        ]
        .into_iter()
        .filter_map(|directive| directive.parse::<Directive>().ok())
        .fold(base, EnvFilter::add_directive)
    }

    fn fmt_layer<S, W>(&self, writer: W) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => fmt::layer()
                .with_file(self.include_location)
                .with_line_number(self.include_location)
                .with_thread_ids(self.include_thread)
                .with_thread_names(self.include_thread)
                .with_target(true)
                .with_writer(writer)
                .with_span_events(span_events)
                .json()
                .boxed(),
            LogFormat::Pretty => fmt::layer()
                .with_file(self.include_location)
                .with_line_number(self.include_location)
                .with_thread_ids(self.include_thread)
                .with_thread_names(self.include_thread)
                .with_target(true)
                .with_writer(writer)
                .with_span_events(span_events)
                .boxed(),
            LogFormat::Compact => fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(writer)
                .with_span_events(FmtSpan::NONE)
                .boxed(),
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let layer = if self.to_stderr {
            self.fmt_layer(io::stderr)
        } else {
            self.fmt_layer(io::stdout)
        };

        tracing_subscriber::registry()
            .with(self.env_filter())
            .with(layer)
            .try_init()?;

        if !self.to_stderr {
            self.log_startup_info();
        }
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "AstroSeeing starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                    "spans": self.include_spans
                }
            }
        });

        info!("Logging configured: {}", config_summary);
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Domain-specific structured log events
pub struct AppLogger;

impl AppLogger {
    /// Log a completed upstream call
    pub fn log_upstream_call(service: &str, success: bool, duration_ms: u64) {
        if success {
            debug!(
                upstream.service = %service,
                upstream.success = true,
                upstream.duration_ms = %duration_ms,
                "Upstream call"
            );
        } else {
            warn!(
                upstream.service = %service,
                upstream.success = false,
                upstream.duration_ms = %duration_ms,
                "Upstream call failed"
            );
        }
    }

    /// Log a finished sky lookup
    pub fn log_sky_lookup(location: &str, outcome: &str) {
        info!(
            sky.location = %location,
            sky.outcome = %outcome,
            "Sky lookup"
        );
    }
}
