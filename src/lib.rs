// ABOUTME: Main library entry point for the AstroSeeing service
// ABOUTME: Wires configuration, the Open-Meteo gateway, HTTP routes, and logging together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

#![deny(unsafe_code)]

//! # AstroSeeing
//!
//! Observing-conditions service for amateur astronomers. Given a location it
//! fetches current weather and air quality, scores the night sky from 0 to
//! 100, raises hazard alerts and forecasts seeing stability. Given a seeing
//! value and a telescope aperture it derives the useful magnification ceiling
//! and recommends observing targets.
//!
//! ## Architecture
//!
//! - `astroseeing-core`: shared models, constants, and the unified error type
//! - `astroseeing-intelligence`: the pure scoring and recommendation engine
//! - this crate: configuration, the Open-Meteo gateway, HTTP routes, binaries
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use astroseeing::config::environment::ServerConfig;
//! use astroseeing_core::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("AstroSeeing configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Upstream weather, air-quality, and geocoding clients
pub mod external;

/// Location resolution and observation fetching
pub mod gateway;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// Server assembly and lifecycle
pub mod server;

/// Shared helpers
pub mod utils;
