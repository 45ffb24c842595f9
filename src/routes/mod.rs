// ABOUTME: Route module organization for AstroSeeing HTTP endpoints
// ABOUTME: Each domain module holds route definitions and thin handlers over the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

//! HTTP routes, organized by domain

/// Health check and readiness routes
pub mod health;
/// Seeing calculator routes (no network access)
pub mod seeing;
/// Sky score and observing report routes
pub mod sky;

pub use health::HealthRoutes;
pub use seeing::SeeingRoutes;
pub use sky::SkyRoutes;
