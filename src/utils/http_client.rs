// ABOUTME: Shared HTTP client construction for upstream weather and geocoding calls
// ABOUTME: Builds pooled reqwest clients with the configured gateway timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::warn;

const USER_AGENT: &str = concat!("astroseeing/", env!("CARGO_PKG_VERSION"));

/// Create a new HTTP client with custom timeout settings
///
/// Falls back to a default client if the builder fails, losing the
/// configured timeouts; the fallback is logged at `warn`.
#[must_use]
pub fn create_client_with_timeout(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    ClientBuilder::new()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .build()
        .unwrap_or_else(|e| {
            warn!(
                error = %e,
                timeout_secs,
                connect_timeout_secs,
                "HTTP client builder failed, using default client without timeouts"
            );
            Client::new()
        })
}
