// ABOUTME: Errors raised while talking to the weather, air-quality, and geocoding services
// ABOUTME: Converts transport failures into the unified AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

use super::{AppError, ErrorCode};

/// Observation gateway errors
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Upstream service answered with a non-success status
    #[error("{service} returned status {status}: {body}")]
    UpstreamStatus {
        /// Which upstream endpoint failed
        service: &'static str,
        /// HTTP status code received
        status: u16,
        /// Response body (possibly empty)
        body: String,
    },

    /// Upstream payload could not be decoded
    #[error("{service} payload could not be decoded: {reason}")]
    InvalidPayload {
        /// Which upstream endpoint produced the payload
        service: &'static str,
        /// Decoder message
        reason: String,
    },

    /// Upstream could not be reached for a reason other than a transport error
    #[error("{service} is unreachable: {reason}")]
    Unreachable {
        /// Which upstream endpoint could not be reached
        service: &'static str,
        /// Failure description
        reason: String,
    },

    /// Network communication error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl GatewayError {
    /// Whether the failure happened before any answer was received
    #[must_use]
    pub const fn is_unreachable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Unreachable { .. })
    }
}

impl From<GatewayError> for AppError {
    fn from(error: GatewayError) -> Self {
        let code = if error.is_unreachable() {
            ErrorCode::ExternalServiceUnavailable
        } else {
            ErrorCode::ExternalServiceError
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
