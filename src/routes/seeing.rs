// ABOUTME: Seeing calculator route: descriptor, magnification ceiling, targets, turbulence
// ABOUTME: Driven only by query parameters, never touches the network
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

use astroseeing_core::constants::endpoints;
use astroseeing_core::errors::{AppError, AppResult};
use astroseeing_core::models::{ApertureMm, SeeingValue};
use astroseeing_intelligence::SeeingReport;
use axum::{
    extract::{rejection::QueryRejection, Query},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

/// Query parameters for `GET /api/seeing`
#[derive(Debug, Deserialize)]
pub struct SeeingQuery {
    /// Seeing value, 1-10
    pub seeing: u8,
    /// Telescope aperture in millimetres
    pub aperture_mm: f64,
}

/// Seeing calculator routes
pub struct SeeingRoutes;

impl SeeingRoutes {
    /// Create the seeing calculator routes
    pub fn routes() -> Router {
        Router::new().route(endpoints::SEEING, get(Self::handle_seeing))
    }

    /// Handle GET /api/seeing
    async fn handle_seeing(
        query: Result<Query<SeeingQuery>, QueryRejection>,
    ) -> AppResult<Json<SeeingReport>> {
        let Query(query) = query.map_err(|e| AppError::invalid_input(e.body_text()))?;
        let seeing = SeeingValue::new(query.seeing)?;
        let aperture = ApertureMm::new(query.aperture_mm)?;
        Ok(Json(SeeingReport::new(aperture, seeing)))
    }
}
