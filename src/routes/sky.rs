// ABOUTME: Sky score routes: full observing report for a location and pure evaluation of payloads
// ABOUTME: Location lookups go through the shared observation gateway
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

//! Sky quality routes
//!
//! - `GET /api/sky` resolves a location (coordinates, city name, or the
//!   configured default), fetches observations and returns an
//!   [`ObservingReport`].
//! - `POST /api/sky/evaluate` scores caller-supplied observations without
//!   any network access and returns a [`SkyAssessment`].

use crate::gateway::{LocationQuery, ObservationGateway};
use astroseeing_core::constants::endpoints;
use astroseeing_core::errors::{AppError, AppResult};
use astroseeing_core::models::{AirQualityObservation, Coordinates, WeatherObservation};
use astroseeing_intelligence::{ObservingReport, SkyAssessment};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for `GET /api/sky`
#[derive(Debug, Default, Deserialize)]
pub struct SkyQuery {
    /// Latitude in degrees
    pub latitude: Option<f64>,
    /// Longitude in degrees
    pub longitude: Option<f64>,
    /// Display name for explicit coordinates
    pub name: Option<String>,
    /// Free-text place name to geocode
    pub city: Option<String>,
}

impl SkyQuery {
    /// Turn the parameters into a gateway query
    ///
    /// # Errors
    ///
    /// Returns a validation error when the parameters are contradictory,
    /// incomplete, or out of range
    pub fn into_location_query(self) -> AppResult<LocationQuery> {
        match (self.city, self.latitude, self.longitude) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(AppError::invalid_input(
                "Specify either city or latitude/longitude, not both",
            )),
            (Some(city), None, None) => LocationQuery::city(&city),
            (None, Some(latitude), Some(longitude)) => Ok(LocationQuery::Coordinates {
                coordinates: Coordinates::new(latitude, longitude)?,
                name: self.name,
            }),
            (None, Some(_), None) => Err(AppError::missing_field("longitude")),
            (None, None, Some(_)) => Err(AppError::missing_field("latitude")),
            (None, None, None) => Ok(LocationQuery::Default),
        }
    }
}

/// Weather half of an evaluation request; any missing reading makes it absent
#[derive(Debug, Default, Deserialize)]
pub struct WeatherPayload {
    /// Air temperature (°C)
    pub temperature_c: Option<f64>,
    /// Relative humidity (%)
    pub humidity_pct: Option<f64>,
    /// Cloud cover (%)
    pub cloud_cover_pct: Option<f64>,
    /// Wind speed (km/h)
    pub wind_speed_kmh: Option<f64>,
    /// Whether the sun is up
    pub is_day: Option<bool>,
}

impl WeatherPayload {
    fn into_observation(self) -> Option<WeatherObservation> {
        WeatherObservation::from_readings(
            self.temperature_c,
            self.humidity_pct,
            self.cloud_cover_pct,
            self.wind_speed_kmh,
            self.is_day,
        )
    }
}

/// Air-quality half of an evaluation request; PM2.5 is required
#[derive(Debug, Default, Deserialize)]
pub struct AirQualityPayload {
    /// Fine particulates (μg/m³)
    pub pm25: Option<f64>,
    /// Coarse particulates (μg/m³)
    pub pm10: Option<f64>,
    /// US AQI
    pub us_aqi: Option<f64>,
}

impl AirQualityPayload {
    fn into_observation(self) -> Option<AirQualityObservation> {
        AirQualityObservation::from_readings(self.pm25, self.pm10, self.us_aqi)
    }
}

/// Body of `POST /api/sky/evaluate`
#[derive(Debug, Default, Deserialize)]
pub struct EvaluateRequest {
    /// Current weather, if known
    pub weather: Option<WeatherPayload>,
    /// Current air quality, if known
    pub air_quality: Option<AirQualityPayload>,
}

/// Sky quality routes
pub struct SkyRoutes;

impl SkyRoutes {
    /// Create all sky routes
    pub fn routes(gateway: Arc<ObservationGateway>) -> Router {
        Router::new()
            .route(endpoints::SKY, get(Self::handle_report))
            .route(endpoints::SKY_EVALUATE, post(Self::handle_evaluate))
            .with_state(gateway)
    }

    /// Handle GET /api/sky
    async fn handle_report(
        State(gateway): State<Arc<ObservationGateway>>,
        query: Result<Query<SkyQuery>, QueryRejection>,
    ) -> AppResult<Json<ObservingReport>> {
        let Query(query) = query.map_err(|e| AppError::invalid_input(e.body_text()))?;
        let location = query.into_location_query()?;
        let snapshot = gateway.lookup(location).await.into_result()?;
        Ok(Json(ObservingReport::from_snapshot(&snapshot)))
    }

    /// Handle POST /api/sky/evaluate
    async fn handle_evaluate(
        body: Result<Json<EvaluateRequest>, JsonRejection>,
    ) -> AppResult<Json<SkyAssessment>> {
        let Json(request) = body.map_err(|e| AppError::invalid_input(e.body_text()))?;
        let weather = request.weather.and_then(WeatherPayload::into_observation);
        let air_quality = request
            .air_quality
            .and_then(AirQualityPayload::into_observation);
        Ok(Json(SkyAssessment::evaluate(
            weather.as_ref(),
            air_quality.as_ref(),
        )))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use astroseeing_core::errors::ErrorCode;

    #[test]
    fn test_empty_query_uses_default_location() {
        let query = SkyQuery::default().into_location_query().unwrap();
        assert_eq!(query, LocationQuery::Default);
    }

    #[test]
    fn test_coordinate_query() {
        let query = SkyQuery {
            latitude: Some(-33.45),
            longitude: Some(-70.66),
            name: Some("Santiago".to_owned()),
            city: None,
        }
        .into_location_query()
        .unwrap();
        assert!(matches!(
            query,
            LocationQuery::Coordinates { name: Some(ref n), .. } if n == "Santiago"
        ));
    }

    #[test]
    fn test_contradictory_or_partial_queries_rejected() {
        let both = SkyQuery {
            latitude: Some(1.0),
            city: Some("Lima".to_owned()),
            ..SkyQuery::default()
        };
        assert_eq!(both.into_location_query().unwrap_err().code, ErrorCode::InvalidInput);

        let half = SkyQuery {
            latitude: Some(1.0),
            ..SkyQuery::default()
        };
        assert_eq!(
            half.into_location_query().unwrap_err().code,
            ErrorCode::MissingRequiredField
        );

        let out_of_range = SkyQuery {
            latitude: Some(95.0),
            longitude: Some(0.0),
            ..SkyQuery::default()
        };
        assert_eq!(
            out_of_range.into_location_query().unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
    }

    #[test]
    fn test_weather_payload_missing_field_is_absent() {
        let payload: WeatherPayload = serde_json::from_str(
            r#"{"temperature_c": 4.0, "humidity_pct": 50, "wind_speed_kmh": 2, "is_day": false}"#,
        )
        .unwrap();
        assert!(payload.into_observation().is_none());
    }
}
