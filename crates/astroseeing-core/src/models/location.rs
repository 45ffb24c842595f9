// ABOUTME: Coordinates, resolved place names, and the observation snapshot of one lookup
// ABOUTME: A snapshot keeps weather and air quality as independent optional halves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

use super::{AirQualityObservation, WeatherObservation};
use crate::constants::limits::{MAX_LATITUDE, MAX_LONGITUDE};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// WGS84 latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude, -90 to 90
    pub latitude: f64,
    /// Longitude, -180 to 180
    pub longitude: f64,
}

impl Coordinates {
    /// Create validated coordinates
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if either component is non-finite or outside its range
    pub fn new(latitude: f64, longitude: f64) -> AppResult<Self> {
        if !latitude.is_finite() || latitude.abs() > MAX_LATITUDE {
            return Err(AppError::out_of_range(format!(
                "latitude must be between -{MAX_LATITUDE} and {MAX_LATITUDE}, got {latitude}"
            )));
        }
        if !longitude.is_finite() || longitude.abs() > MAX_LONGITUDE {
            return Err(AppError::out_of_range(format!(
                "longitude must be between -{MAX_LONGITUDE} and {MAX_LONGITUDE}, got {longitude}"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Display label used when no place name is known
    #[must_use]
    pub fn label(&self) -> String {
        format!("Lat: {:.2}, Lon: {:.2}", self.latitude, self.longitude)
    }
}

/// A named place with coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    /// Display name (e.g. "Bariloche, Argentina")
    pub name: String,
    /// Coordinates the observations were fetched for
    pub coordinates: Coordinates,
}

impl ResolvedLocation {
    /// Location named after a caller-supplied label, or after its coordinates when none is given
    #[must_use]
    pub fn new(coordinates: Coordinates, name: Option<String>) -> Self {
        let name = name
            .map(|n| n.trim().to_owned())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| coordinates.label());
        Self { name, coordinates }
    }
}

/// Result of one gateway lookup
///
/// Either half may be absent when its upstream call failed; consumers treat
/// an absent half as "data pending".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationSnapshot {
    /// Where the observations apply
    pub location: ResolvedLocation,
    /// Current weather, if it could be fetched
    pub weather: Option<WeatherObservation>,
    /// Current air quality, if it could be fetched
    pub air_quality: Option<AirQualityObservation>,
    /// When the gateway completed the lookup
    pub fetched_at: DateTime<Utc>,
}

impl ObservationSnapshot {
    /// Whether both halves are present
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.weather.is_some() && self.air_quality.is_some()
    }
}
