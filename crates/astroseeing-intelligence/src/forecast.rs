// ABOUTME: Wind-driven seeing forecast and atmospheric stability indicator
// ABOUTME: Surface wind is used as a proxy for upper-air turbulence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

use crate::observing_constants::forecast::{
    EXCELLENT_BELOW_KMH, FAIR_BELOW_KMH, GOOD_BELOW_KMH, TURBULENT_ABOVE_KMH,
};
use astroseeing_core::models::WeatherObservation;
use serde::Serialize;

/// Forecast band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastRating {
    /// No weather available
    NoData,
    /// Heavy turbulence
    Poor,
    /// Moderate wind
    Fair,
    /// Little turbulence
    Good,
    /// Stable atmosphere
    Excellent,
}

/// Expected seeing given current surface wind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeeingForecast {
    /// Band
    pub rating: ForecastRating,
    /// Short status label
    pub status: &'static str,
    /// One-line description
    pub description: &'static str,
}

impl From<ForecastRating> for SeeingForecast {
    fn from(rating: ForecastRating) -> Self {
        let (status, description) = match rating {
            ForecastRating::NoData => ("--", "No data"),
            ForecastRating::Excellent => ("Excellent", "Stable atmosphere"),
            ForecastRating::Good => ("Good", "Little turbulence"),
            ForecastRating::Fair => ("Fair", "Moderate wind"),
            ForecastRating::Poor => ("Poor", "Heavy turbulence"),
        };
        Self {
            rating,
            status,
            description,
        }
    }
}

/// Forecast seeing from wind speed
#[must_use]
pub fn forecast_seeing(weather: Option<&WeatherObservation>) -> SeeingForecast {
    let rating = match weather.map(|w| w.wind_speed_kmh) {
        None => ForecastRating::NoData,
        Some(wind) if wind < EXCELLENT_BELOW_KMH => ForecastRating::Excellent,
        Some(wind) if wind < GOOD_BELOW_KMH => ForecastRating::Good,
        Some(wind) if wind < FAIR_BELOW_KMH => ForecastRating::Fair,
        Some(_) => ForecastRating::Poor,
    };
    rating.into()
}

/// Calm or turbulent air
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AtmosphericStability {
    /// Wind above the turbulence threshold
    pub turbulent: bool,
    /// One-line summary
    pub summary: &'static str,
}

/// Stability indicator, `None` without weather
#[must_use]
pub fn assess_stability(weather: Option<&WeatherObservation>) -> Option<AtmosphericStability> {
    weather.map(|w| {
        let turbulent = w.wind_speed_kmh > TURBULENT_ABOVE_KMH;
        AtmosphericStability {
            turbulent,
            summary: if turbulent {
                "High turbulence expected. Poor seeing."
            } else {
                "Calm wind. Good seeing likely."
            },
        }
    })
}
