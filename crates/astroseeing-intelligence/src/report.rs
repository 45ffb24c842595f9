// ABOUTME: Bundles every engine output for an observation snapshot or a seeing setting
// ABOUTME: Each component recomputes from the same inputs independently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

use crate::alerts::{generate_alerts, Alert};
use crate::forecast::{assess_stability, forecast_seeing, AtmosphericStability, SeeingForecast};
use crate::magnification::max_magnification;
use crate::pickering::{describe_seeing, recommend_targets, ObservingTarget, SeeingDescriptor};
use crate::sky_score::{score_sky, SkyScoreResult};
use crate::turbulence::{turbulence_profile, TurbulenceProfile};
use astroseeing_core::models::{
    AirQualityObservation, ApertureMm, ObservationSnapshot, ResolvedLocation, SeeingValue,
    WeatherObservation,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Network-derived outputs for one observation pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkyAssessment {
    /// Composite score
    pub sky_score: SkyScoreResult,
    /// Severe-condition alerts
    pub alerts: Vec<Alert>,
    /// Wind-based seeing forecast
    pub forecast: SeeingForecast,
    /// Calm/turbulent indicator, absent without weather
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stability: Option<AtmosphericStability>,
}

impl SkyAssessment {
    /// Evaluate an observation pair; absent halves yield pending results
    #[must_use]
    pub fn evaluate(
        weather: Option<&WeatherObservation>,
        air: Option<&AirQualityObservation>,
    ) -> Self {
        Self {
            sky_score: score_sky(weather, air),
            alerts: generate_alerts(weather, air),
            forecast: forecast_seeing(weather),
            stability: assess_stability(weather),
        }
    }
}

/// Everything known about the sky at one location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservingReport {
    /// Where the observations apply
    pub location: ResolvedLocation,
    /// Current weather, if fetched
    pub weather: Option<WeatherObservation>,
    /// Current air quality, if fetched
    pub air_quality: Option<AirQualityObservation>,
    /// When the observations were fetched
    pub fetched_at: DateTime<Utc>,
    /// Derived outputs
    #[serde(flatten)]
    pub assessment: SkyAssessment,
}

impl ObservingReport {
    /// Build a report from a gateway snapshot
    #[must_use]
    pub fn from_snapshot(snapshot: &ObservationSnapshot) -> Self {
        Self {
            location: snapshot.location.clone(),
            weather: snapshot.weather,
            air_quality: snapshot.air_quality,
            fetched_at: snapshot.fetched_at,
            assessment: SkyAssessment::evaluate(
                snapshot.weather.as_ref(),
                snapshot.air_quality.as_ref(),
            ),
        }
    }
}

/// Outputs driven only by the seeing slider and the telescope aperture
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeeingReport {
    /// Seeing value the report was built for
    pub seeing: SeeingValue,
    /// Aperture in millimetres
    pub aperture_mm: ApertureMm,
    /// Qualitative tier
    pub descriptor: SeeingDescriptor,
    /// Maximum useful magnification
    pub max_magnification: u32,
    /// Suggested targets
    pub targets: [ObservingTarget; 2],
    /// Simulation parameters
    pub turbulence: TurbulenceProfile,
}

impl SeeingReport {
    /// Build a report for a telescope at the given seeing
    #[must_use]
    pub fn new(aperture_mm: ApertureMm, seeing: SeeingValue) -> Self {
        Self {
            seeing,
            aperture_mm,
            descriptor: describe_seeing(seeing),
            max_magnification: max_magnification(aperture_mm, seeing),
            targets: recommend_targets(seeing),
            turbulence: turbulence_profile(seeing),
        }
    }
}
