// ABOUTME: Severity-tagged risk alerts for smoke, strong wind, and heavy cloud
// ABOUTME: Alerts cover only severe conditions; milder ones show up in the sky score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

use crate::observing_constants::alerts::{
    DENSE_SMOKE_PM25, HIGH_CLOUD_PCT, REDUCED_TRANSPARENCY_PM25, STRONG_WIND_KMH,
};
use astroseeing_core::models::{AirQualityObservation, WeatherObservation};
use serde::Serialize;

/// How serious an alert is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Degraded but usable
    Warning,
    /// Observing is compromised
    Danger,
}

/// Which rule raised an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// PM2.5 above the dense smoke level
    DenseSmoke,
    /// PM2.5 high enough to dim faint objects
    ReducedTransparency,
    /// Wind strong enough to shake the mount
    StrongWind,
    /// More than half the sky covered
    HighCloudCover,
}

/// A single alert shown to the observer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    /// Rule that fired
    pub kind: AlertKind,
    /// Severity
    pub severity: AlertSeverity,
    /// Headline
    pub title: &'static str,
    /// One-sentence explanation
    pub description: &'static str,
}

impl Alert {
    const fn new(kind: AlertKind) -> Self {
        let (severity, title, description) = match kind {
            AlertKind::DenseSmoke => (
                AlertSeverity::Danger,
                "Dense Smoke/Dust",
                "High particulate levels will block faint objects.",
            ),
            AlertKind::ReducedTransparency => (
                AlertSeverity::Warning,
                "Reduced Transparency",
                "Haze will wash out faint nebulae.",
            ),
            AlertKind::StrongWind => (
                AlertSeverity::Danger,
                "Strong Wind",
                "Telescope will shake. Stick to low magnification.",
            ),
            AlertKind::HighCloudCover => (
                AlertSeverity::Danger,
                "High Cloud Cover",
                "More than half the sky is obscured.",
            ),
        };
        Self {
            kind,
            severity,
            title,
            description,
        }
    }
}

/// Alerts for an observation pair, in evaluation order (smoke, wind, clouds)
///
/// Empty when either half is absent.
#[must_use]
pub fn generate_alerts(
    weather: Option<&WeatherObservation>,
    air: Option<&AirQualityObservation>,
) -> Vec<Alert> {
    let (Some(weather), Some(air)) = (weather, air) else {
        return Vec::new();
    };

    let smoke = if air.pm25 > DENSE_SMOKE_PM25 {
        Some(AlertKind::DenseSmoke)
    } else if air.pm25 > REDUCED_TRANSPARENCY_PM25 {
        Some(AlertKind::ReducedTransparency)
    } else {
        None
    };
    let wind = (weather.wind_speed_kmh > STRONG_WIND_KMH).then_some(AlertKind::StrongWind);
    let clouds = (weather.cloud_cover_pct > HIGH_CLOUD_PCT).then_some(AlertKind::HighCloudCover);

    [smoke, wind, clouds]
        .into_iter()
        .flatten()
        .map(Alert::new)
        .collect()
}
