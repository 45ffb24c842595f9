// ABOUTME: Immutable weather and air-quality snapshots consumed by the scoring engine
// ABOUTME: Sanitizing constructors enforce documented units and ranges at the boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

use crate::constants::limits::MAX_PERCENTAGE;
use serde::{Deserialize, Serialize};

/// Current weather conditions at one location
///
/// Units: degrees Celsius, percent, km/h.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Air temperature at 2 m (°C)
    pub temperature_c: f64,
    /// Relative humidity at 2 m, 0-100 (%)
    pub humidity_pct: f64,
    /// Total cloud cover, 0-100 (%)
    pub cloud_cover_pct: f64,
    /// Wind speed at 10 m, non-negative (km/h)
    pub wind_speed_kmh: f64,
    /// Whether the sun is up at the location
    pub is_day: bool,
}

impl WeatherObservation {
    /// Build an observation from raw readings
    ///
    /// Returns `None` when any reading is missing or non-finite. Finite
    /// out-of-range readings are clamped: percentages into 0-100, wind
    /// speed floored at zero.
    #[must_use]
    pub fn from_readings(
        temperature_c: Option<f64>,
        humidity_pct: Option<f64>,
        cloud_cover_pct: Option<f64>,
        wind_speed_kmh: Option<f64>,
        is_day: Option<bool>,
    ) -> Option<Self> {
        let temperature_c = temperature_c.filter(|t| t.is_finite())?;
        let humidity_pct = humidity_pct.filter(|h| h.is_finite())?;
        let cloud_cover_pct = cloud_cover_pct.filter(|c| c.is_finite())?;
        let wind_speed_kmh = wind_speed_kmh.filter(|w| w.is_finite())?;

        Some(Self {
            temperature_c,
            humidity_pct: humidity_pct.clamp(0.0, MAX_PERCENTAGE),
            cloud_cover_pct: cloud_cover_pct.clamp(0.0, MAX_PERCENTAGE),
            wind_speed_kmh: wind_speed_kmh.max(0.0),
            is_day: is_day?,
        })
    }
}

/// Current particulate levels at one location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirQualityObservation {
    /// Fine particulate matter, non-negative (μg/m³)
    pub pm25: f64,
    /// Coarse particulate matter (μg/m³), display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm10: Option<f64>,
    /// US AQI index, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub us_aqi: Option<f64>,
}

impl AirQualityObservation {
    /// Observation carrying only the PM2.5 reading
    #[must_use]
    pub const fn with_pm25(pm25: f64) -> Self {
        Self {
            pm25,
            pm10: None,
            us_aqi: None,
        }
    }

    /// Build an observation from raw readings
    ///
    /// Returns `None` when PM2.5 is missing or non-finite. The display-only
    /// fields are dropped individually when non-finite.
    #[must_use]
    pub fn from_readings(pm25: Option<f64>, pm10: Option<f64>, us_aqi: Option<f64>) -> Option<Self> {
        let pm25 = pm25.filter(|p| p.is_finite())?.max(0.0);
        Some(Self {
            pm25,
            pm10: pm10.filter(|p| p.is_finite()).map(|p| p.max(0.0)),
            us_aqi: us_aqi.filter(|a| a.is_finite()).map(|a| a.max(0.0)),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_reading_makes_weather_absent() {
        let weather = WeatherObservation::from_readings(Some(12.0), None, Some(10.0), Some(4.0), Some(false));
        assert!(weather.is_none());
    }

    #[test]
    fn test_non_finite_reading_makes_weather_absent() {
        let weather = WeatherObservation::from_readings(
            Some(12.0),
            Some(40.0),
            Some(f64::NAN),
            Some(4.0),
            Some(false),
        );
        assert!(weather.is_none());
    }

    #[test]
    fn test_out_of_range_readings_are_clamped() {
        let weather = WeatherObservation::from_readings(
            Some(-3.5),
            Some(104.0),
            Some(-2.0),
            Some(-1.0),
            Some(true),
        )
        .unwrap();
        assert_eq!(weather.temperature_c, -3.5);
        assert_eq!(weather.humidity_pct, 100.0);
        assert_eq!(weather.cloud_cover_pct, 0.0);
        assert_eq!(weather.wind_speed_kmh, 0.0);
        assert!(weather.is_day);
    }

    #[test]
    fn test_air_quality_requires_pm25() {
        assert!(AirQualityObservation::from_readings(None, Some(20.0), Some(40.0)).is_none());

        let air = AirQualityObservation::from_readings(Some(-4.0), Some(f64::NAN), Some(51.0)).unwrap();
        assert_eq!(air.pm25, 0.0);
        assert_eq!(air.pm10, None);
        assert_eq!(air.us_aqi, Some(51.0));
    }

    #[test]
    fn test_air_quality_optional_fields_default_when_deserializing() {
        let air: AirQualityObservation = serde_json::from_str(r#"{"pm25": 12.5}"#).unwrap();
        assert_eq!(air, AirQualityObservation::with_pm25(12.5));
    }
}
