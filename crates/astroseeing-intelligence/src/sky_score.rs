// ABOUTME: Composite 0-100 sky quality score with an itemized penalty breakdown
// ABOUTME: Penalties are summed unclamped and the total is clamped once at the end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

//! Sky score engine
//!
//! The score starts at [`PERFECT_SCORE`] and loses points for wind, clouds,
//! smoke and humidity, always evaluated in that order. A factor only costs
//! points once its reading exceeds the free threshold; the cost is the floor
//! of a linear formula. Raw totals may run negative; only the final score is
//! clamped into 0-100, so several bad factors compound.

use crate::observing_constants::sky_score::{
    CLOUD_FREE_PCT, CLOUD_POINTS_PER_PCT, HUMIDITY_FREE_PCT, HUMIDITY_POINTS_PER_PCT,
    PERFECT_SCORE, SMOKE_FREE_PM25, SMOKE_POINTS_PER_PM25, WIND_FREE_KMH, WIND_POINTS_PER_KMH,
};
use crate::observing_constants::verdicts;
use astroseeing_core::models::{AirQualityObservation, WeatherObservation};
use serde::Serialize;
use std::fmt;

/// Observation that can cost points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyFactor {
    /// Wind speed
    Wind,
    /// Cloud cover
    Clouds,
    /// PM2.5 smoke or dust
    Smoke,
    /// Relative humidity
    Humidity,
}

impl PenaltyFactor {
    /// Name shown in the score breakdown
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Wind => "Wind",
            Self::Clouds => "Clouds",
            Self::Smoke => "Smoke",
            Self::Humidity => "Humidity",
        }
    }
}

/// One active negative factor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PenaltyItem {
    /// Which observation triggered the penalty
    pub factor: PenaltyFactor,
    /// Display name
    pub name: &'static str,
    /// Points subtracted from the score
    pub points_lost: u32,
}

/// Verdict for a clamped score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SkyVerdict {
    /// Score 90-100
    #[serde(rename = "Legendary Sky")]
    Legendary,
    /// Score 75-89
    Excellent,
    /// Score 60-74
    Good,
    /// Score 40-59
    Fair,
    /// Score 20-39
    Poor,
    /// Score 0-19
    Unusable,
    /// Observations not available yet
    #[serde(rename = "Calculating…")]
    Pending,
}

impl SkyVerdict {
    /// Verdict for a clamped score
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            s if s >= verdicts::LEGENDARY_MIN => Self::Legendary,
            s if s >= verdicts::EXCELLENT_MIN => Self::Excellent,
            s if s >= verdicts::GOOD_MIN => Self::Good,
            s if s >= verdicts::FAIR_MIN => Self::Fair,
            s if s >= verdicts::POOR_MIN => Self::Poor,
            _ => Self::Unusable,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Legendary => "Legendary Sky",
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Unusable => "Unusable",
            Self::Pending => "Calculating…",
        }
    }
}

impl fmt::Display for SkyVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score, verdict and breakdown for one observation pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkyScoreResult {
    /// Clamped score, 0-100
    pub score: u8,
    /// Verdict for `score`
    pub verdict: SkyVerdict,
    /// Active penalties in evaluation order
    pub penalties: Vec<PenaltyItem>,
}

impl SkyScoreResult {
    /// Sentinel returned while either observation is missing
    #[must_use]
    pub const fn pending() -> Self {
        Self {
            score: 0,
            verdict: SkyVerdict::Pending,
            penalties: Vec::new(),
        }
    }

    /// Whether this is the pending sentinel
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.verdict, SkyVerdict::Pending)
    }

    /// Sum of all recorded penalties, before clamping
    #[must_use]
    pub fn total_points_lost(&self) -> u64 {
        self.penalties.iter().map(|p| u64::from(p.points_lost)).sum()
    }
}

struct PenaltyRule {
    factor: PenaltyFactor,
    free_threshold: f64,
    offset: f64,
    points_per_unit: f64,
}

impl PenaltyRule {
    /// Points lost for `reading`, or `None` when the guard does not fire
    fn evaluate(&self, reading: f64) -> Option<PenaltyItem> {
        // NaN never exceeds the free level
        if reading.is_nan() || reading <= self.free_threshold {
            return None;
        }
        let raw = ((reading - self.offset) * self.points_per_unit).floor();
        Some(PenaltyItem {
            factor: self.factor,
            name: self.factor.display_name(),
            // saturates for absurd readings
            points_lost: raw.clamp(0.0, f64::from(u32::MAX)) as u32,
        })
    }
}

// Smoke is charged from zero once its free level is crossed, hence offset 0
const RULES: [PenaltyRule; 4] = [
    PenaltyRule {
        factor: PenaltyFactor::Wind,
        free_threshold: WIND_FREE_KMH,
        offset: WIND_FREE_KMH,
        points_per_unit: WIND_POINTS_PER_KMH,
    },
    PenaltyRule {
        factor: PenaltyFactor::Clouds,
        free_threshold: CLOUD_FREE_PCT,
        offset: CLOUD_FREE_PCT,
        points_per_unit: CLOUD_POINTS_PER_PCT,
    },
    PenaltyRule {
        factor: PenaltyFactor::Smoke,
        free_threshold: SMOKE_FREE_PM25,
        offset: 0.0,
        points_per_unit: SMOKE_POINTS_PER_PM25,
    },
    PenaltyRule {
        factor: PenaltyFactor::Humidity,
        free_threshold: HUMIDITY_FREE_PCT,
        offset: HUMIDITY_FREE_PCT,
        points_per_unit: HUMIDITY_POINTS_PER_PCT,
    },
];

const fn reading_for(factor: PenaltyFactor, weather: &WeatherObservation, air: &AirQualityObservation) -> f64 {
    match factor {
        PenaltyFactor::Wind => weather.wind_speed_kmh,
        PenaltyFactor::Clouds => weather.cloud_cover_pct,
        PenaltyFactor::Smoke => air.pm25,
        PenaltyFactor::Humidity => weather.humidity_pct,
    }
}

/// Score an observation pair
///
/// Returns [`SkyScoreResult::pending`] when either half is absent.
#[must_use]
pub fn score_sky(
    weather: Option<&WeatherObservation>,
    air: Option<&AirQualityObservation>,
) -> SkyScoreResult {
    let (Some(weather), Some(air)) = (weather, air) else {
        return SkyScoreResult::pending();
    };
    score_observations(weather, air)
}

/// Score a complete observation pair
#[must_use]
pub fn score_observations(weather: &WeatherObservation, air: &AirQualityObservation) -> SkyScoreResult {
    let penalties: Vec<PenaltyItem> = RULES
        .iter()
        .filter_map(|rule| rule.evaluate(reading_for(rule.factor, weather, air)))
        .collect();

    let raw = penalties
        .iter()
        .fold(PERFECT_SCORE, |score, p| score - i64::from(p.points_lost));
    let score = raw.clamp(0, PERFECT_SCORE) as u8;

    SkyScoreResult {
        score,
        verdict: SkyVerdict::from_score(score),
        penalties,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn weather(wind: f64, clouds: f64, humidity: f64) -> WeatherObservation {
        WeatherObservation {
            temperature_c: 8.0,
            humidity_pct: humidity,
            cloud_cover_pct: clouds,
            wind_speed_kmh: wind,
            is_day: false,
        }
    }

    fn points(result: &SkyScoreResult) -> Vec<(PenaltyFactor, u32)> {
        result.penalties.iter().map(|p| (p.factor, p.points_lost)).collect()
    }

    #[test]
    fn test_clear_calm_night_is_legendary() {
        let result = score_sky(
            Some(&weather(0.0, 0.0, 50.0)),
            Some(&AirQualityObservation::with_pm25(0.0)),
        );
        assert_eq!(result.score, 100);
        assert_eq!(result.verdict, SkyVerdict::Legendary);
        assert!(result.penalties.is_empty());
    }

    #[test]
    fn test_nan_reading_records_no_penalty() {
        let result = score_sky(
            Some(&weather(f64::NAN, 0.0, 50.0)),
            Some(&AirQualityObservation::with_pm25(f64::NAN)),
        );
        assert_eq!(result.score, 100);
        assert!(result.penalties.is_empty());
    }

    #[test]
    fn test_penalties_compound_before_clamping() {
        let result = score_sky(
            Some(&weather(25.0, 60.0, 90.0)),
            Some(&AirQualityObservation::with_pm25(30.0)),
        );
        assert_eq!(
            points(&result),
            vec![
                (PenaltyFactor::Wind, 30),
                (PenaltyFactor::Clouds, 90),
                (PenaltyFactor::Smoke, 120),
                (PenaltyFactor::Humidity, 5),
            ]
        );
        assert_eq!(result.total_points_lost(), 245);
        assert_eq!(result.score, 0);
        assert_eq!(result.verdict, SkyVerdict::Unusable);
    }

    #[test]
    fn test_missing_half_is_pending() {
        let w = weather(0.0, 0.0, 50.0);
        let air = AirQualityObservation::with_pm25(0.0);
        for result in [
            score_sky(Some(&w), None),
            score_sky(None, Some(&air)),
            score_sky(None, None),
        ] {
            assert!(result.is_pending());
            assert_eq!(result.score, 0);
            assert!(result.penalties.is_empty());
            assert_eq!(result.verdict.to_string(), "Calculating…");
        }
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        let result = score_sky(
            Some(&weather(5.0, 0.0, 85.0)),
            Some(&AirQualityObservation::with_pm25(5.0)),
        );
        assert!(result.penalties.is_empty());
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_smoke_charged_from_zero() {
        let result = score_sky(
            Some(&weather(0.0, 0.0, 50.0)),
            Some(&AirQualityObservation::with_pm25(5.1)),
        );
        // floor(5.1 * 4) = 20
        assert_eq!(points(&result), vec![(PenaltyFactor::Smoke, 20)]);
        assert_eq!(result.score, 80);
        assert_eq!(result.verdict, SkyVerdict::Excellent);
    }

    #[test]
    fn test_zero_point_penalty_is_recorded() {
        let result = score_sky(
            Some(&weather(5.4, 0.0, 50.0)),
            Some(&AirQualityObservation::with_pm25(0.0)),
        );
        assert_eq!(points(&result), vec![(PenaltyFactor::Wind, 0)]);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_verdict_boundaries() {
        let cases = [
            (100, SkyVerdict::Legendary),
            (90, SkyVerdict::Legendary),
            (89, SkyVerdict::Excellent),
            (75, SkyVerdict::Excellent),
            (74, SkyVerdict::Good),
            (60, SkyVerdict::Good),
            (59, SkyVerdict::Fair),
            (40, SkyVerdict::Fair),
            (39, SkyVerdict::Poor),
            (20, SkyVerdict::Poor),
            (19, SkyVerdict::Unusable),
            (0, SkyVerdict::Unusable),
        ];
        for (score, verdict) in cases {
            assert_eq!(SkyVerdict::from_score(score), verdict, "score {score}");
        }
    }

    #[test]
    fn test_result_serialization() {
        let result = score_sky(
            Some(&weather(10.0, 10.0, 50.0)),
            Some(&AirQualityObservation::with_pm25(0.0)),
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["score"], 78);
        assert_eq!(json["verdict"], "Excellent");
        assert_eq!(json["penalties"][0]["name"], "Wind");
        assert_eq!(json["penalties"][0]["points_lost"], 7);
        assert_eq!(json["penalties"][1]["factor"], "clouds");
    }

    proptest! {
        #[test]
        fn score_stays_in_range(
            wind in 0.0f64..500.0,
            clouds in 0.0f64..=100.0,
            humidity in 0.0f64..=100.0,
            pm25 in 0.0f64..2000.0,
        ) {
            let result = score_sky(
                Some(&weather(wind, clouds, humidity)),
                Some(&AirQualityObservation::with_pm25(pm25)),
            );
            prop_assert!(result.score <= 100);
            prop_assert_eq!(result.verdict, SkyVerdict::from_score(result.score));
            let expected = (100 - i64::try_from(result.total_points_lost()).unwrap()).clamp(0, 100);
            prop_assert_eq!(i64::from(result.score), expected);
        }

        #[test]
        fn scoring_is_idempotent(wind in 0.0f64..80.0, pm25 in 0.0f64..60.0) {
            let w = weather(wind, 20.0, 90.0);
            let air = AirQualityObservation::with_pm25(pm25);
            prop_assert_eq!(score_sky(Some(&w), Some(&air)), score_sky(Some(&w), Some(&air)));
        }
    }
}
