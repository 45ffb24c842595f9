// ABOUTME: Policy constants for seeing tiers, sky-score penalties, and risk alerts
// ABOUTME: Every coefficient here is a fixed domain rule pinned by the test-suite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

//! Observing policy constants
//!
//! Thresholds are compared against raw observations. A factor whose value is
//! at or below its threshold contributes nothing.

/// Magnification multipliers by seeing tier (applied to aperture in mm)
pub mod magnification {
    /// Highest seeing value of the poor tier
    pub const POOR_TIER_MAX: u8 = 3;
    /// Highest seeing value of the average tier
    pub const AVERAGE_TIER_MAX: u8 = 6;
    /// Highest seeing value of the good tier
    pub const GOOD_TIER_MAX: u8 = 8;

    /// Multiplier for seeing 1-3
    pub const POOR_MULTIPLIER: f64 = 0.8;
    /// Multiplier for seeing 4-6
    pub const AVERAGE_MULTIPLIER: f64 = 1.2;
    /// Multiplier for seeing 7-8
    pub const GOOD_MULTIPLIER: f64 = 1.6;
    /// Multiplier for seeing 9-10
    pub const EXCELLENT_MULTIPLIER: f64 = 2.0;
}

/// Pickering-style descriptor thresholds (minimum seeing for each tier)
pub mod pickering {
    /// Minimum seeing for "Perfect"
    pub const PERFECT_MIN: u8 = 9;
    /// Minimum seeing for "Very Good"
    pub const VERY_GOOD_MIN: u8 = 7;
    /// Minimum seeing for "Fair"
    pub const FAIR_MIN: u8 = 5;
    /// Minimum seeing for "Poor"
    pub const POOR_MIN: u8 = 3;
}

/// Target recommendation tiers (minimum seeing for each tier)
pub mod targets {
    /// Minimum seeing for planetary and double-star work
    pub const PLANETARY_MIN: u8 = 7;
    /// Minimum seeing for clusters and the Moon
    pub const CLUSTERS_MIN: u8 = 4;
}

/// Sky score penalties
pub mod sky_score {
    /// Score before any penalty
    pub const PERFECT_SCORE: i64 = 100;

    /// Wind speed that costs nothing (km/h)
    pub const WIND_FREE_KMH: f64 = 5.0;
    /// Points lost per km/h above the free wind speed
    pub const WIND_POINTS_PER_KMH: f64 = 1.5;

    /// Cloud cover that costs nothing (%)
    pub const CLOUD_FREE_PCT: f64 = 0.0;
    /// Points lost per percent of cloud cover
    pub const CLOUD_POINTS_PER_PCT: f64 = 1.5;

    /// PM2.5 level that costs nothing (μg/m³)
    pub const SMOKE_FREE_PM25: f64 = 5.0;
    /// Points lost per μg/m³ of PM2.5, counted from zero once the free level is exceeded
    pub const SMOKE_POINTS_PER_PM25: f64 = 4.0;

    /// Relative humidity that costs nothing (%)
    pub const HUMIDITY_FREE_PCT: f64 = 85.0;
    /// Points lost per percent of humidity above the free level
    pub const HUMIDITY_POINTS_PER_PCT: f64 = 1.0;
}

/// Minimum clamped score for each verdict
pub mod verdicts {
    /// "Legendary Sky"
    pub const LEGENDARY_MIN: u8 = 90;
    /// "Excellent"
    pub const EXCELLENT_MIN: u8 = 75;
    /// "Good"
    pub const GOOD_MIN: u8 = 60;
    /// "Fair"
    pub const FAIR_MIN: u8 = 40;
    /// "Poor"
    pub const POOR_MIN: u8 = 20;
}

/// Risk alert thresholds
pub mod alerts {
    /// PM2.5 above which the danger smoke alert fires (μg/m³)
    pub const DENSE_SMOKE_PM25: f64 = 25.0;
    /// PM2.5 above which the transparency warning fires (μg/m³)
    pub const REDUCED_TRANSPARENCY_PM25: f64 = 10.0;
    /// Wind speed above which the strong wind alert fires (km/h)
    pub const STRONG_WIND_KMH: f64 = 30.0;
    /// Cloud cover above which the cloud alert fires (%)
    pub const HIGH_CLOUD_PCT: f64 = 50.0;
}

/// Wind-based seeing forecast bands (upper bound, exclusive, km/h)
pub mod forecast {
    /// Below this wind speed the forecast is "Excellent"
    pub const EXCELLENT_BELOW_KMH: f64 = 10.0;
    /// Below this wind speed the forecast is "Good"
    pub const GOOD_BELOW_KMH: f64 = 20.0;
    /// Below this wind speed the forecast is "Fair"
    pub const FAIR_BELOW_KMH: f64 = 35.0;

    /// Wind speed above which the air is considered turbulent (km/h)
    pub const TURBULENT_ABOVE_KMH: f64 = 20.0;
}

/// Visual simulation parameters
pub mod turbulence {
    /// Scale offset: `amplitude = (OFFSET - seeing) * AMPLITUDE_PER_STEP`
    pub const SCALE_OFFSET: u8 = 11;
    /// Disc displacement per seeing step below perfect (px)
    pub const AMPLITUDE_PER_STEP: f64 = 1.5;
    /// Blur radius per seeing step below perfect (px)
    pub const BLUR_PER_STEP: f64 = 0.5;
    /// Seeing below which the disc is blurred
    pub const BLUR_BELOW: u8 = 7;
    /// Seeing below which the outer rings dim and jitter
    pub const HALO_DIM_BELOW: u8 = 5;
    /// Seeing below which scintillation speckles appear
    pub const SPECKLES_BELOW: u8 = 4;
    /// Speckles drawn per frame when scintillating
    pub const SPECKLE_COUNT: u8 = 10;
    /// Concentric diffraction rings drawn per frame
    pub const LAYER_COUNT: u8 = 6;
}
