// ABOUTME: Deterministic seeing, sky-quality, and observing-risk engine
// ABOUTME: Pure functions over validated inputs; no I/O and no shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

#![deny(unsafe_code)]

//! # AstroSeeing Intelligence
//!
//! Every function in this crate recomputes its result from the inputs it is
//! given, so calling it twice with the same inputs yields the same output.
//!
//! - [`magnification`]: usable magnification ceiling for an aperture
//! - [`pickering`]: qualitative seeing descriptor and target suggestions
//! - [`sky_score`]: 0-100 sky quality score with itemized penalties
//! - [`alerts`]: severity-tagged risk alerts
//! - [`forecast`]: wind-based seeing forecast and stability indicator
//! - [`turbulence`]: parameters for the seeing simulation renderer
//! - [`report`]: all of the above for one observation snapshot

/// Observing alerts for severe conditions
pub mod alerts;
/// Wind-driven seeing forecast
pub mod forecast;
/// Maximum usable magnification
pub mod magnification;
/// Policy constants (thresholds and coefficients)
pub mod observing_constants;
/// Pickering-style seeing classification and targets
pub mod pickering;
/// Aggregated report for one location snapshot
pub mod report;
/// Composite sky quality score
pub mod sky_score;
/// Seeing simulation parameters
pub mod turbulence;

pub use alerts::{generate_alerts, Alert, AlertKind, AlertSeverity};
pub use forecast::{assess_stability, forecast_seeing, AtmosphericStability, ForecastRating, SeeingForecast};
pub use magnification::max_magnification;
pub use pickering::{describe_seeing, recommend_targets, ObservingTarget, SeeingDescriptor, TargetIcon};
pub use report::{ObservingReport, SeeingReport, SkyAssessment};
pub use sky_score::{score_sky, PenaltyFactor, PenaltyItem, SkyScoreResult, SkyVerdict};
pub use turbulence::{turbulence_profile, TurbulenceProfile};
