// ABOUTME: Core data models shared by the engine, the gateway, and the HTTP layer
// ABOUTME: Re-exports seeing inputs, observation snapshots, and location types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

//! # Data Models
//!
//! - `SeeingValue`, `ApertureMm`: validated user inputs for the seeing calculator
//! - `WeatherObservation`, `AirQualityObservation`: immutable upstream snapshots
//! - `Coordinates`, `ResolvedLocation`, `ObservationSnapshot`: one gateway lookup

mod location;
mod observation;
mod seeing;

pub use location::{Coordinates, ObservationSnapshot, ResolvedLocation};
pub use observation::{AirQualityObservation, WeatherObservation};
pub use seeing::{ApertureMm, SeeingValue};
