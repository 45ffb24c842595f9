// ABOUTME: External API client modules (Open-Meteo forecast, air quality, geocoding)
// ABOUTME: Exposes the ObservationSource trait the gateway pipeline consumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

//! External API Clients

pub mod open_meteo_client;

pub use open_meteo_client::{
    GeocodedPlace, MockObservationSource, MockResponse, ObservationSource, OpenMeteoClient,
    OpenMeteoConfig,
};
