// ABOUTME: Two-stage observation pipeline: resolve a location, then fetch its observations
// ABOUTME: Produces a discriminated LookupOutcome instead of surfacing transport errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

//! Weather / air-quality data gateway
//!
//! A lookup first resolves a [`LocationQuery`] into a [`ResolvedLocation`]
//! (geocoding free-text city names), then fetches current weather and air
//! quality concurrently. The forecast is required: if it cannot be fetched
//! the lookup is a [`LookupOutcome::NetworkError`]. Air quality is optional:
//! a failed call only leaves that half of the snapshot absent.

use crate::external::ObservationSource;
use crate::logging::AppLogger;
use astroseeing_core::constants::limits::MAX_PLACE_QUERY_LEN;
use astroseeing_core::errors::{AppError, AppResult, GatewayError};
use astroseeing_core::models::{Coordinates, ObservationSnapshot, ResolvedLocation};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, warn};

/// What the caller wants observations for
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    /// Explicit coordinates with an optional display name
    Coordinates {
        /// Where to look
        coordinates: Coordinates,
        /// Display name; the coordinate label is used when absent
        name: Option<String>,
    },
    /// Free-text place name to geocode
    City(String),
    /// The configured default location
    Default,
}

impl LocationQuery {
    /// Validated city search
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for blank or overly long queries
    pub fn city(query: &str) -> AppResult<Self> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::invalid_input("City name cannot be empty"));
        }
        if query.chars().count() > MAX_PLACE_QUERY_LEN {
            return Err(AppError::invalid_input(format!(
                "City name must be at most {MAX_PLACE_QUERY_LEN} characters"
            )));
        }
        Ok(Self::City(query.to_owned()))
    }
}

/// Result of one gateway lookup
#[derive(Debug)]
pub enum LookupOutcome {
    /// Observations were fetched; either half may still be absent
    Success(ObservationSnapshot),
    /// The place name matched nothing
    NotFound {
        /// Query as searched
        query: String,
    },
    /// An upstream service could not be used
    NetworkError(GatewayError),
}

impl LookupOutcome {
    /// Short outcome name for logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::NotFound { .. } => "not_found",
            Self::NetworkError(_) => "network_error",
        }
    }

    /// Convert into the unified error system
    ///
    /// # Errors
    ///
    /// `NotFound` becomes `ResourceNotFound`; `NetworkError` becomes an
    /// external-service error
    pub fn into_result(self) -> AppResult<ObservationSnapshot> {
        match self {
            Self::Success(snapshot) => Ok(snapshot),
            Self::NotFound { query } => Err(AppError::not_found(format!("City '{query}'"))),
            Self::NetworkError(error) => Err(error.into()),
        }
    }
}

/// Observation gateway shared by the HTTP routes and the CLI
#[derive(Clone)]
pub struct ObservationGateway {
    source: Arc<dyn ObservationSource>,
    default_location: ResolvedLocation,
}

impl ObservationGateway {
    /// Create a gateway over an observation source
    #[must_use]
    pub fn new(source: Arc<dyn ObservationSource>, default_location: ResolvedLocation) -> Self {
        Self {
            source,
            default_location,
        }
    }

    /// Location used for [`LocationQuery::Default`]
    #[must_use]
    pub const fn default_location(&self) -> &ResolvedLocation {
        &self.default_location
    }

    /// Resolve the query and fetch its observations
    pub async fn lookup(&self, query: LocationQuery) -> LookupOutcome {
        let outcome = match self.resolve(query).await {
            Ok(Ok(location)) => self.fetch(location).await,
            Ok(Err(query)) => LookupOutcome::NotFound { query },
            Err(error) => LookupOutcome::NetworkError(error),
        };

        match &outcome {
            LookupOutcome::Success(snapshot) => {
                AppLogger::log_sky_lookup(&snapshot.location.name, outcome.kind());
            }
            LookupOutcome::NotFound { query } => {
                AppLogger::log_sky_lookup(query, outcome.kind());
            }
            LookupOutcome::NetworkError(error) => warn!(error = %error, "Sky lookup failed"),
        }
        outcome
    }

    /// Stage one: a location, or the unmatched query string
    async fn resolve(
        &self,
        query: LocationQuery,
    ) -> Result<Result<ResolvedLocation, String>, GatewayError> {
        match query {
            LocationQuery::Coordinates { coordinates, name } => {
                Ok(Ok(ResolvedLocation::new(coordinates, name)))
            }
            LocationQuery::Default => Ok(Ok(self.default_location.clone())),
            LocationQuery::City(city) => {
                debug!(city = %city, "Geocoding city");
                Ok(self
                    .source
                    .geocode(&city)
                    .await?
                    .map(|place| ResolvedLocation::new(place.coordinates, Some(place.label)))
                    .ok_or(city))
            }
        }
    }

    /// Stage two: weather and air quality fetched concurrently
    async fn fetch(&self, location: ResolvedLocation) -> LookupOutcome {
        let coordinates = location.coordinates;
        let (weather, air_quality) = tokio::join!(
            self.source.current_weather(coordinates),
            self.source.current_air_quality(coordinates),
        );

        let weather = match weather {
            Ok(weather) => weather,
            Err(error) => return LookupOutcome::NetworkError(error),
        };
        let air_quality = air_quality.unwrap_or_else(|error| {
            warn!(error = %error, location = %location.name, "Air quality unavailable");
            None
        });

        LookupOutcome::Success(ObservationSnapshot {
            location,
            weather,
            air_quality,
            fetched_at: Utc::now(),
        })
    }
}
