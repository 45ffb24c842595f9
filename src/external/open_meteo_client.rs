// ABOUTME: Open-Meteo client for current weather, air quality, and place-name geocoding
// ABOUTME: Decodes upstream JSON into validated observation models, plus a mock source for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

//! Open-Meteo API Client
//!
//! Open-Meteo is free and needs no API key. Three endpoints are used:
//! - forecast `current` conditions (temperature, humidity, cloud, wind, day flag)
//! - air-quality `current` particulates (PM2.5, PM10, US AQI)
//! - geocoding search for a free-text place name
//!
//! Upstream payloads are decoded into loosely-typed response structs first,
//! then validated into [`WeatherObservation`] / [`AirQualityObservation`].
//! A payload missing a required reading yields `Ok(None)` rather than an
//! error, so the scoring engine sees that half as pending.
//!
//! # API Reference
//! <https://open-meteo.com/en/docs>

use crate::logging::AppLogger;
use crate::utils::http_client::create_client_with_timeout;
use astroseeing_core::constants::open_meteo::{
    AIR_QUALITY_BASE_URL, AIR_QUALITY_CURRENT_FIELDS, DEFAULT_LANGUAGE, FORECAST_BASE_URL,
    FORECAST_CURRENT_FIELDS, GEOCODING_BASE_URL,
};
use astroseeing_core::constants::timeouts::{GATEWAY_CONNECT_TIMEOUT_SECS, GATEWAY_TIMEOUT_SECS};
use astroseeing_core::errors::GatewayError;
use astroseeing_core::models::{AirQualityObservation, Coordinates, WeatherObservation};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::debug;

const FORECAST_SERVICE: &str = "open-meteo forecast";
const AIR_QUALITY_SERVICE: &str = "open-meteo air-quality";
const GEOCODING_SERVICE: &str = "open-meteo geocoding";

/// Open-Meteo client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenMeteoConfig {
    /// Forecast API base URL
    pub forecast_base_url: String,
    /// Air-quality API base URL
    pub air_quality_base_url: String,
    /// Geocoding API base URL
    pub geocoding_base_url: String,
    /// Language for geocoding results
    pub language: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            forecast_base_url: FORECAST_BASE_URL.to_owned(),
            air_quality_base_url: AIR_QUALITY_BASE_URL.to_owned(),
            geocoding_base_url: GEOCODING_BASE_URL.to_owned(),
            language: DEFAULT_LANGUAGE.to_owned(),
            timeout_secs: GATEWAY_TIMEOUT_SECS,
            connect_timeout_secs: GATEWAY_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// A place-name search hit
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    /// Display label, "name, country"
    pub label: String,
    /// Coordinates of the place
    pub coordinates: Coordinates,
}

/// Provider of raw observations for a location
///
/// Every method distinguishes "the service answered but had nothing usable"
/// (`Ok(None)`) from "the service could not be used" (`Err`).
#[async_trait]
pub trait ObservationSource: Send + Sync {
    /// Resolve a free-text place name to its best match
    async fn geocode(&self, query: &str) -> Result<Option<GeocodedPlace>, GatewayError>;

    /// Current weather at `coordinates`
    async fn current_weather(
        &self,
        coordinates: Coordinates,
    ) -> Result<Option<WeatherObservation>, GatewayError>;

    /// Current air quality at `coordinates`
    async fn current_air_quality(
        &self,
        coordinates: Coordinates,
    ) -> Result<Option<AirQualityObservation>, GatewayError>;
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<ForecastCurrent>,
}

#[derive(Debug, Deserialize)]
struct ForecastCurrent {
    temperature_2m: Option<f64>,
    relative_humidity_2m: Option<f64>,
    cloud_cover: Option<f64>,
    wind_speed_10m: Option<f64>,
    is_day: Option<u8>,
}

impl ForecastResponse {
    fn into_observation(self) -> Option<WeatherObservation> {
        let current = self.current?;
        WeatherObservation::from_readings(
            current.temperature_2m,
            current.relative_humidity_2m,
            current.cloud_cover,
            current.wind_speed_10m,
            current.is_day.map(|flag| flag != 0),
        )
    }
}

#[derive(Debug, Deserialize)]
struct AirQualityResponse {
    current: Option<AirQualityCurrent>,
}

#[derive(Debug, Deserialize)]
struct AirQualityCurrent {
    pm2_5: Option<f64>,
    pm10: Option<f64>,
    us_aqi: Option<f64>,
}

impl AirQualityResponse {
    fn into_observation(self) -> Option<AirQualityObservation> {
        let current = self.current?;
        AirQualityObservation::from_readings(current.pm2_5, current.pm10, current.us_aqi)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Vec<GeocodingResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
}

impl GeocodingResponse {
    fn into_place(self) -> Option<GeocodedPlace> {
        let first = self.results.into_iter().next()?;
        let coordinates = Coordinates::new(first.latitude, first.longitude).ok()?;
        let label = match first.country.as_deref().map(str::trim) {
            Some(country) if !country.is_empty() => format!("{}, {country}", first.name),
            _ => first.name,
        };
        Some(GeocodedPlace { label, coordinates })
    }
}

/// Open-Meteo HTTP client
pub struct OpenMeteoClient {
    config: OpenMeteoConfig,
    http_client: reqwest::Client,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client
    #[must_use]
    pub fn new(config: OpenMeteoConfig) -> Self {
        let http_client =
            create_client_with_timeout(config.timeout_secs, config.connect_timeout_secs);
        Self {
            config,
            http_client,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        service: &'static str,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, GatewayError> {
        debug!(upstream.service = service, url, "Calling upstream");
        let started = Instant::now();

        let result = self.send(service, url, query).await;
        let elapsed = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        AppLogger::log_upstream_call(service, result.is_ok(), elapsed);
        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        service: &'static str,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, GatewayError> {
        let response = self.http_client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::UpstreamStatus {
                service,
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| GatewayError::InvalidPayload {
            service,
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl ObservationSource for OpenMeteoClient {
    async fn geocode(&self, query: &str) -> Result<Option<GeocodedPlace>, GatewayError> {
        let url = format!("{}/v1/search", self.config.geocoding_base_url);
        let response: GeocodingResponse = self
            .get_json(
                GEOCODING_SERVICE,
                &url,
                &[
                    ("name", query),
                    ("count", "1"),
                    ("language", self.config.language.as_str()),
                    ("format", "json"),
                ],
            )
            .await?;
        Ok(response.into_place())
    }

    async fn current_weather(
        &self,
        coordinates: Coordinates,
    ) -> Result<Option<WeatherObservation>, GatewayError> {
        let url = format!("{}/v1/forecast", self.config.forecast_base_url);
        let (latitude, longitude) = coordinate_params(coordinates);
        let response: ForecastResponse = self
            .get_json(
                FORECAST_SERVICE,
                &url,
                &[
                    ("latitude", latitude.as_str()),
                    ("longitude", longitude.as_str()),
                    ("current", FORECAST_CURRENT_FIELDS),
                    ("timezone", "auto"),
                ],
            )
            .await?;
        Ok(response.into_observation())
    }

    async fn current_air_quality(
        &self,
        coordinates: Coordinates,
    ) -> Result<Option<AirQualityObservation>, GatewayError> {
        let url = format!("{}/v1/air-quality", self.config.air_quality_base_url);
        let (latitude, longitude) = coordinate_params(coordinates);
        let response: AirQualityResponse = self
            .get_json(
                AIR_QUALITY_SERVICE,
                &url,
                &[
                    ("latitude", latitude.as_str()),
                    ("longitude", longitude.as_str()),
                    ("current", AIR_QUALITY_CURRENT_FIELDS),
                ],
            )
            .await?;
        Ok(response.into_observation())
    }
}

fn coordinate_params(coordinates: Coordinates) -> (String, String) {
    (
        coordinates.latitude.to_string(),
        coordinates.longitude.to_string(),
    )
}

/// Behaviour of one [`MockObservationSource`] endpoint
#[derive(Debug, Clone)]
pub enum MockResponse<T> {
    /// Answer with this value
    Answer(Option<T>),
    /// Fail as if the service were unreachable
    Unreachable,
}

impl<T: Clone> MockResponse<T> {
    fn resolve(&self, service: &'static str) -> Result<Option<T>, GatewayError> {
        match self {
            Self::Answer(value) => Ok(value.clone()),
            Self::Unreachable => Err(GatewayError::Unreachable {
                service,
                reason: "mock endpoint configured to fail".to_owned(),
            }),
        }
    }
}

/// In-memory observation source for tests (no network calls)
pub struct MockObservationSource {
    places: HashMap<String, GeocodedPlace>,
    geocoding_unreachable: bool,
    weather: MockResponse<WeatherObservation>,
    air_quality: MockResponse<AirQualityObservation>,
    calls: AtomicUsize,
}

impl MockObservationSource {
    /// Mock with one known place (Berlin) and a clear, calm night everywhere
    #[must_use]
    pub fn new() -> Self {
        let mut places = HashMap::new();
        if let Ok(coordinates) = Coordinates::new(52.52, 13.41) {
            places.insert(
                "berlin".to_owned(),
                GeocodedPlace {
                    label: "Berlin, Germany".to_owned(),
                    coordinates,
                },
            );
        }

        Self {
            places,
            geocoding_unreachable: false,
            weather: MockResponse::Answer(Some(WeatherObservation {
                temperature_c: 9.0,
                humidity_pct: 45.0,
                cloud_cover_pct: 0.0,
                wind_speed_kmh: 3.0,
                is_day: false,
            })),
            air_quality: MockResponse::Answer(Some(AirQualityObservation {
                pm25: 2.0,
                pm10: Some(4.0),
                us_aqi: Some(8.0),
            })),
            calls: AtomicUsize::new(0),
        }
    }

    /// Register another searchable place
    #[must_use]
    pub fn with_place(mut self, query: &str, place: GeocodedPlace) -> Self {
        self.places.insert(query.to_lowercase(), place);
        self
    }

    /// Make geocoding fail as unreachable
    #[must_use]
    pub fn with_geocoding_unreachable(mut self) -> Self {
        self.geocoding_unreachable = true;
        self
    }

    /// Replace the weather endpoint behaviour
    #[must_use]
    pub fn with_weather(mut self, weather: MockResponse<WeatherObservation>) -> Self {
        self.weather = weather;
        self
    }

    /// Replace the air-quality endpoint behaviour
    #[must_use]
    pub fn with_air_quality(mut self, air_quality: MockResponse<AirQualityObservation>) -> Self {
        self.air_quality = air_quality;
        self
    }

    /// Number of upstream calls served so far
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for MockObservationSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObservationSource for MockObservationSource {
    async fn geocode(&self, query: &str) -> Result<Option<GeocodedPlace>, GatewayError> {
        self.record_call();
        if self.geocoding_unreachable {
            return Err(GatewayError::Unreachable {
                service: GEOCODING_SERVICE,
                reason: "mock endpoint configured to fail".to_owned(),
            });
        }
        Ok(self.places.get(&query.trim().to_lowercase()).cloned())
    }

    async fn current_weather(
        &self,
        _coordinates: Coordinates,
    ) -> Result<Option<WeatherObservation>, GatewayError> {
        self.record_call();
        self.weather.resolve(FORECAST_SERVICE)
    }

    async fn current_air_quality(
        &self,
        _coordinates: Coordinates,
    ) -> Result<Option<AirQualityObservation>, GatewayError> {
        self.record_call();
        self.air_quality.resolve(AIR_QUALITY_SERVICE)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_payload_decoding() {
        let body = r#"{
            "latitude": -41.125,
            "longitude": -71.25,
            "current": {
                "time": "2025-03-01T22:00",
                "interval": 900,
                "temperature_2m": 11.4,
                "relative_humidity_2m": 62,
                "cloud_cover": 15,
                "wind_speed_10m": 7.9,
                "is_day": 0
            }
        }"#;
        let response: ForecastResponse = serde_json::from_str(body).unwrap();
        let weather = response.into_observation().unwrap();
        assert_eq!(weather.temperature_c, 11.4);
        assert_eq!(weather.humidity_pct, 62.0);
        assert_eq!(weather.cloud_cover_pct, 15.0);
        assert_eq!(weather.wind_speed_kmh, 7.9);
        assert!(!weather.is_day);
    }

    #[test]
    fn test_forecast_payload_with_null_reading_is_absent() {
        let body = r#"{"current": {"temperature_2m": 11.4, "relative_humidity_2m": null,
            "cloud_cover": 15, "wind_speed_10m": 7.9, "is_day": 1}}"#;
        let response: ForecastResponse = serde_json::from_str(body).unwrap();
        assert!(response.into_observation().is_none());

        let empty: ForecastResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.into_observation().is_none());
    }

    #[test]
    fn test_air_quality_payload_decoding() {
        let body = r#"{"current": {"time": "2025-03-01T22:00", "pm2_5": 31.7, "pm10": 40.2, "us_aqi": 92}}"#;
        let response: AirQualityResponse = serde_json::from_str(body).unwrap();
        let air = response.into_observation().unwrap();
        assert_eq!(air.pm25, 31.7);
        assert_eq!(air.pm10, Some(40.2));
        assert_eq!(air.us_aqi, Some(92.0));
    }

    #[test]
    fn test_geocoding_label() {
        let body = r#"{"results": [{"id": 1, "name": "Mendoza", "latitude": -32.89,
            "longitude": -68.83, "country": "Argentina"}], "generationtime_ms": 0.5}"#;
        let response: GeocodingResponse = serde_json::from_str(body).unwrap();
        let place = response.into_place().unwrap();
        assert_eq!(place.label, "Mendoza, Argentina");
        assert_eq!(place.coordinates.latitude, -32.89);
    }

    #[test]
    fn test_geocoding_without_results_is_none() {
        let response: GeocodingResponse =
            serde_json::from_str(r#"{"generationtime_ms": 0.3}"#).unwrap();
        assert!(response.into_place().is_none());

        let no_country: GeocodingResponse = serde_json::from_str(
            r#"{"results": [{"name": "Atlantis", "latitude": 1.0, "longitude": 2.0}]}"#,
        )
        .unwrap();
        assert_eq!(no_country.into_place().unwrap().label, "Atlantis");
    }

    #[test]
    fn test_default_config_targets_public_api() {
        let config = OpenMeteoConfig::default();
        assert_eq!(config.forecast_base_url, "https://api.open-meteo.com");
        assert_eq!(config.language, "en");
        assert_eq!(config.timeout_secs, 15);
    }

    #[tokio::test]
    async fn test_mock_source_counts_calls() {
        let mock = MockObservationSource::new();
        let place = mock.geocode("  BERLIN ").await.unwrap().unwrap();
        assert_eq!(place.label, "Berlin, Germany");
        assert!(mock.geocode("nowhere").await.unwrap().is_none());
        assert!(mock.current_weather(place.coordinates).await.unwrap().is_some());
        assert_eq!(mock.call_count(), 3);
    }

    #[tokio::test]
    async fn test_mock_source_failures() {
        let mock = MockObservationSource::new()
            .with_geocoding_unreachable()
            .with_air_quality(MockResponse::Unreachable);
        let coordinates = Coordinates::new(0.0, 0.0).unwrap();
        assert!(mock.geocode("berlin").await.unwrap_err().is_unreachable());
        assert!(mock.current_air_quality(coordinates).await.is_err());
    }
}
