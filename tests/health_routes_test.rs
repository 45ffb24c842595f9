// ABOUTME: Integration tests for the health and readiness endpoints
// ABOUTME: Exercises the fully layered router without binding a socket
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::fixtures;

#[tokio::test]
async fn test_health_reports_service_identity() {
    let response = AxumTestRequest::get("/health").send(fixtures::router()).await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "astroseeing-server");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_ready() {
    let response = AxumTestRequest::get("/ready").send(fixtures::router()).await;
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = AxumTestRequest::get("/api/nonexistent")
        .send(fixtures::router())
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let response = AxumTestRequest::get("/health")
        .header("origin", "https://stargazer.example")
        .send(fixtures::router())
        .await;
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
}

#[tokio::test]
async fn test_request_id_is_assigned_and_propagated() {
    let response = AxumTestRequest::get("/health").send(fixtures::router()).await;
    assert!(response.header("x-request-id").is_some_and(|id| !id.is_empty()));

    let response = AxumTestRequest::get("/health")
        .header("x-request-id", "night-run-42")
        .send(fixtures::router())
        .await;
    assert_eq!(response.header("x-request-id"), Some("night-run-42"));
}
