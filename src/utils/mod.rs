// ABOUTME: Utility module for shared helpers used across the service
// ABOUTME: Currently holds the outbound HTTP client factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

/// Outbound HTTP client construction
pub mod http_client;
