// ABOUTME: HTTP middleware configuration for the AstroSeeing API
// ABOUTME: CORS setup for browser clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

/// CORS configuration
pub mod cors;

pub use cors::setup_cors;
