// ABOUTME: Core types and constants for the AstroSeeing observing assistant
// ABOUTME: Foundation crate with error handling, observation models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

#![deny(unsafe_code)]

//! # AstroSeeing Core
//!
//! Foundation crate providing shared types and constants for the AstroSeeing
//! observing assistant. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and gateway errors
//! - **constants**: Service-wide constants organized by domain
//! - **models**: Validated input values and immutable observation snapshots

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration defaults organized by domain
pub mod constants;

/// Core data models (seeing value, aperture, observations, locations)
pub mod models;
