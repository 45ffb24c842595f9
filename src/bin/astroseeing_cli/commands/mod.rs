// ABOUTME: Re-exports command modules for astroseeing-cli
// ABOUTME: Provides the seeing calculator and sky report commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

pub mod seeing;
pub mod sky;
