// ABOUTME: Seeing calculator command for astroseeing-cli
// ABOUTME: Validates inputs and prints the seeing report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

use crate::helpers::display;
use crate::OutputFormat;
use anyhow::Result;
use astroseeing_core::models::{ApertureMm, SeeingValue};
use astroseeing_intelligence::SeeingReport;

/// Compute and print the seeing report
pub fn run(seeing: u8, aperture_mm: f64, format: OutputFormat) -> Result<()> {
    let report = SeeingReport::new(ApertureMm::new(aperture_mm)?, SeeingValue::new(seeing)?);
    match format {
        OutputFormat::Json => display::print_json(&report)?,
        OutputFormat::Text => display::display_seeing_report(&report),
    }
    Ok(())
}
