// ABOUTME: AstroSeeing CLI - command-line access to the seeing calculator and sky reports
// ABOUTME: Prints human-readable summaries or the same JSON the HTTP API returns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors
//!
//! Usage:
//! ```bash
//! # Magnification ceiling and targets for a 130 mm scope on a 7/10 night
//! astroseeing-cli seeing --seeing 7 --aperture-mm 130 --format text
//!
//! # Sky report for a city, as a text summary
//! astroseeing-cli sky --city "San Pedro de Atacama" --format text
//!
//! # Sky report for explicit coordinates
//! astroseeing-cli sky --latitude -24.62 --longitude -70.40 --name Paranal
//!
//! # Sky report for the configured default location
//! astroseeing-cli sky
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use astroseeing::logging::LoggingConfig;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "astroseeing-cli",
    about = "AstroSeeing command-line client",
    long_about = "Scores the night sky for a location and computes seeing-limited magnification for a telescope."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable summary
    Text,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Seeing calculator: descriptor, magnification ceiling, targets
    Seeing {
        /// Seeing value on the 1-10 scale
        #[arg(long)]
        seeing: u8,

        /// Telescope aperture in millimetres
        #[arg(long)]
        aperture_mm: f64,
    },

    /// Sky score, alerts, and seeing forecast for a location
    Sky {
        /// Place name to geocode
        #[arg(long, conflicts_with_all = ["latitude", "longitude"])]
        city: Option<String>,

        /// Latitude in degrees
        #[arg(long, allow_hyphen_values = true, requires = "longitude")]
        latitude: Option<f64>,

        /// Longitude in degrees
        #[arg(long, allow_hyphen_values = true, requires = "latitude")]
        longitude: Option<f64>,

        /// Display name for explicit coordinates
        #[arg(long)]
        name: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;
    debug!("AstroSeeing CLI");

    match cli.command {
        Command::Seeing {
            seeing,
            aperture_mm,
        } => commands::seeing::run(seeing, aperture_mm, cli.format)?,
        Command::Sky {
            city,
            latitude,
            longitude,
            name,
        } => commands::sky::run(city, latitude, longitude, name, cli.format).await?,
    }

    Ok(())
}
