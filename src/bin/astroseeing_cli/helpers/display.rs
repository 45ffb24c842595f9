// ABOUTME: Output formatting helpers for astroseeing-cli
// ABOUTME: Renders seeing and observing reports as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

use anyhow::Result;
use astroseeing_intelligence::{ObservingReport, SeeingReport};
use serde::Serialize;

/// Print any report as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display the seeing calculator result
pub fn display_seeing_report(report: &SeeingReport) {
    println!("\nSeeing {}/10: {}", report.seeing.get(), report.descriptor);
    println!("{}", "=".repeat(50));
    println!("   Aperture:          {} mm", report.aperture_mm.millimetres());
    println!("   Max magnification: {}x", report.max_magnification);
    println!("\nRecommended targets:");
    for target in &report.targets {
        println!("   - {}: {}", target.title, target.description);
    }
    println!(
        "\nTurbulence: amplitude {:.1}, blur {:.1}px, {} layers",
        report.turbulence.amplitude, report.turbulence.blur_px, report.turbulence.layer_count
    );
}

/// Display the observing report for a location
pub fn display_observing_report(report: &ObservingReport) {
    let assessment = &report.assessment;
    println!("\n{}", report.location.name);
    println!("{}", "=".repeat(50));

    if assessment.sky_score.is_pending() {
        println!("Sky score: {}", assessment.sky_score.verdict);
    } else {
        println!(
            "Sky score: {}/100 ({})",
            assessment.sky_score.score, assessment.sky_score.verdict
        );
    }
    for penalty in &assessment.sky_score.penalties {
        println!("   -{:>3}  {}", penalty.points_lost, penalty.name);
    }

    if let Some(weather) = &report.weather {
        println!(
            "\nWeather: {:.1} °C, humidity {:.0}%, clouds {:.0}%, wind {:.1} km/h{}",
            weather.temperature_c,
            weather.humidity_pct,
            weather.cloud_cover_pct,
            weather.wind_speed_kmh,
            if weather.is_day { " (daytime)" } else { "" }
        );
    } else {
        println!("\nWeather: unavailable");
    }
    match &report.air_quality {
        Some(air) => println!("Air quality: PM2.5 {:.1} μg/m³", air.pm25),
        None => println!("Air quality: unavailable"),
    }

    println!(
        "\nSeeing forecast: {} ({})",
        assessment.forecast.status, assessment.forecast.description
    );
    if let Some(stability) = &assessment.stability {
        println!("Stability: {}", stability.summary);
    }

    if !assessment.alerts.is_empty() {
        println!("\nAlerts:");
        for alert in &assessment.alerts {
            println!("   [{:?}] {}: {}", alert.severity, alert.title, alert.description);
        }
    }
}
