// ABOUTME: Criterion benchmarks for the sky scoring and recommendation engine
// ABOUTME: Measures score, alert, and full report evaluation over generated observation grids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

//! Criterion benchmarks for the observing engine.
//!
//! Every engine entry point is a pure function; these benchmarks keep the
//! per-request cost visible as rules are added.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use astroseeing_core::models::{
    AirQualityObservation, ApertureMm, Coordinates, ObservationSnapshot, ResolvedLocation,
    SeeingValue, WeatherObservation,
};
use astroseeing_intelligence::{generate_alerts, score_sky, ObservingReport, SeeingReport};
use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Observation pairs sweeping every penalty and alert threshold
#[allow(clippy::cast_precision_loss)]
fn generate_observations(count: usize) -> Vec<(WeatherObservation, AirQualityObservation)> {
    (0..count)
        .map(|index| {
            let weather = WeatherObservation {
                temperature_c: -5.0 + (index % 30) as f64,
                humidity_pct: ((index * 7) % 101) as f64,
                cloud_cover_pct: ((index * 13) % 101) as f64,
                wind_speed_kmh: ((index * 3) % 60) as f64,
                is_day: index % 5 == 0,
            };
            let air = AirQualityObservation::with_pm25(((index * 11) % 400) as f64 / 10.0);
            (weather, air)
        })
        .collect()
}

fn bench_score_sky(c: &mut Criterion) {
    let mut group = c.benchmark_group("sky_score");

    for count in [10_usize, 100, 1000] {
        let observations = generate_observations(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("score_sky", count),
            &observations,
            |b, observations| {
                b.iter(|| {
                    for (weather, air) in observations {
                        black_box(score_sky(Some(black_box(weather)), Some(black_box(air))));
                    }
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("generate_alerts", count),
            &observations,
            |b, observations| {
                b.iter(|| {
                    for (weather, air) in observations {
                        black_box(generate_alerts(Some(weather), Some(air)));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_observing_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("observing_report");

    let Ok(coordinates) = Coordinates::new(-41.1335, -71.3103) else {
        return;
    };
    let snapshots: Vec<ObservationSnapshot> = generate_observations(100)
        .into_iter()
        .map(|(weather, air)| ObservationSnapshot {
            location: ResolvedLocation::new(coordinates, Some("Bench".to_owned())),
            weather: Some(weather),
            air_quality: Some(air),
            fetched_at: Utc::now(),
        })
        .collect();

    group.throughput(Throughput::Elements(snapshots.len() as u64));
    group.bench_function("from_snapshot", |b| {
        b.iter(|| {
            for snapshot in &snapshots {
                black_box(ObservingReport::from_snapshot(black_box(snapshot)));
            }
        });
    });
    group.bench_function("from_snapshot_json", |b| {
        b.iter(|| {
            for snapshot in &snapshots {
                black_box(serde_json::to_vec(&ObservingReport::from_snapshot(snapshot)).ok());
            }
        });
    });

    group.finish();
}

fn bench_seeing_report(c: &mut Criterion) {
    let Ok(aperture) = ApertureMm::new(130.0) else {
        return;
    };
    c.bench_function("seeing_report_full_scale", |b| {
        b.iter(|| {
            for seeing in SeeingValue::all() {
                black_box(SeeingReport::new(black_box(aperture), seeing));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_score_sky,
    bench_observing_report,
    bench_seeing_report,
);
criterion_main!(benches);
