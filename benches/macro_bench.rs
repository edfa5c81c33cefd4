// ABOUTME: Criterion benchmarks for the macro target calculator
// ABOUTME: Measures single-profile evaluation and parallel batch throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI

//! Criterion benchmarks for the macro target calculator.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitai::config::MacroCalculatorConfig;
use fitai::intelligence::macro_calculator::{
    calculate_macro_breakdown, calculate_macro_targets, calculate_macro_targets_batch,
};
use fitai::models::{BiometricInput, FitnessGoal, Gender};

/// Generate deterministic, varied profiles
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn generate_profiles(count: usize) -> Vec<BiometricInput> {
    (0..count)
        .map(|index| BiometricInput {
            weight_lbs: 110.0 + ((index * 37) % 200) as f64,
            height_inches: 60 + ((index * 7) % 18) as u32,
            age: 18 + ((index * 11) % 60) as u32,
            gender: if index % 2 == 0 {
                Gender::Male
            } else {
                Gender::Female
            },
            goal: FitnessGoal::ALL.get(index % 6).copied(),
            training_days_per_week: (index % 8) as u8,
        })
        .collect()
}

fn bench_single_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_profile");
    let config = MacroCalculatorConfig::default();
    let input = BiometricInput::new(205.0, 72, 28, true, "build_muscle", 5);

    group.bench_function("calculate_macro_targets", |b| {
        b.iter(|| calculate_macro_targets(black_box(&input), black_box(&config)));
    });
    group.bench_function("calculate_macro_breakdown", |b| {
        b.iter(|| calculate_macro_breakdown(black_box(&input), black_box(&config)));
    });

    group.finish();
}

/// Sequential vs rayon batch evaluation
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let config = MacroCalculatorConfig::default();

    for count in [100_usize, 10_000, 100_000] {
        let profiles = generate_profiles(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(
            BenchmarkId::new("sequential", count),
            &profiles,
            |b, profiles| {
                b.iter(|| {
                    profiles
                        .iter()
                        .map(|input| calculate_macro_targets(black_box(input), &config))
                        .collect::<Vec<_>>()
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("parallel", count),
            &profiles,
            |b, profiles| {
                b.iter(|| calculate_macro_targets_batch(black_box(profiles), &config));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_profile, bench_batch);
criterion_main!(benches);
