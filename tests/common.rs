// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and canonical biometric profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fitai`

use fitai::models::{BiometricInput, FitnessGoal, Gender};
use std::env;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 205 lb, 6'0", 28-year-old male building muscle, 5 days/week
pub fn lean_bulk_male() -> BiometricInput {
    BiometricInput::new(205.0, 72, 28, true, "build_muscle", 5)
}

/// 180 lb, 5'10", 35-year-old male losing weight, 4 days/week
pub fn weight_loss_male() -> BiometricInput {
    BiometricInput::new(180.0, 70, 35, true, "lose_weight", 4)
}

/// 140 lb, 5'5", 30-year-old female maintaining, 3 days/week
pub fn maintenance_female() -> BiometricInput {
    BiometricInput::new(140.0, 65, 30, false, "maintain", 3)
}

/// Realistic adult profiles across every goal, gender and training band
pub fn realistic_profiles() -> Vec<BiometricInput> {
    let weights = [100.0, 130.0, 160.0, 190.0, 220.0, 260.0, 300.0, 350.0];
    let heights = [58, 62, 66, 70, 74, 78];
    let ages = [18, 25, 35, 50, 65, 80];
    let genders = [Gender::Male, Gender::Female];
    let goals = FitnessGoal::ALL
        .into_iter()
        .map(Some)
        .chain([None])
        .collect::<Vec<_>>();

    let mut profiles = Vec::new();
    for &weight_lbs in &weights {
        for &height_inches in &heights {
            for &age in &ages {
                for &gender in &genders {
                    for &goal in &goals {
                        for training_days_per_week in 0..=7 {
                            profiles.push(BiometricInput {
                                weight_lbs,
                                height_inches,
                                age,
                                gender,
                                goal,
                                training_days_per_week,
                            });
                        }
                    }
                }
            }
        }
    }
    profiles
}
