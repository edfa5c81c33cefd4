// ABOUTME: File-driven commands: onboarding payloads and batches of inputs
// ABOUTME: Reads JSON from disk and prints computed targets as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI

use super::print_json;
use chrono::Utc;
use fitai::config::MacroCalculatorConfig;
use fitai::errors::{AppError, AppResult};
use fitai::intelligence::{calculate_macro_targets, calculate_macro_targets_batch};
use fitai::models::{BiometricInput, OnboardingProfile};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::info;

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("Failed to read {}", path.display())).with_source(e)
    })?;
    Ok(serde_json::from_str(&raw)?)
}

/// Timestamped targets for an onboarding payload file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or the profile
/// fails validation
pub fn onboard(path: &Path) -> AppResult<()> {
    let profile: OnboardingProfile = read_json(path)?;
    let input = profile.to_biometric_input();
    input.validate()?;

    let targets = calculate_macro_targets(&input, MacroCalculatorConfig::global());
    info!(
        goal = %profile.goal,
        calories = targets.calories,
        "Onboarding targets calculated"
    );
    print_json(&targets.into_record(Utc::now()))
}

/// Targets for a JSON array of biometric inputs, in file order
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn batch(path: &Path) -> AppResult<()> {
    let inputs: Vec<BiometricInput> = read_json(path)?;
    let targets = calculate_macro_targets_batch(&inputs, MacroCalculatorConfig::global());
    info!(count = targets.len(), "Batch targets calculated");
    print_json(&targets)
}
