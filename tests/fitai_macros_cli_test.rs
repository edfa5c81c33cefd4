// ABOUTME: Integration tests for the fitai-macros binary
// ABOUTME: Runs the calculate, onboard, batch and config commands end to end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI

//! Integration tests for the fitai-macros binary.
//!
//! These tests verify command structure, output formats and error exits.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use fitai::config::ENV_PREFIX;
use serde_json::Value;
use std::env;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Helper to run CLI command and capture output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    run_cli_with_env(args, &[])
}

/// Run the CLI with calculator overrides inherited from the test process
/// stripped, then `overrides` applied
fn run_cli_with_env(args: &[&str], overrides: &[(&str, &str)]) -> (i32, String, String) {
    let mut command = Command::new(env!("CARGO_BIN_EXE_fitai-macros"));
    command.args(args).env("RUST_LOG", "error");
    for (name, _) in env::vars_os() {
        if name.to_string_lossy().starts_with(ENV_PREFIX) {
            command.env_remove(name);
        }
    }
    command.envs(overrides.iter().copied());
    let output = command.output().unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

const LEAN_BULK_ARGS: [&str; 13] = [
    "calculate",
    "--weight-lbs",
    "205",
    "--height-feet",
    "6",
    "--age",
    "28",
    "--gender",
    "male",
    "--goal",
    "build_muscle",
    "--training-days",
    "5",
];

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0, "CLI help should exit with 0");
    for command in ["calculate", "onboard", "batch", "config"] {
        assert!(stdout.contains(command), "Help should mention '{command}'");
    }
}

#[test]
fn test_calculate_text_summary() {
    let (exit_code, stdout, _stderr) = run_cli(&LEAN_BULK_ARGS);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Calories: 3677 kcal"), "stdout: {stdout}");
    assert!(stdout.contains("Protein:  246.0 g"), "stdout: {stdout}");
}

#[test]
fn test_calculate_json_output() {
    let (exit_code, stdout, _stderr) = run_cli(&[
        "calculate",
        "--weight-lbs",
        "180",
        "--height-feet",
        "5",
        "--height-inches",
        "10",
        "--age",
        "35",
        "--gender",
        "male",
        "--goal",
        "lose_weight",
        "--training-days",
        "4",
        "--format",
        "json",
    ]);

    assert_eq!(exit_code, 0);
    let targets: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(targets["calories"], 2180);
    assert_eq!(targets["protein_g"].as_f64().unwrap(), 180.0);
    assert_eq!(targets["fat_g"].as_f64().unwrap(), 54.0);
    assert_eq!(targets["carbs_g"].as_f64().unwrap(), 243.4);
}

#[test]
fn test_calculate_breakdown_reports_clamp() {
    let mut args = LEAN_BULK_ARGS.to_vec();
    args.push("--breakdown");
    let (exit_code, stdout, _stderr) = run_cli(&args);

    assert_eq!(exit_code, 0);
    let breakdown: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(breakdown["carb_clamp_applied"], false);
    assert_eq!(breakdown["protein_g_per_lb"].as_f64().unwrap(), 1.2);
    assert!(breakdown["energy"]["bmr"].as_f64().unwrap() > 1900.0);
}

#[test]
fn test_calculate_strict_rejects_zero_weight() {
    let (exit_code, stdout, stderr) = run_cli(&[
        "calculate",
        "--weight-lbs",
        "0",
        "--height-feet",
        "6",
        "--age",
        "28",
        "--goal",
        "maintain",
        "--training-days",
        "3",
        "--strict",
    ]);

    assert_ne!(exit_code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("weight_lbs"), "stderr: {stderr}");
}

#[test]
fn test_calculate_without_strict_accepts_unknown_goal() {
    let (exit_code, stdout, _stderr) = run_cli(&[
        "calculate",
        "--weight-lbs",
        "150",
        "--height-feet",
        "5",
        "--height-inches",
        "8",
        "--age",
        "40",
        "--goal",
        "unknown_string",
        "--training-days",
        "0",
        "--format",
        "json",
    ]);

    assert_eq!(exit_code, 0);
    let targets: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(targets["protein_g"].as_f64().unwrap(), 120.0);
}

#[test]
fn test_onboard_prints_timestamped_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profile.json");
    fs::write(
        &path,
        r#"{
            "goal": "build_muscle",
            "experience": "intermediate",
            "training_days_per_week": 5,
            "equipment_style": "full_gym",
            "check_in_day": "sunday",
            "height_feet": 6,
            "height_inches": 0,
            "weight_pounds": 205.0,
            "age": 28,
            "gender": "male",
            "meals_per_day": 4,
            "budget_tier": "medium",
            "current_cardio": "light",
            "motivation_style": "direct"
        }"#,
    )
    .unwrap();

    let (exit_code, stdout, _stderr) = run_cli(&["onboard", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    let record: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(record["calories"], 3677);
    assert_eq!(record["protein_g"].as_f64().unwrap(), 246.0);
    assert_eq!(record["macros_can_change_weekly"], true);
    assert!(record["updated_at"].is_string());
}

#[test]
fn test_onboard_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let (exit_code, _stdout, stderr) = run_cli(&["onboard", path.to_str().unwrap()]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("absent.json"), "stderr: {stderr}");
}

#[test]
fn test_batch_keeps_input_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("batch.json");
    fs::write(
        &path,
        r#"[
            {"weight_lbs": 180.0, "height_inches": 70, "age": 35, "gender": "male",
             "goal": "lose_weight", "training_days_per_week": 4},
            {"weight_lbs": 140.0, "height_inches": 65, "age": 30, "gender": "female",
             "goal": "maintain", "training_days_per_week": 3},
            {"weight_lbs": 150.0, "height_inches": 68, "age": 40, "gender": "female",
             "goal": "get_shredded", "training_days_per_week": 2}
        ]"#,
    )
    .unwrap();

    let (exit_code, stdout, _stderr) = run_cli(&["batch", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    let targets: Vec<Value> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(targets.len(), 3);
    assert_eq!(targets[0]["calories"], 2180);
    assert_eq!(targets[1]["calories"], 2102);
    assert_eq!(targets[2]["protein_g"].as_f64().unwrap(), 120.0);
}

#[test]
fn test_config_prints_defaults() {
    let (exit_code, stdout, _stderr) = run_cli(&["config"]);

    assert_eq!(exit_code, 0);
    let config: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(config["protein"]["floor_g_per_lb"].as_f64().unwrap(), 0.8);
    assert_eq!(config["fat"]["max_percent"].as_f64().unwrap(), 0.3);
    assert_eq!(config["activity"]["sedentary"].as_f64().unwrap(), 1.2);
}

#[test]
fn test_config_reflects_environment_override() {
    let (exit_code, stdout, _stderr) =
        run_cli_with_env(&["config"], &[("FITAI_MACROS_ACTIVITY_ACTIVE", "1.8")]);

    assert_eq!(exit_code, 0);
    let config: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(config["activity"]["very_active"].as_f64().unwrap(), 1.8);
}

#[test]
fn test_calculate_oversized_height_does_not_panic() {
    let (exit_code, stdout, stderr) = run_cli(&[
        "calculate",
        "--weight-lbs",
        "180",
        "--height-feet",
        "400000000",
        "--age",
        "35",
        "--goal",
        "maintain",
        "--training-days",
        "3",
        "--format",
        "json",
    ]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    let targets: Value = serde_json::from_str(&stdout).unwrap();
    assert!(targets["calories"].as_i64().unwrap() > 0);
}
