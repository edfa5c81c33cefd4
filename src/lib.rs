// ABOUTME: Main library entry point for the FitAI macro target engine
// ABOUTME: Converts onboarding biometrics and goals into daily calorie and macro targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI

#![deny(unsafe_code)]

//! # FitAI Macros
//!
//! Deterministic calculation of daily calorie, protein, carbohydrate and fat
//! targets from a user's biometric profile and fitness goal.
//!
//! ## Architecture
//!
//! - **Models**: Biometric input, onboarding payloads and target outputs
//! - **Intelligence**: The macro target calculator pipeline
//! - **Config**: Calculator constants, environment overrides and validation
//! - **Logging**: Structured logging setup
//!
//! ## Example Usage
//!
//! ```rust
//! use fitai::config::MacroCalculatorConfig;
//! use fitai::intelligence::calculate_macro_targets;
//! use fitai::models::BiometricInput;
//!
//! let input = BiometricInput::new(205.0, 72, 28, true, "build_muscle", 5);
//! let targets = calculate_macro_targets(&input, &MacroCalculatorConfig::default());
//!
//! assert_eq!(targets.protein_g, 246.0);
//! assert!(targets.calories > 2500);
//! ```

/// Calculator configuration management
pub mod config;

/// Unified error handling re-exported from `fitai-core`
pub mod errors;

/// Nutrition algorithms
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Data models
pub mod models;

/// Application constants re-exported from `fitai-core`
pub use fitai_core::constants;
