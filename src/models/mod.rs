// ABOUTME: Data models for the macro target engine
// ABOUTME: Biometric input, onboarding payloads and macro target outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI

//! # Data Models
//!
//! Value types exchanged between the onboarding workflow and the calculator.
//! None of them carry behaviour beyond conversion and caller-side validation.

/// Biometric input, goals and gender
pub mod biometrics;
/// Calculator output and its stored form
pub mod macros;
/// Onboarding questionnaire payload
pub mod onboarding;

pub use biometrics::{BiometricInput, FitnessGoal, Gender};
pub use macros::{MacroPercentages, MacroTargets, MacroTargetsRecord};
pub use onboarding::OnboardingProfile;
