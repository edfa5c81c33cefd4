// ABOUTME: Intelligence module hosting the macro target calculator
// ABOUTME: Re-exports the calculator entry points for path-based access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI

//! # Intelligence Module
//!
//! Nutrition algorithms. Currently a single stateless calculator that turns a
//! biometric profile into daily calorie and macronutrient targets.

/// Macro target calculation pipeline
pub mod macro_calculator;

pub use macro_calculator::{
    calculate_macro_breakdown, calculate_macro_targets, calculate_macro_targets_batch,
    calculate_macros, MacroBreakdown,
};
