// ABOUTME: Command implementations for fitai-macros
// ABOUTME: Shared JSON output helper and the config command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI

pub mod calculate;
pub mod files;

use fitai::config::MacroCalculatorConfig;
use fitai::errors::AppResult;
use serde::Serialize;

/// Write `value` to stdout as pretty JSON
///
/// # Errors
///
/// Returns an error if `value` cannot be serialized
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

/// Print the configuration the calculator is using
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized
pub fn show_config() -> AppResult<()> {
    print_json(MacroCalculatorConfig::global())
}
