// ABOUTME: Error module re-exported from fitai-core
// ABOUTME: Keeps `crate::errors` import paths stable across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI

//! # Error Handling
//!
//! Re-exports the unified error types from the `fitai-core` crate.

pub use fitai_core::errors::*;
