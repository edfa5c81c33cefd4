// ABOUTME: Core types and constants for the FitAI macro target engine
// ABOUTME: Foundation crate with error handling and nutrition constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI

#![deny(unsafe_code)]

//! # FitAI Core
//!
//! Foundation crate shared by the macro target engine and its callers.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy densities and unit conversion factors

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrition and unit conversion constants
pub mod constants;
