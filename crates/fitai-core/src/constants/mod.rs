// ABOUTME: Application-wide constants for energy densities and unit conversion
// ABOUTME: Shared by the calculator defaults and by callers formatting results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI

//! Constants organised by domain.

/// Metabolizable energy per gram of each macronutrient (Atwater factors)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Carbohydrate: 4 kcal/g
    pub const KCAL_PER_GRAM_CARB: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Imperial to metric conversion factors
pub mod units {
    /// Kilograms per pound
    pub const KG_PER_LB: f64 = 0.453_592;
    /// Centimeters per inch
    pub const CM_PER_INCH: f64 = 2.54;
    /// Inches per foot
    pub const INCHES_PER_FOOT: u32 = 12;
}

/// Accepted ranges for caller-side input guards
pub mod limits {
    /// Highest number of training days in a week
    pub const MAX_TRAINING_DAYS_PER_WEEK: u8 = 7;
}

/// Service identification used in structured logs
pub mod service_names {
    /// Name reported by the logging subsystem
    pub const FITAI_MACROS: &str = "fitai-macros";
}
