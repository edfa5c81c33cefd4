// ABOUTME: Macro target output models returned by the calculator
// ABOUTME: Rounded daily targets, percentage breakdown and timestamped record form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI

use chrono::{DateTime, Utc};
use fitai_core::constants::energy::{
    KCAL_PER_GRAM_CARB, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use serde::{Deserialize, Serialize};

/// Daily caloric and macronutrient targets
///
/// Each field is rounded independently, so the energy implied by the three
/// macros differs from `calories` by a few kcal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroTargets {
    /// Daily calorie target, rounded to the nearest integer
    pub calories: i64,
    /// Protein grams, one decimal place
    pub protein_g: f64,
    /// Carbohydrate grams, one decimal place
    pub carbs_g: f64,
    /// Fat grams, one decimal place
    pub fat_g: f64,
}

/// Share of the calorie target supplied by each macronutrient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroPercentages {
    /// Protein as percentage of total calories
    pub protein_percent: f64,
    /// Carbohydrates as percentage of total calories
    pub carbs_percent: f64,
    /// Fat as percentage of total calories
    pub fat_percent: f64,
}

impl MacroTargets {
    /// Energy implied by the three macro quantities (kcal)
    #[must_use]
    pub fn macro_calories(&self) -> f64 {
        self.fat_g.mul_add(
            KCAL_PER_GRAM_FAT,
            self.protein_g
                .mul_add(KCAL_PER_GRAM_PROTEIN, self.carbs_g * KCAL_PER_GRAM_CARB),
        )
    }

    /// Percentage of `calories` contributed by each macro
    ///
    /// All zero when the calorie target is not positive.
    #[must_use]
    pub fn percentages(&self) -> MacroPercentages {
        if self.calories <= 0 {
            return MacroPercentages {
                protein_percent: 0.0,
                carbs_percent: 0.0,
                fat_percent: 0.0,
            };
        }
        let total = self.calories as f64;
        MacroPercentages {
            protein_percent: self.protein_g * KCAL_PER_GRAM_PROTEIN / total * 100.0,
            carbs_percent: self.carbs_g * KCAL_PER_GRAM_CARB / total * 100.0,
            fat_percent: self.fat_g * KCAL_PER_GRAM_FAT / total * 100.0,
        }
    }

    /// Attach the caller's timestamp for persistence
    #[must_use]
    pub const fn into_record(self, updated_at: DateTime<Utc>) -> MacroTargetsRecord {
        MacroTargetsRecord {
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
            updated_at,
            macros_can_change_weekly: true,
        }
    }
}

/// Macro targets as stored alongside a user's profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroTargetsRecord {
    /// Daily calorie target
    pub calories: i64,
    /// Protein grams
    pub protein_g: f64,
    /// Carbohydrate grams
    pub carbs_g: f64,
    /// Fat grams
    pub fat_g: f64,
    /// When the targets were computed
    pub updated_at: DateTime<Utc>,
    /// Reminder shown to the user that targets are revisited weekly
    pub macros_can_change_weekly: bool,
}

impl MacroTargetsRecord {
    /// Drop the timestamp and return the bare targets
    #[must_use]
    pub const fn targets(&self) -> MacroTargets {
        MacroTargets {
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
        }
    }
}
