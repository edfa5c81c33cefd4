// ABOUTME: Macro calculator configuration: BMR coefficients, activity bands, goal tables
// ABOUTME: Defaults reproduce the Mifflin-St Jeor pipeline constants used in onboarding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI

//! Macro Target Calculator Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010). Exercise Physiology

use super::error::ConfigError;
use crate::models::FitnessGoal;
use fitai_core::constants::units::{CM_PER_INCH, KG_PER_LB};
use serde::{Deserialize, Serialize};

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Pounds to kilograms factor (0.453592)
    pub lbs_to_kg: f64,
    /// Inches to centimeters factor (2.54)
    pub inches_to_cm: f64,
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            lbs_to_kg: KG_PER_LB,
            inches_to_cm: CM_PER_INCH,
            weight_coef: 10.0,
            height_coef: 6.25,
            age_coef: -5.0,
            male_constant: 5.0,
            female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers keyed by weekly training days
///
/// Bands are fixed: 0 days, 1-2, 3-4, 5-6, 7 and above.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityFactorsConfig {
    /// No training days: 1.2
    pub sedentary: f64,
    /// 1-2 days/week: 1.375
    pub lightly_active: f64,
    /// 3-4 days/week: 1.55
    pub moderately_active: f64,
    /// 5-6 days/week: 1.725
    pub very_active: f64,
    /// 7+ days/week: 1.9
    pub extra_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for the band containing `training_days_per_week`
    #[must_use]
    pub const fn multiplier_for_days(&self, training_days_per_week: u8) -> f64 {
        match training_days_per_week {
            0 => self.sedentary,
            1..=2 => self.lightly_active,
            3..=4 => self.moderately_active,
            5..=6 => self.very_active,
            _ => self.extra_active,
        }
    }

    fn bands(&self) -> [(&'static str, f64); 5] {
        [
            ("sedentary", self.sedentary),
            ("lightly_active", self.lightly_active),
            ("moderately_active", self.moderately_active),
            ("very_active", self.very_active),
            ("extra_active", self.extra_active),
        ]
    }

    /// Factors must be positive and never decrease with more training days
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a non-positive factor and
    /// `ConfigError::InvalidRange` when a band is lower than the previous one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bands = self.bands();
        for (name, value) in bands {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "activity factor {name} must be positive, got {value}"
                )));
            }
        }
        for pair in bands.windows(2) {
            let ((lower_name, lower), (upper_name, upper)) = (pair[0], pair[1]);
            if upper < lower {
                return Err(ConfigError::InvalidRange(format!(
                    "activity factor {upper_name} ({upper}) is below {lower_name} ({lower})"
                )));
            }
        }
        Ok(())
    }
}

/// Goal to calorie adjustment lookup
///
/// A goal outside the table resolves to the `maintain` entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalorieAdjustmentTable {
    /// 20% deficit: -0.20
    pub lose_weight: f64,
    /// 10% surplus: +0.10
    pub build_muscle: f64,
    /// Maintenance: 0.0
    pub maintain: f64,
    /// 5% surplus: +0.05
    pub improve_endurance: f64,
    /// Maintenance: 0.0
    pub general_fitness: f64,
}

impl Default for CalorieAdjustmentTable {
    fn default() -> Self {
        Self {
            lose_weight: -0.20,
            build_muscle: 0.10,
            maintain: 0.0,
            improve_endurance: 0.05,
            general_fitness: 0.0,
        }
    }
}

impl CalorieAdjustmentTable {
    /// Fractional calorie delta applied to maintenance calories
    #[must_use]
    pub const fn delta_for(&self, goal: Option<FitnessGoal>) -> f64 {
        match goal {
            Some(FitnessGoal::LoseWeight) => self.lose_weight,
            Some(FitnessGoal::BuildMuscle) => self.build_muscle,
            Some(FitnessGoal::ImproveEndurance) => self.improve_endurance,
            Some(FitnessGoal::GeneralFitness) => self.general_fitness,
            Some(FitnessGoal::Maintain) | None => self.maintain,
        }
    }

    /// Deltas must keep the target positive
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if any delta is -1.0 or below.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for goal in FitnessGoal::ALL {
            let delta = self.delta_for(Some(goal));
            if !delta.is_finite() || delta <= -1.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "calorie adjustment for {goal} must be greater than -1.0, got {delta}"
                )));
            }
        }
        Ok(())
    }
}

/// Goal to protein (grams per pound of bodyweight) lookup
///
/// A goal outside the table resolves to `floor_g_per_lb`, not to the
/// `maintain` entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProteinTable {
    /// 1.0 g/lb
    pub lose_weight: f64,
    /// 1.2 g/lb
    pub build_muscle: f64,
    /// 0.8 g/lb
    pub maintain: f64,
    /// 0.9 g/lb
    pub improve_endurance: f64,
    /// 0.8 g/lb
    pub general_fitness: f64,
    /// Minimum for general health, used for unrecognised goals: 0.8 g/lb
    pub floor_g_per_lb: f64,
}

impl Default for ProteinTable {
    fn default() -> Self {
        Self {
            lose_weight: 1.0,
            build_muscle: 1.2,
            maintain: 0.8,
            improve_endurance: 0.9,
            general_fitness: 0.8,
            floor_g_per_lb: 0.8,
        }
    }
}

impl ProteinTable {
    /// Protein grams per pound of bodyweight
    #[must_use]
    pub const fn g_per_lb_for(&self, goal: Option<FitnessGoal>) -> f64 {
        match goal {
            Some(FitnessGoal::LoseWeight) => self.lose_weight,
            Some(FitnessGoal::BuildMuscle) => self.build_muscle,
            Some(FitnessGoal::Maintain) => self.maintain,
            Some(FitnessGoal::ImproveEndurance) => self.improve_endurance,
            Some(FitnessGoal::GeneralFitness) => self.general_fitness,
            None => self.floor_g_per_lb,
        }
    }

    /// All entries and the floor must be positive
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a non-positive entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let entries = FitnessGoal::ALL
            .iter()
            .map(|goal| (goal.as_str(), self.g_per_lb_for(Some(*goal))))
            .chain([("floor", self.floor_g_per_lb)]);
        for (name, value) in entries {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "protein g/lb for {name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Fat allocation bounds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FatBoundsConfig {
    /// Absolute floor in grams per pound of bodyweight: 0.3
    pub min_g_per_lb: f64,
    /// Floor as a fraction of target calories: 0.20
    pub min_percent: f64,
    /// Ceiling as a fraction of target calories: 0.30
    pub max_percent: f64,
}

impl Default for FatBoundsConfig {
    fn default() -> Self {
        Self {
            min_g_per_lb: 0.3,
            min_percent: 0.20,
            max_percent: 0.30,
        }
    }
}

impl FatBoundsConfig {
    /// Fractions must satisfy `0 <= min_percent <= max_percent <= 1`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a negative floor or a
    /// fraction outside 0-1, and `ConfigError::InvalidRange` when the floor
    /// exceeds the ceiling.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_g_per_lb.is_finite() || self.min_g_per_lb < 0.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "fat min_g_per_lb must be non-negative, got {}",
                self.min_g_per_lb
            )));
        }
        for (name, value) in [
            ("min_percent", self.min_percent),
            ("max_percent", self.max_percent),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "fat {name} must be between 0.0 and 1.0, got {value}"
                )));
            }
        }
        if self.min_percent > self.max_percent {
            return Err(ConfigError::InvalidRange(format!(
                "fat min_percent ({}) exceeds max_percent ({})",
                self.min_percent, self.max_percent
            )));
        }
        Ok(())
    }
}
