// ABOUTME: Onboarding questionnaire payload and its mapping to calculator input
// ABOUTME: Composes height from feet and inches and maps free-text gender
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI

use super::biometrics::{BiometricInput, FitnessGoal, Gender};
use fitai_core::constants::units::INCHES_PER_FOOT;
use serde::{Deserialize, Serialize};

/// Profile submitted by a user during onboarding
///
/// Only a handful of fields feed the macro calculator; the rest are kept so
/// the profile can be stored as submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingProfile {
    /// Goal as free text (`build_muscle`, `lose_weight`, ...)
    pub goal: String,
    /// Self-reported training experience
    pub experience: String,
    /// Training sessions per week
    pub training_days_per_week: u8,
    /// Preferred equipment setup
    pub equipment_style: String,
    /// Weekday for progress check-ins
    pub check_in_day: String,
    /// Height, feet component
    pub height_feet: u32,
    /// Height, inches component (added to the feet)
    pub height_inches: u32,
    /// Body weight in pounds
    pub weight_pounds: f64,
    /// Age in years
    pub age: u32,
    /// Free-text gender, optional
    #[serde(default)]
    pub gender: Option<String>,
    /// Foods the user likes
    #[serde(default)]
    pub food_preferences: Vec<String>,
    /// Food allergies
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Meals eaten per day
    pub meals_per_day: u8,
    /// Usual wake time, `HH:MM`
    #[serde(default)]
    pub wake_time: Option<String>,
    /// Usual sleep time, `HH:MM`
    #[serde(default)]
    pub sleep_time: Option<String>,
    /// Current injuries
    #[serde(default)]
    pub injuries: Vec<String>,
    /// Grocery budget tier
    pub budget_tier: String,
    /// Current cardio habits
    pub current_cardio: String,
    /// Preferred coaching tone
    pub motivation_style: String,
}

impl OnboardingProfile {
    /// Total standing height in inches
    ///
    /// Saturates at `u32::MAX` for absurd payloads instead of overflowing.
    #[must_use]
    pub const fn total_height_inches(&self) -> u32 {
        self.height_feet
            .saturating_mul(INCHES_PER_FOOT)
            .saturating_add(self.height_inches)
    }

    /// Parsed goal, `None` if the free text is not a known goal
    #[must_use]
    pub fn fitness_goal(&self) -> Option<FitnessGoal> {
        FitnessGoal::parse(&self.goal)
    }

    /// Project the profile onto the calculator's input
    #[must_use]
    pub fn to_biometric_input(&self) -> BiometricInput {
        BiometricInput {
            weight_lbs: self.weight_pounds,
            height_inches: self.total_height_inches(),
            age: self.age,
            gender: Gender::from_onboarding(self.gender.as_deref()),
            goal: self.fitness_goal(),
            training_days_per_week: self.training_days_per_week,
        }
    }
}
