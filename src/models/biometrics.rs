// ABOUTME: Biometric input model consumed by the macro target calculator
// ABOUTME: Fitness goals, gender and opt-in input guards for caller-side validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI

use crate::errors::{AppError, AppResult};
use fitai_core::constants::limits::MAX_TRAINING_DAYS_PER_WEEK;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Fitness objective selected during onboarding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Caloric deficit with elevated protein
    LoseWeight,
    /// Caloric surplus with the highest protein target
    BuildMuscle,
    /// Caloric balance
    Maintain,
    /// Slight surplus for endurance work
    ImproveEndurance,
    /// Caloric balance, general health
    GeneralFitness,
}

impl FitnessGoal {
    /// All goals, in declaration order
    pub const ALL: [Self; 5] = [
        Self::LoseWeight,
        Self::BuildMuscle,
        Self::Maintain,
        Self::ImproveEndurance,
        Self::GeneralFitness,
    ];

    /// Parse the snake_case wire name of a goal
    ///
    /// Returns `None` for anything unrecognised; the calculator resolves an
    /// absent goal through each lookup table's own fallback.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "lose_weight" => Some(Self::LoseWeight),
            "build_muscle" => Some(Self::BuildMuscle),
            "maintain" => Some(Self::Maintain),
            "improve_endurance" => Some(Self::ImproveEndurance),
            "general_fitness" => Some(Self::GeneralFitness),
            _ => None,
        }
    }

    /// Wire name of the goal
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoseWeight => "lose_weight",
            Self::BuildMuscle => "build_muscle",
            Self::Maintain => "maintain",
            Self::ImproveEndurance => "improve_endurance",
            Self::GeneralFitness => "general_fitness",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender for the Mifflin-St Jeor offset term
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male offset (+5)
    Male,
    /// Female offset (-161)
    Female,
}

impl Gender {
    /// Map the optional free-text gender of an onboarding payload
    ///
    /// Only the exact string `"male"` selects the male offset. Every other
    /// value, including an absent one, uses the female offset.
    #[must_use]
    pub fn from_onboarding(raw: Option<&str>) -> Self {
        if raw == Some("male") {
            Self::Male
        } else {
            Self::Female
        }
    }

    /// Build from a boolean flag
    #[must_use]
    pub const fn from_is_male(is_male: bool) -> Self {
        if is_male {
            Self::Male
        } else {
            Self::Female
        }
    }
}

/// Caller-supplied biometric profile
///
/// The calculator treats these values as already range-checked. Use
/// [`BiometricInput::validate`] when the caller has not done so.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BiometricInput {
    /// Body mass in pounds
    pub weight_lbs: f64,
    /// Total standing height in inches
    pub height_inches: u32,
    /// Age in years
    pub age: u32,
    /// Selects the BMR offset
    pub gender: Gender,
    /// `None` when the caller's goal string was not recognised
    #[serde(default, deserialize_with = "deserialize_goal_lenient")]
    pub goal: Option<FitnessGoal>,
    /// Training sessions per week (0-7)
    pub training_days_per_week: u8,
}

impl BiometricInput {
    /// Build an input from raw onboarding-style values
    #[must_use]
    pub fn new(
        weight_lbs: f64,
        height_inches: u32,
        age: u32,
        is_male: bool,
        goal: &str,
        training_days_per_week: u8,
    ) -> Self {
        Self {
            weight_lbs,
            height_inches,
            age,
            gender: Gender::from_is_male(is_male),
            goal: FitnessGoal::parse(goal),
            training_days_per_week,
        }
    }

    /// Whether the male BMR offset applies
    #[must_use]
    pub fn is_male(&self) -> bool {
        self.gender == Gender::Male
    }

    /// Check the domain the calculator assumes
    ///
    /// The calculator never calls this; it is offered to callers that want to
    /// reject nonsensical profiles instead of computing with them.
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` naming the first offending field when
    /// weight is not a positive finite number, height or age is zero, or
    /// training days exceed seven.
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight_lbs.is_finite() || self.weight_lbs <= 0.0 {
            return Err(AppError::value_out_of_range(
                "weight_lbs",
                format!("weight_lbs must be positive, got {}", self.weight_lbs),
            ));
        }
        if self.height_inches == 0 {
            return Err(AppError::value_out_of_range(
                "height_inches",
                "height_inches must be positive",
            ));
        }
        if self.age == 0 {
            return Err(AppError::value_out_of_range(
                "age",
                "age must be positive",
            ));
        }
        if self.training_days_per_week > MAX_TRAINING_DAYS_PER_WEEK {
            return Err(AppError::value_out_of_range(
                "training_days_per_week",
                format!(
                    "training_days_per_week must be between 0 and {MAX_TRAINING_DAYS_PER_WEEK}, got {}",
                    self.training_days_per_week
                ),
            ));
        }
        Ok(())
    }
}

fn deserialize_goal_lenient<'de, D>(deserializer: D) -> Result<Option<FitnessGoal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(FitnessGoal::parse))
}
