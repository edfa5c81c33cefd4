// ABOUTME: Macro target calculator converting a biometric profile into daily targets
// ABOUTME: BMR, activity scaling, goal adjustment, protein, bounded fat and carbohydrate fill
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI

//! Macro Target Calculator
//!
//! Stateless pipeline from a [`BiometricInput`] to [`MacroTargets`]:
//!
//! 1. Basal metabolic rate (Mifflin-St Jeor)
//! 2. Activity multiplier from weekly training days
//! 3. Goal-based calorie adjustment
//! 4. Protein from bodyweight and goal
//! 5. Fat, bounded by an absolute floor and percentage floor/ceiling
//! 6. Carbohydrates fill the remainder; if that goes negative, carbs are
//!    clamped to zero and fat absorbs the residual, ignoring step 5's bounds
//!
//! Every function is pure. The calculator trusts its input; see
//! [`BiometricInput::validate`] for the opt-in guards.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{
    ActivityFactorsConfig, BmrConfig, CalorieAdjustmentTable, FatBoundsConfig,
    MacroCalculatorConfig, ProteinTable,
};
use crate::models::{BiometricInput, FitnessGoal, Gender, MacroTargets};
use fitai_core::constants::energy::{
    KCAL_PER_GRAM_CARB, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Calorie side of the pipeline (steps 1-3)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnergyEstimate {
    /// Basal Metabolic Rate in kcal/day
    pub bmr: f64,
    /// Multiplier from the training-day band
    pub activity_multiplier: f64,
    /// `bmr * activity_multiplier`
    pub maintenance_calories: f64,
    /// Fractional goal delta
    pub goal_adjustment: f64,
    /// `maintenance_calories * (1 + goal_adjustment)`
    pub target_calories: f64,
}

/// First-stage fat allocation (step 5), all values in kcal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FatAllocation {
    /// Energy of the grams-per-pound floor
    pub absolute_floor_kcal: f64,
    /// Percentage floor of target calories
    pub percent_floor_kcal: f64,
    /// Percentage ceiling of target calories
    pub ceiling_kcal: f64,
    /// `min(max(absolute_floor, percent_floor), ceiling)`
    pub target_kcal: f64,
}

impl FatAllocation {
    /// Fat grams for the bounded target
    #[must_use]
    pub fn grams(&self) -> f64 {
        self.target_kcal / KCAL_PER_GRAM_FAT
    }
}

/// Second-stage result (step 6)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CarbohydrateFill {
    /// Carbohydrate grams, never negative
    pub carbs_g: f64,
    /// Final fat grams
    pub fat_g: f64,
    /// Carbs would have gone negative and fat was recomputed from the residual
    pub clamped: bool,
}

/// Unrounded intermediate values of one calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroBreakdown {
    /// Calorie estimate
    pub energy: EnergyEstimate,
    /// Protein grams per pound of bodyweight
    pub protein_g_per_lb: f64,
    /// Protein grams
    pub protein_g: f64,
    /// Bounded fat allocation before the carbohydrate fill
    pub fat_allocation: FatAllocation,
    /// Carbohydrate grams
    pub carbs_g: f64,
    /// Final fat grams
    pub fat_g: f64,
    /// Whether the carbohydrate clamp discarded the fat bounds
    pub carb_clamp_applied: bool,
}

impl MacroBreakdown {
    /// Fat share of target calories, in percent
    #[must_use]
    pub fn fat_percent_of_target(&self) -> f64 {
        self.fat_g * KCAL_PER_GRAM_FAT / self.energy.target_calories * 100.0
    }

    /// Round each output independently
    ///
    /// Calories to the nearest integer, grams to one decimal place. Both
    /// round the exact binary value with ties to even. No renormalisation
    /// happens afterwards.
    #[must_use]
    pub fn rounded(&self) -> MacroTargets {
        MacroTargets {
            calories: self.energy.target_calories.round_ties_even() as i64,
            protein_g: round_to_tenth(self.protein_g),
            carbs_g: round_to_tenth(self.carbs_g),
            fat_g: round_to_tenth(self.fat_g),
        }
    }
}

/// Round to one decimal place on the exact value, ties to even
///
/// Float formatting is correctly rounded, so `150.25` becomes `150.2` and
/// `0.35` (stored just below the tie) becomes `0.3`. Scaling by ten first
/// would round twice and push both up.
fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// Weight and height are converted from pounds and inches first. No lower
/// bound is applied; pathological inputs can yield a negative BMR.
#[must_use]
pub fn calculate_bmr(
    weight_lbs: f64,
    height_inches: u32,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_kg = weight_lbs * config.lbs_to_kg;
    let height_cm = f64::from(height_inches) * config.inches_to_cm;

    let gender_constant = match gender {
        Gender::Male => config.male_constant,
        Gender::Female => config.female_constant,
    };

    config.weight_coef.mul_add(
        weight_kg,
        config
            .height_coef
            .mul_add(height_cm, config.age_coef.mul_add(f64::from(age), gender_constant)),
    )
}

/// Activity multiplier for the weekly training-day band
#[must_use]
pub const fn activity_multiplier(training_days_per_week: u8, config: &ActivityFactorsConfig) -> f64 {
    config.multiplier_for_days(training_days_per_week)
}

/// Calorie delta for a goal; unrecognised goals get the `maintain` entry
#[must_use]
pub const fn goal_adjustment(goal: Option<FitnessGoal>, table: &CalorieAdjustmentTable) -> f64 {
    table.delta_for(goal)
}

/// Protein g/lb for a goal; unrecognised goals get the protein floor
#[must_use]
pub const fn protein_per_lb(goal: Option<FitnessGoal>, table: &ProteinTable) -> f64 {
    table.g_per_lb_for(goal)
}

/// Steps 1-3: BMR, maintenance and goal-adjusted target calories
#[must_use]
pub fn estimate_energy(input: &BiometricInput, config: &MacroCalculatorConfig) -> EnergyEstimate {
    let bmr = calculate_bmr(
        input.weight_lbs,
        input.height_inches,
        input.age,
        input.gender,
        &config.bmr,
    );
    let activity_multiplier = activity_multiplier(input.training_days_per_week, &config.activity);
    let maintenance_calories = bmr * activity_multiplier;
    let goal_adjustment = goal_adjustment(input.goal, &config.calorie_adjustments);
    let target_calories = maintenance_calories * (1.0 + goal_adjustment);

    EnergyEstimate {
        bmr,
        activity_multiplier,
        maintenance_calories,
        goal_adjustment,
        target_calories,
    }
}

/// Step 5: reconcile the three fat constraints
///
/// The larger of the two floors is taken first, then the percentage ceiling
/// is applied unconditionally. For low calorie targets the ceiling therefore
/// wins over the grams-per-pound floor.
#[must_use]
pub fn allocate_fat(weight_lbs: f64, target_calories: f64, bounds: &FatBoundsConfig) -> FatAllocation {
    let absolute_floor_kcal = weight_lbs * bounds.min_g_per_lb * KCAL_PER_GRAM_FAT;
    let percent_floor_kcal = target_calories * bounds.min_percent;
    let ceiling_kcal = target_calories * bounds.max_percent;

    let floor_kcal = absolute_floor_kcal.max(percent_floor_kcal);
    let target_kcal = floor_kcal.min(ceiling_kcal);

    FatAllocation {
        absolute_floor_kcal,
        percent_floor_kcal,
        ceiling_kcal,
        target_kcal,
    }
}

/// Step 6: fill the remaining calories with carbohydrates
///
/// When the remainder is negative, carbs are clamped to zero and fat is
/// recomputed as everything protein does not cover. That discards the fat
/// allocation, bounds included, in favour of hitting the calorie target.
#[must_use]
pub fn fill_carbohydrates(
    target_calories: f64,
    protein_kcal: f64,
    fat_allocation: &FatAllocation,
) -> CarbohydrateFill {
    let bounded_fat_g = fat_allocation.grams();
    let carbs_kcal = target_calories - protein_kcal - bounded_fat_g * KCAL_PER_GRAM_FAT;
    let carbs_g = carbs_kcal / KCAL_PER_GRAM_CARB;

    if carbs_g >= 0.0 {
        return CarbohydrateFill {
            carbs_g,
            fat_g: bounded_fat_g,
            clamped: false,
        };
    }

    let residual_fat_kcal = target_calories - protein_kcal;
    let fat_g = residual_fat_kcal / KCAL_PER_GRAM_FAT;
    debug!(
        carbs_g,
        bounded_fat_g,
        residual_fat_g = fat_g,
        "Carbohydrates clamped to zero, fat recomputed from residual calories"
    );
    if fat_g < 0.0 {
        warn!(
            target_calories,
            protein_kcal, "Protein exceeds target calories, fat target is negative"
        );
    }

    CarbohydrateFill {
        carbs_g: 0.0,
        fat_g,
        clamped: true,
    }
}

/// Run the full pipeline and keep every intermediate value
#[must_use]
pub fn calculate_macro_breakdown(
    input: &BiometricInput,
    config: &MacroCalculatorConfig,
) -> MacroBreakdown {
    let energy = estimate_energy(input, config);

    let protein_g_per_lb = protein_per_lb(input.goal, &config.protein);
    let protein_g = input.weight_lbs * protein_g_per_lb;
    let protein_kcal = protein_g * KCAL_PER_GRAM_PROTEIN;

    let fat_allocation = allocate_fat(input.weight_lbs, energy.target_calories, &config.fat);
    let fill = fill_carbohydrates(energy.target_calories, protein_kcal, &fat_allocation);

    debug!(
        bmr = energy.bmr,
        maintenance = energy.maintenance_calories,
        target = energy.target_calories,
        protein_g,
        carbs_g = fill.carbs_g,
        fat_g = fill.fat_g,
        "Macro targets calculated"
    );

    MacroBreakdown {
        energy,
        protein_g_per_lb,
        protein_g,
        fat_allocation,
        carbs_g: fill.carbs_g,
        fat_g: fill.fat_g,
        carb_clamp_applied: fill.clamped,
    }
}

/// Daily macro targets for a profile with an explicit configuration
///
/// Deterministic: identical input and configuration give identical output.
#[must_use]
pub fn calculate_macro_targets(
    input: &BiometricInput,
    config: &MacroCalculatorConfig,
) -> MacroTargets {
    calculate_macro_breakdown(input, config).rounded()
}

/// Daily macro targets from raw onboarding values
///
/// Uses [`MacroCalculatorConfig::global`]. Unrecognised `goal` strings are
/// not an error; they take each lookup table's fallback.
#[must_use]
pub fn calculate_macros(
    weight_lbs: f64,
    height_inches: u32,
    age: u32,
    is_male: bool,
    goal: &str,
    training_days_per_week: u8,
) -> MacroTargets {
    let input = BiometricInput::new(
        weight_lbs,
        height_inches,
        age,
        is_male,
        goal,
        training_days_per_week,
    );
    calculate_macro_targets(&input, MacroCalculatorConfig::global())
}

/// Targets for many profiles at once, in input order
#[must_use]
pub fn calculate_macro_targets_batch(
    inputs: &[BiometricInput],
    config: &MacroCalculatorConfig,
) -> Vec<MacroTargets> {
    inputs
        .par_iter()
        .map(|input| calculate_macro_targets(input, config))
        .collect()
}
