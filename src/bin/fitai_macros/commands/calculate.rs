// ABOUTME: `calculate` command computing targets for a single profile
// ABOUTME: Renders results as JSON or a text summary, optionally with guards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI

use super::print_json;
use crate::OutputFormat;
use fitai::config::MacroCalculatorConfig;
use fitai::constants::units::INCHES_PER_FOOT;
use fitai::errors::AppResult;
use fitai::intelligence::calculate_macro_breakdown;
use fitai::models::{BiometricInput, FitnessGoal, Gender, MacroTargets};
use tracing::{info, warn};

/// Raw profile values from the command line
pub struct CalculateArgs {
    /// Body weight in pounds
    pub weight_lbs: f64,
    /// Height, feet component
    pub height_feet: u32,
    /// Height, inches component
    pub height_inches: u32,
    /// Age in years
    pub age: u32,
    /// Free-text gender
    pub gender: Option<String>,
    /// Free-text goal
    pub goal: String,
    /// Training days per week
    pub training_days: u8,
}

impl CalculateArgs {
    fn to_input(&self) -> BiometricInput {
        BiometricInput {
            weight_lbs: self.weight_lbs,
            height_inches: self
                .height_feet
                .saturating_mul(INCHES_PER_FOOT)
                .saturating_add(self.height_inches),
            age: self.age,
            gender: Gender::from_onboarding(self.gender.as_deref()),
            goal: FitnessGoal::parse(&self.goal),
            training_days_per_week: self.training_days,
        }
    }
}

/// Compute and print targets for one profile
///
/// # Errors
///
/// Returns `VALUE_OUT_OF_RANGE` when `strict` is set and the profile fails
/// validation
pub fn run(
    args: &CalculateArgs,
    format: OutputFormat,
    strict: bool,
    breakdown: bool,
) -> AppResult<()> {
    let input = args.to_input();
    if strict {
        input.validate()?;
    }
    if input.goal.is_none() {
        warn!(goal = %args.goal, "Unrecognised goal, using fallback table entries");
    }

    let details = calculate_macro_breakdown(&input, MacroCalculatorConfig::global());
    if details.carb_clamp_applied {
        info!("Carbohydrate target clamped to zero; fat bounds were not applied");
    }
    if breakdown {
        return print_json(&details);
    }

    let targets = details.rounded();
    match format {
        OutputFormat::Json => print_json(&targets),
        OutputFormat::Text => {
            print_summary(&targets);
            Ok(())
        }
    }
}

fn print_summary(targets: &MacroTargets) {
    let pct = targets.percentages();
    println!("Calories: {} kcal", targets.calories);
    println!(
        "Protein:  {:.1} g ({:.1}%)",
        targets.protein_g, pct.protein_percent
    );
    println!(
        "Carbs:    {:.1} g ({:.1}%)",
        targets.carbs_g, pct.carbs_percent
    );
    println!("Fat:      {:.1} g ({:.1}%)", targets.fat_g, pct.fat_percent);
}
