// ABOUTME: fitai-macros CLI - compute daily calorie and macro targets from the command line
// ABOUTME: Single profiles, onboarding payload files, batches and effective configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI
//!
//! Usage:
//! ```bash
//! # Targets for one profile
//! fitai-macros calculate --weight-lbs 205 --height-feet 6 --age 28 --gender male \
//!     --goal build_muscle --training-days 5
//!
//! # Reject out-of-range input instead of computing with it
//! fitai-macros calculate --weight-lbs 0 --height-feet 6 --age 28 --goal maintain \
//!     --training-days 3 --strict
//!
//! # Timestamped targets for an onboarding payload
//! fitai-macros onboard profile.json
//!
//! # Targets for a JSON array of biometric inputs
//! fitai-macros batch inputs.json
//!
//! # Effective configuration (defaults plus FITAI_MACROS_* overrides)
//! fitai-macros config
//! ```

mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use fitai::errors::{AppError, AppResult};
use fitai::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fitai-macros",
    about = "Daily calorie and macronutrient targets",
    long_about = "Computes calorie, protein, carbohydrate and fat targets from a biometric profile and fitness goal."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Output rendering for single-profile results
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable summary
    Text,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute targets for one profile
    Calculate {
        /// Body weight in pounds
        #[arg(long)]
        weight_lbs: f64,

        /// Height, feet component
        #[arg(long)]
        height_feet: u32,

        /// Height, inches component added to the feet
        #[arg(long, default_value = "0")]
        height_inches: u32,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Gender; only "male" selects the male BMR offset
        #[arg(long)]
        gender: Option<String>,

        /// Goal (lose_weight, build_muscle, maintain, improve_endurance, general_fitness)
        #[arg(long)]
        goal: String,

        /// Training days per week
        #[arg(long)]
        training_days: u8,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Validate input ranges before computing
        #[arg(long)]
        strict: bool,

        /// Print unrounded intermediate values as JSON
        #[arg(long)]
        breakdown: bool,
    },

    /// Compute timestamped targets for an onboarding payload file
    Onboard {
        /// Path to an onboarding profile JSON file
        file: PathBuf,
    },

    /// Compute targets for a JSON array of biometric inputs
    Batch {
        /// Path to a JSON array file
        file: PathBuf,
    },

    /// Print the effective calculator configuration
    Config,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    debug!("fitai-macros starting");

    match cli.command {
        Command::Calculate {
            weight_lbs,
            height_feet,
            height_inches,
            age,
            gender,
            goal,
            training_days,
            format,
            strict,
            breakdown,
        } => {
            let args = commands::calculate::CalculateArgs {
                weight_lbs,
                height_feet,
                height_inches,
                age,
                gender,
                goal,
                training_days,
            };
            commands::calculate::run(&args, format, strict, breakdown)
        }
        Command::Onboard { file } => commands::files::onboard(&file),
        Command::Batch { file } => commands::files::batch(&file),
        Command::Config => commands::show_config(),
    }
}
