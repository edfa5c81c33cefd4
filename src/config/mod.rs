// ABOUTME: Configuration for the macro target calculator with env overrides and validation
// ABOUTME: Provides a lazily loaded, validated process-wide instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI

//! Calculator Configuration Module
//!
//! Configuration is split by pipeline stage:
//! - `bmr` - Mifflin-St Jeor coefficients and unit conversion
//! - `activity` - Training-day bands to activity multiplier
//! - `calorie_adjustments` - Goal to calorie delta (falls back to `maintain`)
//! - `protein` - Goal to protein g/lb (falls back to the protein floor)
//! - `fat` - Absolute and percentage fat bounds
//!
//! Defaults reproduce the published pipeline exactly. A small set of values
//! can be overridden through `FITAI_MACROS_*` environment variables.

/// Configuration error types
pub mod error;
/// Per-stage calculator settings and lookup tables
pub mod macros;

pub use error::ConfigError;
pub use macros::{
    ActivityFactorsConfig, BmrConfig, CalorieAdjustmentTable, FatBoundsConfig, ProteinTable,
};

use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Global configuration singleton
static MACRO_CALCULATOR_CONFIG: OnceLock<MacroCalculatorConfig> = OnceLock::new();

/// Prefix shared by every environment override
pub const ENV_PREFIX: &str = "FITAI_MACROS_";

/// Complete macro calculator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroCalculatorConfig {
    /// Basal metabolic rate formula settings
    pub bmr: BmrConfig,
    /// Activity multipliers by training-day band
    pub activity: ActivityFactorsConfig,
    /// Goal to calorie adjustment lookup
    pub calorie_adjustments: CalorieAdjustmentTable,
    /// Goal to protein-per-pound lookup
    pub protein: ProteinTable,
    /// Fat allocation bounds
    pub fat: FatBoundsConfig,
}

impl MacroCalculatorConfig {
    /// Get the global configuration instance
    ///
    /// Loaded once per process. Falls back to defaults when the environment
    /// holds an unparsable or invalid override.
    pub fn global() -> &'static Self {
        MACRO_CALCULATOR_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load macro calculator config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or the resulting
    /// configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(?config, "Macro calculator configuration loaded");
        Ok(config)
    }

    /// Validate every stage's settings
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("bmr.lbs_to_kg", self.bmr.lbs_to_kg),
            ("bmr.inches_to_cm", self.bmr.inches_to_cm),
            ("bmr.weight_coef", self.bmr.weight_coef),
            ("bmr.height_coef", self.bmr.height_coef),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        self.activity.validate()?;
        self.calorie_adjustments.validate()?;
        self.protein.validate()?;
        self.fat.validate()
    }

    /// Helper function to parse and apply an environment variable override
    ///
    /// An unset variable leaves `target` untouched; a non-Unicode value is an error.
    fn apply_env_var<T: FromStr>(suffix: &str, target: &mut T) -> Result<(), ConfigError> {
        let env_var_name = format!("{ENV_PREFIX}{suffix}");
        let val = match env::var(&env_var_name) {
            Ok(val) => val,
            Err(VarError::NotPresent) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Protein fallback
        Self::apply_env_var(
            "PROTEIN_FLOOR_G_PER_LB",
            &mut self.protein.floor_g_per_lb,
        )?;

        // Fat bounds
        Self::apply_env_var("FAT_MIN_G_PER_LB", &mut self.fat.min_g_per_lb)?;
        Self::apply_env_var("FAT_MIN_PERCENT", &mut self.fat.min_percent)?;
        Self::apply_env_var("FAT_MAX_PERCENT", &mut self.fat.max_percent)?;

        // Activity bands
        Self::apply_env_var("ACTIVITY_SEDENTARY", &mut self.activity.sedentary)?;
        Self::apply_env_var("ACTIVITY_LIGHT", &mut self.activity.lightly_active)?;
        Self::apply_env_var("ACTIVITY_MODERATE", &mut self.activity.moderately_active)?;
        Self::apply_env_var("ACTIVITY_ACTIVE", &mut self.activity.very_active)?;
        Self::apply_env_var("ACTIVITY_VERY_ACTIVE", &mut self.activity.extra_active)?;

        Ok(self)
    }
}
