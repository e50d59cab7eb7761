// ABOUTME: Nutrition policy configuration for macro targets, remaining macros, and recipe scoring
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Provides type-safe configuration for every calculator. A configuration is
//! only usable by the engine once it has passed validation, which the
//! `VALIDATED` type parameter records.
//!
//! # Module Structure
//!
//! - `nutrition` - BMR coefficients, goal energy adjustments, macro splits
//! - `remaining` - Progress thresholds, messages, dinner suggestion limits
//! - `scoring` - Recipe scoring point values and tiers
//! - `meal_plan` - Per-meal share of daily targets

pub mod error;
pub mod meal_plan;
pub mod nutrition;
pub mod remaining;
pub mod scoring;

pub use error::ConfigError;
pub use meal_plan::MealPlanConfig;
pub use nutrition::{
    BmrConfig, EnergyBalanceConfig, MacroDistribution, MacroSplitConfig, NutritionConfig,
};
pub use remaining::{
    DinnerSuggestionConfig, ProgressThresholds, RecommendationMessages, RemainingMacrosConfig,
};
pub use scoring::{MacroBalanceBounds, ScoreTier, ScoringConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig<true>> = OnceLock::new();

/// Main policy configuration container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntelligenceConfig<const VALIDATED: bool = false> {
    /// Macro target calculation policy
    pub nutrition: NutritionConfig,
    /// Remaining-macro tracking policy
    pub remaining: RemainingMacrosConfig,
    /// Recipe scoring policy
    pub scoring: ScoringConfig,
    /// Meal planning shares
    pub meal_plan: MealPlanConfig,
    #[serde(skip)]
    _phantom: PhantomData<()>,
}

impl<const VALIDATED: bool> IntelligenceConfig<VALIDATED> {
    /// Validate every section
    fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()?;
        self.remaining.validate()?;
        self.scoring.validate()?;
        self.meal_plan.validate()?;
        Ok(())
    }
}

impl IntelligenceConfig<false> {
    /// Start from defaults for programmatic customization
    #[must_use]
    pub fn builder() -> Self {
        Self {
            nutrition: NutritionConfig::default(),
            remaining: RemainingMacrosConfig::default(),
            scoring: ScoringConfig::default(),
            meal_plan: MealPlanConfig::default(),
            _phantom: PhantomData,
        }
    }

    /// Validate and seal the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first violated constraint
    pub fn validated(self) -> Result<IntelligenceConfig<true>, ConfigError> {
        self.validate()?;
        Ok(IntelligenceConfig {
            nutrition: self.nutrition,
            remaining: self.remaining,
            scoring: self.scoring,
            meal_plan: self.meal_plan,
            _phantom: PhantomData,
        })
    }
}

impl IntelligenceConfig<true> {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        let val = match env::var(env_var_name) {
            Ok(val) => val,
            Err(env::VarError::NotPresent) => return Ok(()),
            Err(err) => return Err(err.into()),
        };
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Energy balance overrides
        let balance = &mut self.nutrition.energy_balance;
        Self::apply_env_var(
            "TASTYDIET_MAX_DEFICIT_FRACTION",
            &mut balance.max_deficit_fraction,
        )?;
        Self::apply_env_var("TASTYDIET_MIN_BMR_MULTIPLE", &mut balance.min_bmr_multiple)?;
        Self::apply_env_var(
            "TASTYDIET_DEFAULT_LOSS_FRACTION",
            &mut balance.default_loss_fraction,
        )?;
        Self::apply_env_var(
            "TASTYDIET_MUSCLE_GAIN_SURPLUS",
            &mut balance.muscle_gain_surplus,
        )?;
        Self::apply_env_var(
            "TASTYDIET_ENDURANCE_SURPLUS",
            &mut balance.endurance_surplus,
        )?;

        // Remaining-macro overrides
        Self::apply_env_var(
            "TASTYDIET_CLOSE_PROGRESS_PCT",
            &mut self.remaining.thresholds.close_min_pct,
        )?;
        Self::apply_env_var(
            "TASTYDIET_EXCEEDED_PROGRESS_PCT",
            &mut self.remaining.thresholds.exceeded_pct,
        )?;
        Self::apply_env_var(
            "TASTYDIET_DINNER_MIN_PROTEIN_FRACTION",
            &mut self.remaining.dinner.min_protein_fraction,
        )?;
        Self::apply_env_var(
            "TASTYDIET_DINNER_MAX_SUGGESTIONS",
            &mut self.remaining.dinner.max_suggestions,
        )?;

        // Scoring overrides
        Self::apply_env_var("TASTYDIET_SCORING_LIKED_BONUS", &mut self.scoring.liked_bonus)?;
        Self::apply_env_var("TASTYDIET_SCORING_TOP_N", &mut self.scoring.top_n)?;

        Ok(self)
    }
}

impl Default for IntelligenceConfig<true> {
    fn default() -> Self {
        Self {
            nutrition: NutritionConfig::default(),
            remaining: RemainingMacrosConfig::default(),
            scoring: ScoringConfig::default(),
            meal_plan: MealPlanConfig::default(),
            _phantom: PhantomData,
        }
    }
}
