// ABOUTME: Nutrition policy configuration for macro target calculation
// ABOUTME: Configures BMR coefficients, goal energy adjustments, and per-goal macro splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro Target Policy Configuration
//!
//! Every goal-dependent constant lives in a table keyed by [`Goal`], so the
//! calculator never compares goal names.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Energy density of adipose tissue: Wishnofsky (1958), ~7700 kcal/kg

use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};
use tastydiet_core::constants::energy;
use tastydiet_core::models::Goal;

/// Nutrition policy configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// Goal-dependent calorie adjustment
    pub energy_balance: EnergyBalanceConfig,
    /// Goal-dependent macro split
    pub macro_splits: MacroSplitConfig,
}

impl NutritionConfig {
    /// Validate coefficients, bounds, and split tables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmr.weight_coef <= 0.0 || self.bmr.height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        self.energy_balance.validate()?;
        self.macro_splits.validate()
    }
}

/// Mifflin-St Jeor coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub weight_coef: f64,
    /// Height coefficient (6.25)
    pub height_coef: f64,
    /// Age coefficient (-5.0)
    pub age_coef: f64,
    /// Male constant (+5)
    pub male_constant: f64,
    /// Female constant (-161)
    pub female_constant: f64,
    /// Constant for other or unspecified sex: mean of male and female (-78)
    pub other_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            weight_coef: 10.0,
            height_coef: 6.25,
            age_coef: -5.0,
            male_constant: 5.0,
            female_constant: -161.0,
            other_constant: -78.0,
        }
    }
}

/// Calorie adjustment relative to TDEE
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyBalanceConfig {
    /// Energy in one kg of body fat (kcal)
    pub kcal_per_kg_fat: f64,
    /// Weight to lose when no lower target weight is set, as a fraction of body weight
    pub default_loss_fraction: f64,
    /// Largest allowed daily deficit as a fraction of TDEE
    pub max_deficit_fraction: f64,
    /// Calorie target never drops below this multiple of BMR
    pub min_bmr_multiple: f64,
    /// Muscle gain surplus as a fraction of TDEE
    pub muscle_gain_surplus: f64,
    /// Endurance surplus as a fraction of TDEE
    pub endurance_surplus: f64,
}

impl Default for EnergyBalanceConfig {
    fn default() -> Self {
        Self {
            kcal_per_kg_fat: energy::KCAL_PER_KG_BODY_FAT,
            default_loss_fraction: 0.05,
            max_deficit_fraction: 0.25,
            min_bmr_multiple: 1.1,
            muscle_gain_surplus: 0.12,
            endurance_surplus: 0.06,
        }
    }
}

impl EnergyBalanceConfig {
    /// Surplus fraction applied on top of TDEE for `goal` (0 for deficit goals)
    #[must_use]
    pub const fn surplus_for(&self, goal: Goal) -> f64 {
        match goal {
            Goal::MuscleGain => self.muscle_gain_surplus,
            Goal::Endurance => self.endurance_surplus,
            Goal::WeightLoss
            | Goal::FatLossHighProtein
            | Goal::Maintenance
            | Goal::Keto
            | Goal::DiabetesManagement
            | Goal::Custom => 0.0,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.kcal_per_kg_fat <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "kcal_per_kg_fat must be positive",
            ));
        }
        if !(0.0..1.0).contains(&self.max_deficit_fraction) || self.max_deficit_fraction == 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_deficit_fraction must be in (0, 1)",
            ));
        }
        if !(0.0..1.0).contains(&self.default_loss_fraction) {
            return Err(ConfigError::ValueOutOfRange(
                "default_loss_fraction must be in [0, 1)",
            ));
        }
        if self.min_bmr_multiple <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_bmr_multiple must be positive",
            ));
        }
        if self.endurance_surplus < 0.0 || self.endurance_surplus > self.muscle_gain_surplus {
            return Err(ConfigError::InvalidRange(
                "endurance_surplus must be between 0 and muscle_gain_surplus",
            ));
        }
        Ok(())
    }
}

/// Macronutrient split as percent of calories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroDistribution {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroDistribution {
    /// Create a new macro distribution
    ///
    /// # Panics
    ///
    /// Panics in debug mode if percentages don't sum to 100
    #[must_use]
    pub const fn new(protein_pct: u8, carbs_pct: u8, fat_pct: u8) -> Self {
        debug_assert!(
            protein_pct
                .saturating_add(carbs_pct)
                .saturating_add(fat_pct)
                == 100,
            "Macro percentages must sum to 100"
        );
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    /// Sum of the three percentages
    #[must_use]
    pub fn total(&self) -> u16 {
        u16::from(self.protein_pct) + u16::from(self.carbs_pct) + u16::from(self.fat_pct)
    }
}

/// Macro split per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Maintenance: 25/50/25
    pub maintenance: MacroDistribution,
    /// Weight loss: 30/45/25
    pub weight_loss: MacroDistribution,
    /// Muscle gain: 30/45/25
    pub muscle_gain: MacroDistribution,
    /// Fat loss with high protein: 40/35/25
    pub fat_loss_high_protein: MacroDistribution,
    /// Endurance: 25/50/25
    pub endurance: MacroDistribution,
    /// Keto: 25/5/70
    pub keto: MacroDistribution,
    /// Diabetes management: 30/40/30
    pub diabetes_management: MacroDistribution,
    /// Custom plan starting point: 25/45/30
    pub custom: MacroDistribution,
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            maintenance: MacroDistribution::new(25, 50, 25),
            weight_loss: MacroDistribution::new(30, 45, 25),
            muscle_gain: MacroDistribution::new(30, 45, 25),
            fat_loss_high_protein: MacroDistribution::new(40, 35, 25),
            endurance: MacroDistribution::new(25, 50, 25),
            keto: MacroDistribution::new(25, 5, 70),
            diabetes_management: MacroDistribution::new(30, 40, 30),
            custom: MacroDistribution::new(25, 45, 30),
        }
    }
}

impl MacroSplitConfig {
    /// Split used for `goal`
    #[must_use]
    pub const fn split_for(&self, goal: Goal) -> MacroDistribution {
        match goal {
            Goal::Maintenance => self.maintenance,
            Goal::WeightLoss => self.weight_loss,
            Goal::MuscleGain => self.muscle_gain,
            Goal::FatLossHighProtein => self.fat_loss_high_protein,
            Goal::Endurance => self.endurance,
            Goal::Keto => self.keto,
            Goal::DiabetesManagement => self.diabetes_management,
            Goal::Custom => self.custom,
        }
    }

    /// Validate that every split sums to 100%
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` if any goal's percentages do not sum to 100
    pub fn validate(&self) -> Result<(), ConfigError> {
        for goal in Goal::ALL {
            if self.split_for(goal).total() != 100 {
                return Err(ConfigError::InvalidWeights(
                    "Macro split percentages must sum to 100 for every goal",
                ));
            }
        }
        Ok(())
    }
}
