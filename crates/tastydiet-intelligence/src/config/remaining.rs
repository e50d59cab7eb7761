// ABOUTME: Remaining-macro tracking configuration
// ABOUTME: Progress thresholds, recommendation messages, and dinner suggestion limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Remaining-macro calculator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemainingMacrosConfig {
    /// Progress thresholds for the recommendation state
    pub thresholds: ProgressThresholds,
    /// Dinner suggestion filtering and limits
    pub dinner: DinnerSuggestionConfig,
    /// Fixed message per recommendation state
    pub messages: RecommendationMessages,
}

impl RemainingMacrosConfig {
    /// Validate thresholds and limits
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if thresholds are out of order or limits are zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thresholds;
        if t.close_min_pct <= 0.0 || t.close_min_pct >= t.exceeded_pct {
            return Err(ConfigError::InvalidRange(
                "close_min_pct must be positive and < exceeded_pct",
            ));
        }
        if !(0.0..=1.0).contains(&self.dinner.min_protein_fraction) {
            return Err(ConfigError::ValueOutOfRange(
                "min_protein_fraction must be between 0 and 1",
            ));
        }
        if self.dinner.max_suggestions == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_suggestions must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Progress percentage thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressThresholds {
    /// Calorie and protein progress at or above this is "close to target" (70%)
    pub close_min_pct: f64,
    /// Any macro above this is "exceeded" (120%)
    pub exceeded_pct: f64,
}

impl Default for ProgressThresholds {
    fn default() -> Self {
        Self {
            close_min_pct: 70.0,
            exceeded_pct: 120.0,
        }
    }
}

/// Dinner suggestion settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DinnerSuggestionConfig {
    /// Preferred templates carry at least this fraction of remaining protein (0.5)
    pub min_protein_fraction: f64,
    /// Maximum suggestions returned (5)
    pub max_suggestions: usize,
}

impl Default for DinnerSuggestionConfig {
    fn default() -> Self {
        Self {
            min_protein_fraction: 0.5,
            max_suggestions: 5,
        }
    }
}

/// Message shown for each recommendation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationMessages {
    /// Any macro above the exceeded threshold
    pub targets_exceeded: String,
    /// Calories and protein within the close-to-target band
    pub close_to_targets: String,
    /// Nothing logged today
    pub no_meals_logged: String,
    /// Exactly one meal type logged
    pub one_meal_logged: String,
    /// Two or more meal types logged
    pub several_meals_logged: String,
}

impl Default for RecommendationMessages {
    fn default() -> Self {
        Self {
            targets_exceeded:
                "You've exceeded your daily targets. Consider lighter dinner options.".into(),
            close_to_targets: "Great progress! You're close to meeting your daily targets."
                .into(),
            no_meals_logged: "Start your day by logging your breakfast!".into(),
            one_meal_logged: "Good start! Log your lunch to get dinner suggestions.".into(),
            several_meals_logged: "Log your meals to get personalized dinner suggestions."
                .into(),
        }
    }
}
