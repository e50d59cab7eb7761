// ABOUTME: Meal planning configuration splitting daily targets across meal types
// ABOUTME: Breakfast/lunch/snack/dinner shares in percent of daily targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};
use tastydiet_core::models::MealType;

/// Share of daily targets per meal type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanConfig {
    /// Breakfast share (25%)
    pub breakfast_pct: u8,
    /// Lunch share (35%)
    pub lunch_pct: u8,
    /// Snack share (15%)
    pub snack_pct: u8,
    /// Dinner share (25%)
    pub dinner_pct: u8,
}

impl Default for MealPlanConfig {
    fn default() -> Self {
        Self {
            breakfast_pct: 25,
            lunch_pct: 35,
            snack_pct: 15,
            dinner_pct: 25,
        }
    }
}

impl MealPlanConfig {
    /// Share of daily targets for `meal` as a fraction
    #[must_use]
    pub fn share_for(&self, meal: MealType) -> f64 {
        let pct = match meal {
            MealType::Breakfast => self.breakfast_pct,
            MealType::Lunch => self.lunch_pct,
            MealType::Snack => self.snack_pct,
            MealType::Dinner => self.dinner_pct,
        };
        f64::from(pct) / 100.0
    }

    /// Validate that meal shares sum to 100%
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` if the shares do not sum to 100
    pub fn validate(&self) -> Result<(), ConfigError> {
        let total = u16::from(self.breakfast_pct)
            + u16::from(self.lunch_pct)
            + u16::from(self.snack_pct)
            + u16::from(self.dinner_pct);
        if total != 100 {
            return Err(ConfigError::InvalidWeights(
                "Meal shares must sum to 100",
            ));
        }
        Ok(())
    }
}
