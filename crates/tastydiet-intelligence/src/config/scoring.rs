// ABOUTME: Recipe scoring configuration with fixed point values per sub-score
// ABOUTME: Liked bonus, macro balance bounds, inventory and calorie tiers, diet match points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe Scoring Configuration
//!
//! Scores are integers used only for relative ordering. Tier tables are
//! evaluated top-down and the first matching tier wins.

use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};

/// A threshold paired with the points it awards
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreTier {
    /// Threshold (fraction, 0-1)
    pub threshold: f64,
    /// Points awarded when the tier matches
    pub points: u32,
}

impl ScoreTier {
    /// Create a tier
    #[must_use]
    pub const fn new(threshold: f64, points: u32) -> Self {
        Self { threshold, points }
    }
}

/// Absolute gram bounds for one macro-balance tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroBalanceBounds {
    /// Max |protein delta| in grams (exclusive)
    pub protein_g: f64,
    /// Max |carbs delta| in grams (exclusive)
    pub carbs_g: f64,
    /// Max |fat delta| in grams (exclusive)
    pub fat_g: f64,
    /// Points when all deltas are inside the bounds
    pub points: u32,
}

/// Recipe scoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Bonus for recipes the family liked (+10)
    pub liked_bonus: u32,
    /// Tight macro balance bounds (10/20/10 g, +20)
    pub macro_balance_tight: MacroBalanceBounds,
    /// Loose macro balance bounds (20/40/20 g, +10)
    pub macro_balance_loose: MacroBalanceBounds,
    /// Inventory coverage tiers, minimum fraction available (>= 0.8/0.6/0.4)
    pub inventory_tiers: Vec<ScoreTier>,
    /// Points when the recipe matches a strict veg/non-veg day (+15)
    pub diet_strict_match: u32,
    /// Points on a mixed day (+5)
    pub diet_mixed: u32,
    /// Calorie deviation tiers, maximum relative deviation (< 0.1/0.2/0.3)
    pub calorie_tiers: Vec<ScoreTier>,
    /// Number of ranked recipes returned (5)
    pub top_n: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            liked_bonus: 10,
            macro_balance_tight: MacroBalanceBounds {
                protein_g: 10.0,
                carbs_g: 20.0,
                fat_g: 10.0,
                points: 20,
            },
            macro_balance_loose: MacroBalanceBounds {
                protein_g: 20.0,
                carbs_g: 40.0,
                fat_g: 20.0,
                points: 10,
            },
            inventory_tiers: vec![
                ScoreTier::new(0.8, 5),
                ScoreTier::new(0.6, 3),
                ScoreTier::new(0.4, 1),
            ],
            diet_strict_match: 15,
            diet_mixed: 5,
            calorie_tiers: vec![
                ScoreTier::new(0.1, 10),
                ScoreTier::new(0.2, 5),
                ScoreTier::new(0.3, 2),
            ],
            top_n: 5,
        }
    }
}

impl ScoringConfig {
    /// Validate tier ordering and limits
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if tiers are not ordered or `top_n` is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tight = &self.macro_balance_tight;
        let loose = &self.macro_balance_loose;
        if tight.protein_g > loose.protein_g
            || tight.carbs_g > loose.carbs_g
            || tight.fat_g > loose.fat_g
        {
            return Err(ConfigError::InvalidRange(
                "tight macro balance bounds must be within loose bounds",
            ));
        }
        if !self
            .inventory_tiers
            .windows(2)
            .all(|w| w[0].threshold > w[1].threshold)
        {
            return Err(ConfigError::InvalidRange(
                "inventory tiers must be in descending threshold order",
            ));
        }
        if !self
            .calorie_tiers
            .windows(2)
            .all(|w| w[0].threshold < w[1].threshold)
        {
            return Err(ConfigError::InvalidRange(
                "calorie tiers must be in ascending deviation order",
            ));
        }
        if self.top_n == 0 {
            return Err(ConfigError::ValueOutOfRange("top_n must be at least 1"));
        }
        Ok(())
    }
}
