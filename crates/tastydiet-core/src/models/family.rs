// ABOUTME: Per-member daily macro goals used when ranking recipes for a household
// ABOUTME: Built directly or from a profile's stored targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::math::mean;
use crate::models::profile::Profile;
use serde::{Deserialize, Serialize};

/// Daily goals of one family member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMemberGoals {
    /// Member name
    pub name: String,
    /// Daily calories (kcal)
    pub calorie_goal: f64,
    /// Daily protein (g)
    pub protein_goal_g: f64,
    /// Daily carbohydrates (g)
    pub carbs_goal_g: f64,
    /// Daily fat (g)
    pub fat_goal_g: f64,
}

impl From<&Profile> for FamilyMemberGoals {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            calorie_goal: profile.targets.calories,
            protein_goal_g: profile.targets.protein_g,
            carbs_goal_g: profile.targets.carbs_g,
            fat_goal_g: profile.targets.fat_g,
        }
    }
}

/// Household average of each goal
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AverageGoals {
    /// Mean calories (kcal)
    pub calories: f64,
    /// Mean protein (g)
    pub protein_g: f64,
    /// Mean carbohydrates (g)
    pub carbs_g: f64,
    /// Mean fat (g)
    pub fat_g: f64,
}

impl AverageGoals {
    /// Average the goals of `members` (all zero when empty)
    #[must_use]
    pub fn of(members: &[FamilyMemberGoals]) -> Self {
        let column = |f: fn(&FamilyMemberGoals) -> f64| -> f64 {
            mean(&members.iter().map(f).collect::<Vec<_>>())
        };
        Self {
            calories: column(|m| m.calorie_goal),
            protein_g: column(|m| m.protein_goal_g),
            carbs_g: column(|m| m.carbs_goal_g),
            fat_g: column(|m| m.fat_goal_g),
        }
    }
}
