// ABOUTME: Nutrition engine facade binding the calculators to one validated configuration
// ABOUTME: Adds tracing spans around each operation so callers get request-level context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine facade
//!
//! [`NutritionEngine`] owns an [`IntelligenceConfig<true>`] and forwards to the
//! pure calculators in `tastydiet_intelligence`. It carries no other state and
//! is cheap to clone.

use tastydiet_core::errors::AppResult;
use tastydiet_core::models::{DailyTargets, FoodLogEntry, InventoryItem, Profile, Recipe};
use tastydiet_intelligence::config::IntelligenceConfig;
use tastydiet_intelligence::macro_targets::{
    calculate_macro_targets, recalculate_targets, MacroTargetBreakdown,
};
use tastydiet_intelligence::meal_planner::{meal_targets, plan_day, DayPlan, MealTarget};
use tastydiet_intelligence::recipe_scoring::{suggest_recipes, RankedRecipe, SuggestionRequest};
use tastydiet_intelligence::remaining_macros::{
    calculate_remaining, dinner_catalog, suggest_dinners, DayWindow, DinnerSuggestion,
    DinnerTemplate, RemainingMacroSnapshot,
};
use tracing::{info, instrument};

/// Entry point for every nutrition calculation
#[derive(Debug, Clone)]
pub struct NutritionEngine {
    config: IntelligenceConfig<true>,
    dinners: Vec<DinnerTemplate>,
}

impl Default for NutritionEngine {
    fn default() -> Self {
        Self::new(IntelligenceConfig::default())
    }
}

impl NutritionEngine {
    /// Engine with an explicit configuration and the built-in dinner catalog
    #[must_use]
    pub fn new(config: IntelligenceConfig<true>) -> Self {
        Self {
            config,
            dinners: dinner_catalog(),
        }
    }

    /// Engine using the process-wide configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(IntelligenceConfig::global().clone())
    }

    /// Replace the dinner catalog
    #[must_use]
    pub fn with_dinner_catalog(mut self, dinners: Vec<DinnerTemplate>) -> Self {
        self.dinners = dinners;
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig<true> {
        &self.config
    }

    /// Compute targets without touching the profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfileInput` for unusable biometrics or goal settings
    #[instrument(skip(self, profile), fields(profile_id = profile.id, goal = %profile.goal))]
    pub fn calculate_targets(&self, profile: &Profile) -> AppResult<MacroTargetBreakdown> {
        calculate_macro_targets(profile, &self.config.nutrition)
    }

    /// Compute targets and store them on the profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfileInput` for unusable biometrics or goal settings
    #[instrument(skip(self, profile), fields(profile_id = profile.id, goal = %profile.goal))]
    pub fn recalculate_targets(&self, profile: &mut Profile) -> AppResult<MacroTargetBreakdown> {
        let breakdown = recalculate_targets(profile, &self.config.nutrition)?;
        info!(calories = breakdown.calories, "Stored recalculated targets");
        Ok(breakdown)
    }

    /// Remaining macros for a profile inside `window`
    #[must_use]
    #[instrument(skip(self, profile, entries), fields(profile_id = profile.id, entries = entries.len()))]
    pub fn remaining(
        &self,
        profile: &Profile,
        entries: &[FoodLogEntry],
        window: &DayWindow,
    ) -> RemainingMacroSnapshot {
        calculate_remaining(
            &profile.targets,
            profile.id,
            entries,
            window,
            &self.config.remaining,
        )
    }

    /// Dinners from the catalog that fit what is left
    #[must_use]
    pub fn dinner_suggestions(&self, snapshot: &RemainingMacroSnapshot) -> Vec<DinnerSuggestion> {
        suggest_dinners(snapshot, &self.dinners, &self.config.remaining)
    }

    /// Rank recipes for a household
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the requested day cannot be resolved
    #[instrument(skip(self, request), fields(recipes = request.recipes.len(), members = request.members.len()))]
    pub fn rank_recipes(&self, request: &SuggestionRequest<'_>) -> AppResult<Vec<RankedRecipe>> {
        suggest_recipes(request, &self.config.scoring)
    }

    /// Per-meal share of daily targets
    #[must_use]
    pub fn meal_targets(&self, targets: &DailyTargets) -> Vec<MealTarget> {
        meal_targets(targets, &self.config.meal_plan)
    }

    /// One-day plan from the given recipes
    #[must_use]
    #[instrument(skip_all, fields(recipes = recipes.len()))]
    pub fn plan_day(
        &self,
        targets: &DailyTargets,
        recipes: &[Recipe],
        inventory: &[InventoryItem],
    ) -> DayPlan {
        plan_day(targets, recipes, inventory, &self.config.meal_plan)
    }
}
