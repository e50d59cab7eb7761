// ABOUTME: Splits daily targets across meal types and builds a one-day meal plan
// ABOUTME: Picks a recipe per meal by calorie match and shares cooked dishes across the household
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Daily Meal Planner
//!
//! Each meal gets a fixed share of the daily targets. For every meal the
//! planner prefers recipes named or categorized for that meal, then recipes
//! whose ingredients are all in the pantry, and finally picks the one whose
//! per-100g calories sit closest to the meal's calorie target.

use crate::config::MealPlanConfig;
use crate::inventory::{check_availability, InventoryCheck};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tastydiet_core::math::safe_ratio;
use tastydiet_core::models::{
    DailyTargets, FamilyMemberGoals, InventoryItem, MacroTotals, MealType, Recipe, RecipeRating,
};
use tracing::debug;

/// Portion used when a recipe carries no calories
const DEFAULT_PORTION_G: f64 = 100.0;

/// Absolute targets for one meal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealTarget {
    /// Meal slot
    pub meal_type: MealType,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

/// Share daily targets across breakfast, lunch, snack, and dinner
#[must_use]
pub fn meal_targets(targets: &DailyTargets, config: &MealPlanConfig) -> Vec<MealTarget> {
    MealType::ALL
        .into_iter()
        .map(|meal_type| {
            let share = config.share_for(meal_type);
            MealTarget {
                meal_type,
                calories: targets.calories * share,
                protein_g: targets.protein_g * share,
                carbs_g: targets.carbs_g * share,
                fat_g: targets.fat_g * share,
            }
        })
        .collect()
}

/// A recipe chosen for one meal with its portion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedMeal {
    /// Meal slot
    pub meal_type: MealType,
    /// Chosen recipe id
    pub recipe_id: i64,
    /// Chosen recipe name
    pub recipe_name: String,
    /// Portion in grams
    pub portion_g: f64,
    /// Macros of the portion
    pub macros: MacroTotals,
    /// Pantry check for the recipe
    pub availability: InventoryCheck,
}

/// A one-day plan
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DayPlan {
    /// Planned meals in day order
    pub meals: Vec<PlannedMeal>,
    /// Sum over all meals
    pub totals: MacroTotals,
}

fn calorie_distance(recipe: &Recipe, target_kcal: f64) -> f64 {
    (recipe.calories_per_100g - target_kcal).abs()
}

fn pick_recipe<'a>(
    candidates: &[&'a Recipe],
    target_kcal: f64,
    inventory: &[InventoryItem],
) -> Option<&'a Recipe> {
    let stocked: Vec<&Recipe> = candidates
        .iter()
        .copied()
        .filter(|r| check_availability(r, inventory).is_complete())
        .collect();
    let pool = if stocked.is_empty() {
        candidates
    } else {
        stocked.as_slice()
    };

    pool.iter()
        .copied()
        .min_by(|a, b| {
            calorie_distance(a, target_kcal)
                .partial_cmp(&calorie_distance(b, target_kcal))
                .unwrap_or(Ordering::Equal)
                .then(a.id.cmp(&b.id))
        })
}

/// Portion in grams delivering `target_kcal` of `recipe`
#[must_use]
pub fn portion_for(recipe: &Recipe, target_kcal: f64) -> f64 {
    if recipe.calories_per_100g > 0.0 {
        target_kcal / recipe.calories_per_100g * 100.0
    } else {
        DEFAULT_PORTION_G
    }
}

/// Build a plan for one day
///
/// Disliked recipes and recipes with invalid nutrition are never planned. A
/// meal with no usable recipe is left out, so an empty recipe list yields an
/// empty plan with zero totals.
#[must_use]
pub fn plan_day(
    targets: &DailyTargets,
    recipes: &[Recipe],
    inventory: &[InventoryItem],
    config: &MealPlanConfig,
) -> DayPlan {
    let usable: Vec<&Recipe> = recipes
        .iter()
        .filter(|r| r.rating != RecipeRating::Disliked)
        .filter(|r| r.validate_nutrients().is_ok())
        .collect();

    let mut plan = DayPlan::default();
    for target in meal_targets(targets, config) {
        let for_meal: Vec<&Recipe> = usable
            .iter()
            .copied()
            .filter(|r| r.matches_keyword(target.meal_type.label()))
            .collect();
        let candidates = if for_meal.is_empty() {
            &usable
        } else {
            &for_meal
        };

        let Some(recipe) = pick_recipe(candidates, target.calories, inventory) else {
            continue;
        };

        let portion_g = portion_for(recipe, target.calories);
        let macros = recipe.per_100g().scaled(portion_g / 100.0);
        plan.totals += macros;
        plan.meals.push(PlannedMeal {
            meal_type: target.meal_type,
            recipe_id: recipe.id,
            recipe_name: recipe.name.clone(),
            portion_g,
            macros,
            availability: check_availability(recipe, inventory),
        });
    }

    debug!(
        meals = plan.meals.len(),
        total_kcal = plan.totals.calories,
        "Planned day"
    );
    plan
}

/// One diner's share of a dish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portion {
    /// Member name, or `guestN` for the N-th guest
    pub diner: String,
    /// Grams served
    pub grams: f64,
    /// Energy served (kcal)
    pub calories: f64,
}

/// Split a cooked dish across members and guests by daily calorie goal
///
/// Members come first in the given order, then `guest1..=guestN`. A dish
/// without calories, or a table whose goals sum to zero, gets zero portions.
#[must_use]
pub fn portions(
    members: &[FamilyMemberGoals],
    guest_count: usize,
    guest_calorie_goal: f64,
    dish_calories: f64,
    dish_weight_g: f64,
) -> Vec<Portion> {
    let diners: Vec<(String, f64)> = members
        .iter()
        .map(|m| (m.name.clone(), m.calorie_goal.max(0.0)))
        .chain((1..=guest_count).map(|n| (format!("guest{n}"), guest_calorie_goal.max(0.0))))
        .collect();
    let total_goal: f64 = diners.iter().map(|(_, goal)| goal).sum();
    let has_dish = dish_calories > 0.0;

    diners
        .into_iter()
        .map(|(diner, goal)| {
            let share = if has_dish {
                safe_ratio(goal, total_goal)
            } else {
                0.0
            };
            Portion {
                diner,
                grams: share * dish_weight_g,
                calories: share * dish_calories,
            }
        })
        .collect()
}
