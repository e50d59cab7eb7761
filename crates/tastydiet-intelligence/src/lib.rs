// ABOUTME: Nutrition intelligence for TastyDiet: macro targets, remaining macros, recipe ranking
// ABOUTME: Pure calculators driven by a validated policy configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `TastyDiet` Intelligence
//!
//! Calculators are synchronous, hold no state, and take fully materialized
//! inputs. Policy constants live in [`config::IntelligenceConfig`].
//!
//! ## Modules
//!
//! - **config**: Policy tables, validation, and environment overrides
//! - **analytics**: Per-day history, weekly and monthly summaries
//! - **`macro_targets`**: BMR, TDEE, and daily calorie and macro targets
//! - **`remaining_macros`**: Today's consumption, remaining macros, dinner suggestions
//! - **`recipe_scoring`**: Recipe desirability scores and ranking
//! - **`meal_planner`**: Per-meal targets, one-day plans, household portions
//! - **inventory**: Pantry availability, stock decrement, restock suggestions

/// Period analytics
pub mod analytics;
/// Policy configuration
pub mod config;
/// Pantry availability and decrement
pub mod inventory;
/// Macro target calculator
pub mod macro_targets;
/// Per-meal targets and day plans
pub mod meal_planner;
/// Recipe scoring heuristic
pub mod recipe_scoring;
/// Remaining-macro calculator
pub mod remaining_macros;

pub use analytics::{
    daily_history, monthly_summary, period_summary, DailyNutrition, MonthlySummary, PeriodSummary,
};
pub use config::{ConfigError, IntelligenceConfig};
pub use inventory::{
    check_availability, consume_ingredients, low_stock, InventoryCheck, RestockSuggestion,
    Shortfall, ShortfallKind,
};
pub use macro_targets::{
    calculate_bmr, calculate_calorie_target, calculate_macro_targets, calculate_tdee,
    macro_split, recalculate_targets, BodyMetrics, CalorieTarget, EnergyAdjustment,
    MacroTargetBreakdown,
};
pub use meal_planner::{
    meal_targets, plan_day, portions, DayPlan, MealTarget, PlannedMeal, Portion,
};
pub use recipe_scoring::{
    score_recipe, suggest_recipes, DaySelection, RankedRecipe, RecipeScore, ScoreBreakdown,
    SuggestionRequest,
};
pub use remaining_macros::{
    calculate_remaining, dinner_catalog, recommendation, suggest_dinners, sum_consumed,
    ConsumedSummary, DayWindow, DinnerSuggestion, DinnerTemplate, MacroProgress, Recommendation,
    RemainingMacroSnapshot,
};
