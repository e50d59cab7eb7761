// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup plus profile, recipe, and food log builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::too_many_arguments
)]
//! Shared test utilities for `tastydiet`

use std::env;
use std::sync::Once;
use tastydiet::models::{
    DailyTargets, FamilyMemberGoals, FoodLogEntry, InventoryItem, MealType, Recipe, RecipeRating,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Targets used across remaining-macro tests
pub fn daily_targets(calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> DailyTargets {
    DailyTargets {
        calories,
        protein_g,
        carbs_g,
        fat_g,
        fiber_g: 25.0,
    }
}

/// Food log entry with explicit macros
pub fn log_entry(
    id: i64,
    profile_id: i64,
    meal_type: MealType,
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    timestamp_ms: i64,
) -> FoodLogEntry {
    FoodLogEntry {
        id,
        profile_id,
        food_name: format!("food {id}"),
        meal_type,
        quantity: 1.0,
        unit: "serving".into(),
        calories,
        protein_g,
        carbs_g,
        fat_g,
        fiber_g: 0.0,
        timestamp_ms,
    }
}

/// Recipe with per-100g nutrition and a comma-separated ingredient list
pub fn recipe(
    id: i64,
    name: &str,
    category: &str,
    (calories, protein, carbs, fat): (f64, f64, f64, f64),
    is_vegetarian: bool,
    ingredients: &str,
    rating: RecipeRating,
) -> Recipe {
    Recipe {
        id,
        name: name.into(),
        category: category.into(),
        cuisine: "Indian".into(),
        calories_per_100g: calories,
        protein_per_100g: protein,
        carbs_per_100g: carbs,
        fat_per_100g: fat,
        fiber_per_100g: 2.0,
        is_vegetarian,
        ingredients: ingredients.into(),
        rating,
    }
}

/// Household member goals
pub fn member(name: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> FamilyMemberGoals {
    FamilyMemberGoals {
        name: name.into(),
        calorie_goal: calories,
        protein_goal_g: protein,
        carbs_goal_g: carbs,
        fat_goal_g: fat,
    }
}

/// Pantry with one generic item per name
pub fn pantry(names: &[&str]) -> Vec<InventoryItem> {
    names
        .iter()
        .map(|name| InventoryItem::new(*name, 1.0, "kg", "Pantry"))
        .collect()
}
