// ABOUTME: Domain models shared by the calculators and their callers
// ABOUTME: Re-exports profile, food log, recipe, inventory, diet, and family types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain models. All models are plain data and serialize with serde so
//! storage and UI collaborators can exchange them as JSON.

/// Weekly diet preference schedule
pub mod diet;
/// Family member goals
pub mod family;
/// Food log entries and per-100g nutrition
pub mod food;
/// Pantry inventory
pub mod inventory;
/// Profiles, goals, activity levels, and targets
pub mod profile;
/// Recipes and ratings
pub mod recipe;

pub use diet::{DietPreference, WeeklyDietPreference};
pub use family::{AverageGoals, FamilyMemberGoals};
pub use food::{FoodLogEntry, MacroTotals, MassUnit, MealType, NutritionalInfo};
pub use inventory::InventoryItem;
pub use profile::{
    goal_duration_label, ActivityLevel, BmiCategory, DailyTargets, Goal, Profile, Sex,
    TargetSource,
};
pub use recipe::{Recipe, RecipeIngredient, RecipeRating};
