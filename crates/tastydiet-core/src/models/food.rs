// ABOUTME: Food log entries, per-100g nutritional info, and macro totals
// ABOUTME: Resolves per-100g values into absolute macros for a logged quantity and unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// Meal slot a food was eaten in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
    /// Snack
    Snack,
}

impl MealType {
    /// All meal types in day order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Snack, Self::Dinner];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MealType {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" | "snacks" => Ok(Self::Snack),
            other => Err(AppError::invalid_input(format!("Unknown meal type: {other}"))),
        }
    }
}

/// Absolute macro amounts
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Fiber (g)
    pub fiber_g: f64,
}

impl MacroTotals {
    /// Multiply every field by `factor`
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein_g: self.protein_g * factor,
            carbs_g: self.carbs_g * factor,
            fat_g: self.fat_g * factor,
            fiber_g: self.fiber_g * factor,
        }
    }
}

impl Add for MacroTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein_g: self.protein_g + rhs.protein_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
            fat_g: self.fat_g + rhs.fat_g,
            fiber_g: self.fiber_g + rhs.fiber_g,
        }
    }
}

impl AddAssign for MacroTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for MacroTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Mass unit for a logged quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassUnit {
    /// Grams
    Gram,
    /// Kilograms
    Kilogram,
    /// Milligrams
    Milligram,
}

impl MassUnit {
    /// Parse a free-text unit. Unknown units are treated as grams.
    #[must_use]
    pub fn parse(unit: &str) -> Self {
        match unit.trim().to_lowercase().as_str() {
            "kg" | "kilogram" | "kilograms" => Self::Kilogram,
            "mg" | "milligram" | "milligrams" => Self::Milligram,
            _ => Self::Gram,
        }
    }

    /// Convert a quantity in this unit into grams
    #[must_use]
    pub fn to_grams(self, quantity: f64) -> f64 {
        match self {
            Self::Gram => quantity,
            Self::Kilogram => quantity * 1000.0,
            Self::Milligram => quantity / 1000.0,
        }
    }
}

/// Nutrition facts of a food per 100 g
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionalInfo {
    /// Food name
    pub name: String,
    /// kcal per 100 g
    pub calories_per_100g: f64,
    /// Protein (g) per 100 g
    pub protein_per_100g: f64,
    /// Carbohydrates (g) per 100 g
    pub carbs_per_100g: f64,
    /// Fat (g) per 100 g
    pub fat_per_100g: f64,
    /// Fiber (g) per 100 g
    #[serde(default)]
    pub fiber_per_100g: f64,
}

impl NutritionalInfo {
    /// Per-100g values as a `MacroTotals`
    #[must_use]
    pub const fn per_100g(&self) -> MacroTotals {
        MacroTotals {
            calories: self.calories_per_100g,
            protein_g: self.protein_per_100g,
            carbs_g: self.carbs_per_100g,
            fat_g: self.fat_per_100g,
            fiber_g: self.fiber_per_100g,
        }
    }

    /// Absolute macros for `quantity` of `unit`
    #[must_use]
    pub fn macros_for(&self, quantity: f64, unit: MassUnit) -> MacroTotals {
        self.per_100g().scaled(unit.to_grams(quantity) / 100.0)
    }
}

/// One food consumed by a profile, with pre-multiplied macro values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLogEntry {
    /// Entry identifier
    pub id: i64,
    /// Owning profile
    pub profile_id: i64,
    /// Food name as logged
    pub food_name: String,
    /// Meal slot
    pub meal_type: MealType,
    /// Logged quantity
    pub quantity: f64,
    /// Logged unit
    pub unit: String,
    /// Energy (kcal) for the logged quantity
    pub calories: f64,
    /// Protein (g) for the logged quantity
    pub protein_g: f64,
    /// Carbohydrates (g) for the logged quantity
    pub carbs_g: f64,
    /// Fat (g) for the logged quantity
    pub fat_g: f64,
    /// Fiber (g) for the logged quantity
    #[serde(default)]
    pub fiber_g: f64,
    /// Milliseconds since the Unix epoch
    pub timestamp_ms: i64,
}

impl FoodLogEntry {
    /// Build an entry by resolving per-100g nutrition for the logged quantity
    #[must_use]
    pub fn from_nutritional_info(
        id: i64,
        profile_id: i64,
        info: &NutritionalInfo,
        meal_type: MealType,
        quantity: f64,
        unit: &str,
        timestamp_ms: i64,
    ) -> Self {
        let totals = info.macros_for(quantity, MassUnit::parse(unit));
        Self {
            id,
            profile_id,
            food_name: info.name.clone(),
            meal_type,
            quantity,
            unit: unit.to_owned(),
            calories: totals.calories,
            protein_g: totals.protein_g,
            carbs_g: totals.carbs_g,
            fat_g: totals.fat_g,
            fiber_g: totals.fiber_g,
            timestamp_ms,
        }
    }

    /// Macro values of this entry
    #[must_use]
    pub const fn macros(&self) -> MacroTotals {
        MacroTotals {
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
            fiber_g: self.fiber_g,
        }
    }
}
