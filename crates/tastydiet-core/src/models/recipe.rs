// ABOUTME: Recipe model with per-100g nutrition and a three-state rating
// ABOUTME: Free-text ingredient parsing and nutrient validation for scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::food::MacroTotals;
use serde::{Deserialize, Serialize};

/// How the family rated a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecipeRating {
    /// Explicitly liked
    Liked,
    /// Explicitly disliked
    Disliked,
    /// Never rated
    #[default]
    Unrated,
}

impl RecipeRating {
    /// Convert the legacy nullable liked flag
    #[must_use]
    pub const fn from_liked_flag(liked: Option<bool>) -> Self {
        match liked {
            Some(true) => Self::Liked,
            Some(false) => Self::Disliked,
            None => Self::Unrated,
        }
    }
}

/// A structured recipe ingredient with an amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Ingredient name
    pub name: String,
    /// Required amount
    pub quantity: f64,
    /// Unit of `quantity`
    pub unit: String,
}

impl RecipeIngredient {
    /// Create an ingredient requirement
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

/// A recipe with nutrition normalized to 100 g
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe identifier
    pub id: i64,
    /// Recipe name
    pub name: String,
    /// Category (e.g. "Breakfast", "Main Course")
    #[serde(default)]
    pub category: String,
    /// Cuisine (e.g. "Indian")
    #[serde(default)]
    pub cuisine: String,
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
    /// Vegetarian flag
    pub is_vegetarian: bool,
    /// Comma-separated ingredient names
    #[serde(default)]
    pub ingredients: String,
    /// Family rating
    #[serde(default)]
    pub rating: RecipeRating,
}

impl Recipe {
    /// Ingredient names split on commas, trimmed, empties dropped
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Per-100g nutrition as `MacroTotals`
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

    /// Reject negative or non-finite nutrient values
    ///
    /// # Errors
    ///
    /// Returns `InvalidRecipeData` naming the first offending field
    pub fn validate_nutrients(&self) -> AppResult<()> {
        let fields = [
            ("calories_per_100g", self.calories_per_100g),
            ("protein_per_100g", self.protein_per_100g),
            ("carbs_per_100g", self.carbs_per_100g),
            ("fat_per_100g", self.fat_per_100g),
            ("fiber_per_100g", self.fiber_per_100g),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::invalid_recipe(
                    self.id,
                    format!("Recipe '{}' has invalid {field}: {value}", self.name),
                ));
            }
        }
        Ok(())
    }

    /// Whether the category or name mentions `keyword` (case-insensitive)
    #[must_use]
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.category.to_lowercase().contains(&keyword)
            || self.name.to_lowercase().contains(&keyword)
    }
}
