// ABOUTME: Pantry availability checks and stock decrement for cooked recipes
// ABOUTME: Reports missing ingredients and shortfalls, and suggests restocking low items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tastydiet_core::math::safe_ratio;
use tastydiet_core::models::{InventoryItem, Recipe, RecipeIngredient};
use tracing::warn;

/// Which of a recipe's ingredients the pantry holds
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InventoryCheck {
    /// Ingredients found in the pantry
    pub available: Vec<String>,
    /// Ingredients not found
    pub missing: Vec<String>,
}

impl InventoryCheck {
    /// True when nothing is missing
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Fraction of ingredients available (0 for a recipe without ingredients)
    #[must_use]
    pub fn coverage(&self) -> f64 {
        safe_ratio(
            self.available.len() as f64,
            (self.available.len() + self.missing.len()) as f64,
        )
    }
}

/// Split a recipe's free-text ingredients into available and missing
///
/// An ingredient is available only when a matching item has stock left; an
/// item at zero counts as missing.
#[must_use]
pub fn check_availability(recipe: &Recipe, inventory: &[InventoryItem]) -> InventoryCheck {
    let (available, missing) = recipe.ingredient_names().map(str::to_owned).partition(|name| {
        inventory
            .iter()
            .any(|item| item.quantity > 0.0 && item.name_matches(name))
    });
    InventoryCheck { available, missing }
}

/// Why an ingredient could not be taken from the pantry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortfallKind {
    /// No item with this name and unit
    Missing,
    /// Item present but below the required quantity
    Insufficient,
}

/// An ingredient that could not be deducted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shortfall {
    /// Ingredient name
    pub ingredient: String,
    /// Unit requested
    pub unit: String,
    /// Quantity requested
    pub required: f64,
    /// Quantity on hand (0 when missing)
    pub available: f64,
    /// Missing or insufficient
    pub kind: ShortfallKind,
}

/// Deduct cooked ingredients from the pantry
///
/// Items match on name and unit, case-insensitively. An ingredient with too
/// little stock is left untouched and reported, as is one with no matching
/// item.
pub fn consume_ingredients(
    inventory: &mut [InventoryItem],
    required: &[RecipeIngredient],
) -> Vec<Shortfall> {
    let mut shortfalls = Vec::new();

    for ingredient in required {
        let item = inventory.iter_mut().find(|item| {
            item.name.eq_ignore_ascii_case(ingredient.name.trim())
                && item.unit.eq_ignore_ascii_case(ingredient.unit.trim())
        });

        match item {
            Some(item) if item.quantity >= ingredient.quantity => {
                item.quantity -= ingredient.quantity;
            }
            Some(item) => {
                warn!(
                    ingredient = %ingredient.name,
                    needed = ingredient.quantity,
                    available = item.quantity,
                    unit = %ingredient.unit,
                    "Not enough in inventory"
                );
                shortfalls.push(Shortfall {
                    ingredient: ingredient.name.clone(),
                    unit: ingredient.unit.clone(),
                    required: ingredient.quantity,
                    available: item.quantity,
                    kind: ShortfallKind::Insufficient,
                });
            }
            None => {
                warn!(
                    ingredient = %ingredient.name,
                    unit = %ingredient.unit,
                    "Ingredient not found in inventory"
                );
                shortfalls.push(Shortfall {
                    ingredient: ingredient.name.clone(),
                    unit: ingredient.unit.clone(),
                    required: ingredient.quantity,
                    available: 0.0,
                    kind: ShortfallKind::Missing,
                });
            }
        }
    }

    shortfalls
}

/// Low-stock threshold and restock level for one family of units
struct RestockRule {
    below: f64,
    restock_to: f64,
}

const MASS_RULE: RestockRule = RestockRule {
    below: 0.5,
    restock_to: 1.0,
};
const COUNT_RULE: RestockRule = RestockRule {
    below: 2.0,
    restock_to: 5.0,
};
const VOLUME_RULE: RestockRule = RestockRule {
    below: 0.5,
    restock_to: 1.0,
};
const OTHER_RULE: RestockRule = RestockRule {
    below: 1.0,
    restock_to: 2.0,
};

/// Smallest quantity ever suggested for a shopping list
const MIN_RESTOCK: f64 = 1.0;

fn restock_rule(unit: &str) -> &'static RestockRule {
    match unit.trim().to_lowercase().as_str() {
        "g" | "kg" => &MASS_RULE,
        "pcs" | "pieces" => &COUNT_RULE,
        "ml" | "l" | "litre" => &VOLUME_RULE,
        _ => &OTHER_RULE,
    }
}

/// A pantry item running low, with how much to buy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestockSuggestion {
    /// The low item as it stands in the pantry
    pub item: InventoryItem,
    /// Quantity to add, in the item's unit
    pub suggested_quantity: f64,
}

/// Pantry items below their unit's low-stock threshold, in pantry order
#[must_use]
pub fn low_stock(inventory: &[InventoryItem]) -> Vec<RestockSuggestion> {
    inventory
        .iter()
        .filter_map(|item| {
            let rule = restock_rule(&item.unit);
            (item.quantity < rule.below).then(|| RestockSuggestion {
                item: item.clone(),
                suggested_quantity: (rule.restock_to - item.quantity).max(MIN_RESTOCK),
            })
        })
        .collect()
}
