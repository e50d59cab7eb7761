// ABOUTME: Household inventory item model
// ABOUTME: Name-based lookup used by availability checks and stock decrement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// An item in the household pantry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Item name
    pub name: String,
    /// Quantity on hand
    pub quantity: f64,
    /// Unit of `quantity`
    pub unit: String,
    /// Category (e.g. "Vegetables", "Dairy")
    #[serde(default)]
    pub category: String,
}

impl InventoryItem {
    /// Create an inventory item
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            category: category.into(),
        }
    }

    /// Best-effort name match: case-insensitive substring in either direction
    #[must_use]
    pub fn name_matches(&self, ingredient: &str) -> bool {
        let item = self.name.trim().to_lowercase();
        let ingredient = ingredient.trim().to_lowercase();
        if item.is_empty() || ingredient.is_empty() {
            return false;
        }
        item.contains(&ingredient) || ingredient.contains(&item)
    }
}
