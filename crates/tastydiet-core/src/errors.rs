// ABOUTME: Unified error types shared by every TastyDiet crate
// ABOUTME: Defines ErrorCode, AppError with structured details, and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! The calculators are pure functions, so the taxonomy is small:
//!
//! - **Invalid input** - malformed profile or recipe data detected before any arithmetic
//! - **Configuration** - policy tables that fail validation
//!
//! Division by a possibly-zero denominator is not an error: see [`crate::math::safe_ratio`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Generic invalid input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Profile has non-positive height, weight, age, or goal duration
    #[serde(rename = "INVALID_PROFILE_INPUT")]
    InvalidProfileInput = 3001,
    /// Recipe carries negative or non-finite nutrient values
    #[serde(rename = "INVALID_RECIPE_DATA")]
    InvalidRecipeData = 3002,

    // Configuration (6000-6999)
    /// Configuration failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidProfileInput => {
                "Profile height, weight, age and goal duration must be positive"
            }
            Self::InvalidRecipeData => "Recipe nutrition data is invalid",
            Self::ConfigInvalid => "Configuration is invalid",
        }
    }

    /// Whether the caller can fix this error by correcting its input
    #[must_use]
    pub const fn is_client_error(self) -> bool {
        matches!(
            self,
            Self::InvalidInput | Self::InvalidProfileInput | Self::InvalidRecipeData
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured key-value details (field names, offending values)
    pub details: Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Value::Object(Map::new()),
            source: None,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Attach a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Generic invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Profile data rejected before any arithmetic
    pub fn invalid_profile(field: &str, value: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvalidProfileInput,
            format!("{field} must be positive and finite, got {value}"),
        )
        .with_details(serde_json::json!({ "field": field, "value": value.to_string() }))
    }

    /// Recipe data rejected by the scoring heuristic
    pub fn invalid_recipe(recipe_id: i64, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRecipeData, message)
            .with_details(serde_json::json!({ "recipe_id": recipe_id }))
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
