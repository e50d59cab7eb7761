// ABOUTME: Core types and constants for the TastyDiet nutrition engine
// ABOUTME: Foundation crate with error handling, guarded arithmetic, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `TastyDiet` Core
//!
//! Foundation crate providing shared types for the `TastyDiet` nutrition engine.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy conversion factors and BMI thresholds
//! - **math**: Division-guarded ratio helpers
//! - **models**: Profiles, food log entries, recipes, inventory, and diet preferences

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrition constants (kcal per gram, kcal per kg of body fat, BMI thresholds)
pub mod constants;

/// Guarded arithmetic helpers that never produce NaN or infinity
pub mod math;

/// Core data models (Profile, FoodLogEntry, Recipe, InventoryItem, etc.)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
