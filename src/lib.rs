// ABOUTME: Main library entry point for the TastyDiet nutrition engine
// ABOUTME: Re-exports the core models and calculators and adds logging and the engine facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `TastyDiet`
//!
//! Nutrition engine for a home meal-planning app.
//!
//! ## Features
//!
//! - **Macro targets**: Mifflin-St Jeor BMR, activity-scaled TDEE, goal-driven calorie and macro targets
//! - **Remaining macros**: Today's consumption against targets, with a recommendation and dinner ideas
//! - **Recipe ranking**: Household-aware recipe scores from preferences, macros, pantry, and diet schedule
//! - **Meal planning**: Per-meal targets and a one-day plan
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use tastydiet::engine::NutritionEngine;
//! use tastydiet::models::{Goal, Profile, Sex};
//! use tastydiet::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let engine = NutritionEngine::from_global();
//!     let mut profile = Profile::new(1, "Asha", 30, 165.0, 68.0, Sex::Female)
//!         .with_goal(Goal::WeightLoss, 12);
//!     let breakdown = engine.recalculate_targets(&mut profile)?;
//!     println!("Daily calories: {:.0}", breakdown.calories);
//!     Ok(())
//! }
//! ```

/// Calculator facade bound to one configuration
pub mod engine;

/// Structured logging setup
pub mod logging;

pub use tastydiet_core::models;
pub use tastydiet_intelligence as intelligence;

pub use engine::NutritionEngine;
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use tastydiet_core::errors::{AppError, AppResult, ErrorCode};
