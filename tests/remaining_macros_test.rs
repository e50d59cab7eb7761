// ABOUTME: Integration tests for remaining-macro snapshots and dinner suggestions
// ABOUTME: Covers day windows, progress percentages, recommendation states, and catalog filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp, clippy::unreadable_literal)]

mod common;

use chrono::{FixedOffset, NaiveDate};
use common::{daily_targets, log_entry};
use tastydiet::intelligence::remaining_macros::{
    DayWindow, DinnerTemplate, Recommendation, RemainingMacroSnapshot,
};
use tastydiet::models::{
    DailyTargets, FoodLogEntry, MealType, NutritionalInfo, Profile, Sex,
};
use tastydiet::NutritionEngine;

const EPS: f64 = 1e-9;
const DAY_MS: i64 = 86_400_000;

fn engine() -> NutritionEngine {
    common::init_test_logging();
    NutritionEngine::default()
}

fn window() -> DayWindow {
    DayWindow {
        start_ms: 10 * DAY_MS,
        end_ms: 11 * DAY_MS,
    }
}

fn profile_with(targets: DailyTargets) -> Profile {
    let mut profile = Profile::new(1, "Kiran", 35, 170.0, 72.0, Sex::Male);
    profile.override_targets(targets);
    profile
}

fn at(hour: i64) -> i64 {
    10 * DAY_MS + hour * 3_600_000
}

fn snapshot(targets: DailyTargets, entries: &[FoodLogEntry]) -> RemainingMacroSnapshot {
    engine().remaining(&profile_with(targets), entries, &window())
}

#[test]
fn test_remaining_and_progress() {
    let entries = [
        log_entry(1, 1, MealType::Breakfast, 500.0, 25.0, 60.0, 15.0, at(8)),
        log_entry(2, 1, MealType::Lunch, 700.0, 35.0, 90.0, 20.0, at(13)),
    ];
    let snap = snapshot(daily_targets(2000.0, 100.0, 250.0, 60.0), &entries);

    assert!(snap.targets_set);
    assert!((snap.consumed.calories - 1200.0).abs() < EPS);
    assert!((snap.remaining.calories - 800.0).abs() < EPS);
    assert!((snap.remaining.protein_g - 40.0).abs() < EPS);
    assert!((snap.progress.calories_pct - 60.0).abs() < EPS);
    assert!((snap.progress.protein_pct - 60.0).abs() < EPS);
    assert_eq!(snap.meals_logged, 2);
    assert_eq!(
        snap.recommendation,
        Recommendation::PartialProgress { meals_logged: 2 }
    );
}

#[test]
fn test_entries_outside_window_or_profile_are_ignored() {
    let entries = [
        log_entry(1, 1, MealType::Dinner, 600.0, 30.0, 50.0, 20.0, at(-1)),
        log_entry(2, 1, MealType::Dinner, 600.0, 30.0, 50.0, 20.0, at(24)),
        log_entry(3, 2, MealType::Lunch, 600.0, 30.0, 50.0, 20.0, at(12)),
        log_entry(4, 1, MealType::Snack, 150.0, 5.0, 20.0, 5.0, at(0)),
    ];
    let snap = snapshot(daily_targets(2000.0, 100.0, 250.0, 60.0), &entries);

    assert!((snap.consumed.calories - 150.0).abs() < EPS);
    assert_eq!(snap.meals_logged, 1);
    let engine = NutritionEngine::default();
    let messages = &engine.config().remaining.messages;
    assert_eq!(
        snap.recommendation.message(messages),
        messages.one_meal_logged
    );
}

#[test]
fn test_remaining_goes_negative_when_exceeded() {
    let entries = [log_entry(
        1,
        1,
        MealType::Dinner,
        2500.0,
        90.0,
        300.0,
        70.0,
        at(20),
    )];
    let snap = snapshot(daily_targets(2000.0, 100.0, 250.0, 60.0), &entries);

    assert!((snap.remaining.calories + 500.0).abs() < EPS);
    assert!((snap.progress.calories_pct - 125.0).abs() < EPS);
    assert_eq!(snap.recommendation, Recommendation::TargetsExceeded);
}

#[test]
fn test_close_to_targets_needs_calories_and_protein_in_band() {
    let close = [log_entry(1, 1, MealType::Lunch, 1600.0, 80.0, 100.0, 30.0, at(12))];
    let snap = snapshot(daily_targets(2000.0, 100.0, 250.0, 60.0), &close);
    assert_eq!(snap.recommendation, Recommendation::CloseToTargets);

    let low_protein = [log_entry(1, 1, MealType::Lunch, 1600.0, 40.0, 100.0, 30.0, at(12))];
    let snap = snapshot(daily_targets(2000.0, 100.0, 250.0, 60.0), &low_protein);
    assert_eq!(
        snap.recommendation,
        Recommendation::PartialProgress { meals_logged: 1 }
    );
}

#[test]
fn test_no_meals_logged() {
    let snap = snapshot(daily_targets(2000.0, 100.0, 250.0, 60.0), &[]);
    assert_eq!(snap.recommendation, Recommendation::NoMealsLogged);
    assert!((snap.remaining.calories - 2000.0).abs() < EPS);
}

#[test]
fn test_zero_target_gives_zero_progress() {
    let entries = [log_entry(1, 1, MealType::Lunch, 500.0, 20.0, 60.0, 10.0, at(12))];
    let snap = snapshot(daily_targets(2000.0, 0.0, 250.0, 60.0), &entries);

    assert_eq!(snap.progress.protein_pct, 0.0);
    assert!(snap.progress.calories_pct.is_finite());
    assert!((snap.remaining.protein_g + 20.0).abs() < EPS);
}

#[test]
fn test_unset_targets_report_zero() {
    let entries = [log_entry(1, 1, MealType::Lunch, 500.0, 20.0, 60.0, 10.0, at(12))];
    let profile = Profile::new(1, "New", 35, 170.0, 72.0, Sex::Female);
    let snap = engine().remaining(&profile, &entries, &window());

    assert!(!snap.targets_set);
    assert!((snap.consumed.calories - 500.0).abs() < EPS);
    assert_eq!(snap.remaining.calories, 0.0);
    assert_eq!(snap.progress.calories_pct, 0.0);
    assert!(engine().dinner_suggestions(&snap).is_empty());
}

#[test]
fn test_window_for_date_uses_local_midnight() {
    let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let window = DayWindow::for_date(date, &ist).unwrap();

    assert_eq!(window.start_ms, 1_710_009_000_000);
    assert_eq!(window.end_ms - window.start_ms, DAY_MS);
    assert!(window.contains(window.start_ms));
    assert!(!window.contains(window.end_ms));
}

#[test]
fn test_logged_food_resolves_per_100g_values() {
    let info = NutritionalInfo {
        name: "Cooked rice".into(),
        calories_per_100g: 130.0,
        protein_per_100g: 2.7,
        carbs_per_100g: 28.0,
        fat_per_100g: 0.3,
        fiber_per_100g: 0.4,
    };
    let entry =
        FoodLogEntry::from_nutritional_info(9, 1, &info, MealType::Lunch, 0.25, "kg", at(13));
    let snap = snapshot(daily_targets(2000.0, 100.0, 250.0, 60.0), &[entry]);

    assert!((snap.consumed.calories - 325.0).abs() < 1e-6);
    assert!((snap.consumed.carbs_g - 70.0).abs() < 1e-6);
}

#[test]
fn test_dinner_suggestions_fit_remaining() {
    let entries = [log_entry(1, 1, MealType::Lunch, 1600.0, 60.0, 200.0, 40.0, at(13))];
    let engine = engine();
    let snap = engine.remaining(
        &profile_with(daily_targets(2000.0, 100.0, 250.0, 60.0)),
        &entries,
        &window(),
    );
    let suggestions = engine.dinner_suggestions(&snap);

    assert!(!suggestions.is_empty());
    assert!(suggestions.len() <= 5);
    for s in &suggestions {
        assert!(s.calories <= snap.remaining.calories, "{}", s.name);
        assert!(s.protein_g >= 0.5 * snap.remaining.protein_g, "{}", s.name);
        assert!((0.0..=1.0).contains(&s.utilization));
    }
    for pair in suggestions.windows(2) {
        assert!(pair[0].utilization >= pair[1].utilization);
    }
}

#[test]
fn test_dinner_falls_back_to_calorie_filter() {
    let catalog = vec![
        DinnerTemplate {
            name: "Khichdi".into(),
            calories: 300.0,
            protein_g: 10.0,
            carbs_g: 50.0,
            fat_g: 6.0,
            description: "Rice and lentils".into(),
        },
        DinnerTemplate {
            name: "Chole Bhature".into(),
            calories: 900.0,
            protein_g: 25.0,
            carbs_g: 110.0,
            fat_g: 40.0,
            description: "Fried bread with chickpeas".into(),
        },
    ];
    let engine = engine().with_dinner_catalog(catalog);
    let entries = [log_entry(1, 1, MealType::Lunch, 1500.0, 20.0, 180.0, 40.0, at(13))];
    let snap = engine.remaining(
        &profile_with(daily_targets(2000.0, 100.0, 250.0, 60.0)),
        &entries,
        &window(),
    );
    let suggestions = engine.dinner_suggestions(&snap);

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].name, "Khichdi");
}

#[test]
fn test_no_dinner_when_calories_are_spent() {
    let entries = [log_entry(1, 1, MealType::Lunch, 2100.0, 60.0, 200.0, 40.0, at(13))];
    let engine = engine();
    let snap = engine.remaining(
        &profile_with(daily_targets(2000.0, 100.0, 250.0, 60.0)),
        &entries,
        &window(),
    );
    assert!(engine.dinner_suggestions(&snap).is_empty());
}

#[test]
fn test_snapshot_serializes_for_collaborators() {
    let snap = snapshot(daily_targets(2000.0, 100.0, 250.0, 60.0), &[]);
    let value = serde_json::to_value(&snap).unwrap();

    assert_eq!(value["profile_id"], 1);
    assert_eq!(value["recommendation"]["state"], "no_meals_logged");
    assert_eq!(value["remaining"]["calories"], 2000.0);
    assert_eq!(value["targets_set"], true);
}
