// ABOUTME: Integration tests for BMR, TDEE, and daily macro target calculation
// ABOUTME: Covers goal adjustments, deficit bounds, recalculation, and invalid profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp, clippy::unreadable_literal)]

mod common;

use tastydiet::intelligence::config::{BmrConfig, NutritionConfig};
use tastydiet::intelligence::macro_targets::{
    calculate_bmr, calculate_calorie_target, calculate_tdee, BodyMetrics, EnergyAdjustment,
};
use tastydiet::models::{ActivityLevel, DailyTargets, Goal, Profile, Sex, TargetSource};
use tastydiet::{ErrorCode, NutritionEngine};

const EPS: f64 = 1e-6;

fn engine() -> NutritionEngine {
    common::init_test_logging();
    NutritionEngine::default()
}

fn male_profile() -> Profile {
    Profile::new(1, "Ravi", 30, 180.0, 80.0, Sex::Male)
}

fn female_profile() -> Profile {
    Profile::new(2, "Meera", 28, 165.0, 60.0, Sex::Female)
}

#[test]
fn test_bmr_by_sex() {
    let config = BmrConfig::default();
    let male = BodyMetrics::from(&male_profile());
    let female = BodyMetrics::from(&female_profile());
    let other = BodyMetrics {
        weight_kg: 70.0,
        height_cm: 170.0,
        age_years: 40,
        sex: Sex::Other,
    };

    assert!((calculate_bmr(&male, &config).unwrap() - 1780.0).abs() < EPS);
    assert!((calculate_bmr(&female, &config).unwrap() - 1330.25).abs() < EPS);
    assert!((calculate_bmr(&other, &config).unwrap() - 1484.5).abs() < EPS);
}

#[test]
fn test_bmr_sex_offset_is_166() {
    let config = BmrConfig::default();
    let male = BodyMetrics {
        weight_kg: 70.0,
        height_cm: 175.0,
        age_years: 30,
        sex: Sex::Male,
    };
    let female = BodyMetrics {
        sex: Sex::Female,
        ..male
    };
    let male_bmr = calculate_bmr(&male, &config).unwrap();
    let female_bmr = calculate_bmr(&female, &config).unwrap();

    assert!((male_bmr - 1673.75).abs() < EPS);
    assert!((female_bmr - 1502.75).abs() < EPS);
    assert!((male_bmr - female_bmr - 166.0).abs() < EPS);
}

#[test]
fn test_tdee_scales_by_activity() {
    assert!((calculate_tdee(1780.0, ActivityLevel::Sedentary) - 2136.0).abs() < EPS);
    assert!((calculate_tdee(1000.0, ActivityLevel::ExtraActive) - 1900.0).abs() < EPS);
}

#[test]
fn test_maintenance_targets_match_tdee() {
    let profile = male_profile()
        .with_activity_level(ActivityLevel::Sedentary)
        .with_goal(Goal::Maintenance, 12);
    let breakdown = engine().calculate_targets(&profile).unwrap();

    assert!((breakdown.calories - 2136.0).abs() < EPS);
    assert!((breakdown.protein_g - 133.5).abs() < EPS);
    assert!((breakdown.carbs_g - 267.0).abs() < EPS);
    assert!((breakdown.fat_g - 2136.0 * 0.25 / 9.0).abs() < EPS);
    assert_eq!(breakdown.adjustment, EnergyAdjustment::None);
    assert!((breakdown.fiber_g - 25.0).abs() < EPS);
}

#[test]
fn test_macro_energy_adds_up_for_every_goal() {
    let engine = engine();
    for goal in Goal::ALL {
        let profile = female_profile().with_goal(goal, 12);
        let b = engine.calculate_targets(&profile).unwrap();
        let energy = 4.0f64.mul_add(b.protein_g, 4.0f64.mul_add(b.carbs_g, 9.0 * b.fat_g));
        assert!(
            (energy - b.calories).abs() < 1e-6,
            "{goal}: {energy} vs {}",
            b.calories
        );
    }
}

#[test]
fn test_surplus_goals_add_to_tdee() {
    let profile = male_profile()
        .with_activity_level(ActivityLevel::Sedentary)
        .with_goal(Goal::MuscleGain, 12);
    let b = engine().calculate_targets(&profile).unwrap();
    assert!((b.calories - 2136.0 * 1.12).abs() < EPS);
    assert!(matches!(b.adjustment, EnergyAdjustment::Surplus { .. }));
}

#[test]
fn test_deficit_sized_from_target_weight() {
    let profile = male_profile()
        .with_activity_level(ActivityLevel::VeryActive)
        .with_goal(Goal::WeightLoss, 12)
        .with_target_weight(76.0);
    let b = engine().calculate_targets(&profile).unwrap();

    let tdee = 1780.0 * 1.725;
    let deficit = 4.0 * 7700.0 / 84.0;
    assert!((b.tdee - tdee).abs() < EPS);
    assert!((b.calories - (tdee - deficit)).abs() < EPS);
    match b.adjustment {
        EnergyAdjustment::Deficit {
            capped, floored, ..
        } => {
            assert!(!capped);
            assert!(!floored);
        }
        other => panic!("expected deficit, got {other:?}"),
    }
}

#[test]
fn test_deficit_capped_at_fraction_of_tdee() {
    let profile = male_profile()
        .with_activity_level(ActivityLevel::VeryActive)
        .with_goal(Goal::FatLossHighProtein, 4)
        .with_target_weight(60.0);
    let b = engine().calculate_targets(&profile).unwrap();

    let tdee = 1780.0 * 1.725;
    assert!((b.calories - tdee * 0.75).abs() < EPS);
    assert!(matches!(
        b.adjustment,
        EnergyAdjustment::Deficit { capped: true, .. }
    ));
}

#[test]
fn test_deficit_never_drops_below_bmr_floor() {
    let profile = female_profile()
        .with_goal(Goal::WeightLoss, 12)
        .with_target_weight(55.0);
    let b = engine().calculate_targets(&profile).unwrap();

    assert!((b.calories - 1330.25 * 1.1).abs() < EPS);
    assert!(b.calories <= b.tdee);
    assert!(matches!(
        b.adjustment,
        EnergyAdjustment::Deficit { floored: true, .. }
    ));
}

#[test]
fn test_deficit_goals_stay_within_bounds() {
    let engine = engine();
    for weeks in [1, 4, 12, 52] {
        for level in ActivityLevel::ALL {
            let profile = female_profile()
                .with_activity_level(level)
                .with_goal(Goal::WeightLoss, weeks);
            let b = engine.calculate_targets(&profile).unwrap();
            assert!(b.calories <= b.tdee + EPS);
            assert!(b.calories >= b.bmr * 1.1 - EPS || b.calories >= b.tdee - EPS);
        }
    }
}

#[test]
fn test_zero_duration_is_rejected() {
    let config = NutritionConfig::default();
    let err = calculate_calorie_target(
        1500.0,
        2000.0,
        Goal::WeightLoss,
        0,
        3.0,
        &config.energy_balance,
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidProfileInput);
}

#[test]
fn test_invalid_profiles_are_rejected() {
    let engine = engine();
    let cases = [
        Profile::new(3, "zero weight", 30, 170.0, 0.0, Sex::Male),
        Profile::new(4, "negative height", 30, -170.0, 70.0, Sex::Male),
        Profile::new(5, "newborn", 0, 170.0, 70.0, Sex::Male),
        Profile::new(6, "nan weight", 30, 170.0, f64::NAN, Sex::Female),
        male_profile().with_target_weight(-2.0),
        male_profile().with_goal(Goal::WeightLoss, 0),
    ];
    for profile in cases {
        let err = engine.calculate_targets(&profile).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidProfileInput, "{}", profile.name);
    }
}

#[test]
fn test_recalculate_is_idempotent_and_replaces_override() {
    let engine = engine();
    let mut profile = female_profile().with_goal(Goal::Keto, 8);
    profile.override_targets(DailyTargets {
        calories: 1200.0,
        protein_g: 90.0,
        carbs_g: 30.0,
        fat_g: 80.0,
        fiber_g: 30.0,
    });
    assert_eq!(profile.target_source, TargetSource::UserOverride);

    let first = engine.recalculate_targets(&mut profile).unwrap();
    let stored = profile.targets;
    let second = engine.recalculate_targets(&mut profile).unwrap();

    assert_eq!(first, second);
    assert_eq!(stored, profile.targets);
    assert_eq!(profile.target_source, TargetSource::Calculated);
    assert!((profile.targets.fiber_g - 30.0).abs() < EPS, "fiber kept");
}

#[test]
fn test_failed_recalculation_leaves_profile_untouched() {
    let engine = engine();
    let mut profile = Profile::new(7, "bad", 30, 0.0, 70.0, Sex::Male);
    let before = profile.clone();
    assert!(engine.recalculate_targets(&mut profile).is_err());
    assert_eq!(profile, before);
}
