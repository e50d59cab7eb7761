// ABOUTME: Daily macro target calculation from profile biometrics and goal
// ABOUTME: Mifflin-St Jeor BMR, TDEE, bounded goal deficit or surplus, and per-goal macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro Target Calculator
//!
//! Pure functions turning a [`Profile`] into daily calorie and macro targets.
//! Invalid biometrics are rejected before any arithmetic with
//! `ErrorCode::InvalidProfileInput`.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Hall, K.D. (2008). What is the required energy deficit per unit weight loss?
//!   *International Journal of Obesity*, 32(3), 573-576.
//!   <https://doi.org/10.1038/sj.ijo.0803720>

use crate::config::{
    BmrConfig, EnergyBalanceConfig, MacroDistribution, MacroSplitConfig, NutritionConfig,
};
use serde::{Deserialize, Serialize};
use tastydiet_core::constants::energy::{
    DAYS_PER_WEEK, KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use tastydiet_core::constants::DEFAULT_FIBER_TARGET_G;
use tastydiet_core::errors::{AppError, AppResult};
use tastydiet_core::models::{ActivityLevel, DailyTargets, Goal, Profile, Sex, TargetSource};
use tracing::debug;

/// Biometric inputs to the BMR formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: u32,
    /// Sex (selects the formula constant)
    pub sex: Sex,
}

impl From<&Profile> for BodyMetrics {
    fn from(profile: &Profile) -> Self {
        Self {
            weight_kg: profile.weight_kg,
            height_cm: profile.height_cm,
            age_years: profile.age_years,
            sex: profile.sex,
        }
    }
}

impl BodyMetrics {
    fn validate(&self) -> AppResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(AppError::invalid_profile("weight_kg", self.weight_kg));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(AppError::invalid_profile("height_cm", self.height_cm));
        }
        if self.age_years == 0 {
            return Err(AppError::invalid_profile("age_years", self.age_years));
        }
        Ok(())
    }
}

/// How the calorie target relates to TDEE
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EnergyAdjustment {
    /// Calories equal TDEE
    None,
    /// Calories below TDEE
    Deficit {
        /// Deficit requested by the goal timeline (kcal/day)
        requested_kcal: f64,
        /// Deficit actually applied after bounds (kcal/day)
        applied_kcal: f64,
        /// Whether the fraction-of-TDEE cap reduced the deficit
        capped: bool,
        /// Whether the BMR floor raised the target
        floored: bool,
    },
    /// Calories above TDEE
    Surplus {
        /// Surplus applied (kcal/day)
        kcal: f64,
    },
}

/// Calorie target with the adjustment that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieTarget {
    /// Daily calories (kcal)
    pub calories: f64,
    /// Adjustment relative to TDEE
    pub adjustment: EnergyAdjustment,
}

/// Full result of a macro target calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroTargetBreakdown {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Daily calorie target (kcal)
    pub calories: f64,
    /// Daily protein target (g)
    pub protein_g: f64,
    /// Daily carbohydrate target (g)
    pub carbs_g: f64,
    /// Daily fat target (g)
    pub fat_g: f64,
    /// Daily fiber target (g)
    pub fiber_g: f64,
    /// Split applied
    pub split: MacroDistribution,
    /// Energy adjustment applied
    pub adjustment: EnergyAdjustment,
}

impl MacroTargetBreakdown {
    /// Targets to store on the profile
    #[must_use]
    pub const fn to_daily_targets(&self) -> DailyTargets {
        DailyTargets {
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
            fiber_g: self.fiber_g,
        }
    }
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Male: +5
/// - Female: -161
/// - Other: -78, the mean of the two
///
/// # Arguments
/// * `metrics` - Weight, height, age, and sex
/// * `config` - BMR configuration with formula coefficients
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns `InvalidProfileInput` if weight or height is not positive and finite,
/// age is zero, or the resulting BMR is not positive
pub fn calculate_bmr(metrics: &BodyMetrics, config: &BmrConfig) -> AppResult<f64> {
    metrics.validate()?;

    let sex_constant = match metrics.sex {
        Sex::Male => config.male_constant,
        Sex::Female => config.female_constant,
        Sex::Other => config.other_constant,
    };

    let bmr = config.weight_coef.mul_add(
        metrics.weight_kg,
        config.height_coef.mul_add(
            metrics.height_cm,
            config.age_coef * f64::from(metrics.age_years),
        ),
    ) + sex_constant;

    if !bmr.is_finite() || bmr <= 0.0 {
        return Err(AppError::invalid_profile("bmr", bmr));
    }
    Ok(bmr)
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x activity factor
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.factor()
}

/// Weight to lose over the goal period (kg)
///
/// A lower target weight sizes the change directly; otherwise the configured
/// fraction of current weight is used.
#[must_use]
pub fn planned_weight_change(profile: &Profile, config: &EnergyBalanceConfig) -> f64 {
    match profile.target_weight_kg {
        Some(target) if target < profile.weight_kg => profile.weight_kg - target,
        _ => profile.weight_kg * config.default_loss_fraction,
    }
}

/// Calculate the daily calorie target for a goal
///
/// Deficit goals spread `weight_change_kg` of body fat over the goal duration,
/// then bound the deficit to `max_deficit_fraction` of TDEE and the result to
/// at least `min_bmr_multiple` x BMR. The result never exceeds TDEE for
/// deficit goals.
///
/// # Arguments
/// * `bmr` - Basal Metabolic Rate (kcal/day)
/// * `tdee` - Total Daily Energy Expenditure (kcal/day)
/// * `goal` - Nutrition goal
/// * `goal_duration_weeks` - Goal period, must be positive
/// * `weight_change_kg` - Planned loss for deficit goals
/// * `config` - Energy balance bounds
///
/// # Errors
///
/// Returns `InvalidProfileInput` if `goal_duration_weeks` is zero
pub fn calculate_calorie_target(
    bmr: f64,
    tdee: f64,
    goal: Goal,
    goal_duration_weeks: u32,
    weight_change_kg: f64,
    config: &EnergyBalanceConfig,
) -> AppResult<CalorieTarget> {
    if goal_duration_weeks == 0 {
        return Err(AppError::invalid_profile(
            "goal_duration_weeks",
            goal_duration_weeks,
        ));
    }

    if goal.is_deficit() {
        let days = f64::from(goal_duration_weeks) * DAYS_PER_WEEK;
        let requested = (weight_change_kg.max(0.0) * config.kcal_per_kg_fat) / days;
        let cap = config.max_deficit_fraction * tdee;
        let capped = requested > cap;
        let applied = requested.min(cap);

        let floor = config.min_bmr_multiple * bmr;
        let unbounded = tdee - applied;
        let floored = unbounded < floor;
        let calories = unbounded.max(floor).min(tdee);

        debug!(
            requested_deficit = requested,
            applied_deficit = tdee - calories,
            capped,
            floored,
            "Sized calorie deficit"
        );

        return Ok(CalorieTarget {
            calories,
            adjustment: EnergyAdjustment::Deficit {
                requested_kcal: requested,
                applied_kcal: tdee - calories,
                capped,
                floored,
            },
        });
    }

    let surplus = tdee * config.surplus_for(goal);
    let adjustment = if surplus > 0.0 {
        EnergyAdjustment::Surplus { kcal: surplus }
    } else {
        EnergyAdjustment::None
    };
    Ok(CalorieTarget {
        calories: tdee + surplus,
        adjustment,
    })
}

/// Macro split for a goal (percent of calories)
#[must_use]
pub const fn macro_split(goal: Goal, config: &MacroSplitConfig) -> MacroDistribution {
    config.split_for(goal)
}

/// Convert a calorie target into grams using 4/4/9 kcal per gram
#[must_use]
pub fn grams_from_split(calories: f64, split: MacroDistribution) -> (f64, f64, f64) {
    let share = |pct: u8| calories * f64::from(pct) / 100.0;
    (
        share(split.protein_pct) / KCAL_PER_GRAM_PROTEIN,
        share(split.carbs_pct) / KCAL_PER_GRAM_CARBS,
        share(split.fat_pct) / KCAL_PER_GRAM_FAT,
    )
}

/// Calculate complete daily targets for a profile
///
/// # Errors
///
/// Returns `InvalidProfileInput` for non-positive or non-finite biometrics,
/// zero age, zero goal duration, or a non-positive target weight
pub fn calculate_macro_targets(
    profile: &Profile,
    config: &NutritionConfig,
) -> AppResult<MacroTargetBreakdown> {
    if let Some(target) = profile.target_weight_kg {
        if !target.is_finite() || target <= 0.0 {
            return Err(AppError::invalid_profile("target_weight_kg", target));
        }
    }

    let bmr = calculate_bmr(&BodyMetrics::from(profile), &config.bmr)?;
    let tdee = calculate_tdee(bmr, profile.activity_level);
    let weight_change = planned_weight_change(profile, &config.energy_balance);
    let target = calculate_calorie_target(
        bmr,
        tdee,
        profile.goal,
        profile.goal_duration_weeks,
        weight_change,
        &config.energy_balance,
    )?;

    let split = macro_split(profile.goal, &config.macro_splits);
    let (protein_g, carbs_g, fat_g) = grams_from_split(target.calories, split);
    let fiber_g = if profile.targets.fiber_g > 0.0 {
        profile.targets.fiber_g
    } else {
        DEFAULT_FIBER_TARGET_G
    };

    debug!(
        profile_id = profile.id,
        goal = %profile.goal,
        bmr,
        tdee,
        calories = target.calories,
        "Calculated macro targets"
    );

    Ok(MacroTargetBreakdown {
        bmr,
        tdee,
        calories: target.calories,
        protein_g,
        carbs_g,
        fat_g,
        fiber_g,
        split,
        adjustment: target.adjustment,
    })
}

/// Recalculate and store targets on a profile
///
/// This is the only path that replaces user-overridden targets with calculated ones.
///
/// # Errors
///
/// Same as [`calculate_macro_targets`]; the profile is unchanged on error
pub fn recalculate_targets(
    profile: &mut Profile,
    config: &NutritionConfig,
) -> AppResult<MacroTargetBreakdown> {
    let breakdown = calculate_macro_targets(profile, config)?;
    profile.targets = breakdown.to_daily_targets();
    profile.target_source = TargetSource::Calculated;
    Ok(breakdown)
}
