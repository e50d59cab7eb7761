// ABOUTME: Profile model for a tracked person with biometrics, goal, and daily targets
// ABOUTME: Sex, ActivityLevel, Goal enums, DailyTargets, and BMI classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{bmi, DEFAULT_FIBER_TARGET_G};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex for BMR calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (Mifflin-St Jeor constant +5)
    Male,
    /// Female (Mifflin-St Jeor constant -161)
    Female,
    /// Other or unspecified: average of the male and female constants
    #[default]
    Other,
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            "other" | "" => Ok(Self::Other),
            other => Err(AppError::invalid_input(format!("Unknown sex: {other}"))),
        }
    }
}

/// Activity level for TDEE calculation.
///
/// The multipliers are the fixed set used by the application; profiles stored
/// with a raw float are mapped with [`ActivityLevel::from_factor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise: 1.2
    Sedentary,
    /// Light exercise 1-3 days/week: 1.375
    LightlyActive,
    /// Everyday movement plus light exercise: 1.4
    #[default]
    FairlyActive,
    /// Moderate exercise 3-5 days/week: 1.55
    ModeratelyActive,
    /// Hard exercise 6-7 days/week: 1.725
    VeryActive,
    /// Physical job or twice-daily training: 1.9
    ExtraActive,
}

impl ActivityLevel {
    /// All levels in ascending factor order
    pub const ALL: [Self; 6] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::FairlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];

    /// TDEE multiplier for this level
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::LightlyActive => 1.375,
            Self::FairlyActive => 1.4,
            Self::ModeratelyActive => 1.55,
            Self::VeryActive => 1.725,
            Self::ExtraActive => 1.9,
        }
    }

    /// Map a stored multiplier to the nearest canonical level
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfileInput` if the factor is not positive and finite
    pub fn from_factor(factor: f64) -> AppResult<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(AppError::invalid_profile("activity_factor", factor));
        }
        let mut best = Self::Sedentary;
        for level in Self::ALL {
            if (level.factor() - factor).abs() < (best.factor() - factor).abs() {
                best = level;
            }
        }
        Ok(best)
    }

    /// Human-readable description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary (little or no exercise)",
            Self::LightlyActive => "Lightly active (light exercise 1-3 days/week)",
            Self::FairlyActive => "Fairly active (on your feet most of the day)",
            Self::ModeratelyActive => "Moderately active (moderate exercise 3-5 days/week)",
            Self::VeryActive => "Very active (hard exercise 6-7 days/week)",
            Self::ExtraActive => "Extra active (very hard exercise, physical job)",
        }
    }
}

/// Nutrition goal driving the calorie adjustment and macro split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Calorie deficit sized from goal duration
    WeightLoss,
    /// Calorie surplus with high protein
    MuscleGain,
    /// Calories at TDEE
    #[default]
    Maintenance,
    /// Calorie deficit with protein raised to 40% of calories
    FatLossHighProtein,
    /// Small surplus with carb-weighted split
    Endurance,
    /// Calories at TDEE, carbs at 5% of calories
    Keto,
    /// Calories at TDEE with moderate carbs
    DiabetesManagement,
    /// User-defined plan; calculated targets start at maintenance
    Custom,
}

impl Goal {
    /// All goals
    pub const ALL: [Self; 8] = [
        Self::WeightLoss,
        Self::MuscleGain,
        Self::Maintenance,
        Self::FatLossHighProtein,
        Self::Endurance,
        Self::Keto,
        Self::DiabetesManagement,
        Self::Custom,
    ];

    /// Whether the goal applies a duration-sized calorie deficit
    #[must_use]
    pub const fn is_deficit(self) -> bool {
        matches!(self, Self::WeightLoss | Self::FatLossHighProtein)
    }

    /// Display label as shown in the profile editor
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::MuscleGain => "Muscle Gain",
            Self::Maintenance => "Maintenance",
            Self::FatLossHighProtein => "Fat Loss (High Protein)",
            Self::Endurance => "Endurance Training",
            Self::Keto => "Keto Diet",
            Self::DiabetesManagement => "Diabetes Management",
            Self::Custom => "Custom Plan",
        }
    }

    /// Human-readable description of the plan
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::WeightLoss => "Calorie deficit sized to your timeline with raised protein",
            Self::MuscleGain => "Moderate calorie surplus with high protein",
            Self::Maintenance => "Maintain current weight with balanced nutrition",
            Self::FatLossHighProtein => "Calorie deficit with very high protein (40%)",
            Self::Endurance => "Small surplus with higher carbs for sustained training",
            Self::Keto => "High fat (70%), very low carb (5%) for ketosis",
            Self::DiabetesManagement => "Balanced macros with moderate carbs",
            Self::Custom => "Customizable nutrition plan (editable macros)",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let normalized: String = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "weightloss" => Ok(Self::WeightLoss),
            "musclegain" => Ok(Self::MuscleGain),
            "maintenance" => Ok(Self::Maintenance),
            "fatlosshighprotein" | "fatloss" => Ok(Self::FatLossHighProtein),
            "endurance" | "endurancetraining" => Ok(Self::Endurance),
            "keto" | "ketodiet" => Ok(Self::Keto),
            "diabetesmanagement" | "diabetes" => Ok(Self::DiabetesManagement),
            "custom" | "customplan" => Ok(Self::Custom),
            _ => Err(AppError::invalid_input(format!("Unknown goal: {s}"))),
        }
    }
}

/// Label for a goal duration, as shown next to the duration picker
#[must_use]
pub fn goal_duration_label(weeks: u32) -> String {
    match weeks {
        0..=4 => "1 month (aggressive)".to_owned(),
        5..=8 => "2 months (moderate)".to_owned(),
        9..=12 => "3 months (balanced)".to_owned(),
        13..=16 => "4 months (gradual)".to_owned(),
        17..=24 => "6 months (sustainable)".to_owned(),
        _ => format!("{} months (long-term)", weeks / 4),
    }
}

/// Whether targets were produced by the calculator or typed in by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TargetSource {
    /// Produced by the macro target calculator
    #[default]
    Calculated,
    /// Entered or edited by the user
    UserOverride,
}

/// Daily nutrition targets stored on a profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTargets {
    /// Target energy (kcal)
    pub calories: f64,
    /// Target protein (g)
    pub protein_g: f64,
    /// Target carbohydrates (g)
    pub carbs_g: f64,
    /// Target fat (g)
    pub fat_g: f64,
    /// Target fiber (g)
    pub fiber_g: f64,
}

impl DailyTargets {
    /// Targets not yet set (all zero)
    #[must_use]
    pub const fn unset() -> Self {
        Self {
            calories: 0.0,
            protein_g: 0.0,
            carbs_g: 0.0,
            fat_g: 0.0,
            fiber_g: 0.0,
        }
    }

    /// True when no macro target has been stored
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.calories == 0.0 && self.protein_g == 0.0 && self.carbs_g == 0.0 && self.fat_g == 0.0
    }
}

impl Default for DailyTargets {
    fn default() -> Self {
        Self {
            fiber_g: DEFAULT_FIBER_TARGET_G,
            ..Self::unset()
        }
    }
}

/// BMI classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI < 18.5
    Underweight,
    /// 18.5 <= BMI < 25
    Normal,
    /// 25 <= BMI < 30
    Overweight,
    /// BMI >= 30
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(value: f64) -> Self {
        if value < bmi::UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if value < bmi::NORMAL_BELOW {
            Self::Normal
        } else if value < bmi::OVERWEIGHT_BELOW {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

/// A person being tracked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Profile identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Age in years
    pub age_years: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Sex for BMR
    pub sex: Sex,
    /// Activity level for TDEE
    pub activity_level: ActivityLevel,
    /// Nutrition goal
    pub goal: Goal,
    /// Weeks over which the goal should be reached
    pub goal_duration_weeks: u32,
    /// Optional target body weight; sizes the deficit for loss goals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight_kg: Option<f64>,
    /// Stored daily targets
    #[serde(default)]
    pub targets: DailyTargets,
    /// Origin of the stored targets
    #[serde(default)]
    pub target_source: TargetSource,
}

impl Profile {
    /// Create a profile with default goal settings and unset targets
    pub fn new(
        id: i64,
        name: impl Into<String>,
        age_years: u32,
        height_cm: f64,
        weight_kg: f64,
        sex: Sex,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age_years,
            height_cm,
            weight_kg,
            sex,
            activity_level: ActivityLevel::default(),
            goal: Goal::default(),
            goal_duration_weeks: 12,
            target_weight_kg: None,
            targets: DailyTargets::default(),
            target_source: TargetSource::default(),
        }
    }

    /// Set the goal and its duration
    #[must_use]
    pub fn with_goal(mut self, goal: Goal, duration_weeks: u32) -> Self {
        self.goal = goal;
        self.goal_duration_weeks = duration_weeks;
        self
    }

    /// Set the activity level
    #[must_use]
    pub fn with_activity_level(mut self, level: ActivityLevel) -> Self {
        self.activity_level = level;
        self
    }

    /// Set the target body weight
    #[must_use]
    pub fn with_target_weight(mut self, target_weight_kg: f64) -> Self {
        self.target_weight_kg = Some(target_weight_kg);
        self
    }

    /// Replace the stored targets with user-entered values
    pub fn override_targets(&mut self, targets: DailyTargets) {
        self.targets = targets;
        self.target_source = TargetSource::UserOverride;
    }

    /// Body mass index (0 when height is not positive)
    #[must_use]
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        if height_m > 0.0 {
            self.weight_kg / (height_m * height_m)
        } else {
            0.0
        }
    }

    /// BMI classification
    #[must_use]
    pub fn bmi_category(&self) -> BmiCategory {
        BmiCategory::from_bmi(self.bmi())
    }
}
