// ABOUTME: Nutrition constants shared by calculators and models
// ABOUTME: Atwater energy factors, body-fat energy density, and BMI category thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Atwater energy factors (kcal per gram)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Carbohydrate: 4 kcal/g
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
    /// Approximate energy stored in 1 kg of body fat
    pub const KCAL_PER_KG_BODY_FAT: f64 = 7700.0;
    /// Days per week, for spreading a weekly deficit over days
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

/// BMI category thresholds (kg/m²), WHO adult classification
pub mod bmi {
    /// Below this is underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Below this (and not underweight) is normal weight
    pub const NORMAL_BELOW: f64 = 25.0;
    /// Below this (and not normal) is overweight; at or above is obese
    pub const OVERWEIGHT_BELOW: f64 = 30.0;
}

/// Default fiber target (g/day) when a profile has none
pub const DEFAULT_FIBER_TARGET_G: f64 = 25.0;
