// ABOUTME: Today's consumed totals, remaining macros, progress, and dinner suggestions
// ABOUTME: Local-day windowing, recommendation states, and a fixed dinner template catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Remaining-Macro Calculator
//!
//! A snapshot is recomputed from scratch on every call: `remaining = target - consumed`
//! per macro, negative once a target is exceeded. Progress against a zero
//! target is 0.

use crate::config::{RecommendationMessages, RemainingMacrosConfig};
use chrono::{Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use tastydiet_core::errors::{AppError, AppResult};
use tastydiet_core::math::{mean, safe_percent, safe_ratio};
use tastydiet_core::models::{DailyTargets, FoodLogEntry, MacroTotals, MealType};
use tracing::debug;

/// Half-open `[start_ms, end_ms)` window covering one local calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    /// Local midnight, epoch milliseconds (inclusive)
    pub start_ms: i64,
    /// Next local midnight, epoch milliseconds (exclusive)
    pub end_ms: i64,
}

impl DayWindow {
    /// Window for `date` in time zone `tz`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the date is at the edge of the representable range
    pub fn for_date<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> AppResult<Self> {
        let next = date
            .succ_opt()
            .ok_or_else(|| AppError::invalid_input(format!("No day after {date}")))?;
        Ok(Self {
            start_ms: local_day_start(date, tz)?,
            end_ms: local_day_start(next, tz)?,
        })
    }

    /// Window for the current day in `tz`
    ///
    /// # Errors
    ///
    /// Same as [`DayWindow::for_date`]
    pub fn today<Tz: TimeZone>(tz: &Tz) -> AppResult<Self> {
        let today = Utc::now().with_timezone(tz).date_naive();
        Self::for_date(today, tz)
    }

    /// Whether `timestamp_ms` falls inside the window
    #[must_use]
    pub const fn contains(&self, timestamp_ms: i64) -> bool {
        timestamp_ms >= self.start_ms && timestamp_ms < self.end_ms
    }
}

/// First instant of `date` in `tz`. Where a DST gap swallows midnight the day
/// starts at the first local time that exists.
fn local_day_start<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> AppResult<i64> {
    let midnight = date.and_time(NaiveTime::MIN);
    for hour in 0..3 {
        let candidate = midnight + Duration::hours(hour);
        match tz.from_local_datetime(&candidate) {
            LocalResult::Single(start) | LocalResult::Ambiguous(start, _) => {
                return Ok(start.timestamp_millis());
            }
            LocalResult::None => {}
        }
    }
    Err(AppError::invalid_input(format!(
        "No local start of day exists for {date}"
    )))
}

/// What a profile has eaten inside one day window
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConsumedSummary {
    /// Summed macros
    pub totals: MacroTotals,
    /// Number of entries counted
    pub entry_count: usize,
    /// Distinct meal types logged
    pub meal_types: BTreeSet<MealType>,
}

impl ConsumedSummary {
    /// Number of distinct meal types logged
    #[must_use]
    pub fn meals_logged(&self) -> usize {
        self.meal_types.len()
    }
}

/// Sum entries belonging to `profile_id` whose timestamp falls in `window`
#[must_use]
pub fn sum_consumed(
    profile_id: i64,
    entries: &[FoodLogEntry],
    window: &DayWindow,
) -> ConsumedSummary {
    entries
        .iter()
        .filter(|entry| entry.profile_id == profile_id && window.contains(entry.timestamp_ms))
        .fold(ConsumedSummary::default(), |mut summary, entry| {
            summary.totals += entry.macros();
            summary.entry_count += 1;
            summary.meal_types.insert(entry.meal_type);
            summary
        })
}

/// Percent of each target consumed
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroProgress {
    /// Calories consumed (% of target)
    pub calories_pct: f64,
    /// Protein consumed (% of target)
    pub protein_pct: f64,
    /// Carbohydrates consumed (% of target)
    pub carbs_pct: f64,
    /// Fat consumed (% of target)
    pub fat_pct: f64,
}

impl MacroProgress {
    fn max(&self) -> f64 {
        self.calories_pct
            .max(self.protein_pct)
            .max(self.carbs_pct)
            .max(self.fat_pct)
    }
}

/// Recommendation state, evaluated in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Recommendation {
    /// Some macro is over the exceeded threshold
    TargetsExceeded,
    /// Calories and protein are both inside the close-to-target band
    CloseToTargets,
    /// Nothing logged today
    NoMealsLogged,
    /// Some meals logged, targets not yet in reach
    PartialProgress {
        /// Distinct meal types logged today
        meals_logged: usize,
    },
}

impl Recommendation {
    /// Fixed message for this state
    #[must_use]
    pub fn message<'a>(&self, messages: &'a RecommendationMessages) -> &'a str {
        match self {
            Self::TargetsExceeded => &messages.targets_exceeded,
            Self::CloseToTargets => &messages.close_to_targets,
            Self::NoMealsLogged => &messages.no_meals_logged,
            Self::PartialProgress { meals_logged: 1 } => &messages.one_meal_logged,
            Self::PartialProgress { .. } => &messages.several_meals_logged,
        }
    }
}

/// Derived view of one profile's day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemainingMacroSnapshot {
    /// Profile the snapshot belongs to
    pub profile_id: i64,
    /// Day the snapshot covers
    pub window: DayWindow,
    /// Targets used
    pub targets: DailyTargets,
    /// Whether the profile has any stored targets
    pub targets_set: bool,
    /// Consumed totals
    pub consumed: MacroTotals,
    /// Target minus consumed (negative when exceeded)
    pub remaining: MacroTotals,
    /// Percent of target consumed
    pub progress: MacroProgress,
    /// Distinct meal types logged
    pub meals_logged: usize,
    /// Recommendation state
    pub recommendation: Recommendation,
}

/// Pick the recommendation state for a snapshot
#[must_use]
pub fn recommendation(
    snapshot: &RemainingMacroSnapshot,
    config: &RemainingMacrosConfig,
) -> Recommendation {
    classify(&snapshot.progress, snapshot.meals_logged, config)
}

fn classify(
    progress: &MacroProgress,
    meals_logged: usize,
    config: &RemainingMacrosConfig,
) -> Recommendation {
    let t = &config.thresholds;
    let band = t.close_min_pct..=t.exceeded_pct;
    if progress.max() > t.exceeded_pct {
        Recommendation::TargetsExceeded
    } else if band.contains(&progress.calories_pct) && band.contains(&progress.protein_pct) {
        Recommendation::CloseToTargets
    } else if meals_logged == 0 {
        Recommendation::NoMealsLogged
    } else {
        Recommendation::PartialProgress { meals_logged }
    }
}

/// Compute today's remaining macros for a profile
///
/// When every target is zero the profile has no stored targets, and both
/// remaining and progress are reported as zero.
#[must_use]
pub fn calculate_remaining(
    targets: &DailyTargets,
    profile_id: i64,
    entries: &[FoodLogEntry],
    window: &DayWindow,
    config: &RemainingMacrosConfig,
) -> RemainingMacroSnapshot {
    let summary = sum_consumed(profile_id, entries, window);
    let consumed = summary.totals;
    let targets_set = !targets.is_unset();

    let (remaining, progress) = if targets_set {
        let target_totals = MacroTotals {
            calories: targets.calories,
            protein_g: targets.protein_g,
            carbs_g: targets.carbs_g,
            fat_g: targets.fat_g,
            fiber_g: targets.fiber_g,
        };
        (
            target_totals + consumed.scaled(-1.0),
            MacroProgress {
                calories_pct: safe_percent(consumed.calories, targets.calories),
                protein_pct: safe_percent(consumed.protein_g, targets.protein_g),
                carbs_pct: safe_percent(consumed.carbs_g, targets.carbs_g),
                fat_pct: safe_percent(consumed.fat_g, targets.fat_g),
            },
        )
    } else {
        (MacroTotals::default(), MacroProgress::default())
    };

    let meals_logged = summary.meals_logged();
    let recommendation = classify(&progress, meals_logged, config);

    debug!(
        profile_id,
        entries = summary.entry_count,
        consumed_kcal = consumed.calories,
        remaining_kcal = remaining.calories,
        ?recommendation,
        "Calculated remaining macros"
    );

    RemainingMacroSnapshot {
        profile_id,
        window: *window,
        targets: *targets,
        targets_set,
        consumed,
        remaining,
        progress,
        meals_logged,
        recommendation,
    }
}

/// A dinner template from the fixed catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DinnerTemplate {
    /// Dish name
    pub name: String,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Short description
    pub description: String,
}

impl DinnerTemplate {
    fn new(
        name: &str,
        (calories, protein_g, carbs_g, fat_g): (f64, f64, f64, f64),
        description: &str,
    ) -> Self {
        Self {
            name: name.to_owned(),
            calories,
            protein_g,
            carbs_g,
            fat_g,
            description: description.to_owned(),
        }
    }
}

/// Built-in dinner catalog
#[must_use]
pub fn dinner_catalog() -> Vec<DinnerTemplate> {
    vec![
        DinnerTemplate::new(
            "Tandoori Chicken with Mint Chutney",
            (280.0, 38.0, 6.0, 11.0),
            "Lean grilled chicken, very high protein",
        ),
        DinnerTemplate::new(
            "Paneer Tikka with Salad",
            (320.0, 22.0, 12.0, 20.0),
            "Grilled cottage cheese with fresh vegetables",
        ),
        DinnerTemplate::new(
            "Moong Dal Chilla with Curd",
            (300.0, 20.0, 32.0, 9.0),
            "Savory lentil pancakes with yogurt",
        ),
        DinnerTemplate::new(
            "Egg Bhurji with Multigrain Roti",
            (360.0, 22.0, 30.0, 16.0),
            "Spiced scrambled eggs with whole-grain flatbread",
        ),
        DinnerTemplate::new(
            "Vegetable Khichdi",
            (380.0, 14.0, 62.0, 8.0),
            "Light rice and lentil porridge with vegetables",
        ),
        DinnerTemplate::new(
            "Chana Masala with Quinoa",
            (430.0, 18.0, 64.0, 11.0),
            "Chickpea curry over quinoa",
        ),
        DinnerTemplate::new(
            "Dal Tadka with Brown Rice",
            (450.0, 18.0, 70.0, 10.0),
            "Tempered yellow lentils with brown rice",
        ),
        DinnerTemplate::new(
            "Fish Curry with Steamed Rice",
            (480.0, 32.0, 50.0, 14.0),
            "Coastal fish curry, balanced macros",
        ),
        DinnerTemplate::new(
            "Rajma Chawal",
            (500.0, 19.0, 82.0, 9.0),
            "Kidney bean curry with rice",
        ),
        DinnerTemplate::new(
            "Chicken Curry with Roti",
            (520.0, 35.0, 45.0, 20.0),
            "Home-style chicken curry with two rotis",
        ),
        DinnerTemplate::new(
            "Palak Paneer with Jeera Rice",
            (540.0, 24.0, 55.0, 24.0),
            "Spinach and cottage cheese curry with cumin rice",
        ),
        DinnerTemplate::new(
            "Vegetable Soup with Sprouts Salad",
            (180.0, 10.0, 26.0, 4.0),
            "Very light option for a small calorie budget",
        ),
    ]
}

/// A ranked dinner suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DinnerSuggestion {
    /// Dish name
    pub name: String,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Short description
    pub description: String,
    /// How fully the dish uses the remaining macros (0-1)
    pub utilization: f64,
}

/// Fill of one macro: the consumed share of what remains, reduced by any overshoot
fn fill(amount: f64, remaining: f64) -> f64 {
    let ratio = safe_ratio(amount, remaining);
    if ratio <= 1.0 {
        ratio
    } else {
        (2.0 - ratio).max(0.0)
    }
}

fn utilization(template: &DinnerTemplate, remaining: &MacroTotals) -> f64 {
    let fills: Vec<f64> = [
        (template.calories, remaining.calories),
        (template.protein_g, remaining.protein_g),
        (template.carbs_g, remaining.carbs_g),
        (template.fat_g, remaining.fat_g),
    ]
    .into_iter()
    .filter(|&(_, left)| left > 0.0)
    .map(|(amount, left)| fill(amount, left))
    .collect();
    mean(&fills)
}

/// Rank catalog dinners against what is left today
///
/// Templates above the remaining calories are never returned. Templates
/// covering at least `min_protein_fraction` of the remaining protein are
/// preferred; when none do, the calorie filter alone applies.
#[must_use]
pub fn suggest_dinners(
    snapshot: &RemainingMacroSnapshot,
    catalog: &[DinnerTemplate],
    config: &RemainingMacrosConfig,
) -> Vec<DinnerSuggestion> {
    let remaining = &snapshot.remaining;
    if !snapshot.targets_set || remaining.calories <= 0.0 {
        return Vec::new();
    }

    let within_calories: Vec<&DinnerTemplate> = catalog
        .iter()
        .filter(|t| t.calories.is_finite() && t.calories >= 0.0)
        .filter(|t| t.calories <= remaining.calories)
        .collect();

    let protein_floor = config.dinner.min_protein_fraction * remaining.protein_g.max(0.0);
    let protein_rich: Vec<&DinnerTemplate> = within_calories
        .iter()
        .copied()
        .filter(|t| t.protein_g >= protein_floor)
        .collect();

    let pool = if protein_rich.is_empty() {
        debug!(
            candidates = within_calories.len(),
            "No dinner meets the protein floor, relaxing to calories only"
        );
        within_calories
    } else {
        protein_rich
    };

    let mut ranked: Vec<DinnerSuggestion> = pool
        .into_iter()
        .map(|t| DinnerSuggestion {
            name: t.name.clone(),
            calories: t.calories,
            protein_g: t.protein_g,
            carbs_g: t.carbs_g,
            fat_g: t.fat_g,
            description: t.description.clone(),
            utilization: utilization(t, remaining),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.utilization
            .partial_cmp(&a.utilization)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked.truncate(config.dinner.max_suggestions);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDateTime};

    /// Zone at UTC-3 that springs forward to UTC-2 at local midnight on
    /// 2018-11-04, so 00:00..01:00 that day never happens.
    #[derive(Debug, Clone, Copy)]
    struct MidnightGapZone;

    impl MidnightGapZone {
        fn standard() -> FixedOffset {
            FixedOffset::west_opt(3 * 3600).unwrap()
        }

        fn summer() -> FixedOffset {
            FixedOffset::west_opt(2 * 3600).unwrap()
        }

        fn gap_start() -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2018, 11, 4)
                .unwrap()
                .and_time(NaiveTime::MIN)
        }
    }

    impl TimeZone for MidnightGapZone {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            Self
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let gap_start = Self::gap_start();
            if *local < gap_start {
                LocalResult::Single(Self::standard())
            } else if *local < gap_start + Duration::hours(1) {
                LocalResult::None
            } else {
                LocalResult::Single(Self::summer())
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_time(NaiveTime::MIN))
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            if *utc < Self::gap_start() + Duration::hours(3) {
                Self::standard()
            } else {
                Self::summer()
            }
        }
    }

    fn window() -> DayWindow {
        DayWindow {
            start_ms: 0,
            end_ms: 86_400_000,
        }
    }

    fn entry(profile_id: i64, meal: MealType, calories: f64, protein: f64, ts: i64) -> FoodLogEntry {
        FoodLogEntry {
            id: ts,
            profile_id,
            food_name: "food".into(),
            meal_type: meal,
            quantity: 1.0,
            unit: "serving".into(),
            calories,
            protein_g: protein,
            carbs_g: 10.0,
            fat_g: 5.0,
            fiber_g: 1.0,
            timestamp_ms: ts,
        }
    }

    #[test]
    fn test_day_window_for_fixed_offset() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let window = DayWindow::for_date(date, &ist).unwrap();

        assert_eq!(window.end_ms - window.start_ms, 86_400_000);
        // 2024-03-10T00:00+05:30 == 2024-03-09T18:30Z
        assert_eq!(window.start_ms, 1_710_009_000_000);
        assert!(window.contains(window.start_ms));
        assert!(!window.contains(window.end_ms));
    }

    #[test]
    fn test_day_starts_after_dst_gap_at_midnight() {
        let gap_day = NaiveDate::from_ymd_opt(2018, 11, 4).unwrap();
        let window = DayWindow::for_date(gap_day, &MidnightGapZone).unwrap();

        // 01:00 at UTC-2 is 03:00Z; the next midnight at UTC-2 is 02:00Z
        assert_eq!(window.start_ms, 1_541_300_400_000);
        assert_eq!(window.end_ms, 1_541_383_200_000);
        assert_eq!(window.end_ms - window.start_ms, 23 * 3_600_000);

        let eve = DayWindow::for_date(gap_day.pred_opt().unwrap(), &MidnightGapZone).unwrap();
        assert_eq!(eve.end_ms, window.start_ms);
        assert_eq!(eve.end_ms - eve.start_ms, 24 * 3_600_000);
    }

    #[test]
    fn test_sum_consumed_filters_profile_and_window() {
        let entries = vec![
            entry(1, MealType::Breakfast, 400.0, 20.0, 1_000),
            entry(1, MealType::Breakfast, 100.0, 5.0, 2_000),
            entry(2, MealType::Lunch, 900.0, 40.0, 3_000),
            entry(1, MealType::Lunch, 700.0, 30.0, 86_400_000),
        ];
        let summary = sum_consumed(1, &entries, &window());

        assert_eq!(summary.entry_count, 2);
        assert_eq!(summary.meals_logged(), 1);
        assert!((summary.totals.calories - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_recommendation_priority() {
        let config = RemainingMacrosConfig::default();
        let exceeded = MacroProgress {
            calories_pct: 90.0,
            protein_pct: 90.0,
            carbs_pct: 90.0,
            fat_pct: 130.0,
        };
        assert_eq!(
            classify(&exceeded, 3, &config),
            Recommendation::TargetsExceeded
        );

        let close = MacroProgress {
            calories_pct: 70.0,
            protein_pct: 120.0,
            ..MacroProgress::default()
        };
        assert_eq!(classify(&close, 0, &config), Recommendation::CloseToTargets);

        assert_eq!(
            classify(&MacroProgress::default(), 0, &config),
            Recommendation::NoMealsLogged
        );
        assert_eq!(
            classify(&MacroProgress::default(), 2, &config),
            Recommendation::PartialProgress { meals_logged: 2 }
        );
    }

    #[test]
    fn test_partial_progress_messages() {
        let messages = RecommendationMessages::default();
        assert!(Recommendation::PartialProgress { meals_logged: 1 }
            .message(&messages)
            .contains("lunch"));
        assert!(Recommendation::PartialProgress { meals_logged: 3 }
            .message(&messages)
            .contains("personalized"));
    }

    #[test]
    fn test_fill_penalizes_overshoot() {
        assert!((fill(50.0, 100.0) - 0.5).abs() < 1e-9);
        assert!((fill(150.0, 100.0) - 0.5).abs() < 1e-9);
        assert!(fill(400.0, 100.0).abs() < f64::EPSILON);
        assert!(fill(10.0, 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_catalog_is_well_formed() {
        let catalog = dinner_catalog();
        assert!(catalog.len() >= 10);
        assert!(catalog
            .iter()
            .all(|t| t.calories > 0.0 && t.protein_g >= 0.0 && !t.name.is_empty()));
    }

    #[test]
    fn test_recommendation_json_shape() {
        let value = serde_json::to_value(Recommendation::PartialProgress { meals_logged: 2 })
            .unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "state": "partial_progress", "meals_logged": 2 })
        );
    }
}
