// ABOUTME: Per-day nutrition history and period summaries built from the food log
// ABOUTME: Weekly averages, monthly totals, and per-day averages grouped into 7-day chunks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Period Analytics
//!
//! History is rebuilt from the food log on every call, one local-day window
//! at a time. Days without entries are left out, so averages are per logged
//! day rather than per calendar day.

use crate::remaining_macros::{sum_consumed, DayWindow};
use chrono::{NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use tastydiet_core::errors::AppResult;
use tastydiet_core::math::safe_ratio;
use tastydiet_core::models::{FoodLogEntry, MacroTotals};
use tracing::debug;

/// Days grouped into one week of a monthly summary
const DAYS_PER_WEEK: usize = 7;

/// What one profile ate on one local day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyNutrition {
    /// Local calendar date
    pub date: NaiveDate,
    /// Summed macros
    pub totals: MacroTotals,
    /// Number of food log entries
    pub meal_count: usize,
}

/// Averages over a run of logged days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// First logged day
    pub start: NaiveDate,
    /// Last logged day
    pub end: NaiveDate,
    /// Logged days covered
    pub days: usize,
    /// Mean of each macro per logged day
    pub daily_average: MacroTotals,
    /// Entries across all days
    pub total_meals: usize,
}

/// Totals and per-day averages for a month, with its weekly breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// First logged day
    pub start: NaiveDate,
    /// Last logged day
    pub end: NaiveDate,
    /// Sum over all logged days
    pub totals: MacroTotals,
    /// Totals divided by logged days
    pub daily_average: MacroTotals,
    /// Entries across all days
    pub total_meals: usize,
    /// Consecutive 7-day chunks of the logged days
    pub weeks: Vec<PeriodSummary>,
}

/// Per-day totals for `profile_id` from `first` through `last` in `tz`
///
/// # Errors
///
/// Returns `InvalidInput` if a day in the range has no representable local start
pub fn daily_history<Tz: TimeZone>(
    profile_id: i64,
    entries: &[FoodLogEntry],
    first: NaiveDate,
    last: NaiveDate,
    tz: &Tz,
) -> AppResult<Vec<DailyNutrition>> {
    let mut history = Vec::new();
    for date in first.iter_days().take_while(|date| *date <= last) {
        let window = DayWindow::for_date(date, tz)?;
        let consumed = sum_consumed(profile_id, entries, &window);
        if consumed.entry_count > 0 {
            history.push(DailyNutrition {
                date,
                totals: consumed.totals,
                meal_count: consumed.entry_count,
            });
        }
    }

    debug!(
        profile_id,
        %first,
        %last,
        logged_days = history.len(),
        "Built daily history"
    );
    Ok(history)
}

/// Averages over `days`, `None` when there are none
#[must_use]
pub fn period_summary(days: &[DailyNutrition]) -> Option<PeriodSummary> {
    let (first, last) = (days.first()?, days.last()?);
    let totals: MacroTotals = days.iter().map(|day| day.totals).sum();
    Some(PeriodSummary {
        start: first.date,
        end: last.date,
        days: days.len(),
        daily_average: totals.scaled(safe_ratio(1.0, days.len() as f64)),
        total_meals: days.iter().map(|day| day.meal_count).sum(),
    })
}

/// Month view of `days`, `None` when there are none
#[must_use]
pub fn monthly_summary(days: &[DailyNutrition]) -> Option<MonthlySummary> {
    let overall = period_summary(days)?;
    Some(MonthlySummary {
        start: overall.start,
        end: overall.end,
        totals: days.iter().map(|day| day.totals).sum(),
        daily_average: overall.daily_average,
        total_meals: overall.total_meals,
        weeks: days
            .chunks(DAYS_PER_WEEK)
            .filter_map(period_summary)
            .collect(),
    })
}
