// ABOUTME: Weekly vegetarian / non-vegetarian schedule for the household
// ABOUTME: DietPreference per weekday with legacy string parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Diet preference for a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DietPreference {
    /// Vegetarian only
    #[default]
    Veg,
    /// Non-vegetarian
    NonVeg,
    /// Either is acceptable
    Mixed,
}

impl FromStr for DietPreference {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let normalized: String = s
            .chars()
            .filter(char::is_ascii_alphabetic)
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "veg" | "vegetarian" => Ok(Self::Veg),
            "nonveg" | "nonvegetarian" => Ok(Self::NonVeg),
            "mixed" | "any" => Ok(Self::Mixed),
            _ => Err(AppError::invalid_input(format!(
                "Unknown diet preference: {s}"
            ))),
        }
    }
}

/// One preference per weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WeeklyDietPreference {
    /// Monday
    pub monday: DietPreference,
    /// Tuesday
    pub tuesday: DietPreference,
    /// Wednesday
    pub wednesday: DietPreference,
    /// Thursday
    pub thursday: DietPreference,
    /// Friday
    pub friday: DietPreference,
    /// Saturday
    pub saturday: DietPreference,
    /// Sunday
    pub sunday: DietPreference,
}

impl WeeklyDietPreference {
    /// Same preference every day
    #[must_use]
    pub const fn uniform(preference: DietPreference) -> Self {
        Self {
            monday: preference,
            tuesday: preference,
            wednesday: preference,
            thursday: preference,
            friday: preference,
            saturday: preference,
            sunday: preference,
        }
    }

    /// Preference for `weekday`
    #[must_use]
    pub const fn for_weekday(&self, weekday: Weekday) -> DietPreference {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    /// Set the preference for `weekday`
    #[must_use]
    pub const fn with_day(mut self, weekday: Weekday, preference: DietPreference) -> Self {
        match weekday {
            Weekday::Mon => self.monday = preference,
            Weekday::Tue => self.tuesday = preference,
            Weekday::Wed => self.wednesday = preference,
            Weekday::Thu => self.thursday = preference,
            Weekday::Fri => self.friday = preference,
            Weekday::Sat => self.saturday = preference,
            Weekday::Sun => self.sunday = preference,
        }
        self
    }
}
