// ABOUTME: Integer desirability scoring and ranking of recipes for a household
// ABOUTME: Liked bonus, macro balance, inventory coverage, diet preference, and calorie range sub-scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe Scoring Heuristic
//!
//! A recipe's score is the sum of independent threshold-based sub-scores.
//! Scores carry no absolute meaning and are only used for ordering.
//!
//! Disliked recipes are excluded before scoring rather than penalized, so a
//! dislike can never be outweighed by other sub-scores.

use crate::config::{MacroBalanceBounds, ScoreTier, ScoringConfig};
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tastydiet_core::errors::{AppError, AppResult};
use tastydiet_core::math::safe_ratio;
use tastydiet_core::models::{
    AverageGoals, DietPreference, FamilyMemberGoals, InventoryItem, Recipe, RecipeRating,
    WeeklyDietPreference,
};
use tracing::{debug, warn};

/// Which day's diet preference applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DaySelection {
    /// Plan for today
    #[default]
    Today,
    /// Plan for tomorrow
    Tomorrow,
}

impl DaySelection {
    /// Calendar date selected relative to `today`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `today` is the last representable date
    pub fn resolve(self, today: NaiveDate) -> AppResult<NaiveDate> {
        match self {
            Self::Today => Ok(today),
            Self::Tomorrow => today
                .checked_add_days(Days::new(1))
                .ok_or_else(|| AppError::invalid_input(format!("No day after {today}"))),
        }
    }
}

/// Points awarded by each sub-score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Liked bonus
    pub liked: u32,
    /// Macro balance against household goals
    pub macro_balance: u32,
    /// Ingredient availability
    pub inventory: u32,
    /// Veg / non-veg schedule match
    pub diet_preference: u32,
    /// Calorie closeness to household goal
    pub calorie_range: u32,
}

impl ScoreBreakdown {
    /// Sum of all sub-scores
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.liked + self.macro_balance + self.inventory + self.diet_preference + self.calorie_range
    }
}

/// Score of one recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeScore {
    /// Recipe scored
    pub recipe_id: i64,
    /// Total score
    pub total: u32,
    /// Per sub-score points
    pub breakdown: ScoreBreakdown,
}

/// Liked bonus
#[must_use]
pub const fn liked_score(recipe: &Recipe, config: &ScoringConfig) -> u32 {
    match recipe.rating {
        RecipeRating::Liked => config.liked_bonus,
        RecipeRating::Disliked | RecipeRating::Unrated => 0,
    }
}

fn within(bounds: &MacroBalanceBounds, protein: f64, carbs: f64, fat: f64) -> bool {
    protein < bounds.protein_g && carbs < bounds.carbs_g && fat < bounds.fat_g
}

/// Macro balance: per-100g macros scaled by member count against the
/// household's average goals
#[must_use]
pub fn macro_balance_score(
    recipe: &Recipe,
    members: &[FamilyMemberGoals],
    config: &ScoringConfig,
) -> u32 {
    if members.is_empty() {
        return 0;
    }
    let count = members.len() as f64;
    let avg = AverageGoals::of(members);
    let protein = recipe.protein_per_100g.mul_add(count, -avg.protein_g).abs();
    let carbs = recipe.carbs_per_100g.mul_add(count, -avg.carbs_g).abs();
    let fat = recipe.fat_per_100g.mul_add(count, -avg.fat_g).abs();

    if within(&config.macro_balance_tight, protein, carbs, fat) {
        config.macro_balance_tight.points
    } else if within(&config.macro_balance_loose, protein, carbs, fat) {
        config.macro_balance_loose.points
    } else {
        0
    }
}

/// Fraction of the recipe's ingredients found in the inventory (0 with no ingredients)
#[must_use]
pub fn inventory_coverage(recipe: &Recipe, inventory: &[InventoryItem]) -> f64 {
    let (total, available) = recipe.ingredient_names().fold((0_usize, 0_usize), |(t, a), name| {
        let found = inventory.iter().any(|item| item.name_matches(name));
        (t + 1, a + usize::from(found))
    });
    safe_ratio(available as f64, total as f64)
}

/// Inventory tier points: first tier whose threshold the coverage reaches
#[must_use]
pub fn inventory_score(recipe: &Recipe, inventory: &[InventoryItem], config: &ScoringConfig) -> u32 {
    let coverage = inventory_coverage(recipe, inventory);
    first_tier(&config.inventory_tiers, |tier| coverage >= tier.threshold)
}

/// Diet preference points for the recipe on `day`
#[must_use]
pub fn diet_preference_score(
    recipe: &Recipe,
    schedule: Option<&WeeklyDietPreference>,
    day: NaiveDate,
    config: &ScoringConfig,
) -> u32 {
    let Some(schedule) = schedule else {
        return 0;
    };
    match (schedule.for_weekday(day.weekday()), recipe.is_vegetarian) {
        (DietPreference::Veg, true) | (DietPreference::NonVeg, false) => config.diet_strict_match,
        (DietPreference::Mixed, _) => config.diet_mixed,
        (DietPreference::Veg, false) | (DietPreference::NonVeg, true) => 0,
    }
}

/// Calorie range: per-100g calories scaled by member count against the
/// average calorie goal, by relative deviation
#[must_use]
pub fn calorie_range_score(
    recipe: &Recipe,
    members: &[FamilyMemberGoals],
    config: &ScoringConfig,
) -> u32 {
    let avg = AverageGoals::of(members);
    if members.is_empty() || avg.calories <= 0.0 {
        return 0;
    }
    let scaled = recipe.calories_per_100g * members.len() as f64;
    let deviation = safe_ratio((scaled - avg.calories).abs(), avg.calories);
    first_tier(&config.calorie_tiers, |tier| deviation < tier.threshold)
}

fn first_tier(tiers: &[ScoreTier], matches: impl Fn(&ScoreTier) -> bool) -> u32 {
    tiers
        .iter()
        .find(|tier| matches(*tier))
        .map_or(0, |tier| tier.points)
}

/// Score one recipe
///
/// # Arguments
/// * `recipe` - Candidate recipe
/// * `members` - Household goals
/// * `inventory` - Pantry contents
/// * `schedule` - Weekly veg / non-veg schedule, if the household set one
/// * `day` - Date the meal is for
/// * `config` - Point values and tiers
///
/// # Errors
///
/// Returns `InvalidRecipeData` if any nutrient value is negative or not finite
pub fn score_recipe(
    recipe: &Recipe,
    members: &[FamilyMemberGoals],
    inventory: &[InventoryItem],
    schedule: Option<&WeeklyDietPreference>,
    day: NaiveDate,
    config: &ScoringConfig,
) -> AppResult<RecipeScore> {
    recipe.validate_nutrients()?;

    let breakdown = ScoreBreakdown {
        liked: liked_score(recipe, config),
        macro_balance: macro_balance_score(recipe, members, config),
        inventory: inventory_score(recipe, inventory, config),
        diet_preference: diet_preference_score(recipe, schedule, day, config),
        calorie_range: calorie_range_score(recipe, members, config),
    };

    Ok(RecipeScore {
        recipe_id: recipe.id,
        total: breakdown.total(),
        breakdown,
    })
}

/// Inputs for a ranking run
#[derive(Debug, Clone)]
pub struct SuggestionRequest<'a> {
    /// Candidate recipes
    pub recipes: &'a [Recipe],
    /// Household goals
    pub members: &'a [FamilyMemberGoals],
    /// Pantry contents
    pub inventory: &'a [InventoryItem],
    /// Weekly veg / non-veg schedule
    pub schedule: Option<&'a WeeklyDietPreference>,
    /// Caller's current local date
    pub today: NaiveDate,
    /// Plan for today or tomorrow
    pub day: DaySelection,
    /// Recipe IDs the caller wants excluded
    pub excluded_ids: HashSet<i64>,
    /// Recipe IDs suggested recently
    pub recently_suggested: HashSet<i64>,
}

impl<'a> SuggestionRequest<'a> {
    /// Request for `today` with no inventory, schedule, or exclusions
    #[must_use]
    pub fn new(recipes: &'a [Recipe], members: &'a [FamilyMemberGoals], today: NaiveDate) -> Self {
        Self {
            recipes,
            members,
            inventory: &[],
            schedule: None,
            today,
            day: DaySelection::Today,
            excluded_ids: HashSet::new(),
            recently_suggested: HashSet::new(),
        }
    }

    /// Use this pantry
    #[must_use]
    pub fn with_inventory(mut self, inventory: &'a [InventoryItem]) -> Self {
        self.inventory = inventory;
        self
    }

    /// Use this weekly schedule
    #[must_use]
    pub fn with_schedule(mut self, schedule: &'a WeeklyDietPreference) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Plan for today or tomorrow
    #[must_use]
    pub fn for_day(mut self, day: DaySelection) -> Self {
        self.day = day;
        self
    }

    /// Exclude these recipe IDs
    #[must_use]
    pub fn excluding(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.excluded_ids.extend(ids);
        self
    }

    /// Skip recipes suggested recently
    #[must_use]
    pub fn with_recently_suggested(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.recently_suggested.extend(ids);
        self
    }
}

/// A recipe that survived filtering, with its score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecipe {
    /// The recipe
    pub recipe: Recipe,
    /// Total score
    pub score: u32,
    /// Per sub-score points
    pub breakdown: ScoreBreakdown,
}

/// Rank recipes for the household
///
/// Excluded, recently suggested, and disliked recipes are dropped before
/// scoring. A recipe that fails scoring is logged and skipped. Recipes
/// scoring 0 are dropped. Results are ordered by score descending, then by
/// recipe id, and truncated to `top_n`.
///
/// # Errors
///
/// Returns `InvalidInput` only if the selected day cannot be resolved
pub fn suggest_recipes(
    request: &SuggestionRequest<'_>,
    config: &ScoringConfig,
) -> AppResult<Vec<RankedRecipe>> {
    if request.members.is_empty() || request.recipes.is_empty() {
        return Ok(Vec::new());
    }
    let day = request.day.resolve(request.today)?;

    let mut ranked: Vec<RankedRecipe> = request
        .recipes
        .iter()
        .filter(|r| !request.excluded_ids.contains(&r.id))
        .filter(|r| !request.recently_suggested.contains(&r.id))
        .filter(|r| r.rating != RecipeRating::Disliked)
        .filter_map(|recipe| {
            match score_recipe(
                recipe,
                request.members,
                request.inventory,
                request.schedule,
                day,
                config,
            ) {
                Ok(score) => Some((recipe, score)),
                Err(e) => {
                    warn!(recipe_id = recipe.id, error = %e, "Skipping recipe that failed scoring");
                    None
                }
            }
        })
        .filter(|(_, score)| score.total > 0)
        .map(|(recipe, score)| RankedRecipe {
            recipe: recipe.clone(),
            score: score.total,
            breakdown: score.breakdown,
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score).then(a.recipe.id.cmp(&b.recipe.id)));
    ranked.truncate(config.top_n);

    debug!(
        candidates = request.recipes.len(),
        returned = ranked.len(),
        %day,
        "Ranked recipes"
    );
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use tastydiet_core::ErrorCode;

    fn recipe(id: i64, calories: f64, vegetarian: bool) -> Recipe {
        Recipe {
            id,
            name: format!("recipe {id}"),
            category: "Main Course".into(),
            cuisine: "Indian".into(),
            calories_per_100g: calories,
            protein_per_100g: 10.0,
            carbs_per_100g: 20.0,
            fat_per_100g: 5.0,
            fiber_per_100g: 2.0,
            is_vegetarian: vegetarian,
            ingredients: "rice, dal, onion".into(),
            rating: RecipeRating::Unrated,
        }
    }

    fn member(calories: f64) -> FamilyMemberGoals {
        FamilyMemberGoals {
            name: "member".into(),
            calorie_goal: calories,
            protein_goal_g: 20.0,
            carbs_goal_g: 40.0,
            fat_goal_g: 10.0,
        }
    }

    #[test]
    fn test_day_selection_resolves_tomorrow() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(DaySelection::Today.resolve(today).unwrap(), today);
        assert_eq!(
            DaySelection::Tomorrow.resolve(today).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_macro_balance_tiers() {
        let config = ScoringConfig::default();
        let members = [member(500.0), member(500.0)];
        // scaled: protein 20, carbs 40, fat 10 vs avg 20/40/10
        assert_eq!(macro_balance_score(&recipe(1, 250.0, true), &members, &config), 20);

        let mut loose = recipe(2, 250.0, true);
        loose.protein_per_100g = 17.0; // 34 vs 20
        assert_eq!(macro_balance_score(&loose, &members, &config), 10);

        loose.protein_per_100g = 30.0; // 60 vs 20
        assert_eq!(macro_balance_score(&loose, &members, &config), 0);
    }

    #[test]
    fn test_calorie_range_tiers() {
        let config = ScoringConfig::default();
        let members = [member(1000.0)];
        assert_eq!(calorie_range_score(&recipe(1, 950.0, true), &members, &config), 10);
        assert_eq!(calorie_range_score(&recipe(1, 850.0, true), &members, &config), 5);
        assert_eq!(calorie_range_score(&recipe(1, 750.0, true), &members, &config), 2);
        assert_eq!(calorie_range_score(&recipe(1, 600.0, true), &members, &config), 0);
        assert_eq!(calorie_range_score(&recipe(1, 950.0, true), &[member(0.0)], &config), 0);
    }

    fn pantry(names: &[&str]) -> Vec<InventoryItem> {
        names
            .iter()
            .map(|n| InventoryItem::new(*n, 1.0, "kg", "Staples"))
            .collect()
    }

    #[test]
    fn test_inventory_tiers() {
        let config = ScoringConfig::default();
        let dish = recipe(1, 100.0, true);
        assert_eq!(inventory_score(&dish, &pantry(&["Basmati Rice", "Dal", "Onion"]), &config), 5);
        assert_eq!(inventory_score(&dish, &pantry(&["rice", "dal"]), &config), 3);
        assert_eq!(inventory_score(&dish, &pantry(&["rice"]), &config), 0);

        let mut bare = dish;
        bare.ingredients = String::new();
        assert_eq!(inventory_score(&bare, &pantry(&["rice"]), &config), 0);
    }

    #[test]
    fn test_diet_preference_points() {
        let config = ScoringConfig::default();
        // 2024-06-03 is a Monday
        let monday = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let week = WeeklyDietPreference::uniform(DietPreference::Veg)
            .with_day(Weekday::Tue, DietPreference::Mixed);

        assert_eq!(
            diet_preference_score(&recipe(1, 100.0, true), Some(&week), monday, &config),
            15
        );
        assert_eq!(
            diet_preference_score(&recipe(1, 100.0, false), Some(&week), monday, &config),
            0
        );
        let tuesday = DaySelection::Tomorrow.resolve(monday).unwrap();
        assert_eq!(
            diet_preference_score(&recipe(1, 100.0, false), Some(&week), tuesday, &config),
            5
        );
        assert_eq!(
            diet_preference_score(&recipe(1, 100.0, true), None, monday, &config),
            0
        );
    }

    #[test]
    fn test_score_rejects_invalid_nutrients() {
        let mut bad = recipe(9, 100.0, true);
        bad.calories_per_100g = f64::INFINITY;
        let err = score_recipe(
            &bad,
            &[member(1000.0)],
            &[],
            None,
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            &ScoringConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRecipeData);
    }
}
