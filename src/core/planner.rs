//! Randomized, constraint-filtered selection of a 7-day meal schedule.
//!
//! Selection is a uniform draw per slot with a bounded redraw loop for
//! ingredient exclusions. Exhausting the redraw budget keeps the last draw:
//! a full week is always returned, exclusions are best effort. The calorie
//! target is carried on the plan as metadata only and never constrains the
//! draw.

use chrono::{Duration, Local, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::catalog;
use crate::models::{DayMeals, MealDetail, MealType};

/// Redraw budget shared by the three slots of one day.
const MAX_REDRAW_ROUNDS: u32 = 10;

/// Generate a 7-day plan starting today.
pub fn generate_week(
    dietary_preference: &str,
    exclude_ingredients: &[String],
    rng: &mut impl Rng,
) -> Vec<DayMeals> {
    generate_week_from(
        Local::now().date_naive(),
        dietary_preference,
        exclude_ingredients,
        rng,
    )
}

/// Generate a 7-day plan with an explicit start date. Always returns exactly
/// seven days, numbered 1..=7, on consecutive dates.
pub fn generate_week_from(
    start_date: NaiveDate,
    dietary_preference: &str,
    exclude_ingredients: &[String],
    rng: &mut impl Rng,
) -> Vec<DayMeals> {
    let options = catalog::for_diet(dietary_preference);
    let excludes: Vec<String> = exclude_ingredients
        .iter()
        .map(|e| e.to_lowercase())
        .collect();

    let mut week = Vec::with_capacity(7);
    for day in 1u8..=7 {
        let date = start_date + Duration::days(i64::from(day) - 1);

        let mut breakfast = draw(options.slot(MealType::Breakfast), rng);
        let mut lunch = draw(options.slot(MealType::Lunch), rng);
        let mut dinner = draw(options.slot(MealType::Dinner), rng);

        if !excludes.is_empty() {
            let mut rounds = 0;
            while rounds < MAX_REDRAW_ROUNDS
                && (!allowed(&breakfast, &excludes)
                    || !allowed(&lunch, &excludes)
                    || !allowed(&dinner, &excludes))
            {
                if !allowed(&breakfast, &excludes) {
                    breakfast = draw(options.slot(MealType::Breakfast), rng);
                }
                if !allowed(&lunch, &excludes) {
                    lunch = draw(options.slot(MealType::Lunch), rng);
                }
                if !allowed(&dinner, &excludes) {
                    dinner = draw(options.slot(MealType::Dinner), rng);
                }
                rounds += 1;
            }
        }

        let mut day_meals = DayMeals {
            day,
            date,
            breakfast,
            lunch,
            dinner,
            total_calories: 0,
            total_carbon: 0.0,
        };
        day_meals.recompute_totals();
        week.push(day_meals);
    }

    week
}

fn draw(candidates: &[MealDetail], rng: &mut impl Rng) -> MealDetail {
    candidates
        .choose(rng)
        .expect("catalog slots are never empty")
        .clone()
}

/// A meal passes when no excluded ingredient appears as a case-insensitive
/// substring of its space-joined ingredient list. `excludes` must already be
/// lowercased.
fn allowed(meal: &MealDetail, excludes: &[String]) -> bool {
    let haystack = meal.ingredients.join(" ").to_lowercase();
    !excludes.iter().any(|e| haystack.contains(e.as_str()))
}

/// Alternative candidates for a swap: the slot's catalog entries minus any
/// named exclusions (typically the meal currently in the slot).
pub fn alternatives(
    meal_type: MealType,
    dietary_preference: &str,
    exclude_names: &[String],
) -> Vec<MealDetail> {
    catalog::for_diet(dietary_preference)
        .slot(meal_type)
        .iter()
        .filter(|m| !exclude_names.iter().any(|n| n == &m.name))
        .cloned()
        .collect()
}
