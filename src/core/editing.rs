//! Single-meal swaps and bulk edits on a stored plan.

use chrono::Utc;

use crate::core::error::CoreError;
use crate::models::{DayMeals, MealDetail, MealPlan, MealType};

/// Before the first edit of a plan, keep a snapshot of the untouched meals.
/// Subsequent edits leave the snapshot alone.
fn snapshot_once(plan: &mut MealPlan) {
    if !plan.customized && !plan.meals.is_empty() {
        plan.original_meals = Some(plan.meals.clone());
    }
}

/// Replace one meal slot on one day. `day_index` is zero-based (0..=6).
/// Recomputes that day's totals from its three slots and marks the plan
/// customized.
pub fn swap_meal(
    plan: &mut MealPlan,
    day_index: usize,
    meal_type: MealType,
    new_meal: MealDetail,
) -> Result<(), CoreError> {
    if plan.meals.is_empty() {
        return Err(CoreError::Validation(
            "meal plan has no meals to edit".to_string(),
        ));
    }
    if day_index >= plan.meals.len() {
        return Err(CoreError::Validation(format!(
            "day index {} out of range (0-{})",
            day_index,
            plan.meals.len() - 1
        )));
    }

    snapshot_once(plan);

    let day = &mut plan.meals[day_index];
    *day.meal_mut(meal_type) = new_meal;
    day.recompute_totals();

    plan.customized = true;
    plan.edited_at = Some(Utc::now());
    Ok(())
}

/// Replace the whole week at once. The caller supplies complete days
/// including totals; no per-day recompute happens here.
pub fn replace_meals(plan: &mut MealPlan, meals: Vec<DayMeals>) -> Result<(), CoreError> {
    if meals.len() != 7 {
        return Err(CoreError::Validation(format!(
            "expected 7 days of meals, got {}",
            meals.len()
        )));
    }

    snapshot_once(plan);

    plan.meals = meals;
    plan.customized = true;
    plan.edited_at = Some(Utc::now());
    Ok(())
}
