mod common;

use ecowell::core::editing;
use ecowell::core::error::CoreError;
use ecowell::models::{DayMeals, MealPlan, MealType, PlanStatus};

fn day(n: u8, breakfast_cal: i64) -> DayMeals {
    let mut d = DayMeals {
        day: n,
        date: common::date(2026, 3, 1) + chrono::Duration::days(i64::from(n) - 1),
        breakfast: common::sample_meal("Toast", breakfast_cal, 0.5),
        lunch: common::sample_meal("Soup", 400, 0.4),
        dinner: common::sample_meal("Curry", 500, 0.35),
        total_calories: 0,
        total_carbon: 0.0,
    };
    d.recompute_totals();
    d
}

fn completed_plan(days: u8) -> MealPlan {
    let mut plan = MealPlan::new(1, Some("balanced".into()), Some(2000));
    plan.status = PlanStatus::Completed;
    plan.meals = (1..=days).map(|n| day(n, 300)).collect();
    plan
}

// ── swap_meal ───────────────────────────────────────────────────────────────

#[test]
fn test_swap_meal_replaces_slot_and_recomputes_totals() {
    let mut plan = completed_plan(7);
    let replacement = common::sample_meal("Omelette", 350, 0.25);

    editing::swap_meal(&mut plan, 0, MealType::Breakfast, replacement).unwrap();

    let day = &plan.meals[0];
    assert_eq!(day.breakfast.name, "Omelette");
    assert_eq!(day.total_calories, 350 + 400 + 500);
    assert_eq!(day.total_carbon, 1.0); // 0.25 + 0.4 + 0.35
    assert!(plan.customized);
    assert!(plan.edited_at.is_some());
}

#[test]
fn test_swap_meal_snapshots_originals_once() {
    let mut plan = completed_plan(7);
    let before = plan.meals.clone();

    editing::swap_meal(
        &mut plan,
        0,
        MealType::Breakfast,
        common::sample_meal("First", 350, 0.3),
    )
    .unwrap();
    assert_eq!(plan.original_meals.as_ref().unwrap(), &before);

    // A second edit must not overwrite the snapshot.
    editing::swap_meal(
        &mut plan,
        1,
        MealType::Lunch,
        common::sample_meal("Second", 450, 0.3),
    )
    .unwrap();
    assert_eq!(plan.original_meals.as_ref().unwrap(), &before);
}

#[test]
fn test_swap_meal_rejects_out_of_range_day() {
    let mut plan = completed_plan(7);
    let err = editing::swap_meal(
        &mut plan,
        7,
        MealType::Dinner,
        common::sample_meal("X", 100, 0.1),
    )
    .unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));
}

#[test]
fn test_swap_meal_rejects_empty_plan() {
    let mut plan = MealPlan::new(1, None, None);
    let err = editing::swap_meal(
        &mut plan,
        0,
        MealType::Breakfast,
        common::sample_meal("X", 100, 0.1),
    )
    .unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));
    assert!(!plan.customized);
}

// ── replace_meals ───────────────────────────────────────────────────────────

#[test]
fn test_replace_meals_requires_exactly_seven_days() {
    let mut plan = completed_plan(7);
    let short: Vec<DayMeals> = (1..=5).map(|n| day(n, 300)).collect();
    let err = editing::replace_meals(&mut plan, short).unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));
}

#[test]
fn test_replace_meals_swaps_whole_week() {
    let mut plan = completed_plan(7);
    let before = plan.meals.clone();
    let new_week: Vec<DayMeals> = (1..=7).map(|n| day(n, 999)).collect();

    editing::replace_meals(&mut plan, new_week.clone()).unwrap();

    assert_eq!(plan.meals, new_week);
    assert_eq!(plan.original_meals.as_ref().unwrap(), &before);
    assert!(plan.customized);
}
