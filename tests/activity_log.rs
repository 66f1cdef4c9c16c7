mod common;

use ecowell::core::{activity, consumption};
use ecowell::models::MealType;

// ── add_steps ───────────────────────────────────────────────────────────────

#[test]
fn test_add_steps_estimates_calories_from_steps() {
    let (_dir, db) = common::setup_db();
    let date = common::date(2026, 3, 10);

    let update = activity::add_steps(&db, 1, date, 8000, Some("walking"), None).unwrap();
    assert_eq!(update.record.steps, 8000);
    assert_eq!(update.record.calories_burned, 320.0);
    assert!(update.message.contains("8000 steps"));
}

#[test]
fn test_add_steps_time_based_activity_zeroes_steps() {
    let (_dir, db) = common::setup_db();
    let date = common::date(2026, 3, 10);

    let update = activity::add_steps(&db, 1, date, 8000, Some("cycling"), Some(30.0)).unwrap();
    assert_eq!(update.record.steps, 0);
    assert_eq!(update.record.duration_minutes, 30.0);
    assert_eq!(update.record.calories_burned, 210.0); // 30 * 7
    assert!(update.message.contains("cycling"));
}

#[test]
fn test_add_steps_time_based_without_duration_uses_step_rule() {
    // A time-based type with no duration falls back to step counting.
    let (_dir, db) = common::setup_db();
    let date = common::date(2026, 3, 10);

    let update = activity::add_steps(&db, 1, date, 5000, Some("gym"), None).unwrap();
    assert_eq!(update.record.steps, 5000);
    assert_eq!(update.record.calories_burned, 200.0);
}

#[test]
fn test_add_steps_upserts_single_record_per_day() {
    let (_dir, db) = common::setup_db();
    let date = common::date(2026, 3, 10);

    activity::add_steps(&db, 1, date, 3000, None, None).unwrap();
    activity::add_steps(&db, 1, date, 9000, None, None).unwrap();

    let record = db.get_activity(1, date).unwrap().unwrap();
    assert_eq!(record.steps, 9000);
    assert_eq!(record.calories_burned, 360.0);
}

#[test]
fn test_add_steps_rejects_negative_values() {
    let (_dir, db) = common::setup_db();
    let date = common::date(2026, 3, 10);

    assert!(activity::add_steps(&db, 1, date, -1, None, None).is_err());
    assert!(activity::add_steps(&db, 1, date, 100, None, Some(-5.0)).is_err());
}

#[test]
fn test_add_steps_is_per_user() {
    let (_dir, db) = common::setup_db();
    let date = common::date(2026, 3, 10);

    activity::add_steps(&db, 1, date, 3000, None, None).unwrap();
    activity::add_steps(&db, 2, date, 7000, None, None).unwrap();

    assert_eq!(db.get_activity(1, date).unwrap().unwrap().steps, 3000);
    assert_eq!(db.get_activity(2, date).unwrap().unwrap().steps, 7000);
}

// ── meal consumption ────────────────────────────────────────────────────────

#[test]
fn test_mark_consumed_creates_record() {
    let (_dir, db) = common::setup_db();
    let date = common::date(2026, 3, 10);

    let record = consumption::mark_consumed(&db, 1, date, MealType::Lunch, None).unwrap();
    assert!(record.consumed);
    assert!(record.consumed_at.is_some());

    let status = consumption::day_status(&db, 1, date).unwrap();
    assert!(status.lunch);
    assert!(!status.breakfast);
    assert_eq!(status.total_consumed, 1);
    assert_eq!(status.total_meals, 3);
}

#[test]
fn test_mark_consumed_attaches_plan_id() {
    let (_dir, db) = common::setup_db();
    let date = common::date(2026, 3, 10);

    let record =
        consumption::mark_consumed(&db, 1, date, MealType::Dinner, Some("plan-123")).unwrap();
    assert_eq!(record.meal_plan_id.as_deref(), Some("plan-123"));
}

#[test]
fn test_mark_consumed_is_idempotent_per_slot() {
    let (_dir, db) = common::setup_db();
    let date = common::date(2026, 3, 10);

    consumption::mark_consumed(&db, 1, date, MealType::Breakfast, None).unwrap();
    consumption::mark_consumed(&db, 1, date, MealType::Breakfast, None).unwrap();

    let all = db.consumptions_on(1, date).unwrap();
    assert_eq!(all.len(), 1);
}

#[test]
fn test_unmark_consumed_clears_flag() {
    let (_dir, db) = common::setup_db();
    let date = common::date(2026, 3, 10);

    consumption::mark_consumed(&db, 1, date, MealType::Breakfast, None).unwrap();
    let record = consumption::unmark_consumed(&db, 1, date, MealType::Breakfast).unwrap();
    assert!(!record.consumed);
    assert!(record.consumed_at.is_none());

    let status = consumption::day_status(&db, 1, date).unwrap();
    assert_eq!(status.total_consumed, 0);
}

#[test]
fn test_unmark_consumed_missing_record_is_not_found() {
    let (_dir, db) = common::setup_db();
    let date = common::date(2026, 3, 10);

    let err = consumption::unmark_consumed(&db, 1, date, MealType::Dinner).unwrap_err();
    let core = err.downcast_ref::<ecowell::core::error::CoreError>().unwrap();
    assert_eq!(core.code(), "not_found");
}
