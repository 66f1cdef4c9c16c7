mod common;

use chrono::Duration;
use ecowell::core::streaks;
use ecowell::models::MealType;

// ── activity streak ─────────────────────────────────────────────────────────

#[test]
fn test_activity_streak_empty_history_is_zero() {
    let (_dir, db) = common::setup_db();
    let today = common::date(2026, 3, 10);
    assert_eq!(streaks::activity_streak(&db, 1, today).unwrap(), 0);
}

#[test]
fn test_activity_streak_counts_consecutive_days() {
    let (_dir, db) = common::setup_db();
    let today = common::date(2026, 3, 10);
    for offset in 0..3 {
        db.upsert_activity(&common::activity_on(1, today - Duration::days(offset), 2000))
            .unwrap();
    }
    assert_eq!(streaks::activity_streak(&db, 1, today).unwrap(), 3);
}

#[test]
fn test_activity_streak_survives_missing_today() {
    // Newest entry yesterday still counts; the streak is not broken until
    // a full day is skipped.
    let (_dir, db) = common::setup_db();
    let today = common::date(2026, 3, 10);
    db.upsert_activity(&common::activity_on(1, today - Duration::days(1), 2000))
        .unwrap();
    db.upsert_activity(&common::activity_on(1, today - Duration::days(2), 2000))
        .unwrap();
    assert_eq!(streaks::activity_streak(&db, 1, today).unwrap(), 2);
}

#[test]
fn test_activity_streak_broken_by_gap() {
    let (_dir, db) = common::setup_db();
    let today = common::date(2026, 3, 10);
    db.upsert_activity(&common::activity_on(1, today - Duration::days(2), 2000))
        .unwrap();
    db.upsert_activity(&common::activity_on(1, today - Duration::days(3), 2000))
        .unwrap();
    assert_eq!(streaks::activity_streak(&db, 1, today).unwrap(), 0);
}

#[test]
fn test_activity_streak_stops_at_interior_gap() {
    let (_dir, db) = common::setup_db();
    let today = common::date(2026, 3, 10);
    for offset in [0, 1, 3, 4] {
        db.upsert_activity(&common::activity_on(1, today - Duration::days(offset), 2000))
            .unwrap();
    }
    assert_eq!(streaks::activity_streak(&db, 1, today).unwrap(), 2);
}

// ── combined streak ─────────────────────────────────────────────────────────

#[test]
fn test_combined_streak_unions_activity_and_full_meal_days() {
    let (_dir, db) = common::setup_db();
    let today = common::date(2026, 3, 10);

    // Activity today and two days ago; all three meals consumed yesterday.
    db.upsert_activity(&common::activity_on(1, today, 2000))
        .unwrap();
    db.upsert_activity(&common::activity_on(1, today - Duration::days(2), 2000))
        .unwrap();
    for meal_type in MealType::ALL {
        db.upsert_consumption(&common::consumed_meal(1, today - Duration::days(1), meal_type))
            .unwrap();
    }

    assert_eq!(streaks::combined_streak(&db, 1, today).unwrap(), 3);
}

#[test]
fn test_combined_streak_partial_meal_day_does_not_count() {
    let (_dir, db) = common::setup_db();
    let today = common::date(2026, 3, 10);

    db.upsert_activity(&common::activity_on(1, today, 2000))
        .unwrap();
    // Only two of three meals yesterday.
    db.upsert_consumption(&common::consumed_meal(1, today - Duration::days(1), MealType::Breakfast))
        .unwrap();
    db.upsert_consumption(&common::consumed_meal(1, today - Duration::days(1), MealType::Lunch))
        .unwrap();

    assert_eq!(streaks::combined_streak(&db, 1, today).unwrap(), 1);
}

// ── qualifying activity streak ──────────────────────────────────────────────

#[test]
fn test_qualifying_streak_needs_step_or_duration_threshold() {
    let (_dir, db) = common::setup_db();
    let today = common::date(2026, 3, 10);

    db.upsert_activity(&common::activity_on(1, today, 6000))
        .unwrap();
    let mut timed = common::activity_on(1, today - Duration::days(1), 0);
    timed.duration_minutes = 30.0;
    db.upsert_activity(&timed).unwrap();
    // 3000 steps and no duration does not qualify.
    db.upsert_activity(&common::activity_on(1, today - Duration::days(2), 3000))
        .unwrap();

    assert_eq!(
        streaks::qualifying_activity_streak(&db, 1, today).unwrap(),
        2
    );
}

#[test]
fn test_qualifying_streak_requires_today() {
    // The strict walk starts at today; a qualifying run ending yesterday
    // scores zero.
    let (_dir, db) = common::setup_db();
    let today = common::date(2026, 3, 10);
    db.upsert_activity(&common::activity_on(1, today - Duration::days(1), 8000))
        .unwrap();
    assert_eq!(
        streaks::qualifying_activity_streak(&db, 1, today).unwrap(),
        0
    );
}

// ── consistency score ───────────────────────────────────────────────────────

#[test]
fn test_consistency_score_full_week_is_100() {
    let today = common::date(2026, 3, 10);
    let activities: Vec<_> = (0..7)
        .map(|o| common::activity_on(1, today - Duration::days(o), 12_000))
        .collect();
    let meals: Vec<_> = (0..7)
        .flat_map(|o| {
            MealType::ALL.map(|t| common::consumed_meal(1, today - Duration::days(o), t))
        })
        .collect();

    assert_eq!(streaks::consistency_score(&activities, &meals), 100);
}

#[test]
fn test_consistency_score_omits_empty_components() {
    // With activity on all 7 days at goal but zero meals, the meal
    // component is omitted, not scored as zero: 30 + 30, never scaled up.
    let today = common::date(2026, 3, 10);
    let activities: Vec<_> = (0..7)
        .map(|o| common::activity_on(1, today - Duration::days(o), 12_000))
        .collect();

    assert_eq!(streaks::consistency_score(&activities, &[]), 60);
}

#[test]
fn test_consistency_score_meals_only() {
    let today = common::date(2026, 3, 10);
    let meals: Vec<_> = (0..7)
        .flat_map(|o| {
            MealType::ALL.map(|t| common::consumed_meal(1, today - Duration::days(o), t))
        })
        .collect();

    assert_eq!(streaks::consistency_score(&[], &meals), 40);
}

#[test]
fn test_consistency_score_truncates_fractions() {
    // 3 activity days below goal: (3/7*100) as i64 = 42; 42 * 0.3 = 12.6;
    // 10 meals: (10/21*100) as i64 = 47; 47 * 0.4 = 18.8; total 31.4 -> 31.
    let today = common::date(2026, 3, 10);
    let activities: Vec<_> = (0..3)
        .map(|o| common::activity_on(1, today - Duration::days(o), 2000))
        .collect();
    let mut meals = Vec::new();
    for o in 0..3 {
        for t in MealType::ALL {
            meals.push(common::consumed_meal(1, today - Duration::days(o), t));
        }
    }
    meals.push(common::consumed_meal(1, today - Duration::days(3), MealType::Breakfast));

    assert_eq!(streaks::consistency_score(&activities, &meals), 31);
}

#[test]
fn test_consistency_score_empty_is_zero() {
    assert_eq!(streaks::consistency_score(&[], &[]), 0);
}
