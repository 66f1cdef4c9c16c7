//! Consecutive-day streaks and the weighted consistency score.

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

use crate::db::Database;
use crate::models::{ActivityRecord, MealConsumption};

/// Daily step goal shared by streaks, consistency and insights.
pub const STEP_GOAL: i64 = 10_000;

/// Walk a descending list of qualifying dates and count the consecutive run
/// ending at or adjacent to `today`. A newest date older than yesterday
/// means the streak is already broken.
fn consecutive_run(dates_desc: &[NaiveDate], today: NaiveDate) -> u32 {
    let Some(&newest) = dates_desc.first() else {
        return 0;
    };
    if newest < today - Duration::days(1) {
        return 0;
    }

    let mut streak = 1u32;
    let mut current = newest;
    for &d in &dates_desc[1..] {
        if d == current - Duration::days(1) {
            streak += 1;
            current = d;
        } else {
            break;
        }
    }
    streak
}

/// Consecutive days with any activity record, ending at or adjacent to
/// `today`.
pub fn activity_streak(db: &Database, user_id: i64, today: NaiveDate) -> Result<u32> {
    let dates = db.activity_dates_desc(user_id)?;
    Ok(consecutive_run(&dates, today))
}

/// Consecutive days where the user either logged activity or consumed all
/// three meals. The two date sets are unioned before the walk.
pub fn combined_streak(db: &Database, user_id: i64, today: NaiveDate) -> Result<u32> {
    let mut qualifying: BTreeSet<NaiveDate> = db.activity_dates_desc(user_id)?.into_iter().collect();
    qualifying.extend(db.complete_meal_dates(user_id)?);

    let dates_desc: Vec<NaiveDate> = qualifying.into_iter().rev().collect();
    Ok(consecutive_run(&dates_desc, today))
}

/// Stricter activity streak used by the weekly insights: a day only counts
/// when steps reached 5000 or any duration was logged. Walks back day by
/// day from `today`, at most 30 days.
pub fn qualifying_activity_streak(db: &Database, user_id: i64, today: NaiveDate) -> Result<u32> {
    let mut streak = 0u32;
    let mut current = today;

    for _ in 0..30 {
        let qualifies = match db.get_activity(user_id, current)? {
            Some(a) => a.steps >= 5000 || a.duration_minutes > 0.0,
            None => false,
        };
        if !qualifies {
            break;
        }
        streak += 1;
        current -= Duration::days(1);
    }

    Ok(streak)
}

/// Weighted consistency blend over the last 7 days: activity days (30%),
/// meals logged out of 21 (40%), step-goal days (30%). A component whose
/// count is zero is omitted from the sum entirely rather than added as
/// zero, so the effective denominator shrinks with missing components.
/// Downstream consumers depend on that numeric scale; do not normalize.
pub fn consistency_score(activities: &[ActivityRecord], meals: &[MealConsumption]) -> i64 {
    let mut total = 0.0f64;

    let activity_days = activities.len() as i64;
    if activity_days > 0 {
        let sub = ((activity_days as f64 / 7.0) * 100.0) as i64;
        total += sub.min(100) as f64 * 0.3;
    }

    let meals_logged = meals.iter().filter(|m| m.consumed).count() as i64;
    if meals_logged > 0 {
        let sub = ((meals_logged as f64 / 21.0) * 100.0) as i64;
        total += sub.min(100) as f64 * 0.4;
    }

    let goal_days = activities.iter().filter(|a| a.steps >= STEP_GOAL).count() as i64;
    if goal_days > 0 {
        let sub = ((goal_days as f64 / 7.0) * 100.0) as i64;
        total += sub.min(100) as f64 * 0.3;
    }

    total as i64
}
