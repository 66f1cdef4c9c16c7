//! Daily step/activity upsert with the calorie estimation rules.

use anyhow::Result;
use chrono::NaiveDate;

use crate::core::error::CoreError;
use crate::db::Database;
use crate::models::ActivityRecord;

/// Activity types tracked by duration instead of steps.
const TIME_BASED: [&str; 5] = ["cycling", "gym", "swimming", "football", "other_sports"];

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub struct StepsUpdate {
    pub record: ActivityRecord,
    pub message: String,
}

/// Create or update the single activity record for (user, date).
///
/// Time-based activities zero out steps and estimate calories from duration
/// (7 kcal/min); step-based entries estimate 0.04 kcal/step.
pub fn add_steps(
    db: &Database,
    user_id: i64,
    date: NaiveDate,
    steps: i64,
    activity_type: Option<&str>,
    duration_minutes: Option<f64>,
) -> Result<StepsUpdate> {
    if steps < 0 {
        return Err(CoreError::Validation(format!("steps must be >= 0, got {}", steps)).into());
    }
    if let Some(d) = duration_minutes
        && d < 0.0
    {
        return Err(CoreError::Validation(format!("duration must be >= 0, got {}", d)).into());
    }

    let is_time_based = activity_type.is_some_and(|t| TIME_BASED.contains(&t));
    let duration = duration_minutes.unwrap_or(0.0);

    let mut record = db
        .get_activity(user_id, date)?
        .unwrap_or_else(|| ActivityRecord::new(user_id, date));

    record.activity_type = activity_type.map(String::from);

    let message = if is_time_based && duration > 0.0 {
        record.steps = 0;
        record.duration_minutes = duration;
        record.calories_burned = round2(duration * 7.0);
        format!(
            "{} minutes of {}",
            duration,
            activity_type.unwrap_or("activity")
        )
    } else {
        record.steps = steps;
        record.duration_minutes = duration;
        record.calories_burned = round2(steps as f64 * 0.04);
        format!("{} steps", steps)
    };

    db.upsert_activity(&record)?;

    Ok(StepsUpdate { record, message })
}
