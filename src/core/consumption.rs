//! Marking meal slots consumed or not, and the per-day status readout.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::core::error::CoreError;
use crate::db::Database;
use crate::models::{MealConsumption, MealType};

/// Mark a meal slot consumed, creating the record if the day has none yet.
pub fn mark_consumed(
    db: &Database,
    user_id: i64,
    date: NaiveDate,
    meal_type: MealType,
    meal_plan_id: Option<&str>,
) -> Result<MealConsumption> {
    let mut record = db
        .get_consumption(user_id, date, meal_type)?
        .unwrap_or_else(|| MealConsumption::new(user_id, date, meal_type));

    record.consumed = true;
    record.consumed_at = Some(Utc::now());
    if let Some(plan_id) = meal_plan_id {
        record.meal_plan_id = Some(plan_id.to_string());
    }

    db.upsert_consumption(&record)?;
    Ok(record)
}

/// Clear the consumed flag. Unlike marking, this requires the record to
/// already exist.
pub fn unmark_consumed(
    db: &Database,
    user_id: i64,
    date: NaiveDate,
    meal_type: MealType,
) -> Result<MealConsumption> {
    let mut record = db
        .get_consumption(user_id, date, meal_type)?
        .ok_or_else(|| {
            CoreError::NotFound(format!("no {} consumption recorded for {}", meal_type, date))
        })?;

    record.consumed = false;
    record.consumed_at = None;

    db.upsert_consumption(&record)?;
    Ok(record)
}

#[derive(Debug, Serialize)]
pub struct DayStatus {
    pub date: NaiveDate,
    pub breakfast: bool,
    pub lunch: bool,
    pub dinner: bool,
    pub total_consumed: i64,
    pub total_meals: i64,
}

/// Per-slot consumption booleans for one day.
pub fn day_status(db: &Database, user_id: i64, date: NaiveDate) -> Result<DayStatus> {
    let consumptions = db.consumptions_on(user_id, date)?;

    let consumed =
        |t: MealType| consumptions.iter().any(|m| m.meal_type == t && m.consumed);

    let breakfast = consumed(MealType::Breakfast);
    let lunch = consumed(MealType::Lunch);
    let dinner = consumed(MealType::Dinner);

    Ok(DayStatus {
        date,
        breakfast,
        lunch,
        dinner,
        total_consumed: [breakfast, lunch, dinner].iter().filter(|b| **b).count() as i64,
        total_meals: 3,
    })
}
